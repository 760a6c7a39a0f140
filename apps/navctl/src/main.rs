use std::{
    cell::RefCell,
    fs,
    io::{self, Write},
    path::PathBuf,
    rc::Rc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::{
    command::{format_command, parse_command, parse_script},
    AppCommand, AppCoordinator, AppSnapshot,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Replays navigation commands and prints a JSON snapshot per step")]
struct Cli {
    #[arg(long, default_value = "warn")]
    log_filter: String,
    /// Pretty-print each snapshot instead of one JSON object per line.
    #[arg(long)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Each argument is one command, e.g. `navctl replay "push home" pop`.
    Replay {
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Reads commands from a file, one per line.
    Script { path: PathBuf },
}

#[derive(Debug, Serialize)]
struct StepReport {
    step: usize,
    command: String,
    events: Vec<&'static str>,
    snapshot: AppSnapshot,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_filter))
        .with_writer(io::stderr)
        .init();

    let commands = match cli.command {
        Command::Replay { commands } => commands
            .iter()
            .enumerate()
            .map(|(index, line)| {
                parse_command(line).with_context(|| format!("argument {}: `{line}`", index + 1))
            })
            .collect::<Result<Vec<_>>>()?,
        Command::Script { path } => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            parse_script(&raw).with_context(|| format!("invalid script {}", path.display()))?
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(commands, &mut out, cli.pretty)
}

fn run(commands: Vec<AppCommand>, out: &mut impl Write, pretty: bool) -> Result<()> {
    let mut coordinator = AppCoordinator::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let _subscription = coordinator.subscribe(move |event| sink.borrow_mut().push(event.kind()));

    for (index, command) in commands.into_iter().enumerate() {
        let text = format_command(&command);
        tracing::debug!(step = index + 1, command = %text, "replaying");
        coordinator.apply(command);

        let report = StepReport {
            step: index + 1,
            command: text,
            events: events.borrow_mut().drain(..).collect(),
            snapshot: coordinator.snapshot(),
        };
        if pretty {
            serde_json::to_writer_pretty(&mut *out, &report)?;
        } else {
            serde_json::to_writer(&mut *out, &report)?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
