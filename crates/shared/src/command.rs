//! Line-oriented command grammar used by `navctl` scripts and the GUI history log.
//!
//! ```text
//! push home | push detail <slug> | push settings
//! pop | root
//! sheet profile <handle> | sheet compose | dismiss-sheet
//! cover onboarding [step] | cover media <id> | dismiss-cover
//! ```
//!
//! Verbs and target names are case-insensitive. Arguments are single
//! whitespace-free tokens and keep their case, so a slug or handle containing
//! whitespace cannot be written in this grammar.

use navigation::NavigationCommand;

use crate::{
    domain::MediaId,
    error::{CommandParseError, ScriptError},
    routes::{AppCommand, AppCover, AppRoute, AppSheet},
};

pub fn parse_command(line: &str) -> Result<AppCommand, CommandParseError> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().ok_or(CommandParseError::Empty)?;

    let command = match verb.to_ascii_lowercase().as_str() {
        "push" => NavigationCommand::Push(parse_route(&mut tokens)?),
        "pop" => NavigationCommand::Pop,
        "root" | "pop-to-root" => NavigationCommand::PopToRoot,
        "sheet" => NavigationCommand::PresentSheet(parse_sheet(&mut tokens)?),
        "dismiss-sheet" => NavigationCommand::DismissSheet,
        "cover" => NavigationCommand::PresentFullScreenCover(parse_cover(&mut tokens)?),
        "dismiss-cover" => NavigationCommand::DismissFullScreenCover,
        _ => return Err(CommandParseError::UnknownVerb(verb.to_string())),
    };

    if let Some(extra) = tokens.next() {
        return Err(CommandParseError::TrailingInput {
            command: line.trim().to_string(),
            extra: extra.to_string(),
        });
    }
    Ok(command)
}

/// Parses a whole script. Blank lines and lines starting with `#` are skipped.
pub fn parse_script(text: &str) -> Result<Vec<AppCommand>, ScriptError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| parse_command(text).map_err(|source| ScriptError { line, source }))
        .collect()
}

/// Renders a command back into the grammar accepted by [`parse_command`].
///
/// The result parses back to the same command as long as every slug and
/// handle is a single token.
pub fn format_command(command: &AppCommand) -> String {
    match command {
        NavigationCommand::Push(AppRoute::Home) => "push home".to_string(),
        NavigationCommand::Push(AppRoute::Detail { slug }) => format!("push detail {slug}"),
        NavigationCommand::Push(AppRoute::Settings) => "push settings".to_string(),
        NavigationCommand::Pop => "pop".to_string(),
        NavigationCommand::PopToRoot => "root".to_string(),
        NavigationCommand::PresentSheet(AppSheet::Profile { handle }) => {
            format!("sheet profile {}", handle.as_str())
        }
        NavigationCommand::PresentSheet(AppSheet::Compose) => "sheet compose".to_string(),
        NavigationCommand::DismissSheet => "dismiss-sheet".to_string(),
        NavigationCommand::PresentFullScreenCover(AppCover::Onboarding { step }) => {
            format!("cover onboarding {}", step.number())
        }
        NavigationCommand::PresentFullScreenCover(AppCover::Media { media_id }) => {
            format!("cover media {}", media_id.0)
        }
        NavigationCommand::DismissFullScreenCover => "dismiss-cover".to_string(),
    }
}

fn parse_route<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<AppRoute, CommandParseError> {
    match required(tokens, "push", "home | detail <slug> | settings")?
        .to_ascii_lowercase()
        .as_str()
    {
        "home" => Ok(AppRoute::Home),
        "detail" => Ok(AppRoute::detail(required(tokens, "push detail", "slug")?)),
        "settings" => Ok(AppRoute::Settings),
        other => Err(CommandParseError::UnknownTarget {
            kind: "route",
            name: other.to_string(),
        }),
    }
}

fn parse_sheet<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<AppSheet, CommandParseError> {
    match required(tokens, "sheet", "profile <handle> | compose")?
        .to_ascii_lowercase()
        .as_str()
    {
        "profile" => Ok(AppSheet::profile(required(
            tokens,
            "sheet profile",
            "handle",
        )?)),
        "compose" => Ok(AppSheet::Compose),
        other => Err(CommandParseError::UnknownTarget {
            kind: "sheet",
            name: other.to_string(),
        }),
    }
}

fn parse_cover<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<AppCover, CommandParseError> {
    match required(tokens, "cover", "onboarding [step] | media <id>")?
        .to_ascii_lowercase()
        .as_str()
    {
        "onboarding" => {
            let step = tokens
                .next()
                .map(|raw| {
                    raw.parse::<u8>()
                        .map_err(|_| CommandParseError::InvalidArgument {
                            expected: "onboarding step",
                            value: raw.to_string(),
                        })
                })
                .transpose()?
                .unwrap_or(1);
            Ok(AppCover::onboarding(step))
        }
        "media" => {
            let raw = required(tokens, "cover media", "media id")?;
            let media_id = raw
                .parse::<i64>()
                .map_err(|_| CommandParseError::InvalidArgument {
                    expected: "media id",
                    value: raw.to_string(),
                })?;
            Ok(AppCover::Media {
                media_id: MediaId(media_id),
            })
        }
        other => Err(CommandParseError::UnknownTarget {
            kind: "cover",
            name: other.to_string(),
        }),
    }
}

fn required<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &str,
    expected: &'static str,
) -> Result<&'a str, CommandParseError> {
    tokens
        .next()
        .ok_or_else(|| CommandParseError::MissingArgument {
            command: command.to_string(),
            expected,
        })
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
