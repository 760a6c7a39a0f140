use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownVerb(String),
    #[error("unknown {kind} `{name}`")]
    UnknownTarget { kind: &'static str, name: String },
    #[error("`{command}` expects an argument: {expected}")]
    MissingArgument {
        command: String,
        expected: &'static str,
    },
    #[error("invalid {expected} `{value}`")]
    InvalidArgument {
        expected: &'static str,
        value: String,
    },
    #[error("unexpected input `{extra}` after `{command}`")]
    TrailingInput { command: String, extra: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: CommandParseError,
}
