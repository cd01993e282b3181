//! Parsing of raw input lines into [`Command`] values.
//!
//! Plain text adds a task. `/e` and `/d` take shell-quoted flags in the
//! `-name=value` or `-name value` form; boolean flags may appear bare.

use thiserror::Error;

pub const QUIT: &str = "/q";
pub const LIST: &str = "/l";
pub const EDIT_PREFIX: &str = "/e";
pub const DELETE_PREFIX: &str = "/d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
    },
    EditById {
        id: u64,
        new_title: Option<String>,
        new_completed: Option<bool>,
    },
    DeleteById {
        id: u64,
    },
    List,
    Quit,
    Empty,
    Invalid(ParseError),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("tokenize error")]
    Tokenize,
    #[error("id flag is required")]
    MissingId,
    #[error("flag provided but not defined: -{0}")]
    UnknownFlag(String),
    #[error("bad flag syntax: {0}")]
    BadSyntax(String),
    #[error("flag needs an argument: -{0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for flag -{flag}: {expected}")]
    InvalidValue {
        flag: String,
        value: String,
        expected: &'static str,
    },
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagKind {
    Id,
    Title,
    Completed,
}

impl FlagKind {
    fn is_bool(self) -> bool {
        matches!(self, FlagKind::Completed)
    }
}

const EDIT_FLAGS: &[(&str, FlagKind)] = &[
    ("id", FlagKind::Id),
    ("title", FlagKind::Title),
    ("completed", FlagKind::Completed),
];
const DELETE_FLAGS: &[(&str, FlagKind)] = &[("id", FlagKind::Id)];

#[derive(Debug, Default)]
struct Flags {
    id: Option<u64>,
    title: Option<String>,
    completed: Option<bool>,
}

pub fn parse(raw_line: &str) -> Command {
    let line = raw_line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    match line {
        QUIT => return Command::Quit,
        LIST => return Command::List,
        _ => {}
    }

    let parsed = if line.starts_with(EDIT_PREFIX) {
        parse_edit(line)
    } else if line.starts_with(DELETE_PREFIX) {
        parse_delete(line)
    } else {
        return Command::Add {
            title: line.to_string(),
        };
    };
    parsed.unwrap_or_else(Command::Invalid)
}

fn parse_edit(line: &str) -> Result<Command, ParseError> {
    let flags = parse_flags(&tokenize(line)?, EDIT_FLAGS)?;
    let id = flags.id.ok_or(ParseError::MissingId)?;
    Ok(Command::EditById {
        id,
        new_title: flags.title,
        new_completed: flags.completed,
    })
}

fn parse_delete(line: &str) -> Result<Command, ParseError> {
    let flags = parse_flags(&tokenize(line)?, DELETE_FLAGS)?;
    let id = flags.id.ok_or(ParseError::MissingId)?;
    Ok(Command::DeleteById { id })
}

/// Splits with shell quoting rules and drops the command name.
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = shell_words::split(line).map_err(|_| ParseError::Tokenize)?;
    if !tokens.is_empty() {
        tokens.remove(0);
    }
    Ok(tokens)
}

fn parse_flags(args: &[String], known: &[(&str, FlagKind)]) -> Result<Flags, ParseError> {
    let mut flags = Flags::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let stripped = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
            Some(rest) => rest,
            None => return Err(ParseError::UnexpectedArgument(arg.clone())),
        };
        if stripped.is_empty() || stripped.starts_with('-') || stripped.starts_with('=') {
            return Err(ParseError::BadSyntax(arg.clone()));
        }
        let (name, inline_value) = match stripped.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (stripped, None),
        };
        let kind = known
            .iter()
            .find(|(flag, _)| *flag == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| ParseError::UnknownFlag(name.to_string()))?;

        let value = match inline_value {
            Some(value) => Some(value),
            None if kind.is_bool() => None,
            None => Some(
                iter.next()
                    .cloned()
                    .ok_or_else(|| ParseError::MissingValue(name.to_string()))?,
            ),
        };

        match kind {
            FlagKind::Id => flags.id = Some(parse_id(name, value.unwrap_or_default())?),
            FlagKind::Title => flags.title = value,
            FlagKind::Completed => {
                flags.completed = Some(match value {
                    Some(value) => parse_bool(name, value)?,
                    None => true,
                })
            }
        }
    }
    Ok(flags)
}

fn parse_id(flag: &str, value: String) -> Result<u64, ParseError> {
    value
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidValue {
            flag: flag.to_string(),
            value,
            expected: "expected a non-negative integer",
        })
}

fn parse_bool(flag: &str, value: String) -> Result<bool, ParseError> {
    match value.as_str() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseError::InvalidValue {
            flag: flag.to_string(),
            value,
            expected: "expected a boolean",
        }),
    }
}
