use thiserror::Error;
use tracing::{debug, warn};

use crate::command::{Command, ParseError};
use crate::store::{StoreError, TaskStore};
use crate::task::{Task, TaskPatch};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What applying a command did, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Task),
    Updated(Task),
    Deleted(Task),
    Listed(Vec<Task>),
    Quit,
    Ignored,
}

impl Outcome {
    pub fn is_quit(&self) -> bool {
        matches!(self, Outcome::Quit)
    }
}

pub fn apply(store: &mut TaskStore, command: Command) -> Result<Outcome, CommandError> {
    debug!(?command, "applying command");
    let outcome = match command {
        Command::Add { title } => Outcome::Added(store.add(title)?),
        Command::EditById {
            id,
            new_title,
            new_completed,
        } => {
            let patch = TaskPatch {
                title: new_title,
                completed: new_completed,
            };
            Outcome::Updated(store.edit(id, patch)?.clone())
        }
        Command::DeleteById { id } => Outcome::Deleted(store.delete(id)?),
        Command::List => Outcome::Listed(store.list().to_vec()),
        Command::Quit => Outcome::Quit,
        Command::Empty => Outcome::Ignored,
        Command::Invalid(err) => {
            warn!(%err, "rejected command");
            return Err(err.into());
        }
    };
    Ok(outcome)
}

/// Parses and applies one raw input line.
pub fn execute_line(store: &mut TaskStore, line: &str) -> Result<Outcome, CommandError> {
    apply(store, crate::command::parse(line))
}
