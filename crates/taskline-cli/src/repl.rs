use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use taskline_core::config::TasklineConfig;
use taskline_core::dispatch::{execute_line, Outcome};
use taskline_core::render::{self, ListFormat, BANNER};
use taskline_core::store::TaskStore;

#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub prompt: String,
    pub show_banner: bool,
    pub list_after_add: bool,
    pub format: ListFormat,
}

impl ReplOptions {
    pub fn from_config(config: &TasklineConfig, format: ListFormat) -> Self {
        Self {
            prompt: config.prompt().to_string(),
            show_banner: config.show_banner(),
            list_after_add: config.list_after_add(),
            format,
        }
    }
}

/// Reads lines until `/q` or end of input, applying each one to a fresh store.
///
/// Command errors go to `err` and the loop keeps going; only I/O failures end it early.
pub fn run<R, W, E>(
    mut input: R,
    out: &mut W,
    err: &mut E,
    options: &ReplOptions,
) -> Result<TaskStore>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut store = TaskStore::new();
    if options.show_banner {
        writeln!(out, "{BANNER}")?;
    }

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", options.prompt)?;
        out.flush()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("reading standard input")?;
        if read == 0 {
            // EOF after a prompt; finish the prompt line.
            writeln!(out)?;
            break;
        }

        // Invalid UTF-8 is replaced rather than ending the session.
        let line = String::from_utf8_lossy(&buf);
        match execute_line(&mut store, &line) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) => report(out, &store, &outcome, options)?,
            Err(command_err) => writeln!(err, "Error: {command_err}")?,
        }
    }

    debug!(tasks = store.len(), "session finished");
    Ok(store)
}

fn report<W: Write>(
    out: &mut W,
    store: &TaskStore,
    outcome: &Outcome,
    options: &ReplOptions,
) -> Result<()> {
    match outcome {
        Outcome::Added(task) => {
            if options.list_after_add {
                writeln!(out, "{}", render::task_list(store.list(), options.format)?)?;
            } else {
                writeln!(out, "Added {}", task.line())?;
            }
        }
        Outcome::Updated(task) => writeln!(out, "{}", render::updated(task))?,
        Outcome::Deleted(task) => writeln!(out, "{}", render::deleted(task))?,
        Outcome::Listed(tasks) => writeln!(out, "{}", render::task_list(tasks, options.format)?)?,
        Outcome::Quit | Outcome::Ignored => {}
    }
    Ok(())
}
