use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use taskline_core::config::resolve_config;
use taskline_core::render::ListFormat;

mod logging;
mod repl;

use repl::ReplOptions;

#[derive(Parser)]
#[command(
    name = "taskline",
    version,
    about = "Interactive task list: type a title to add it, /l to list, /q to quit"
)]
struct Cli {
    /// Config file (defaults to $TASKLINE_HOME/config.toml or ~/.taskline/config.toml)
    #[arg(long, env = "TASKLINE_CONFIG")]
    config: Option<PathBuf>,
    /// Print task lists as JSON
    #[arg(long)]
    json: bool,
    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,
    /// Override the input prompt
    #[arg(long)]
    prompt: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // `TASKLINE_LOG` must be live before the config is loaded.
    let env_logging = logging::init(logging::env_filter().as_deref());
    let config = resolve_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("loading config {}", path.display()),
        None => "loading config".to_string(),
    })?;
    if !env_logging {
        logging::init(config.log_filter.as_deref());
    }

    let format = if cli.json {
        ListFormat::Json
    } else {
        ListFormat::Text
    };
    let mut options = ReplOptions::from_config(&config, format);
    if cli.no_banner {
        options.show_banner = false;
    }
    if let Some(prompt) = cli.prompt {
        options.prompt = prompt;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    repl::run(stdin.lock(), &mut stdout, &mut stderr, &options)?;
    Ok(())
}
