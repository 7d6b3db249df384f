//! # find-config demo
//!
//! A small command-line front end for config-file-finder. It exists to
//! exercise the library by hand, not as a polished tool.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example find_config -- .config.yml
//! cargo run --example find_config -- app.toml -r Cargo.toml --json
//! RUST_LOG=config_file_finder=trace cargo run --example find_config -- app.toml
//! ```
//!
//! Exit status is 0 when the file is found and 1 when it is not.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config_file_finder::{FindArgs, SearchResult, render_human};

/// Find a config file by walking up to the project root.
#[derive(Parser, Debug)]
#[command(name = "find-config", version)]
struct Cli {
    /// Log each step of the walk and list the markers of the stopping directory.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    find: FindArgs,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let json = cli.find.json;
    let from = cli.find.from.clone();
    let finder = cli.find.into_finder();

    let result = match from {
        Some(dir) => finder.find_from(dir),
        None => finder.find(),
    }
    .context("search failed")?;

    if cli.verbose
        && let SearchResult::NotFound { dir, .. } = &result
    {
        for marker in finder.detect_project_root_markers(dir) {
            eprintln!("marker: {}", marker.display());
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_success() {
        println!("{}", render_human(&result));
    } else {
        eprintln!("{}", render_human(&result));
    }

    Ok(ExitCode::from(result.exit_code()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("find-config: {e:#}");
            ExitCode::from(2)
        }
    }
}
