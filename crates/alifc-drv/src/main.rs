//! alifc CLI - Arabic programming language compiler.
//!
//! Parses command-line arguments, initializes logging, and drives the
//! compilation pipeline. Progress goes to stdout, diagnostics to
//! stderr; the exit code is 0 on success and 1 on any error.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use alifc_drv::{run, Config};

/// Compiles Arabic-script source files to x86-64 assembly.
#[derive(Parser, Debug)]
#[command(name = "alifc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiles Arabic-script source files to x86-64 assembly", long_about = None)]
struct Cli {
    /// Input source file
    input: PathBuf,

    /// Output assembly file (default: input path with a `.s` extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the AST
    #[arg(long)]
    ast: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let config = Config {
        input: cli.input,
        output: cli.output,
        dump_tokens: cli.tokens,
        dump_ast: cli.ast,
    };

    run(&config)?;
    Ok(())
}

/// Initializes the tracing subscriber. The level is chosen by the
/// `--verbose` flag; no environment variables are consulted.
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_input_only() {
        let cli = Cli::parse_from(["alifc", "برنامج.alif"]);
        assert_eq!(cli.input, PathBuf::from("برنامج.alif"));
        assert!(cli.output.is_none());
        assert!(!cli.tokens);
        assert!(!cli.ast);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_output_short() {
        let cli = Cli::parse_from(["alifc", "in.alif", "-o", "out.s"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.s")));
    }

    #[test]
    fn test_cli_parse_output_long() {
        let cli = Cli::parse_from(["alifc", "in.alif", "--output", "out.s"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.s")));
    }

    #[test]
    fn test_cli_parse_dump_flags() {
        let cli = Cli::parse_from(["alifc", "in.alif", "--tokens", "--ast"]);
        assert!(cli.tokens);
        assert!(cli.ast);
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["alifc", "in.alif", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["alifc"]).is_err());
    }
}
