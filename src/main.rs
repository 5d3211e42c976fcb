use clap::{Parser, Subcommand};
use starpost::commands::*;
use starpost::core::{
    error::{Result, StarpostError},
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "starpost")]
#[command(about = "Copy a code selection to the clipboard with file, line and git context")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Template used when git data is available
    #[arg(long, global = true, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Template used when git data is unavailable
    #[arg(long, global = true, value_name = "PATH")]
    fallback_template: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the selection, rendered with its context
    Copy {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print to stdout instead of writing to the clipboard
        #[arg(long)]
        print: bool,
    },
    /// Show the template fields collected for the selection, as JSON
    Context {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Copy { selection, print } => {
            execute_copy(selection, cli.template, cli.fallback_template, print)
        }
        Commands::Context { selection } => execute_context(selection),
    };

    if let Err(e) = result {
        match e {
            StarpostError::NoActiveEditor => {
                print_error("No active editor. Pass the file to copy from.")
            }
            e => print_error(&e.to_string()),
        }
        std::process::exit(1);
    }

    Ok(())
}
