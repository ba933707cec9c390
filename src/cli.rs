//! Command-line interface implementation

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::completions::{CompletionClient, ProviderConfig};
use crate::mcp;
use crate::mcp::tools::{convert_to_tailwind, optimize_classes};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Tailsmith - Tailwind-style UI generation over MCP, with deterministic fallbacks
#[derive(Parser)]
#[command(name = "tailsmith")]
#[command(about = "Tailsmith - Tailwind-style UI generation over MCP, with deterministic fallbacks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdin/stdout
    Serve,

    /// Optimize Tailwind classes in an HTML file and print the report
    Optimize {
        /// Input HTML file
        input: PathBuf,

        /// Keep duplicate and redundant classes
        #[arg(long)]
        keep_redundant: bool,

        /// Keep conflicting classes instead of resolving them
        #[arg(long)]
        keep_conflicts: bool,
    },

    /// Convert CSS rules or inline styles to Tailwind classes
    Convert {
        /// Input CSS or HTML file
        input: PathBuf,

        /// Input format: "css" or "html"
        #[arg(long, default_value = "css")]
        format: String,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let client = Arc::new(CompletionClient::new(ProviderConfig::from_env()));

    match cli.command {
        Commands::Serve => match runtime.block_on(mcp::run_server(client)) {
            Ok(()) => ExitCode::from(EXIT_SUCCESS),
            Err(e) => {
                eprintln!("Error: MCP server failed: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        },
        Commands::Optimize { input, keep_redundant, keep_conflicts } => {
            let html = match fs::read_to_string(&input) {
                Ok(html) => html,
                Err(e) => {
                    eprintln!("Error: failed to read {}: {}", input.display(), e);
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            let request = optimize_classes::OptimizeClassesInput {
                html,
                remove_redundant: !keep_redundant,
                merge_conflicts: !keep_conflicts,
                suggest_alternatives: true,
            };
            print_outcome(runtime.block_on(optimize_classes::run(request, &client)))
        }
        Commands::Convert { input, format } => {
            let css = match fs::read_to_string(&input) {
                Ok(css) => css,
                Err(e) => {
                    eprintln!("Error: failed to read {}: {}", input.display(), e);
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            let request =
                convert_to_tailwind::ConvertToTailwindInput { css, format: Some(format) };
            print_outcome(runtime.block_on(convert_to_tailwind::run(request, &client)))
        }
    }
}

fn print_outcome(outcome: Result<String, String>) -> ExitCode {
    match outcome {
        Ok(report) => {
            println!("{}", report);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
