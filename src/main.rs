//! Tailsmith - MCP server and CLI for Tailwind-style UI generation

use std::process::ExitCode;

use tailsmith::cli;

fn main() -> ExitCode {
    // Protocol traffic owns stdout; logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    cli::run()
}
