//! # Stockroom Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        stockroom                                        │
//! │                                                                         │
//! │  main.rs ────► parse args, init tracing, print result / error          │
//! │                                                                         │
//! │  lib.rs ─────► config → storage → InventoryStore → command             │
//! │                                                                         │
//! │  stdout: cards or JSON        stderr: logs and errors                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;

use stockroom_cli_lib::cli::{Cli, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    stockroom_cli_lib::init_tracing(cli.verbose);

    match stockroom_cli_lib::run(&cli).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            match cli.format {
                OutputFormat::Json => match serde_json::to_string_pretty(&err) {
                    Ok(json) => eprintln!("{}", json),
                    Err(_) => eprintln!("{}", err.message),
                },
                OutputFormat::Table => eprintln!("Error: {}", err.message),
            }
            ExitCode::FAILURE
        }
    }
}
