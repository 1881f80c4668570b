//! Helpdesk - rule-based troubleshooting assistant for the console

use anyhow::{Context, Result};
use clap::Parser;
use helpdesk::display::Ui;
use helpdesk::errors::{exit_code, EXIT_SUCCESS};
use helpdesk::{logging, repl};
use helpdesk_shared::Catalog;
use std::io;

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(about = "Troubleshoot common computer problems from a plain-language description", long_about = None)]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    let code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code(&e)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let catalog = Catalog::builtin().context("built-in catalog is invalid")?;

    let ui = Ui::auto(&catalog.messages);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    repl::run_repl(&catalog, stdin.lock(), &mut out, &ui).context("console session failed")?;
    Ok(())
}
