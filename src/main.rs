use clap::Parser;
use colored::Colorize;
use kreport::{cli::Cli, config};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> kreport::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let cwd = std::env::current_dir()?;
    let config = config::load_config(cli.config.as_deref(), &cwd)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    let stdout = std::io::stdout();
    kreport::run_command(cli.command, &config, stdout.lock())
}
