use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::cli::handlers;

fn main() {
    let cli = Cli::parse();

    // No subcommand launches the TUI inside dispatch
    if let Err(e) = handlers::dispatch(cli) {
        if !e.is::<handlers::AlreadyReported>() {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
