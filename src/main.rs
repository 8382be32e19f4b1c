//! CLI entry point for atelier.

mod app;
mod cli;

use clap::Parser;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    std::process::exit(app::entry::run(args).await);
}
