//! `marquee` binary entry point.

use anyhow::Result;
use clap::Parser;
use marquee_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    marquee_cli::init_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    marquee_cli::execute(cli, &mut stdout).await
}
