use std::process;

use clap::Parser;

use bessie::cli::{Cli, Console};
use bessie::{files, llm, logging, prompt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let console = Console::new();

    if let Err(err) = run(cli, &console).await {
        console.print_error(&format!("{err:#}"));
        process::exit(1);
    }
}

async fn run(cli: Cli, console: &Console) -> anyhow::Result<()> {
    let entries = files::collect(&cli.basedir, &cli.patterns)?;
    tracing::info!("Collected {} relevant files", entries.len());

    let rendered = prompt::render(&cli.request, &entries);
    console.print_prompt(&rendered);

    let provider = llm::select_provider(&cli.model)?;
    tracing::info!("Using {} provider with model {}", provider.name(), cli.model);

    let response = provider.complete(&rendered).await?;
    console.print_response(&response);

    files::write_output(&cli.output, &response)?;
    tracing::info!("Response written to {}", cli.output.display());

    Ok(())
}
