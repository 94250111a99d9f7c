use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use recetario_api::{
    application::{
        function::{FunctionEvent, handle_event},
        logging::init_logger,
    },
    args::Args,
};
use recetario_core::{application::create_service, domain::common::RecetarioConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Reads one function event as JSON from stdin and writes the function
/// response as JSON to stdout.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log, std::io::stderr);

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("failed to read event from stdin")?;

    let event: FunctionEvent =
        serde_json::from_str(&input).context("stdin is not a valid function event")?;

    let service = create_service(RecetarioConfig::from(args));
    let response = handle_event(&service, event).await;

    let mut output = serde_json::to_vec(&response).context("failed to encode response")?;
    output.push(b'\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;

    Ok(())
}
