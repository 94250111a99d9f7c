use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use recetario_api::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log, std::io::stdout);

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let app_state = state(args.clone());
    let router = router(app_state)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
