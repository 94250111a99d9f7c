use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

use crate::args::{DEFAULT_LOG_FILTER, LogArgs};

/// Installs the global subscriber. The function binary passes stderr so its
/// stdout carries nothing but the response.
pub fn init_logger<W>(args: &LogArgs, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_new(&args.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    if args.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
