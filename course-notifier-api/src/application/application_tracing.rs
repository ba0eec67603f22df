use super::ApplicationEnv;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

///
/// Console output is filtered with RUST_LOG (DEBUG by default),
/// file output keeps everything and rolls every hour.
///
/// Returned guard flushes buffered file output when dropped,
/// so it has to live until the end of main.
///
pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<WorkerGuard> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env()?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(console_filter);

    let file_appender = tracing_appender::rolling::hourly(&env.log_directory, &env.log_filename);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(guard)
}
