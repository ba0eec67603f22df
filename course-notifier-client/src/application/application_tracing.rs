use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

///
/// Console only, notifications themselves are printed to stdout
///
pub fn setup_tracing() -> anyhow::Result<()> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;

    Ok(())
}
