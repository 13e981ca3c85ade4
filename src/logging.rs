use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

/// `RUST_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Plain console lines: no timestamp, target, level tag or colors, so messages
/// such as `[OK] Compiled ...` start the line when a build tool captures them.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .without_time()
        .finish()
}
