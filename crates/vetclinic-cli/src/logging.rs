use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

/// `RUST_LOG` when set, otherwise `--log-level`. Events go to stderr so
/// they never mix with rendered output.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vetclinic={level},vetclinic_client={level}")));

    // A second init (tests running `run` twice) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
