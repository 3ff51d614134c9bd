use tracing::Level;

/// Install the global subscriber. Events go to stderr so that stdout only
/// carries command output.
pub fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
