//! Logging Infrastructure

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// `RUST_LOG` takes precedence over `level`. When `log_dir` names an existing
/// directory, output goes to a daily rolling file instead of stderr.
pub fn init_logger(level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("waiter_client={level},shared={level}")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && Path::new(dir).is_dir()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "waiter");
        subscriber.with_ansi(false).with_writer(file_appender).init();
        return;
    }

    subscriber.with_writer(std::io::stderr).init();
}
