use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 日誌寫到 stderr，避免和選單輸出混在一起
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("course_advisor=debug,info"))
    } else {
        let level = level.unwrap_or(DEFAULT_LOG_LEVEL);
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("course_advisor={}", level)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
