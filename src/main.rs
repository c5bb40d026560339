use clap::Parser;
use course_advisor::utils::{logger, validation::Validate};
use course_advisor::{AdvisorMenu, CliConfig, CourseLoader, LocalSource};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 驗證配置
    let settings = match cli.validate().and_then(|_| cli.resolve()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    tracing::info!("Starting course-advisor");
    tracing::debug!("Settings: {:?}", settings);

    let source = LocalSource::new(settings.data_dir.clone());
    let loader = CourseLoader::new(source, settings.identifier_case);

    let stdin = io::stdin();
    let mut menu = AdvisorMenu::new(loader, stdin.lock(), io::stdout())
        .with_default_file(settings.default_file.clone());
    menu.run()?;

    tracing::info!("course-advisor finished");
    Ok(())
}
