use clap::Parser;
use copy_demo::utils::{logger, validation::Validate};
use copy_demo::{CliConfig, CopyDemo, DemoError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌（只寫 stderr）
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting copy-demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證情境配置
    let config = match cli.load_demo_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut demo = CopyDemo::new(config, stdout.lock());

    match demo.run() {
        Ok(report) => {
            tracing::debug!("Demo report: {:?}", report);
        }
        Err(e @ DemoError::IoError(_)) => {
            tracing::error!("❌ Failed to write demo output: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
