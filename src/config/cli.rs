use crate::config::toml_config::DemoConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "copy-demo")]
#[command(about = "Shows the difference between duplicating a record and aliasing it")]
pub struct CliConfig {
    /// Path to a TOML file overriding the scenario values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 沒有指定 --config 時使用內建的示範值
    pub fn load_demo_config(&self) -> Result<DemoConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading scenario config from: {}", path);
                DemoConfig::from_file(path)
            }
            None => Ok(DemoConfig::default()),
        }
    }
}
