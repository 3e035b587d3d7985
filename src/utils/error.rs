use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read or write: {}", e),
            DemoError::ConfigParseError(_) => "The config file is not valid TOML".to_string(),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the path exists and that stdout is writable",
            DemoError::ConfigParseError(_) => "Fix the TOML syntax or run without --config",
            DemoError::InvalidConfigValueError { .. } => {
                "Use a changed_name that differs from the initial name"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
