use crate::domain::ports::{Phase, ScenarioProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_changed_value, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NAME: &str = "apple-equivalent placeholder text";
pub const DEFAULT_PRICE: i64 = 100;
pub const DEFAULT_CHANGED_NAME: &str = "changed";
pub const DEFAULT_ALIAS_CHANGED_NAME: &str = "banana-equivalent placeholder text";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub duplication: ScenarioConfig,
    #[serde(default)]
    pub aliasing: ScenarioConfig,
}

/// 單一階段的覆寫值，未填的欄位由 `DemoConfig` 依階段補上預設值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub changed_name: Option<String>,
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DEMO_NAME})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn scenario(&self, phase: Phase) -> &ScenarioConfig {
        match phase {
            Phase::Duplication => &self.duplication,
            Phase::Aliasing => &self.aliasing,
        }
    }
}

impl ScenarioProvider for DemoConfig {
    fn initial_name(&self, phase: Phase) -> &str {
        self.scenario(phase).name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    fn initial_price(&self, phase: Phase) -> i64 {
        self.scenario(phase).price.unwrap_or(DEFAULT_PRICE)
    }

    fn changed_name(&self, phase: Phase) -> &str {
        let default = match phase {
            Phase::Duplication => DEFAULT_CHANGED_NAME,
            Phase::Aliasing => DEFAULT_ALIAS_CHANGED_NAME,
        };
        self.scenario(phase).changed_name.as_deref().unwrap_or(default)
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        for phase in [Phase::Duplication, Phase::Aliasing] {
            validate_changed_value(
                &format!("{}.changed_name", phase.section()),
                self.initial_name(phase),
                self.changed_name(phase),
            )?;
        }
        Ok(())
    }
}
