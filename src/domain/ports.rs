/// 示範的兩個階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Duplication,
    Aliasing,
}

impl Phase {
    /// 設定檔中對應的區段名稱
    pub fn section(&self) -> &'static str {
        match self {
            Phase::Duplication => "duplication",
            Phase::Aliasing => "aliasing",
        }
    }
}

/// 示範所需的情境值來源（預設值或 TOML 檔），每個階段各一組
pub trait ScenarioProvider {
    fn initial_name(&self, phase: Phase) -> &str;
    fn initial_price(&self, phase: Phase) -> i64;
    fn changed_name(&self, phase: Phase) -> &str;
}
