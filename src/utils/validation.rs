use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 修改後的名稱必須與原本不同，否則看不出複製與別名的差別
pub fn validate_changed_value(field_name: &str, before: &str, after: &str) -> Result<()> {
    if before == after {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: after.to_string(),
            reason: format!("Value must differ from the initial value '{}'", before),
        });
    }
    Ok(())
}
