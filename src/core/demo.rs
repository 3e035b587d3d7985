use crate::domain::model::{Record, SharedRecord};
use crate::domain::ports::{Phase, ScenarioProvider};
use crate::utils::error::Result;
use std::io::Write;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicationOutcome {
    pub original_name: String,
    pub duplicate_name: String,
    pub same_identity: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasingOutcome {
    pub primary_name: String,
    pub alias_name: String,
    pub same_identity: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub duplication: DuplicationOutcome,
    pub aliasing: AliasingOutcome,
}

/// 依序執行「複製後修改」與「別名後修改」兩段示範，並把結果逐行寫出
pub struct CopyDemo<C: ScenarioProvider, W: Write> {
    config: C,
    out: W,
}

impl<C: ScenarioProvider, W: Write> CopyDemo<C, W> {
    pub fn new(config: C, out: W) -> Self {
        Self { config, out }
    }

    pub fn run(&mut self) -> Result<DemoReport> {
        tracing::info!("Starting copy demo");

        let duplication = self.run_duplication()?;
        let aliasing = self.run_aliasing()?;
        self.out.flush()?;

        tracing::info!("✅ Copy demo completed");
        Ok(DemoReport {
            duplication,
            aliasing,
        })
    }

    pub fn run_duplication(&mut self) -> Result<DuplicationOutcome> {
        let phase = Phase::Duplication;
        let mut original = Record::new(
            self.config.initial_name(phase),
            self.config.initial_price(phase),
        );
        tracing::debug!("Duplication scenario starts from {:?}", original);

        let duplicate = original.duplicate();
        original.set_name(self.config.changed_name(phase));

        let outcome = DuplicationOutcome {
            original_name: original.name().to_string(),
            duplicate_name: duplicate.name().to_string(),
            same_identity: Record::same_identity(&original, &duplicate),
        };

        writeln!(self.out, "{}", outcome.original_name)?;
        writeln!(self.out, "{}", outcome.duplicate_name)?;
        writeln!(self.out, "{}", outcome.same_identity)?;

        tracing::debug!(
            "Duplicate kept '{}' after original became '{}'",
            outcome.duplicate_name,
            outcome.original_name
        );
        Ok(outcome)
    }

    pub fn run_aliasing(&mut self) -> Result<AliasingOutcome> {
        let phase = Phase::Aliasing;
        let primary: SharedRecord = Record::new(
            self.config.initial_name(phase),
            self.config.initial_price(phase),
        )
        .into_shared();
        tracing::debug!("Aliasing scenario starts from {:?}", primary.borrow());

        let alias = Rc::clone(&primary);
        primary.borrow_mut().set_name(self.config.changed_name(phase));

        let outcome = AliasingOutcome {
            primary_name: primary.borrow().name().to_string(),
            alias_name: alias.borrow().name().to_string(),
            same_identity: Rc::ptr_eq(&primary, &alias),
        };

        writeln!(self.out, "{}", outcome.primary_name)?;
        writeln!(self.out, "{}", outcome.alias_name)?;

        tracing::debug!("Alias observed '{}'", outcome.alias_name);
        Ok(outcome)
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::{DemoConfig, ScenarioConfig};
    use crate::utils::error::DemoError;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output_lines(bytes: Vec<u8>) -> Vec<String> {
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_default_run_prints_five_lines_in_order() {
        let mut demo = CopyDemo::new(DemoConfig::default(), Vec::new());
        demo.run().unwrap();

        assert_eq!(
            output_lines(demo.into_output()),
            vec![
                "changed",
                "apple-equivalent placeholder text",
                "false",
                "banana-equivalent placeholder text",
                "banana-equivalent placeholder text",
            ]
        );
    }

    #[test]
    fn test_report_matches_output() {
        let mut demo = CopyDemo::new(DemoConfig::default(), Vec::new());
        let report = demo.run().unwrap();

        assert_eq!(report.duplication.original_name, "changed");
        assert_eq!(
            report.duplication.duplicate_name,
            "apple-equivalent placeholder text"
        );
        assert!(!report.duplication.same_identity);
        assert_eq!(report.aliasing.primary_name, report.aliasing.alias_name);
        assert!(report.aliasing.same_identity);
    }

    #[test]
    fn test_custom_scenario_values() {
        let config = DemoConfig {
            duplication: ScenarioConfig {
                name: Some("りんご".to_string()),
                price: Some(100),
                changed_name: Some("変更しました".to_string()),
            },
            aliasing: ScenarioConfig {
                name: Some("りんご".to_string()),
                price: Some(100),
                changed_name: Some("バナナ".to_string()),
            },
        };

        let mut demo = CopyDemo::new(config, Vec::new());
        demo.run().unwrap();

        assert_eq!(
            output_lines(demo.into_output()),
            vec!["変更しました", "りんご", "false", "バナナ", "バナナ"]
        );
    }

    #[test]
    fn test_aliasing_section_without_changed_name_uses_its_own_default() {
        let config = DemoConfig {
            aliasing: ScenarioConfig {
                name: None,
                price: None,
                changed_name: None,
            },
            ..DemoConfig::default()
        };

        let mut demo = CopyDemo::new(config, Vec::new());
        demo.run().unwrap();

        let lines = output_lines(demo.into_output());
        assert_eq!(lines[0], "changed");
        assert_eq!(lines[3], "banana-equivalent placeholder text");
        assert_eq!(lines[4], "banana-equivalent placeholder text");
    }

    #[test]
    fn test_phases_run_independently() {
        let mut demo = CopyDemo::new(DemoConfig::default(), Vec::new());
        let aliasing = demo.run_aliasing().unwrap();

        assert!(aliasing.same_identity);
        assert_eq!(output_lines(demo.into_output()).len(), 2);
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let mut demo = CopyDemo::new(DemoConfig::default(), FailingWriter);
        let result = demo.run();

        assert!(matches!(result, Err(DemoError::IoError(_))));
    }
}
