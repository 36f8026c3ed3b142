use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::InvalidSitePolicy;
use crate::models::dac_capture;
use crate::report::{ReportOptions, RoundingMode};

/// 기본 설정 파일 이름. 작업 디렉터리 기준이다.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 설치 지점 카탈로그(TOML 또는 `.csv` 샤드) 경로. 없으면 내장 목록을 쓴다.
    pub catalog: Option<PathBuf>,
    pub rounding: RoundingMode,
    pub invalid_sites: InvalidSitePolicy,
    /// 세부 내역/합계 출력 여부
    pub detailed: bool,
    /// DAC 총 에너지 원단위 [kWh/t]
    pub dac_gross_kwh_per_ton: f64,
    /// `RUST_LOG`가 없을 때 쓰는 로그 필터
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            rounding: RoundingMode::HalfAwayFromZero,
            invalid_sites: InvalidSitePolicy::Abort,
            detailed: false,
            dac_gross_kwh_per_ton: dac_capture::DEFAULT_GROSS_KWH_PER_TON,
            log_level: "warn".to_string(),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 값 오류: {field} = {value} (0 이상의 유한한 수여야 합니다)")]
    Invalid { field: &'static str, value: f64 },
}

/// config.toml을 로드하거나 없으면 기본 설정을 사용한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 읽는다. 파일이 없으면 기본값을 돌려주며 파일은 만들지 않는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let mut cfg: Config = toml::from_str(&content)?;
    cfg.validate()?;
    // 상대 카탈로그 경로는 설정 파일 위치 기준
    if let (Some(catalog), Some(dir)) = (cfg.catalog.as_mut(), path.parent()) {
        if catalog.is_relative() && !dir.as_os_str().is_empty() {
            *catalog = dir.join(&*catalog);
        }
    }
    Ok(cfg)
}

impl Config {
    /// 값 범위를 검사한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let value = self.dac_gross_kwh_per_ton;
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::Invalid {
                field: "dac_gross_kwh_per_ton",
                value,
            });
        }
        Ok(())
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            rounding: self.rounding,
            detailed: self.detailed,
            dac_gross_kwh_per_ton: self.dac_gross_kwh_per_ton,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load_from(Path::new("no/such/dir/config.toml")).expect("defaults");
        assert_eq!(cfg, Config::default());
        assert!(!Path::new("no/such/dir/config.toml").exists());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: Config = toml::from_str("rounding = \"HalfToEven\"\ndetailed = true\n")
            .expect("parse");
        assert_eq!(cfg.rounding, RoundingMode::HalfToEven);
        assert!(cfg.detailed);
        assert_eq!(cfg.invalid_sites, InvalidSitePolicy::Abort);
        assert_eq!(cfg.dac_gross_kwh_per_ton, 2000.0);
        assert!(cfg.catalog.is_none());
    }

    #[test]
    fn full_file_parses() {
        let cfg: Config = toml::from_str(
            r#"
catalog = "data/sites.toml"
rounding = "HalfAwayFromZero"
invalid_sites = "Skip"
detailed = false
dac_gross_kwh_per_ton = 1500.0
log_level = "debug"
"#,
        )
        .expect("parse");
        assert_eq!(cfg.catalog, Some(PathBuf::from("data/sites.toml")));
        assert_eq!(cfg.invalid_sites, InvalidSitePolicy::Skip);
        assert_eq!(cfg.report_options().dac_gross_kwh_per_ton, 1500.0);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn negative_or_nan_energy_intensity_is_rejected() {
        for text in ["dac_gross_kwh_per_ton = -2000.0", "dac_gross_kwh_per_ton = nan"] {
            let cfg: Config = toml::from_str(text).expect("parse");
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::Invalid {
                    field: "dac_gross_kwh_per_ton",
                    ..
                })
            ));
        }
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn unknown_rounding_is_rejected() {
        assert!(toml::from_str::<Config>("rounding = \"Banker\"").is_err());
    }
}
