use log::info;
use std::io::{self, Write};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{Config, ConfigError};
use crate::report;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("출력 오류: {0}")]
    Io(#[from] io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
}

/// 설정에 따라 카탈로그를 읽고 지점별 보고서를 출력 대상에 쓴다.
pub fn run_with<W: Write>(config: &Config, out: &mut W) -> Result<(), AppError> {
    config.validate()?;
    let catalog = Catalog::load_or_builtin(config.catalog.as_deref(), config.invalid_sites)?;
    info!("설치 지점 {}개 보고서 작성", catalog.len());
    report::write_report(out, catalog.sites(), &config.report_options())?;
    Ok(())
}

/// 표준 출력으로 보고서를 쓴다.
pub fn run(config: &Config) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(config, &mut out)
}
