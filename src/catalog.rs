//! 설치 지점 카탈로그. 내장 목록, TOML 카탈로그 또는 CSV 샤드에서 레코드를 읽는다.

use log::{info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::site::{SiteError, SiteRecord, SiteRow};

/// 잘못된 레코드를 만났을 때의 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum InvalidSitePolicy {
    /// 첫 오류에서 전체 실행을 중단한다.
    #[default]
    Abort,
    /// 해당 레코드만 건너뛰고 경고 로그를 남긴다.
    Skip,
}

/// 카탈로그 로드/구성 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("카탈로그 파일 입출력 오류 ({path}): {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("카탈로그 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("CSV 샤드 파싱 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("잘못된 설치 지점: {0}")]
    InvalidSite(#[from] SiteError),
    #[error("중복된 노드 ID: {0}")]
    DuplicateNodeId(String),
    #[error("카탈로그에 설치 지점이 없습니다")]
    Empty,
}

/// 카탈로그 파일 구조. `[[site]]` 테이블 배열이다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default, rename = "site")]
    pub sites: Vec<SiteRow>,
}

/// 검증된 설치 지점 목록. 노드 ID는 목록 안에서 유일하다.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    sites: Vec<SiteRecord>,
}

impl Catalog {
    /// 원시 행들을 검증하여 카탈로그를 구성한다.
    pub fn from_rows(rows: Vec<SiteRow>, policy: InvalidSitePolicy) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut sites = Vec::with_capacity(rows.len());
        for row in rows {
            let site = match SiteRecord::try_from(row) {
                Ok(site) => site,
                Err(err) => match policy {
                    InvalidSitePolicy::Abort => return Err(err.into()),
                    InvalidSitePolicy::Skip => {
                        warn!("설치 지점을 건너뜁니다: {err}");
                        continue;
                    }
                },
            };
            if !seen.insert(site.node_id().to_string()) {
                match policy {
                    InvalidSitePolicy::Abort => {
                        return Err(CatalogError::DuplicateNodeId(site.node_id().to_string()))
                    }
                    InvalidSitePolicy::Skip => {
                        warn!("중복된 노드 ID를 건너뜁니다: {}", site.node_id());
                        continue;
                    }
                }
            }
            sites.push(site);
        }
        if sites.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { sites })
    }

    /// TOML 문자열에서 카탈로그를 읽는다.
    pub fn from_toml_str(content: &str, policy: InvalidSitePolicy) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_rows(file.sites, policy)
    }

    /// 헤더가 있는 CSV 샤드에서 카탈로그를 읽는다. 모르는 열은 무시한다.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        policy: InvalidSitePolicy,
    ) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let rows = rdr.deserialize().collect::<Result<Vec<SiteRow>, _>>()?;
        Self::from_rows(rows, policy)
    }

    pub fn from_csv_str(content: &str, policy: InvalidSitePolicy) -> Result<Self, CatalogError> {
        Self::from_csv_reader(content.as_bytes(), policy)
    }

    /// 카탈로그 파일을 읽는다. 확장자가 `.csv`이면 CSV 샤드, 그 외에는 TOML로 본다.
    pub fn load(path: &Path, policy: InvalidSitePolicy) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = if is_csv(path) {
            Self::from_csv_str(&content, policy)?
        } else {
            Self::from_toml_str(&content, policy)?
        };
        info!(
            "카탈로그 {} 에서 설치 지점 {}개를 읽었습니다",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// 프로그램에 내장된 기본 목록.
    pub fn builtin() -> Result<Self, CatalogError> {
        let rows = vec![SiteRow {
            node_id: "PHX-I10-01".into(),
            site_description: "I-10 East".into(),
            latitude: 33.450,
            longitude: -112.050,
            primary_target: "PM2.5".into(),
            baseline_2025: 27.5,
            trees_or_units: 2000,
            power_kw: 50.0,
        }];
        let catalog = Self::from_rows(rows, InvalidSitePolicy::Abort)?;
        info!("내장 카탈로그 사용 (설치 지점 {}개)", catalog.len());
        Ok(catalog)
    }

    /// 경로가 주어지면 파일을, 없으면 내장 목록을 사용한다.
    pub fn load_or_builtin(
        path: Option<&Path>,
        policy: InvalidSitePolicy,
    ) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path, policy),
            None => Self::builtin(),
        }
    }

    pub fn sites(&self) -> &[SiteRecord] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn get(&self, node_id: &str) -> Option<&SiteRecord> {
        self.sites.iter().find(|s| s.node_id() == node_id)
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
