//! 설치 지점(노드) 레코드와 생성 시점 검증.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// 노드가 주로 겨냥하는 오염물질 태그.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PollutantTarget {
    Pm25,
    Ozone,
    Co2,
    /// 수목 + 필터 복합 노드
    Hybrid,
    /// 알 수 없는 태그는 원문 그대로 보존한다.
    Other(String),
}

impl PollutantTarget {
    pub fn as_str(&self) -> &str {
        match self {
            PollutantTarget::Pm25 => "PM2.5",
            PollutantTarget::Ozone => "O3",
            PollutantTarget::Co2 => "CO2",
            PollutantTarget::Hybrid => "Hybrid",
            PollutantTarget::Other(tag) => tag,
        }
    }
}

impl From<String> for PollutantTarget {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "PM2.5" | "PM25" => PollutantTarget::Pm25,
            "O3" | "OZONE" => PollutantTarget::Ozone,
            "CO2" => PollutantTarget::Co2,
            "HYBRID" => PollutantTarget::Hybrid,
            _ => PollutantTarget::Other(value),
        }
    }
}

impl From<&str> for PollutantTarget {
    fn from(value: &str) -> Self {
        PollutantTarget::from(value.to_string())
    }
}

impl fmt::Display for PollutantTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 레코드 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("노드 ID가 비어 있습니다")]
    EmptyNodeId,
    #[error("{node_id}: {field} 값이 음수입니다 ({value})")]
    NegativeValue {
        node_id: String,
        field: &'static str,
        value: f64,
    },
    #[error("{node_id}: {field} 값이 유한한 수가 아닙니다")]
    NonFinite {
        node_id: String,
        field: &'static str,
    },
    #[error("{node_id}: 수목/설비 수량이 허용 범위를 벗어났습니다 ({value})")]
    TreeCountOutOfRange { node_id: String, value: i64 },
    #[error("{node_id}: {field} 좌표가 범위를 벗어났습니다 ({value})")]
    CoordinateOutOfRange {
        node_id: String,
        field: &'static str,
        value: f64,
    },
}

/// 카탈로그 파일의 한 행. 검증 전 원시 값이다.
///
/// CSV 샤드의 추가 열(region, notes 등)은 무시한다.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteRow {
    pub node_id: String,
    #[serde(default)]
    pub site_description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub primary_target: PollutantTarget,
    /// 2025 기준 농도 [µg/m³]
    pub baseline_2025: f64,
    pub trees_or_units: i64,
    pub power_kw: f64,
}

/// 검증을 통과한 설치 지점. 생성 후에는 읽기 전용이다.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteRecord {
    node_id: String,
    site_description: String,
    latitude: f64,
    longitude: f64,
    primary_target: PollutantTarget,
    baseline_2025: f64,
    trees_or_units: u32,
    power_kw: f64,
}

impl SiteRecord {
    /// 값을 검증하여 레코드를 만든다.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        node_id: impl Into<String>,
        site_description: impl Into<String>,
        latitude: f64,
        longitude: f64,
        primary_target: impl Into<PollutantTarget>,
        baseline_2025: f64,
        trees_or_units: i64,
        power_kw: f64,
    ) -> Result<Self, SiteError> {
        let node_id = node_id.into().trim().to_string();
        if node_id.is_empty() {
            return Err(SiteError::EmptyNodeId);
        }
        check_coordinate(&node_id, "latitude", latitude, 90.0)?;
        check_coordinate(&node_id, "longitude", longitude, 180.0)?;
        check_non_negative(&node_id, "baseline_2025", baseline_2025)?;
        check_non_negative(&node_id, "power_kw", power_kw)?;
        let trees_or_units = u32::try_from(trees_or_units).map_err(|_| {
            SiteError::TreeCountOutOfRange {
                node_id: node_id.clone(),
                value: trees_or_units,
            }
        })?;

        Ok(Self {
            node_id,
            site_description: site_description.into(),
            latitude,
            longitude,
            primary_target: primary_target.into(),
            baseline_2025,
            trees_or_units,
            power_kw,
        })
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn site_description(&self) -> &str {
        &self.site_description
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn primary_target(&self) -> &PollutantTarget {
        &self.primary_target
    }

    /// 기준 농도 [µg/m³]
    pub fn baseline_2025(&self) -> f64 {
        self.baseline_2025
    }

    pub fn trees_or_units(&self) -> u32 {
        self.trees_or_units
    }

    /// 설비 전력 [kW]
    pub fn power_kw(&self) -> f64 {
        self.power_kw
    }
}

impl TryFrom<SiteRow> for SiteRecord {
    type Error = SiteError;

    fn try_from(row: SiteRow) -> Result<Self, Self::Error> {
        SiteRecord::new(
            row.node_id,
            row.site_description,
            row.latitude,
            row.longitude,
            row.primary_target,
            row.baseline_2025,
            row.trees_or_units,
            row.power_kw,
        )
    }
}

fn check_non_negative(node_id: &str, field: &'static str, value: f64) -> Result<(), SiteError> {
    if !value.is_finite() {
        return Err(SiteError::NonFinite {
            node_id: node_id.to_string(),
            field,
        });
    }
    if value < 0.0 {
        return Err(SiteError::NegativeValue {
            node_id: node_id.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

fn check_coordinate(
    node_id: &str,
    field: &'static str,
    value: f64,
    limit: f64,
) -> Result<(), SiteError> {
    if !value.is_finite() {
        return Err(SiteError::NonFinite {
            node_id: node_id.to_string(),
            field,
        });
    }
    if value.abs() > limit {
        return Err(SiteError::CoordinateOutOfRange {
            node_id: node_id.to_string(),
            field,
            value,
        });
    }
    Ok(())
}
