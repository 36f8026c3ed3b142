//! 설치 지점별 연간 제거량 추정과 보고서 출력.

use log::debug;
use serde::Deserialize;
use std::io::{self, Write};

use crate::models::{dac_capture, electrostatic_filter, tree_sequestration};
use crate::site::SiteRecord;

/// 정수 출력 시 반올림 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum RoundingMode {
    /// 0.5는 0에서 멀어지는 쪽으로 (2.5 → 3)
    #[default]
    HalfAwayFromZero,
    /// 0.5는 가까운 짝수로 (2.5 → 2)
    HalfToEven,
}

impl RoundingMode {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfAwayFromZero => value.round(),
            RoundingMode::HalfToEven => value.round_ties_even(),
        }
    }

    /// 소수점 없이 문자열로 만든다. `-0`은 `0`으로 출력한다.
    pub fn format(self, value: f64) -> String {
        let rounded = self.apply(value);
        if rounded == 0.0 {
            return "0".to_string();
        }
        format!("{rounded:.0}")
    }
}

/// 보고서 출력 옵션.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    pub rounding: RoundingMode,
    /// 지점별 세부 내역과 합계/DAC 원단위 줄을 추가로 출력한다.
    pub detailed: bool,
    /// DAC 총 에너지 원단위 [kWh/t]
    pub dac_gross_kwh_per_ton: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::default(),
            detailed: false,
            dac_gross_kwh_per_ton: dac_capture::DEFAULT_GROSS_KWH_PER_TON,
        }
    }
}

/// 한 지점의 연간 추정값 [kg/년].
#[derive(Debug, Clone, PartialEq)]
pub struct SiteEstimate {
    pub node_id: String,
    pub tree_co2_kg: f64,
    pub tree_pm25_kg: f64,
    pub filter_pm25_kg: f64,
    pub dac_co2_kg: f64,
    pub eco_impact_score: f64,
}

impl SiteEstimate {
    /// 세 계산기를 모두 호출해 지점 추정값을 만든다.
    pub fn for_site(site: &SiteRecord) -> Self {
        let tree_co2_kg = tree_sequestration::annual_co2_kg(site.trees_or_units());
        let tree_pm25_kg = tree_sequestration::annual_pm25_kg(site.trees_or_units());
        let filter_pm25_kg =
            electrostatic_filter::annual_pm25_kg(site.power_kw(), site.baseline_2025());
        let dac_co2_kg = dac_capture::annual_co2_kg(site.power_kw());
        let estimate = Self {
            node_id: site.node_id().to_string(),
            tree_co2_kg,
            tree_pm25_kg,
            filter_pm25_kg,
            dac_co2_kg,
            eco_impact_score: tree_sequestration::eco_impact_score(tree_co2_kg, tree_pm25_kg),
        };
        debug!("{estimate:?}");
        estimate
    }

    /// 수목 + DAC 합산 CO₂ [kg/년]
    pub fn total_co2_kg(&self) -> f64 {
        self.tree_co2_kg + self.dac_co2_kg
    }

    /// 보고 대상 PM2.5는 필터 포집량이다.
    pub fn reported_pm25_kg(&self) -> f64 {
        self.filter_pm25_kg
    }
}

/// 전체 지점 합계.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FleetTotals {
    pub co2_kg: f64,
    pub pm25_kg: f64,
    pub sites: usize,
}

impl FleetTotals {
    pub fn from_estimates(estimates: &[SiteEstimate]) -> Self {
        estimates.iter().fold(Self::default(), |acc, e| Self {
            co2_kg: acc.co2_kg + e.total_co2_kg(),
            pm25_kg: acc.pm25_kg + e.reported_pm25_kg(),
            sites: acc.sites + 1,
        })
    }
}

/// 지점 요약 한 줄.
pub fn format_line(estimate: &SiteEstimate, rounding: RoundingMode) -> String {
    format!(
        "{}: {} kg CO2/year, {} kg PM2.5/year removed",
        estimate.node_id,
        rounding.format(estimate.total_co2_kg()),
        rounding.format(estimate.reported_pm25_kg())
    )
}

fn format_detail(estimate: &SiteEstimate, rounding: RoundingMode) -> String {
    format!(
        "  tree CO2 {} kg, DAC CO2 {} kg, tree PM2.5 {} kg, eco impact score {:.1}",
        rounding.format(estimate.tree_co2_kg),
        rounding.format(estimate.dac_co2_kg),
        rounding.format(estimate.tree_pm25_kg),
        estimate.eco_impact_score
    )
}

fn format_totals(totals: &FleetTotals, rounding: RoundingMode) -> String {
    format!(
        "TOTAL: {} kg CO2/year, {} kg PM2.5/year removed across {} sites",
        rounding.format(totals.co2_kg),
        rounding.format(totals.pm25_kg),
        totals.sites
    )
}

/// 보고서 전체 줄을 만든다.
pub fn render_lines(sites: &[SiteRecord], options: &ReportOptions) -> Vec<String> {
    let estimates: Vec<SiteEstimate> = sites.iter().map(SiteEstimate::for_site).collect();
    let mut lines = Vec::with_capacity(estimates.len() * 2 + 2);
    for estimate in &estimates {
        lines.push(format_line(estimate, options.rounding));
        if options.detailed {
            lines.push(format_detail(estimate, options.rounding));
        }
    }
    if options.detailed {
        let totals = FleetTotals::from_estimates(&estimates);
        lines.push(format_totals(&totals, options.rounding));
        lines.push(format!(
            "DAC energy intensity: {:.2} GJ/t CO2 ({} kWh/t gross)",
            dac_capture::net_energy_gj_per_ton(options.dac_gross_kwh_per_ton),
            options.dac_gross_kwh_per_ton
        ));
    }
    lines
}

/// 보고서를 출력 대상에 쓴다.
pub fn write_report<W: Write>(
    out: &mut W,
    sites: &[SiteRecord],
    options: &ReportOptions,
) -> io::Result<()> {
    for line in render_lines(sites, options) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_modes_differ_on_ties() {
        assert_eq!(RoundingMode::HalfAwayFromZero.format(2.5), "3");
        assert_eq!(RoundingMode::HalfToEven.format(2.5), "2");
        assert_eq!(RoundingMode::HalfToEven.format(3.5), "4");
        // 22885.5 -> 22886 under both rules (22886 is even)
        assert_eq!(RoundingMode::HalfAwayFromZero.format(22885.5), "22886");
        assert_eq!(RoundingMode::HalfToEven.format(22885.5), "22886");
        assert_eq!(RoundingMode::HalfToEven.format(22886.5), "22886");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(RoundingMode::HalfAwayFromZero.format(-0.2), "0");
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        let totals = FleetTotals::from_estimates(&[]);
        assert_eq!(totals, FleetTotals::default());
    }
}
