//! 모듈형 직접공기포집(DAC) 설비의 CO₂ 포집량과 에너지 원단위.

use super::HOURS_PER_YEAR;

/// kWh당 CO₂ [kg/kWh]. 2025-2026 MOF 중간값이며 계통 탄소집약도와 같은 값이다.
pub const KG_CO2_PER_KWH: f64 = 0.4;
/// 총 에너지 원단위 기본값 [kWh/t CO₂]
pub const DEFAULT_GROSS_KWH_PER_TON: f64 = 2000.0;
/// 1 kWh = 3.6 MJ
pub const MJ_PER_KWH: f64 = 3.6;

/// 설비 전력 [kW]으로 연간 CO₂ 포집량 [kg/년]을 계산한다.
///
/// 실측 포집량이 아니라 전력 사용량에 계통 탄소집약도를 곱한 대리 지표다.
pub fn annual_co2_kg(power_kw: f64) -> f64 {
    power_kw * KG_CO2_PER_KWH * HOURS_PER_YEAR
}

/// 에너지 원단위 [kWh/t]를 [GJ/t]로 환산한다.
pub fn net_energy_gj_per_ton(gross_kwh_per_ton: f64) -> f64 {
    gross_kwh_per_ton * MJ_PER_KWH / 1000.0
}

/// 기본 원단위(2000 kWh/t) 기준 [GJ/t].
pub fn default_net_energy_gj_per_ton() -> f64 {
    net_energy_gj_per_ton(DEFAULT_GROSS_KWH_PER_TON)
}
