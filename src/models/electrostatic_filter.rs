//! 태양광 구동 전기집진 필터의 PM2.5 포집량.

use super::HOURS_PER_YEAR;

/// 포집 효율(0~1), 상용 장비 기준
pub const EFFICIENCY: f64 = 0.95;
/// 전력 1 kW당 처리 풍량 [m³/h] (도심 파일럿 환산값)
pub const FLOW_M3_PER_HOUR_PER_KW: f64 = 2000.0;
/// 농도 환산 제수. 기준 농도 [µg/m³]를 이 값으로 나눠 질량 농도로 쓴다.
pub const CONCENTRATION_DIVISOR: f64 = 1e6;

/// 설비 전력 [kW]과 기준 농도 [µg/m³]로 연간 PM2.5 포집량 [kg/년]을 계산한다.
///
/// 전력 → 풍량 → 유입 질량 → 포집 질량 순서로 환산한다.
pub fn annual_pm25_kg(power_kw: f64, baseline_ug_m3: f64) -> f64 {
    let flow_m3_year = power_kw * FLOW_M3_PER_HOUR_PER_KW * HOURS_PER_YEAR;
    let inlet_kg_year = (baseline_ug_m3 / CONCENTRATION_DIVISOR) * flow_m3_year;
    EFFICIENCY * inlet_kg_year
}
