//! 사막 적응 수종 기준 가로수 식재의 CO₂/PM2.5 제거량.

/// 수목 1그루당 연간 CO₂ 흡수량 [kg/년] (2025 사막 적응 수종 평균)
pub const CO2_PER_TREE_KG_PER_YEAR: f64 = 18.0;
/// 수목 1그루당 연간 PM2.5 침착량 [kg/년]
pub const PM25_PER_TREE_KG_PER_YEAR: f64 = 0.45;

/// 그루 수로 연간 CO₂ 흡수량 [kg/년]을 계산한다.
pub fn annual_co2_kg(trees: u32) -> f64 {
    f64::from(trees) * CO2_PER_TREE_KG_PER_YEAR
}

/// 그루 수로 연간 PM2.5 제거량 [kg/년]을 계산한다.
pub fn annual_pm25_kg(trees: u32) -> f64 {
    f64::from(trees) * PM25_PER_TREE_KG_PER_YEAR
}

/// 기후/건강 가중 종합 점수. 질량당 PM2.5를 CO₂보다 100배 무겁게 본다.
pub fn eco_impact_score(co2_kg: f64, pm25_kg: f64) -> f64 {
    (co2_kg / 10.0) + (pm25_kg / 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_trees_remove_nothing() {
        assert_eq!(annual_co2_kg(0), 0.0);
        assert_eq!(annual_pm25_kg(0), 0.0);
        assert_eq!(eco_impact_score(0.0, 0.0), 0.0);
    }

    #[test]
    fn score_weights_pm25_heavier() {
        // 1 kg PM2.5 == 100 kg CO2
        assert!((eco_impact_score(100.0, 0.0) - eco_impact_score(0.0, 1.0)).abs() < 1e-9);
    }
}
