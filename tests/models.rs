//! 계산기 공식 회귀 테스트.
use phoenix_air_cleanup::models::{dac_capture, electrostatic_filter, tree_sequestration};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn tree_removal_is_per_tree_constant() {
    for trees in [0_u32, 1, 7, 2000, 123_456] {
        let t = f64::from(trees);
        assert_close("co2", tree_sequestration::annual_co2_kg(trees), 18.0 * t, 1e-9);
        assert_close("pm25", tree_sequestration::annual_pm25_kg(trees), 0.45 * t, 1e-9);
    }
}

#[test]
fn eco_score_is_separable_in_co2() {
    let (a, b, c) = (36_000.0, 250.0, 900.0);
    let lhs = tree_sequestration::eco_impact_score(a + b, c);
    let rhs = tree_sequestration::eco_impact_score(a, c) + b / 10.0;
    assert_close("score", lhs, rhs, 1e-9);
    // 2000 trees: 36000/10 + 900/0.1
    assert_close("score2000", tree_sequestration::eco_impact_score(a, c), 12_600.0, 1e-9);
}

#[test]
fn filter_scales_linearly_in_both_inputs() {
    let base = electrostatic_filter::annual_pm25_kg(50.0, 27.5);
    assert_close("2x power", electrostatic_filter::annual_pm25_kg(100.0, 27.5), 2.0 * base, 1e-9);
    assert_close("2x baseline", electrostatic_filter::annual_pm25_kg(50.0, 55.0), 2.0 * base, 1e-9);
    assert_eq!(electrostatic_filter::annual_pm25_kg(0.0, 27.5), 0.0);
    assert_eq!(electrostatic_filter::annual_pm25_kg(50.0, 0.0), 0.0);
}

#[test]
fn filter_reference_node() {
    // 0.95 * 27.5e-6 * 50 * 2000 * 8760
    assert_close("pm25", electrostatic_filter::annual_pm25_kg(50.0, 27.5), 22_885.5, 1e-9);
}

#[test]
fn dac_co2_from_power() {
    assert_eq!(dac_capture::annual_co2_kg(0.0), 0.0);
    assert_close("50kW", dac_capture::annual_co2_kg(50.0), 175_200.0, 1e-12);
}

#[test]
fn dac_energy_intensity_in_gj() {
    assert_close("2000", dac_capture::net_energy_gj_per_ton(2000.0), 7.2, 1e-12);
    assert_close("default", dac_capture::default_net_energy_gj_per_ton(), 7.2, 1e-12);
    assert_eq!(dac_capture::net_energy_gj_per_ton(0.0), 0.0);
}
