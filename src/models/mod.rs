//! 설치 유형별 연간 제거량 계산 모듈 모음.
//! 각 모듈은 상태를 갖지 않는 순수 함수와 상수로만 구성한다.

pub mod dac_capture;
pub mod electrostatic_filter;
pub mod tree_sequestration;

/// 연간 운전 시간 [h/년]
pub const HOURS_PER_YEAR: f64 = 8760.0;
