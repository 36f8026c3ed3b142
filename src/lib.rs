//! 핵심 계산 로직을 라이브러리로 분리하여 보고서 드라이버와 테스트가 함께 쓴다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod models;
pub mod report;
pub mod site;
