use env_logger::Env;
use phoenix_air_cleanup::{app, config};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 지점별 보고서를 출력한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cfg = config::load_or_default()?;
    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.log_level.as_str())).init();
    app::run(&cfg)
}
