use chrono::NaiveDateTime;
use log::{error, info};
use std::path::Path;
use std::time::Instant;
use voltlog_dpp::chart::{plot_cumulative, plot_daily};
use voltlog_dpp::error::VoltError;
use voltlog_dpp::signal::synthetic_voltage;
use voltlog_dpp::{TimeVolt, DT_FORMAT};

const TESTFILE_PATH: &str = "testlog.csv";
const DAILY_DIR: &str = "data/test/daily";
const TEST_START: &str = "2022-04-13 13:05:53";
const TEST_END: &str = "2022-04-17 16:32:45";
const TROUGH_HOUR: u32 = 6;

/// Full pipeline self test: generate a series, persist it, load it
/// back, and plot the daily charts and the cumulative overlay.
fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let started = Instant::now();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
    info!(
        "test files generated in {:.3} ms",
        started.elapsed().as_secs_f64() * 1e3
    );
}

fn run() -> Result<(), VoltError> {
    let start = NaiveDateTime::parse_from_str(TEST_START, DT_FORMAT).expect("bad test start");
    let end = NaiveDateTime::parse_from_str(TEST_END, DT_FORMAT).expect("bad test end");
    let timevolt = synthetic_voltage(start, end, 1, TROUGH_HOUR, None);
    timevolt.to_csv(Path::new(TESTFILE_PATH))?;
    let timevolt = TimeVolt::from_csv(Path::new(TESTFILE_PATH))?;
    let days = timevolt.split_days();
    let dir = Path::new(DAILY_DIR);
    for day in &days {
        let fout = plot_daily(day, dir)?;
        info!("wrote {}", fout.display());
    }
    let fout = plot_cumulative(&days, dir)?;
    info!("wrote {}", fout.display());
    Ok(())
}
