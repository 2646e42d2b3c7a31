use log::{error, info, warn};
use std::path::Path;
use std::time::Instant;
use voltlog_dpp::chart::{plot_cumulative, plot_daily};
use voltlog_dpp::error::VoltError;
use voltlog_dpp::plot::parse_cli;
use voltlog_dpp::TimeVolt;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let (csvin, dirout) = parse_cli();
    info!(
        "read data from {} and plot to {}",
        csvin.display(),
        dirout.display()
    );
    let started = Instant::now();
    match run(&csvin, &dirout) {
        Ok(n) => info!(
            "plotted {} day(s) in {:.3} ms",
            n,
            started.elapsed().as_secs_f64() * 1e3
        ),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(csvin: &Path, dirout: &Path) -> Result<usize, VoltError> {
    let timevolt = TimeVolt::from_csv(csvin)?;
    if !timevolt.is_ordered() {
        warn!(
            "timestamps in {} are not strictly increasing, day buckets may repeat",
            csvin.display()
        );
    }
    let days = timevolt.split_days();
    for day in &days {
        let fout = plot_daily(day, dirout)?;
        info!("wrote {}", fout.display());
    }
    let fout = plot_cumulative(&days, dirout)?;
    info!("wrote {}", fout.display());
    Ok(days.len())
}
