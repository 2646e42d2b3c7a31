use log::{error, info};
use voltlog_dpp::gen::parse_cli;
use voltlog_dpp::signal::synthetic_voltage;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let (csvout, start, end, minutes, trough_hour, seed) = parse_cli();
    info!(
        "generate synthetic voltage from {} to {} every {} minute(s)",
        start, end, minutes
    );
    let timevolt = synthetic_voltage(start, end, minutes, trough_hour, seed);
    if let Err(e) = timevolt.to_csv(&csvout) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("wrote {} samples to {}", timevolt.len(), csvout.display());
}
