use super::{DT_FORMAT, VERSION};
use chrono::NaiveDateTime;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the synthetic series generation.
pub fn parse_cli() -> (PathBuf, NaiveDateTime, NaiveDateTime, u32, u32, Option<u64>) {
    let arg_csvout = Arg::with_name("output_csvfile")
        .help("name for the output csv file")
        .short("o")
        .long("csvfile")
        .takes_value(true)
        .required(true)
        .default_value("testlog.csv");
    let arg_start = Arg::with_name("start")
        .help("first sample datetime, as yyyy-mm-dd HH:MM:SS")
        .short("s")
        .long("start")
        .takes_value(true)
        .default_value("2022-04-13 13:05:53");
    let arg_end = Arg::with_name("end")
        .help("last sample datetime, as yyyy-mm-dd HH:MM:SS")
        .short("e")
        .long("end")
        .takes_value(true)
        .default_value("2022-04-17 16:32:45");
    let arg_minutes = Arg::with_name("minutes")
        .help("time step between samples, in minutes")
        .short("m")
        .long("minutes")
        .takes_value(true)
        .default_value("1");
    let arg_trough = Arg::with_name("trough_hour")
        .help("hour of day at which the daily voltage cycle bottoms out")
        .short("t")
        .long("trough")
        .takes_value(true)
        .default_value("6");
    let arg_seed = Arg::with_name("seed")
        .help("seed for the ripple phase offset, drawn at random when omitted")
        .long("seed")
        .takes_value(true);
    let cli_args = App::new("Voltlog_gen")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to generate a synthetic voltage time series")
        .arg(arg_csvout)
        .arg(arg_start)
        .arg(arg_end)
        .arg(arg_minutes)
        .arg(arg_trough)
        .arg(arg_seed)
        .get_matches();
    let csvout = PathBuf::from(cli_args.value_of("output_csvfile").unwrap_or_default());
    let start = NaiveDateTime::parse_from_str(cli_args.value_of("start").unwrap_or_default(), DT_FORMAT)
        .expect("start is not a valid datetime");
    let end = NaiveDateTime::parse_from_str(cli_args.value_of("end").unwrap_or_default(), DT_FORMAT)
        .expect("end is not a valid datetime");
    let minutes = cli_args
        .value_of("minutes")
        .unwrap_or_default()
        .parse::<u32>()
        .expect("minutes is not a valid integer");
    let trough_hour = cli_args
        .value_of("trough_hour")
        .unwrap_or_default()
        .parse::<u32>()
        .expect("trough hour is not a valid integer");
    let seed = cli_args
        .value_of("seed")
        .map(|s| s.parse::<u64>().expect("seed is not a valid integer"));
    return (csvout, start, end, minutes, trough_hour, seed);
}
