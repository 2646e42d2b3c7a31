use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the daily voltage charts.
pub fn parse_cli() -> (PathBuf, PathBuf) {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name for the input csv file")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .required(true)
        .default_value("testlog.csv");
    let arg_dirout = Arg::with_name("output_directory")
        .help("directory for the daily and cumulative png files")
        .short("d")
        .long("dir")
        .takes_value(true)
        .default_value("data/test/daily");
    let cli_args = App::new("Voltlog_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the daily and cumulative voltage charts")
        .arg(arg_csvin)
        .arg(arg_dirout)
        .get_matches();
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or_default());
    let dirout = PathBuf::from(cli_args.value_of("output_directory").unwrap_or_default());
    return (csvin, dirout);
}
