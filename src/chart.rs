use crate::days::DayVolt;
use crate::error::VoltError;
use crate::{min_and_max, TimeVolt};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const CHART_SIZE: (u32, u32) = (1600, 800);
const VOLT_MIN: f64 = 10.;
const VOLT_MAX: f64 = 15.;
const TIME_FMT: &str = "%H:%M";

const DAY_COLORS: [RGBColor; 7] = [BLUE, RED, GREEN, CYAN, MAGENTA, YELLOW, BLACK];

/// Plots one day bucket to `<date>.png` under `dir`, creating the
/// directory if needed, and returns the image path.
/// The x-axis spans the bucket's own time extent with hour:minute
/// labels, the y-axis is fixed to the 10-15 V display range.
pub fn plot_daily(day: &DayVolt, dir: &Path) -> Result<PathBuf, VoltError> {
    fs::create_dir_all(dir).map_err(|e| VoltError::io(dir, e))?;
    let fout = dir.join(format!("{}.png", day.date));
    let (xminlocal, xmaxlocal) = time_bounds(&day.series.time[..]);
    let root = BitMapBackend::new(&fout, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(day.date.to_string(), ("sans-serif", 32))
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(xminlocal..xmaxlocal, VOLT_MIN..VOLT_MAX)?;
    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(RGBColor(150, 150, 150).stroke_width(2))
        .set_all_tick_mark_size(2)
        .label_style(("sans-serif", 24))
        .y_desc("Voltage (V)")
        .x_desc("Time")
        .x_labels(14)
        .x_label_formatter(&|x: &DateTime<Utc>| x.format(TIME_FMT).to_string())
        .y_label_formatter(&|y: &f64| format!("{:5}", y))
        .draw()?;
    let line = LineSeries::new(
        day.series
            .time
            .iter()
            .zip(day.series.volt.iter())
            .map(|(x, y)| (TimeZone::from_utc_datetime(&Utc, x), *y)),
        RGBColor(30, 90, 180).stroke_width(2),
    );
    chart.draw_series(line)?;
    root.present()?;
    drop(chart);
    drop(root);
    Ok(fout)
}

/// Overlays every day bucket on one axes, each normalized onto the
/// shared reference date so only the time of day remains, and writes
/// `cumulative.png` under `dir`.
pub fn plot_cumulative(days: &[DayVolt], dir: &Path) -> Result<PathBuf, VoltError> {
    let (first, last) = match (days.first(), days.last()) {
        (Some(f), Some(l)) => (f.date, l.date),
        _ => return Err(VoltError::Plot("no day series to overlay".to_string())),
    };
    fs::create_dir_all(dir).map_err(|e| VoltError::io(dir, e))?;
    let fout = dir.join("cumulative.png");
    let overlays: Vec<(NaiveDate, TimeVolt)> =
        days.iter().map(|d| (d.date, d.normalize())).collect();
    let all_times: Vec<NaiveDateTime> = overlays
        .iter()
        .flat_map(|(_, s)| s.time.iter().copied())
        .collect();
    let (xminlocal, xmaxlocal) = time_bounds(&all_times[..]);
    let root = BitMapBackend::new(&fout, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("{} to {}", first, last), ("sans-serif", 32))
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(xminlocal..xmaxlocal, VOLT_MIN..VOLT_MAX)?;
    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(RGBColor(150, 150, 150).stroke_width(2))
        .set_all_tick_mark_size(2)
        .label_style(("sans-serif", 24))
        .y_desc("Voltage (V)")
        .x_desc("Time")
        .x_labels(14)
        .x_label_formatter(&|x: &DateTime<Utc>| x.format(TIME_FMT).to_string())
        .y_label_formatter(&|y: &f64| format!("{:5}", y))
        .draw()?;
    for (i, (date, series)) in overlays.iter().enumerate() {
        let color = DAY_COLORS[i % DAY_COLORS.len()];
        let line = LineSeries::new(
            series
                .time
                .iter()
                .zip(series.volt.iter())
                .map(|(x, y)| (TimeZone::from_utc_datetime(&Utc, x), *y)),
            color.stroke_width(2),
        );
        chart
            .draw_series(line)?
            .label(date.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }
    chart
        .configure_series_labels()
        .border_style(&BLACK.mix(0.4))
        .background_style(&WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    drop(chart);
    drop(root);
    Ok(fout)
}

/// x-axis bounds with a small margin on each side; a single-sample
/// series gets widened by a minute per side so the range stays valid.
fn time_bounds(times: &[NaiveDateTime]) -> (DateTime<Utc>, DateTime<Utc>) {
    let (mut xmindt, mut xmaxdt) = min_and_max(times);
    if xmindt == xmaxdt {
        xmindt -= chrono::Duration::minutes(1);
        xmaxdt += chrono::Duration::minutes(1);
    }
    let xmargin = (xmaxdt - xmindt) / 20;
    (
        TimeZone::from_utc_datetime(&Utc, &(xmindt - xmargin)),
        TimeZone::from_utc_datetime(&Utc, &(xmaxdt + xmargin)),
    )
}
