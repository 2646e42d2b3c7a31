use chrono::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub mod chart;
pub mod days;
pub mod error;
pub mod gen;
pub mod plot;
pub mod signal;

use days::DayVolt;
use error::VoltError;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

pub const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The main struct for the voltage time series
#[derive(Debug, Clone)]
pub struct TimeVolt {
    pub time: Vec<NaiveDateTime>,
    pub volt: Vec<f64>,
}

impl TimeVolt {
    pub fn new(capacity: usize) -> TimeVolt {
        let time: Vec<NaiveDateTime> = Vec::with_capacity(capacity);
        let volt: Vec<f64> = Vec::with_capacity(capacity);
        TimeVolt { time, volt }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Init a TimeVolt from csv.
    /// Rows are `datetime,voltage`; a first line that does not parse
    /// as a sample is taken as the optional header and skipped.
    /// Any other unparseable line aborts the whole load,
    /// no partial series is returned.
    /// Rows are taken in file order, ordering of the series is
    /// not checked here, see `is_ordered`.
    pub fn from_csv(fin: &Path) -> Result<TimeVolt, VoltError> {
        let file = File::open(fin).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => VoltError::NotFound {
                path: fin.to_path_buf(),
            },
            _ => VoltError::io(fin, e),
        })?;
        let buf = BufReader::new(file);
        let mut timevolt = TimeVolt::new(10000);
        for (i, l) in buf.lines().enumerate() {
            let line = l.map_err(|e| VoltError::io(fin, e))?;
            match parse_row(&line) {
                Some((t, v)) => {
                    timevolt.time.push(t);
                    timevolt.volt.push(v);
                }
                None if i == 0 => continue,
                None => {
                    return Err(VoltError::MalformedRow {
                        path: fin.to_path_buf(),
                        line: i + 1,
                        row: line,
                    })
                }
            }
        }
        Ok(timevolt)
    }

    /// writes the datetime and voltage columns as a headerless csv at the given path
    pub fn to_csv(&self, fout: &Path) -> Result<(), VoltError> {
        let file = File::create(fout).map_err(|e| VoltError::io(fout, e))?;
        let mut buf = BufWriter::new(file);
        for (t, v) in self.time.iter().zip(self.volt.iter()) {
            writeln!(buf, "{},{}", t.format(DT_FORMAT), v).map_err(|e| VoltError::io(fout, e))?;
        }
        buf.flush().map_err(|e| VoltError::io(fout, e))?;
        Ok(())
    }

    /// true when the timestamps are strictly increasing
    pub fn is_ordered(&self) -> bool {
        self.time.windows(2).all(|w| w[0] < w[1])
    }

    /// Splits the series into contiguous calendar-day buckets.
    /// Single forward pass, a date change flushes the current bucket;
    /// requires the series to be sorted by time, an unsorted series
    /// produces one bucket per same-date run instead.
    pub fn split_days(&self) -> Vec<DayVolt> {
        let mut buckets: Vec<DayVolt> = Vec::new();
        let mut current: Option<DayVolt> = None;
        for (&t, &v) in self.time.iter().zip(self.volt.iter()) {
            let date = t.date();
            match current.as_mut() {
                Some(day) if day.date == date => {
                    day.series.time.push(t);
                    day.series.volt.push(v);
                }
                _ => {
                    if let Some(done) = current.take() {
                        buckets.push(done);
                    }
                    let mut series = TimeVolt::new(1440);
                    series.time.push(t);
                    series.volt.push(v);
                    current = Some(DayVolt { date, series });
                }
            }
        }
        if let Some(done) = current {
            buckets.push(done);
        }
        buckets
    }
}

fn parse_row(line: &str) -> Option<(NaiveDateTime, f64)> {
    let mut fields = line.split(',');
    let dt = fields.next()?;
    let v = fields.next()?;
    let dt = NaiveDateTime::parse_from_str(dt.trim(), DT_FORMAT).ok()?;
    let v: f64 = v.trim().parse().ok()?;
    Some((dt, v))
}

impl std::fmt::Display for TimeVolt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "datetime, voltage [V]")?;
        for (t, v) in self.time.iter().zip(self.volt.iter()) {
            writeln!(f, "{},{}", t.format(DT_FORMAT), v)?
        }
        Ok(())
    }
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    (min, max)
}
