use crate::TimeVolt;
use chrono::NaiveDate;

/// One calendar day of voltage samples, as produced by `TimeVolt::split_days`.
/// Every sample in `series` falls on `date`.
#[derive(Debug, Clone)]
pub struct DayVolt {
    pub date: NaiveDate,
    pub series: TimeVolt,
}

/// Sentinel date all days collapse onto for the cumulative overlay.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

impl DayVolt {
    /// Rewrites every timestamp onto `reference_date`, keeping the
    /// time of day, so that all days share one x-axis domain.
    /// Ordering and voltages are untouched; never persisted.
    pub fn normalize(&self) -> TimeVolt {
        let mut timevolt = TimeVolt::new(self.series.len());
        for (&t, &v) in self.series.time.iter().zip(self.series.volt.iter()) {
            timevolt.time.push(reference_date().and_time(t.time()));
            timevolt.volt.push(v);
        }
        timevolt
    }
}
