use crate::TimeVolt;
use chrono::{NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

pub const BASELINE_VOLT: f64 = 12.5;
pub const CLIP_VOLT: f64 = 14.0;
const FAST_AMPLITUDE: f64 = 0.5;
const FAST_PERIOD: f64 = 2000.;
const SLOW_AMPLITUDE: f64 = 2.0;
const DAY_PERIOD: f64 = 1440.;

/// Models the voltage as a daily sine cycle with its trough at
/// `trough_hour` hours into the day, plus a fast low-amplitude ripple
/// with a phase offset drawn once per call, clipped at 14 V
/// (no lower clip).
/// One sample per `step_minutes` from `start` to `end`, inclusive of
/// `start`; an inverted range or a zero step yields an empty series.
/// Pass a seed to make the phase offset reproducible, `None` draws it
/// from the thread rng.
pub fn synthetic_voltage(
    start: NaiveDateTime,
    end: NaiveDateTime,
    step_minutes: u32,
    trough_hour: u32,
    seed: Option<u64>,
) -> TimeVolt {
    if end < start || step_minutes == 0 {
        return TimeVolt::new(0);
    }
    let capacity = ((end - start).num_minutes() / step_minutes as i64 + 1) as usize;
    let mut timevolt = TimeVolt::new(capacity);
    let phase_offset: f64 = match seed {
        Some(s) => StdRng::seed_from_u64(s).gen(),
        None => rand::thread_rng().gen(),
    };
    let hour_shift = (start.hour() as f64 - trough_hour as f64) * 60.;
    let step = chrono::Duration::minutes(step_minutes as i64);
    let mut t = start;
    let mut i = 0.;
    while t <= end {
        let fast = FAST_AMPLITUDE * (2. * PI * i / FAST_PERIOD - phase_offset).sin();
        let slow = SLOW_AMPLITUDE * (2. * PI * (i + hour_shift) / DAY_PERIOD - PI / 2.).sin();
        timevolt.time.push(t);
        timevolt.volt.push((BASELINE_VOLT + fast + slow).min(CLIP_VOLT));
        t += step;
        i += 1.;
    }
    timevolt
}
