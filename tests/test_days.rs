use chrono::{NaiveDate, NaiveDateTime};
use voltlog_dpp::days::reference_date;
use voltlog_dpp::signal::synthetic_voltage;
use voltlog_dpp::{TimeVolt, DT_FORMAT};

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, DT_FORMAT).expect("bad test datetime")
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("bad test date")
}

fn scenario_series() -> TimeVolt {
    synthetic_voltage(
        dt("2022-04-13 13:05:53"),
        dt("2022-04-17 16:32:45"),
        1,
        6,
        Some(11),
    )
}

#[test]
fn scenario_range_splits_into_five_days() {
    let days = scenario_series().split_days();
    assert_eq!(days.len(), 5);
    let dates: Vec<NaiveDate> = days.iter().map(|d| d.date).collect();
    assert_eq!(
        dates,
        vec![
            date("2022-04-13"),
            date("2022-04-14"),
            date("2022-04-15"),
            date("2022-04-16"),
            date("2022-04-17"),
        ]
    );
    // partial first and last day around three full days
    let counts: Vec<usize> = days.iter().map(|d| d.series.len()).collect();
    assert_eq!(counts, vec![655, 1440, 1440, 1440, 992]);
}

#[test]
fn splitting_drops_reorders_and_duplicates_nothing() {
    let tv = scenario_series();
    let days = tv.split_days();
    let mut time: Vec<NaiveDateTime> = Vec::new();
    let mut volt: Vec<f64> = Vec::new();
    for day in &days {
        time.extend(&day.series.time);
        volt.extend(&day.series.volt);
    }
    assert_eq!(time, tv.time);
    assert_eq!(volt, tv.volt);
}

#[test]
fn every_bucket_sample_shares_the_bucket_date() {
    for day in scenario_series().split_days() {
        for t in &day.series.time {
            assert_eq!(t.date(), day.date);
        }
    }
}

#[test]
fn empty_series_splits_into_zero_buckets() {
    let days = TimeVolt::new(0).split_days();
    assert!(days.is_empty());
}

#[test]
fn unsorted_input_makes_one_bucket_per_run() {
    // sorted input is a precondition; an out-of-order series is not
    // re-sorted and yields one bucket per contiguous same-date run
    let mut tv = TimeVolt::new(3);
    for (t, v) in [
        ("2022-04-13 10:00:00", 12.),
        ("2022-04-14 10:00:00", 12.),
        ("2022-04-13 11:00:00", 12.),
    ]
    .iter()
    {
        tv.time.push(dt(t));
        tv.volt.push(*v);
    }
    assert!(!tv.is_ordered());
    assert_eq!(tv.split_days().len(), 3);
}

#[test]
fn normalize_keeps_voltages_and_order() {
    for day in scenario_series().split_days() {
        let norm = day.normalize();
        assert_eq!(norm.volt, day.series.volt);
        assert_eq!(norm.len(), day.series.len());
    }
}

#[test]
fn normalize_collapses_every_day_onto_the_reference_date() {
    for day in scenario_series().split_days() {
        let norm = day.normalize();
        for (t, orig) in norm.time.iter().zip(day.series.time.iter()) {
            assert_eq!(t.date(), reference_date());
            assert_eq!(t.time(), orig.time());
        }
    }
}

#[test]
fn normalize_preserves_relative_spacing() {
    let days = scenario_series().split_days();
    let day = &days[1];
    let norm = day.normalize();
    for (pair, orig) in norm.time.windows(2).zip(day.series.time.windows(2)) {
        assert_eq!(pair[1] - pair[0], orig[1] - orig[0]);
    }
}

#[test]
fn single_sample_day_normalizes_to_one_point() {
    let mut tv = TimeVolt::new(1);
    tv.time.push(dt("2022-04-13 23:59:00"));
    tv.volt.push(12.3);
    let days = tv.split_days();
    assert_eq!(days.len(), 1);
    let norm = days[0].normalize();
    assert_eq!(norm.len(), 1);
    assert_eq!(norm.time[0], reference_date().and_time(dt("2022-04-13 23:59:00").time()));
}
