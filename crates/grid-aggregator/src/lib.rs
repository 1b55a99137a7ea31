//! # grid-aggregator
//!
//! Aggregation helpers over timestamped consumption points: totals, means,
//! simple moving averages, and per-day totals.
//!
//! All functions borrow their input and return owned results. Empty or
//! too-short input produces a neutral value (`0.0` or an empty collection).

#![deny(unsafe_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A timestamped numeric value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

impl Point {
    pub fn new(value: f64, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }
}

/// Sum of all values.
pub fn sum(points: &[Point]) -> f64 {
    points.iter().map(|p| p.value).sum()
}

/// Arithmetic mean, or `0.0` for no points.
pub fn average(points: &[Point]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    sum(points) / points.len() as f64
}

/// Total value per UTC calendar day, keyed in chronological order.
pub fn group_by_day(points: &[Point]) -> BTreeMap<NaiveDate, f64> {
    let mut days = BTreeMap::new();
    for p in points {
        *days.entry(p.timestamp.date_naive()).or_insert(0.0) += p.value;
    }
    days
}

/// Simple moving average over `window_size` consecutive points.
///
/// Yields `len - window_size + 1` means. A zero window or fewer points than
/// the window yields an empty vector.
pub fn moving_average(points: &[Point], window_size: usize) -> Vec<f64> {
    if window_size == 0 || points.len() < window_size {
        debug!(
            points = points.len(),
            window_size, "moving average skipped: not enough points"
        );
        return Vec::new();
    }

    let mut averages = Vec::with_capacity(points.len() - window_size + 1);
    let mut window_sum = 0.0;
    for (i, p) in points.iter().enumerate() {
        window_sum += p.value;
        if i >= window_size {
            window_sum -= points[i - window_size].value;
        }
        if i + 1 >= window_size {
            averages.push(window_sum / window_size as f64);
        }
    }
    averages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    fn daily(values: &[f64]) -> Vec<Point> {
        let start = at(1, 12);
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(v, start + Duration::days(i as i64)))
            .collect()
    }

    #[test]
    fn sum_and_average() {
        let points = daily(&[10.0, 15.0, 20.0, 25.0]);
        assert_eq!(sum(&points), 70.0);
        assert_eq!(average(&points), 17.5);
    }

    #[test]
    fn empty_input_is_neutral() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(average(&[]), 0.0);
        assert!(group_by_day(&[]).is_empty());
        assert!(moving_average(&[], 1).is_empty());
    }

    #[test]
    fn moving_average_window_two() {
        let points = daily(&[10.0, 15.0, 20.0, 25.0]);
        assert_eq!(moving_average(&points, 2), vec![12.5, 17.5, 22.5]);
    }

    #[test]
    fn moving_average_window_equal_to_len() {
        let points = daily(&[1.0, 2.0, 3.0]);
        assert_eq!(moving_average(&points, 3), vec![2.0]);
    }

    #[test]
    fn moving_average_window_one_is_identity() {
        let points = daily(&[4.0, 8.0, 6.0]);
        assert_eq!(moving_average(&points, 1), vec![4.0, 8.0, 6.0]);
    }

    #[test]
    fn moving_average_degenerate_windows() {
        let points = daily(&[1.0, 2.0, 3.0]);
        assert!(moving_average(&points, 0).is_empty());
        assert!(moving_average(&points, 4).is_empty());
    }

    #[test]
    fn group_by_day_sums_within_day() {
        let points = vec![
            Point::new(5.0, at(2, 23)),
            Point::new(1.0, at(1, 0)),
            Point::new(2.0, at(1, 13)),
            Point::new(3.0, at(2, 1)),
        ];
        let days = group_by_day(&points);
        let keys: Vec<String> = days.keys().map(|d| d.to_string()).collect();
        assert_eq!(keys, vec!["2024-03-01", "2024-03-02"]);
        assert_eq!(days[&NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()], 3.0);
        assert_eq!(days[&NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()], 8.0);
    }

    #[test]
    fn point_serialization() {
        let p = Point::new(12.5, at(5, 6));
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("2024-03-05T06:00:00Z"));
        let restored: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);
    }
}
