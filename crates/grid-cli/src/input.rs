//! Input loading and aggregator-to-detector adapters

use crate::error::{CliError, CliResult};
use grid_aggregator::Point;
use grid_anomaly::Reading;
use serde::de::DeserializeOwned;
use std::io::Read;
use tracing::debug;

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_json<T: DeserializeOwned>(path: &str) -> CliResult<T> {
    let contents = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    if contents.trim().is_empty() {
        return Err(CliError::InvalidInput(format!("{path}: empty input")));
    }
    let value = serde_json::from_str(&contents)?;
    debug!(path, bytes = contents.len(), "parsed input");
    Ok(value)
}

/// One reading per point, timestamped in epoch seconds.
pub fn readings_from_points(points: &[Point]) -> Vec<Reading> {
    points
        .iter()
        .map(|p| Reading::new(p.value, p.timestamp.timestamp()))
        .collect()
}

/// One reading per UTC day holding that day's total, timestamped at midnight
/// in epoch seconds, in chronological order.
pub fn daily_readings(points: &[Point]) -> Vec<Reading> {
    grid_aggregator::group_by_day(points)
        .into_iter()
        .filter_map(|(day, total)| {
            let midnight = day.and_hms_opt(0, 0, 0)?.and_utc();
            Some(Reading::new(total, midnight.timestamp()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;

    #[test]
    fn read_json_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"consumption": 1.5, "timestamp": 10}}]"#).unwrap();
        let readings: Vec<Reading> = read_json(file.path().to_str().unwrap()).unwrap();
        assert_eq!(readings, vec![Reading::new(1.5, 10)]);
    }

    #[test]
    fn read_json_empty_file_is_invalid_input() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = read_json::<Vec<Reading>>(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn read_json_missing_file_is_io_error() {
        let err = read_json::<Vec<Reading>>("/nonexistent/readings.json").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn points_become_epoch_readings() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let readings = readings_from_points(&[Point::new(3.0, ts)]);
        assert_eq!(readings, vec![Reading::new(3.0, 1_704_067_200)]);
    }

    #[test]
    fn daily_readings_are_day_totals() {
        let points = vec![
            Point::new(1.0, Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap()),
            Point::new(2.0, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()),
            Point::new(4.0, Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap()),
        ];
        let readings = daily_readings(&points);
        assert_eq!(
            readings,
            vec![
                Reading::new(6.0, 1_704_067_200),
                Reading::new(1.0, 1_704_153_600),
            ]
        );
    }
}
