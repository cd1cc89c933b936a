//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Tests for the results table and the cell error taxonomy.
//!
//! 测试结果表与单元错误分类。

use fim_bench::config::SupportThreshold;
use fim_bench::models::{CellError, CellFailure, FailureKind, Measurement, ResultsTable, RunResult};
use std::path::{Path, PathBuf};

fn thresholds() -> Vec<SupportThreshold> {
    vec![SupportThreshold(1.0), SupportThreshold(5.0)]
}

fn table() -> ResultsTable {
    ResultsTable::new(
        &[PathBuf::from("a.txt"), PathBuf::from("b.txt")],
        &["X".to_string(), "Y".to_string()],
        &thresholds(),
    )
}

fn measurement(threshold_index: usize, millis: u64) -> Measurement {
    Measurement {
        threshold_index,
        support: thresholds()[threshold_index],
        result: RunResult::timed(millis),
    }
}

fn failure(kind: FailureKind) -> CellFailure {
    CellFailure {
        input_path: PathBuf::from("a.txt"),
        algorithm: "Y".to_string(),
        support: SupportThreshold(5.0),
        kind,
        message: "boom".to_string(),
    }
}

#[cfg(test)]
mod results_table_tests {
    use super::*;

    #[test]
    fn test_new_table_has_empty_series_in_order() {
        let table = table();
        assert_eq!(table.files().len(), 2);
        assert_eq!(table.files()[1].input_path, PathBuf::from("b.txt"));
        let algorithms: Vec<&str> = table.files()[0]
            .series
            .iter()
            .map(|s| s.algorithm.as_str())
            .collect();
        assert_eq!(algorithms, ["X", "Y"]);
        assert_eq!(table.measurement_count(), 0);
    }

    #[test]
    fn test_record_appends_to_the_right_series() {
        let mut table = table();
        assert!(table.record(Path::new("b.txt"), "Y", measurement(0, 10)));
        assert!(table.record(Path::new("b.txt"), "Y", measurement(1, 20)));

        let series = table.series(Path::new("b.txt"), "Y").unwrap();
        assert_eq!(series.elapsed_millis(), vec![10, 20]);
        assert!(table.series(Path::new("a.txt"), "Y").unwrap().measurements.is_empty());
        assert_eq!(table.measurement_count(), 2);
    }

    #[test]
    fn test_record_unknown_pair_is_rejected() {
        let mut table = table();
        assert!(!table.record(Path::new("c.txt"), "X", measurement(0, 10)));
        assert!(!table.record(Path::new("a.txt"), "Z", measurement(0, 10)));
        assert_eq!(table.measurement_count(), 0);
    }

    #[test]
    fn test_skipped_cell_keeps_threshold_alignment() {
        let mut table = table();
        table.record(Path::new("a.txt"), "X", measurement(1, 30));

        let series = table.series(Path::new("a.txt"), "X").unwrap();
        assert_eq!(series.measurements.len(), 1);
        assert!(series.at_threshold(0).is_none());
        assert_eq!(series.at_threshold(1).unwrap().result.elapsed_millis, Some(30));
    }

    #[test]
    fn test_itemset_counts() {
        let mut table = table();
        let mut m = measurement(0, 10);
        m.result = m.result.with_itemsets(3);
        table.record(Path::new("a.txt"), "X", m);

        let series = table.series(Path::new("a.txt"), "X").unwrap();
        assert_eq!(series.itemset_counts(), vec![3]);
    }

    #[test]
    fn test_parse_miss_is_not_a_hard_failure() {
        let mut table = table();
        table.record_failure(failure(FailureKind::ParseMiss));
        assert_eq!(table.failures().len(), 1);
        assert!(!table.has_hard_failures());

        table.record_failure(failure(FailureKind::Execution));
        assert!(table.has_hard_failures());
    }

    #[test]
    fn test_failure_display() {
        assert_eq!(
            failure(FailureKind::Io).to_string(),
            "a.txt / Y @ 5%: boom"
        );
    }
}

#[cfg(test)]
mod cell_error_tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let execution = CellError::Execution {
            command: "java".to_string(),
            reason: "not found".to_string(),
        };
        let io = CellError::Io {
            path: PathBuf::from("output.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(execution.kind(), FailureKind::Execution);
        assert_eq!(CellError::ParseMiss { exit_code: None }.kind(), FailureKind::ParseMiss);
        assert_eq!(io.kind(), FailureKind::Io);
        assert!(FailureKind::Io.is_hard());
    }

    #[test]
    fn test_parse_miss_mentions_exit_code() {
        let err = CellError::ParseMiss { exit_code: Some(1) };
        assert!(err.to_string().contains("exit code 1"));
        let err = CellError::ParseMiss { exit_code: None };
        assert!(!err.to_string().contains("exit code"));
    }

    #[test]
    fn test_io_mentions_path() {
        let err = CellError::Io {
            path: PathBuf::from("output.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("output.txt"));
    }
}
