//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures passed between the stages of a
//! benchmark run: the parameters of one tool invocation, the result extracted
//! from it, the per-cell error taxonomy, and the results table that accumulates
//! every measurement of a run.
//!
//! 此模块定义了基准测试运行各阶段之间传递的数据结构：单次工具调用的参数、
//! 从中提取的结果、单元级错误分类，以及累积一次运行所有测量值的结果表。

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::config::SupportThreshold;

/// Everything needed to launch the mining tool for one cell of the matrix.
/// Built fresh for every cell and never mutated.
///
/// 为矩阵中的一个单元启动挖掘工具所需的全部信息。
/// 每个单元都会重新构建，且不会被修改。
#[derive(Debug, Clone, PartialEq)]
pub struct RunParameters {
    pub algorithm: String,
    pub support: SupportThreshold,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// What one tool invocation produced.
/// 单次工具调用产生的结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    /// Absent when the tool's output carried no `Total time ~ N ms` marker.
    /// 当工具输出中没有 `Total time ~ N ms` 标记时为空。
    pub elapsed_millis: Option<u64>,
    /// Absent when itemset counting is disabled for this benchmark.
    /// 当此基准测试未启用项集计数时为空。
    pub itemset_count: Option<u64>,
}

impl RunResult {
    pub fn timed(elapsed_millis: u64) -> Self {
        Self {
            elapsed_millis: Some(elapsed_millis),
            itemset_count: None,
        }
    }

    pub fn with_itemsets(mut self, count: u64) -> Self {
        self.itemset_count = Some(count);
        self
    }
}

/// Enumerates the ways a single cell can fail.
/// None of them aborts the overall run.
///
/// 枚举单个单元可能失败的方式。
/// 它们都不会中止整个运行。
#[derive(Debug, thiserror::Error)]
pub enum CellError {
    /// The tool could not be started, was killed, or timed out.
    /// 工具无法启动、被终止或超时。
    #[error("failed to execute `{command}`: {reason}")]
    Execution { command: String, reason: String },

    /// The tool ran but its output had no elapsed-time marker.
    /// 工具已运行，但其输出中没有耗时标记。
    #[error("no `Total time ~ N ms` marker in tool output{}", describe_exit(.exit_code))]
    ParseMiss { exit_code: Option<i32> },

    /// The result artifact could not be read.
    /// 无法读取结果文件。
    #[error("failed to read result artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!(" (exit code {code})"),
        None => String::new(),
    }
}

impl CellError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CellError::Execution { .. } => FailureKind::Execution,
            CellError::ParseMiss { .. } => FailureKind::ParseMiss,
            CellError::Io { .. } => FailureKind::Io,
        }
    }
}

/// Category of a recorded cell failure.
/// 已记录的单元失败的类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Execution,
    ParseMiss,
    Io,
}

impl FailureKind {
    /// A parse miss is a soft failure: the cell is skipped but the run is still healthy.
    /// 解析缺失属于软失败：该单元被跳过，但运行仍视为正常。
    pub fn is_hard(self) -> bool {
        !matches!(self, FailureKind::ParseMiss)
    }
}

/// A cell that did not produce a measurement, kept for the final summary.
/// 未产生测量值的单元，保留用于最终摘要。
#[derive(Debug, Clone, PartialEq)]
pub struct CellFailure {
    pub input_path: PathBuf,
    pub algorithm: String,
    pub support: SupportThreshold,
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for CellFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} @ {}%: {}",
            self.input_path.display(),
            self.algorithm,
            self.support,
            self.message
        )
    }
}

/// One recorded cell. `threshold_index` points into `ResultsTable::thresholds`,
/// so a sequence with skipped cells still lines up with the thresholds.
///
/// 一个已记录的单元。`threshold_index` 指向 `ResultsTable::thresholds`，
/// 因此即使序列中有被跳过的单元，也仍能与阈值对齐。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub threshold_index: usize,
    pub support: SupportThreshold,
    pub result: RunResult,
}

/// Measurements of one algorithm on one input file, in threshold order.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSeries {
    pub algorithm: String,
    pub measurements: Vec<Measurement>,
}

impl AlgorithmSeries {
    pub fn elapsed_millis(&self) -> Vec<u64> {
        self.measurements
            .iter()
            .filter_map(|m| m.result.elapsed_millis)
            .collect()
    }

    pub fn itemset_counts(&self) -> Vec<u64> {
        self.measurements
            .iter()
            .filter_map(|m| m.result.itemset_count)
            .collect()
    }

    /// The measurement taken at the given threshold, if that cell succeeded.
    /// 在给定阈值下的测量值（如果该单元成功）。
    pub fn at_threshold(&self, threshold_index: usize) -> Option<&Measurement> {
        self.measurements
            .iter()
            .find(|m| m.threshold_index == threshold_index)
    }
}

/// All series measured on one input file, in algorithm order.
#[derive(Debug, Clone, PartialEq)]
pub struct FileResults {
    pub input_path: PathBuf,
    pub series: Vec<AlgorithmSeries>,
}

impl FileResults {
    pub fn series(&self, algorithm: &str) -> Option<&AlgorithmSeries> {
        self.series.iter().find(|s| s.algorithm == algorithm)
    }
}

/// Every measurement of one benchmark run: input file -> algorithm -> sequence.
///
/// Files and algorithms keep configuration order. A cell that did not yield an
/// elapsed time is left out of its sequence and listed in `failures` instead;
/// the surviving measurements keep their threshold index. When every cell
/// succeeds each sequence holds exactly one measurement per threshold.
///
/// 一次基准测试运行的全部测量值：输入文件 -> 算法 -> 序列。
///
/// 文件和算法保持配置中的顺序。未得到耗时的单元不会加入其序列，而是记录在
/// `failures` 中；保留下来的测量值保存其阈值索引。当所有单元都成功时，
/// 每个序列对每个阈值恰好包含一个测量值。
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    thresholds: Vec<SupportThreshold>,
    files: Vec<FileResults>,
    failures: Vec<CellFailure>,
}

impl ResultsTable {
    /// Creates a table with an empty sequence for every (file, algorithm) pair.
    /// 为每个（文件，算法）对创建一个空序列的表。
    pub fn new(
        input_paths: &[PathBuf],
        algorithms: &[String],
        thresholds: &[SupportThreshold],
    ) -> Self {
        let files = input_paths
            .iter()
            .map(|input_path| FileResults {
                input_path: input_path.clone(),
                series: algorithms
                    .iter()
                    .map(|algorithm| AlgorithmSeries {
                        algorithm: algorithm.clone(),
                        measurements: Vec::new(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            thresholds: thresholds.to_vec(),
            files,
            failures: Vec::new(),
        }
    }

    pub fn thresholds(&self) -> &[SupportThreshold] {
        &self.thresholds
    }

    pub fn files(&self) -> &[FileResults] {
        &self.files
    }

    pub fn file(&self, input_path: &Path) -> Option<&FileResults> {
        self.files.iter().find(|f| f.input_path == input_path)
    }

    pub fn series(&self, input_path: &Path, algorithm: &str) -> Option<&AlgorithmSeries> {
        self.file(input_path)?.series(algorithm)
    }

    pub fn failures(&self) -> &[CellFailure] {
        &self.failures
    }

    pub fn has_hard_failures(&self) -> bool {
        self.failures.iter().any(|f| f.kind.is_hard())
    }

    /// Total number of recorded measurements across all series.
    pub fn measurement_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| &f.series)
            .map(|s| s.measurements.len())
            .sum()
    }

    /// Appends a measurement to the (file, algorithm) sequence.
    /// Returns `false` when the pair is not part of the table.
    ///
    /// 将测量值追加到（文件，算法）序列。
    /// 如果该对不在表中，则返回 `false`。
    pub fn record(&mut self, input_path: &Path, algorithm: &str, measurement: Measurement) -> bool {
        let series = self
            .files
            .iter_mut()
            .find(|f| f.input_path == input_path)
            .and_then(|f| f.series.iter_mut().find(|s| s.algorithm == algorithm));

        match series {
            Some(series) => {
                series.measurements.push(measurement);
                true
            }
            None => false,
        }
    }

    pub fn record_failure(&mut self, failure: CellFailure) {
        self.failures.push(failure);
    }
}
