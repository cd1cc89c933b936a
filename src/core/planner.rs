//! # Matrix Planner Module / 矩阵计划模块
//!
//! This module expands a benchmark configuration into the ordered list of
//! cells to execute. The nesting order is input file, then support threshold,
//! then algorithm; progress output and the results table both depend on it.
//!
//! 此模块将基准测试配置展开为要执行的有序单元列表。
//! 嵌套顺序为：输入文件，然后是支持度阈值，最后是算法；
//! 进度输出和结果表都依赖于此顺序。

use crate::core::config::BenchConfig;
use crate::core::models::RunParameters;

/// One (input file, support threshold, algorithm) combination.
/// 一个（输入文件，支持度阈值，算法）组合。
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub file_index: usize,
    pub threshold_index: usize,
    pub algorithm_index: usize,
    pub params: RunParameters,
}

impl Cell {
    /// `true` for the first cell of an input file.
    pub fn starts_file(&self) -> bool {
        self.threshold_index == 0 && self.algorithm_index == 0
    }

    /// `true` for the first cell of a support threshold within a file.
    pub fn starts_threshold(&self) -> bool {
        self.algorithm_index == 0
    }
}

/// Represents a complete execution plan for a benchmark matrix.
/// 表示基准测试矩阵的完整执行计划。
#[derive(Debug)]
pub struct ExecutionPlan {
    /// Cells in execution order.
    /// 按执行顺序排列的单元。
    pub cells: Vec<Cell>,
    pub file_count: usize,
    pub threshold_count: usize,
    pub algorithm_count: usize,
}

impl ExecutionPlan {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Creates the execution plan for the given configuration.
/// 为给定配置创建执行计划。
pub fn plan_execution(config: &BenchConfig) -> ExecutionPlan {
    let mut cells = Vec::with_capacity(
        config.input_paths.len() * config.support_thresholds.len() * config.algorithms.len(),
    );

    for (file_index, input_path) in config.input_paths.iter().enumerate() {
        for (threshold_index, support) in config.support_thresholds.iter().enumerate() {
            for (algorithm_index, algorithm) in config.algorithms.iter().enumerate() {
                cells.push(Cell {
                    file_index,
                    threshold_index,
                    algorithm_index,
                    params: RunParameters {
                        algorithm: algorithm.clone(),
                        support: *support,
                        input_path: input_path.clone(),
                        output_path: config.output_path.clone(),
                    },
                });
            }
        }
    }

    ExecutionPlan {
        cells,
        file_count: config.input_paths.len(),
        threshold_count: config.support_thresholds.len(),
        algorithm_count: config.algorithms.len(),
    }
}
