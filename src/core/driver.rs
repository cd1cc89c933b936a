//! # Run Matrix Driver / 运行矩阵驱动器
//!
//! This module walks the benchmark matrix cell by cell, hands every cell to a
//! [`CellRunner`], and accumulates the outcomes into a [`ResultsTable`].
//! Cells run strictly one after another; a failing cell is reported and
//! recorded but never stops the run.
//!
//! 此模块逐个单元遍历基准测试矩阵，将每个单元交给 [`CellRunner`]，
//! 并将结果累积到 [`ResultsTable`] 中。单元严格按顺序依次运行；
//! 失败的单元会被报告和记录，但不会停止运行。

use colored::*;

use crate::core::config::BenchConfig;
use crate::core::models::{
    CellError, CellFailure, FailureKind, Measurement, ResultsTable, RunParameters, RunResult,
};
use crate::core::planner::{Cell, plan_execution};
use crate::infra::t;

/// Produces the result of one matrix cell.
///
/// The production implementation launches the external mining tool; tests
/// substitute a stub.
///
/// 产生一个矩阵单元的结果。
///
/// 生产实现会启动外部挖掘工具；测试中可替换为桩实现。
#[allow(async_fn_in_trait)]
pub trait CellRunner {
    async fn run_cell(&mut self, params: &RunParameters) -> Result<RunResult, CellError>;
}

/// Drives a whole benchmark run for one configuration.
/// 为一个配置驱动完整的基准测试运行。
#[derive(Debug, Clone)]
pub struct MatrixDriver {
    config: BenchConfig,
}

impl MatrixDriver {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs every cell in file -> support -> algorithm order and returns the
    /// filled results table.
    ///
    /// 按 文件 -> 支持度 -> 算法 的顺序运行所有单元，并返回填充好的结果表。
    pub async fn run<R: CellRunner>(&self, runner: &mut R) -> ResultsTable {
        let plan = plan_execution(&self.config);
        let mut table = ResultsTable::new(
            &self.config.input_paths,
            &self.config.algorithms,
            &self.config.support_thresholds,
        );

        for cell in &plan.cells {
            print_progress_headers(cell);

            let outcome = match runner.run_cell(&cell.params).await {
                Ok(result) if result.elapsed_millis.is_none() => Err(CellError::ParseMiss { exit_code: None }),
                other => other,
            };

            record_outcome(&mut table, cell, outcome);
        }

        table
    }
}

fn print_progress_headers(cell: &Cell) {
    if cell.starts_file() {
        println!(
            "\n{}",
            t!("run.processing_file", path = cell.params.input_path.display()).bold()
        );
    }
    if cell.starts_threshold() {
        println!(
            "{}",
            t!("run.support_header", support = cell.params.support).cyan()
        );
    }
}

fn record_outcome(table: &mut ResultsTable, cell: &Cell, outcome: Result<RunResult, CellError>) {
    let params = &cell.params;

    match outcome {
        Ok(result) => {
            let elapsed = result.elapsed_millis.unwrap_or_default();
            let line = match result.itemset_count {
                Some(count) => t!(
                    "run.cell_done_with_itemsets",
                    algorithm = &params.algorithm,
                    support = params.support,
                    elapsed = elapsed,
                    count = count
                ),
                None => t!(
                    "run.cell_done",
                    algorithm = &params.algorithm,
                    support = params.support,
                    elapsed = elapsed
                ),
            };
            println!("    {}", line.green());

            table.record(
                &params.input_path,
                &params.algorithm,
                Measurement {
                    threshold_index: cell.threshold_index,
                    support: params.support,
                    result,
                },
            );
        }
        Err(error) => {
            let kind = error.kind();
            let message = error.to_string();
            let line = t!(
                "run.cell_failed",
                algorithm = &params.algorithm,
                support = params.support,
                error = &message
            );
            if kind == FailureKind::ParseMiss {
                println!("    {}", line.yellow());
            } else {
                println!("    {}", line.red());
            }

            table.record_failure(CellFailure {
                input_path: params.input_path.clone(),
                algorithm: params.algorithm.clone(),
                support: params.support,
                kind,
                message,
            });
        }
    }
}
