//! # External Tool Runner / 外部工具运行器
//!
//! The production [`CellRunner`]: launches the mining tool for a cell, reads
//! the elapsed time from its report and, when enabled, counts the itemsets it
//! wrote.
//!
//! 生产环境的 [`CellRunner`]：为一个单元启动挖掘工具，从其报告中读取耗时，
//! 并在启用时统计其写出的项集数量。

use std::time::Duration;

use crate::core::config::{BenchConfig, ToolSpec};
use crate::core::driver::CellRunner;
use crate::core::models::{CellError, RunParameters, RunResult};
use crate::infra::command::{build_command, run_tool};
use crate::infra::extract::{count_itemsets, extract_elapsed_millis};

/// Runs cells against a real external mining tool.
/// 针对真实的外部挖掘工具运行单元。
#[derive(Debug, Clone)]
pub struct ExternalTool {
    spec: ToolSpec,
    count_itemsets: bool,
    timeout: Option<Duration>,
}

impl ExternalTool {
    pub fn new(spec: ToolSpec, count_itemsets: bool, timeout: Option<Duration>) -> Self {
        Self {
            spec,
            count_itemsets,
            timeout,
        }
    }

    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.tool(), config.count_itemsets, config.timeout())
    }
}

impl CellRunner for ExternalTool {
    async fn run_cell(&mut self, params: &RunParameters) -> Result<RunResult, CellError> {
        let command_line = build_command(&self.spec, params);
        let output = run_tool(&command_line, self.timeout).await?;

        let elapsed = extract_elapsed_millis(&output.stdout).ok_or(CellError::ParseMiss {
            exit_code: output.status.code(),
        })?;
        let result = RunResult::timed(elapsed);

        if !self.count_itemsets {
            return Ok(result);
        }

        // The artifact path is shared by every cell; a tool that crashed after
        // printing its report may leave a previous cell's file behind.
        let count = count_itemsets(&params.output_path).map_err(|source| CellError::Io {
            path: params.output_path.clone(),
            source,
        })?;
        Ok(result.with_itemsets(count))
    }
}
