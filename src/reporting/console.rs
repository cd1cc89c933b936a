//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the finished results table as fixed-width text, one
//! table per input file, followed by a summary of cells that produced no
//! measurement.
//!
//! 此模块将完成的结果表以固定宽度文本打印，每个输入文件一张表，
//! 随后是未产生测量值的单元摘要。

use colored::*;

use crate::core::config::SupportThreshold;
use crate::core::models::{FailureKind, FileResults, ResultsTable};
use crate::infra::t;

const ALGORITHM_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 10;
const MISSING: &str = "-";

/// Formats the table for one input file.
///
/// Each threshold gets a `Time` column, plus a `#itemsets` column when
/// `with_itemsets` is set. Columns are 10 wide, widened where the
/// `min-sup = N%` label above them is longer. Cells without a measurement
/// print as `-`.
///
/// 格式化单个输入文件的表格。
///
/// 每个阈值对应一个 `Time` 列；设置 `with_itemsets` 时再加一个 `#itemsets` 列。
/// 列宽为 10，若上方的 `min-sup = N%` 标签更长则相应加宽。没有测量值的单元显示为 `-`。
///
/// # Output Format / 输出格式
/// ```text
/// Algorithm          min-sup = 1% min-sup = 5%
///                    Time         Time
/// Apriori            812          95
/// Eclat              -            41
/// ```
pub fn format_file_table(
    file: &FileResults,
    thresholds: &[SupportThreshold],
    with_itemsets: bool,
) -> String {
    let mut header = vec![pad(&t!("table.algorithm"), ALGORITHM_WIDTH)];
    let mut subheader = vec![pad("", ALGORITHM_WIDTH)];
    // Width of the time column under each threshold; a long label widens it.
    let mut time_widths = Vec::with_capacity(thresholds.len());

    for support in thresholds {
        let label = format!("min-sup = {}%", support);
        let label_width = label.chars().count();
        if with_itemsets {
            let group_width = label_width.max(2 * VALUE_WIDTH + 1);
            let time_width = group_width - VALUE_WIDTH - 1;
            header.push(pad(&label, group_width));
            subheader.push(pad(&t!("table.time"), time_width));
            subheader.push(pad(&t!("table.itemsets"), VALUE_WIDTH));
            time_widths.push(time_width);
        } else {
            let time_width = label_width.max(VALUE_WIDTH);
            header.push(pad(&label, time_width));
            subheader.push(pad(&t!("table.time"), time_width));
            time_widths.push(time_width);
        }
    }

    let mut lines = vec![join_row(header), join_row(subheader)];

    for series in &file.series {
        let mut row = vec![pad(&series.algorithm, ALGORITHM_WIDTH)];
        for (threshold_index, &time_width) in time_widths.iter().enumerate() {
            let measurement = series.at_threshold(threshold_index);
            let time = measurement.and_then(|m| m.result.elapsed_millis);
            row.push(pad(&display_value(time), time_width));
            if with_itemsets {
                let count = measurement.and_then(|m| m.result.itemset_count);
                row.push(pad(&display_value(count), VALUE_WIDTH));
            }
        }
        lines.push(join_row(row));
    }

    lines.join("\n")
}

/// Prints one fixed-width table per input file.
/// 为每个输入文件打印一张固定宽度的表格。
pub fn print_results_table(table: &ResultsTable, with_itemsets: bool) {
    for file in table.files() {
        println!(
            "\n{}\n",
            t!("table.banner", path = file.input_path.display()).bold()
        );
        println!("{}", format_file_table(file, table.thresholds(), with_itemsets));
    }
}

/// Prints the cells that produced no measurement.
///
/// # Returns
/// `true` when at least one cell failed hard (execution or I/O error), which
/// the caller turns into a failing exit status. Parse misses alone return `false`.
///
/// 打印未产生测量值的单元。
///
/// # Returns
/// 当至少有一个单元发生硬失败（执行或 I/O 错误）时返回 `true`，调用者据此返回失败的退出状态。
/// 仅有解析缺失时返回 `false`。
pub fn print_failure_summary(table: &ResultsTable) -> bool {
    let failures = table.failures();

    println!("\n{}", t!("summary.banner").cyan());
    println!(
        "{}",
        t!(
            "summary.counts",
            recorded = table.measurement_count(),
            failed = failures.len()
        )
    );

    if failures.is_empty() {
        println!("{}", t!("summary.all_cells_recorded").green().bold());
        return false;
    }

    for failure in failures {
        let label = match failure.kind {
            FailureKind::ParseMiss => t!("summary.kind_parse_miss").yellow(),
            FailureKind::Execution => t!("summary.kind_execution").red(),
            FailureKind::Io => t!("summary.kind_io").red(),
        };
        println!("  - [{}] {}", label, failure);
    }

    if table.has_hard_failures() {
        println!("\n{}", t!("summary.hard_failures").red().bold());
        true
    } else {
        println!("\n{}", t!("summary.soft_failures_only").yellow().bold());
        false
    }
}

fn display_value(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

fn join_row(cells: Vec<String>) -> String {
    cells.join(" ").trim_end().to_string()
}
