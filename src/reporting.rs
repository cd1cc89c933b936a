//! # Reporting Module / 报告模块
//!
//! This module renders a finished results table: a fixed-width console table
//! per input file, a summary of failed cells, and one SVG line chart per input file.
//!
//! 此模块渲染已完成的结果表：每个输入文件一个固定宽度的控制台表格、
//! 失败单元的摘要，以及每个输入文件一张 SVG 折线图。

pub mod chart;
pub mod console;

// Re-export common reporting functions
pub use chart::render_charts;
pub use console::{print_failure_summary, print_results_table};
