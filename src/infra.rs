//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for FIM Bench: building the
//! external tool's command line, running it, and extracting results from its
//! output and its result artifact.
//!
//! 此模块为 FIM Bench 提供基础设施服务：构建外部工具的命令行、运行它，
//! 并从其输出和结果文件中提取结果。

pub mod command;
pub mod extract;
pub mod tool;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
