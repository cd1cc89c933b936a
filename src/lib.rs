//! # FIM Bench Library / FIM Bench 库
//!
//! This library provides the core functionality for the `fim-bench` tool,
//! a configuration-driven benchmark runner that times frequent-itemset-mining
//! algorithms of an external mining tool across a matrix of input files,
//! support thresholds and algorithms.
//!
//! 此库为 `fim-bench` 工具提供核心功能，
//! 这是一个配置驱动的基准测试运行器，在输入文件、支持度阈值和算法构成的矩阵上
//! 对外部挖掘工具的频繁项集挖掘算法计时。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, data models, matrix planning and the run matrix driver
//! - `infra` - Command building, process execution and result extraction
//! - `reporting` - Console tables and line charts for a finished results table
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置、数据模型、矩阵规划和运行矩阵驱动器
//! - `infra` - 命令构建、进程执行和结果提取
//! - `reporting` - 已完成结果表的控制台表格和折线图
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::driver;
pub use core::models;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the language
/// code (e.g., "en"), and finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    set_language(&locale);
}

/// Activates the best matching locale for `requested`, falling back to "en".
/// 为 `requested` 激活最匹配的语言环境，回退到 "en"。
pub fn set_language(requested: &str) {
    let available_locales = rust_i18n::available_locales!();

    let is_available = |code: &str| available_locales.iter().any(|l| *l == code);

    let lang = if is_available(requested) {
        requested
    } else {
        requested
            .split('-')
            .next()
            .filter(|lang_code| is_available(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
