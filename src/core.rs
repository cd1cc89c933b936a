//! # Core Module / 核心模块
//!
//! This module contains the core functionality of FIM Bench,
//! including configuration, data models, matrix planning and the run matrix driver.
//!
//! 此模块包含 FIM Bench 的核心功能，
//! 包括配置、数据模型、矩阵规划和运行矩阵驱动器。

pub mod config;
pub mod driver;
pub mod models;
pub mod planner;

// Re-exports
pub use config::BenchConfig;
pub use driver::{CellRunner, MatrixDriver};
pub use models::{ResultsTable, RunParameters, RunResult};
