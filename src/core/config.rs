//! # Benchmark Configuration / 基准测试配置
//!
//! The benchmark matrix is described by a TOML file (`FimBench.toml` by default).
//! It names the external mining tool, the input files, the algorithms and the
//! support thresholds to sweep.
//!
//! 基准测试矩阵由 TOML 文件（默认为 `FimBench.toml`）描述。
//! 它指定外部挖掘工具、输入文件、算法以及要遍历的支持度阈值。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Name of the configuration file looked up by default.
pub const DEFAULT_CONFIG_FILE: &str = "FimBench.toml";

/// A minimum support threshold, expressed as a percentage of transactions.
/// 最小支持度阈值，以事务的百分比表示。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportThreshold(pub f64);

impl SupportThreshold {
    pub fn percent(self) -> f64 {
        self.0
    }

    /// The token handed to the mining tool, e.g. `"3%"` or `"0.5%"`.
    /// 传递给挖掘工具的参数，例如 `"3%"` 或 `"0.5%"`。
    pub fn as_arg(self) -> String {
        format!("{self}%")
    }
}

impl fmt::Display for SupportThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already yields the shortest form: 3.0 -> "3", 0.5 -> "0.5".
        write!(f, "{}", self.0)
    }
}

impl From<f64> for SupportThreshold {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// How the external mining tool is launched.
/// The full command line is `<runtime> <runtime_args..> <tool_path> run ...`.
///
/// 外部挖掘工具的启动方式。
/// 完整命令行为 `<runtime> <runtime_args..> <tool_path> run ...`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub runtime: String,
    pub runtime_args: Vec<String>,
    pub tool_path: PathBuf,
}

/// The complete benchmark configuration, loaded from a TOML file.
/// 从 TOML 文件加载的完整基准测试配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Falls back to the system locale when absent; `--lang` takes precedence.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 未设置时使用系统语言环境；`--lang` 优先。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Path to the mining tool, e.g. `spmf.jar`.
    /// 挖掘工具的路径，例如 `spmf.jar`。
    #[serde(default = "default_tool_path")]
    pub tool_path: PathBuf,

    /// Program used to launch the tool. Defaults to `java`.
    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// Arguments placed between the runtime and the tool path. Defaults to `["-jar"]`.
    #[serde(default = "default_runtime_args")]
    pub runtime_args: Vec<String>,

    /// Transaction databases to benchmark, in iteration order.
    /// 要进行基准测试的事务数据库，按迭代顺序排列。
    pub input_paths: Vec<PathBuf>,

    /// Result artifact written by the tool. Shared and overwritten by every run.
    /// 工具写出的结果文件。所有运行共享并覆盖此文件。
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Algorithm identifiers, passed through to the tool unchecked.
    /// 算法标识符，原样传递给工具，不做校验。
    pub algorithms: Vec<String>,

    /// Support thresholds in percent, in iteration order.
    /// 支持度阈值（百分比），按迭代顺序排列。
    pub support_thresholds: Vec<SupportThreshold>,

    /// Count the lines of the result artifact as the number of itemsets.
    /// 将结果文件的行数作为项集数量进行统计。
    #[serde(default)]
    pub count_itemsets: bool,

    /// Kill a tool run that takes longer than this. No limit when absent.
    /// 超过此时间的工具运行将被终止。未设置时不限制。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_tool_path() -> PathBuf {
    PathBuf::from("spmf.jar")
}

fn default_runtime() -> String {
    "java".to_string()
}

fn default_runtime_args() -> Vec<String> {
    vec!["-jar".to_string()]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.txt")
}

impl BenchConfig {
    /// Reads, parses and validates a configuration file.
    /// Paths inside the file are expanded (`~`, `$VAR`).
    ///
    /// 读取、解析并校验配置文件。
    /// 文件中的路径会被展开（`~`、`$VAR`）。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
        let config = Self::from_toml_str(&content)?;
        Ok(config)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BenchConfig =
            toml::from_str(content).with_context(|| t!("config.parse_failed").to_string())?;
        let config = config.expand_paths()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the driver relies on.
    /// 检查驱动器所依赖的不变量。
    pub fn validate(&self) -> Result<()> {
        if self.input_paths.is_empty() {
            bail!("{}", t!("config.empty_list", key = "input_paths"));
        }
        if self.algorithms.is_empty() {
            bail!("{}", t!("config.empty_list", key = "algorithms"));
        }
        if self.support_thresholds.is_empty() {
            bail!("{}", t!("config.empty_list", key = "support_thresholds"));
        }
        if let Some(bad) = self
            .support_thresholds
            .iter()
            .find(|s| !s.percent().is_finite() || s.percent() < 0.0)
        {
            bail!("{}", t!("config.invalid_threshold", value = bad));
        }
        if self.algorithms.iter().any(|a| a.trim().is_empty()) {
            bail!("{}", t!("config.blank_algorithm"));
        }
        if let Some(dup) = first_duplicate(&self.algorithms) {
            bail!("{}", t!("config.duplicate_entry", key = "algorithms", value = dup));
        }
        if let Some(dup) = first_duplicate(&self.input_paths) {
            bail!(
                "{}",
                t!("config.duplicate_entry", key = "input_paths", value = dup.display())
            );
        }
        if self.runtime.trim().is_empty() {
            bail!("{}", t!("config.blank_runtime"));
        }
        Ok(())
    }

    pub fn tool(&self) -> ToolSpec {
        ToolSpec {
            runtime: self.runtime.clone(),
            runtime_args: self.runtime_args.clone(),
            tool_path: self.tool_path.clone(),
        }
    }

    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_secs.map(std::time::Duration::from_secs)
    }

    fn expand_paths(mut self) -> Result<Self> {
        self.tool_path = expand_path(&self.tool_path)?;
        self.output_path = expand_path(&self.output_path)?;
        self.input_paths = self
            .input_paths
            .iter()
            .map(|p| expand_path(p))
            .collect::<Result<_>>()?;
        Ok(self)
    }
}

fn first_duplicate<T: PartialEq>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .enumerate()
        .find(|&(i, item)| items[..i].contains(item))
        .map(|(_, item)| item)
}

fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| t!("config.expand_failed", path = raw).to_string())?;
    Ok(PathBuf::from(expanded.as_ref()))
}
