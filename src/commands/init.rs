//! # Benchmark Initialization Module / 基准测试初始化模块
//!
//! This module creates a starter `FimBench.toml`, either from a preset or
//! through an interactive command-line wizard.
//!
//! 此模块创建初始的 `FimBench.toml`，可以基于预设，也可以通过交互式命令行向导。
//!
//! ## Presets / 预设
//!
//! - **times**: Apriori, FP-Growth and Eclat, timing only
//! - **itemsets**: FP-Growth, FPClose and FPMax, timing plus itemset counts
//!
//! - **times**: Apriori、FP-Growth 和 Eclat，仅计时
//! - **itemsets**: FP-Growth、FPClose 和 FPMax，计时并统计项集数量

use anyhow::{Context, Result, bail};
use colored::*;
use dialoguer::{Confirm, Input, MultiSelect, theme::ColorfulTheme};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::{BenchConfig, DEFAULT_CONFIG_FILE, SupportThreshold};
use crate::infra::t;

/// Algorithm identifiers offered by the wizard.
/// 向导中提供的算法标识符。
pub const KNOWN_ALGORITHMS: [&str; 5] = ["Apriori", "FPGrowth_itemsets", "Eclat", "FPClose", "FPMax"];

const TIME_ALGORITHMS: [&str; 3] = ["Apriori", "FPGrowth_itemsets", "Eclat"];
const ITEMSET_ALGORITHMS: [&str; 3] = ["FPGrowth_itemsets", "FPClose", "FPMax"];
const DEFAULT_INPUTS: [&str; 2] = ["retail1.txt", "retail2.txt"];
const DEFAULT_THRESHOLDS: [f64; 6] = [0.5, 1.0, 2.0, 3.0, 5.0, 7.0];

/// A ready-made benchmark layout.
/// 预先定义的基准测试布局。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Compare the three mining families by time.
    Times,
    /// Compare FP-Growth against its closed/maximal variants, counting itemsets.
    Itemsets,
}

impl Preset {
    /// Unknown names fall back to `Times`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "itemsets" => Preset::Itemsets,
            _ => Preset::Times,
        }
    }

    pub fn algorithms(self) -> &'static [&'static str] {
        match self {
            Preset::Times => &TIME_ALGORITHMS,
            Preset::Itemsets => &ITEMSET_ALGORITHMS,
        }
    }

    pub fn counts_itemsets(self) -> bool {
        matches!(self, Preset::Itemsets)
    }

    /// The configuration this preset writes.
    /// 此预设写出的配置。
    pub fn config(self) -> BenchConfig {
        BenchConfig {
            language: None,
            tool_path: PathBuf::from("spmf.jar"),
            runtime: "java".to_string(),
            runtime_args: vec!["-jar".to_string()],
            input_paths: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            output_path: PathBuf::from("output.txt"),
            algorithms: self.algorithms().iter().map(|a| a.to_string()).collect(),
            support_thresholds: DEFAULT_THRESHOLDS.iter().copied().map(SupportThreshold).collect(),
            count_itemsets: self.counts_itemsets(),
            timeout_secs: None,
        }
    }
}

/// Runs the wizard that generates `FimBench.toml` in the current directory.
///
/// In non-interactive mode the preset is written as-is and an existing file
/// is never overwritten.
///
/// 运行在当前目录生成 `FimBench.toml` 的向导。
///
/// 在非交互模式下，预设会被原样写出，且绝不会覆盖已存在的文件。
pub fn run_init_wizard(non_interactive: bool, preset: Preset) -> Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);
    let preset_config = preset.config();

    if non_interactive {
        if config_path.exists() {
            bail!("{}", t!("init.already_exists", path = config_path.display()));
        }
        return write_config(config_path, &preset_config);
    }

    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init.welcome").cyan().bold());
    println!("{}", t!("init.description"));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", path = config_path.display()))
            .default(false)
            .interact()
            .context(t!("init.user_confirmation_failed").to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted"));
            return Ok(());
        }
    }

    let tool_path: String = Input::with_theme(&theme)
        .with_prompt(t!("init.tool_path_prompt"))
        .default(preset_config.tool_path.display().to_string())
        .interact_text()?;

    let inputs: String = Input::with_theme(&theme)
        .with_prompt(t!("init.inputs_prompt"))
        .default(DEFAULT_INPUTS.join(", "))
        .interact_text()?;

    let defaults: Vec<bool> = KNOWN_ALGORITHMS
        .iter()
        .map(|a| preset.algorithms().contains(a))
        .collect();
    let selections = MultiSelect::with_theme(&theme)
        .with_prompt(t!("init.algorithms_prompt"))
        .items(&KNOWN_ALGORITHMS)
        .defaults(&defaults)
        .interact()
        .context(t!("init.user_confirmation_failed").to_string())?;

    let thresholds: String = Input::with_theme(&theme)
        .with_prompt(t!("init.thresholds_prompt"))
        .default(
            DEFAULT_THRESHOLDS
                .iter()
                .map(|s| SupportThreshold(*s).to_string())
                .collect::<Vec<_>>()
                .join(", "),
        )
        .interact_text()?;

    let count_itemsets = Confirm::with_theme(&theme)
        .with_prompt(t!("init.count_itemsets_prompt"))
        .default(preset.counts_itemsets())
        .interact()
        .context(t!("init.user_confirmation_failed").to_string())?;

    let algorithms = if selections.is_empty() {
        println!("{}", t!("init.no_algorithms_selected").yellow());
        preset_config.algorithms.clone()
    } else {
        selections
            .into_iter()
            .map(|i| KNOWN_ALGORITHMS[i].to_string())
            .collect()
    };

    let config = BenchConfig {
        tool_path: PathBuf::from(tool_path.trim()),
        input_paths: split_list(&inputs).into_iter().map(PathBuf::from).collect(),
        algorithms,
        support_thresholds: parse_thresholds(&thresholds)?,
        count_itemsets,
        ..preset_config
    };
    config.validate()?;

    write_config(config_path, &config)
}

/// Parses a comma separated list of percentages such as `"0.5, 1, 2%"`.
/// 解析以逗号分隔的百分比列表，例如 `"0.5, 1, 2%"`。
pub fn parse_thresholds(text: &str) -> Result<Vec<SupportThreshold>> {
    split_list(text)
        .into_iter()
        .map(|item| {
            item.trim_end_matches('%')
                .trim()
                .parse::<f64>()
                .map(SupportThreshold)
                .with_context(|| t!("init.invalid_threshold", value = item).to_string())
        })
        .collect()
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_config(path: &Path, config: &BenchConfig) -> Result<()> {
    let toml_string =
        toml::to_string_pretty(config).context(t!("init.serialize_failed").to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init.write_failed", path = path.display()).to_string())?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.success_created", path = path.display()).bold()
    );
    println!("{}", t!("init.usage_hint"));

    Ok(())
}
