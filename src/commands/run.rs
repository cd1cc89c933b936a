// src/commands/run.rs

use anyhow::{Result, bail};
use colored::*;
use std::path::{Path, PathBuf};

use crate::{
    core::{config::BenchConfig, driver::MatrixDriver, planner},
    infra::{command::build_command, t, tool::ExternalTool},
    reporting::{print_failure_summary, print_results_table, render_charts},
};

/// Executes the `run` command: loads the configuration, runs the whole
/// benchmark matrix, then prints the tables and writes the charts.
///
/// 执行 `run` 命令：加载配置，运行整个基准测试矩阵，然后打印表格并写出图表。
///
/// # Arguments
/// * `config_path` - Path to the benchmark configuration file
/// * `chart_dir` - Directory for the SVG charts; no charts when `None`
/// * `print_table` - Print the fixed-width results tables
/// * `lang_override` - Language given on the command line, which wins over the config
///
/// # Returns
/// An error when the configuration is invalid or any cell failed hard.
pub async fn execute(
    config_path: PathBuf,
    chart_dir: Option<PathBuf>,
    print_table: bool,
    lang_override: Option<String>,
) -> Result<()> {
    let config = BenchConfig::load(&config_path)?;
    if let (None, Some(language)) = (&lang_override, &config.language) {
        crate::set_language(language);
    }

    print_run_banner(&config, &config_path);

    let driver = MatrixDriver::new(config.clone());
    let mut tool = ExternalTool::from_config(&config);
    let table = driver.run(&mut tool).await;

    if print_table {
        print_results_table(&table, config.count_itemsets);
    }

    if let Some(dir) = &chart_dir {
        println!("\n{}", t!("chart.generating", path = dir.display()));
        match render_charts(&table, dir) {
            Ok(paths) => {
                for path in paths {
                    println!("  {} {}", "✔".green(), path.display());
                }
            }
            Err(e) => eprintln!("{} {:#}", t!("chart.failed").red(), e),
        }
    }

    if print_failure_summary(&table) {
        bail!("{}", t!("run.failed_cells"));
    }
    Ok(())
}

fn print_run_banner(config: &BenchConfig, config_path: &Path) {
    let plan = planner::plan_execution(config);

    println!(
        "{}",
        t!(
            "run.banner",
            time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )
        .bold()
    );
    println!("{}", t!("run.loaded_config", path = config_path.display()));
    println!(
        "{}",
        t!(
            "run.matrix_size",
            files = plan.file_count,
            thresholds = plan.threshold_count,
            algorithms = plan.algorithm_count,
            cells = plan.len()
        )
        .cyan()
    );

    if let Some(first) = plan.cells.first() {
        let preview = build_command(&config.tool(), &first.params);
        println!("{} {}", t!("run.command_prefix").blue(), preview);
    }
    if config.count_itemsets {
        println!(
            "{}",
            t!("run.counting_itemsets", path = config.output_path.display()).cyan()
        );
    }
}
