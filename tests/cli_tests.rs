use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

mod common;

fn fim_bench() -> Command {
    let mut cmd = Command::cargo_bin("fim-bench").unwrap();
    cmd.args(["--lang", "en"]);
    cmd
}

/// `init --non-interactive` writes the preset into the working directory,
/// and the written file is accepted by `run`'s loader.
///
/// `init --non-interactive` 将预设写入工作目录，且写出的文件能被 `run` 的加载器接受。
#[test]
fn test_init_writes_preset() {
    let dir = tempdir().unwrap();

    fim_bench()
        .current_dir(dir.path())
        .args(["init", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created FimBench.toml"));

    let path = dir.path().join("FimBench.toml");
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("Apriori"));
    assert!(text.contains("spmf.jar"));

    let config = fim_bench::config::BenchConfig::load(&path).unwrap();
    assert_eq!(config.support_thresholds.len(), 6);
    assert!(!config.count_itemsets);
}

#[test]
fn test_init_itemsets_preset() {
    let dir = tempdir().unwrap();

    fim_bench()
        .current_dir(dir.path())
        .args(["init", "--non-interactive", "--preset", "itemsets"])
        .assert()
        .success();

    let config = fim_bench::config::BenchConfig::load(&dir.path().join("FimBench.toml")).unwrap();
    assert_eq!(config.algorithms, ["FPGrowth_itemsets", "FPClose", "FPMax"]);
    assert!(config.count_itemsets);
}

/// A non-interactive init never overwrites an existing configuration.
/// 非交互式初始化绝不会覆盖已有的配置。
#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("FimBench.toml");
    fs::write(&path, "# mine").unwrap();

    fim_bench()
        .current_dir(dir.path())
        .args(["init", "--non-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");
}

#[test]
fn test_run_with_missing_config_fails() {
    let dir = tempdir().unwrap();

    fim_bench()
        .current_dir(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration file"));
}

#[test]
fn test_no_subcommand_prints_help() {
    fim_bench()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[cfg(unix)]
mod stub_tool_runs {
    use super::*;
    use common::{STUB_TOOL, STUB_TOOL_NO_ARTIFACT, STUB_TOOL_WITH_MISS, setup_stub_bench};

    /// Every cell succeeds: one table per input file and a clean summary.
    /// 所有单元都成功：每个输入文件一张表，且摘要无失败。
    #[test]
    fn test_successful_run() {
        let bench = setup_stub_bench(STUB_TOOL, true);

        fim_bench()
            .arg("run")
            .arg("--config")
            .arg(&bench.config_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Results Table for retail1.txt"))
            .stdout(predicate::str::contains("Results Table for retail2.txt"))
            .stdout(predicate::str::contains("min-sup = 3%"))
            .stdout(predicate::str::contains("#itemsets"))
            .stdout(predicate::str::contains("X at 5% support took 100 ms and generated 3 itemsets"))
            .stdout(predicate::str::contains("All runs produced a measurement."));
    }

    /// A missing time marker is reported but does not fail the run.
    /// 缺失耗时标记会被报告，但不会使运行失败。
    #[test]
    fn test_parse_miss_is_soft() {
        let bench = setup_stub_bench(STUB_TOOL_WITH_MISS, false);

        fim_bench()
            .arg("run")
            .arg("--config")
            .arg(&bench.config_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Failed to get time for Y at 5% support"))
            .stdout(predicate::str::contains("they were left out of the results"));
    }

    /// A run whose artifact cannot be read exits non-zero after reporting.
    /// 无法读取结果文件的运行会在报告后以非零状态退出。
    #[test]
    fn test_io_failure_fails_the_run() {
        let bench = setup_stub_bench(STUB_TOOL_NO_ARTIFACT, true);

        fim_bench()
            .arg("run")
            .arg("--config")
            .arg(&bench.config_path)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Some runs failed to execute"))
            .stderr(predicate::str::contains("Benchmark finished with failed runs."));
    }

    #[test]
    fn test_no_table_and_charts() {
        let bench = setup_stub_bench(STUB_TOOL, false);
        let chart_dir = bench.dir.path().join("charts");

        fim_bench()
            .arg("run")
            .arg("--config")
            .arg(&bench.config_path)
            .arg("--no-table")
            .arg("--chart-dir")
            .arg(&chart_dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("Results Table").not());

        assert!(chart_dir.join("retail1.svg").exists());
        assert!(chart_dir.join("retail2.svg").exists());
    }
}
