// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

use fim_bench::config::BenchConfig;

/// A stand-in for the mining tool. Invoked as
/// `sh <script> run <algorithm> <input> <output> <support>%`, it reports a
/// fixed time and writes three itemsets to the output path.
pub const STUB_TOOL: &str = r#"#!/bin/sh
printf '1 2 #SUP: 4\n1 #SUP: 6\n2 #SUP: 5\n' > "$4"
echo "=============  APRIORI - STATS ============="
echo " Total time ~ 100 ms"
echo "==========================================="
"#;

/// Same as `STUB_TOOL`, except algorithm `Y` at 5% support prints no time marker.
pub const STUB_TOOL_WITH_MISS: &str = r#"#!/bin/sh
if [ "$2" = "Y" ] && [ "$5" = "5%" ]; then
  echo "out of memory"
  exit 1
fi
printf '1 2 #SUP: 4\n1 #SUP: 6\n2 #SUP: 5\n' > "$4"
echo " Total time ~ 100 ms"
"#;

/// Reports a time but never writes the result artifact.
pub const STUB_TOOL_NO_ARTIFACT: &str = r#"#!/bin/sh
echo " Total time ~ 100 ms"
"#;

pub struct StubBench {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub output_path: PathBuf,
}

/// Writes `script` and a `FimBench.toml` pointing at it into a fresh temp dir.
pub fn setup_stub_bench(script: &str, count_itemsets: bool) -> StubBench {
    let dir = tempdir().expect("Failed to create temporary directory");
    let script_path = dir.path().join("stub_tool.sh");
    fs::write(&script_path, script).expect("Failed to write stub tool");

    let output_path = dir.path().join("output.txt");
    let config = format!(
        r#"
tool_path = '{tool}'
runtime = "sh"
runtime_args = []
input_paths = ["retail1.txt", "retail2.txt"]
output_path = '{output}'
algorithms = ["X", "Y"]
support_thresholds = [3, 5]
count_itemsets = {count_itemsets}
timeout_secs = 30
"#,
        tool = script_path.display(),
        output = output_path.display(),
    );
    let config_path = dir.path().join("FimBench.toml");
    fs::write(&config_path, config).expect("Failed to write config");

    StubBench {
        dir,
        config_path,
        output_path,
    }
}

pub fn load_config(path: &Path) -> BenchConfig {
    BenchConfig::load(path).expect("Failed to load stub config")
}
