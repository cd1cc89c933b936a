//! # Result Extraction Module / 结果提取模块
//!
//! Pulls the two numbers a benchmark cell needs out of a finished tool run:
//! the elapsed time from the tool's report on stdout, and the number of
//! itemsets from the result artifact it wrote.
//!
//! 从已完成的工具运行中提取基准测试单元需要的两个数字：
//! 来自 stdout 报告的耗时，以及来自其写出的结果文件的项集数量。

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

static TOTAL_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Total time ~ ([0-9]+) ms").expect("elapsed time pattern is valid"));

/// Returns the milliseconds of the first `Total time ~ <N> ms` marker in `text`.
/// `<N>` must be ASCII digits.
/// 返回 `text` 中第一个 `Total time ~ <N> ms` 标记的毫秒数。
pub fn extract_elapsed_millis(text: &str) -> Option<u64> {
    TOTAL_TIME
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Counts the newline-delimited records of the result artifact at `path`.
///
/// An unterminated last line still counts as a record. The contents of each
/// record are not inspected.
///
/// 统计 `path` 处结果文件中以换行符分隔的记录数。
///
/// 未以换行结尾的最后一行也计为一条记录。不检查每条记录的内容。
pub fn count_itemsets(path: &Path) -> io::Result<u64> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut count = 0;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        count += 1;
    }

    Ok(count)
}
