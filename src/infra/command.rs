//! # Command Execution Module / 命令执行模块
//!
//! This module builds the external mining tool's command line for one matrix
//! cell and runs it, capturing its output.
//!
//! 此模块为一个矩阵单元构建外部挖掘工具的命令行并运行它，同时捕获其输出。

use std::fmt;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use crate::core::config::ToolSpec;
use crate::core::models::{CellError, RunParameters};
use crate::infra::t;

/// A fully resolved program invocation.
/// 一个完全解析的程序调用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Converts the command line into a `tokio::process::Command`.
    pub fn to_command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandLine {
    /// Renders the command line shell-quoted, for logs and error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        match shlex::try_join(words) {
            Ok(joined) => f.write_str(&joined),
            // Only fails on NUL bytes, which cannot reach a real command line anyway.
            Err(_) => write!(f, "{} {}", self.program, self.args.join(" ")),
        }
    }
}

/// Builds the invocation `<runtime> <runtime_args..> <tool> run <algorithm> <input> <output> <support>%`.
/// The algorithm name is passed through unchecked.
///
/// 构建调用 `<runtime> <runtime_args..> <tool> run <algorithm> <input> <output> <support>%`。
/// 算法名称原样传递，不做校验。
pub fn build_command(tool: &ToolSpec, params: &RunParameters) -> CommandLine {
    let mut args = tool.runtime_args.clone();
    args.extend([
        tool.tool_path.to_string_lossy().into_owned(),
        "run".to_string(),
        params.algorithm.clone(),
        params.input_path.to_string_lossy().into_owned(),
        params.output_path.to_string_lossy().into_owned(),
        params.support.as_arg(),
    ]);

    CommandLine {
        program: tool.runtime.clone(),
        args,
    }
}

/// What the tool printed, and how it exited.
/// 工具的输出以及其退出方式。
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Spawns the command and waits for it to exit, capturing stdout and stderr.
///
/// The caller is blocked until the process exits or `timeout` elapses; on
/// timeout the child is killed. A non-zero exit status is not an error here:
/// the caller decides from the output whether the run is usable.
///
/// 派生命令并等待其退出，同时捕获 stdout 和 stderr。
///
/// 调用者会被阻塞，直到进程退出或 `timeout` 到期；超时时子进程会被终止。
/// 非零退出状态在此不视为错误：由调用者根据输出判断本次运行是否可用。
pub async fn run_tool(
    command_line: &CommandLine,
    timeout: Option<Duration>,
) -> Result<ToolOutput, CellError> {
    let execution_error = |reason: String| CellError::Execution {
        command: command_line.to_string(),
        reason,
    };

    let mut cmd = command_line.to_command();
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(|e| execution_error(e.to_string()))?;
    let wait = child.wait_with_output();

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, wait).await {
            Ok(res) => res,
            // Dropping `wait` drops the child, and `kill_on_drop` terminates it.
            Err(_) => {
                return Err(execution_error(
                    t!("run.tool_timed_out", secs = limit.as_secs()).to_string(),
                ));
            }
        },
        None => wait.await,
    }
    .map_err(|e| execution_error(e.to_string()))?;

    // Killed by a signal before writing anything: nothing to salvage.
    if output.status.code().is_none() && output.stdout.is_empty() {
        return Err(execution_error(
            t!("run.tool_terminated", status = output.status).to_string(),
        ));
    }

    Ok(ToolOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
