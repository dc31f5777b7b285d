//! An external vertex cover binary such as FastWVC. The problem is handed over
//! as a file and the cover read back from standard output.

use {
    crate::domain::{CoverSolver, Optimality, SolverUnavailable},
    mwvc_dto::{Cover, Problem},
    std::{
        path::{Path, PathBuf},
        process::Stdio,
        time::Duration,
    },
    tokio::process::Command,
};

/// Replaced with the path of the problem file in the configured arguments.
const PROBLEM: &str = "{problem}";

#[derive(Debug, Clone)]
pub struct Process {
    command: PathBuf,
    args: Vec<String>,
    exact: bool,
    timeout: Duration,
}

impl Process {
    pub fn new(command: PathBuf, args: Vec<String>, exact: bool, timeout: Duration) -> Self {
        Self {
            command,
            args,
            exact,
            timeout,
        }
    }

    fn args(&self, problem: &Path) -> Vec<String> {
        let path = problem.display().to_string();
        let mut args: Vec<_> = self
            .args
            .iter()
            .map(|arg| arg.replace(PROBLEM, &path))
            .collect();
        if !self.args.iter().any(|arg| arg.contains(PROBLEM)) {
            args.push(path);
        }
        args
    }

    fn failed(&self, reason: impl ToString) -> SolverUnavailable {
        SolverUnavailable::Failed {
            solver: self.name(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl CoverSolver for Process {
    fn name(&self) -> String {
        self.command.display().to_string()
    }

    fn optimality(&self) -> Optimality {
        if self.exact {
            Optimality::Proven
        } else {
            Optimality::Heuristic
        }
    }

    async fn solve(&self, problem: &Problem) -> Result<Cover, SolverUnavailable> {
        let file = tempfile::Builder::new()
            .prefix("auction")
            .suffix(".mwvc")
            .tempfile()
            .map_err(|err| self.failed(err))?;
        tokio::fs::write(file.path(), problem.to_string())
            .await
            .map_err(|err| self.failed(err))?;

        let child = Command::new(&self.command)
            .args(self.args(file.path()))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| self.failed(err))?;
        // Dropping the pending output on timeout kills the child.
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| SolverUnavailable::Timeout {
                solver: self.name(),
                timeout: self.timeout,
            })?
            .map_err(|err| self.failed(err))?;

        if !output.status.success() {
            return Err(self.failed(format!(
                "{}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Cover::parse(&String::from_utf8_lossy(&output.stdout)).map_err(|err| {
            SolverUnavailable::Malformed {
                solver: self.name(),
                reason: err.to_string(),
            }
        })
    }
}
