use {
    crate::domain::SolverUnavailable,
    std::{fmt::Display, time::Duration},
};

/// Runs a CPU bound solve on the blocking pool and waits at most `timeout`
/// for it.
///
/// On timeout the solve keeps running on its thread but its result is
/// discarded.
pub async fn solve<T, E>(
    solver: &str,
    timeout: Duration,
    job: impl FnOnce() -> Result<T, E> + Send + 'static,
) -> Result<T, SolverUnavailable>
where
    T: Send + 'static,
    E: Display + Send + 'static,
{
    let failed = |reason: String| SolverUnavailable::Failed {
        solver: solver.to_owned(),
        reason,
    };
    match tokio::time::timeout(timeout, tokio::task::spawn_blocking(job)).await {
        Err(_) => Err(SolverUnavailable::Timeout {
            solver: solver.to_owned(),
            timeout,
        }),
        Ok(Err(err)) => Err(failed(err.to_string())),
        Ok(Ok(Err(err))) => Err(failed(err.to_string())),
        Ok(Ok(Ok(value))) => Ok(value),
    }
}
