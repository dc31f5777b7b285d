use {
    crate::domain::kernel,
    anyhow::{Context, Result},
    serde::Deserialize,
    std::{
        num::NonZeroUsize,
        path::{Path, PathBuf},
        time::Duration,
    },
    tokio::fs,
};

fn default_kernel_enabled() -> bool {
    true
}

fn default_tolerance() -> f64 {
    kernel::Tolerance::default().get()
}

fn default_rounds() -> NonZeroUsize {
    NonZeroUsize::MIN
}

fn default_lp_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_solver_timeout() -> Duration {
    Duration::from_secs(300)
}

fn default_process_args() -> Vec<String> {
    vec!["{problem}".to_owned()]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Config {
    #[serde(default)]
    kernel: KernelConfig,

    #[serde(default)]
    solver: SolverConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct KernelConfig {
    /// Whether to fix bids through the LP relaxation before the exact search.
    #[serde(default = "default_kernel_enabled")]
    enabled: bool,

    /// How far an LP value may be from 0, 1/2 or 1 and still count as that
    /// value.
    #[serde(default = "default_tolerance")]
    tolerance: f64,

    /// Maximum number of relaxation rounds. Rounds after the first only
    /// consider the bids still ambiguous.
    #[serde(default = "default_rounds")]
    rounds: NonZeroUsize,

    /// Bound on a single relaxation.
    #[serde(with = "humantime_serde", default = "default_lp_timeout")]
    timeout: Duration,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            enabled: default_kernel_enabled(),
            tolerance: default_tolerance(),
            rounds: default_rounds(),
            timeout: default_lp_timeout(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
enum SolverConfig {
    /// Solve the cover as a binary program in process.
    Ilp {
        #[serde(with = "humantime_serde", default = "default_solver_timeout")]
        timeout: Duration,
    },

    /// Run an external vertex cover binary.
    #[serde(rename_all = "kebab-case")]
    Process {
        command: PathBuf,

        #[serde(default = "default_process_args")]
        args: Vec<String>,

        /// Whether the binary proves optimality. Heuristic engines make the
        /// reported value a lower bound.
        #[serde(default)]
        exact: bool,

        #[serde(with = "humantime_serde", default = "default_solver_timeout")]
        timeout: Duration,
    },
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::Ilp {
            timeout: default_solver_timeout(),
        }
    }
}

/// Load the configuration from a TOML file.
pub async fn load(path: &Path) -> Result<super::Config> {
    let data = fs::read_to_string(path)
        .await
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    parse(&data).with_context(|| format!("invalid configuration in {path:?}"))
}

/// The configuration used when no file is given.
pub fn default() -> super::Config {
    super::Config {
        kernel: kernel::Config::default(),
        lp_timeout: default_lp_timeout(),
        solver: super::Solver::Ilp {
            timeout: default_solver_timeout(),
        },
    }
}

fn parse(data: &str) -> Result<super::Config> {
    let config = toml::de::from_str::<Config>(data).context("TOML syntax error")?;
    convert(config)
}

fn convert(config: Config) -> Result<super::Config> {
    let tolerance = kernel::Tolerance::new(config.kernel.tolerance).with_context(|| {
        format!(
            "kernel tolerance must be in (0, 0.25), got {}",
            config.kernel.tolerance
        )
    })?;
    let solver = match config.solver {
        SolverConfig::Ilp { timeout } => super::Solver::Ilp { timeout },
        SolverConfig::Process {
            command,
            args,
            exact,
            timeout,
        } => super::Solver::Process {
            command,
            args,
            exact,
            timeout,
        },
    };

    Ok(super::Config {
        kernel: kernel::Config {
            enabled: config.kernel.enabled,
            tolerance,
            rounds: config.kernel.rounds,
        },
        lp_timeout: config.kernel.timeout,
        solver,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, default());
        assert_eq!(config.kernel, kernel::Config::default());
        assert_eq!(config.lp_timeout, Duration::from_secs(60));
        assert_eq!(
            config.solver,
            super::super::Solver::Ilp {
                timeout: Duration::from_secs(300)
            }
        );
    }

    #[test]
    fn deserialize_full() {
        let toml = r#"
        [kernel]
        enabled = false
        tolerance = 1e-4
        rounds = 3
        timeout = "10s"

        [solver]
        kind = "process"
        command = "./mwvc"
        args = ["{problem}", "0", "1", "0"]
        timeout = "2m"
        "#;
        let config = parse(toml).unwrap();
        assert!(!config.kernel.enabled);
        assert_eq!(config.kernel.tolerance.get(), 1e-4);
        assert_eq!(config.kernel.rounds.get(), 3);
        assert_eq!(config.lp_timeout, Duration::from_secs(10));
        assert_eq!(
            config.solver,
            super::super::Solver::Process {
                command: PathBuf::from("./mwvc"),
                args: vec!["{problem}".into(), "0".into(), "1".into(), "0".into()],
                exact: false,
                timeout: Duration::from_secs(120),
            }
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(parse("[kernel]\nepsilon = 0.1\n").is_err());
        assert!(parse("[solver]\nkind = \"ilp\"\ncommand = \"x\"\n").is_err());
    }

    #[test]
    fn rejects_useless_tolerance() {
        assert!(parse("[kernel]\ntolerance = 0.5\n").is_err());
        assert!(parse("[kernel]\nrounds = 0\n").is_err());
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[solver]\nkind = \"ilp\"\ntimeout = \"5s\"\n").unwrap();
        let config = load(file.path()).await.unwrap();
        assert_eq!(
            config.solver,
            super::super::Solver::Ilp {
                timeout: Duration::from_secs(5)
            }
        );
        assert!(load(Path::new("/nonexistent/wd.toml")).await.is_err());
    }
}
