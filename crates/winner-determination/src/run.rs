use {
    crate::{
        domain::{Pipeline, SolverUnavailable, solution::ValidationFailure},
        infra::{self, bench, cli, config, io, mwvc, observe},
    },
    clap::Parser,
    std::{path::Path, process::ExitCode},
    thiserror::Error,
};

/// Runs the binary on a current thread runtime.
pub fn main(args: impl IntoIterator<Item = String>) -> ExitCode {
    match block_on(start(args)) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: failed to start the runtime: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Drives `future` to completion without waiting for the blocking tasks it
/// left behind. Solves that ran past their timeout keep their thread until
/// they finish, which must not hold up the exit.
fn block_on<F: Future>(future: F) -> std::io::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    Ok(output)
}

/// Runs the binary and maps the outcome onto an exit status.
pub async fn start(args: impl IntoIterator<Item = String>) -> ExitCode {
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(?err, "winner determination failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

pub async fn run(args: impl IntoIterator<Item = String>) -> Result<(), Error> {
    let args = cli::Args::parse_from(args);
    observe::init(&args.log, args.stderr_threshold, args.use_json_logs);
    execute(args).await
}

/// Runs the parsed command. Tracing has to be set up by the caller.
pub(crate) async fn execute(args: cli::Args) -> Result<(), Error> {
    tracing::info!("running winner determination with {args:#?}");

    let config = match &args.config {
        Some(path) => config::file::load(path).await?,
        None => config::file::default(),
    };
    tracing::debug!(?config, "loaded configuration");

    match args.command {
        cli::Command::Solve {
            input,
            format,
            output,
            no_kernel,
        } => solve(&input, format, output.as_deref(), no_kernel, &config).await,
        cli::Command::Convert {
            input,
            format,
            output,
        } => {
            let auction = read(&input, format).await?;
            let output = output.unwrap_or_else(|| input.with_extension("dzn"));
            io::write(&output, &io::dzn::render(&auction)).await?;
            observe::report_written(Some(output.as_path()));
            Ok(())
        }
        cli::Command::Bench { input, format } => {
            let auction = read(&input, format).await?;
            let report = bench::run(&auction, &config).await?;
            io::report::print(&report.to_string())
                .await
                .map_err(Error::Console)?;
            Ok(())
        }
    }
}

async fn solve(
    input: &Path,
    format: io::Format,
    output: Option<&Path>,
    no_kernel: bool,
    config: &infra::Config,
) -> Result<(), Error> {
    let auction = read(input, format).await?;

    let lp = infra::GoodLp::new(config.lp_timeout);
    let solver = mwvc::build(&config.solver);
    let mut kernel = config.kernel;
    kernel.enabled &= !no_kernel;
    let pipeline = Pipeline {
        lp: &lp,
        solver: solver.as_ref(),
        kernel,
    };
    let outcome = pipeline.solve(&auction).await?;

    // The report is written even when validation fails.
    let report = io::report::render(&auction, &outcome.solution);
    match output {
        Some(path) => io::write(path, &report).await?,
        None => io::report::print(&report).await.map_err(Error::Console)?,
    }
    observe::report_written(output);
    if let Some(caveat) = io::report::caveat(&outcome.solution) {
        io::report::note(&caveat).await.map_err(Error::Console)?;
    }

    outcome.validation?;
    Ok(())
}

async fn read(path: &Path, format: io::Format) -> Result<crate::domain::Auction, Error> {
    let auction = io::read(path, format).await?;
    observe::auction(path, &auction);
    Ok(auction)
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0:#}")]
    Config(#[from] anyhow::Error),
    #[error("invalid input: {0}")]
    Input(#[from] io::Error),
    #[error("solver unavailable: {0}")]
    SolverUnavailable(#[from] SolverUnavailable),
    #[error("solution failed validation: {0}")]
    Validation(#[from] ValidationFailure),
    #[error("failed to write to the console: {0}")]
    Console(std::io::Error),
}
