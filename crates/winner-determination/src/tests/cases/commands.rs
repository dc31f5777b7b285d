//! End to end runs of the binary's commands against files on disk.

use {
    crate::{
        infra::cli::Args,
        run::{Error, execute},
    },
    clap::Parser,
    std::{fs, path::Path},
};

fn args(args: &[&str]) -> Args {
    ::observe::tracing::initialize_reentrant("warn,winner_determination=debug");
    Args::parse_from(std::iter::once("winner-determination").chain(args.iter().copied()))
}

fn path(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[tokio::test]
async fn solve_writes_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("auction.txt");
    let output = dir.path().join("auction_results.txt");
    fs::write(&input, "3 4\n10,1,2\n6,1\n6,2\n3,3\n").unwrap();

    execute(args(&["solve", path(&input), "--output", path(&output)]))
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "15\n6\t1\n6\t2\n3\t3\n"
    );
}

#[tokio::test]
async fn solve_reads_cats_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("auction.cats");
    let output = dir.path().join("auction_results.txt");
    fs::write(
        &input,
        "% cats\ngoods 2\nbids 3\ndummy 0\n\n0 10 0 1 #\n1 6 0 #\n2 6 1 #\n",
    )
    .unwrap();

    execute(args(&[
        "solve",
        path(&input),
        "--format",
        "cats",
        "--output",
        path(&output),
        "--no-kernel",
    ]))
    .await
    .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "12\n6\t1\n6\t2\n");
}

#[tokio::test]
async fn malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("auction.txt");
    fs::write(&input, "2 2\n5,1\n").unwrap();

    let err = execute(args(&["solve", path(&input)])).await.unwrap_err();
    assert!(matches!(err, Error::Input(_)));
}

/// A cover engine lying about its cover weight yields a report that does not
/// add up. The report is still written but the run fails.
#[cfg(unix)]
#[tokio::test]
async fn failed_validation_still_writes_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("auction.txt");
    let output = dir.path().join("auction_results.txt");
    let config = dir.path().join("wd.toml");
    fs::write(&input, "1 2\n5,1\n7,1\n").unwrap();
    fs::write(
        &config,
        r#"
        [solver]
        kind = "process"
        command = "sh"
        args = ["-c", "echo \"$0, 1, 0.0\"; echo 1", "{problem}"]
        exact = true
        "#,
    )
    .unwrap();

    let err = execute(args(&[
        "--config",
        path(&config),
        "solve",
        path(&input),
        "--output",
        path(&output),
        "--no-kernel",
    ]))
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "11\n7\t1\n");
}

#[tokio::test]
async fn convert_writes_minizinc_data_next_to_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("auction.txt");
    fs::write(&input, "2 2\n5,1\n7,1,2\n").unwrap();

    execute(args(&["convert", path(&input)])).await.unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("auction.dzn")).unwrap(),
        "nitems = 2;\n\nnbids = 2;\nbid = [ {1}, {1,2}];\nbidvalue = [5, 7 ];\n"
    );
}

#[tokio::test]
async fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("auction.txt");
    let config = dir.path().join("wd.toml");
    fs::write(&input, "1 1\n5,1\n").unwrap();
    fs::write(&config, "[kernel]\ntolerance = 2.0\n").unwrap();

    let err = execute(args(&["--config", path(&config), "solve", path(&input)]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
