fn main() -> std::process::ExitCode {
    winner_determination::main(std::env::args())
}
