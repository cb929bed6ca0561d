use carbondash::cli::{Cli, run};
use clap::Parser;

fn main() -> std::process::ExitCode {
    env_logger::init();
    run(Cli::parse())
}
