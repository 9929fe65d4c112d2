//! `run-migration` - regenerate the Prisma client and push the schema.

use clap::Parser;

use migration_runner::cli::Cli;
use migration_runner::error::RunResult;
use migration_runner::executor::SystemExecutor;
use migration_runner::runner::MigrationRunner;
use migration_runner::{logging, output};

fn main() {
    // Run the migration and turn any failure into exit code 1
    if let Err(e) = run() {
        output::failure(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> RunResult<()> {
    // No arguments are accepted; clap still answers --help and --version
    let _cli = Cli::parse();

    logging::init();

    MigrationRunner::new(SystemExecutor).run()
}
