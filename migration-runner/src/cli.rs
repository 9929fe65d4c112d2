//! CLI argument definitions using clap.

use clap::Parser;

/// Regenerate the Prisma client and push schema changes to the database
#[derive(Parser, Debug)]
#[command(name = "run-migration")]
#[command(version)]
#[command(
    about = "Regenerate the Prisma client and push schema changes to the database",
    long_about = "Runs `npx prisma generate` followed by `npx prisma db push`.\n\
                  Stops at the first command that fails and exits with status 1."
)]
pub struct Cli {}
