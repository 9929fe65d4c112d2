//! Migration runner - regenerates the Prisma client and pushes the schema.
//!
//! The crate owns no migration logic of its own. It runs the external
//! `npx prisma` tool twice, in a fixed order, and reports the outcome.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod output;
pub mod runner;
