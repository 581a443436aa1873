//! CLI domain: parse, route and output only.
//! Connection and walk orchestration live in the run context.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::{walk_to, RunContext};
