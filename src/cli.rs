//! CLI domain: parse, route, help and output only.
//! Generation itself lives in [`crate::generator`].

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::{GeneratorOverrides, RunContext};
