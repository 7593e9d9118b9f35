mod clierror;
mod cliargs;
mod types;

pub use clierror::CliError;
pub use cliargs::CliArgs;
pub use types::{EdgeArg, Pair};
