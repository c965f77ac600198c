// Command-line controller
// Parses arguments, checks preconditions, calls the query engine and the
// team repository, and renders the result

pub mod args;
pub mod commands;
pub mod errors;
pub mod responses;

pub use args::{Cli, Command};
pub use commands::{execute, run};
pub use errors::CliError;
pub use responses::Response;
