/// CLI layer: argument parsing and output writing.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{OutputCtx, write_error};
