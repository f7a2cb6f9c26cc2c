/// Cut domain layer: field-spec parsing, configuration, line cutting, input reading.
pub mod config;
pub mod errors;
pub mod fields;
pub mod input;
pub mod line;

pub use config::{Config, DEFAULT_DELIMITER};
pub use errors::CutError;
pub use input::read_lines;
pub use line::cut_lines;
