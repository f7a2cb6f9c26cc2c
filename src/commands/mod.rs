/// Command layer: wires configuration, input, cutting and output together.
pub mod cut;

pub use cut::run;
