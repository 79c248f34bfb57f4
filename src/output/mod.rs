//! Result output

pub mod writer;

pub use writer::write_networks;
