//! Command implementations for toolenv-cli

pub mod export;

pub use export::run_export;
