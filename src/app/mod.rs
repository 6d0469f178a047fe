// Application layer: what the CLI runs against a store.

#[cfg(feature = "cli")]
pub mod commands;
pub mod demo;
