//! composer-codegen: Decoder Composer Context Generator
//!
//! Emits the numbered `Context0..ContextN` marker interfaces and their `then`/`finally`
//! extension functions used by the binary decoder composer. The output is deterministic
//! for a given interface count and is meant to be checked into the source tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
