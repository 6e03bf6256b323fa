// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every helper.
#![allow(dead_code, unused_imports)]

pub mod helpers;
pub mod mocks;

pub use helpers::*;
pub use mocks::*;
