// src/application/ports/mod.rs
pub mod authorization;
pub mod security;
pub mod time;
