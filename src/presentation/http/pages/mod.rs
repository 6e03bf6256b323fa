// src/presentation/http/pages/mod.rs
pub mod categories;
