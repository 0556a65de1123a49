// src/api/handlers/mod.rs
pub mod checker;
pub mod dashboard;
pub mod generator;
