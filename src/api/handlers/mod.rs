// src/api/handlers/mod.rs
pub mod breach;
pub mod generator;
pub mod history;
pub mod settings;
pub mod system;
