// src/gui/mod.rs
pub mod app;
pub mod components;

pub use app::{native_options, run};
