// src/gui/components/mod.rs
pub mod data_table;
pub mod scatter;
