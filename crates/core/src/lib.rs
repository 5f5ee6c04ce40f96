//! Core library: configuration, filename grammar, scanning, selection, code generation.

pub mod codegen;
pub mod config;
pub mod filenames;
pub mod models;
pub mod pipeline;
pub mod scanner;
pub mod selection;
