pub mod actions;
pub mod commands;
pub mod completions;
pub mod discovery;
pub mod models;
pub mod parser;
pub mod update;
