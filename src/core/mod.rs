//! Core quiz generation module

pub mod client;
pub mod config;
pub mod errors;
pub mod generator;
pub mod models;
pub mod prompt;
