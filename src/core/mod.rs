pub mod cli;
pub mod components;
pub mod config;
pub mod system;
