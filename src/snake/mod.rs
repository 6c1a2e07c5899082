pub mod board;
pub mod config;
pub mod constants;
pub mod game;
pub mod models;
pub mod types;
pub mod utils;
