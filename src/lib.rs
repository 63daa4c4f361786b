pub mod config;

pub mod models;

pub mod queries;

pub mod seed;

pub mod stage;

pub use config::Config;
pub use models::{Book, BookSummary};
