pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod scanner;
