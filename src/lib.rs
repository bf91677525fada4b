//! Query the StackExchange API for StackOverflow questions and print
//! filtered, sorted results.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
