pub mod auth;
pub mod client;
pub mod config;
pub mod operator;
pub mod order;
