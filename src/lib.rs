pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod gui;
pub mod models;
pub mod route;
pub mod vote;
