pub mod config;
pub mod core;
mod database;
mod handlers;
pub mod models;
mod repos;
pub mod routes;
mod utils;
