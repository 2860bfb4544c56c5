//! rosterd - a user roster CRUD service over HTTP, backed by PostgreSQL

pub mod cli;
pub mod config;
pub mod http_server;
pub mod models;
pub mod repository;
pub mod usecase;
