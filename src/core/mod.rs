pub mod config;
pub mod database;
pub mod error;
pub mod extractor;
pub mod mapper;
pub mod middleware;
pub mod openapi;
pub mod outcome;
pub mod repository;
pub mod service;
