//! TutorHub - tutoring marketplace backend.
//!
//! A REST API plus server-rendered front end for students, tutors, courses
//! and course registers, built on Actix Web.
//!
//! # Architecture
//! - `cache`: pluggable cache backends (Moka/Redis), home of the JWT blocklist
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `middlewares`: authentication middleware
//! - `models`: data model definitions
//! - `routes`: API and page routing layer
//! - `runtime`: runtime lifecycle management
//! - `services`: business logic layer
//! - `storage`: data storage layer (SeaORM)
//! - `utils`: utility functions

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
