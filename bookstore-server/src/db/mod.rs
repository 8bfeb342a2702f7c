//! Database layer - connection pool, bootstrap migration, repository
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - One SQL statement per operation - no check-then-insert
//! - No explicit transactions - every statement is independently atomic

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{BookRepo, DbError};
