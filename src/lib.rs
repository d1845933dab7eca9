//! Data access layer for the CineVault movies API.
//!
//! Thin model structs ([`users::UserInfoModel`], [`movies::MovieModel`])
//! wrap a shared Postgres pool and issue parameterized sqlx statements.
//! Updates are guarded by an optimistic `version` column and every call
//! runs under a fixed query timeout.

pub mod config;
pub mod db;
pub mod error;
pub mod movies;
pub mod users;

pub use crate::db::Models;
pub use crate::error::ModelError;
