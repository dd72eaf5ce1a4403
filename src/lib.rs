//! # Dataset Publisher
//!
//! Publishes user-submitted datasets as queryable tables in a Hive-compatible
//! warehouse. The core is [`publisher::MetadataMapper`], which turns an
//! untrusted dataset title, a CSV header sample and a storage URI into a
//! table definition the warehouse DDL grammar will accept, or fails with a
//! precise diagnostic.
//!
//! ## Modules
//!
//! - [`publisher`]: identifier normalization, duplicate detection, location
//!   extraction and the mapper that ties them together
//! - [`error`]: error types and handling utilities
//! - [`config`]: persistent publisher settings
//! - [`logging`]: tracing subscriber setup for the binary
//!
//! Executing the generated DDL, authentication and warehouse client
//! bootstrap live outside this crate.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod logging;
pub mod publisher;
