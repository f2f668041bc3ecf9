// dataguard/src/lib.rs
//! # DataGuard CLI and HTTP service
//!
//! This crate provides the command-line interface and the local HTTP service built on
//! `dataguard-core`. The binary in `main.rs` only parses arguments and dispatches into the
//! modules exported here, which keeps every command reachable from integration tests.

pub mod api;
pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
