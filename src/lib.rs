//! Pawbook - a console personal assistant.
//!
//! This library exposes the core modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod contacts;
pub mod error;
pub mod holidays;
pub mod logging;
pub mod notes;
pub mod persistence;
pub mod session;
pub mod sorter;
pub mod weather;
