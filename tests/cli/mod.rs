//! Tests that run the compiled binary with a scripted stdin.

pub mod common;
pub mod binary_test;
