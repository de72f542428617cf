//! Library-level integration tests: the assistant and console driven
//! end to end over temporary stores.

pub mod console_test;
pub mod persistence_test;
pub mod session_test;
