//! Library surface of the dripfeed binary, exposed for integration tests.

pub mod config;
pub mod run;
