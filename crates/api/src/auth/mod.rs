//! Credential handling. There are no sessions or tokens: login verifies the
//! stored hash and returns the user record.

pub mod password;
