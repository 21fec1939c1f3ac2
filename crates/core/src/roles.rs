//! Well-known role name constants.
//!
//! Registration creates a profile row only for these two roles; any other
//! role string is stored on the user row as-is.

pub const ROLE_PATIENT: &str = "patient";
pub const ROLE_DOCTOR: &str = "doctor";
