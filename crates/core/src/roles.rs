//! Well-known role name constants.
//!
//! Role names are stored as plain text on the `users` table and embedded
//! in JWT claims; these constants are the canonical spellings.

/// Full administrative access, including user management.
pub const ROLE_ADMIN: &str = "admin";

/// Day-to-day monitoring access: can acknowledge alarms and read logs.
pub const ROLE_OPERATOR: &str = "operator";
