//! Shared domain constants.

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Lowest accepted value for an ambition subject weight.
pub const MIN_SUBJECT_WEIGHT: i32 = 1;

/// Weight applied to a subject when the caller omits it.
pub const DEFAULT_SUBJECT_WEIGHT: i32 = 1;
