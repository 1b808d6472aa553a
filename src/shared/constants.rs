// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

/// Returned when the email is already registered
pub const MSG_USER_EXISTS: &str = "User already exists";

/// Plain-text body of every 500 response
pub const MSG_SERVER_ERROR: &str = "Server error";

// =============================================================================
// AVATAR
// =============================================================================

/// Gravatar image size in pixels
pub const AVATAR_SIZE: u32 = 200;

/// Highest Gravatar rating allowed for avatars
pub const AVATAR_RATING: &str = "pg";

/// Gravatar fallback image when the email has no avatar ("mystery man")
pub const AVATAR_DEFAULT: &str = "mm";
