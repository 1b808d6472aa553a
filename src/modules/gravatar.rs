//! Gravatar avatar URLs.
//!
//! Gravatar identifies an avatar by the MD5 digest of the trimmed, lowercased
//! email address. The URL is derived locally; no request is made to Gravatar.

use md5::{Digest, Md5};

use crate::shared::constants::{AVATAR_DEFAULT, AVATAR_RATING, AVATAR_SIZE};

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// Avatar URL builder with fixed image options
#[derive(Debug, Clone)]
pub struct Gravatar {
    size: u32,
    rating: String,
    default_image: String,
}

impl Default for Gravatar {
    fn default() -> Self {
        Self::new(AVATAR_SIZE, AVATAR_RATING, AVATAR_DEFAULT)
    }
}

impl Gravatar {
    pub fn new(size: u32, rating: impl Into<String>, default_image: impl Into<String>) -> Self {
        Self {
            size,
            rating: rating.into(),
            default_image: default_image.into(),
        }
    }

    /// Hex MD5 digest Gravatar uses to key an email
    pub fn email_hash(email: &str) -> String {
        let normalized = email.trim().to_lowercase();
        hex::encode(Md5::digest(normalized.as_bytes()))
    }

    /// Avatar URL for `email`
    pub fn url(&self, email: &str) -> String {
        format!(
            "{}/{}?s={}&r={}&d={}",
            GRAVATAR_BASE_URL,
            Self::email_hash(email),
            self.size,
            self.rating,
            self.default_image
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_uses_fixed_options() {
        let url = Gravatar::default().url("ann@x.com");
        assert_eq!(
            url,
            "https://www.gravatar.com/avatar/0530e08f7da74c378704ddaaf7adca72?s=200&r=pg&d=mm"
        );
    }

    #[test]
    fn test_url_is_deterministic() {
        let gravatar = Gravatar::default();
        assert_eq!(gravatar.url("a@b.com"), gravatar.url("a@b.com"));
        assert!(gravatar
            .url("a@b.com")
            .contains("357a20e8c56e69d6f9734d23ef9517e8"));
    }

    #[test]
    fn test_email_is_normalized_before_hashing() {
        assert_eq!(
            Gravatar::email_hash("  Ann@X.com "),
            Gravatar::email_hash("ann@x.com")
        );
    }

    #[test]
    fn test_different_emails_differ() {
        assert_ne!(
            Gravatar::email_hash("ann@x.com"),
            Gravatar::email_hash("bob@x.com")
        );
    }
}
