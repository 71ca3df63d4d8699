// src/models/short_link.rs - Pure data structures
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::validations::validate_url;

// DTO for creating a new short link
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortLinkDto {
    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub long_url: String,
}

/// Represents a short link in the system. Records are never updated after insert.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLink {
    /// The random token that identifies this link
    pub token: String,

    /// The original, long URL that was shortened
    pub long_url: String,

    /// Base address plus token, stored as issued
    pub short_url: String,

    /// When this short link was created
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(token: String, long_url: String, short_url: String) -> Self {
        Self {
            token,
            long_url,
            short_url,
            created_at: Utc::now(),
        }
    }
}

// DTO returned from the creation endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkResponseDto {
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for ShortLinkResponseDto {
    fn from(link: ShortLink) -> Self {
        ShortLinkResponseDto {
            short_url: link.short_url,
            original_url: link.long_url,
            created_at: link.created_at,
        }
    }
}

// DTO returned from the resolution endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedUrlDto {
    pub long_url: String,
}

impl From<ShortLink> for ResolvedUrlDto {
    fn from(link: ShortLink) -> Self {
        ResolvedUrlDto {
            long_url: link.long_url,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TokenQueryParams {
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_dto_uses_camel_case() {
        let dto: CreateShortLinkDto =
            serde_json::from_value(json!({ "longUrl": "https://example.com" })).unwrap();
        assert_eq!(dto.long_url, "https://example.com");

        let missing: CreateShortLinkDto = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.long_url, "");
    }

    #[test]
    fn test_response_dto_from_link() {
        let link = ShortLink::new(
            "deadbeef".to_string(),
            "https://example.com/a".to_string(),
            "http://sho.rt/deadbeef".to_string(),
        );
        let created_at = link.created_at;

        let value = serde_json::to_value(ShortLinkResponseDto::from(link)).unwrap();
        assert_eq!(value["shortUrl"], "http://sho.rt/deadbeef");
        assert_eq!(value["originalUrl"], "https://example.com/a");
        assert_eq!(
            value["createdAt"],
            serde_json::to_value(created_at).unwrap()
        );
    }
}
