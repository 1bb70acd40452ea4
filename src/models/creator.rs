//! Creator records — discovered social-media accounts and their scores.

use serde::{Deserialize, Serialize};

/// A creator account returned by the search endpoints.
///
/// Classification scores are present on every record returned by scored
/// endpoints. The similarity group (`keyword_similarity` through
/// `similarity_explanation`) is only populated for similarity-based queries
/// and defaults to zero/empty when the backend omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    /// Database identifier.
    pub id: i64,
    /// Account handle, without the leading `@`.
    pub account: String,
    /// Display name on the profile.
    pub profile_name: String,
    /// Raw follower count.
    pub followers: u64,
    /// Human-formatted follower count (e.g. "1.2M").
    pub followers_formatted: String,
    /// Average engagement rate.
    pub avg_engagement: f64,
    /// Business category, when the account declares one.
    pub business_category_name: Option<String>,
    /// Business address, when the account declares one.
    pub business_address: Option<String>,
    /// Profile biography text.
    pub biography: String,
    /// URL of the profile image.
    pub profile_image_link: String,
    /// URL of the profile itself.
    pub profile_url: String,
    /// Business contact email, when available.
    pub business_email: Option<String>,
    /// Generic contact email, when available.
    pub email_address: Option<String>,
    /// Recent posts as opaque JSON objects.
    #[serde(default)]
    pub posts: Vec<serde_json::Value>,
    /// Whether the account is classified as a personal creator.
    pub is_personal_creator: bool,

    // Classification scores, bounded to [0, 1].
    /// Individual (1.0) vs. organization (0.0).
    pub individual_vs_org_score: f64,
    /// Appeal across age generations.
    pub generational_appeal_score: f64,
    /// Degree of professional content production.
    pub professionalization_score: f64,
    /// Relationship/lifestyle content orientation.
    pub relationship_status_score: f64,

    // Language detection, absent for records that were never analyzed.
    pub is_english: Option<bool>,
    pub detected_language: Option<String>,
    pub language_confidence: Option<f64>,

    // Per-signal ranking scores for text-based search.
    #[serde(default)]
    pub keyword_score: f64,
    #[serde(default)]
    pub profile_score: f64,
    #[serde(default)]
    pub content_score: f64,
    #[serde(default)]
    pub combined_score: f64,

    // Direct vector-comparison scores for similarity search.
    #[serde(default)]
    pub keyword_similarity: f64,
    #[serde(default)]
    pub profile_similarity: f64,
    #[serde(default)]
    pub content_similarity: f64,
    #[serde(default)]
    pub vector_similarity_score: f64,
    /// Human-readable explanation of why this creator matched.
    #[serde(default)]
    pub similarity_explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_parses_without_similarity_fields() {
        // A text-search record: no similarity group, no language fields.
        let json = serde_json::json!({
            "id": 42,
            "account": "alice",
            "profile_name": "Alice",
            "followers": 1_200_000,
            "followers_formatted": "1.2M",
            "avg_engagement": 0.034,
            "business_category_name": null,
            "business_address": null,
            "biography": "Baker. Dog mom.",
            "profile_image_link": "https://cdn.example.com/alice.jpg",
            "profile_url": "https://instagram.com/alice",
            "business_email": null,
            "email_address": "alice@example.com",
            "posts": [],
            "is_personal_creator": true,
            "individual_vs_org_score": 0.91,
            "generational_appeal_score": 0.5,
            "professionalization_score": 0.3,
            "relationship_status_score": 0.7,
            "keyword_score": 0.8,
            "profile_score": 0.6,
            "content_score": 0.7,
            "combined_score": 0.72
        });

        let creator: Creator = serde_json::from_value(json).unwrap();
        assert_eq!(creator.account, "alice");
        assert_eq!(creator.followers, 1_200_000);
        assert!(creator.is_english.is_none());
        assert_eq!(creator.keyword_similarity, 0.0);
        assert_eq!(creator.similarity_explanation, "");
    }
}
