//! Search models — query requests and response envelopes.

use serde::{Deserialize, Serialize};

use super::creator::Creator;

/// Search strategy, interpreted entirely by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    /// Pure vector-similarity search.
    Vector,
    /// Lexical full-text search.
    Text,
    /// Blend of vector and text ranking.
    Hybrid,
}

/// Per-signal weights for custom result ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SignalWeights {
    pub keyword: f64,
    pub profile: f64,
    pub content: f64,
}

/// Request body for the main search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query.
    pub query: String,
    /// Search strategy (backend default: hybrid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<SearchMethod>,
    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_engagement: Option<f64>,
    /// Restrict to a business category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Additional keywords to boost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Custom per-signal ranking weights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_weights: Option<SignalWeights>,

    // Classification score filters, min ≤ max is not enforced client-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_individual_vs_org_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_individual_vs_org_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_generational_appeal_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_generational_appeal_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_professionalization_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_professionalization_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_relationship_status_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_relationship_status_score: Option<f64>,
}

impl SearchRequest {
    /// Create a new search request for a query string.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            method: None,
            limit: None,
            min_followers: None,
            max_followers: None,
            min_engagement: None,
            category: None,
            keywords: None,
            custom_weights: None,
            min_individual_vs_org_score: None,
            max_individual_vs_org_score: None,
            min_generational_appeal_score: None,
            max_generational_appeal_score: None,
            min_professionalization_score: None,
            max_professionalization_score: None,
            min_relationship_status_score: None,
            max_relationship_status_score: None,
        }
    }

    /// Set the search strategy.
    pub fn method(mut self, method: SearchMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the maximum number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the minimum follower count.
    pub fn min_followers(mut self, min: u64) -> Self {
        self.min_followers = Some(min);
        self
    }

    /// Set the maximum follower count.
    pub fn max_followers(mut self, max: u64) -> Self {
        self.max_followers = Some(max);
        self
    }

    /// Set the minimum engagement rate.
    pub fn min_engagement(mut self, min: f64) -> Self {
        self.min_engagement = Some(min);
        self
    }

    /// Restrict results to a business category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set keywords to boost.
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Set custom per-signal ranking weights.
    pub fn custom_weights(mut self, weights: SignalWeights) -> Self {
        self.custom_weights = Some(weights);
        self
    }

    /// Bound the individual-vs-organization score.
    pub fn individual_vs_org_score(mut self, min: f64, max: f64) -> Self {
        self.min_individual_vs_org_score = Some(min);
        self.max_individual_vs_org_score = Some(max);
        self
    }

    /// Bound the generational-appeal score.
    pub fn generational_appeal_score(mut self, min: f64, max: f64) -> Self {
        self.min_generational_appeal_score = Some(min);
        self.max_generational_appeal_score = Some(max);
        self
    }

    /// Bound the professionalization score.
    pub fn professionalization_score(mut self, min: f64, max: f64) -> Self {
        self.min_professionalization_score = Some(min);
        self.max_professionalization_score = Some(max);
        self
    }

    /// Bound the relationship-status score.
    pub fn relationship_status_score(mut self, min: f64, max: f64) -> Self {
        self.min_relationship_status_score = Some(min);
        self.max_relationship_status_score = Some(max);
        self
    }
}

/// Request body for the similar-creators endpoint, keyed by a reference
/// account handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarSearchRequest {
    /// Reference account handle.
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_engagement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_engagement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Minimum similarity for a result to qualify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,
    /// Compare stored vectors directly instead of text-based ranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_vector_similarity: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_weights: Option<SignalWeights>,
}

impl SimilarSearchRequest {
    /// Create a new similarity request for a reference account.
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            limit: None,
            min_followers: None,
            max_followers: None,
            min_engagement: None,
            max_engagement: None,
            category: None,
            similarity_threshold: None,
            use_vector_similarity: None,
            custom_weights: None,
        }
    }

    /// Set the maximum number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Bound the follower count.
    pub fn followers(mut self, min: u64, max: u64) -> Self {
        self.min_followers = Some(min);
        self.max_followers = Some(max);
        self
    }

    /// Bound the engagement rate.
    pub fn engagement(mut self, min: f64, max: f64) -> Self {
        self.min_engagement = Some(min);
        self.max_engagement = Some(max);
        self
    }

    /// Restrict results to a business category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the minimum similarity threshold.
    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = Some(threshold);
        self
    }

    /// Compare stored vectors directly.
    pub fn use_vector_similarity(mut self, enable: bool) -> Self {
        self.use_vector_similarity = Some(enable);
        self
    }

    /// Set custom per-signal ranking weights.
    pub fn custom_weights(mut self, weights: SignalWeights) -> Self {
        self.custom_weights = Some(weights);
        self
    }
}

/// Request body for the category-browse endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySearchRequest {
    /// Business category name.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_engagement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_engagement: Option<f64>,
}

impl CategorySearchRequest {
    /// Create a new category request.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            limit: None,
            min_followers: None,
            max_followers: None,
            min_engagement: None,
            max_engagement: None,
        }
    }

    /// Set the maximum number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Bound the follower count.
    pub fn followers(mut self, min: u64, max: u64) -> Self {
        self.min_followers = Some(min);
        self.max_followers = Some(max);
        self
    }

    /// Bound the engagement rate.
    pub fn engagement(mut self, min: f64, max: f64) -> Self {
        self.min_engagement = Some(min);
        self.max_engagement = Some(max);
        self
    }
}

/// Response envelope shared by the POST search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Whether the backend executed the query.
    pub success: bool,
    /// Matching creators, ranked by the backend.
    pub results: Vec<Creator>,
    /// Number of results returned.
    pub count: usize,
    /// Echo of the submitted query (or reference account/category).
    pub query: String,
    /// Echo of the search method the backend applied.
    pub method: String,
    /// Error message when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response envelope of the username lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameSearchResponse {
    pub success: bool,
    pub result: Creator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_omits_unset_fields() {
        let req = SearchRequest::new("vegan bakers").method(SearchMethod::Hybrid);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["query"], "vegan bakers");
        assert_eq!(value["method"], "hybrid");
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("limit"));
        assert!(!obj.contains_key("min_followers"));
        assert!(!obj.contains_key("custom_weights"));
    }

    #[test]
    fn search_method_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(SearchMethod::Vector).unwrap(),
            serde_json::json!("vector")
        );
        assert_eq!(
            serde_json::to_value(SearchMethod::Text).unwrap(),
            serde_json::json!("text")
        );
    }

    #[test]
    fn score_filter_setters_populate_both_bounds() {
        let req = SearchRequest::new("q")
            .individual_vs_org_score(0.6, 1.0)
            .professionalization_score(0.0, 0.4);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["min_individual_vs_org_score"], 0.6);
        assert_eq!(value["max_individual_vs_org_score"], 1.0);
        assert_eq!(value["min_professionalization_score"], 0.0);
        assert_eq!(value["max_professionalization_score"], 0.4);
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("min_generational_appeal_score"));
    }

    #[test]
    fn similar_request_serializes_weights() {
        let req = SimilarSearchRequest::new("alice")
            .limit(5)
            .use_vector_similarity(true)
            .custom_weights(SignalWeights {
                keyword: 0.2,
                profile: 0.5,
                content: 0.3,
            });
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["account"], "alice");
        assert_eq!(value["limit"], 5);
        assert_eq!(value["use_vector_similarity"], true);
        assert_eq!(value["custom_weights"]["profile"], 0.5);
    }
}
