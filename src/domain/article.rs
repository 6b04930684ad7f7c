use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Publisher of an article, as reported by the headlines service.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub id: Option<String>,
    pub name: String,
}

/// One article of a top-headlines response. Decoded once per fetch and
/// never mutated; a new fetch replaces the whole batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub content: Option<String>,
}

impl Article {
    /// Image URL for this article; the empty string marks "no image"
    /// through the rest of the pipeline.
    pub fn image_url(&self) -> &str {
        self.url_to_image.as_deref().unwrap_or("")
    }
}

/// Top-level response of the top-headlines endpoint.
///
/// A domain-level failure keeps `status != "ok"` and carries `code` and
/// `message` instead of articles, so both fields stay optional and the
/// article list defaults to empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<Article>,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl FeedResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADLINES_SAMPLE: &str = r#"{
      "status": "ok",
      "totalResults": 2,
      "articles": [
        {
          "source": { "id": "the-wire", "name": "The Wire" },
          "author": "A. Reporter",
          "title": "Quake shakes the coast",
          "description": "A strong quake was felt along the coast.",
          "url": "https://example.com/quake",
          "urlToImage": "https://example.com/quake.jpg",
          "publishedAt": "2024-03-01T08:30:00Z",
          "content": "A strong quake..."
        },
        {
          "source": { "id": null, "name": "Local Desk" },
          "author": null,
          "title": "Markets steady",
          "description": null,
          "url": "https://example.com/markets",
          "urlToImage": null,
          "publishedAt": "2024-03-01T07:00:00Z",
          "content": null
        }
      ]
    }"#;

    const ERROR_SAMPLE: &str = r#"{
      "status": "error",
      "code": "apiKeyInvalid",
      "message": "Your API key is invalid or incorrect."
    }"#;

    #[test]
    fn test_decode_headlines_response() {
        let response: FeedResponse = serde_json::from_str(HEADLINES_SAMPLE).unwrap();

        assert!(response.is_ok());
        assert_eq!(response.total_results, 2);
        assert_eq!(response.articles.len(), 2);

        let first = &response.articles[0];
        assert_eq!(first.source.id.as_deref(), Some("the-wire"));
        assert_eq!(first.source.name, "The Wire");
        assert_eq!(first.title, "Quake shakes the coast");
        assert_eq!(first.image_url(), "https://example.com/quake.jpg");
        assert_eq!(first.published_at.to_rfc3339(), "2024-03-01T08:30:00+00:00");
    }

    #[test]
    fn test_decode_article_with_absent_optionals() {
        let response: FeedResponse = serde_json::from_str(HEADLINES_SAMPLE).unwrap();
        let second = &response.articles[1];

        assert_eq!(second.source.id, None);
        assert_eq!(second.author, None);
        assert_eq!(second.description, None);
        assert_eq!(second.content, None);
        assert_eq!(second.image_url(), "");
    }

    #[test]
    fn test_decode_error_response() {
        let response: FeedResponse = serde_json::from_str(ERROR_SAMPLE).unwrap();

        assert!(!response.is_ok());
        assert_eq!(response.total_results, 0);
        assert!(response.articles.is_empty());
        assert_eq!(response.code.as_deref(), Some("apiKeyInvalid"));
        assert_eq!(
            response.message.as_deref(),
            Some("Your API key is invalid or incorrect.")
        );
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let result: std::result::Result<FeedResponse, _> =
            serde_json::from_str("{\"status\": \"ok\", \"articles\": \"nope\"}");
        assert!(result.is_err());
    }
}
