use std::sync::Arc;

use crate::client::NewsClient;
use crate::domain::FeedState;

/// Headline shown when a fetch does not complete at all (connection
/// failure, timeout, malformed body).
pub const TRANSPORT_ERROR_HEADLINE: &str = "Error loading news";

/// Fallback suffix when an error response carries no message and no
/// recognized code.
const UNKNOWN_ISSUE: &str = "Unknown issue";

/// Owns the fetch state of the headlines screen.
///
/// One fetch attempt runs Idle → Loading → {Populated | Errored} → Idle:
/// a successful response replaces `headlines`/`image_urls` with the
/// article titles and image URLs in response order; any failure
/// collapses to a single synthetic headline with an empty image slot.
/// Every attempt ends with the loading flag cleared, and failures never
/// propagate to the caller.
///
/// `request_fetch` borrows the controller mutably, so a host can only
/// run attempts one after another; each completed attempt overwrites
/// the whole state, which keeps "the most recently completed response
/// wins" semantics without any extra guard.
pub struct HeadlineFeedController {
    client: Arc<dyn NewsClient + Send + Sync>,
    country: String,
    api_key: String,
    state: FeedState,
    // Article URLs parallel to `headlines`; synthetic error cards get
    // an empty slot so the list stays positionally aligned.
    links: Vec<String>,
    refresh_token: u64,
    served_token: u64,
}

impl HeadlineFeedController {
    pub fn new(
        client: Arc<dyn NewsClient + Send + Sync>,
        country: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            country: country.into(),
            api_key: api_key.into(),
            state: FeedState::default(),
            links: Vec::new(),
            refresh_token: 0,
            served_token: 0,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Run one fetch attempt against the headlines service and replace
    /// the renderable state with its outcome. Never returns an error;
    /// both failure kinds terminate in a valid one-card state.
    pub async fn request_fetch(&mut self) {
        self.state.is_loading = true;

        let result = self
            .client
            .top_headlines(&self.country, &self.api_key)
            .await;

        let (headlines, image_urls, links) = match result {
            Ok(response) if response.is_ok() => {
                let headlines = response
                    .articles
                    .iter()
                    .map(|article| article.title.clone())
                    .collect();
                let image_urls = response
                    .articles
                    .iter()
                    .map(|article| article.image_url().to_string())
                    .collect();
                let links = response
                    .articles
                    .iter()
                    .map(|article| article.url.clone())
                    .collect();
                (headlines, image_urls, links)
            }
            Ok(response) => {
                tracing::warn!(code = ?response.code, "headline service reported an error");
                let headline =
                    domain_error_headline(response.code.as_deref(), response.message.as_deref());
                (vec![headline], vec![String::new()], vec![String::new()])
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load headlines");
                (
                    vec![TRANSPORT_ERROR_HEADLINE.to_string()],
                    vec![String::new()],
                    vec![String::new()],
                )
            }
        };

        self.state.headlines = headlines;
        self.state.image_urls = image_urls;
        self.links = links;

        // First completed fetch puts focus on the top card.
        if self.state.focused_index.is_none() && !self.state.headlines.is_empty() {
            self.state.focused_index = Some(0);
        }

        self.state.is_loading = false;
    }

    /// Signal that a manual refresh was requested. Each call advances
    /// the token by one step, and each distinct token value schedules
    /// exactly one fetch: two triggers in quick succession mean two
    /// attempts, not one.
    pub fn toggle_refresh(&mut self) {
        self.refresh_token = self.refresh_token.wrapping_add(1);
    }

    /// Opaque refresh token; changes on every [`toggle_refresh`].
    ///
    /// [`toggle_refresh`]: Self::toggle_refresh
    pub fn refresh_token(&self) -> u64 {
        self.refresh_token
    }

    /// Consume one pending refresh request. The host loop runs one
    /// [`request_fetch`] per `true` until this returns `false`.
    ///
    /// [`request_fetch`]: Self::request_fetch
    pub fn take_refresh_request(&mut self) -> bool {
        if self.served_token == self.refresh_token {
            return false;
        }
        self.served_token = self.served_token.wrapping_add(1);
        true
    }

    /// Focus notification from the rendering surface. Gaining focus
    /// moves the cursor; losing focus leaves it where it was, so the
    /// last focused card keeps its highlight until another takes over.
    pub fn on_item_focus_changed(&mut self, index: usize, is_focused: bool) {
        if is_focused {
            self.state.focused_index = Some(index);
        }
    }

    /// URL of the article behind a card, if any. Synthetic error cards
    /// have no link.
    pub fn link_at(&self, index: usize) -> Option<&str> {
        self.links
            .get(index)
            .map(String::as_str)
            .filter(|link| !link.is_empty())
    }
}

/// Format a domain-level failure as a single headline. Known codes get
/// a specific prefix and whatever message the service supplied; an
/// unknown or absent code falls back to a generic prefix with
/// "Unknown issue" standing in for a missing message.
fn domain_error_headline(code: Option<&str>, message: Option<&str>) -> String {
    match code {
        Some("400") => format!("Bad Request: {}", message.unwrap_or("")),
        Some("401") => format!("Unauthorized: {}", message.unwrap_or("")),
        Some("429") => format!("Too Many Requests: {}", message.unwrap_or("")),
        Some("500") => format!("Server Error: {}", message.unwrap_or("")),
        _ => format!("Error: {}", message.unwrap_or(UNKNOWN_ISSUE)),
    }
}
