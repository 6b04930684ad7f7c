/// Renderable state owned by the feed controller.
///
/// `headlines` and `image_urls` always have the same length: slot `i`
/// of both derives from article `i` of the last response. The record is
/// replaced wholesale at the end of every fetch attempt, never updated
/// piecemeal while a fetch is in flight.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub headlines: Vec<String>,
    pub image_urls: Vec<String>,
    pub is_loading: bool,
    pub focused_index: Option<usize>,
}

impl FeedState {
    pub fn len(&self) -> usize {
        self.headlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }

    /// Image URL of a card; empty when the card has no image or the
    /// index is out of range.
    pub fn image_url(&self, index: usize) -> &str {
        self.image_urls
            .get(index)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn has_image(&self, index: usize) -> bool {
        !self.image_url(index).is_empty()
    }
}
