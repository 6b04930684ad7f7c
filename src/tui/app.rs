use ratatui::widgets::ListState;

use crate::controller::HeadlineFeedController;

pub const PAGE_SIZE: usize = 5;

/// UI-side state of the headlines screen. Focus lives in the
/// controller; this struct translates navigation into
/// focus-lost/focus-gained notifications and keeps the list scrolled
/// to the focused card.
pub struct HeadlinesApp {
    pub controller: HeadlineFeedController,
    pub list_state: ListState,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl HeadlinesApp {
    pub fn new(controller: HeadlineFeedController) -> Self {
        Self {
            controller,
            list_state: ListState::default(),
            should_quit: false,
            status_message: None,
        }
    }

    /// Align the list selection with the controller's focus cursor,
    /// e.g. after a fetch assigned the initial focus.
    pub fn sync_selection(&mut self) {
        self.list_state.select(self.controller.state().focused_index);
    }

    pub fn move_up(&mut self) {
        self.move_focus(|current, _| current.saturating_sub(1));
    }

    pub fn move_down(&mut self) {
        self.move_focus(|current, last| (current + 1).min(last));
    }

    pub fn next_page(&mut self) {
        self.move_focus(|current, last| (current + PAGE_SIZE).min(last));
    }

    pub fn prev_page(&mut self) {
        self.move_focus(|current, _| current.saturating_sub(PAGE_SIZE));
    }

    /// Card index the focus highlight is on, if any.
    pub fn focused_index(&self) -> Option<usize> {
        self.controller.state().focused_index
    }

    fn move_focus(&mut self, step: impl Fn(usize, usize) -> usize) {
        let len = self.controller.state().len();
        if len == 0 {
            return;
        }
        let last = len - 1;

        // A stale cursor (list shrank under it) clamps to the last card
        // before stepping.
        let next = match self.controller.state().focused_index {
            Some(current) => step(current.min(last), last),
            None => 0,
        };

        if let Some(current) = self.controller.state().focused_index {
            if current != next {
                self.controller.on_item_focus_changed(current, false);
            }
        }
        self.controller.on_item_focus_changed(next, true);
        self.list_state.select(Some(next));
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use chrono::Utc;
    use tokio_test::block_on;

    use crate::client::testing::ScriptedClient;
    use crate::domain::{Article, FeedResponse, Source};

    fn app_with_headlines(count: usize) -> HeadlinesApp {
        let articles = (0..count)
            .map(|i| Article {
                source: Source {
                    id: None,
                    name: "Test Desk".into(),
                },
                author: None,
                title: format!("headline {}", i),
                description: None,
                url: format!("https://example.com/{}", i),
                url_to_image: None,
                published_at: Utc::now(),
                content: None,
            })
            .collect();
        let response = FeedResponse {
            status: "ok".into(),
            total_results: count as u32,
            articles,
            code: None,
            message: None,
        };

        let client = Arc::new(ScriptedClient::new(vec![Ok(response)]));
        let mut app = HeadlinesApp::new(HeadlineFeedController::new(client, "us", "key"));
        block_on(app.controller.request_fetch());
        app.sync_selection();
        app
    }

    #[test]
    fn test_initial_selection_follows_controller_focus() {
        let app = app_with_headlines(3);
        assert_eq!(app.focused_index(), Some(0));
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_move_down_and_up() {
        let mut app = app_with_headlines(3);

        app.move_down();
        assert_eq!(app.focused_index(), Some(1));

        app.move_down();
        app.move_down();
        // Clamped at the last card
        assert_eq!(app.focused_index(), Some(2));

        app.move_up();
        assert_eq!(app.focused_index(), Some(1));
    }

    #[test]
    fn test_move_up_clamps_at_top() {
        let mut app = app_with_headlines(3);
        app.move_up();
        assert_eq!(app.focused_index(), Some(0));
    }

    #[test]
    fn test_paging() {
        let mut app = app_with_headlines(12);

        app.next_page();
        assert_eq!(app.focused_index(), Some(PAGE_SIZE));

        app.next_page();
        app.next_page();
        assert_eq!(app.focused_index(), Some(11));

        app.prev_page();
        assert_eq!(app.focused_index(), Some(11 - PAGE_SIZE));
    }

    #[test]
    fn test_navigation_noop_on_empty_list() {
        let client = Arc::new(ScriptedClient::new(Vec::new()));
        let mut app = HeadlinesApp::new(HeadlineFeedController::new(client, "us", "key"));

        app.move_down();
        app.next_page();
        assert_eq!(app.focused_index(), None);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_selection_tracks_focus() {
        let mut app = app_with_headlines(4);
        app.move_down();
        app.move_down();
        assert_eq!(app.list_state.selected(), Some(2));
    }
}
