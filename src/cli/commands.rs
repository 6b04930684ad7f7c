use html_escape::decode_html_entities;

use crate::app::{AppContext, Result};
use crate::controller::HeadlineFeedController;

/// One-shot fetch: print the headline list the way the TUI would show
/// it. Fetch failures surface as the synthetic error headline, not as
/// a process error.
pub async fn fetch_headlines(ctx: &AppContext) -> Result<()> {
    let mut controller = HeadlineFeedController::new(
        ctx.client.clone(),
        ctx.config.feed.country.clone(),
        ctx.config.feed.api_key.clone(),
    );

    controller.request_fetch().await;

    let state = controller.state();
    if state.is_empty() {
        println!("No headlines");
        return Ok(());
    }

    for (i, headline) in state.headlines.iter().enumerate() {
        let marker = if state.has_image(i) { "▣" } else { " " };
        println!("{:>3}. {} {}", i + 1, marker, decode_html_entities(headline));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use tokio_test::block_on;

    use crate::app::FrontpageError;
    use crate::client::testing::ScriptedClient;
    use crate::config::Config;

    #[test]
    fn test_fetch_never_fails_the_process() {
        let client = Arc::new(ScriptedClient::new(vec![Err(FrontpageError::Other(
            "connection reset".into(),
        ))]));
        let ctx = AppContext::with_client(Config::default(), client.clone());

        assert!(block_on(fetch_headlines(&ctx)).is_ok());
        assert_eq!(client.calls(), 1);
    }
}
