pub mod http_client;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::FeedResponse;

/// Capability to fetch the current top headlines for a country.
///
/// An `Err` means the call did not complete normally (connection
/// failure, timeout, non-2xx status, malformed body). A response whose
/// `status` is not `"ok"` is a completed call carrying a domain-level
/// failure and is returned as `Ok`.
#[async_trait]
pub trait NewsClient {
    async fn top_headlines(&self, country: &str, api_key: &str) -> Result<FeedResponse>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::app::{FrontpageError, Result};
    use crate::client::NewsClient;
    use crate::domain::FeedResponse;

    /// Test client that replays a scripted sequence of outcomes and
    /// counts how many calls it served.
    pub struct ScriptedClient {
        responses: Mutex<VecDeque<Result<FeedResponse>>>,
        calls: AtomicUsize,
    }

    impl ScriptedClient {
        pub fn new(responses: Vec<Result<FeedResponse>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl NewsClient for ScriptedClient {
        async fn top_headlines(&self, _country: &str, _api_key: &str) -> Result<FeedResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(FrontpageError::Other("script exhausted".into())))
        }
    }
}
