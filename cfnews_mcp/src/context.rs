//! Shared, lazily-initialized handle to the CFNEWS API client.

use cfnews_api::{Client, Error};
use tokio::sync::OnceCell;

/// Process-wide API client handle.
///
/// The client is built from the environment on the first tool call that
/// needs it and reused afterwards. A missing API key fails that call only;
/// the server keeps running.
pub struct ApiContext {
    client: OnceCell<Client>,
}

impl ApiContext {
    pub fn new() -> Self {
        Self {
            client: OnceCell::new(),
        }
    }

    /// Wraps an already-constructed client. Used in tests to point the
    /// context at a mock server.
    pub fn with_client(client: Client) -> Self {
        Self {
            client: OnceCell::new_with(Some(client)),
        }
    }

    /// Returns the shared client, constructing it on first use.
    pub async fn client(&self) -> Result<&Client, Error> {
        self.client
            .get_or_try_init(|| async { Client::from_env() })
            .await
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new()
    }
}
