//! Wiring performed before the TUI starts.

use std::sync::Arc;

use super::config::CrmConfig;
use crate::adapters::{FileCredentialsProvider, ReqwestHttpClient};
use crate::api::ApiClient;
use crate::error::CrmResult;
use crate::store::coordinator::{self, Services};
use crate::store::Store;
use crate::traits::{CredentialsProvider, HttpClient};

/// Everything the app needs to run.
pub struct StartupResult {
    pub config: CrmConfig,
    pub services: Services,
    pub credentials: Arc<dyn CredentialsProvider>,
    pub store: Store,
}

/// Build services over the given transport and credential store, and
/// restore a saved session into the store.
pub async fn prepare(
    config: CrmConfig,
    http: Arc<dyn HttpClient>,
    credentials: Arc<dyn CredentialsProvider>,
) -> CrmResult<StartupResult> {
    let client = Arc::new(ApiClient::new(config.api_url.clone(), http));
    let services = Services::new(client);
    let mut store = Store::new();

    let dispatch = store.dispatcher();
    match coordinator::restore_session(&services.client, credentials.as_ref(), &dispatch).await {
        Ok(Some(_)) => tracing::info!("restored saved session"),
        Ok(None) => tracing::debug!("no saved session"),
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable session"),
    }
    store.drain();

    Ok(StartupResult {
        config,
        services,
        credentials,
        store,
    })
}

/// [`prepare`] with the production reqwest transport and file credentials.
pub async fn run_preflight(config: CrmConfig) -> CrmResult<StartupResult> {
    let credentials = Arc::new(FileCredentialsProvider::new(config.data_dir()));
    prepare(config, Arc::new(ReqwestHttpClient::new()), credentials).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryCredentials, MockHttpClient};
    use crate::auth::Credentials;

    #[tokio::test]
    async fn test_prepare_restores_session() {
        let creds = InMemoryCredentials::with_credentials(Credentials::signed_in("saved", None));
        let result = prepare(
            CrmConfig::with_data_dir("/tmp/unused"),
            Arc::new(MockHttpClient::new()),
            Arc::new(creds),
        )
        .await
        .unwrap();
        assert!(result.store.state().session.is_authenticated());
        assert!(result.services.client.has_token());
    }

    #[tokio::test]
    async fn test_prepare_without_session() {
        let creds = InMemoryCredentials::new();
        creds.set_load_should_fail(true);
        let result = prepare(
            CrmConfig::with_data_dir("/tmp/unused"),
            Arc::new(MockHttpClient::new()),
            Arc::new(creds),
        )
        .await
        .unwrap();
        assert!(!result.store.state().session.is_authenticated());
    }
}
