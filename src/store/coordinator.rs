//! Async coordinators: REQUEST, one HTTP call, then SUCCESS or FAILURE.
//!
//! Each coordinator also hands the outcome back so a caller (a form, say)
//! can react to it. There is no retry, timeout or cancellation.

use std::sync::Arc;

use super::action::{Action, DashboardAction, EntityAction, SessionAction};
use super::state::Stored;
use super::Dispatcher;
use crate::api::{ApiClient, AuthApi, DashboardApi, EntityService, UsersApi};
use crate::auth::Credentials;
use crate::error::{CrmError, CrmResult, ErrorContext, ResultExt};
use crate::models::{DashboardData, EntityId, User};
use crate::traits::CredentialsProvider;

fn request_context<E: Stored>(operation: &str, id: Option<&EntityId>) -> ErrorContext {
    let context = ErrorContext::new(operation).with_resource(E::KIND.resource());
    match id {
        Some(id) => context.with_entity_id(id),
        None => context,
    }
}

/// Log a failed call and flatten it to the text stored in the slice.
fn failure_message(err: &CrmError) -> String {
    let message = err.to_string();
    let context = err.context().map(ErrorContext::to_log_string).unwrap_or_default();
    tracing::warn!(
        code = err.error_code(),
        category = %err.category(),
        retryable = err.is_retryable(),
        %context,
        %message,
        "request failed"
    );
    message
}

/// Fetch the whole collection.
pub async fn fetch_list<E: Stored>(
    service: &EntityService<E>,
    dispatch: &Dispatcher,
) -> CrmResult<Vec<E>> {
    let ticket = dispatch.next_ticket();
    dispatch.dispatch(E::wrap(EntityAction::ListRequested { ticket }));
    match service.list().await.with_context(|| request_context::<E>("list", None)) {
        Ok(items) => {
            dispatch.dispatch(E::wrap(EntityAction::ListSucceeded {
                ticket,
                items: items.clone(),
            }));
            Ok(items)
        }
        Err(err) => {
            let message = failure_message(&err);
            dispatch.dispatch(E::wrap(EntityAction::ListFailed { ticket, message }));
            Err(err)
        }
    }
}

/// Server-side search; results replace the collection.
pub async fn search<E: Stored>(
    service: &EntityService<E>,
    dispatch: &Dispatcher,
    term: &str,
) -> CrmResult<Vec<E>> {
    let ticket = dispatch.next_ticket();
    dispatch.dispatch(E::wrap(EntityAction::SearchRequested {
        ticket,
        term: term.to_string(),
    }));
    match service.search(term).await.with_context(|| request_context::<E>("search", None)) {
        Ok(items) => {
            dispatch.dispatch(E::wrap(EntityAction::SearchSucceeded {
                ticket,
                items: items.clone(),
            }));
            Ok(items)
        }
        Err(err) => {
            let message = failure_message(&err);
            dispatch.dispatch(E::wrap(EntityAction::SearchFailed { ticket, message }));
            Err(err)
        }
    }
}

pub async fn fetch_detail<E: Stored>(
    service: &EntityService<E>,
    dispatch: &Dispatcher,
    id: &EntityId,
) -> CrmResult<E> {
    dispatch.dispatch(E::wrap(EntityAction::DetailRequested { id: id.clone() }));
    match service.get(id).await.with_context(|| request_context::<E>("get", Some(id))) {
        Ok(entity) => {
            dispatch.dispatch(E::wrap(EntityAction::DetailSucceeded(entity.clone())));
            Ok(entity)
        }
        Err(err) => {
            let message = failure_message(&err);
            dispatch.dispatch(E::wrap(EntityAction::DetailFailed(message)));
            Err(err)
        }
    }
}

pub async fn create<E: Stored>(
    service: &EntityService<E>,
    dispatch: &Dispatcher,
    draft: &E::Draft,
) -> CrmResult<E> {
    dispatch.dispatch(E::wrap(EntityAction::CreateRequested));
    match service.create(draft).await.with_context(|| request_context::<E>("create", None)) {
        Ok(entity) => {
            tracing::info!(kind = E::KIND.resource(), id = %entity.id(), "created");
            dispatch.dispatch(E::wrap(EntityAction::CreateSucceeded(entity.clone())));
            Ok(entity)
        }
        Err(err) => {
            let message = failure_message(&err);
            dispatch.dispatch(E::wrap(EntityAction::CreateFailed(message)));
            Err(err)
        }
    }
}

pub async fn update<E: Stored>(
    service: &EntityService<E>,
    dispatch: &Dispatcher,
    id: &EntityId,
    draft: &E::Draft,
) -> CrmResult<E> {
    dispatch.dispatch(E::wrap(EntityAction::UpdateRequested { id: id.clone() }));
    match service
        .update(id, draft)
        .await
        .with_context(|| request_context::<E>("update", Some(id)))
    {
        Ok(entity) => {
            dispatch.dispatch(E::wrap(EntityAction::UpdateSucceeded(entity.clone())));
            Ok(entity)
        }
        Err(err) => {
            let message = failure_message(&err);
            dispatch.dispatch(E::wrap(EntityAction::UpdateFailed(message)));
            Err(err)
        }
    }
}

pub async fn delete<E: Stored>(
    service: &EntityService<E>,
    dispatch: &Dispatcher,
    id: &EntityId,
) -> CrmResult<()> {
    dispatch.dispatch(E::wrap(EntityAction::DeleteRequested { id: id.clone() }));
    match service.delete(id).await.with_context(|| request_context::<E>("delete", Some(id))) {
        Ok(()) => {
            tracing::info!(kind = E::KIND.resource(), %id, "deleted");
            dispatch.dispatch(E::wrap(EntityAction::DeleteSucceeded { id: id.clone() }));
            Ok(())
        }
        Err(err) => {
            let message = failure_message(&err);
            dispatch.dispatch(E::wrap(EntityAction::DeleteFailed(message)));
            Err(err)
        }
    }
}

/// Lock an active account or unlock a locked one.
///
/// Runs through the update triple so the list row is replaced in place.
pub async fn toggle_user_status(
    users: &UsersApi,
    dispatch: &Dispatcher,
    user: &User,
) -> CrmResult<User> {
    let target = user.status.toggled();
    dispatch.dispatch(User::wrap(EntityAction::UpdateRequested {
        id: user.id.clone(),
    }));
    match users
        .set_status(&user.id, &target)
        .await
        .with_context(|| request_context::<User>("set status", Some(&user.id)))
    {
        Ok(updated) => {
            tracing::info!(id = %updated.id, status = updated.status.code(), "user status changed");
            dispatch.dispatch(User::wrap(EntityAction::UpdateSucceeded(updated.clone())));
            Ok(updated)
        }
        Err(err) => {
            let message = failure_message(&err);
            dispatch.dispatch(User::wrap(EntityAction::UpdateFailed(message)));
            Err(err)
        }
    }
}

pub async fn fetch_dashboard(api: &DashboardApi, dispatch: &Dispatcher) -> CrmResult<DashboardData> {
    dispatch.dispatch(Action::Dashboard(DashboardAction::Requested));
    match api
        .fetch()
        .await
        .context(ErrorContext::new("fetch").with_resource("dashboard"))
    {
        Ok(data) => {
            dispatch.dispatch(Action::Dashboard(DashboardAction::Succeeded(data.clone())));
            Ok(data)
        }
        Err(err) => {
            let message = failure_message(&err);
            dispatch.dispatch(Action::Dashboard(DashboardAction::Failed(message)));
            Err(err)
        }
    }
}

/// Sign in, remember the token for later requests and persist it.
///
/// A failure to persist is logged; the session still works for this run.
pub async fn login(
    auth: &AuthApi,
    client: &ApiClient,
    store: &dyn CredentialsProvider,
    dispatch: &Dispatcher,
    email: &str,
    password: &str,
) -> CrmResult<Credentials> {
    dispatch.dispatch(Action::Session(SessionAction::LoginRequested));
    match auth.login(email, password).await {
        Ok(response) => {
            let credentials = Credentials::signed_in(response.token, response.user);
            client.set_token(credentials.token.clone());
            if let Err(err) = store.save(&credentials).await {
                tracing::warn!(error = %err, "could not persist session");
            }
            tracing::info!(email, "signed in");
            dispatch.dispatch(Action::Session(SessionAction::LoginSucceeded(
                credentials.clone(),
            )));
            Ok(credentials)
        }
        Err(err) => {
            tracing::warn!(email, error = %err, "login failed");
            dispatch.dispatch(Action::Session(SessionAction::LoginFailed(err.to_string())));
            Err(err)
        }
    }
}

/// Load a stored session, if any, and attach its token.
pub async fn restore_session(
    client: &ApiClient,
    store: &dyn CredentialsProvider,
    dispatch: &Dispatcher,
) -> CrmResult<Option<Credentials>> {
    let Some(credentials) = store.load().await?.filter(Credentials::has_token) else {
        return Ok(None);
    };
    client.set_token(credentials.token.clone());
    dispatch.dispatch(Action::Session(SessionAction::Restored(credentials.clone())));
    Ok(Some(credentials))
}

/// Forget the token locally and on disk.
pub async fn logout(
    client: &ApiClient,
    store: &dyn CredentialsProvider,
    dispatch: &Dispatcher,
) -> CrmResult<()> {
    client.set_token(None);
    dispatch.end_session();
    store.clear().await?;
    tracing::info!("signed out");
    Ok(())
}

/// Shared handles every coordinator call needs.
#[derive(Debug, Clone)]
pub struct Services {
    pub client: Arc<ApiClient>,
    pub auth: AuthApi,
    pub dashboard: DashboardApi,
    pub users: UsersApi,
}

impl Services {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            auth: AuthApi::new(client.clone()),
            dashboard: DashboardApi::new(client.clone()),
            users: UsersApi::new(client.clone()),
            client,
        }
    }

    pub fn entity<E: Stored>(&self) -> EntityService<E> {
        EntityService::new(self.client.clone())
    }
}
