// ============================================================================
// USE SESSION HOOK - login, logout, and session restore on mount
// ============================================================================

use yew::prelude::*;

use crate::hooks::UseNotificationHandle;
use crate::models::{Credentials, User};
use crate::services::{ApiClient, SessionStore};

#[derive(Clone)]
pub struct UseSessionHandle {
    pub user: UseStateHandle<Option<User>>,
    pub login: Callback<Credentials>,
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    /// API client carrying the current user's token, if any.
    pub fn client(&self) -> ApiClient {
        let client = ApiClient::from_config();
        match &*self.user {
            Some(user) => client.with_token(user.token.clone()),
            None => client,
        }
    }
}

#[hook]
pub fn use_session(notifier: UseNotificationHandle) -> UseSessionHandle {
    let user = use_state(|| SessionStore::default().restore());

    let login = {
        let user = user.clone();
        Callback::from(move |credentials: Credentials| {
            let user = user.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::from_config().login(&credentials).await {
                    Ok(logged_in) => {
                        SessionStore::default().save(&logged_in);
                        user.set(Some(logged_in));
                    }
                    Err(e) => {
                        notifier.error(e.user_message("log in"));
                    }
                }
            });
        })
    };

    let logout = {
        let user = user.clone();
        Callback::from(move |_| {
            SessionStore::default().clear();
            log::info!("👋 Logout");
            user.set(None);
        })
    };

    UseSessionHandle { user, login, logout }
}
