//! # Session
//!
//! A signed-in session is a bearer token plus a [`User`]. The token is kept
//! in a [`TokenStore`] so it survives restarts; the user lives only in the
//! in-memory [`SessionActor`] store.
//!
//! [`Session`] ties the two together and keeps them in step: login writes
//! both, logout clears both, and [`Session::restore`] drops a token that has
//! no user to go with it.

pub mod error;
pub mod store;
pub mod token;

pub use error::*;
pub use store::*;
pub use token::*;

use crate::model::User;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

/// Session store handle plus token storage.
#[derive(Clone)]
pub struct Session {
    store: SessionClient,
    tokens: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: SessionClient, tokens: Arc<dyn TokenStore>) -> Self {
        Self { store, tokens }
    }

    pub fn store(&self) -> &SessionClient {
        &self.store
    }

    pub async fn state(&self) -> Result<SessionState, SessionError> {
        self.store.get_state().await
    }

    pub async fn current_user(&self) -> Result<Option<User>, SessionError> {
        Ok(self.store.get_state().await?.current_user)
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        self.tokens.load()
    }

    /// Persists the token, then publishes the user.
    #[instrument(skip(self, token, user), fields(user_id = %user.id))]
    pub async fn login(&self, token: &str, user: User) -> Result<SessionState, SessionError> {
        self.tokens.save(token)?;
        let state = self.store.set_current_user(user).await?;
        info!("Signed in");
        Ok(state)
    }

    /// Removes the token, then clears the user through the raw patch. If the
    /// token cannot be removed the user stays signed in.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<SessionState, SessionError> {
        self.tokens.remove()?;
        let state = self.store.set_state(SessionPatch::logged_out()).await?;
        info!("Signed out");
        Ok(state)
    }

    pub async fn set_current_user(&self, user: User) -> Result<SessionState, SessionError> {
        self.store.set_current_user(user).await
    }

    pub async fn toggle_dark_mode(&self) -> Result<SessionState, SessionError> {
        self.store.toggle_dark_mode().await
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.store.subscribe()
    }

    /// Startup reconciliation. The user never survives a restart, so a token
    /// found without one is an orphan and is removed.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> Result<SessionState, SessionError> {
        let state = self.store.get_state().await?;
        if state.current_user.is_none() && self.tokens.load()?.is_some() {
            warn!("Discarding stored token with no signed-in user");
            self.tokens.remove()?;
        }
        Ok(state)
    }
}
