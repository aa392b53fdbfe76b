//! # Session Store
//!
//! Process-wide UI state: who is signed in and whether dark mode is on.
//!
//! The state is owned by a single [`SessionActor`] task. Every mutation is a
//! command that returns the resulting [`SessionState`], and every change is
//! published on a `watch` channel so subscribers (the navbar) see it
//! immediately. Nothing here is persisted.

use super::SessionError;
use crate::model::User;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

/// Snapshot of the session store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub is_dark_mode: bool,
}

/// Partial replacement applied by [`SessionClient::set_state`].
///
/// `None` leaves a field untouched; `Some(None)` for `current_user` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub current_user: Option<Option<User>>,
    pub is_dark_mode: Option<bool>,
}

impl SessionPatch {
    /// The patch applied on logout.
    pub fn logged_out() -> Self {
        Self {
            current_user: Some(None),
            is_dark_mode: None,
        }
    }
}

type Reply = oneshot::Sender<SessionState>;

#[derive(Debug)]
enum SessionCommand {
    GetState { respond_to: Reply },
    SetCurrentUser { user: User, respond_to: Reply },
    ToggleDarkMode { respond_to: Reply },
    SetState { patch: SessionPatch, respond_to: Reply },
}

/// The task that owns [`SessionState`].
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionCommand>,
    state: SessionState,
    updates: watch::Sender<SessionState>,
}

impl SessionActor {
    pub fn new(buffer_size: usize) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (updates, watcher) = watch::channel(SessionState::default());
        let actor = Self {
            receiver,
            state: SessionState::default(),
            updates,
        };
        (actor, SessionClient { sender, watcher })
    }

    /// Processes commands until every [`SessionClient`] has been dropped.
    pub async fn run(mut self) {
        info!("Session store started");

        while let Some(command) = self.receiver.recv().await {
            let respond_to = match command {
                SessionCommand::GetState { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                    continue;
                }
                SessionCommand::SetCurrentUser { user, respond_to } => {
                    debug!(user_id = %user.id, role = %user.role, "SetCurrentUser");
                    self.state.current_user = Some(user);
                    respond_to
                }
                SessionCommand::ToggleDarkMode { respond_to } => {
                    self.state.is_dark_mode = !self.state.is_dark_mode;
                    debug!(is_dark_mode = self.state.is_dark_mode, "ToggleDarkMode");
                    respond_to
                }
                SessionCommand::SetState { patch, respond_to } => {
                    debug!(?patch, "SetState");
                    if let Some(user) = patch.current_user {
                        self.state.current_user = user;
                    }
                    if let Some(dark) = patch.is_dark_mode {
                        self.state.is_dark_mode = dark;
                    }
                    respond_to
                }
            };
            self.updates.send_replace(self.state.clone());
            let _ = respond_to.send(self.state.clone());
        }

        info!(signed_in = self.state.current_user.is_some(), "Session store shutdown");
    }
}

/// Cloneable handle to the [`SessionActor`].
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionCommand>,
    watcher: watch::Receiver<SessionState>,
}

impl SessionClient {
    async fn request(
        &self,
        build: impl FnOnce(Reply) -> SessionCommand,
    ) -> Result<SessionState, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SessionError::StoreClosed)?;
        response.await.map_err(|_| SessionError::StoreDropped)
    }

    pub async fn get_state(&self) -> Result<SessionState, SessionError> {
        self.request(|respond_to| SessionCommand::GetState { respond_to })
            .await
    }

    /// Replaces the signed-in user.
    pub async fn set_current_user(&self, user: User) -> Result<SessionState, SessionError> {
        self.request(|respond_to| SessionCommand::SetCurrentUser { user, respond_to })
            .await
    }

    pub async fn toggle_dark_mode(&self) -> Result<SessionState, SessionError> {
        self.request(|respond_to| SessionCommand::ToggleDarkMode { respond_to })
            .await
    }

    /// Applies a raw patch. Used by logout to clear the user.
    pub async fn set_state(&self, patch: SessionPatch) -> Result<SessionState, SessionError> {
        self.request(|respond_to| SessionCommand::SetState { patch, respond_to })
            .await
    }

    /// A receiver that yields the state after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        let mut watcher = self.watcher.clone();
        watcher.mark_unchanged();
        watcher
    }
}
