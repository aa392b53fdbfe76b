use crate::api::{HttpPortalApi, PortalApi};
use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::session::{FileTokenStore, Session, SessionActor, TokenStore};
use crate::views::PortalContext;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the running actors of one client session.
///
/// `PortalSystem` is responsible for:
/// - **Lifecycle**: spawning the session store and the application book
/// - **Wiring**: bundling them with the API client into a [`PortalContext`]
/// - **Shutdown**: closing every channel and waiting for the tasks to finish
///
/// # Example
///
/// ```ignore
/// let config = PortalConfig::from_lookup(|name| std::env::var(name).ok())?;
/// let system = PortalSystem::new(config)?;
/// system.context().session.restore().await?;
///
/// let mut login = LoginView::new(&system.context());
/// // ...
///
/// system.shutdown().await?;
/// ```
pub struct PortalSystem {
    context: PortalContext,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PortalSystem {
    /// Builds the HTTP client and file token store from `config` and starts
    /// the actors. Must be called inside a Tokio runtime.
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        let api = HttpPortalApi::new(config.api_url.as_str(), config.request_timeout)?;
        info!(api_url = %api.base_url(), token_file = %config.token_file.display(), "Starting portal client");
        Ok(Self::with_parts(
            Arc::new(api),
            Arc::new(FileTokenStore::new(config.token_file)),
        ))
    }

    /// Starts the actors around a caller-supplied API and token store.
    pub fn with_parts(api: Arc<dyn PortalApi>, tokens: Arc<dyn TokenStore>) -> Self {
        let (session_actor, session_client) = SessionActor::new(32);
        let (application_actor, applications) = crate::application_actor::new();

        let session_handle = tokio::spawn(session_actor.run());
        let application_handle = tokio::spawn(application_actor.run(()));

        Self {
            context: PortalContext {
                api,
                session: Session::new(session_client, tokens),
                applications,
            },
            handles: vec![session_handle, application_handle],
        }
    }

    /// A handle for building views.
    pub fn context(&self) -> PortalContext {
        self.context.clone()
    }

    /// Drops the system's handles and waits for both actors to exit.
    ///
    /// Actors stop once every clone of their client is gone, so views built
    /// from [`context`](Self::context) must be dropped first.
    pub async fn shutdown(self) -> Result<(), PortalError> {
        info!("Shutting down portal client...");
        drop(self.context);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(PortalError::ActorTask(e.to_string()));
            }
        }

        info!("Portal client shutdown complete.");
        Ok(())
    }
}
