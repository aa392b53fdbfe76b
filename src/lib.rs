//! # Job Portal Client
//!
//! > **The client core of a job-posting marketplace.**
//!
//! Job seekers (Applicants) browse listings and apply; employers (Recruiters)
//! create, edit and delete postings. Both share a login, signup and profile
//! flow. The backend is a remote REST API; everything in this crate runs on
//! the client side.
//!
//! ## 🏗️ Design
//!
//! ### Actors own the shared state
//! Two pieces of state are shared across screens: the session store (who is
//! signed in, dark mode) and the application book (applications made during
//! this session). Each is owned by a single Tokio task and mutated only
//! through messages, so views never lock anything.
//!
//! - The application book is a generic [`ResourceActor`](framework::ResourceActor)
//!   over [`Application`](model::Application) records.
//! - The session store is a dedicated [`SessionActor`](session::SessionActor)
//!   that also publishes every change on a `watch` channel for the navbar.
//!
//! ### Views are controllers
//! Each screen is a struct in [`views`]. Form inputs are public fields, user
//! actions are methods, and the result of an action is a plain value (a
//! [`Navigation`](views::Navigation), a message, a row list). Errors end up as
//! inline strings on the view that caused them.
//!
//! ### The API is a trait
//! [`PortalApi`](api::PortalApi) has a reqwest implementation for real use
//! and an expectation-queue mock for tests.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: generic resource actor, client and mock.
//! - [`model`]: `User`, `Job`, `Application`.
//! - [`application_actor`] + [`clients`]: the application book and its typed client.
//! - [`session`]: token storage, session store and the [`Session`](session::Session) facade.
//! - [`api`]: remote API trait, HTTP client, mock.
//! - [`routes`]: path parsing and access guards.
//! - [`views`]: one controller per screen.
//! - [`lifecycle`]: [`PortalSystem`](lifecycle::PortalSystem) wiring and [`setup_tracing`](lifecycle::setup_tracing).
//! - [`config`]: [`PortalConfig`](config::PortalConfig) from the environment.
//!
//! ## 🚀 Running
//!
//! ```bash
//! JOBPORTAL_API_URL=http://localhost:3000 RUST_LOG=info cargo run
//! ```

pub mod api;
pub mod application_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod routes;
pub mod session;
pub mod views;

pub use config::PortalConfig;
pub use error::PortalError;
pub use lifecycle::PortalSystem;
