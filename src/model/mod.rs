//! Data types shared by the API client, the session store and the views.

pub mod application;
pub mod job;
pub mod user;

pub use application::*;
pub use job::*;
pub use user::*;
