//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden; actors tag their lines with
//! `entity_type` instead.
//!
//! ```bash
//! RUST_LOG=info job-portal            # lifecycle and successful mutations
//! RUST_LOG=debug job-portal           # plus request payloads and store commands
//! RUST_LOG=job_portal::api=debug job-portal
//! ```
//!
//! With `RUST_LOG=info`, applying to a job and reviewing it reads:
//!
//! ```text
//! INFO Actor started entity_type="Application"
//! INFO Session store started
//! INFO apply: Created entity_type="Application" id=app_1 size=1
//! INFO apply: Application submitted application_id=app_1 job_id="j1" user_id=u1
//! INFO review: Action ok entity_type="Application" id=app_1
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
