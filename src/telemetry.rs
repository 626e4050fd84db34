//! Logging setup.

/// Installs an env-filtered fmt subscriber unless one is already set.
///
/// The planner only emits `tracing` events; embedding applications are free
/// to install their own subscriber instead.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
