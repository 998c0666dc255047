use serde_json::Value;

/// Fire-and-forget diagnostic logging for auth flows. Only active in debug
/// builds; release builds compile this down to nothing.
pub fn log_auth_event(event: &str, data: Option<Value>) {
    if !cfg!(debug_assertions) {
        return;
    }
    match data {
        Some(payload) => log::debug!(target: "auth_event", "{event} {payload}"),
        None => log::debug!(target: "auth_event", "{event}"),
    }
}
