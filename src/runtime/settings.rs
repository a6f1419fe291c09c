use crate::config::Settings;

/// Load and validate settings. Any problem is reported on stderr and the
/// defaults are used instead.
pub fn load_settings() -> Settings {
    Settings::load()
        .map_err(|e| format!("failed to load config: {e}"))
        .and_then(|s| match s.validate() {
            Ok(()) => Ok(s),
            Err(msg) => Err(format!("invalid config: {msg}")),
        })
        .unwrap_or_else(|msg| {
            eprintln!("allegro: {msg}; using defaults");
            Settings::default()
        })
}
