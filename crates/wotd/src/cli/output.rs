//! Output mode flags shared by all commands.
//!
//! Global flags are exported as environment variables by `main` so every
//! command can check them without threading arguments through.

/// Whether `--json` was given.
pub fn is_json() -> bool {
    std::env::var_os("WOTD_JSON").is_some()
}

/// Whether `--quiet` was given.
pub fn is_quiet() -> bool {
    std::env::var_os("WOTD_QUIET").is_some()
}

/// Whether `--verbose` was given.
pub fn is_verbose() -> bool {
    std::env::var_os("WOTD_VERBOSE").is_some()
}

/// Print a JSON value on stdout, pretty unless quiet.
pub fn print_json(value: &serde_json::Value) {
    let text = if is_quiet() {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    if let Ok(text) = text {
        println!("{text}");
    }
}

/// Initialize tracing on stderr so stdout stays clean for payloads.
pub fn init_tracing() {
    let default_directive = if is_verbose() { "wotd=debug" } else { "wotd=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if is_json() {
        builder.json().init();
    } else {
        builder.init();
    }
}
