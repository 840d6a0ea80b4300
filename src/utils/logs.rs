use crate::core::domain::{Configuration, LogFormat};

// Diagnostics always go to stderr; stdout carries the console transcript only.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
