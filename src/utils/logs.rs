use std::str::FromStr;
use tracing::Level;

// Logs go to stderr so they never interleave with the console menu on stdout.
pub fn setup_tracing(level: &str, json: bool) {
    let level = parse_level(level);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// Unknown level names fall back to WARN.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::WARN)
}
