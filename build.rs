use std::env;
use std::fs;
use std::path::Path;

/// Variables read with `option_env!` in `src/config.rs`.
const CONFIG_KEYS: [&str; 4] = [
    "BACKEND_URL",
    "NOTIFICATION_TIMEOUT_MS",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
];

fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    // Real environment variables win over .env entries.
    for (key, value) in contents.lines().filter_map(parse_env_line) {
        if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
