use std::env;
use std::fs;
use std::path::Path;

const ENV_FILE: &str = ".env";

/// Keys read through `option_env!` by the config module
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "NETWORK_TIMEOUT_SECONDS",
    "UPLOAD_IMAGES_FIELD",
    "UPLOAD_THUMBNAIL_FIELD",
];

/// `KEY=VALUE`, optional `export ` prefix and surrounding quotes
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim().trim_matches(|c| c == '"' || c == '\'')))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", ENV_FILE);
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(Path::new(ENV_FILE)) else {
        println!("cargo:warning=gallery-console: no {} file, built-in defaults apply (see .env.example)", ENV_FILE);
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=gallery-console: ignoring unknown {} key {}", ENV_FILE, key);
            continue;
        }
        // Variables already set in the build environment take precedence
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
