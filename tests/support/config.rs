use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Config file in its own temporary directory.
pub struct TempConfig {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn write_temp_config(contents: &str) -> TempConfig {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    TempConfig { _dir: dir, path }
}

pub const VALID_CONFIG: &str = r#"
[logging]
level = "warn"
format = "pretty"

[decision]
seed = 7

[decision.direct]
accept = 0.5
reject = 0.2
postpone = 0.1
pool = 0.2

[decision.pool]
accept = 0.5
reject = 0.5

[oracle]
model = "gpt-3.5-turbo-instruct"
base_url = "https://api.openai.com"
max_tokens = 60
timeout_secs = 30
"#;
