use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("GRIEVANCE_JOURNAL_API_URL")
            && !url.is_empty()
        {
            self.sync.base_url = url;
        }

        if let Ok(flag) = std::env::var("GRIEVANCE_JOURNAL_SYNC")
            && let Some(enabled) = parse_flag(&flag)
        {
            self.sync.enabled = enabled;
        }

        if let Ok(dir) = std::env::var("GRIEVANCE_JOURNAL_DATA_DIR")
            && !dir.is_empty()
        {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(level) = std::env::var("GRIEVANCE_JOURNAL_LOG")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
