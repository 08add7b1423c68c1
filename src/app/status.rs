use crate::config::Config;
use crate::journal::JournalStore;
use crate::ui::style as ui;

pub fn render_status(config: &Config, store: &JournalStore) -> String {
    let summary = store.summary();

    let sync = if config.sync.enabled {
        config.sync.base_url.clone()
    } else {
        "disabled".into()
    };

    [
        format!("◆ {}", ui::header("Grievance Journal")),
        String::new(),
        format!(
            "  {}   {}",
            ui::cyan("love score"),
            ui::score(format!("{}/100", summary.love_score))
        ),
        String::new(),
        format!("  {}   {}", ui::cyan("grievances"), summary.total_grievances),
        format!("  {}      {}", ui::cyan("pending"), summary.pending_grievances),
        format!("  {}     {}", ui::cyan("forgiven"), summary.forgiven_grievances),
        format!(
            "  {}     {} ({} unread)",
            ui::cyan("messages"),
            summary.total_messages,
            summary.unread_messages
        ),
        String::new(),
        format!("  {}      {}", ui::cyan("version"), env!("CARGO_PKG_VERSION")),
        format!("  {}        {}", ui::cyan("cache"), store.cache_path().display()),
        format!("  {}       {}", ui::cyan("config"), config.config_path.display()),
        format!("  {}         {sync}", ui::cyan("sync")),
    ]
    .join("\n")
}
