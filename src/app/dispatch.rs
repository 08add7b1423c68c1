use crate::cli::commands::{Cli, Commands, MessageCommands};
use anyhow::{Context, Result, bail};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::Config;
use crate::app::render::{
    render_grievance_detail, render_grievance_list, render_messages, render_suggestions,
};
use crate::app::status::render_status;
use crate::journal::catalog::{find_suggested_action, suggested_actions_for_mood};
use crate::journal::{GrievanceDraft, JournalCache, JournalStore, MoodLevel};
use crate::sync::{Replication, ReplicationStats, start_replication};
use crate::ui::style as ui;

/// Open the journal, run one command, then flush and give pending
/// replication a bounded window to finish.
pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let Replication { queue, worker } = start_replication(&config.sync);
    let cache = JournalCache::in_dir(&config.cache_dir(), &config.storage.slot);
    let mut store = JournalStore::open(cache, queue).context("Failed to open journal")?;

    let outcome = run_command(cli.command, &mut store, &config);
    if let Ok(output) = &outcome {
        println!("{output}");
    }

    store.close().context("Failed to flush journal")?;
    drain_replication(worker, Duration::from_secs(config.sync.drain_timeout_secs)).await;

    outcome.map(drop)
}

/// Execute `command` against `store` and return the text to print.
pub fn run_command(command: Commands, store: &mut JournalStore, config: &Config) -> Result<String> {
    match command {
        Commands::Add {
            reason,
            mood,
            should,
        } => {
            let mood = MoodLevel::new(mood)?;
            let draft = GrievanceDraft::new(reason, mood, should)?;
            let id = store.add_grievance(draft)?.id.clone();

            Ok(format!(
                "{} Logged grievance {}\n\n{}\n{}",
                ui::success("✓"),
                ui::dim(&id),
                ui::header(format!("Suggested actions for mood {mood}")),
                render_suggestions(&suggested_actions_for_mood(mood))
            ))
        }

        Commands::List { status } => Ok(render_grievance_list(
            store.grievances_matching(status.into()),
        )),

        Commands::Show { id } => {
            let id = resolve_grievance(store, &id)?;
            let grievance = store
                .grievance(&id)
                .with_context(|| format!("Grievance {id} disappeared"))?;
            let suggestions = suggested_actions_for_mood(grievance.mood_level);
            Ok(format!(
                "{}\n\n  {}\n{}",
                render_grievance_detail(grievance),
                ui::header("Suggested actions"),
                render_suggestions(&suggestions)
            ))
        }

        Commands::Forgive { id, notes } => {
            let id = resolve_grievance(store, &id)?;
            let notes = notes.and_then(|text| {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            });
            store.forgive_grievance(&id, notes)?;
            Ok(format!(
                "{} Forgiven. Love score is now {}",
                ui::success("✓"),
                ui::score(store.love_score())
            ))
        }

        Commands::Act {
            id,
            action,
            suggestion,
        } => {
            let id = resolve_grievance(store, &id)?;
            let action = match (suggestion, action) {
                (Some(catalog_id), _) => find_suggested_action(&catalog_id)
                    .map(|entry| entry.text.to_string())
                    .with_context(|| format!("No suggested action with id '{catalog_id}'"))?,
                (None, Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
                (None, _) => bail!("Action text cannot be empty"),
            };
            store.add_action_taken(&id, action.as_str())?;
            Ok(format!("{} Recorded: {action}", ui::success("✓")))
        }

        Commands::Suggest { mood } => {
            let mood = MoodLevel::new(mood)?;
            Ok(format!(
                "{}\n{}",
                ui::header(format!("Suggested actions for mood {mood}")),
                render_suggestions(&suggested_actions_for_mood(mood))
            ))
        }

        Commands::Message(MessageCommands::Send { text }) => {
            if text.trim().is_empty() {
                bail!("Message cannot be empty");
            }
            let id = store
                .add_secret_message(&text)?
                .map(|message| message.id.clone())
                .context("Message cannot be empty")?;
            Ok(format!("{} Message left {}", ui::success("✓"), ui::dim(id)))
        }

        Commands::Message(MessageCommands::List) => Ok(render_messages(store.secret_messages())),

        Commands::Message(MessageCommands::Read { id }) => {
            let id = store
                .resolve_message_id(&id)
                .map(str::to_owned)
                .with_context(|| format!("No secret message matches '{id}'"))?;
            store.mark_message_as_read(&id)?;
            let message = store
                .secret_message(&id)
                .with_context(|| format!("Secret message {id} disappeared"))?;
            Ok(message.message.clone())
        }

        Commands::Status => Ok(render_status(config, store)),
    }
}

fn resolve_grievance(store: &JournalStore, id: &str) -> Result<String> {
    store
        .resolve_grievance_id(id)
        .map(str::to_owned)
        .with_context(|| format!("No grievance matches '{id}' (ids may be abbreviated if unique)"))
}

/// Wait up to `timeout` for the worker to drain. A hung remote only costs
/// the timeout; local state is already flushed.
async fn drain_replication(worker: Option<JoinHandle<ReplicationStats>>, timeout: Duration) {
    let Some(worker) = worker else {
        return;
    };

    match tokio::time::timeout(timeout, worker).await {
        Ok(Ok(stats)) => {
            tracing::debug!(
                delivered = stats.delivered,
                failed = stats.failed,
                "sync.drained"
            );
        }
        Ok(Err(error)) => tracing::warn!(%error, "sync.worker_aborted"),
        Err(_) => tracing::warn!(
            timeout_secs = timeout.as_secs(),
            "sync.drain_timeout"
        ),
    }
}
