use crate::journal::catalog::SuggestedAction;
use crate::journal::{Grievance, SecretMessage};
use crate::ui::style as ui;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const SHORT_ID_LEN: usize = 8;

fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn status_badge(grievance: &Grievance) -> String {
    if grievance.is_forgiven {
        ui::success("forgiven")
    } else {
        ui::yellow("pending")
    }
}

pub fn render_grievance_line(grievance: &Grievance) -> String {
    format!(
        "{}  {}  {:<10} {}  {}",
        ui::dim(short_id(&grievance.id)),
        ui::dim(grievance.date_created.format(DATE_FORMAT)),
        grievance.mood_level.label(),
        status_badge(grievance),
        grievance.reason
    )
}

pub fn render_grievance_list<'a>(grievances: impl IntoIterator<Item = &'a Grievance>) -> String {
    let lines: Vec<String> = grievances.into_iter().map(render_grievance_line).collect();
    if lines.is_empty() {
        ui::dim("No grievances here.")
    } else {
        lines.join("\n")
    }
}

pub fn render_grievance_detail(grievance: &Grievance) -> String {
    let mut lines = vec![
        format!("◆ {}", ui::header(&grievance.reason)),
        String::new(),
        format!("  {}      {}", ui::cyan("id"), grievance.id),
        format!(
            "  {}    {}",
            ui::cyan("date"),
            grievance.date_created.format(DATE_FORMAT)
        ),
        format!("  {}    {}", ui::cyan("mood"), grievance.mood_level),
        format!("  {}  {}", ui::cyan("status"), status_badge(grievance)),
    ];

    if let Some(should) = &grievance.what_should_have_done {
        lines.push(format!("  {}  {should}", ui::cyan("should")));
    }
    if let Some(notes) = &grievance.resolution_notes {
        lines.push(format!("  {}   {notes}", ui::cyan("notes")));
    }

    lines.push(String::new());
    if grievance.actions_taken.is_empty() {
        lines.push(ui::dim("  No actions taken yet."));
    } else {
        lines.push(format!("  {}", ui::header("Actions taken")));
        for (index, action) in grievance.actions_taken.iter().enumerate() {
            lines.push(format!("  {}. {action}", index + 1));
        }
    }

    lines.join("\n")
}

pub fn render_suggestions(actions: &[&SuggestedAction]) -> String {
    if actions.is_empty() {
        return ui::dim("No suggested actions for this mood.");
    }

    actions
        .iter()
        .map(|action| {
            format!(
                "  {} {:>2}  {}",
                action.icon.glyph(),
                ui::accent(action.id),
                action.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_messages(messages: &[SecretMessage]) -> String {
    if messages.is_empty() {
        return ui::dim("No secret messages yet.");
    }

    messages
        .iter()
        .map(|message| {
            let marker = if message.is_read {
                ui::dim("read  ")
            } else {
                ui::accent("unread")
            };
            format!(
                "{}  {}  {marker}  {}",
                ui::dim(short_id(&message.id)),
                ui::dim(message.date_created.format(DATE_FORMAT)),
                message.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
