//! Static catalog of remedial actions keyed by mood level.

use super::model::MoodLevel;
use serde::Serialize;

/// Icon identifiers a front end can map to its own symbol set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ActionIcon {
    HeartHandshake,
    Coffee,
    Pen,
    HelpCircle,
    Clock,
    Utensils,
    Film,
    Footprints,
    CalendarHeart,
    Ear,
    Flower,
    BadgeCheck,
}

impl ActionIcon {
    /// Terminal glyph used by the command-line front end.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::HeartHandshake => "🤝",
            Self::Coffee => "☕",
            Self::Pen => "✏",
            Self::HelpCircle => "❔",
            Self::Clock => "⏱",
            Self::Utensils => "🍴",
            Self::Film => "🎬",
            Self::Footprints => "👣",
            Self::CalendarHeart => "📅",
            Self::Ear => "👂",
            Self::Flower => "💐",
            Self::BadgeCheck => "✔",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    pub id: &'static str,
    pub text: &'static str,
    pub for_mood_level: &'static [u8],
    pub icon: ActionIcon,
}

impl SuggestedAction {
    pub fn applies_to(&self, mood: MoodLevel) -> bool {
        self.for_mood_level.contains(&mood.value())
    }
}

const fn entry(
    id: &'static str,
    text: &'static str,
    for_mood_level: &'static [u8],
    icon: ActionIcon,
) -> SuggestedAction {
    SuggestedAction {
        id,
        text,
        for_mood_level,
        icon,
    }
}

static CATALOG: [SuggestedAction; 12] = [
    entry("1", "Get you an ice cream?", &[2, 3, 4, 5], ActionIcon::HeartHandshake),
    entry("2", "Bring your favorite snack?", &[1, 2, 3], ActionIcon::Coffee),
    entry("3", "Say sorry with a cute note", &[1, 2, 3], ActionIcon::Pen),
    entry("4", "Ask what would help right now", &[1, 2, 3, 4], ActionIcon::HelpCircle),
    entry("5", "Want some space? No?", &[1, 2], ActionIcon::Clock),
    entry("6", "Cook your favorite dinner", &[1, 2, 3, 4], ActionIcon::Utensils),
    entry("7", "Watch a movie together", &[3, 4, 5], ActionIcon::Film),
    entry("8", "Go for a long walk", &[3, 4, 5], ActionIcon::Footprints),
    entry("9", "Schedule a date night", &[2, 3, 4, 5], ActionIcon::CalendarHeart),
    entry("10", "Listen without interrupting", &[1, 2, 3], ActionIcon::Ear),
    entry("11", "Get you flowers?", &[1, 2, 3, 4], ActionIcon::Flower),
    entry("12", "Show some love", &[3, 4, 5], ActionIcon::BadgeCheck),
];

/// The full catalog in definition order.
pub fn suggested_actions() -> &'static [SuggestedAction] {
    &CATALOG
}

/// Catalog entries applicable to `mood`, in catalog order.
pub fn suggested_actions_for_mood(mood: MoodLevel) -> Vec<&'static SuggestedAction> {
    CATALOG.iter().filter(|action| action.applies_to(mood)).collect()
}

pub fn find_suggested_action(id: &str) -> Option<&'static SuggestedAction> {
    CATALOG.iter().find(|action| action.id == id)
}
