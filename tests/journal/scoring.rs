use grievance_journal::journal::catalog::suggested_actions_for_mood;
use grievance_journal::journal::{MoodLevel, calculate_love_score};

use super::journal_harness::{JournalHarness, draft};

#[test]
fn empty_journal_scores_one_hundred() {
    let harness = JournalHarness::new();
    assert_eq!(harness.open_offline().love_score(), 100);
    assert_eq!(calculate_love_score(&[]), 100);
}

#[test]
fn score_follows_forgiveness_and_recency() {
    let harness = JournalHarness::new();
    let mut store = harness.open_offline();

    // flags in creation order; the store lists them newest first
    let pattern = [
        true, false, false, true, false, true, false, true, false, false,
    ];
    let mut ids = Vec::new();
    for (i, _) in pattern.iter().enumerate() {
        ids.push(store.add_grievance(draft(&format!("g{i}"), 2)).unwrap().id.clone());
    }
    for (id, forgive) in ids.iter().zip(pattern) {
        if forgive {
            store.forgive_grievance(id, None).unwrap();
        }
    }

    // 4 of 10 forgiven, 3 pending among g9..g5: 70 + 12 - 15
    assert_eq!(store.love_score(), 67);

    store.forgive_grievance(&ids[9], None).unwrap();
    // 5 of 10 forgiven, 2 pending among the newest five: 85 - 10
    assert_eq!(store.love_score(), 75);
}

#[test]
fn forgiving_everything_restores_the_maximum() {
    let harness = JournalHarness::new();
    let mut store = harness.open_offline();
    let ids: Vec<_> = (0..7)
        .map(|i| store.add_grievance(draft(&format!("g{i}"), 1)).unwrap().id.clone())
        .collect();
    assert_eq!(store.love_score(), 50);

    for id in &ids {
        store.forgive_grievance(id, None).unwrap();
    }
    assert_eq!(store.love_score(), 100);
}

#[test]
fn suggestions_for_neutral_mood_follow_catalog_order() {
    let mood = MoodLevel::new(3).unwrap();
    let actions = suggested_actions_for_mood(mood);
    assert_eq!(actions.len(), 11);
    assert_eq!(actions.first().unwrap().id, "1");
    assert_eq!(actions.last().unwrap().id, "12");
    assert!(actions.iter().all(|a| a.applies_to(mood)));
}
