use serde_json::Value;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use grievance_journal::config::SyncConfig;
use grievance_journal::sync::{ReplicationStats, start_replication};

use super::journal_harness::{JournalHarness, draft};

fn sync_config(server: &MockServer) -> SyncConfig {
    SyncConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..SyncConfig::default()
    }
}

#[tokio::test]
async fn mutations_replicate_in_commit_order() {
    let server = MockServer::start().await;
    Mock::given(path_regex(r"^/api/.*"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let harness = JournalHarness::new();
    let replication = start_replication(&sync_config(&server));
    let mut store = harness.open(replication.queue);

    let id = store.add_grievance(draft("ate my leftovers", 2)).unwrap().id.clone();
    store.add_action_taken(&id, "Make breakfast in bed").unwrap();
    store.forgive_grievance(&id, Some("pancakes helped".into())).unwrap();
    let msg = store
        .add_secret_message("meet me at the park")
        .unwrap()
        .unwrap()
        .id
        .clone();
    store.mark_message_as_read(&msg).unwrap();
    store.close().unwrap();

    let stats = replication.worker.unwrap().await.unwrap();
    assert_eq!(
        stats,
        ReplicationStats {
            delivered: 5,
            failed: 0
        }
    );

    let received = server.received_requests().await.unwrap();
    let calls: Vec<_> = received
        .iter()
        .map(|r| format!("{} {}", r.method, r.url.path()))
        .collect();
    assert_eq!(
        calls,
        [
            "POST /api/grievances".to_string(),
            format!("POST /api/grievances/{id}/actions"),
            format!("PATCH /api/grievances/{id}"),
            "POST /api/messages".to_string(),
            format!("PATCH /api/messages/{msg}"),
        ]
    );

    let patch: Value = serde_json::from_slice(&received[2].body).unwrap();
    assert_eq!(patch["isForgiven"], true);
    assert_eq!(patch["resolutionNotes"], "pancakes helped");
}

#[tokio::test]
async fn remote_failures_leave_local_state_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/grievances"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let harness = JournalHarness::new();
    let replication = start_replication(&sync_config(&server));
    let mut store = harness.open(replication.queue);
    store.add_grievance(draft("hogged the remote", 3)).unwrap();
    store.add_grievance(draft("snored all night", 2)).unwrap();
    let before = store.state().clone();
    store.close().unwrap();

    let stats = replication.worker.unwrap().await.unwrap();
    assert_eq!(stats.failed, 2);
    assert_eq!(stats.delivered, 0);
    server.verify().await;

    let reopened = harness.open_offline();
    assert_eq!(reopened.state(), &before);
    assert_eq!(reopened.grievances().len(), 2);
}

#[tokio::test]
async fn disabled_sync_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(path_regex(".*"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = SyncConfig {
        enabled: false,
        ..sync_config(&server)
    };
    let replication = start_replication(&config);
    assert!(replication.worker.is_none());
    assert!(!replication.queue.is_enabled());

    let harness = JournalHarness::new();
    let mut store = harness.open(replication.queue);
    store.add_grievance(draft("offline only", 4)).unwrap();
    store.close().unwrap();

    server.verify().await;
}

#[tokio::test]
async fn retries_recover_a_transient_outage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let config = SyncConfig {
        max_attempts: 3,
        retry_backoff_ms: 5,
        ..sync_config(&server)
    };
    let replication = start_replication(&config);
    let harness = JournalHarness::new();
    let mut store = harness.open(replication.queue);
    store.add_secret_message("thinking of you").unwrap();
    store.close().unwrap();

    let stats = replication.worker.unwrap().await.unwrap();
    assert_eq!(stats.delivered, 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
