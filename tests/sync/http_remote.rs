use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use grievance_journal::error::SyncError;
use grievance_journal::journal::{Grievance, MoodLevel, SecretMessage};
use grievance_journal::sync::http_client::build_sync_client_with_timeouts;
use grievance_journal::sync::{
    ActionPayload, GrievancePatch, HttpRemote, MessagePatch, RemoteSync, ReplicationIntent,
};

fn remote_for(server: &MockServer) -> HttpRemote {
    HttpRemote::new(build_sync_client_with_timeouts(5, 2), &server.uri())
}

fn sample_grievance() -> Grievance {
    Grievance {
        id: "g-1".into(),
        reason: "forgot our anniversary".into(),
        mood_level: MoodLevel::new(1).unwrap(),
        what_should_have_done: Some("set a reminder".into()),
        date_created: Utc.with_ymd_and_hms(2024, 2, 14, 19, 30, 0).unwrap(),
        is_forgiven: false,
        actions_taken: Vec::new(),
        resolution_notes: None,
    }
}

#[tokio::test]
async fn create_grievance_posts_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/grievances"))
        .and(body_json(json!({
            "id": "g-1",
            "reason": "forgot our anniversary",
            "moodLevel": 1,
            "whatShouldHaveDone": "set a reminder",
            "dateCreated": "2024-02-14T19:30:00Z",
            "isForgiven": false,
            "actionsTaken": [],
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let intent = ReplicationIntent::CreateGrievance {
        grievance: sample_grievance(),
    };
    remote_for(&server).replicate(&intent).await.unwrap();
    server.verify().await;
}

#[tokio::test]
async fn forgiveness_patches_the_grievance() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/grievances/g-1"))
        .and(body_json(json!({
            "isForgiven": true,
            "resolutionNotes": "we talked it through",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let intent = ReplicationIntent::UpdateGrievance {
        id: "g-1".into(),
        patch: GrievancePatch {
            is_forgiven: true,
            resolution_notes: Some("we talked it through".into()),
        },
    };
    remote_for(&server).replicate(&intent).await.unwrap();
    server.verify().await;
}

#[tokio::test]
async fn action_is_posted_under_its_grievance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/grievances/g-1/actions"))
        .and(body_json(json!({ "action": "Give a long hug" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let intent = ReplicationIntent::AppendGrievanceAction {
        id: "g-1".into(),
        action: ActionPayload {
            action: "Give a long hug".into(),
        },
    };
    remote_for(&server).replicate(&intent).await.unwrap();
    server.verify().await;
}

#[tokio::test]
async fn message_routes_create_and_mark_read() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_json(json!({
            "id": "m-1",
            "message": "dinner is on me",
            "dateCreated": "2024-02-15T08:00:00Z",
            "isRead": false,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/messages/m-1"))
        .and(body_json(json!({ "isRead": true })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let remote = remote_for(&server);
    let create = ReplicationIntent::CreateSecretMessage {
        message: SecretMessage {
            id: "m-1".into(),
            message: "dinner is on me".into(),
            date_created: Utc.with_ymd_and_hms(2024, 2, 15, 8, 0, 0).unwrap(),
            is_read: false,
        },
    };
    let read = ReplicationIntent::UpdateSecretMessage {
        id: "m-1".into(),
        patch: MessagePatch { is_read: true },
    };
    remote.replicate(&create).await.unwrap();
    remote.replicate(&read).await.unwrap();
    server.verify().await;
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/messages/m-9"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let intent = ReplicationIntent::UpdateSecretMessage {
        id: "m-9".into(),
        patch: MessagePatch { is_read: true },
    };
    let err = remote_for(&server).replicate(&intent).await.unwrap_err();
    match err {
        SyncError::Status {
            method,
            endpoint,
            status,
        } => {
            assert_eq!(method, "PATCH");
            assert_eq!(endpoint, "/messages/m-9");
            assert_eq!(status, 500);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_request_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let remote = HttpRemote::new(
        build_sync_client_with_timeouts(2, 1),
        &format!("http://{addr}/api"),
    );
    let intent = ReplicationIntent::CreateGrievance {
        grievance: sample_grievance(),
    };
    let err = remote.replicate(&intent).await.unwrap_err();
    assert!(matches!(err, SyncError::Request { method: "POST", .. }), "{err:?}");
}
