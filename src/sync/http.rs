use super::intent::ReplicationIntent;
use super::traits::RemoteSync;
use crate::error::SyncError;
use reqwest::{Client, Method};
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

/// JSON-over-HTTP mirror of the journal.
///
/// Routes:
/// - `POST   /grievances`              full grievance
/// - `PATCH  /grievances/{id}`         forgiveness patch
/// - `POST   /grievances/{id}/actions` `{ "action": ... }`
/// - `POST   /messages`                full message
/// - `PATCH  /messages/{id}`           read patch
pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: String,
        body: &T,
    ) -> Result<(), SyncError> {
        let method_name = method_label(&method);
        let url = format!("{}{path}", self.base_url);

        let response = self
            .client
            .request(method, &url)
            .json(body)
            .send()
            .await
            .map_err(|e| SyncError::Request {
                method: method_name,
                endpoint: path.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                method: method_name,
                endpoint: path,
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

fn method_label(method: &Method) -> &'static str {
    if *method == Method::PATCH {
        "PATCH"
    } else {
        "POST"
    }
}

impl RemoteSync for HttpRemote {
    fn name(&self) -> &str {
        "http"
    }

    fn replicate<'a>(
        &'a self,
        intent: &'a ReplicationIntent,
    ) -> Pin<Box<dyn Future<Output = Result<(), SyncError>> + Send + 'a>> {
        Box::pin(async move {
            match intent {
                ReplicationIntent::CreateGrievance { grievance } => {
                    self.send_json(Method::POST, "/grievances".into(), grievance)
                        .await
                }
                ReplicationIntent::UpdateGrievance { id, patch } => {
                    self.send_json(Method::PATCH, format!("/grievances/{id}"), patch)
                        .await
                }
                ReplicationIntent::AppendGrievanceAction { id, action } => {
                    self.send_json(Method::POST, format!("/grievances/{id}/actions"), action)
                        .await
                }
                ReplicationIntent::CreateSecretMessage { message } => {
                    self.send_json(Method::POST, "/messages".into(), message)
                        .await
                }
                ReplicationIntent::UpdateSecretMessage { id, patch } => {
                    self.send_json(Method::PATCH, format!("/messages/{id}"), patch)
                        .await
                }
            }
        })
    }
}
