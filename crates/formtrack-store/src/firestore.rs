//! Firestore REST v1 backend.
//!
//! Documents are written through plain HTTPS calls so the crate needs no
//! Google SDK. The "latest" document is PATCHed with an update mask, which
//! gives merge semantics: fields outside the mask survive. History entries
//! are POSTed to a collection and get auto-generated document ids.

use async_trait::async_trait;
use chrono::SecondsFormat;
use formtrack_core::error::StoreError;
use formtrack_core::{Assessment, CoreError, CoreResult, PostureStore};
use serde_json::{json, Value};
use tracing::debug;

use crate::record::PostureRecord;

/// Environment variable naming the Firestore project id.
pub const ENV_PROJECT: &str = "FORMTRACK_FIRESTORE_PROJECT";
/// Environment variable holding the OAuth2 bearer token.
pub const ENV_TOKEN: &str = "FORMTRACK_FIRESTORE_TOKEN";

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const DEFAULT_DATABASE: &str = "(default)";
const DEFAULT_LATEST_COLLECTION: &str = "postureLogs";
const DEFAULT_LATEST_DOCUMENT: &str = "latest";
const DEFAULT_HISTORY_COLLECTION: &str = "postureHistory";

/// Connection settings for [`FirestoreStore`].
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Google Cloud project id
    pub project_id: String,
    /// Bearer token sent with every request
    pub auth_token: String,
    /// Database id, `"(default)"` unless overridden
    pub database_id: String,
    /// API root, overridable to point at an emulator
    pub base_url: String,
    /// Collection holding the single live-state document
    pub latest_collection: String,
    /// Name of the live-state document
    pub latest_document: String,
    /// Collection receiving one entry per wrong-form transition
    pub history_collection: String,
}

impl FirestoreConfig {
    /// Creates a configuration with the default collection layout.
    #[must_use]
    pub fn new(project_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            auth_token: auth_token.into(),
            database_id: DEFAULT_DATABASE.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            latest_collection: DEFAULT_LATEST_COLLECTION.to_owned(),
            latest_document: DEFAULT_LATEST_DOCUMENT.to_owned(),
            history_collection: DEFAULT_HISTORY_COLLECTION.to_owned(),
        }
    }

    /// Reads the configuration from `FORMTRACK_FIRESTORE_PROJECT` and
    /// `FORMTRACK_FIRESTORE_TOKEN`.
    ///
    /// Both unset means persistence is intentionally disabled and `None` is
    /// returned; the caller picks a fallback store.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when exactly one of the two variables
    /// is set, since that is always a deployment mistake.
    pub fn from_env() -> CoreResult<Option<Self>> {
        Self::resolve(
            std::env::var(ENV_PROJECT).ok(),
            std::env::var(ENV_TOKEN).ok(),
        )
    }

    fn resolve(project: Option<String>, token: Option<String>) -> CoreResult<Option<Self>> {
        match (project, token) {
            (Some(project), Some(token)) => Ok(Some(Self::new(project, token))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(CoreError::configuration(format!(
                "{ENV_PROJECT} is set but {ENV_TOKEN} is missing"
            ))),
            (None, Some(_)) => Err(CoreError::configuration(format!(
                "{ENV_TOKEN} is set but {ENV_PROJECT} is missing"
            ))),
        }
    }

    fn documents_root(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.base_url, self.project_id, self.database_id
        )
    }

    fn latest_url(&self) -> String {
        format!(
            "{}/{}/{}?updateMask.fieldPaths=status\
             &updateMask.fieldPaths=exercise\
             &updateMask.fieldPaths=issue\
             &updateMask.fieldPaths=timestamp",
            self.documents_root(),
            self.latest_collection,
            self.latest_document
        )
    }

    fn history_url(&self) -> String {
        format!("{}/{}", self.documents_root(), self.history_collection)
    }
}

/// Encodes a record as a Firestore REST document body.
fn encode_document(record: &PostureRecord) -> Value {
    json!({
        "fields": {
            "status": { "stringValue": record.status.label() },
            "exercise": { "stringValue": record.exercise.label() },
            "issue": { "stringValue": record.issue },
            "timestamp": {
                "timestampValue": record
                    .timestamp
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
            },
        }
    })
}

/// Posture store backed by the Firestore REST v1 API.
#[derive(Debug)]
pub struct FirestoreStore {
    config: FirestoreConfig,
    client: reqwest::Client,
}

impl FirestoreStore {
    /// Creates a store around a fresh HTTP client.
    #[must_use]
    pub fn new(config: FirestoreConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the configured project id.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.config.project_id
    }

    async fn dispatch(&self, request: reqwest::RequestBuilder) -> CoreResult<()> {
        let response = request
            .header(
                "Authorization",
                format!("Bearer {}", self.config.auth_token),
            )
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        debug!(status = status.as_u16(), "firestore write acknowledged");
        Ok(())
    }
}

#[async_trait]
impl PostureStore for FirestoreStore {
    async fn write_latest(&self, assessment: &Assessment) -> CoreResult<()> {
        let record = PostureRecord::now(assessment);
        let request = self
            .client
            .patch(self.config.latest_url())
            .json(&encode_document(&record));
        self.dispatch(request).await
    }

    async fn append_history(&self, assessment: &Assessment) -> CoreResult<()> {
        let record = PostureRecord::now(assessment);
        let request = self
            .client
            .post(self.config.history_url())
            .json(&encode_document(&record));
        self.dispatch(request).await
    }

    fn name(&self) -> &'static str {
        "firestore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use formtrack_core::{Exercise, FormStatus};

    fn config() -> FirestoreConfig {
        FirestoreConfig::new("gym-demo", "test-token")
    }

    #[test]
    fn test_latest_url_has_merge_mask() {
        let url = config().latest_url();
        assert!(url.starts_with(
            "https://firestore.googleapis.com/v1/projects/gym-demo/databases/(default)/documents/postureLogs/latest?"
        ));
        for field in ["status", "exercise", "issue", "timestamp"] {
            assert!(url.contains(&format!("updateMask.fieldPaths={field}")));
        }
    }

    #[test]
    fn test_history_url_targets_collection() {
        assert_eq!(
            config().history_url(),
            "https://firestore.googleapis.com/v1/projects/gym-demo/databases/(default)/documents/postureHistory"
        );
    }

    #[test]
    fn test_document_encoding() {
        let record = PostureRecord {
            status: FormStatus::Wrong,
            exercise: Exercise::ShoulderPress,
            issue: "Press not overhead enough".to_owned(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
        };
        let doc = encode_document(&record);

        assert_eq!(doc["fields"]["status"]["stringValue"], "wrong");
        assert_eq!(doc["fields"]["exercise"]["stringValue"], "Shoulder Press");
        assert_eq!(
            doc["fields"]["issue"]["stringValue"],
            "Press not overhead enough"
        );
        assert_eq!(
            doc["fields"]["timestamp"]["timestampValue"],
            "2025-06-01T12:30:00.000Z"
        );
    }

    #[test]
    fn test_resolve_requires_both_variables() {
        assert!(FirestoreConfig::resolve(None, None).unwrap().is_none());

        let config = FirestoreConfig::resolve(Some("p".into()), Some("t".into()))
            .unwrap()
            .unwrap();
        assert_eq!(config.project_id, "p");
        assert_eq!(config.database_id, "(default)");

        assert!(FirestoreConfig::resolve(Some("p".into()), None).is_err());
        assert!(FirestoreConfig::resolve(None, Some("t".into())).is_err());
    }
}
