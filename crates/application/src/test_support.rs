//! In-memory port doubles shared by the store tests.
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use showroom_domain::Credential;

use crate::{CredentialError, CredentialStore, HttpError, HttpMethod, HttpResult, Transport};

/// Credential store backed by a mutex.
#[derive(Debug, Default)]
pub struct FakeCredentials {
    value: Mutex<Option<Credential>>,
}

impl FakeCredentials {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn current(&self) -> Option<Credential> {
        self.value.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialStore for FakeCredentials {
    async fn get(&self) -> Result<Option<Credential>, CredentialError> {
        Ok(self.current())
    }

    async fn set(&self, credential: Credential) -> Result<(), CredentialError> {
        *self.value.lock().unwrap() = Some(credential);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialError> {
        *self.value.lock().unwrap() = None;
        Ok(())
    }
}

/// One request seen by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub authorization: Option<String>,
}

/// Transport answering from a fixed table of responses.
///
/// Unscripted routes answer 404, like a server with no such endpoint.
pub struct ScriptedTransport {
    credentials: Arc<dyn CredentialStore>,
    responses: Mutex<HashMap<(HttpMethod, String), HttpResult<Value>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            credentials,
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, method: HttpMethod, path: &str, response: HttpResult<Value>) {
        self.responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        authorized: bool,
    ) -> impl Future<Output = HttpResult<Value>> + Send {
        let path = path.to_string();
        async move {
            let authorization = if authorized {
                self.credentials
                    .get()
                    .await?
                    .map(|c| c.authorization_value())
            } else {
                None
            };

            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                path: path.clone(),
                body,
                authorization,
            });

            self.responses
                .lock()
                .unwrap()
                .get(&(method, path))
                .cloned()
                .unwrap_or_else(|| Err(HttpError::status(404)))
        }
    }
}
