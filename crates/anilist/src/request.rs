//! Internal request and response envelopes for GraphQL over HTTP.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GraphqlError;

/// The POST body: `{"query": ..., "variables": {...}}`.
#[derive(Debug, Serialize)]
pub(crate) struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: &'a Map<String, Value>,
}

/// The response body, with or without `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    /// The reported errors, if the array is present and non-empty.
    pub fn take_errors(&mut self) -> Option<Vec<GraphqlError>> {
        self.errors.take().filter(|errors| !errors.is_empty())
    }

    /// Remove the root field from `data`; `null` counts as missing.
    pub fn take_root(&mut self, root: &str) -> Option<Value> {
        self.data
            .as_mut()
            .and_then(|data| data.remove(root))
            .filter(|value| !value.is_null())
    }
}
