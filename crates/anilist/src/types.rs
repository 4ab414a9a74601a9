//! Result types.
//!
//! Results are returned as untyped JSON shaped like the selection that was
//! queried. Use [`AniListClient::execute_as`](crate::AniListClient::execute_as)
//! to deserialize into your own types instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// The unwrapped root object of a response, e.g. the contents of `data.Media`.
pub type QueryResult = Value;

/// Paging metadata attached to every search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Total number of matches.
    #[serde(default)]
    pub total: Option<u32>,
    /// The page returned.
    pub current_page: u32,
    /// The last available page.
    #[serde(default)]
    pub last_page: Option<u32>,
    /// Whether another page follows.
    pub has_next_page: bool,
    /// Results per page, after server-side clamping.
    pub per_page: u32,
}

/// A search `Page` split into its paging metadata and the result list.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    /// Paging metadata.
    pub page_info: PageInfo,
    /// The matching entities, in the order AniList ranked them.
    pub results: Vec<Value>,
}

impl SearchPage {
    /// Split a `Page` result.
    ///
    /// The connection is whichever field other than `pageInfo` holds an array
    /// (`media`, `characters`, `staff` or `studios`).
    ///
    /// # Errors
    ///
    /// [`Error::MalformedResponse`] when `pageInfo` or the connection is missing.
    pub fn from_page(page: QueryResult) -> Result<Self> {
        let Value::Object(mut fields) = page else {
            return Err(Error::MalformedResponse("Page is not an object".into()));
        };

        let page_info = fields
            .remove("pageInfo")
            .ok_or_else(|| Error::MalformedResponse("Page has no pageInfo".into()))?;
        let page_info: PageInfo = serde_json::from_value(page_info)
            .map_err(|e| Error::MalformedResponse(format!("invalid pageInfo: {e}")))?;

        let results = fields
            .into_iter()
            .find_map(|(_, value)| match value {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .ok_or_else(|| Error::MalformedResponse("Page has no result list".into()))?;

        Ok(Self { page_info, results })
    }
}
