//! Character and staff lookups.

use crate::client::AniListClient;
use crate::error::Result;
use crate::query::{Identifier, ResourceKind};
use crate::types::QueryResult;

/// Provides access to `Character` and `Staff` lookups.
///
/// Obtained via [`AniListClient::people()`]. Both accept an id or a name.
///
/// # Example
///
/// ```no_run
/// # use anilist::AniListClient;
/// # async fn example() -> anilist::Result<()> {
/// let client = AniListClient::new();
/// let spike = client.people().character(1).await?;
/// let watanabe = client.people().staff("Shinichirou Watanabe").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PeopleActions<'a> {
    pub(crate) client: &'a AniListClient,
}

impl<'a> PeopleActions<'a> {
    /// Fetch a character by id or name.
    pub async fn character(&self, ident: impl Into<Identifier>) -> Result<QueryResult> {
        self.client
            .lookup(ResourceKind::Character, ident.into())
            .await
    }

    /// Fetch a staff member by id or name.
    pub async fn staff(&self, ident: impl Into<Identifier>) -> Result<QueryResult> {
        self.client.lookup(ResourceKind::Staff, ident.into()).await
    }
}
