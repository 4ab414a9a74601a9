//! A user's anime and manga lists.

use crate::client::AniListClient;
use crate::error::Result;
use crate::query::{Identifier, ResourceKind};
use crate::types::QueryResult;

/// Provides access to `MediaListCollection` queries.
///
/// Obtained via [`AniListClient::lists()`]. The user is given by id or
/// username.
///
/// # Example
///
/// ```no_run
/// # use anilist::AniListClient;
/// # async fn example() -> anilist::Result<()> {
/// let client = AniListClient::new();
/// let lists = client.lists().anime("Josh").await?;
/// for list in lists["lists"].as_array().into_iter().flatten() {
///     println!("{}: {} entries", list["name"], list["entries"].as_array().map_or(0, Vec::len));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ListActions<'a> {
    pub(crate) client: &'a AniListClient,
}

impl<'a> ListActions<'a> {
    /// Fetch every anime list of a user.
    pub async fn anime(&self, user: impl Into<Identifier>) -> Result<QueryResult> {
        self.client
            .lookup(ResourceKind::AnimeList, user.into())
            .await
    }

    /// Fetch every manga list of a user.
    pub async fn manga(&self, user: impl Into<Identifier>) -> Result<QueryResult> {
        self.client
            .lookup(ResourceKind::MangaList, user.into())
            .await
    }
}
