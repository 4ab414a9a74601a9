//! Studio lookups.

use crate::client::AniListClient;
use crate::error::Result;
use crate::query::{Identifier, ResourceKind};
use crate::types::QueryResult;

/// Provides access to `Studio` lookups.
///
/// Obtained via [`AniListClient::studios()`].
#[derive(Debug)]
pub struct StudioActions<'a> {
    pub(crate) client: &'a AniListClient,
}

impl<'a> StudioActions<'a> {
    /// Fetch a studio and its productions by id or name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use anilist::AniListClient;
    /// # async fn example() -> anilist::Result<()> {
    /// let client = AniListClient::new();
    /// let studio = client.studios().get("Madhouse").await?;
    /// println!("animation studio: {}", studio["isAnimationStudio"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, ident: impl Into<Identifier>) -> Result<QueryResult> {
        self.client.lookup(ResourceKind::Studio, ident.into()).await
    }
}
