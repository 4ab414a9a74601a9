//! Anime and manga lookups.
//!
//! # Example
//!
//! ```no_run
//! use anilist::AniListClient;
//!
//! # async fn example() -> anilist::Result<()> {
//! let client = AniListClient::new();
//!
//! let bebop = client.media().anime(1).await?;
//! println!("{} episodes", bebop["episodes"]);
//!
//! let berserk = client.media().manga_by_title("Berserk").await?;
//! println!("{} volumes", berserk["volumes"]);
//! # Ok(())
//! # }
//! ```

use crate::client::AniListClient;
use crate::error::Result;
use crate::query::{Identifier, ResourceKind};
use crate::types::QueryResult;

/// Provides access to `Media` lookups.
///
/// Obtained via [`AniListClient::media()`].
#[derive(Debug)]
pub struct MediaActions<'a> {
    pub(crate) client: &'a AniListClient,
}

impl<'a> MediaActions<'a> {
    /// Fetch an anime by its AniList id.
    pub async fn anime(&self, id: i32) -> Result<QueryResult> {
        self.client
            .lookup(ResourceKind::Anime, Identifier::ById(id))
            .await
    }

    /// Fetch the best anime match for a title.
    pub async fn anime_by_title(&self, title: &str) -> Result<QueryResult> {
        self.client
            .lookup(ResourceKind::Anime, Identifier::from(title))
            .await
    }

    /// Fetch a manga by its AniList id.
    pub async fn manga(&self, id: i32) -> Result<QueryResult> {
        self.client
            .lookup(ResourceKind::Manga, Identifier::ById(id))
            .await
    }

    /// Fetch the best manga match for a title.
    pub async fn manga_by_title(&self, title: &str) -> Result<QueryResult> {
        self.client
            .lookup(ResourceKind::Manga, Identifier::from(title))
            .await
    }
}
