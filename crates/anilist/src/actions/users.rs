//! User profiles and statistics.
//!
//! Private profiles and [`UserActions::viewer`] need a client built with a
//! token; anonymous clients get an [`Error::Api`](crate::Error::Api) back.

use crate::client::AniListClient;
use crate::error::Result;
use crate::query::{self, Identifier, ResourceKind};
use crate::types::QueryResult;

/// Provides access to `User` and `Viewer` queries.
///
/// Obtained via [`AniListClient::users()`].
#[derive(Debug)]
pub struct UserActions<'a> {
    pub(crate) client: &'a AniListClient,
}

impl<'a> UserActions<'a> {
    /// Fetch a user's profile by id or username.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use anilist::AniListClient;
    /// # async fn example() -> anilist::Result<()> {
    /// let client = AniListClient::new();
    /// let user = client.users().profile("Josh").await?;
    /// println!("{}", user["siteUrl"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn profile(&self, ident: impl Into<Identifier>) -> Result<QueryResult> {
        self.client.lookup(ResourceKind::User, ident.into()).await
    }

    /// Fetch a user's anime and manga statistics by id or username.
    pub async fn stats(&self, ident: impl Into<Identifier>) -> Result<QueryResult> {
        self.client
            .lookup(ResourceKind::UserStats, ident.into())
            .await
    }

    /// Fetch the profile of the user the client's token belongs to.
    pub async fn viewer(&self) -> Result<QueryResult> {
        let request = query::viewer()?;
        self.client.execute(&request).await
    }
}
