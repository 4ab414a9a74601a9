//! An async Rust client for the AniList GraphQL API.
//!
//! Anime, manga, characters, staff, studios, users and user lists are exposed
//! through typed accessors. The crate builds the GraphQL documents, binds
//! variables, attaches the bearer token, and unwraps responses so callers
//! only see the requested object or an [`Error`].
//!
//! # Quick Start
//!
//! ```no_run
//! use anilist::AniListClient;
//!
//! # async fn example() -> anilist::Result<()> {
//! let client = AniListClient::new();
//!
//! let anime = client.media().anime(21).await?;
//! println!("{}", anime["title"]["romaji"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! A token is fixed when the client is built. Clients without one are
//! anonymous; private fields then fail on the server side.
//!
//! ```no_run
//! use anilist::AniListClient;
//!
//! # async fn example() -> anilist::Result<()> {
//! let client = AniListClient::builder().token("your-access-token").build()?;
//! let me = client.users().viewer().await?;
//! println!("Logged in as {}", me["name"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Accessor Groups
//!
//! - [`AniListClient::media()`] - Anime and manga by id or title
//! - [`AniListClient::people()`] - Characters and staff
//! - [`AniListClient::studios()`] - Studios and their productions
//! - [`AniListClient::users()`] - Profiles, statistics, and the authenticated viewer
//! - [`AniListClient::lists()`] - A user's anime and manga lists
//! - [`AniListClient::search()`] - Paged search over any searchable kind
//! - [`AniListClient::fetch()`] - Lookup by a kind named at runtime
//!
//! Hand-written documents can be sent with [`AniListClient::execute`] after
//! building a [`QueryRequest`].

pub mod actions;
pub mod auth;
pub mod client;
pub mod error;
pub mod query;
mod request;
pub mod types;

pub use auth::{AuthContext, AuthMode};
pub use client::{AniListClient, ClientBuilder, DEFAULT_URL};
pub use error::{Error, ErrorLocation, GraphqlError, Result};
pub use query::{Identifier, Pagination, QueryRequest, ResourceKind, SearchKind};
pub use types::{PageInfo, QueryResult, SearchPage};
