//! Entity accessors for the AniList API.
//!
//! Each group is a thin layer over a fixed template: it picks the
//! [`ResourceKind`](crate::query::ResourceKind), forwards the identifier, and
//! returns the unwrapped result.

mod lists;
mod media;
mod people;
mod studios;
mod users;

pub use lists::ListActions;
pub use media::MediaActions;
pub use people::PeopleActions;
pub use studios::StudioActions;
pub use users::UserActions;
