//! Example: looking things up on AniList.
//!
//! Demonstrates:
//! - Fetching anime by id and by title
//! - Paged search
//! - Handling API errors
//!
//! Run with: cargo run --example lookup
//! Set ANILIST_TOKEN to also fetch your own profile.

use anilist::{AniListClient, Error};

#[tokio::main]
async fn main() -> anilist::Result<()> {
    let client = match std::env::var("ANILIST_TOKEN") {
        Ok(token) => AniListClient::with_token(token),
        Err(_) => AniListClient::new(),
    };

    // ========== BY ID ==========
    println!("--- Anime #1 ---");
    let bebop = client.media().anime(1).await?;
    println!("{} ({} episodes)", bebop["title"]["romaji"], bebop["episodes"]);

    // ========== BY TITLE ==========
    println!("\n--- Manga titled 'Berserk' ---");
    let berserk = client.media().manga_by_title("Berserk").await?;
    println!("#{}: {} volumes", berserk["id"], berserk["volumes"]);

    // ========== SEARCH ==========
    println!("\n--- Searching studios for 'Sun' ---");
    let page = client.search_page("studio", "Sun", None, Some(10)).await?;
    for studio in &page.results {
        println!("  {} (#{})", studio["name"], studio["id"]);
    }
    println!(
        "page {} of {:?}",
        page.page_info.current_page, page.page_info.last_page
    );

    // ========== ERRORS ==========
    println!("\n--- A missing character ---");
    match client.people().character(999_999_999).await {
        Ok(character) => println!("Unexpectedly found {}", character["name"]),
        Err(Error::Api { status, errors }) => {
            println!("AniList said {status}: {}", errors[0].message)
        }
        Err(e) => return Err(e),
    }

    // ========== VIEWER ==========
    if client.auth().is_authenticated() {
        let me = client.users().viewer().await?;
        println!("\nLogged in as {}", me["name"]);
    }

    Ok(())
}
