//! Tests for anime and manga accessors.

mod common;

use anilist::Error;
use common::{client_for, expect_no_requests, mock_data, mock_errors, mock_query, received_document, setup_mock_server};
use serde_json::json;

#[tokio::test]
async fn test_anime_by_id() {
    let server = setup_mock_server().await;
    mock_query(
        &server,
        json!({ "id": 1 }),
        mock_data(
            "Media",
            json!({
                "id": 1,
                "idMal": 1,
                "title": { "romaji": "Cowboy Bebop", "english": "Cowboy Bebop" },
                "episodes": 26
            }),
        ),
    )
    .await;

    let client = client_for(&server);
    let anime = client.media().anime(1).await.unwrap();

    assert_eq!(anime["title"]["romaji"], "Cowboy Bebop");
    assert_eq!(anime["episodes"], 26);

    let document = received_document(&server).await;
    assert!(document.starts_with("query ($id: Int) { Media (id: $id, type: ANIME) {"));
}

#[tokio::test]
async fn test_manga_by_id() {
    let server = setup_mock_server().await;
    mock_query(
        &server,
        json!({ "id": 30002 }),
        mock_data("Media", json!({ "id": 30002, "volumes": 41 })),
    )
    .await;

    let client = client_for(&server);
    let manga = client.media().manga(30002).await.unwrap();

    assert_eq!(manga["volumes"], 41);
    let document = received_document(&server).await;
    assert!(document.contains("type: MANGA"));
    assert!(document.contains("chapters volumes"));
}

#[tokio::test]
async fn test_anime_by_title() {
    let server = setup_mock_server().await;
    mock_query(
        &server,
        json!({ "search": "Cowboy Bebop" }),
        mock_data("Media", json!({ "id": 1 })),
    )
    .await;

    let client = client_for(&server);
    let anime = client.media().anime_by_title("Cowboy Bebop").await.unwrap();

    assert_eq!(anime["id"], 1);
    let document = received_document(&server).await;
    assert!(document.starts_with("query ($search: String) { Media (search: $search, type: ANIME) {"));
}

#[tokio::test]
async fn test_manga_by_title() {
    let server = setup_mock_server().await;
    mock_query(
        &server,
        json!({ "search": "Berserk" }),
        mock_data("Media", json!({ "id": 30002 })),
    )
    .await;

    let client = client_for(&server);
    let manga = client.media().manga_by_title("Berserk").await.unwrap();

    assert_eq!(manga["id"], 30002);
}

#[tokio::test]
async fn test_anime_not_found() {
    let server = setup_mock_server().await;
    mock_query(&server, json!({ "id": 424242 }), mock_errors(404, "Not Found.")).await;

    let client = client_for(&server);
    let err = client.media().anime(424242).await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_invalid_ids_send_nothing() {
    let server = setup_mock_server().await;
    expect_no_requests(&server).await;

    let client = client_for(&server);
    assert!(matches!(
        client.media().anime(0).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.media().manga(-1).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.media().anime_by_title("").await,
        Err(Error::InvalidArgument(_))
    ));
}
