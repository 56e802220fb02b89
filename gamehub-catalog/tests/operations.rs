use gamehub_catalog::*;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OBJECTS_PATH: &str = "/v3/buckets/test-bucket/objects";

fn test_catalog(server: &MockServer) -> Catalog {
    let creds = Credentials {
        bucket_slug: "test-bucket".to_string(),
        read_key: "test-read-key".to_string(),
        write_key: None,
    };
    let client = CosmicClient::new(creds)
        .unwrap()
        .with_base_url(server.uri());
    Catalog::new(client)
}

fn game_json(id: &str, title: &str, popular: bool) -> Value {
    json!({
        "id": id,
        "slug": title.to_lowercase(),
        "title": title,
        "metadata": {
            "description": format!("About {title}"),
            "is_popular": popular
        }
    })
}

fn page(objects: Vec<Value>) -> Value {
    let total = objects.len();
    json!({ "objects": objects, "total": total })
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({ "message": "No objects found" }))
}

#[tokio::test]
async fn games_sends_listing_query_and_sorts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param("read_key", "test-read-key"))
        .and(query_param("query", r#"{"type":"games"}"#))
        .and(query_param("props", "id,title,slug,metadata"))
        .and(query_param("depth", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            game_json("g-c", "Mango", true),
            game_json("g-a", "Zebra", true),
            game_json("g-b", "Apple", false),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let games = test_catalog(&server).games().await.unwrap();
    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Mango", "Zebra", "Apple"]);
}

#[tokio::test]
async fn games_collapses_not_found_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let games = test_catalog(&server).games().await.unwrap();
    assert!(games.is_empty());
}

#[tokio::test]
async fn games_by_category_filters_on_embedded_category_slug() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param(
            "query",
            r#"{"metadata.category.slug":"puzzle-games","type":"games"}"#,
        ))
        .and(query_param("props", "id,title,slug,metadata"))
        .and(query_param("depth", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![game_json("g-1", "Tetris", false)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let games = test_catalog(&server)
        .games_by_category("puzzle-games")
        .await
        .unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "Tetris");
}

#[tokio::test]
async fn games_by_category_collapses_not_found_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let games = test_catalog(&server)
        .games_by_category("no-such-category")
        .await
        .unwrap();
    assert!(games.is_empty());
}

#[tokio::test]
async fn game_requests_content_and_limits_to_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param("query", r#"{"slug":"tetris","type":"games"}"#))
        .and(query_param("props", "id,title,slug,metadata,content"))
        .and(query_param("depth", "1"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![json!({
            "id": "g-1",
            "slug": "tetris",
            "title": "Tetris",
            "content": "<p>Stack the pieces.</p>",
            "metadata": {
                "title": "Tetris Classic",
                "difficulty": { "key": "medium", "value": "Medium" },
                "is_popular": true
            }
        })])))
        .expect(1)
        .mount(&server)
        .await;

    let game = test_catalog(&server).game("tetris").await.unwrap().unwrap();
    assert_eq!(game.display_title(), "Tetris Classic");
    assert_eq!(game.content.as_deref(), Some("<p>Stack the pieces.</p>"));
    assert_eq!(
        game.difficulty().map(|d| d.key),
        Some(DifficultyKey::Medium)
    );
}

#[tokio::test]
async fn game_returns_none_for_missing_slug() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let game = test_catalog(&server).game("no-such-game").await.unwrap();
    assert!(game.is_none());
}

#[tokio::test]
async fn game_without_metadata_reads_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![json!({
            "id": "g-1",
            "slug": "ghost",
            "title": "Ghost"
        })])))
        .mount(&server)
        .await;

    let game = test_catalog(&server).game("ghost").await.unwrap();
    assert!(game.is_none());
}

#[tokio::test]
async fn game_treats_empty_page_as_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
        .mount(&server)
        .await;

    let game = test_catalog(&server).game("vanished").await.unwrap();
    assert!(game.is_none());
}

#[tokio::test]
async fn categories_query_skips_depth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param("query", r#"{"type":"categories"}"#))
        .and(query_param("props", "id,title,slug,metadata"))
        .and(query_param_is_missing("depth"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![json!({
            "id": "c-1",
            "slug": "puzzle-games",
            "title": "puzzle-games",
            "metadata": { "name": "Puzzle Games", "icon": "🧩" }
        })])))
        .expect(1)
        .mount(&server)
        .await;

    let categories = test_catalog(&server).categories().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].display_name(), "Puzzle Games");
    assert_eq!(categories[0].icon(), "🧩");
}

#[tokio::test]
async fn categories_collapses_not_found_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let categories = test_catalog(&server).categories().await.unwrap();
    assert!(categories.is_empty());
}

#[tokio::test]
async fn popular_games_sends_boolean_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param(
            "query",
            r#"{"metadata.is_popular":true,"type":"games"}"#,
        ))
        .and(query_param("depth", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![game_json("g-1", "Snake", true)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let games = test_catalog(&server).popular_games().await.unwrap();
    assert_eq!(games.len(), 1);
    assert!(games[0].is_popular());
}

#[tokio::test]
async fn popular_games_collapses_not_found_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let games = test_catalog(&server).popular_games().await.unwrap();
    assert!(games.is_empty());
}

#[tokio::test]
async fn games_by_difficulty_sends_key_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param(
            "query",
            r#"{"metadata.difficulty.key":"hard","type":"games"}"#,
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![game_json("g-1", "Minesweeper", false)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let games = test_catalog(&server)
        .games_by_difficulty(DifficultyKey::Hard)
        .await
        .unwrap();
    assert_eq!(games.len(), 1);
}

#[tokio::test]
async fn games_by_difficulty_collapses_not_found_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let games = test_catalog(&server)
        .games_by_difficulty(DifficultyKey::Easy)
        .await
        .unwrap();
    assert!(games.is_empty());
}

#[tokio::test]
async fn server_errors_carry_operation_label_and_cause() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "bucket unavailable" })),
        )
        .mount(&server)
        .await;

    let err = test_catalog(&server).games().await.unwrap_err();
    assert_eq!(err.operation(), "games");
    assert_eq!(err.to_string(), "Failed to fetch games");

    let cause = err.cause().to_string();
    assert!(cause.contains("500"), "unexpected cause: {cause}");
    assert!(cause.contains("bucket unavailable"), "unexpected cause: {cause}");

    // The cause is also reachable through the standard error chain.
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn each_operation_reports_its_own_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "down" })))
        .mount(&server)
        .await;

    let catalog = test_catalog(&server);
    let err = catalog.games_by_category("x").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch games by category");
    let err = catalog.game("x").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch game");
    let err = catalog.categories().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch categories");
    let err = catalog.popular_games().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch popular games");
    let err = catalog
        .games_by_difficulty(DifficultyKey::Easy)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch games by difficulty");
}

#[tokio::test]
async fn unparseable_body_surfaces_as_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = test_catalog(&server).games().await.unwrap_err();
    let cause = err.cause().to_string();
    assert!(
        cause.starts_with("Malformed response"),
        "unexpected cause: {cause}"
    );
    assert!(cause.contains("<html>gateway</html>"), "unexpected cause: {cause}");
}
