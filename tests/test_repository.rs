//! Integration tests for repository search

use mockito::Matcher;
use serde_json::json;

use github_explorer::tools::functions::repository::search_github_repository;
use github_explorer::types::{SearchRepositoryOptions, SortDirection};
use test_util::{
    assert_json_round_trip, create_test_github_client, link_header, mock_github_server, query,
};

fn repository_json(name: &str, description: &str) -> serde_json::Value {
    json!({
        "id": 1296269,
        "name": name,
        "full_name": format!("octocat/{}", name),
        "owner": { "login": "octocat", "id": 1, "type": "User" },
        "description": description,
        "default_branch": "main",
        "stargazers_count": 80,
        "forks_count": 9,
        "language": "Rust",
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2011-01-26T19:14:43Z",
        "archived": false,
        "score": 1.0
    })
}

#[tokio::test]
async fn test_search_repository_applies_pagination_defaults() {
    let mut server = mock_github_server().await;
    let mock = server
        .mock("GET", "/search/repositories")
        .match_query(query(&[("q", "tetris"), ("page", "1"), ("per_page", "10")]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(test_util::search_envelope(
            1,
            vec![repository_json("Tetris", "A C implementation of tetris")],
        ))
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let result = search_github_repository(
        &client,
        SearchRepositoryOptions {
            query: "tetris".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(result.total_repo_num, 1);
    assert_eq!(result.next_page, 0);
    assert_eq!(result.last_page, 0);

    let repository = &result.repositories[0];
    assert_eq!(repository.name, "Tetris");
    assert_eq!(repository.owner.as_deref(), Some("octocat"));
    assert_eq!(repository.organization, None);
    assert_eq!(repository.stargazers_count, 80);
    assert_eq!(repository.created_at.as_deref(), Some("2011-01-26 19:01:12"));
}

#[tokio::test]
async fn test_search_repository_forwards_sort_and_reads_link_header() {
    let mut server = mock_github_server().await;
    let link = link_header(&server, "/search/repositories", 3, 34);
    let mock = server
        .mock("GET", "/search/repositories")
        .match_query(query(&[
            ("q", "language:rust"),
            ("sort", "stars"),
            ("order", "asc"),
            ("page", "2"),
            ("per_page", "5"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("link", &link)
        .with_body(test_util::search_envelope(
            170,
            vec![repository_json("ripgrep", "0123456789ABCDE")],
        ))
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let result = search_github_repository(
        &client,
        SearchRepositoryOptions {
            query: "language:rust".to_string(),
            sort: Some("stars".to_string()),
            order: Some(SortDirection::Asc),
            result_per_page: Some(5),
            page: Some(2),
            description_truncate_size: Some(10),
        },
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(result.total_repo_num, 170);
    assert_eq!(result.next_page, 3);
    assert_eq!(result.last_page, 34);
    assert_eq!(
        result.repositories[0].description.as_deref(),
        Some("0123456789")
    );

    assert_json_round_trip(&result);
}

#[tokio::test]
async fn test_search_repository_surfaces_upstream_failure() {
    let mut server = mock_github_server().await;
    let _mock = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::Any)
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Validation Failed",
                "documentation_url": "https://docs.github.com/rest/search"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let error = search_github_repository(
        &client,
        SearchRepositoryOptions {
            query: String::new(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(error.upstream_kind().is_some());
    assert!(error.to_string().contains("Validation Failed"));
}
