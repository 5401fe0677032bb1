//! Integration tests for README, directory and file reading

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mockito::Matcher;
use serde_json::json;

use github_explorer::tools::error::ToolError;
use github_explorer::tools::functions::content::{get_readme, list_directory, read_file};
use github_explorer::types::{DirectoryListOptions, ReadFileOptions, ReadmeOptions};
use test_util::{
    assert_json_round_trip, create_test_github_client, mock_github_server, not_found_body, query,
};

fn file_json(path: &str, content: &str) -> serde_json::Value {
    // GitHub wraps base64 payloads with newlines
    let encoded = STANDARD.encode(content);
    let wrapped = encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join("\n");

    json!({
        "type": "file",
        "encoding": "base64",
        "size": content.len(),
        "name": path.rsplit('/').next().unwrap(),
        "path": path,
        "content": wrapped,
        "sha": "3d21ec53a331a6f037a91c368710b99387d012c1"
    })
}

fn directory_json() -> serde_json::Value {
    json!([
        { "type": "file", "size": 625, "name": "lib.rs", "path": "src/lib.rs", "sha": "a" },
        { "type": "dir", "size": 0, "name": "tools", "path": "src/tools", "sha": "b" }
    ])
}

#[tokio::test]
async fn test_get_readme_with_ref_and_line_range() {
    let readme = "# Title\n\nline 3\nline 4\nline 5";
    let mut server = mock_github_server().await;
    let mock = server
        .mock("GET", "/repos/o/r/readme")
        .match_query(query(&[("ref", "v1.0")]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(file_json("README.md", readme).to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let result = get_readme(
        &client,
        ReadmeOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            git_ref: Some("v1.0".to_string()),
            start_line: Some(3),
            end_line: Some(0),
        },
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(result.content, "line 3\nline 4\nline 5");
    assert_eq!(result.start_line, 3);
    assert_eq!(result.end_line, 5);
    assert_eq!(result.total_lines, 5);
    assert_json_round_trip(&result);
}

#[tokio::test]
async fn test_read_file_decodes_wrapped_base64() {
    let content = "fn main() {\n    println!(\"hello\");\n}\n".repeat(10);
    let mut server = mock_github_server().await;
    let mock = server
        .mock("GET", "/repos/o/r/contents/src/main.rs")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(file_json("src/main.rs", &content).to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let result = read_file(
        &client,
        ReadFileOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            path: "src/main.rs".to_string(),
            start_line: Some(2),
            end_line: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(result.content, "    println!(\"hello\");");
    assert_eq!(result.start_line, 2);
    assert_eq!(result.end_line, 2);
    // 30 lines plus the empty line after the trailing newline
    assert_eq!(result.total_lines, 31);
    assert_eq!(result.encoding.as_deref(), Some("base64"));
    assert_json_round_trip(&result);
}

#[tokio::test]
async fn test_read_file_on_directory_is_not_a_file() {
    let mut server = mock_github_server().await;
    let _mock = server
        .mock("GET", "/repos/o/r/contents/src")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(directory_json().to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let error = read_file(
        &client,
        ReadFileOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            path: "src".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(error, ToolError::NotAFile(ref path) if path == "src"));
}

#[tokio::test]
async fn test_read_file_on_symlink_is_not_a_file() {
    let mut server = mock_github_server().await;
    let _mock = server
        .mock("GET", "/repos/o/r/contents/current")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "type": "symlink",
                "target": "releases/v1",
                "size": 11,
                "name": "current",
                "path": "current"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let error = read_file(
        &client,
        ReadFileOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            path: "current".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(error, ToolError::NotAFile(_)));
}

#[tokio::test]
async fn test_read_file_without_inline_content_fails() {
    let mut server = mock_github_server().await;
    let mock = server
        .mock("GET", "/repos/o/r/contents/big.log")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "type": "file",
                "encoding": "none",
                "size": 5000000,
                "name": "big.log",
                "path": "big.log",
                "content": ""
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let error = read_file(
        &client,
        ReadFileOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            path: "big.log".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(error, ToolError::ContentDecode(_)));
    let message = error.to_string();
    assert!(message.contains("big.log"));
    assert!(message.contains("'none'"));
}

#[tokio::test]
async fn test_get_readme_with_unknown_encoding_fails() {
    let mut server = mock_github_server().await;
    let _mock = server
        .mock("GET", "/repos/o/r/readme")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "type": "file",
                "encoding": "utf-16",
                "size": 20,
                "name": "README.md",
                "path": "README.md",
                "content": "# Title"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let error = get_readme(
        &client,
        ReadmeOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(error, ToolError::ContentDecode(ref details) if details.contains("utf-16")));
}

#[tokio::test]
async fn test_read_missing_file_surfaces_not_found() {
    let mut server = mock_github_server().await;
    let _mock = server
        .mock("GET", "/repos/o/r/contents/missing.txt")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(not_found_body())
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let error = read_file(
        &client,
        ReadFileOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            path: "missing.txt".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(error, ToolError::Upstream(_)));
    assert!(error.to_string().contains("Not Found"));
}

#[tokio::test]
async fn test_list_directory() {
    let mut server = mock_github_server().await;
    let mock = server
        .mock("GET", "/repos/o/r/contents/src")
        .match_query(query(&[("ref", "main")]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(directory_json().to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let result = list_directory(
        &client,
        DirectoryListOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            path: Some("src".to_string()),
            git_ref: Some("main".to_string()),
        },
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(result.infos.len(), 2);
    assert_eq!(result.infos[0].path, "src/lib.rs");
    assert_eq!(result.infos[0].entry_type, "file");
    assert_eq!(result.infos[1].entry_type, "dir");
    assert_json_round_trip(&result);
}

#[tokio::test]
async fn test_list_directory_root_and_single_file() {
    let mut server = mock_github_server().await;
    let root_mock = server
        .mock("GET", "/repos/o/r/contents")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(directory_json().to_string())
        .create_async()
        .await;
    let file_mock = server
        .mock("GET", "/repos/o/r/contents/Cargo.toml")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(file_json("Cargo.toml", "[package]\n").to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let root = list_directory(
        &client,
        DirectoryListOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let file = list_directory(
        &client,
        DirectoryListOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            path: Some("Cargo.toml".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    root_mock.assert_async().await;
    file_mock.assert_async().await;
    assert_eq!(root.infos.len(), 2);
    assert_eq!(file.infos.len(), 1);
    assert_eq!(file.infos[0].name, "Cargo.toml");
    assert_eq!(file.infos[0].encoding.as_deref(), Some("base64"));
}
