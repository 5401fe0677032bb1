//! Integration tests for commit listing, lookup and comparison

use mockito::Matcher;
use serde_json::json;

use github_explorer::tools::functions::commit::{
    compare_commits, get_commit, get_commit_files, list_commits,
};
use github_explorer::types::{CommitListOptions, CompareCommitsOptions, GetCommitOptions};
use test_util::{
    assert_json_round_trip, commit_json, create_test_github_client, mock_github_server, query,
};

const MERGE_SHA: &str = "6dcb09b5b57875f334f61aebed695e2e4193db5e";
const PARENTS: [&str; 2] = [
    "553c2077f0edc3d5dc5d17262f6aa498e69d6f8e",
    "762941318ee16e59dabbacb1b4049eec22f0d303",
];

fn commit_with_files() -> serde_json::Value {
    let mut commit = commit_json(MERGE_SHA, "Merge pull request #6", &PARENTS);
    commit["files"] = json!([
        {
            "sha": "bbcd538c8e72b8c175046e27cc8f907076331401",
            "filename": "src/lib.rs",
            "status": "modified",
            "additions": 10,
            "deletions": 2,
            "changes": 12,
            "blob_url": "https://github.com/o/r/blob/6dcb09b/src/lib.rs",
            "raw_url": "https://github.com/o/r/raw/6dcb09b/src/lib.rs",
            "contents_url": "https://api.github.com/repos/o/r/contents/src/lib.rs?ref=6dcb09b",
            "patch": "@@ -1,2 +1,10 @@"
        },
        {
            "filename": "src/new_name.rs",
            "previous_filename": "src/old_name.rs",
            "status": "renamed",
            "additions": 0,
            "deletions": 0,
            "changes": 0
        }
    ]);
    commit
}

#[tokio::test]
async fn test_list_commits_with_filters() {
    let mut server = mock_github_server().await;
    let mock = server
        .mock("GET", "/repos/o/r/commits")
        .match_query(query(&[
            ("sha", "develop"),
            ("path", "src/lib.rs"),
            ("author", "octocat"),
            ("page", "1"),
            ("per_page", "10"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                commit_json(MERGE_SHA, "Merge pull request #6", &PARENTS),
                commit_json(PARENTS[0], "Fix all the bugs", &[])
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let result = list_commits(
        &client,
        CommitListOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            sha: Some("develop".to_string()),
            path: Some("src/lib.rs".to_string()),
            author: Some("octocat".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(result.commits.len(), 2);
    assert_eq!(result.commits[0].message, "Merge pull request #6");
    assert_eq!(result.commits[0].date.as_deref(), Some("2024-02-01T10:00:00Z"));
    assert!(result.commits[1].parent_commit_hash.is_empty());
    assert_json_round_trip(&result);
}

#[tokio::test]
async fn test_get_commit_and_list_commits_agree_on_parents() {
    let mut server = mock_github_server().await;
    let _list_mock = server
        .mock("GET", "/repos/o/r/commits")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([commit_json(MERGE_SHA, "Merge pull request #6", &PARENTS)]).to_string())
        .create_async()
        .await;
    let _get_mock = server
        .mock("GET", format!("/repos/o/r/commits/{}", MERGE_SHA).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(commit_with_files().to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let listed = list_commits(
        &client,
        CommitListOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let single = get_commit(
        &client,
        GetCommitOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            sha: MERGE_SHA.to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(
        single.parent_commit_hash,
        vec![PARENTS[0].to_string(), PARENTS[1].to_string()]
    );
    assert_eq!(listed.commits[0], single);
    assert_json_round_trip(&single);
}

#[tokio::test]
async fn test_get_commit_files() {
    let mut server = mock_github_server().await;
    let mock = server
        .mock("GET", format!("/repos/o/r/commits/{}", MERGE_SHA).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(commit_with_files().to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let result = get_commit_files(
        &client,
        GetCommitOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            sha: MERGE_SHA.to_string(),
        },
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files[0].filename, "src/lib.rs");
    assert_eq!(result.files[0].changes, 12);
    assert_eq!(result.files[0].patch.as_deref(), Some("@@ -1,2 +1,10 @@"));
    assert_eq!(result.files[1].status, "renamed");
    assert_eq!(
        result.files[1].previous_filename.as_deref(),
        Some("src/old_name.rs")
    );
    assert_json_round_trip(&result);
}

#[tokio::test]
async fn test_compare_commits() {
    let mut server = mock_github_server().await;
    let mock = server
        .mock("GET", "/repos/o/r/compare/v1.0...main")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "url": "https://api.github.com/repos/o/r/compare/v1.0...main",
                "html_url": "https://github.com/o/r/compare/v1.0...main",
                "permalink_url": "https://github.com/o/r/compare/o:bbcd538...o:0328041",
                "diff_url": "https://github.com/o/r/compare/v1.0...main.diff",
                "patch_url": "https://github.com/o/r/compare/v1.0...main.patch",
                "status": "ahead",
                "ahead_by": 2,
                "behind_by": 0,
                "total_commits": 2,
                "commits": [
                    commit_json(PARENTS[1], "First", &[PARENTS[0]]),
                    commit_json(MERGE_SHA, "Second", &[PARENTS[1]])
                ],
                "files": commit_with_files()["files"].clone()
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let result = compare_commits(
        &client,
        CompareCommitsOptions {
            owner: "o".to_string(),
            repository: "r".to_string(),
            base: "v1.0".to_string(),
            head: "main".to_string(),
        },
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(result.status, "ahead");
    assert_eq!(result.ahead_by, 2);
    assert_eq!(result.behind_by, 0);
    assert_eq!(result.total_commits, 2);
    assert_eq!(result.commits[1].message, "Second");
    assert_eq!(result.commits[1].parent_commit_hash, vec![PARENTS[1].to_string()]);
    assert_eq!(result.files.len(), 2);
    assert_eq!(
        result.diff_url.as_deref(),
        Some("https://github.com/o/r/compare/v1.0...main.diff")
    );
    assert_json_round_trip(&result);
}
