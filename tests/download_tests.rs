//! End-to-end tests for single downloads and the clobber policies.

use landing::{ClobberPolicy, Error, Status};

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_download_into_directory() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    create_file(&dir, "unrelated.txt", OLD_CONTENT);
    std::fs::create_dir(dir.path().join("out")).unwrap();

    let path = downloader()
        .build()
        .download(&url(&server, "/hello-world.txt"), &destination(&dir, "out/"))
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("out").join("hello-world.txt"));
    assert_file_content(&path, HELLO_WORLD);
    assert_eq!(list_directory(&dir.path().join("out")), vec!["hello-world.txt"]);
    assert_file_content(&dir.path().join("unrelated.txt"), OLD_CONTENT);
}

#[tokio::test]
async fn test_download_to_file_path() {
    let server = fixture_server().await;
    let dir = create_temp_dir();

    let path = downloader()
        .build()
        .download(&url(&server, "/hello-world.txt"), &destination(&dir, "greeting.txt"))
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("greeting.txt"));
    assert_file_content(&path, HELLO_WORLD);
    assert_eq!(list_directory(dir.path()), vec!["greeting.txt"]);
}

#[tokio::test]
async fn test_fetch_reports_summary() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let source = url(&server, "/redirect");

    let summary = downloader()
        .build()
        .fetch(&source, &destination(&dir, ""))
        .await
        .unwrap();

    assert_eq!(summary.status(), Status::Downloaded);
    assert_eq!(summary.url().as_str(), source);
    assert_eq!(
        summary.effective_url().map(|u| u.path()),
        Some("/hello-world.txt")
    );
    assert_eq!(summary.size(), HELLO_WORLD.len() as u64);
    assert_eq!(summary.path(), dir.path().join("hello-world.txt"));
}

#[tokio::test]
async fn test_not_found_leaves_nothing_behind() {
    let server = fixture_server().await;
    let dir = create_temp_dir();

    let err = downloader()
        .build()
        .download(&url(&server, "/wrong-file.txt"), &destination(&dir, ""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::TransferFailed { .. }), "{:?}", err);
    assert_directory_empty(dir.path());
}

#[tokio::test]
async fn test_forbidden_leaves_nothing_behind() {
    let server = fixture_server().await;
    let dir = create_temp_dir();

    let err = downloader()
        .build()
        .download(
            &url(&server, "/private/hello-world.txt"),
            &destination(&dir, "hello-world.txt"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::TransferFailed { .. }), "{:?}", err);
    assert_directory_empty(dir.path());
}

#[tokio::test]
async fn test_connection_failure_leaves_nothing_behind() {
    let dir = create_temp_dir();

    let err = downloader()
        .build()
        .download("http://127.0.0.1:9/hello-world.txt", &destination(&dir, ""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::TransferFailed { .. }), "{:?}", err);
    assert_directory_empty(dir.path());
}

#[tokio::test]
async fn test_invalid_url() {
    let dir = create_temp_dir();
    let downloader = downloader().build();

    for source in ["not a url", "ftp://example.com/file.txt"] {
        let err = downloader
            .download(source, &destination(&dir, ""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)), "{:?}", err);
    }
    assert_directory_empty(dir.path());
}

#[tokio::test]
async fn test_fail_policy_rejects_existing_file() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let existing = create_file(&dir, "hello-world.txt", OLD_CONTENT);

    let err = downloader()
        .fail_if_exists()
        .temp_filename_generator(FixedName("TEMPFILE"))
        .build()
        .download(&url(&server, "/hello-world.txt"), &destination(&dir, "hello-world.txt"))
        .await
        .unwrap_err();

    match err {
        Error::FileExists { path } => assert_eq!(path, existing),
        e => panic!("Unexpected error: {:?}", e),
    }
    assert_file_content(&existing, OLD_CONTENT);
    assert!(!dir.path().join("TEMPFILE").exists());
}

#[tokio::test]
async fn test_fail_policy_rejects_inferred_existing_file() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let existing = create_file(&dir, "hello-world.txt", OLD_CONTENT);

    let err = downloader()
        .temp_filename_generator(FixedName("TEMPFILE"))
        .build()
        .download(&url(&server, "/hello-world.txt"), &destination(&dir, ""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::FileExists { .. }), "{:?}", err);
    assert_file_content(&existing, OLD_CONTENT);
    assert_eq!(list_directory(dir.path()), vec!["hello-world.txt"]);
}

#[tokio::test]
async fn test_skip_policy_keeps_existing_file() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let existing = create_file(&dir, "hello-world.txt", OLD_CONTENT);
    let downloader = downloader().skip_if_exists().build();

    for target in ["hello-world.txt", ""] {
        let summary = downloader
            .fetch(&url(&server, "/hello-world.txt"), &destination(&dir, target))
            .await
            .unwrap();

        assert_eq!(summary.status(), Status::Skipped);
        assert_eq!(summary.path(), existing);
        assert_file_content(&existing, OLD_CONTENT);
    }
    assert_eq!(list_directory(dir.path()), vec!["hello-world.txt"]);
}

#[tokio::test]
async fn test_skip_policy_is_idempotent() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let downloader = downloader().skip_if_exists().build();
    let source = url(&server, "/hello-world.txt");

    let first = downloader.fetch(&source, &destination(&dir, "")).await.unwrap();
    let second = downloader.fetch(&source, &destination(&dir, "")).await.unwrap();

    assert_eq!(first.status(), Status::Downloaded);
    assert_eq!(second.status(), Status::Skipped);
    assert_eq!(first.path(), second.path());
    assert_file_content(first.path(), HELLO_WORLD);
}

#[tokio::test]
async fn test_replace_policy_overwrites() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let downloader = downloader().replace_if_exists().build();

    for target in ["hello-world.txt", ""] {
        let existing = create_file(&dir, "hello-world.txt", OLD_CONTENT);

        let path = downloader
            .download(&url(&server, "/hello-world.txt"), &destination(&dir, target))
            .await
            .unwrap();

        assert_eq!(path, existing);
        assert_file_content(&path, HELLO_WORLD);
        assert_eq!(list_directory(dir.path()), vec!["hello-world.txt"]);
    }
}

#[tokio::test]
async fn test_update_policy_replaces_older_file() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let existing = create_file(&dir, "hello-world.txt", OLD_CONTENT);
    set_mtime(&existing, long_ago());

    let summary = downloader()
        .update_if_exists()
        .build()
        .fetch(&url(&server, "/hello-world.txt"), &destination(&dir, "hello-world.txt"))
        .await
        .unwrap();

    assert_eq!(summary.status(), Status::Downloaded);
    assert_file_content(&existing, HELLO_WORLD);
    assert_eq!(list_directory(dir.path()), vec!["hello-world.txt"]);
}

#[tokio::test]
async fn test_update_policy_keeps_newer_file() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let existing = create_file(&dir, "hello-world.txt", OLD_CONTENT);

    let summary = downloader()
        .update_if_exists()
        .build()
        .fetch(&url(&server, "/hello-world.txt"), &destination(&dir, "hello-world.txt"))
        .await
        .unwrap();

    assert_eq!(summary.status(), Status::NotModified);
    assert_eq!(summary.path(), existing);
    assert_file_content(&existing, OLD_CONTENT);
    assert_eq!(list_directory(dir.path()), vec!["hello-world.txt"]);
}

#[tokio::test]
async fn test_update_policy_when_server_ignores_condition() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let existing = create_file(&dir, "hello-world.txt", OLD_CONTENT);
    let downloader = downloader().update_if_exists().build();

    // Newer local copy: the response date wins over the ignored header.
    let summary = downloader
        .fetch(&url(&server, "/hello-world"), &destination(&dir, "hello-world.txt"))
        .await
        .unwrap();
    assert_eq!(summary.status(), Status::NotModified);
    assert_file_content(&existing, OLD_CONTENT);

    set_mtime(&existing, long_ago());
    let summary = downloader
        .fetch(&url(&server, "/hello-world"), &destination(&dir, "hello-world.txt"))
        .await
        .unwrap();
    assert_eq!(summary.status(), Status::Downloaded);
    assert_file_content(&existing, HELLO_WORLD);
    assert_eq!(list_directory(dir.path()), vec!["hello-world.txt"]);
}

#[tokio::test]
async fn test_update_policy_downloads_missing_file() {
    let server = fixture_server().await;
    let dir = create_temp_dir();

    let path = downloader()
        .clobber(ClobberPolicy::Update)
        .build()
        .download(&url(&server, "/hello-world.txt"), &destination(&dir, "hello-world.txt"))
        .await
        .unwrap();

    assert_file_content(&path, HELLO_WORLD);
}

#[tokio::test]
async fn test_update_policy_needs_a_filename() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let downloader = downloader().update_if_exists().build();

    let err = downloader
        .download(&url(&server, "/hello-world.txt"), &destination(&dir, ""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FilenameUnresolvable { .. }), "{:?}", err);
    assert_directory_empty(dir.path());

    // Even when the inferred file would exist.
    create_file(&dir, "hello-world.txt", OLD_CONTENT);
    let err = downloader
        .download(&url(&server, "/hello-world.txt"), &destination(&dir, ""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FilenameUnresolvable { .. }), "{:?}", err);
    assert_eq!(list_directory(dir.path()), vec!["hello-world.txt"]);
}

#[tokio::test]
async fn test_temp_file_is_cleaned_up_on_success() {
    let server = fixture_server().await;
    let dir = create_temp_dir();

    downloader()
        .temp_filename_generator(FixedName("TEMPFILE"))
        .build()
        .download(&url(&server, "/hello-world.txt"), &destination(&dir, ""))
        .await
        .unwrap();

    assert_eq!(list_directory(dir.path()), vec!["hello-world.txt"]);
}

#[tokio::test]
async fn test_temp_file_is_cleaned_up_on_failure() {
    let server = fixture_server().await;
    let dir = create_temp_dir();

    let result = downloader()
        .temp_filename_generator(FixedName("TEMPFILE"))
        .build()
        .download(&url(&server, "/missing.txt"), &destination(&dir, "missing.txt"))
        .await;

    assert!(result.is_err());
    assert_directory_empty(dir.path());
}

#[tokio::test]
async fn test_broken_body_keeps_existing_file() {
    init_tracing();
    let base = truncated_body_server(HELLO_WORLD).await;
    let dir = create_temp_dir();
    let existing = create_file(&dir, "hello-world.txt", OLD_CONTENT);
    let downloader = downloader()
        .replace_if_exists()
        .temp_filename_generator(FixedName("TEMPFILE"))
        .build();

    for target in ["hello-world.txt", ""] {
        let err = downloader
            .download(&format!("{}/hello-world.txt", base), &destination(&dir, target))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TransferFailed { .. }), "{:?}", err);
        assert_file_content(&existing, OLD_CONTENT);
        assert_eq!(list_directory(dir.path()), vec!["hello-world.txt"]);
    }
}

#[tokio::test]
async fn test_file_in_place_of_directory() {
    let server = fixture_server().await;
    let dir = create_temp_dir();
    let blocker = create_file(&dir, "blocker", OLD_CONTENT);
    let target = destination(&dir, "blocker/hello-world.txt");

    let err = downloader()
        .build()
        .download(&url(&server, "/hello-world.txt"), &target)
        .await
        .unwrap_err();
    match err {
        Error::DirectoryMissing { path } => assert_eq!(path, blocker),
        e => panic!("Unexpected error: {:?}", e),
    }

    let err = downloader()
        .allow_recursive_directory_creation()
        .build()
        .download(&url(&server, "/hello-world.txt"), &target)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::DirectoryCreateFailed { .. }), "{:?}", err);

    assert_file_content(&blocker, OLD_CONTENT);
    assert_eq!(list_directory(dir.path()), vec!["blocker"]);
}
