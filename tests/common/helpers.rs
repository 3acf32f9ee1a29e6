#![allow(dead_code)]

use landing::{DownloaderBuilder, FilenameGenerator};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

// Fixture contents
pub const HELLO_WORLD: &str = "Hello, World!";
pub const OLD_CONTENT: &str = "Old content!";
pub const WELCOME_HOME: &str = "Welcome home!";

/// `Last-Modified` of every fixture file.
pub const LAST_MODIFIED: &str = "Fri, 10 Jan 2014 00:00:00 GMT";

/// `Authorization` value accepted by `/private`.
pub const BASIC_AUTH: &str = "Basic Y2xpZW50OnNlY3JldA==";

/// `LAST_MODIFIED` as a `SystemTime`.
pub fn last_modified() -> SystemTime {
    httpdate::parse_http_date(LAST_MODIFIED).expect("Invalid fixture date")
}

/// A time well before every fixture was modified.
pub fn long_ago() -> SystemTime {
    last_modified() - Duration::from_secs(365 * 24 * 3600)
}

/// Serves a static file, answering `If-Modified-Since` with a 304 when the
/// file did not change since.
pub struct FixtureFile {
    body: &'static str,
}

impl FixtureFile {
    pub fn new(body: &'static str) -> Self {
        Self { body }
    }
}

impl Respond for FixtureFile {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let since = request
            .headers
            .get("if-modified-since")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| httpdate::parse_http_date(v).ok());

        match since {
            Some(since) if last_modified() <= since => ResponseTemplate::new(304),
            _ => ResponseTemplate::new(200)
                .insert_header("Last-Modified", LAST_MODIFIED)
                .set_body_bytes(self.body),
        }
    }
}

/// Routes library logs to the test output, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Starts a server exposing the test fixtures:
///
/// - `/` - a page without filename
/// - `/hello-world` - `text/plain`, ignores `If-Modified-Since`
/// - `/hello-world.txt` - a file honoring `If-Modified-Since`
/// - `/redirect` - two redirects ending at `/hello-world.txt`
/// - `/private/hello-world.txt` - redirects to `/hello-world.txt` when authorized, 403 otherwise
/// - `/content` - names itself through `Content-Disposition`
///
/// Anything else is a 404.
pub async fn fixture_server() -> MockServer {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(WELCOME_HOME, "text/html"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hello-world"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Last-Modified", LAST_MODIFIED)
                .set_body_raw(HELLO_WORLD, "text/plain"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hello-world.txt"))
        .respond_with(FixtureFile::new(HELLO_WORLD))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redirect"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("Location", "/redirect/hello-world.txt"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/redirect/hello-world.txt"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/hello-world.txt"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/private/hello-world.txt"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/hello-world.txt"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/private/hello-world.txt"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/content"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Content-Disposition",
                    "attachment; filename=\"hello-world.txt\"",
                )
                .set_body_bytes(HELLO_WORLD),
        )
        .mount(&server)
        .await;

    server
}

/// Starts a server answering every request with a `200` that announces ten
/// times the length of `body`, sends `body`, then closes the connection.
///
/// Returns the base URL.
pub async fn truncated_body_server(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let address = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n",
                body.len() * 10
            );
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(body.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", address)
}

/// Full URL of `path` on `server`.
pub fn url(server: &MockServer, path: &str) -> String {
    format!("{}{}", server.uri(), path)
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Destination string for `relative` inside `dir`, keeping any trailing separator.
pub fn destination(dir: &TempDir, relative: &str) -> String {
    format!("{}/{}", dir.path().display(), relative)
}

/// Writes `content` to `dir/relative` and returns the path
pub fn create_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(relative);
    fs::write(&file_path, content).expect("Failed to write file");
    file_path
}

/// Sets the modification time of `path`.
pub fn set_mtime(path: &Path, time: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .and_then(|file| file.set_modified(time))
        .expect("Failed to set modification time");
}

/// Builder with the console bar hidden
pub fn downloader() -> DownloaderBuilder {
    DownloaderBuilder::hidden()
}

/// Names of the entries of `dir`, sorted.
pub fn list_directory(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Asserts that `dir` contains nothing, temporary files included
pub fn assert_directory_empty(dir: &Path) {
    let entries = list_directory(dir);
    assert!(entries.is_empty(), "Directory {:?} should be empty, found {:?}", dir, entries);
}

/// Asserts that the file at `path` holds `expected`
pub fn assert_file_content(path: &Path, expected: &str) {
    let content = fs::read_to_string(path).expect("Failed to read file");
    assert_eq!(content, expected, "Content mismatch at path: {:?}", path);
}

/// Generator always returning the same name.
#[derive(Debug, Clone)]
pub struct FixedName(pub &'static str);

impl FilenameGenerator for FixedName {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}
