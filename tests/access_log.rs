use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router
};
use log::{LevelFilter, Log, Metadata, Record};
use tokio::{io::{AsyncReadExt, AsyncWriteExt}, net::{TcpListener, TcpStream}};
use tower::ServiceExt;

use users_service::{User, UserDirectory};
use users_service::server::{access_log::log_requests, build_router, serve};

struct Capture {
    lines: Mutex<Vec<String>>
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { lines: Mutex::new(Vec::new()) };
static INIT: Once = Once::new();

fn captured() -> &'static Capture {
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Info);
    });
    return &CAPTURE;
}

impl Capture {
    fn snapshot(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Access lines for requests to exactly `target`.
    fn access_lines(&self, method: &str, target: &str) -> Vec<String> {
        let prefix = format!("{} {} - ", method, target);
        self.snapshot()
            .into_iter()
            .filter(|line| line.starts_with(&prefix))
            .collect()
    }
}

fn elapsed_ms(line: &str) -> u128 {
    let (_, ms) = line.rsplit_once(" - ").unwrap();
    ms.parse().unwrap()
}

fn directory() -> Arc<UserDirectory> {
    Arc::new(UserDirectory::new(vec![
        User::new(1).with_field("name", "Ann"),
        User::new(2).with_field("name", "Bo"),
    ]))
}

async fn send(app: Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn one_line_per_request() {
    let capture = captured();

    let status = send(build_router(directory()), "/api/users?probe=one-line").await;
    assert_eq!(status, StatusCode::OK);

    let lines = capture.access_lines("GET", "/api/users?probe=one-line");
    assert_eq!(lines.len(), 1);
    elapsed_ms(&lines[0]);
}

#[tokio::test]
async fn unmatched_requests_are_logged() {
    let capture = captured();

    let status = send(build_router(directory()), "/nonexistent-probe").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(capture.access_lines("GET", "/nonexistent-probe").len(), 1);
}

#[tokio::test]
async fn every_request_gets_its_own_line() {
    let capture = captured();
    let app = build_router(directory());

    for _ in 0..3 {
        send(app.clone(), "/api/users/2?probe=repeat").await;
    }
    assert_eq!(capture.access_lines("GET", "/api/users/2?probe=repeat").len(), 3);
}

#[tokio::test]
async fn logged_after_handler_completes() {
    let capture = captured();

    let app = Router::new()
        .route("/slow-probe", get(|| async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            log::info!("handler finished /slow-probe");
            "done"
        }))
        .layer(middleware::from_fn(log_requests));

    assert_eq!(send(app, "/slow-probe").await, StatusCode::OK);

    let lines = capture.snapshot();
    let handler = lines.iter().position(|line| line == "handler finished /slow-probe").unwrap();
    let access = lines.iter().position(|line| line.starts_with("GET /slow-probe - ")).unwrap();
    assert!(handler < access);
    assert!(elapsed_ms(&lines[access]) >= 20);
}

#[tokio::test]
async fn serves_over_tcp() {
    let capture = captured();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, directory()));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"GET /api/users/2?probe=tcp HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.ends_with(r#"{"id":2,"name":"Bo"}"#));
    assert!(capture.snapshot().iter().any(|line| line == "Worker started"));
    assert_eq!(capture.access_lines("GET", "/api/users/2?probe=tcp").len(), 1);
}
