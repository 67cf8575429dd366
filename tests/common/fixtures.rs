//! Comic fixtures and mock server helpers

use clap::Parser;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xkcd_dl::cli::Cli;

/// Bytes served as a comic image
pub const IMAGE_BYTES: &[u8] = b"GIF89a fake image payload";

/// Metadata body shaped like the real service response
pub fn comic_body(num: u32, title: &str, img: &str) -> Value {
    json!({
        "month": "1",
        "num": num,
        "link": "",
        "year": "2009",
        "news": "",
        "safe_title": title,
        "transcript": "",
        "alt": "Some people will never understand.",
        "img": img,
        "title": title,
        "day": "5"
    })
}

/// Mount a metadata response at `route`, expected to be hit exactly once
pub async fn mount_metadata(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Parse CLI arguments pointed at the mock server
pub fn cli_for(server: &MockServer, args: &[&str]) -> Cli {
    let base_url = server.uri();
    let mut argv = vec!["xkcd-dl", "--base-url", base_url.as_str()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

/// Address nothing is listening on
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
