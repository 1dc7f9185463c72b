#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use fontsync::domain::SyncConfig;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";

/// A mock Google Fonts API plus a scratch directory holding the local snapshot.
///
/// The client under test is blocking, so the mock server lives on its own
/// runtime and requests are made outside of `block_on`.
pub struct TestEnv {
    pub server: MockServer,
    pub rt: Runtime,
    _tmp: TempDir,
    pub catalog: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let rt = Runtime::new().expect("tokio runtime");
        let server = rt.block_on(MockServer::start());
        let tmp = TempDir::new().expect("create temp dir");
        let catalog = tmp.path().join("google_fonts.json");
        Self {
            server,
            rt,
            _tmp: tmp,
            catalog,
        }
    }

    pub fn config(&self, api_key: Option<&str>, dry_run: bool) -> SyncConfig {
        SyncConfig {
            api_key: api_key.map(str::to_string),
            repository: Some("acme/app".to_string()),
            task_name: Some("Update Google Font".to_string()),
            script_name: "fontsync".to_string(),
            catalog_path: self.catalog.clone(),
            api_base_url: self.server.uri(),
            dry_run,
        }
    }

    pub fn write_local(&self, doc: &Value) {
        fs::write(&self.catalog, serde_json::to_string(doc).unwrap()).expect("write local catalog");
    }

    pub fn read_local(&self) -> Value {
        serde_json::from_str(&fs::read_to_string(&self.catalog).expect("read local catalog"))
            .expect("local catalog is json")
    }

    pub fn respond_with(&self, template: ResponseTemplate) {
        self.rt.block_on(
            Mock::given(method("GET"))
                .and(path("/webfonts/v1/webfonts"))
                .and(query_param("key", API_KEY))
                .respond_with(template)
                .mount(&self.server),
        );
    }

    pub fn respond_json(&self, doc: &Value) {
        self.respond_with(ResponseTemplate::new(200).set_body_json(doc));
    }

    pub fn request_count(&self) -> usize {
        self.rt
            .block_on(self.server.received_requests())
            .map(|reqs| reqs.len())
            .unwrap_or(0)
    }
}

pub fn catalog_doc(entries: &[(&str, &str, &str)]) -> Value {
    let items: Vec<Value> = entries
        .iter()
        .map(|(family, version, date)| {
            json!({
                "family": family,
                "variants": ["regular"],
                "subsets": ["latin"],
                "version": version,
                "lastModified": date,
                "category": "sans-serif",
            })
        })
        .collect();
    json!({ "kind": "webfonts#webfontList", "items": items })
}
