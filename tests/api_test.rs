//! Integration tests for the dashboard HTTP API.
//! Mounts the full router on an ephemeral port and drives it with reqwest.

use debriefd::{
    config::ServerConfig,
    store::{MemoryStore, RecordStore},
    AppContext,
};
use std::sync::Arc;

/// Bind the router to 127.0.0.1:0 and serve it in the background.
/// Returns the base URL. The listener is bound before returning, so
/// requests never race the server start.
async fn spawn_server(config: ServerConfig, store: Arc<dyn RecordStore>) -> String {
    let ctx = Arc::new(AppContext::new(config, store));
    let router = debriefd::rest::build_router(ctx);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

async fn seeded_server() -> String {
    spawn_server(ServerConfig::default(), Arc::new(MemoryStore::seeded())).await
}

async fn empty_server() -> String {
    spawn_server(ServerConfig::default(), Arc::new(MemoryStore::new())).await
}

#[tokio::test]
async fn test_current_interview_returns_seeded_record() {
    let base = seeded_server().await;
    let resp = reqwest::get(format!("{base}/api/current-interview"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["title"], "Interview with Sarah Johnson");
    assert_eq!(json["position"], "Software Engineer Position");
    assert_eq!(json["sentiment"]["positive"], 75);
    assert_eq!(json["sentiment"]["neutral"], 15);
    assert_eq!(json["sentiment"]["negative"], 10);
    assert_eq!(json["improvementAreas"].as_array().unwrap().len(), 3);
    assert_eq!(json["commonQuestions"].as_array().unwrap().len(), 3);
    assert!(
        json.get("id").is_none(),
        "live record must not carry an id"
    );
    assert!(
        json.get("imagePath").is_none(),
        "live record must not carry an imagePath"
    );
}

#[tokio::test]
async fn test_current_interview_404_when_store_empty() {
    let base = empty_server().await;
    let resp = reqwest::get(format!("{base}/api/current-interview"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "No current interview data available.");
}

#[tokio::test]
async fn test_history_lists_summaries_without_heavy_fields() {
    let base = seeded_server().await;
    let resp = reqwest::get(format!("{base}/api/history")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "history12");
    assert_eq!(entries[0]["title"], "Interview with John Doe");
    assert_eq!(entries[0]["imagePath"], "/images/HISTORY12.jpg");
    assert!(
        entries[0].get("sentiment").is_none(),
        "summaries must not expose sentiment"
    );
    assert!(
        entries[0].get("transcript").is_none(),
        "summaries must not expose the transcript"
    );
}

#[tokio::test]
async fn test_history_is_empty_array_not_error_when_no_entries() {
    let base = empty_server().await;
    let resp = reqwest::get(format!("{base}/api/history")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_every_listed_history_id_resolves_to_a_full_record() {
    let base = seeded_server().await;

    // Grow the history a little first.
    let client = reqwest::Client::new();
    client
        .post(format!("{base}/api/new-analysis"))
        .send()
        .await
        .unwrap();

    let listed: serde_json::Value = reqwest::get(format!("{base}/api/history"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for entry in listed.as_array().unwrap() {
        let id = entry["id"].as_str().unwrap();
        let detail: serde_json::Value = reqwest::get(format!("{base}/api/history/{id}"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(detail["id"], entry["id"]);
        assert!(
            detail.get("sentiment").is_some(),
            "detail view carries the full record"
        );
        assert!(detail.get("transcript").is_some());
    }
}

#[tokio::test]
async fn test_history_detail_404_for_unknown_id() {
    let base = seeded_server().await;
    let resp = reqwest::get(format!("{base}/api/history/no-such-interview"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "Historical interview not found.");
}

#[tokio::test]
async fn test_new_analysis_archives_current_and_installs_placeholder() {
    let base = seeded_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/new-analysis"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        json["message"],
        "Ready for new analysis. Previous data moved to history."
    );
    assert_eq!(json["currentInterviewData"]["title"], "New Interview Analysis");

    // The archived record leads the history, image dropped.
    let history: serde_json::Value = reqwest::get(format!("{base}/api/history"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["title"], "Interview with Sarah Johnson");
    assert!(entries[0]["id"].as_str().unwrap().starts_with("interview-"));
    assert!(entries[0].get("imagePath").is_none());
    assert_eq!(entries[1]["id"], "history12");

    // The live record is now the placeholder.
    let current: serde_json::Value = reqwest::get(format!("{base}/api/current-interview"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current["position"], "Pending Analysis");
    assert_eq!(current["sentiment"]["positive"], 0);
    assert_eq!(current["sentiment"]["neutral"], 0);
    assert_eq!(current["sentiment"]["negative"], 0);
    assert_eq!(current["improvementAreas"], serde_json::json!([]));
    assert_eq!(current["commonQuestions"], serde_json::json!([]));
}

#[tokio::test]
async fn test_rapid_transitions_assign_distinct_ids() {
    let base = seeded_server().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let resp = client
            .post(format!("{base}/api/new-analysis"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let history: serde_json::Value = reqwest::get(format!("{base}/api/history"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<&str> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 3, "seed entry plus two archives");

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len(), "archive ids must be distinct: {ids:?}");
}

#[tokio::test]
async fn test_new_analysis_on_empty_store_creates_no_history() {
    let base = empty_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/new-analysis"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        json["message"],
        "Ready for new analysis. Previous data moved to history."
    );

    let history: serde_json::Value = reqwest::get(format!("{base}/api/history"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history, serde_json::json!([]));

    // But the placeholder is now current.
    let resp = reqwest::get(format!("{base}/api/current-interview"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_catalog_endpoints_are_schema_stable() {
    let base = empty_server().await;

    let skills: serde_json::Value = reqwest::get(format!("{base}/api/youtube-skills"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let skills = skills.as_array().unwrap();
    assert_eq!(skills.len(), 10);
    for link in skills {
        assert!(link["name"].is_string());
        assert!(link["url"].as_str().unwrap().starts_with("https://www.youtube.com/"));
    }

    let pricing: serde_json::Value = reqwest::get(format!("{base}/api/pricing"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pricing["url"], "https://www.example.com/pricing");

    let resources: serde_json::Value =
        reqwest::get(format!("{base}/api/performance-resources"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    let resources = resources.as_array().unwrap();
    assert_eq!(resources.len(), 3);
    assert_eq!(resources[0]["title"], "Article: Mastering Behavioral Interviews");
    for res in resources {
        assert!(res["url"].as_str().unwrap().starts_with("https://www.example.com/"));
    }
}

#[tokio::test]
async fn test_export_report_is_a_plain_text_attachment() {
    let base = seeded_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/export-report"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert_eq!(content_type, "text/plain; charset=utf-8");

    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert_eq!(
        disposition,
        "attachment; filename=\"Interview_Report.txt\""
    );

    // The body is the pretty-printed record.
    let body = resp.text().await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["title"], "Interview with Sarah Johnson");
    assert!(body.contains('\n'), "report body is pretty-printed");
}

#[tokio::test]
async fn test_export_report_404_when_store_empty() {
    let base = empty_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/export-report"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "No current interview data available.");
}

#[tokio::test]
async fn test_health_endpoint_response_fields() {
    let base = seeded_server().await;
    let resp = reqwest::get(format!("{base}/api/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "ok", "status should be 'ok'");
    assert_eq!(
        json["version"].as_str().unwrap(),
        env!("CARGO_PKG_VERSION"),
        "version should match CARGO_PKG_VERSION"
    );
    assert!(json["uptimeSecs"].is_number(), "uptimeSecs should be a number");
    assert_eq!(json["historyEntries"], 1);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let base = seeded_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/history"))
        .header("origin", "http://dashboard.example")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .expect("CORS header missing")
            .to_str()
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_images_served_from_configured_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("HISTORY12.jpg"), b"fake-jpeg-bytes").unwrap();

    let config = ServerConfig {
        images_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let base = spawn_server(config, Arc::new(MemoryStore::seeded())).await;

    let resp = reqwest::get(format!("{base}/images/HISTORY12.jpg"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.bytes().await.unwrap().as_ref(), b"fake-jpeg-bytes");

    let missing = reqwest::get(format!("{base}/images/nope.jpg")).await.unwrap();
    assert_eq!(missing.status(), 404);
}
