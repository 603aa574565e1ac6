use serial_test::serial;
use std::sync::Arc;

mod common;

// NOTE: create_router() reads identity configuration from the process
// environment. Tests are serial so the ones that override STATS_* variables
// cannot race the others.

#[tokio::test]
#[serial]
async fn plain_is_the_default_format() {
    // ---
    common::setup_test_env();
    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/stats"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let body = res.text().await.unwrap();

    // The request-counting layer guarantees at least one stat exists, and
    // this very request is already counted.
    let line = body
        .lines()
        .find(|line| line.starts_with("num_http_requests="))
        .expect("request counter should be listed");
    let count: i64 = line
        .split_once('=')
        .unwrap()
        .1
        .parse()
        .expect("counter value should be numeric");
    assert!(count >= 1);

    // Every line is a name=value pair
    for line in body.lines() {
        assert!(line.contains('='), "malformed line: {line}");
    }
}

#[tokio::test]
#[serial]
async fn filtered_stats_preserve_request_order() {
    // ---
    common::setup_test_env();
    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/stats?stats=num_http_requests,does_not_exist"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let body = res.text().await.unwrap();
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("num_http_requests="));
    assert_eq!(
        lines[1],
        "does_not_exist=stat 'does_not_exist' is not registered"
    );
}

#[tokio::test]
#[serial]
async fn empty_filter_entries_are_dropped() {
    // ---
    common::setup_test_env();
    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/stats?stats=,num_http_requests,"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let body = res.text().await.unwrap();
    assert_eq!(body.lines().count(), 1);
    assert!(body.starts_with("num_http_requests="));
}

#[tokio::test]
#[serial]
async fn json_format_is_an_array_of_single_key_objects() {
    // ---
    common::setup_test_env();
    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/stats?format=json&stats=num_http_requests,ghost"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("application/json"));

    let parsed: serde_json::Value = res.json().await.unwrap();
    let entries = parsed.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(entry.as_object().unwrap().len(), 1);
    }
    assert!(entries[0]["num_http_requests"].is_i64());
    assert_eq!(entries[1]["ghost"], "stat 'ghost' is not registered");
}

#[tokio::test]
#[serial]
async fn unknown_format_falls_back_to_plain() {
    // ---
    common::setup_test_env();
    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/stats?format=yaml"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

#[tokio::test]
#[serial]
async fn monitor_format_emits_tagged_gauge_datapoints() {
    // ---
    common::setup_test_env();
    std::env::set_var("STATS_LOCAL_IP", "127.0.0.1");

    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/stats?format=monitor"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let parsed: serde_json::Value = res.json().await.unwrap();
    let points = parsed.as_array().unwrap();
    assert!(!points.is_empty(), "registry has at least the request counter");

    for point in points {
        assert_eq!(point["endpoint"], "127.0.0.1:19779");
        assert_eq!(point["step"], 60);
        assert_eq!(point["counterType"], "GAUGE");
        assert_eq!(point["metric"], "pv");
        assert!(point["value"].is_i64());

        let timestamp = point["timestamp"].as_i64().unwrap();
        assert_eq!(timestamp % 60, 0, "timestamp must sit on a minute boundary");

        let tags = point["tags"].as_str().unwrap();
        assert!(tags.starts_with("project=nebula,city=jd,ip_port=127.0.0.1:19779,module=graphd"));
        assert!(tags.contains(",type="));
    }

    std::env::remove_var("STATS_LOCAL_IP");
}

#[tokio::test]
#[serial]
async fn monitor_format_with_invalid_ip_returns_the_failure_text() {
    // ---
    common::setup_test_env();
    std::env::set_var("STATS_LOCAL_IP", "bad ip");

    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/stats?format=monitor"))
        .send()
        .await
        .unwrap();

    // Status stays 200 for wire compatibility; the body carries the message.
    assert_eq!(res.status().as_u16(), 200);

    let body = res.text().await.unwrap();
    assert_eq!(body, "invalid host or ip: 'bad ip'");

    std::env::remove_var("STATS_LOCAL_IP");
}

#[tokio::test]
#[serial]
async fn post_to_stats_is_method_not_allowed() {
    // ---
    common::setup_test_env();
    let server = common::TestServer::new().await;

    let res = server
        .client
        .post(server.url("/stats"))
        .body("ignored payload")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 405);
}

#[tokio::test]
#[serial]
async fn health_and_root_respond() {
    // ---
    common::setup_test_env();
    let server = common::TestServer::new().await;

    let health = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap();
    assert!(health.status().is_success());
    let health_body: serde_json::Value = health.json().await.unwrap();
    assert_eq!(health_body["status"], "ok");

    let root = server.client.get(server.url("/")).send().await.unwrap();
    assert!(root.status().is_success());
    let root_body = root.text().await.unwrap();
    assert!(root_body.contains("/stats"));
}

#[tokio::test]
#[serial]
async fn stats_endpoint_survives_load() {
    // ---
    common::setup_test_env();
    let server = Arc::new(common::TestServer::new().await);

    // Generate some concurrent load across formats
    let futures = (0..20).map(|i| {
        let server = Arc::clone(&server);
        async move {
            let endpoint = match i % 3 {
                0 => "/stats",
                1 => "/stats?format=json",
                _ => "/stats?stats=num_http_requests",
            };
            server.client.get(server.url(endpoint)).send().await
        }
    });

    let responses = futures::future::join_all(futures).await;

    for (i, response) in responses.into_iter().enumerate() {
        // ---
        let response = response.unwrap_or_else(|_| panic!("Request {i} should succeed"));
        assert!(
            response.status().is_success(),
            "Request {i} should return success"
        );
    }

    // The counter saw every request above, plus this read itself
    let res = server
        .client
        .get(server.url("/stats?stats=num_http_requests"))
        .send()
        .await
        .unwrap();
    let body = res.text().await.unwrap();
    let count: i64 = body
        .trim_end()
        .split_once('=')
        .unwrap()
        .1
        .parse()
        .unwrap();
    assert!(count >= 21);
}
