use fleetroute_core::config::FleetAssumptions;
use fleetroute_hive::{app, db, state::AppState};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn_hive() -> String {
    spawn_hive_with(FleetAssumptions::default()).await
}

async fn spawn_hive_with(assumptions: FleetAssumptions) -> String {
    let pool = db::init_db("sqlite::memory:").await.unwrap();
    let state = Arc::new(AppState::new(pool, assumptions));

    let addr = SocketAddr::from(([127, 0, 0, 1], 0)); // Random port
    let listener = TcpListener::bind(addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

fn crossing_waypoints() -> Value {
    json!([
        { "name": "A", "lat": 40.70, "lng": -74.0 },
        { "name": "C", "lat": 40.80, "lng": -74.0 },
        { "name": "B", "lat": 40.75, "lng": -74.0 },
        { "name": "D", "lat": 40.85, "lng": -74.0 }
    ])
}

fn stop_names(waypoints: &Value) -> Vec<String> {
    waypoints
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/health", url)).send().await.unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let banner = client.get(&url).send().await.unwrap().text().await.unwrap();
    assert!(banner.contains("FleetRoute"));
}

#[tokio::test]
async fn test_optimize_route() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/optimize-route", url))
        .json(&json!({ "waypoints": crossing_waypoints() }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(stop_names(&body["optimizedWaypoints"]), vec!["A", "B", "C", "D"]);
    assert_eq!(body["optimizedWaypoints"][0]["sequence"], 1);
    assert_eq!(body["optimizationScore"].as_f64(), Some(95.0));
    assert_eq!(body["totalDistance"].as_f64(), Some(10.36));
    assert_eq!(body["fuelSavings"].as_f64(), Some(3.41));
}

#[tokio::test]
async fn test_optimize_route_with_assumption_override() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/optimize-route", url))
        .json(&json!({
            "waypoints": crossing_waypoints(),
            "assumptions": { "costPerGallon": 6.90 }
        }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["fuelSavings"].as_f64(), Some(6.81));
}

#[tokio::test]
async fn test_optimize_route_rejects_single_waypoint() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/optimize-route", url))
        .json(&json!({ "waypoints": [{ "name": "Solo", "lat": 1.0, "lng": 2.0 }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("At least 2 waypoints"));
}

#[tokio::test]
async fn test_strict_flag_rejects_out_of_range() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();
    let waypoints = json!([
        { "name": "Depot", "lat": 40.0, "lng": -74.0 },
        { "name": "Nowhere", "lat": 123.0, "lng": -74.0 }
    ]);

    let lenient = client
        .post(format!("{}/optimize-route", url))
        .json(&json!({ "waypoints": waypoints }))
        .send()
        .await
        .unwrap();
    assert_eq!(lenient.status(), 200);

    let strict = client
        .post(format!("{}/optimize-route", url))
        .json(&json!({ "waypoints": waypoints, "strict": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(strict.status(), 400);
    let body: Value = strict.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Nowhere"));
}

#[tokio::test]
async fn test_register_and_fetch_route() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();
    let payload = json!({ "name": "Morning Loop", "waypoints": crossing_waypoints() });

    let first: Value = client
        .post(format!("{}/routes", url))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["isNew"], true);
    assert_eq!(first["result"]["optimizationScore"].as_f64(), Some(95.0));
    let route_id = first["routeId"].as_str().unwrap().to_string();

    // Same stops again: existing route, nothing new stored.
    let second: Value = client
        .post(format!("{}/routes", url))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["isNew"], false);
    assert_eq!(second["routeId"], route_id.as_str());

    let stored: Value = client
        .get(format!("{}/routes/{}", url, route_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stored["name"], "Morning Loop");
    assert_eq!(stop_names(&stored["waypoints"]), vec!["A", "B", "C", "D"]);
    assert_eq!(stored["baselineDistance"].as_f64(), Some(17.27));

    let listed: Value = client
        .get(format!("{}/routes", url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["routeId"], route_id.as_str());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let url = spawn_hive().await;
    let resp = reqwest::get(format!("{}/routes/does-not-exist", url))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_sample_batch_is_persisted() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/routes/samples", url))
        .json(&json!({ "region": "seattle", "count": 3, "stops": 5, "seed": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert!(!body["batchId"].as_str().unwrap().is_empty());
    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 3);
    for entry in routes {
        assert!(entry["name"].as_str().unwrap().starts_with("Seattle Route"));
        let score = entry["optimizationScore"].as_f64().unwrap();
        assert!((70.0..=95.0).contains(&score));
    }

    let route_id = routes[0]["routeId"].as_str().unwrap();
    let stored: Value = client
        .get(format!("{}/routes/{}", url, route_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stored["waypoints"].as_array().unwrap().len(), 5);

    let listed: Value = client
        .get(format!("{}/routes?limit=2", url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_sample_batch_rejects_unknown_region() {
    let url = spawn_hive().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/routes/samples", url))
        .json(&json!({ "region": "atlantis" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_partial_assumptions_keep_server_values() {
    // Server fleet pays double for fuel; the request only doubles mpg.
    let url = spawn_hive_with(FleetAssumptions {
        cost_per_gallon: 6.90,
        ..Default::default()
    })
    .await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(format!("{}/optimize-route", url))
        .json(&json!({
            "waypoints": crossing_waypoints(),
            "assumptions": { "avgMpg": 14.0 }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["fuelSavings"].as_f64(), Some(3.41));

    let server_only: Value = client
        .post(format!("{}/optimize-route", url))
        .json(&json!({ "waypoints": crossing_waypoints() }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(server_only["fuelSavings"].as_f64(), Some(6.81));
}

#[tokio::test]
async fn test_overflowing_coordinates_are_not_reported_as_stored() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/routes", url))
        .json(&json!({
            "name": "Overflow",
            "waypoints": [
                { "name": "A", "lat": 1e308, "lng": 0.0 },
                { "name": "B", "lat": -1e308, "lng": 0.0 },
                { "name": "C", "lat": 1.0, "lng": 1.0 }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("not finite"));

    let listed: Value = client
        .get(format!("{}/routes", url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_sample_batch_rejects_too_many_stops() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/routes/samples", url))
        .json(&json!({ "stops": 101 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("stops"));

    let at_limit = client
        .post(format!("{}/routes/samples", url))
        .json(&json!({ "count": 1, "stops": 100, "seed": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(at_limit.status(), 200);
}

#[tokio::test]
async fn test_list_limit_is_clamped() {
    let url = spawn_hive().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/routes/samples", url))
        .json(&json!({ "count": 3, "stops": 4, "seed": 21 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let count_for = |limit: &'static str| {
        let client = client.clone();
        let url = url.clone();
        async move {
            let listed: Value = client
                .get(format!("{}/routes?limit={}", url, limit))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            listed.as_array().unwrap().len()
        }
    };

    // Zero and negative limits are raised to one.
    assert_eq!(count_for("0").await, 1);
    assert_eq!(count_for("-5").await, 1);
    // Oversized limits are capped, not rejected.
    assert_eq!(count_for("100000").await, 3);
    assert_eq!(count_for("2").await, 2);
}
