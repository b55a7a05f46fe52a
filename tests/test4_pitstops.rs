mod common;

use pitwall::Season;
use serde_json::json;
use tracing_test::traced_test;
use wiremock::MockServer;

use common::{client_for, envelope, mount_json, mount_status, pit_stops_2023_round_1, race_header};

#[tokio::test]
async fn stops_come_back_in_order() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/2023/1/drivers/alonso/pitstops.json",
        pit_stops_2023_round_1("alonso"),
    )
    .await;

    let stops = client_for(&server)
        .pit_stops(&Season::Year(2023), "1", "alonso")
        .await
        .expect("stops should be present");

    assert_eq!(stops.len(), 2);
    assert!(stops.iter().all(|s| s.driver_id == "alonso"));
    assert_eq!(stops[0].stop, "1");
    assert!(stops[0].lap_number() < stops[1].lap_number());
}

#[tokio::test]
async fn no_stops_answered_with_error_status_is_absent() {
    let server = MockServer::start().await;
    mount_status(&server, "/2023/1/drivers/stroll/pitstops.json", 404).await;

    let stops = client_for(&server)
        .pit_stops(&Season::Year(2023), "1", "stroll")
        .await;
    assert!(stops.is_none());
}

#[tokio::test]
async fn empty_stop_list_is_absent() {
    let server = MockServer::start().await;
    let mut race = race_header(1);
    race["PitStops"] = json!([]);
    let body = envelope(json!({"RaceTable": {"season": "2023", "round": "1", "Races": [race]}}));
    mount_json(&server, "/2023/1/drivers/stroll/pitstops.json", body).await;

    let stops = client_for(&server)
        .pit_stops(&Season::Year(2023), "1", "stroll")
        .await;
    assert!(stops.is_none());
}

#[tokio::test]
#[traced_test]
async fn zero_stop_status_is_not_escalated() {
    let server = MockServer::start().await;
    mount_status(&server, "/2023/1/drivers/stroll/pitstops.json", 404).await;

    let stops = client_for(&server)
        .pit_stops(&Season::Year(2023), "1", "stroll")
        .await;

    assert!(stops.is_none());
    assert!(logs_contain("no pit stops recorded"));
    assert!(!logs_contain("stats data unavailable"));
}

#[tokio::test]
#[traced_test]
async fn error_status_elsewhere_warns() {
    let server = MockServer::start().await;
    mount_status(&server, "/2023/1/results.json", 404).await;

    let race = client_for(&server)
        .race_results(&Season::Year(2023), "1")
        .await;

    assert!(race.is_none());
    assert!(logs_contain("stats data unavailable"));
}

#[tokio::test]
#[traced_test]
async fn pit_stop_response_without_envelope_warns() {
    let server = MockServer::start().await;
    mount_json(&server, "/2023/1/drivers/stroll/pitstops.json", json!({"data": []})).await;

    let stops = client_for(&server)
        .pit_stops(&Season::Year(2023), "1", "stroll")
        .await;

    assert!(stops.is_none());
    assert!(logs_contain("stats data unavailable"));
    assert!(!logs_contain("no pit stops recorded"));
}

#[tokio::test]
#[traced_test]
async fn pit_stop_response_without_race_table_warns() {
    let server = MockServer::start().await;
    mount_json(&server, "/2023/1/drivers/stroll/pitstops.json", envelope(json!({}))).await;

    let stops = client_for(&server)
        .pit_stops(&Season::Year(2023), "1", "stroll")
        .await;

    assert!(stops.is_none());
    assert!(logs_contain("stats data unavailable"));
}

#[tokio::test]
#[traced_test]
async fn empty_race_list_is_not_escalated() {
    let server = MockServer::start().await;
    let body = envelope(json!({"RaceTable": {"season": "2023", "round": "1", "Races": []}}));
    mount_json(&server, "/2023/1/drivers/stroll/pitstops.json", body).await;

    let stops = client_for(&server)
        .pit_stops(&Season::Year(2023), "1", "stroll")
        .await;

    assert!(stops.is_none());
    assert!(logs_contain("no pit stops recorded"));
    assert!(!logs_contain("stats data unavailable"));
}
