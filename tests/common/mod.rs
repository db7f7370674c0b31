//! Common fixtures for integration tests.

#![allow(dead_code)]

use launchpad::models::{LaunchLinks, Rocket, RocketLaunch};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LAUNCHES_PATH: &str = "/v3/launches";

/// A launch with predictable field values derived from `n`.
pub fn launch(n: u32) -> RocketLaunch {
    RocketLaunch {
        flight_number: n,
        mission_name: format!("Mission {}", n),
        launch_year: 2006 + n as i32,
        launch_date_utc: format!("{}-03-24T22:30:00.000Z", 2006 + n),
        rocket: Rocket {
            rocket_id: "falcon9".to_string(),
            rocket_name: "Falcon 9".to_string(),
            rocket_type: "FT".to_string(),
        },
        details: Some(format!("Details for flight {}", n)),
        launch_success: Some(n % 3 != 0),
        links: LaunchLinks::default(),
    }
}

pub fn launches(count: u32) -> Vec<RocketLaunch> {
    (1..=count).map(launch).collect()
}

/// The API's wire form of [`launch`]; the year is a string as the v3 API sends it.
pub fn launch_json(n: u32) -> Value {
    json!({
        "flight_number": n,
        "mission_name": format!("Mission {}", n),
        "launch_year": (2006 + n).to_string(),
        "launch_date_utc": format!("{}-03-24T22:30:00.000Z", 2006 + n),
        "rocket": {
            "rocket_id": "falcon9",
            "rocket_name": "Falcon 9",
            "rocket_type": "FT",
            "first_stage": {"cores": []}
        },
        "details": format!("Details for flight {}", n),
        "launch_success": n % 3 != 0,
        "links": {"mission_patch": null, "article_link": null},
        "upcoming": false
    })
}

pub fn launches_body(count: u32) -> Value {
    Value::Array((1..=count).map(launch_json).collect())
}

/// Serve `count` launches at `/v3/launches`, expecting exactly `expected_calls` requests.
pub async fn mount_launches(server: &MockServer, count: u32, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(LAUNCHES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(launches_body(count)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Serve a bare status code at `/v3/launches`.
pub async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(LAUNCHES_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream unavailable"))
        .mount(server)
        .await;
}

pub fn mission_names(launches: &[RocketLaunch]) -> Vec<String> {
    launches.iter().map(|l| l.mission_name.clone()).collect()
}
