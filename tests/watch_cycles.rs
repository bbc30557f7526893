use httpmock::prelude::*;
use lbstatus::{poll_all, NoCommitLookup, ServiceRegistry, StatusFetcher, WatchState};
use std::sync::Arc;

fn json_ping(version: &str) -> String {
    format!(r#"{{"version":"{version}"}}"#)
}

#[tokio::test]
async fn test_watch_cycles_report_only_changes() {
    let server = MockServer::start();
    let fetcher = StatusFetcher::new(Arc::new(NoCommitLookup)).unwrap();

    let mut services = ServiceRegistry::new();
    services.insert("player".to_string(), server.base_url());

    let mut state = WatchState::new();

    // cycle 1: first observation always counts as a change
    let mut ping = server.mock(|when, then| {
        when.method(GET).path("/ping");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(json_ping("aaa111"));
    });
    let results = poll_all(&fetcher, &services, "production").await.unwrap();
    assert_eq!(state.diff(results).len(), 1);

    // cycle 2: same hash, nothing to report
    let results = poll_all(&fetcher, &services, "production").await.unwrap();
    assert!(state.diff(results).is_empty());

    // cycle 3: new deploy shows up
    ping.delete();
    ping = server.mock(|when, then| {
        when.method(GET).path("/ping");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(json_ping("bbb222"));
    });
    let results = poll_all(&fetcher, &services, "production").await.unwrap();
    let changed = state.diff(results);
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].change_key(), Some("bbb222"));

    // cycle 4: service goes down, the failure itself is a change
    ping.delete();
    ping = server.mock(|when, then| {
        when.method(GET).path("/ping");
        then.status(500);
    });
    let results = poll_all(&fetcher, &services, "production").await.unwrap();
    assert_eq!(state.diff(results).len(), 1);

    // cycle 5: back up with the same hash as before the outage, reported again
    ping.delete();
    server.mock(|when, then| {
        when.method(GET).path("/ping");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(json_ping("bbb222"));
    });
    let results = poll_all(&fetcher, &services, "production").await.unwrap();
    let changed = state.diff(results);
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].change_key(), Some("bbb222"));
}
