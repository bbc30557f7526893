use crate::config::registry::ServiceRegistry;
use crate::core::fetch::StatusFetcher;
use crate::core::poll::poll_all;
use crate::domain::model::ProbeResult;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::time::Duration;

pub const WATCH_INTERVAL: Duration = Duration::from_millis(2000);

/// Last-observed change key per service. Lives for the duration of one watch
/// run; only touched between poll cycles.
#[derive(Debug, Default)]
pub struct WatchState {
    prev: HashMap<String, Option<String>>,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the results whose change key differs from the last cycle,
    /// updating the state as it goes. A first observation always counts as
    /// changed. Errors store no key, so a recovery after an error cycle is
    /// reported even if the hash never moved.
    pub fn diff(&mut self, results: Vec<ProbeResult>) -> Vec<ProbeResult> {
        let mut changed = Vec::new();

        for result in results {
            let key = result.change_key().map(str::to_string);

            if self.prev.get(result.service()) != Some(&key) {
                self.prev.insert(result.service().to_string(), key);
                changed.push(result);
            }
        }

        changed
    }
}

/// Polls forever on a fixed interval, handing each batch of changed results
/// to `emit`. The second argument to `emit` is true for the first batch ever
/// emitted. Runs until the process is killed.
pub async fn watch<F>(
    fetcher: &StatusFetcher,
    services: &ServiceRegistry,
    environment: &str,
    mut emit: F,
) -> Result<()>
where
    F: FnMut(&[ProbeResult], bool),
{
    let mut state = WatchState::new();
    let mut first = true;

    loop {
        let results = poll_all(fetcher, services, environment).await?;
        let changed = state.diff(results);

        if !changed.is_empty() {
            emit(&changed, first);
            first = false;
        }

        tokio::time::sleep(WATCH_INTERVAL).await;
    }
}
