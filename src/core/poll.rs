use crate::config::registry::ServiceRegistry;
use crate::core::fetch::StatusFetcher;
use crate::domain::model::ProbeResult;
use crate::utils::error::Result;

/// Probes every service concurrently and waits for all of them. Individual
/// probe failures are data, not errors; the batch always has one entry per
/// service. Only a fatal commit-lookup failure aborts the batch.
pub async fn poll_all(
    fetcher: &StatusFetcher,
    services: &ServiceRegistry,
    environment: &str,
) -> Result<Vec<ProbeResult>> {
    let mut handles = Vec::with_capacity(services.len());

    for (service, template) in services {
        let fetcher = fetcher.clone();
        let service = service.clone();
        let template = template.clone();
        let environment = environment.to_string();

        handles.push((
            service.clone(),
            tokio::spawn(async move { fetcher.fetch(&service, &template, &environment).await }),
        ));
    }

    let mut results = Vec::with_capacity(handles.len());

    for (service, handle) in handles {
        match handle.await {
            Ok(Ok(result)) => results.push(result),
            Ok(Err(err)) => return Err(err),
            Err(err) => results.push(ProbeResult::Error {
                service,
                message: format!("probe task failed: {err}"),
            }),
        }
    }

    Ok(results)
}
