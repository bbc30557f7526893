const PING_ENDPOINT: &str = "/ping";

/// Expands a service URL template into the full health-check URL for an
/// environment. Each of `$tld`, `$domain` and `$svc_domain` is substituted
/// once; unknown placeholders are left as-is.
pub fn expand(template: &str, environment: &str) -> String {
    let tld = if environment == "testing" { "com" } else { "io" };
    // player.testing.lookback.com, ...
    let domain = if environment == "production" {
        "lookback".to_string()
    } else {
        format!("{environment}.lookback")
    };
    // graph.svc.testing.lookback.com, ...
    let svc_domain = format!("svc.{environment}.lookback");

    let expanded = template
        .replacen("$tld", tld, 1)
        .replacen("$svc_domain", &svc_domain, 1)
        .replacen("$domain", &domain, 1);

    format!("{expanded}{PING_ENDPOINT}")
}
