use crate::utils::error::{Result, StatusError};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Service name to URL template. BTreeMap keeps iteration order stable so
/// batches come out in the same order every run.
pub type ServiceRegistry = BTreeMap<String, String>;

const REGISTRY_FILE: &str = ".lbstatus";

pub fn default_services() -> ServiceRegistry {
    [
        ("player", "https://$domain.$tld/play"),
        ("dashboard", "https://$domain.$tld/org"),
        ("settings", "https://$domain.$tld/settings"),
        ("zodiac", "https://auth.$domain.$tld"),
        ("lookback-ultron", "https://graph.$svc_domain.$tld"),
        ("nebula", "https://join.$domain.$tld/session"),
        ("lookback-participate-web", "https://participate.$domain.$tld"),
        ("que", "https://que.$domain.$tld"),
        ("umar", "https://umar-segment.$svc_domain.$tld"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn registry_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(Path::new(&home).join(REGISTRY_FILE))
}

/// Loads the registry: `~/.lbstatus` if it exists, the built-in defaults
/// otherwise. A missing file is fine; any other read failure, or a malformed
/// line, is fatal.
pub fn load_services() -> Result<ServiceRegistry> {
    let Some(path) = registry_path() else {
        return Ok(default_services());
    };

    match std::fs::read_to_string(&path) {
        Ok(text) => parse_registry(&text, &path.display().to_string()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(default_services()),
        Err(err) => Err(StatusError::RegistryReadError {
            path: path.display().to_string(),
            reason: err.to_string(),
        }),
    }
}

pub fn parse_registry(text: &str, path: &str) -> Result<ServiceRegistry> {
    let mut services = ServiceRegistry::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((service, url)) = line.split_once('=') else {
            return Err(StatusError::RegistryParseError {
                path: path.to_string(),
                line_no: idx + 1,
                line: line.to_string(),
            });
        };

        services.insert(service.trim().to_string(), url.trim().to_string());
    }

    Ok(services)
}
