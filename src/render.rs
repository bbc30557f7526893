use crate::config::registry::ServiceRegistry;
use crate::domain::model::{CommitInfo, ProbeResult};
use chrono::Local;

const SEPARATOR_WIDTH: usize = 132;
const COMMIT_MSG_MAX: usize = 60;

pub fn print_batch(results: &[ProbeResult], environment: &str) {
    let lines: Vec<String> = results
        .iter()
        .map(|res| format_result(res, environment))
        .collect();
    println!("{}", lines.join("\n"));
}

pub fn print_separator() {
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

pub fn format_result(result: &ProbeResult, environment: &str) -> String {
    let prefix = format!("[{}] ", Local::now().format("%H:%M:%S"));

    match result {
        ProbeResult::Success {
            service,
            git_hash,
            uptime,
            commit,
        } => {
            let hash = git_hash
                .as_deref()
                .map(|h| format!(" {}", h.chars().take(8).collect::<String>()))
                .unwrap_or_default();
            let commit = commit
                .as_ref()
                .map(|c| format!("{:<65}", format_commit(c)))
                .unwrap_or_default();
            let uptime = uptime.map(human_time_of).unwrap_or_else(|| "-".to_string());

            format!("{prefix}{service:<30} {environment}{hash} {commit}uptime: {uptime}")
        }
        ProbeResult::Error { service, message } => {
            format!("{prefix}{service:<10}\t{message}")
        }
    }
}

/// Prints the registry, either aligned for reading or as `name=template`
/// lines ready to paste into ~/.lbstatus.
pub fn print_services(services: &ServiceRegistry, bootstrap: bool) {
    for (name, url) in services {
        if bootstrap {
            println!("{name}={url}");
        } else {
            println!("{name:<30} {url}");
        }
    }
}

pub fn format_commit(commit: &CommitInfo) -> String {
    let first_line = commit.message.lines().next().unwrap_or("");
    let msg = truncate(first_line, COMMIT_MSG_MAX);
    let author = initials(&commit.author.name).to_lowercase();
    format!("{author}: {msg}")
}

pub fn human_time_of(sec: u64) -> String {
    if sec < 60 {
        format!("{sec}s")
    } else if sec < 60 * 60 {
        format!("{}m {}s", sec / 60, sec % 60)
    } else if sec < 60 * 60 * 24 {
        format!("{}h {}m", sec / 60 / 60, (sec / 60) % 60)
    } else {
        format!("{}d", sec / 60 / 60 / 24)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('…');
        out
    } else {
        s.to_string()
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
