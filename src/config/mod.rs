pub mod registry;

use clap::Parser;

/// Overview of deployed commits in Lookback's micro services.
#[derive(Debug, Clone, Parser)]
#[command(name = "lbstatus")]
#[command(about = "A tool for getting an overview of deployed commits in Lookback's micro services")]
pub struct CliArgs {
    /// Environment to check, usually "testing" or "production". "-" means default.
    #[arg(value_name = "environment")]
    pub environment: Option<String>,

    /// Only check this service (the name of its GitHub repo).
    #[arg(value_name = "service")]
    pub service: Option<String>,

    /// Keep polling and print only services whose deployed commit changed.
    #[arg(short, long)]
    pub watch: bool,

    /// Print the list of services checked and exit.
    #[arg(short, long)]
    pub list: bool,

    /// With --list, print in a format suitable for ~/.lbstatus.
    #[arg(short, long)]
    pub bootstrap: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Resolved environment: a literal "-" (or nothing) means the default.
    pub fn environment(&self) -> &str {
        match self.environment.as_deref() {
            None | Some("-") => "production",
            Some(env) => env,
        }
    }

    pub fn service(&self) -> Option<&str> {
        match self.service.as_deref() {
            None | Some("-") => None,
            Some(service) => Some(service),
        }
    }
}
