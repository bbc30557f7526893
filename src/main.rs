use anyhow::Context;
use clap::Parser;
use lbstatus::utils::logger;
use lbstatus::{
    load_services, poll_all, render, watch, CliArgs, GhCommitLookup, ServiceRegistry, StatusError,
    StatusFetcher,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    if let Err(err) = run(args).await {
        eprintln!("Error when running lbstatus:");
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let services = load_services().context("could not load service registry")?;

    if args.list {
        render::print_services(&services, args.bootstrap);
        return Ok(());
    }

    let environment = args.environment().to_string();

    let todo: ServiceRegistry = match args.service() {
        Some(name) => {
            let Some(url) = services.get(name) else {
                let known = services
                    .keys()
                    .map(|s| format!("* {s}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                return Err(StatusError::UnknownService {
                    service: name.to_string(),
                    known,
                }
                .into());
            };
            ServiceRegistry::from([(name.to_string(), url.clone())])
        }
        None => services,
    };

    tracing::debug!(%environment, services = todo.len(), watch = args.watch, "starting");

    let fetcher = StatusFetcher::new(Arc::new(GhCommitLookup))?;

    if args.watch {
        watch(&fetcher, &todo, &environment, |changed, first| {
            if !first {
                render::print_separator();
            }
            render::print_batch(changed, &environment);
        })
        .await?;
        Ok(())
    } else {
        let results = poll_all(&fetcher, &todo, &environment).await?;
        render::print_batch(&results, &environment);
        Ok(())
    }
}
