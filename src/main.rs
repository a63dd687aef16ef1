//! actorkit - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use actorkit::{
    actors::{self, Pagination},
    cli::{Args, Commands, Config, Verbosity},
    config::ApiConfig,
    marketplace::{ActorStoreList, ApifyClient, MarketplaceApi},
    tools::{ToolRegistry, ToolRuntime},
};

/// Install the tracing subscriber; `ACTORKIT_LOG` overrides the flags
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env("ACTORKIT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run a remote call behind a spinner
async fn with_spinner<T, F>(verbosity: Verbosity, message: String, fut: F) -> T
where
    F: Future<Output = T>,
{
    if !verbosity.show_progress() {
        return fut.await;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = fut.await;
    pb.finish_and_clear();
    result
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_tools(registry: &ToolRegistry, json: bool) -> Result<()> {
    if json {
        return print_json(&registry.schemas());
    }

    for schema in registry.schemas() {
        println!("{}", schema.name.bold());
        println!("  {}", schema.description);
        if let Some(props) = schema.parameters["properties"].as_object() {
            let required = schema.required();
            for (name, prop) in props {
                let marker = if required.contains(&name.as_str()) { "*" } else { " " };
                println!(
                    "    {}{} ({}) {}",
                    marker,
                    name.cyan(),
                    prop["type"].as_str().unwrap_or("any"),
                    prop["description"].as_str().unwrap_or("").dimmed()
                );
            }
        }
        println!();
    }
    Ok(())
}

fn print_search(results: &ActorStoreList) {
    if results.items.is_empty() {
        println!("{}", "No Actors found. Try fewer keywords.".yellow());
        return;
    }

    for item in &results.items {
        println!(
            "{} {}",
            item.full_name().bold(),
            item.title.as_deref().unwrap_or("").dimmed()
        );
        if let Some(description) = &item.description {
            println!("  {}", description);
        }
        if let Some(url) = &item.url {
            println!("  {}", url.blue());
        }
    }
    println!(
        "\nShowing {} of {} (offset {})",
        results.items.len(),
        results.total,
        results.offset
    );
}

/// Marketplace client from the config file and `APIFY_TOKEN`
fn connect(config: &Config) -> Result<Arc<dyn MarketplaceApi>> {
    let token = ApiConfig::from_env()?;
    let client = ApifyClient::new(config.api_config(token.token())?)?;
    let api: Arc<dyn MarketplaceApi> = Arc::new(client);
    Ok(api)
}

async fn run(args: Args) -> Result<()> {
    let verbosity = args.verbosity();

    let config = Config::load(args.config.clone()).context("Failed to load configuration")?;

    match args.command {
        Commands::Tools => print_tools(&ToolRegistry::new(), args.json)?,
        Commands::Search { search, limit, offset } => {
            let api = connect(&config)?;
            let page = Pagination::new(limit.unwrap_or(config.search.default_limit), offset)?;
            let results = with_spinner(
                verbosity,
                format!("Searching for '{}'", search),
                actors::search_actors(api.as_ref(), &search, page),
            )
            .await?;

            if args.json {
                print_json(&results)?;
            } else {
                print_search(&results);
            }
        }
        Commands::Pricing { actor_id } => {
            let api = connect(&config)?;
            let pricing = with_spinner(
                verbosity,
                format!("Fetching pricing of {}", actor_id),
                actors::get_actor_pricing_information(api.as_ref(), &actor_id),
            )
            .await?;

            if args.json {
                print_json(&pricing)?;
            } else {
                println!(
                    "{} {}",
                    "Pricing model:".bold(),
                    pricing.pricing_model.as_deref().unwrap_or("unknown")
                );
                println!("{} {}", "In effect since:".bold(), pricing.started_at.to_rfc3339());
                for (key, value) in &pricing.extra {
                    println!("  {}: {}", key.cyan(), value);
                }
            }
        }
        Commands::Build { actor_name } => {
            let api = connect(&config)?;
            let build = with_spinner(
                verbosity,
                format!("Fetching latest build of {}", actor_name),
                actors::get_actor_latest_build(api.as_ref(), &actor_name),
            )
            .await?;
            print_json(&build)?;
        }
        Commands::Versions { actor_name } => {
            let api = connect(&config)?;
            let versions = actors::list_actor_versions(api.as_ref(), &actor_name).await?;

            if args.json {
                print_json(&versions)?;
            } else {
                for version in &versions {
                    println!(
                        "{} tag={} source={}",
                        version.version_number.as_deref().unwrap_or("?").bold(),
                        version.build_tag.as_deref().unwrap_or("-"),
                        version.source_type.as_deref().unwrap_or("-")
                    );
                }
            }
        }
        Commands::Builds { actor_name } => {
            let api = connect(&config)?;
            let builds = actors::list_actor_builds(api.as_ref(), &actor_name).await?;

            if args.json {
                print_json(&builds)?;
            } else {
                for build in &builds {
                    let status = build.status.as_deref().unwrap_or("UNKNOWN");
                    let status = if status == "SUCCEEDED" {
                        status.green()
                    } else {
                        status.red()
                    };
                    println!(
                        "{} {} {}",
                        build.id.bold(),
                        build.build_number.as_deref().unwrap_or("-"),
                        status
                    );
                }
            }
        }
        Commands::Sources { actor_name, content } => {
            let api = connect(&config)?;
            let files = with_spinner(
                verbosity,
                format!("Fetching source files of {}", actor_name),
                actors::get_actor_source_files(api.as_ref(), &actor_name),
            )
            .await?;

            if args.json {
                print_json(&files)?;
            } else if files.is_empty() {
                println!("{}", "No text source files in the latest version.".yellow());
            } else {
                for file in &files {
                    println!("{}", file.name.bold());
                    if content {
                        println!("{}\n", file.content.as_deref().unwrap_or(""));
                    }
                }
            }
        }
        Commands::Tree { actor_name } => {
            let api = connect(&config)?;
            let tree = with_spinner(
                verbosity,
                format!("Building file tree of {}", actor_name),
                actors::get_actor_file_tree(api.as_ref(), &actor_name),
            )
            .await?;

            if args.json {
                print_json(&tree)?;
            } else {
                print!("{}", tree.render());
            }
        }
        Commands::Github { actor_name, check } => {
            let api = connect(&config)?;
            let urls = actors::get_actor_github_urls(api.as_ref(), &actor_name).await?;

            for url in &urls {
                if check {
                    let mark = if actors::github_repo_exists(api.as_ref(), url).await? {
                        "✓".green()
                    } else {
                        "✗".red()
                    };
                    println!("{} {}", mark, url);
                } else {
                    println!("{}", url);
                }
            }
        }
        Commands::Call { tool, args: raw } => {
            let api = connect(&config)?;
            let call_args: serde_json::Value =
                serde_json::from_str(&raw).context("Tool arguments must be valid JSON")?;
            let runtime = ToolRuntime::new(api);

            let result = with_spinner(
                verbosity,
                format!("Executing: {}", tool),
                runtime.execute(&tool, &call_args),
            )
            .await?;
            println!("{}", result.output_pretty());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbosity());

    if let Err(e) = run(args).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
