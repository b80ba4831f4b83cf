use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use optimist::action::{ActionOutcome, ContactForm, FormAction, NameAction};
use optimist::config::Config;
use optimist::optimistic::{Collection, DeleteOutcome, ItemId, OptimisticList};
use optimist::remote::HttpItemsApi;
use optimist::search::DeferredSearch;

#[derive(Parser, Debug)]
#[command(name = "optimist", version, about = "Optimistic updates against a CRUD endpoint")]
struct Cli {
    /// Config file (default: ~/.config/optimist/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the remote base URL from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List items on the endpoint
    List,
    /// Add an item optimistically
    Add { name: String },
    /// Delete an item optimistically
    Delete { id: u64 },
    /// Search items by name
    Search { query: String },
    /// Submit the change-name form action
    Rename { name: String },
    /// Submit the contact form action
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.remote.base_url = base_url;
        config.validate()?;
    }

    optimist::logging::init(&config.logging);

    let api = HttpItemsApi::new(&config.remote).context("Failed to build HTTP client")?;

    match cli.command {
        Command::List => {
            let list = OptimisticList::new(api);
            print_items(&list.refresh().await?);
        }
        Command::Add { name } => {
            let list = OptimisticList::new(api);
            let item = list.add(&name).await?;
            println!("added {} {}", item.id, item.name);
        }
        Command::Delete { id } => {
            let list = OptimisticList::new(api);
            list.refresh().await?;
            match list.delete(ItemId(id)).await? {
                DeleteOutcome::Deleted(item) => println!("deleted {} {}", item.id, item.name),
                DeleteOutcome::NotFound => anyhow::bail!("Item {} not found", id),
            }
        }
        Command::Search { query } => {
            let search = DeferredSearch::new(api);
            search.set_query(&query).await;
            for item in search.state().results {
                println!("{}\t{}", item.id, item.name);
            }
        }
        Command::Rename { name } => {
            let action = NameAction::new(Duration::from_millis(config.action.latency_ms));
            match action.submit(&name).await {
                Some(ActionOutcome::Succeeded { .. }) => println!("name updated to {}", name),
                Some(ActionOutcome::Rejected { message }) => anyhow::bail!(message),
                None => anyhow::bail!("Another submission is pending"),
            }
        }
        Command::Submit { name, email } => {
            let action = FormAction::simulated(Duration::from_millis(config.action.form_latency_ms));
            match action.submit(ContactForm { name, email }).await {
                Some(ActionOutcome::Succeeded { message }) => {
                    println!("{}", message.unwrap_or_default())
                }
                Some(ActionOutcome::Rejected { message }) => anyhow::bail!(message),
                None => anyhow::bail!("Another submission is pending"),
            }
        }
    }

    Ok(())
}

fn print_items(items: &Collection) {
    for item in items {
        println!("{}\t{}", item.id, item.name);
    }
}
