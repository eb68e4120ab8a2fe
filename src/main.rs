use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ghevent::{EventFilter, FilterConfig, GitHubEvent};

#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Configuration file describing which events to keep, built-in rules are used if omitted
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Tell whether a webhook payload would be handled or dropped
    Classify {
        /// Event type, as found in the `X-GitHub-Event` header
        #[clap(short, long)]
        event: String,
        /// JSON payload of the delivery, read from stdin if omitted
        #[clap(value_parser)]
        payload: Option<PathBuf>,
    },
    /// Print the rules in effect, as YAML
    Rules,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();
    let config = match &opts.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => {
            debug!("no config file given, using built-in rules");
            FilterConfig::default()
        }
    };
    let filter = EventFilter::new(config.rule_table()?);

    match opts.command {
        Command::Classify { event, payload } => {
            let mut content = String::new();
            match payload {
                Some(path) => File::open(&path)
                    .and_then(|mut file| file.read_to_string(&mut content))
                    .with_context(|| format!("couldn't read {}", path.display()))?,
                None => io::stdin()
                    .read_to_string(&mut content)
                    .context("couldn't read payload from stdin")?,
            };

            let event = GitHubEvent::from_json(&event, &content)?;
            match filter.classify(event) {
                Some(event) => {
                    info!("admitted event: {:?}", event);
                    println!("admitted");
                }
                None => println!("rejected"),
            }
        }
        Command::Rules => {
            let rules =
                serde_yaml::to_string(filter.table()).context("couldn't serialize rules")?;
            print!("{}", rules);
        }
    }

    Ok(())
}
