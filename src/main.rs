use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pokedex::api::{CachedClient, PokeClient};
use pokedex::resource::{fetch_record_json, get_all_resource_keys, RecordSource};
use pokedex::{format_api_error, Config, Identifier, ResourceKind};
use serde_json::Value;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Query the PokeAPI from the command line
#[derive(Parser, Debug)]
#[command(name = "pokedex", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// API root to query instead of the configured one
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch resources by id or name and print each as JSON
    Get {
        /// Resource type, e.g. pokemon, berry, pokemon-species
        resource: String,
        /// Numeric ids or lowercase hyphenated names; repeats are served from memory
        #[arg(required = true, num_args = 1..)]
        identifiers: Vec<String>,
    },
    /// Print one index page of a resource type
    List {
        resource: String,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Print the location areas where a creature can be encountered
    Encounters { pokemon: String },
    /// List supported resource types
    Resources,
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Save a new API root to the config file
    SetBaseUrl { url: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("pokedex started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("pokedex").join("pokedex.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".pokedex").join("pokedex.log");
    }
    PathBuf::from("pokedex.log")
}

/// Effective configuration (CLI > env > config file > defaults)
fn resolve_config(args: &Args) -> Config {
    let mut config = Config::load();
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    config
}

fn build_client(config: &Config) -> Result<PokeClient> {
    PokeClient::from_config(config).context("Failed to create PokeAPI client")
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn print_records<S: RecordSource>(
    source: &S,
    kind: ResourceKind,
    ids: Vec<Identifier>,
) -> Result<()> {
    for id in ids {
        let value = fetch_record_json(source, kind, id)
            .await
            .map_err(|e| anyhow::anyhow!(format_api_error(&e)))?;
        print_json(&value)?;
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args);

    match args.command {
        Command::Resources => {
            for key in get_all_resource_keys() {
                println!("{}", key);
            }
            Ok(())
        }
        Command::Get {
            resource,
            identifiers,
        } => {
            let kind: ResourceKind = resource.parse()?;
            let ids = identifiers
                .iter()
                .map(|s| s.parse::<Identifier>())
                .collect::<pokedex::Result<Vec<_>>>()?;
            let client = build_client(&config)?;

            if config.memoize {
                print_records(&CachedClient::new(client), kind, ids).await
            } else {
                print_records(&client, kind, ids).await
            }
        }
        Command::List {
            resource,
            offset,
            limit,
        } => {
            let kind: ResourceKind = resource.parse()?;
            let client = build_client(&config)?;

            let value = if kind.accepts_names() {
                serde_json::to_value(client.list(kind, offset, limit).await?)?
            } else {
                serde_json::to_value(client.list_unnamed(kind, offset, limit).await?)?
            };

            print_json(&value)
        }
        Command::Encounters { pokemon } => {
            let id: Identifier = pokemon.parse()?;
            let client = build_client(&config)?;
            let encounters = client
                .pokemon_encounters(id)
                .await
                .map_err(|e| anyhow::anyhow!(format_api_error(&e)))?;

            print_json(&serde_json::to_value(encounters)?)
        }
        Command::Config { action } => match action {
            ConfigAction::Show => print_json(&serde_json::to_value(&config)?),
            ConfigAction::SetBaseUrl { url } => {
                PokeClient::with_base_url(&url)
                    .with_context(|| format!("Invalid base url {}", url))?;
                let mut saved = Config::load();
                saved.set_base_url(&url)?;
                println!("Base url set to {}", url);
                Ok(())
            }
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    if let Err(err) = run(args).await {
        tracing::error!("pokedex failed: {:?}", err);
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_accepts_several_identifiers() {
        let args = Args::try_parse_from(["pokedex", "get", "pokemon", "25", "pikachu", "25"]).unwrap();
        match args.command {
            Command::Get {
                resource,
                identifiers,
            } => {
                assert_eq!(resource, "pokemon");
                assert_eq!(identifiers, vec!["25", "pikachu", "25"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_get_requires_an_identifier() {
        assert!(Args::try_parse_from(["pokedex", "get", "pokemon"]).is_err());
    }

    #[test]
    fn test_config_set_base_url() {
        let args = Args::try_parse_from([
            "pokedex",
            "config",
            "set-base-url",
            "http://localhost:8000/api/v2/",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::SetBaseUrl { ref url }
            } if url == "http://localhost:8000/api/v2/"
        ));
    }

    #[test]
    fn test_cli_flags_override_config() {
        let args = Args::try_parse_from([
            "pokedex",
            "--base-url",
            "http://localhost:9000/",
            "--timeout",
            "5",
            "resources",
        ])
        .unwrap();
        let config = resolve_config(&args);
        assert_eq!(config.base_url, "http://localhost:9000/");
        assert_eq!(config.timeout_secs, 5);
    }
}
