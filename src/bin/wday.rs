use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use wday::config::{Config, resolve_config_path};
use wday::display::format_event_block;
use wday::error::{WdayError, WdayResult};
use wday::matching::find_events;
use wday::persistence::{self, EventCache};
use wday::resolve::resolve_anchor;
use wday::select::select_events;
use wday::{dataset, locale};

/// Reveal historical events, notable birthdays, and observances for a day.
#[derive(Debug, Parser)]
#[command(name = "wday")]
struct Cli {
    /// Date to look up: YYYY-MM-DD, MM-DD, or DD. Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Show all matching events instead of one at random.
    #[arg(short, long)]
    all: bool,

    /// Show event descriptions.
    #[arg(short, long)]
    description: bool,

    /// Locale code for the dataset (e.g. JaJP, EnUS). Overrides the config.
    #[arg(long)]
    locale: Option<String>,

    /// Config file (default is $HOME/.wday.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Manage the local event cache.
    Cache {
        #[command(subcommand)]
        cmd: CacheCommand,
    },

    /// Manage and display locale settings.
    Locale {
        #[command(subcommand)]
        cmd: Option<LocaleCommand>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum CacheCommand {
    /// Remove the cache directory; the next run re-seeds it.
    Clean,
}

#[derive(Debug, clap::Subcommand)]
enum LocaleCommand {
    /// List all supported locales.
    List,
    /// Set the default locale and persist it to the config file.
    Set { code: String },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> WdayResult<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    match &cli.cmd {
        Some(Command::Cache {
            cmd: CacheCommand::Clean,
        }) => persistence::clear(&persistence::default_cache_root()?),
        Some(Command::Locale { cmd }) => run_locale(cmd.as_ref(), &config_path),
        None => run_events(&cli, &config_path),
    }
}

fn run_events(cli: &Cli, config_path: &Path) -> WdayResult<()> {
    let config = Config::load_or_init(config_path)?;
    let locale_code = cli.locale.clone().unwrap_or(config.locale);

    // No fallback locale substitution: an unknown code is a hard error.
    let bundled = dataset::bundled_dataset(&locale_code)?;

    let cache_root = persistence::default_cache_root()?;
    let cache = EventCache::ensure_seeded(&cache_root, &locale_code, bundled.as_bytes())?;
    let raw = String::from_utf8(cache.load_dataset()?)
        .map_err(|err| WdayError::DataIntegrity(format!("cached dataset is not UTF-8: {err}")))?;
    let events = dataset::parse_events(&raw)?;

    let today = Local::now().date_naive();
    let anchor = resolve_anchor(cli.date.as_deref(), today)?;
    let matched = find_events(&events, &anchor)?;
    log::debug!("{} of {} events matched", matched.len(), events.len());

    // Absence of events for a date is not an error; stay silent and exit 0.
    let mut rng = rand::rng();
    for event in select_events(&matched, cli.all, &mut rng) {
        print!("{}", format_event_block(event, &locale_code, cli.description)?);
    }
    Ok(())
}

fn run_locale(cmd: Option<&LocaleCommand>, config_path: &Path) -> WdayResult<()> {
    match cmd {
        None => {
            let config = Config::load_or_init(config_path)?;
            if let Some(loc) = locale::locale_by_code(&config.locale) {
                println!("{}, {}", loc.code, loc.display_name);
            }
            Ok(())
        }
        Some(LocaleCommand::List) => {
            for loc in locale::SUPPORTED_LOCALES {
                println!("{}, {}", loc.code, loc.display_name);
            }
            Ok(())
        }
        Some(LocaleCommand::Set { code }) => {
            if locale::locale_by_code(code).is_none() {
                let supported: Vec<&str> =
                    locale::SUPPORTED_LOCALES.iter().map(|l| l.code).collect();
                return Err(WdayError::Config(format!(
                    "unsupported locale '{code}' (supported: {})",
                    supported.join(", ")
                )));
            }
            let mut config = Config::load_or_init(config_path)?;
            config.locale = code.clone();
            config.save(config_path)
        }
    }
}
