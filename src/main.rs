use anyhow::{Context, Result};
use chatpick::picker::application::fixture::FixtureDirectory;
use chatpick::picker::domain::models::{DataSource, Item, Selection, SelectionMode};
use chatpick::picker::InteractivePicker;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "chatpick",
    version,
    about = "Interactive picker for chat-server users, channels, and dialog options",
    long_about = None
)]
struct Cli {
    /// What to pick from
    #[arg(short, long, value_enum)]
    source: SourceArg,

    /// Directory holding users.json / channels.json / options.json
    #[arg(long, env = "CHATPICK_FIXTURES")]
    fixtures: PathBuf,

    /// Allow picking several entries; confirm with Ctrl+D
    #[arg(short, long)]
    multi: bool,

    /// Keys pre-selected on open (multi mode, option sources)
    #[arg(long, value_delimiter = ',')]
    selected: Vec<String>,

    /// Pretend the dynamic-option backend has no search endpoint
    #[arg(long)]
    no_dynamic_search: bool,

    /// Output format for the final selection
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceArg {
    Users,
    Channels,
    Options,
    Static,
}

impl From<SourceArg> for DataSource {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Users => DataSource::Users,
            SourceArg::Channels => DataSource::Channels,
            SourceArg::Options => DataSource::Dynamic,
            SourceArg::Static => DataSource::Static,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let source = DataSource::from(cli.source);
    let mode = if cli.multi {
        SelectionMode::Multi
    } else {
        SelectionMode::Single
    };

    let mut directory = FixtureDirectory::load(&cli.fixtures)
        .with_context(|| format!("failed to load fixtures from {}", cli.fixtures.display()))?;
    if cli.no_dynamic_search {
        directory = directory.without_dynamic_search();
    }

    // Static screens get their entries up front instead of fetching.
    let initial_items = if source == DataSource::Static {
        directory.static_items()
    } else {
        Vec::new()
    };

    let initial_selected = resolve_selected(&initial_items, &cli.selected);

    let mut picker = InteractivePicker::new(
        source,
        mode,
        initial_items,
        initial_selected,
        Arc::new(directory),
    );

    match picker.run()? {
        Some(selection) => print_selection(&selection, cli.format)?,
        None => {
            eprintln!("{}", "no selection".dimmed());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn resolve_selected(items: &[Item], keys: &[String]) -> Vec<Item> {
    keys.iter()
        .filter_map(|key| items.iter().find(|i| i.key() == key).cloned())
        .collect()
}

fn print_selection(selection: &Selection, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(selection)?);
        }
        OutputFormat::Text => {
            let items: Vec<&Item> = match selection {
                Selection::Single(item) => vec![item],
                Selection::Multiple(items) => items.iter().collect(),
            };
            for item in items {
                println!("{}\t{}", item.key().cyan(), item.label());
            }
        }
    }
    Ok(())
}
