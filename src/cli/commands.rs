use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::models::{Category, ContentItem, ItemId};
use crate::query::{CategoryFilter, QuerySpec, SortOption, run_query};
use crate::sampler::{parse_quantity, sample};
use crate::store::{ContentStore, FileStorage, KeyValueStore};
use crate::utils::get_data_dir;

#[derive(Parser)]
#[command(name = "random-content")]
#[command(version = "0.1.0")]
#[command(about = "Store categorized text snippets and pick random ones", long_about = None)]
pub struct Cli {
    /// Storage directory (defaults to $RANDOM_CONTENT_DIR or the platform data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a snippet to the library
    Add {
        /// house, apartment or land
        #[arg(short, long, default_value = "house")]
        category: Category,
        /// Snippet text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List the library
    List {
        #[command(flatten)]
        view: ViewArgs,
        /// date-asc, date-desc, alphabetical-asc or alphabetical-desc
        #[arg(long, default_value = "date-desc")]
        sort: SortOption,
    },
    /// Delete a snippet by id
    Remove { id: ItemId },
    /// Pick random snippets from the filtered library
    Random {
        #[command(flatten)]
        view: ViewArgs,
        /// How many to pick
        #[arg(short = 'n', long, default_value = "1")]
        quantity: String,
    },
    /// Show counts per category
    Stats,
}

#[derive(Args)]
pub struct ViewArgs {
    /// all, house, apartment or land
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,
    /// Case-insensitive text search
    #[arg(short, long, default_value = "")]
    pub search: String,
}

impl ViewArgs {
    fn spec(&self) -> QuerySpec {
        QuerySpec::new().category(self.category).search(self.search.clone())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => get_data_dir()?,
    };
    let mut store = ContentStore::initialize(FileStorage::new(&data_dir));

    match command {
        Commands::Add { category, text } => add(&mut store, category, &text.join(" "))?,
        Commands::List { view, sort } => list(&store, &view.spec().sort_option(sort)),
        Commands::Remove { id } => remove(&mut store, id),
        Commands::Random { view, quantity } => {
            random(&store, &view.spec(), parse_quantity(&quantity))
        }
        Commands::Stats => show_stats(&store, &data_dir),
    }

    Ok(())
}

fn add<S: KeyValueStore>(store: &mut ContentStore<S>, category: Category, text: &str) -> Result<()> {
    let item = store.add(text, category).context("Failed to add content")?;
    println!("Added #{} [{}] {}", item.id(), item.category().label(), item.text());
    Ok(())
}

fn list<S: KeyValueStore>(store: &ContentStore<S>, spec: &QuerySpec) {
    let view = run_query(&store.all(), spec);

    println!("Content Library ({})", view.len());
    if view.is_empty() {
        println!("No content found");
    }
    for item in &view {
        print_item(item);
    }
}

fn remove<S: KeyValueStore>(store: &mut ContentStore<S>, id: ItemId) {
    match store.remove(id) {
        Some(item) => println!("Removed #{} {}", item.id(), item.text()),
        None => println!("No item with id {}", id),
    }
}

fn random<S: KeyValueStore>(store: &ContentStore<S>, spec: &QuerySpec, quantity: usize) {
    let view = run_query(&store.all(), spec);
    println!("Available: {} items", view.len());

    for item in sample(&view, quantity) {
        print_item(&item);
    }
}

fn show_stats<S: KeyValueStore>(store: &ContentStore<S>, data_dir: &Path) {
    let items = store.all();

    println!("Content Library Statistics");
    println!("==========================");
    println!("Total items: {}", items.len());
    for category in Category::ALL {
        let count = items.iter().filter(|i| i.category() == category).count();
        println!("  {}: {}", category.label(), count);
    }
    println!();
    println!("Storage directory: {}", data_dir.display());
}

fn print_item(item: &ContentItem) {
    println!(
        "#{:<6} {:<15} {:<24} {}",
        item.id(),
        item.category().label(),
        item.display_label(),
        item.text()
    );
}
