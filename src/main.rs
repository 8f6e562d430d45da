use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use flavorlab_core::{BlendRatios, DescriptorSet, FilterCondition, Ingredient, IngredientTable};
use flavorlab_similarity::{AnalysisEngine, PairAnalysis, PolarityLexicon, RadarLexicon, RankedResponse, ScoringConfig};
use flavorlab_storage::{load_config, load_polarity_lexicon, load_radar_lexicon, TableStore};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Flavor pairing engine over shared flavor descriptors
#[derive(Parser, Debug)]
#[command(name = "flavorlab")]
#[command(about = "Score and explain ingredient pairings", long_about = None)]
struct Args {
    /// Ingredient table (JSON array of rows)
    #[arg(short, long, env = "FLAVORLAB_DATA", default_value = "./ingredients.json")]
    data: PathBuf,

    /// Scoring configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Polarity dictionary file (JSON object: descriptor -> polarity)
    #[arg(long)]
    polarity: Option<PathBuf>,

    /// Radar dimensions file (JSON array of {name, keywords})
    #[arg(long)]
    radar: Option<PathBuf>,

    /// Restrict candidates to these categories (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Exclude animal-derived categories
    #[arg(long)]
    plant_based: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Table load counts
    Stats,
    /// Ingredient names and categories after filtering
    List,
    /// Compare two ingredients
    Pair { a: String, b: String },
    /// Third ingredients connecting a pair
    Bridges { a: String, b: String },
    /// Third ingredients foreign to a pair
    Contrasts { a: String, b: String },
    /// Radar profile of one ingredient
    Radar { name: String },
    /// Polarity of the combined descriptors of one or more ingredients
    Polarity {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Score matrix for a selection
    Matrix {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Full analysis of a 2-4 ingredient selection
    Analyze {
        #[arg(required = true)]
        names: Vec<String>,
        /// Raw blend weight per ingredient, in selection order (0-100)
        #[arg(long = "ratio")]
        ratios: Vec<u32>,
    },
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let log_level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries the JSON results
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn build_engine(args: &Args) -> anyhow::Result<AnalysisEngine> {
    let config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {:?}", path))?,
        None => ScoringConfig::default(),
    };
    let polarity = match &args.polarity {
        Some(path) => load_polarity_lexicon(path).with_context(|| format!("loading polarity lexicon {:?}", path))?,
        None => PolarityLexicon::default(),
    };
    let radar = match &args.radar {
        Some(path) => load_radar_lexicon(path).with_context(|| format!("loading radar lexicon {:?}", path))?,
        None => RadarLexicon::default(),
    };
    Ok(AnalysisEngine::new(config, polarity, radar)?)
}

fn candidate_filter(args: &Args) -> FilterCondition {
    let mut conditions = vec![FilterCondition::CategoryIn(args.categories.clone())];
    if args.plant_based {
        conditions.push(FilterCondition::plant_based());
    }
    FilterCondition::And(conditions)
}

/// The filtered view as a table of its own, used as the candidate pool
fn candidate_table(table: &IngredientTable, filter: &FilterCondition) -> IngredientTable {
    IngredientTable::from_ingredients(table.view(filter).into_iter().cloned())
}

fn lookup<'a>(table: &'a IngredientTable, names: &[String]) -> anyhow::Result<Vec<&'a Ingredient>> {
    Ok(names
        .iter()
        .map(|n| table.require(n))
        .collect::<flavorlab_core::Result<_>>()?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    category: &'a str,
    descriptor_count: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    info!("Starting FlavorLab v{}", env!("CARGO_PKG_VERSION"));
    debug!("Data file: {:?}", args.data);

    let engine = build_engine(&args)?;
    let store = TableStore::new(&args.data);
    let snapshot = store.snapshot()?;
    let table = snapshot.table.as_ref();
    let filter = candidate_filter(&args);

    match &args.command {
        Command::Stats => print_json(&snapshot.stats)?,
        Command::List => {
            let entries: Vec<ListEntry> = table
                .view(&filter)
                .into_iter()
                .map(|i| ListEntry {
                    name: &i.name,
                    category: &i.category,
                    descriptor_count: i.descriptor_count(),
                })
                .collect();
            print_json(&entries)?
        }
        Command::Pair { a, b } => {
            let a = table.require(a)?;
            let b = table.require(b)?;
            print_json(&engine.compare(&a.descriptors, &b.descriptors))?
        }
        Command::Bridges { a, b } => {
            let (a, b) = (table.require(a)?, table.require(b)?);
            let pool = candidate_table(table, &filter);
            let exclude = [a.name.as_str(), b.name.as_str()];
            let bridges = engine.bridges(&pool, &a.descriptors, &b.descriptors, &exclude);
            print_json(&RankedResponse::new(bridges, pool.len()))?
        }
        Command::Contrasts { a, b } => {
            let (a, b) = (table.require(a)?, table.require(b)?);
            let pool = candidate_table(table, &filter);
            let exclude = [a.name.as_str(), b.name.as_str()];
            let contrasts = engine.contrasts(&pool, &a.descriptors, &b.descriptors, &exclude);
            print_json(&RankedResponse::new(contrasts, pool.len()))?
        }
        Command::Radar { name } => {
            let ingredient = table.require(name)?;
            print_json(&engine.radar(&ingredient.descriptors))?
        }
        Command::Polarity { names } => {
            let combined = lookup(table, names)?
                .into_iter()
                .fold(DescriptorSet::new(), |acc, i| acc.union(&i.descriptors));
            print_json(&engine.polarity(&combined))?
        }
        Command::Matrix { names } => {
            let selected = lookup(table, names)?;
            print_json(&engine.matrix(&selected))?
        }
        Command::Analyze { names, ratios } => {
            let blend = if ratios.is_empty() {
                BlendRatios::equal(names)
            } else if ratios.len() == names.len() {
                let weights: Vec<(&str, u32)> = names.iter().map(String::as_str).zip(ratios.iter().copied()).collect();
                BlendRatios::normalize(&weights)
            } else {
                bail!("expected {} --ratio values, got {}", names.len(), ratios.len());
            };
            // Selected ingredients stay resolvable even when the filter hides them
            let pool = merge_selection(&candidate_table(table, &filter), table, names);
            let analysis = PairAnalysis::build(&pool, names, &blend, &engine)?;
            print_json(&analysis)?
        }
    }

    Ok(())
}

/// Candidate pool plus the selected ingredients themselves
fn merge_selection(pool: &IngredientTable, table: &IngredientTable, names: &[String]) -> IngredientTable {
    let selected = names.iter().filter_map(|n| table.get(n)).cloned();
    IngredientTable::from_ingredients(selected.chain(pool.iter().cloned()))
}
