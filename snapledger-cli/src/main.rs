use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::debug;
use snapledger_core::{Category, Direction, StoredTransaction, Transaction, TransactionStore};
use snapledger_import::{commit, write_csv};
use snapledger_ingest::{ExtractionPipeline, ExtractionStats};
use std::path::PathBuf;

mod config;
mod json_store;
mod state;

use config::Config;
use json_store::JsonStore;

#[derive(Parser, Debug)]
#[command(
    name = "snapledger",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SNAPLEDGER_BUILD_SHA"), ")"),
    about = "Turn OCR'd statement screenshots into de-duplicated transactions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions from OCR text and preview them (nothing is stored)
    Parse {
        /// OCR text file, or `-` for stdin
        input: PathBuf,

        /// Year for rows printed without one (default: config, then current year)
        #[arg(long)]
        year: Option<i32>,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Extract transactions from OCR text and store the ones not already stored
    Import {
        /// OCR text file, or `-` for stdin
        input: PathBuf,

        #[arg(long)]
        year: Option<i32>,
    },

    /// Add one transaction by hand
    Add {
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// expense or income
        #[arg(long, default_value = "expense")]
        direction: Direction,

        #[arg(long)]
        amount: f64,

        #[arg(long, default_value = "")]
        merchant: String,

        /// Ignored for income, which is always filed as Income
        #[arg(long, default_value = "Other")]
        category: Category,
    },

    /// List stored transactions, newest first
    List {
        /// Only this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,

        #[arg(long, default_value_t = 50)]
        limit: usize,
    },

    /// Change the category of a stored transaction
    Recategorize { id: u64, category: Category },

    /// Delete a stored transaction
    Delete { id: u64 },

    /// Export stored transactions as CSV
    Export {
        #[arg(long)]
        out: PathBuf,
    },

    /// Config helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config.toml if none exists
    Init,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { input, year, json } => {
            let cfg = config::load_config()?;
            let text = state::read_text(&input)?;
            let pipeline = ExtractionPipeline::with_year(cfg.parse.resolve_year(year)?);
            let (txns, stats) = pipeline.extract_with_stats(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&txns)?);
                return Ok(());
            }
            if txns.is_empty() {
                println!("No rows detected. Use a clearer or zoomed screenshot.");
                return Ok(());
            }
            print_preview(&txns);
            print_stats(&stats, txns.len());
        }

        Command::Import { input, year } => {
            let cfg = config::load_config()?;
            let text = state::read_text(&input)?;
            let pipeline = ExtractionPipeline::with_year(cfg.parse.resolve_year(year)?);
            let (txns, stats) = pipeline.extract_with_stats(&text);
            print_stats(&stats, txns.len());
            if txns.is_empty() {
                println!("No rows detected; nothing imported.");
                return Ok(());
            }

            let mut store = open_store(&cfg)?;
            let summary = commit(&mut store, &txns)
                .with_context(|| format!("importing into {}", store.path().display()))?;
            println!("{}", summary.message());
        }

        Command::Add {
            date,
            direction,
            amount,
            merchant,
            category,
        } => {
            let tx = Transaction::manual(date, direction, amount, merchant, category)?;
            let mut store = open_store(&config::load_config()?)?;
            let id = store.add(tx)?;
            println!("Added transaction {id}");
        }

        Command::List { month, limit } => {
            let store = open_store(&config::load_config()?)?;
            let all = store.get_all()?;
            let mut shown = filter_by_month(all.clone(), month.as_deref());
            shown.sort_by(|a, b| b.date.cmp(&a.date));

            println!("Saved transactions: {} | Showing: {}", all.len(), shown.len());
            for r in shown.iter().take(limit) {
                println!(
                    "{:>5}  {}  {:<32}  {:<18}  {:<7}  {}${:.2}",
                    r.id,
                    r.date,
                    r.merchant,
                    r.category,
                    r.direction,
                    r.direction.sign(),
                    r.amount
                );
            }
        }

        Command::Recategorize { id, category } => {
            let mut store = open_store(&config::load_config()?)?;
            let mut rec = store
                .get_all()?
                .into_iter()
                .find(|r| r.id == id)
                .with_context(|| format!("no stored transaction with id {id}"))?;
            if rec.direction == Direction::Income && category != Category::Income {
                bail!("income transactions are always filed as Income");
            }
            rec.category = category;
            store.put(rec)?;
            println!("Transaction {id} is now {category}");
        }

        Command::Delete { id } => {
            let mut store = open_store(&config::load_config()?)?;
            if !store.delete(id)? {
                bail!("no stored transaction with id {id}");
            }
            println!("Deleted transaction {id}");
        }

        Command::Export { out } => {
            let store = open_store(&config::load_config()?)?;
            let mut records = store.get_all()?;
            records.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
            let file = std::fs::File::create(&out)
                .with_context(|| format!("create {}", out.display()))?;
            write_csv(file, &records)?;
            println!("Exported {} transactions to {}", records.len(), out.display());
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
        },
    }

    Ok(())
}

fn open_store(cfg: &Config) -> Result<JsonStore> {
    let home = state::ensure_snapledger_home()?;
    let path = state::resolve_in_home(&home, &cfg.store.path);
    debug!("opening store {}", path.display());
    JsonStore::open(&path).with_context(|| format!("open store {}", path.display()))
}

/// Keep records whose date starts with `month` (YYYY-MM); everything when `None`.
fn filter_by_month(records: Vec<StoredTransaction>, month: Option<&str>) -> Vec<StoredTransaction> {
    match month {
        Some(m) => records.into_iter().filter(|r| r.date.starts_with(m)).collect(),
        None => records,
    }
}

fn print_preview(txns: &[Transaction]) {
    println!(
        "{:<10}  {:<32}  {:<18}  {:<7}  {:>10}",
        "Date", "Merchant", "Category", "Type", "Amount"
    );
    for t in txns {
        println!(
            "{:<10}  {:<32}  {:<18}  {:<7}  {:>10}",
            t.date,
            t.merchant,
            t.category.label(),
            t.direction.as_str(),
            format!("{}${:.2}", t.direction.sign(), t.amount)
        );
    }
}

fn print_stats(stats: &ExtractionStats, rows: usize) {
    println!(
        "\nDetected rows: {} ({} lines read, {} unreadable, {} duplicates)",
        rows, stats.lines, stats.rejected_amounts, stats.duplicates
    );
}
