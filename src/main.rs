// Daybook Application
// Command-line surface over the preference and journal stores

use std::env;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};

use daybook::config::AppConfig;
use daybook::services::database::Database;
use daybook::services::journal::JournalStore;
use daybook::services::preferences::{migrate_legacy_snapshot, PreferenceStore};
use daybook::services::storage::StoragePaths;
use daybook::utils::date::{display_date, parse_entry_key};

const USAGE: &str = "\
Usage: daybook <command>

Commands:
  show                     Print current preferences and saved entry dates
  dark-mode <on|off>       Toggle the dark mode preference
  font-size <size>         Set the font size (16-48, step 2)
  save <date> <text>       Save the journal entry for a date
  read <date>              Print the journal entry for a date
  delete <date>            Delete the journal entry for a date
  list                     List dates with a saved entry

Dates are ISO (2024-01-05) or the word 'today'.";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    log::info!("Starting Daybook");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = AppConfig::load()?;
    let paths = StoragePaths::resolve(&config)?;
    paths.ensure_dirs()?;

    let db = Database::new(&paths.database_path)?;
    db.initialize_schema()?;
    migrate_legacy_snapshot(&paths.legacy_snapshot_path(), &db)?;

    let journal = JournalStore::open(&paths.journal_dir)?;
    journal.migrate_legacy_entries()?;

    let preferences = PreferenceStore::open(Arc::new(Mutex::new(db)))?;

    match args.first().map(String::as_str) {
        None | Some("show") => {
            let current = preferences.current();
            println!("Dark mode: {}", if current.dark_mode { "on" } else { "off" });
            println!("Font size: {}", current.font_size);

            let dates = journal.list_dates().await?;
            println!("Saved entries: {}", dates.len());
            for date in dates {
                println!("  {}", display_date(date));
            }
        }
        Some("dark-mode") => {
            let enabled = match args.get(1).map(String::as_str) {
                Some("on") => true,
                Some("off") => false,
                _ => return Err(anyhow!("dark-mode expects 'on' or 'off'\n\n{}", USAGE)),
            };
            preferences.set_dark_mode(enabled).await?;
            println!("Dark mode {}", if enabled { "on" } else { "off" });
        }
        Some("font-size") => {
            let size: u32 = args
                .get(1)
                .ok_or_else(|| anyhow!("font-size expects a number\n\n{}", USAGE))?
                .parse()
                .map_err(|_| anyhow!("font-size expects a number\n\n{}", USAGE))?;
            preferences.set_font_size(size).await?;
            println!("Font size set to {}", preferences.current().font_size);
        }
        Some("save") => {
            let date = parse_date_arg(args.get(1))?;
            if args.len() < 3 {
                return Err(anyhow!("save expects a date and the entry text\n\n{}", USAGE));
            }
            let content = args[2..].join(" ");
            journal.save(date, &content).await?;
            println!("Text saved successfully");
        }
        Some("read") => {
            let date = parse_date_arg(args.get(1))?;
            match journal.read(date).await? {
                Some(content) => println!("{}", content),
                None => println!("File not found"),
            }
        }
        Some("delete") => {
            let date = parse_date_arg(args.get(1))?;
            if journal.delete(date).await? {
                println!("File deleted");
            } else {
                println!("File not found");
            }
        }
        Some("list") => {
            for date in journal.list_dates().await? {
                println!("{}", display_date(date));
            }
        }
        Some(other) => {
            return Err(anyhow!("Unknown command: {}\n\n{}", other, USAGE));
        }
    }

    Ok(())
}

fn parse_date_arg(arg: Option<&String>) -> Result<NaiveDate> {
    let arg = arg.ok_or_else(|| anyhow!("Expected a date argument\n\n{}", USAGE))?;
    if arg == "today" {
        return Ok(Local::now().date_naive());
    }
    parse_entry_key(arg).ok_or_else(|| anyhow!("Invalid date '{}', expected YYYY-MM-DD", arg))
}
