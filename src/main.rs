//! TabDesk CLI
//!
//! Inspect, back up and restore the dashboard store from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tabdesk::app::App;
use tabdesk::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use tabdesk::platform;
use tabdesk::services::settings_engine::{SettingsEngine, SettingsEngineTrait, SETTINGS_FILE};
use tabdesk::services::{logging, sidebar, transfer};
use tabdesk::types::errors::Result;

#[derive(Parser)]
#[command(name = "tabdesk")]
#[command(about = "TabDesk - folders, links and shortcuts for your new tab page")]
#[command(version)]
struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain where data lives and how to manage it
    Info,
    /// Print the sidebar folders with their links, then the shortcuts
    List,
    /// Write every folder, link and shortcut as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace all data with the contents of a JSON export
    Import {
        /// Export file to restore
        file: PathBuf,
    },
    /// Delete all folders, links and shortcuts
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

fn print_info() {
    println!(
        "\
TabDesk

Your folders, links and shortcuts are stored in a local SQLite database.
It is created automatically the first time TabDesk runs.

Default database: {}
Settings file:    {}

Override the data directory with ${} or pass --db <FILE>.

Commands:
  tabdesk list                  Show folders, links and shortcuts
  tabdesk export -o backup.json Back up everything as JSON
  tabdesk import backup.json    Restore from a backup (replaces current data)
  tabdesk clear --yes           Delete everything",
        platform::default_database_path().display(),
        platform::get_config_dir().join(SETTINGS_FILE).display(),
        platform::DATA_DIR_ENV,
    );
}

fn run(cli: Cli, app: &App) -> Result<()> {
    let conn = app.db.connection();
    match cli.command {
        None | Some(Commands::Info) => print_info(),
        Some(Commands::List) => {
            for folder in sidebar::load_sidebar(conn)? {
                let marker = if folder.is_open { "v" } else { ">" };
                println!("{} {} ({})", marker, folder.name, folder.id);
                for link in folder.links {
                    println!("    {}  {}", link.name, link.url);
                }
            }
            let shortcuts = ShortcutManager::new(conn).get_all()?;
            if !shortcuts.is_empty() {
                println!("Shortcuts:");
                for shortcut in shortcuts {
                    println!("    {}  {}", shortcut.name, shortcut.url);
                }
            }
        }
        Some(Commands::Export { output: Some(path) }) => {
            let snapshot = transfer::export_to_file(conn, &path)?;
            let counts = snapshot.counts();
            eprintln!(
                "Exported {} folders, {} links, {} shortcuts to {}",
                counts.folders,
                counts.links,
                counts.shortcuts,
                path.display()
            );
        }
        Some(Commands::Export { output: None }) => {
            println!("{}", transfer::export_data(conn)?.to_json_pretty()?);
        }
        Some(Commands::Import { file }) => {
            let counts = transfer::import_from_file(conn, &file)?.counts();
            eprintln!(
                "Imported {} folders, {} links, {} shortcuts",
                counts.folders, counts.links, counts.shortcuts
            );
        }
        Some(Commands::Clear { yes }) => {
            if !yes {
                eprintln!("Refusing to delete everything without --yes");
                return Ok(());
            }
            transfer::clear_all(conn)?;
            eprintln!("All data deleted");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if matches!(cli.command, None | Some(Commands::Info)) {
        print_info();
        return ExitCode::SUCCESS;
    }

    let mut settings_engine = SettingsEngine::new(None);
    let loaded = settings_engine.load();
    let settings = settings_engine.get_settings().clone();
    let filter = if cli.verbose { "tabdesk=debug" } else { settings.log_filter.as_str() };
    logging::init(filter);
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "failed to load settings, using defaults");
    }

    let db_path = App::resolve_database_path(cli.db.clone(), &settings);
    let app = match App::with_settings(&db_path, settings_engine) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(cli, &app);
    let closed = app.shutdown();
    match outcome.and(closed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
