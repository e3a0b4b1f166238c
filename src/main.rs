use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use flashcards::audit::AuditLogger;
use flashcards::cli::{print_history, Shell, ShellOptions};
use flashcards::config::{paths::FlashcardPaths, settings::Settings};
use flashcards::console::RecordingConsole;

#[derive(Parser)]
#[command(
    name = "flashcards",
    version,
    about = "Interactive terminal flashcard manager",
    long_about = "Keeps a deck of term/definition cards, quizzes you on them and \
                  remembers which ones you get wrong. Decks are stored as plain \
                  text, one `term,definition,mistakes` line per card."
)]
struct Cli {
    /// Deck file to load at startup (also used by the `import` action)
    #[arg(long, value_name = "PATH", env = "FLASHCARDS_IMPORT")]
    import: Option<PathBuf>,

    /// Deck file to save on exit (also used by the `export` action)
    #[arg(long, value_name = "PATH", env = "FLASHCARDS_EXPORT")]
    export: Option<PathBuf>,

    /// Print the last N recorded deck changes and exit
    #[arg(long, value_name = "N")]
    history: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FlashcardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("FLASHCARDS_LOG", settings.log_level.as_str()),
    )
    .init();
    log::debug!("using data directory {}", paths.base_dir().display());

    if let Some(count) = cli.history {
        print_history(&AuditLogger::new(paths.audit_log()), count, &mut io::stdout())?;
        return Ok(());
    }

    let options = ShellOptions {
        import_file: cli.import,
        export_file: cli.export,
    };

    let stdin = io::stdin();
    let console = RecordingConsole::new(stdin.lock(), io::stdout());
    let mut shell = Shell::new(console, options);

    if settings.audit_enabled {
        match paths.ensure_directories() {
            Ok(()) => shell = shell.with_audit(AuditLogger::new(paths.audit_log())),
            Err(e) => log::warn!("Audit log disabled: {}", e),
        }
    }

    shell.run()?;
    Ok(())
}
