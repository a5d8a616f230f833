//! Passforge command-line interface.
//!
//! Omitted flags fall back to the saved generator settings.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use passforge::app::App;
use passforge::managers::history_store::{now_millis, relative_age, HistoryStoreTrait};
use passforge::services::batch_engine::BatchPolicy;
use passforge::services::settings_engine::SettingsEngineTrait;
use passforge::services::text_tools::CharacterCounts;
use passforge::services::{export, strength_estimator, templates};
use passforge::types::passphrase::{NumberPlacement, PassphrasePolicy, Separator, WordListId};
use passforge::types::policy::CharsetPolicy;
use passforge::types::strength::{StrengthReport, MAX_SCORE};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Passforge {
    /// Settings file to use instead of the platform default.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

/// Character class switches shared by `generate` and `batch`.
#[derive(Args, Debug, Default)]
struct ClassFlags {
    /// Leave out lowercase letters.
    #[arg(long)]
    no_lower: bool,
    /// Leave out uppercase letters.
    #[arg(long)]
    no_upper: bool,
    /// Leave out digits.
    #[arg(long)]
    no_digits: bool,
    /// Leave out symbols.
    #[arg(long)]
    no_symbols: bool,
}

impl ClassFlags {
    fn apply(&self, policy: &mut CharsetPolicy) {
        policy.lowercase &= !self.no_lower;
        policy.uppercase &= !self.no_upper;
        policy.digits &= !self.no_digits;
        policy.symbols &= !self.no_symbols;
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a random password.
    Generate {
        /// Number of characters (4-64).
        #[arg(short, long)]
        length: Option<usize>,

        #[command(flatten)]
        classes: ClassFlags,

        /// Start from a preset (see `templates`).
        #[arg(short, long)]
        template: Option<String>,

        /// Do not archive the result.
        #[arg(long)]
        no_history: bool,
    },
    /// Generate a word-based passphrase.
    Passphrase {
        /// Number of words (2-8).
        #[arg(short, long)]
        words: Option<usize>,

        /// Word list: common, memorable or technical.
        #[arg(short, long)]
        list: Option<WordListId>,

        /// Separator: "-", "_", ".", " " or "".
        #[arg(short, long)]
        separator: Option<Separator>,

        /// Keep words in lowercase.
        #[arg(long)]
        no_capitalize: bool,

        /// Number placement: none, prefix, suffix or between.
        #[arg(short, long)]
        numbers: Option<NumberPlacement>,

        /// Do not archive the result.
        #[arg(long)]
        no_history: bool,
    },
    /// Generate several secrets at once.
    Batch {
        /// Number of rows (1-50).
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Password length (4-64).
        #[arg(short, long)]
        length: Option<usize>,

        #[command(flatten)]
        classes: ClassFlags,

        /// Generate passphrases from the saved passphrase settings instead.
        #[arg(long)]
        passphrase: bool,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },
    /// Analyze the strength of any password.
    Analyze {
        value: String,
    },
    /// Shuffle the characters of a string.
    Shuffle {
        value: String,
    },
    /// List the password presets.
    Templates,
    /// Inspect or manage the password history.
    History {
        #[command(subcommand)]
        cmd: HistoryCommand,
    },
}

#[derive(Debug, Subcommand)]
enum HistoryCommand {
    /// List archived secrets, newest first.
    List,
    /// Remove one entry.
    Remove {
        id: String,
    },
    /// Remove every entry.
    Clear,
    /// Print the history as JSON.
    Export,
}

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn print_report(report: &StrengthReport) {
    println!(
        "Strength: {} ({}/{}), {} bits, crack time: {}",
        report.label,
        report.score,
        MAX_SCORE,
        report.rounded_entropy(),
        report.crack_time
    );
}

fn run() -> Result<()> {
    let args = Passforge::parse();
    let config = args.config.map(|p| p.to_string_lossy().to_string());
    let mut app = App::new(config)?;
    let settings = app.settings_engine.get_settings().clone();

    match args.cmd {
        Command::Generate { length, classes, template, no_history } => {
            let mut policy = match template {
                Some(id) => templates::find(&id)
                    .ok_or_else(|| format!("unknown template: {}", id))?
                    .policy()?,
                None => settings.password.clone(),
            };
            if let Some(length) = length {
                policy.length = length;
            }
            classes.apply(&mut policy);

            let secret = if no_history {
                use passforge::services::password_engine::PasswordEngineTrait;
                app.passwords.generate(&policy)?
            } else {
                app.generate_password(&policy)?
            };
            println!("{}", secret.as_str());
            print_report(&strength_estimator::analyze(secret.as_str()));
        }
        Command::Passphrase { words, list, separator, no_capitalize, numbers, no_history } => {
            let defaults = &settings.passphrase;
            let policy = PassphrasePolicy {
                word_count: words.unwrap_or(defaults.word_count),
                list: list.unwrap_or(defaults.list),
                separator: separator.unwrap_or(defaults.separator),
                capitalize: defaults.capitalize && !no_capitalize,
                number_placement: numbers.unwrap_or(defaults.number_placement),
            };

            let secret = if no_history {
                use passforge::services::passphrase_engine::PassphraseEngineTrait;
                app.passphrases.generate(&policy)?
            } else {
                app.generate_passphrase(&policy)?
            };
            println!("{}", secret.as_str());
            print_report(&strength_estimator::analyze(secret.as_str()));
        }
        Command::Batch { count, length, classes, passphrase, format } => {
            let policy = if passphrase {
                BatchPolicy::Passphrase(settings.passphrase.clone())
            } else {
                let mut charset = CharsetPolicy {
                    length: length.unwrap_or(settings.batch.length),
                    ..settings.password.clone()
                };
                classes.apply(&mut charset);
                BatchPolicy::Password(charset)
            };
            let items = app.generate_batch(&policy, count.unwrap_or(settings.batch.count))?;

            match format {
                Format::Table => {
                    for (i, item) in items.iter().enumerate() {
                        println!(
                            "{:>3}  {}  {:>3}  {}",
                            i + 1,
                            item.secret.as_str(),
                            item.secret.length,
                            item.strength.label
                        );
                    }
                }
                Format::Csv => print!("{}", export::batch_to_csv(&items)?),
                Format::Json => println!("{}", export::batch_to_json(&items)?),
            }
        }
        Command::Analyze { value } => {
            let report = strength_estimator::analyze(&value);
            let counts = CharacterCounts::of(&value);
            println!(
                "Length: {} ({} lowercase, {} uppercase, {} digits, {} symbols), {} unique",
                counts.total,
                counts.lowercase,
                counts.uppercase,
                counts.digits,
                counts.symbols,
                report.unique_chars
            );
            print_report(&report);
        }
        Command::Shuffle { value } => {
            println!("{}", app.shuffle(&value)?);
        }
        Command::Templates => {
            for template in templates::all() {
                println!(
                    "{:<14} {:<16} {:>2} chars  {}",
                    template.id, template.name, template.length, template.description
                );
            }
        }
        Command::History { cmd } => match cmd {
            HistoryCommand::List => {
                let now = now_millis();
                println!("{} of {} stored", app.history.len(), app.history.capacity());
                for entry in app.history.list() {
                    println!(
                        "{}  {}  {}",
                        entry.id,
                        entry.value,
                        relative_age(entry.created_at, now)
                    );
                }
            }
            HistoryCommand::Remove { id } => app.history.remove(&id),
            HistoryCommand::Clear => app.history.clear(),
            HistoryCommand::Export => {
                println!("{}", export::history_to_json(&app.history.list())?);
            }
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "passforge=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
