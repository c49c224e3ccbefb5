use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use services::{
    Advance, AnswerOutcome, Clock, DailyService, ProgressService, QuizBuilder, known_entries,
    recent_history, stats,
};
use storage::{JsonFileStore, ProgressStore};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vocab_core::navigator::Navigator;
use vocab_core::{Catalog, ProgressDocument};

#[derive(Debug)]
enum ArgsError {
    MissingCommand,
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingCommand => write!(f, "no command given"),
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Daily,
    Cards,
    Quiz,
    Progress,
}

#[derive(Debug)]
struct Args {
    command: Command,
    data_dir: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, ArgsError> {
    let mut command = None;
    let mut data_dir = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args.next().ok_or(ArgsError::MissingValue { flag: "--data" })?;
                data_dir = Some(PathBuf::from(value));
            }
            "daily" if command.is_none() => command = Some(Command::Daily),
            "cards" if command.is_none() => command = Some(Command::Cards),
            "quiz" if command.is_none() => command = Some(Command::Quiz),
            "progress" if command.is_none() => command = Some(Command::Progress),
            other if other.starts_with('-') => return Err(ArgsError::UnknownArg(other.to_owned())),
            other => return Err(ArgsError::UnknownCommand(other.to_owned())),
        }
    }

    Ok(Args {
        command: command.ok_or(ArgsError::MissingCommand)?,
        data_dir,
    })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- daily    [--data <dir>]   # word of the day");
    eprintln!("  cargo run -p app -- cards    [--data <dir>]   # flashcard loop");
    eprintln!("  cargo run -p app -- quiz     [--data <dir>]   # 5-question quiz");
    eprintln!("  cargo run -p app -- progress [--data <dir>]   # known words + history");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VOCAB_DATA_DIR   data directory when --data is not given");
}

fn resolve_data_dir(cli: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = cli {
        return dir;
    }
    if let Ok(dir) = std::env::var("VOCAB_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::data_local_dir()
        .map(|dir| dir.join("vocab-trainer"))
        .unwrap_or_else(|| PathBuf::from("vocab-data"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let data_dir = resolve_data_dir(args.data_dir);
    let backend = match JsonFileStore::open(&data_dir) {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("cannot open data directory {}: {err}", data_dir.display());
            return ExitCode::FAILURE;
        }
    };
    let progress = ProgressService::new(ProgressStore::new(Arc::new(backend)));
    let catalog = Catalog::builtin();

    match args.command {
        Command::Daily => run_daily(&catalog, &progress),
        Command::Cards => run_cards(&catalog, &progress),
        Command::Quiz => run_quiz(&catalog, &progress),
        Command::Progress => run_progress(&catalog, &progress),
    }
}

//
// ─── COMMANDS ──────────────────────────────────────────────────────────────────
//

fn run_daily(catalog: &Catalog, progress: &ProgressService) -> ExitCode {
    let doc = progress.load();
    let entry = DailyService::new().word_of_day(catalog);

    println!("Word of the day: {}", entry.source_text());
    println!("  {}  ({})", entry.target_text(), entry.transliteration());
    if doc.is_known(entry.id()) {
        println!("  already marked known");
    }
    ExitCode::SUCCESS
}

fn run_cards(catalog: &Catalog, progress: &ProgressService) -> ExitCode {
    let mut doc = progress.load();
    let mut nav = Navigator::new(catalog);
    let stdin = io::stdin();

    println!("Flashcards: [n]ext  [p]rev  [f]lip  [k]nown  [q]uit");
    loop {
        render_card(&nav, &doc);
        let Some(line) = read_line(&stdin) else { break };
        match line.trim() {
            "n" => {
                nav.next();
            }
            "p" => {
                nav.prev();
            }
            "f" => nav.flip(),
            "k" => {
                let id = nav.current().id().clone();
                match progress.mark_known_and_save(&mut doc, id) {
                    Ok(true) => println!("marked known"),
                    Ok(false) => println!("already known"),
                    Err(err) => {
                        warn!(error = %err, "could not save progress; keeping the mark for this session");
                    }
                }
            }
            "q" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }
    ExitCode::SUCCESS
}

fn render_card(nav: &Navigator<'_>, doc: &ProgressDocument) {
    let entry = nav.current();
    if nav.is_revealed() {
        println!(
            "\n[{}] {}  ({})",
            nav.index() + 1,
            entry.target_text(),
            entry.transliteration()
        );
    } else {
        println!("\n[{}] {}", nav.index() + 1, entry.source_text());
    }
    if nav.is_known(doc) {
        println!("    known");
    }
    prompt();
}

fn run_quiz(catalog: &Catalog, progress: &ProgressService) -> ExitCode {
    let mut doc = progress.load();
    let mut session = match QuizBuilder::new(catalog).start() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("cannot start quiz: {err}");
            return ExitCode::FAILURE;
        }
    };
    let stdin = io::stdin();
    let total = session.total_questions();

    while !session.is_complete() {
        let Some(question) = session.current_question().cloned() else {
            break;
        };
        let choices = session.current_choices(catalog);

        let asked = session.progress().answered + 1;
        println!("\n[{asked}/{total}] Translate: \"{}\"", question.source_text());
        for (i, choice) in choices.iter().enumerate() {
            println!("  {}) {}", i + 1, choice.target_text());
        }

        let chosen = loop {
            prompt();
            let Some(line) = read_line(&stdin) else {
                println!("\nquiz abandoned");
                return ExitCode::SUCCESS;
            };
            let picked = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|pick| pick.checked_sub(1))
                .and_then(|index| choices.get(index));
            match picked {
                Some(choice) => break choice.id().clone(),
                None => println!("enter a number between 1 and {}", choices.len()),
            }
        };

        match session.answer(&chosen) {
            Ok(AnswerOutcome::Correct) => println!("correct!"),
            Ok(AnswerOutcome::Incorrect { correct }) => {
                let reveal = catalog
                    .find_by_id(correct.as_str())
                    .map_or("?", |entry| entry.target_text());
                println!("wrong — correct answer: {reveal}");
            }
            Err(err) => println!("{err}"),
        }

        if session.advance() == Advance::Complete {
            break;
        }
    }

    match session.finish(&mut doc, Clock::default().today()) {
        Ok(result) => {
            println!("\nQuiz done — score: {}/{}", result.score(), result.total());
            if let Err(err) = progress.save(&doc) {
                warn!(error = %err, "could not save quiz result; it is kept for this session only");
            }
        }
        Err(err) => eprintln!("could not finish quiz: {err}"),
    }
    ExitCode::SUCCESS
}

fn run_progress(catalog: &Catalog, progress: &ProgressService) -> ExitCode {
    let doc = progress.load();

    let counts = stats(&doc, catalog);
    println!("Known words: {}/{}", counts.known, counts.total);
    for entry in known_entries(&doc, catalog) {
        println!("  {} — {}", entry.source_text(), entry.target_text());
    }

    let history = recent_history(&doc);
    if history.is_empty() {
        println!("No quizzes taken yet.");
    } else {
        println!("Quiz history:");
        for result in history {
            println!("  {} — {}/{}", result.date(), result.score(), result.total());
        }
    }
    ExitCode::SUCCESS
}

//
// ─── INPUT HELPERS ─────────────────────────────────────────────────────────────
//

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn read_line(stdin: &io::Stdin) -> Option<String> {
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, ArgsError> {
        parse_args(list.iter().map(|s| (*s).to_owned()))
    }

    #[test]
    fn parses_command_and_data_dir() {
        let parsed = args(&["quiz", "--data", "/tmp/vocab"]).unwrap();
        assert_eq!(parsed.command, Command::Quiz);
        assert_eq!(parsed.data_dir.as_deref(), Some(std::path::Path::new("/tmp/vocab")));
    }

    #[test]
    fn rejects_missing_command() {
        assert!(matches!(args(&[]).unwrap_err(), ArgsError::MissingCommand));
    }

    #[test]
    fn rejects_unknown_flag_and_missing_value() {
        assert!(matches!(
            args(&["daily", "--verbose"]).unwrap_err(),
            ArgsError::UnknownArg(_)
        ));
        assert!(matches!(
            args(&["daily", "--data"]).unwrap_err(),
            ArgsError::MissingValue { flag: "--data" }
        ));
    }

    #[test]
    fn explicit_dir_wins_over_fallbacks() {
        let dir = resolve_data_dir(Some(PathBuf::from("/explicit")));
        assert_eq!(dir, PathBuf::from("/explicit"));
    }
}
