use crossterm::style::Stylize;
use sign_core::core::types::{PhraseCategory, ResultOrigin, SignKind, TranslationResult};
use sign_core::persistence::save_to_disk;
use sign_core::projection::{playback_frames, TranslationResponse};
use sign_core::store::{GestureFilter, PhraseFilter};
use sign_core::{EngineConfig, LocalEngine};
use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "ISL_SIGN_CONFIG";

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> Result<EngineConfig, sign_core::DataError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => EngineConfig::load(Path::new(&path)),
        None => Ok(EngineConfig::default()),
    }
}

#[derive(Default)]
struct Modes {
    json: bool,
    playback: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let local = match load_config().and_then(LocalEngine::from_config) {
        Ok(local) => local,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "Text to ISL sign sequence. Type 'exit' to quit.".bold());
    println!("Commands: :json  :seq  :phrases [category]  :search <q>  :letters  :export <path>");
    println!("---------------------------------------------------------------");

    let mut modes = Modes::default();
    let mut lines = stdin().lock().lines();
    loop {
        print!("\n> ");
        if stdout().flush().is_err() {
            break;
        }
        let Some(Ok(line)) = lines.next() else { break };
        let input = line.trim();

        match input {
            "exit" => break,
            "" => continue,
            ":json" => {
                modes.json = !modes.json;
                println!("JSON output {}", if modes.json { "on" } else { "off" });
            }
            ":seq" => {
                modes.playback = !modes.playback;
                println!("Playback frames {}", if modes.playback { "on" } else { "off" });
            }
            ":letters" => {
                for gesture in local.gestures().list(GestureFilter::default()) {
                    println!(
                        "  {}  {}",
                        gesture.label.as_str().bold(),
                        gesture.note.unwrap_or_default()
                    );
                }
            }
            s if s.starts_with(":phrases") => {
                let category = s.trim_start_matches(":phrases").trim();
                match parse_category(category) {
                    Ok(category) => {
                        let filter = PhraseFilter {
                            category,
                            difficulty: None,
                        };
                        for phrase in local.phrases().list(filter) {
                            println!("  {}  {}", phrase.phrase.as_str().bold(), phrase.usage);
                        }
                    }
                    Err(unknown) => println!("{} unknown category '{}'", "[WARN]".yellow(), unknown),
                }
            }
            s if s.starts_with(":search ") => {
                let hits = local.phrases().search(&s[":search ".len()..]);
                if hits.is_empty() {
                    println!("No phrases found.");
                }
                for phrase in hits {
                    println!("  {}", phrase.phrase);
                }
            }
            s if s.starts_with(":export ") => {
                let path = Path::new(s[":export ".len()..].trim());
                match save_to_disk(&local.snapshot(), path) {
                    Ok(()) => println!("Tables written to '{}'", path.display()),
                    Err(e) => eprintln!("{} could not write snapshot: {}", "[ERROR]".red(), e),
                }
            }
            text => match local.engine.translate(text).await {
                Ok(result) => print_result(result, &modes),
                Err(e) => eprintln!("{} {}", "[ERROR]".red(), e),
            },
        }
    }

    ExitCode::SUCCESS
}

fn parse_category(name: &str) -> Result<Option<PhraseCategory>, String> {
    if name.is_empty() {
        return Ok(None);
    }
    serde_json::from_value(serde_json::Value::String(name.to_lowercase()))
        .map(Some)
        .map_err(|_| name.to_string())
}

fn print_result(result: TranslationResult, modes: &Modes) {
    if modes.playback {
        let labels: Vec<String> = playback_frames(&result.sequence)
            .into_iter()
            .map(|f| f.label)
            .collect();
        println!("{}", labels.join(" "));
    }

    if modes.json {
        match serde_json::to_string_pretty(&TranslationResponse::from(result)) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{} {}", "[ERROR]".red(), e),
        }
        return;
    }

    match (&result.origin, &result.phrase) {
        (ResultOrigin::Phrase, Some(phrase)) => {
            println!("{} {}", "Phrase:".green().bold(), phrase.label);
            println!("Usage: {}", phrase.usage);
        }
        _ => println!("{}", "Text:".cyan().bold()),
    }

    let mut line = String::new();
    for unit in &result.sequence {
        let rendered = match unit.kind {
            SignKind::WordStart => format!("\n  {} ", unit.symbol.as_str().bold()),
            SignKind::Space => "·".dim().to_string(),
            SignKind::Punctuation => format!("[{}]", unit.symbol).yellow().to_string(),
            SignKind::Letter | SignKind::Number | SignKind::Word => format!("{} ", unit.symbol),
        };
        line.push_str(&rendered);
    }
    println!("{}", line.trim_start());
    println!("\n{}", result.note.as_str().italic());

    for dropped in &result.dropped {
        println!(
            "{} dropped '{}' ({:?})",
            "[WARN]".yellow(),
            dropped.symbol,
            dropped.reason
        );
    }
}
