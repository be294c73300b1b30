// lvp: terminal host for the language-variant picker
use std::io::Write as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::watch;

use langvar_picker::application::picker::Picker;
use langvar_picker::domain::model::{Selection, DATA_UID};
use langvar_picker::domain::traits::{Component, SuggestService};
use langvar_picker::infrastructure::config::{self, load_config, Logging};
use langvar_picker::interfaces::cli::Cli;
use langvar_picker::presentation::render;
use langvar_picker::presentation::theme::Theme;
use langvar_picker::state::AppState;

// How long the frontend waits for a debounced lookup to land
const SUGGEST_WAIT: Duration = Duration::from_secs(8);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            let config_path_clone = config_path.clone();
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor)
                    .arg(&config_path_clone)
                    .status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }

    if cli.nocache {
        config.cache.enable = false;
    }

    let state = Arc::new(AppState::new(config.clone())?);

    if cli.status {
        print_status(&state).await?;
        return Ok(());
    }

    // Load theme
    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    // Clear screen if configured
    if config.clear_screen {
        clear_screen();
    }

    let window = Duration::from_millis(config.picker.debounce_ms);
    let initial = if cli.query.is_empty() {
        None
    } else {
        Some(cli.query.join(" "))
    };

    if cli.pair {
        run_pair(state, window, &theme, initial).await
    } else {
        run_single(state, window, &theme, initial, cli.json).await
    }
}

async fn run_single(
    state: Arc<AppState>,
    window: Duration,
    theme: &Theme,
    initial: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let service: Arc<dyn SuggestService> = state;
    let picker = Picker::with_window(service, window);
    picker.on_select(|dataset| {
        tracing::info!(uid = dataset.get(DATA_UID).unwrap_or(""), "language-select");
    });

    println!(
        "{}",
        (theme.prompt)("Type to search; enter a number to pick. Ctrl-C quits.")
    );
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let selection = drive_picker(&picker, &mut lines, theme, initial).await?;
    picker.dispose();

    match selection {
        Some(selection) if json => println!("{}", serde_json::to_string_pretty(&selection)?),
        Some(selection) => print!("{}", render::format_selection(&selection, theme)),
        None => {}
    }

    Ok(())
}

async fn run_pair(
    state: Arc<AppState>,
    window: Duration,
    theme: &Theme,
    initial: Option<String>,
) -> anyhow::Result<()> {
    let service: Arc<dyn SuggestService> = state;
    let de_picker = Picker::with_window(Arc::clone(&service), window);
    let al_picker = Picker::with_window(service, window);

    // Page glue: once both sides hold a uid, rewrite the trailing
    // language-pair segment of the location path. The pickers know
    // nothing about this convention.
    let location = Arc::new(Mutex::new("/".to_string()));
    install_pair_glue(&de_picker, &al_picker, &location, true);
    install_pair_glue(&al_picker, &de_picker, &location, false);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!(
        "{}",
        (theme.prompt)("Source language (type to search; enter a number to pick):")
    );
    let Some(de) = drive_picker(&de_picker, &mut lines, theme, initial).await? else {
        de_picker.dispose();
        al_picker.dispose();
        return Ok(());
    };
    print!("{}", render::format_selection(&de, theme));

    println!("{}", (theme.prompt)("Target language:"));
    let Some(al) = drive_picker(&al_picker, &mut lines, theme, None).await? else {
        de_picker.dispose();
        al_picker.dispose();
        return Ok(());
    };
    print!("{}", render::format_selection(&al, theme));

    println!("location: {}", location.lock().unwrap());
    de_picker.dispose();
    al_picker.dispose();

    Ok(())
}

fn install_pair_glue(
    picker: &Picker,
    other: &Picker,
    location: &Arc<Mutex<String>>,
    picker_is_source: bool,
) {
    let other = other.clone();
    let location = Arc::clone(location);
    picker.on_select(move |dataset| {
        let other_dataset = other.dataset();
        let (de_uid, al_uid) = if picker_is_source {
            (dataset.get(DATA_UID), other_dataset.get(DATA_UID))
        } else {
            (other_dataset.get(DATA_UID), dataset.get(DATA_UID))
        };
        if let (Some(de_uid), Some(al_uid)) = (de_uid, al_uid) {
            let mut path = location.lock().unwrap();
            *path = rewrite_pair_path(&path, de_uid, al_uid);
            tracing::info!(path = %path, "location updated");
        }
    });
}

/// Read input lines and feed them to the picker; a line that parses as
/// a list position commits that candidate and ends the session.
async fn drive_picker(
    picker: &Picker,
    lines: &mut Lines<BufReader<Stdin>>,
    theme: &Theme,
    initial: Option<String>,
) -> anyhow::Result<Option<Selection>> {
    let mut updates = picker.subscribe();

    if let Some(text) = initial {
        submit(picker, &mut updates, &text, theme).await;
    }

    loop {
        print!("{} ", (theme.prompt)("?"));
        std::io::stdout().flush()?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                return Ok(None);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(None); // EOF
                };
                if let Ok(n) = line.trim().parse::<usize>() {
                    if let Some(selection) = n.checked_sub(1).and_then(|i| picker.select_index(i)) {
                        return Ok(Some(selection));
                    }
                    eprintln!("{}", "No such suggestion".red());
                    continue;
                }
                submit(picker, &mut updates, &line, theme).await;
            }
        }
    }
}

async fn submit(picker: &Picker, updates: &mut watch::Receiver<u64>, text: &str, theme: &Theme) {
    let _ = updates.borrow_and_update();
    picker.input(text);
    match tokio::time::timeout(SUGGEST_WAIT, updates.changed()).await {
        Ok(Ok(())) => print!("{}", render::format_suggestions(&picker.suggestions(), theme)),
        // Failed or slow lookups surface nothing; the list is unchanged
        _ => eprintln!("{}", (theme.line)("(no suggestions)")),
    }
}

/// Replace the trailing one-or-two `xxx-000` segments of `path` with
/// the selected pair, appending when no such segments exist.
fn rewrite_pair_path(path: &str, de_uid: &str, al_uid: &str) -> String {
    let mut base = path.trim_end_matches('/');
    for _ in 0..2 {
        match base.rfind('/') {
            Some(pos) if is_uid_segment(&base[pos + 1..]) => base = &base[..pos],
            _ => break,
        }
    }
    format!("{}/{}/{}", base, de_uid, al_uid)
}

fn is_uid_segment(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7
        && bytes[..3].iter().all(|b| b.is_ascii_alphabetic())
        && bytes[3] == b'-'
        && bytes[4..].iter().all(|b| b.is_ascii_digit())
}

/// Clear the terminal screen
fn clear_screen() {
    // ANSI escape sequence: clear screen and move cursor to top-left
    print!("\x1B[2J\x1B[1;1H");
    std::io::Write::flush(&mut std::io::stdout()).ok();
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}

async fn print_status(state: &AppState) -> anyhow::Result<()> {
    println!("{}", "lvp Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = state.config.read().await;
    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Endpoint: {}", config.api.endpoint);
    println!("Preferred gloss langvar: {}", config.api.pref_trans_langvar);
    println!("Debounce window: {}ms", config.picker.debounce_ms);
    if config.cache.enable {
        println!(
            "Suggestion cache: {} entries (ttl {}s)",
            state.cache.len(),
            config.cache.ttl_secs
        );
    } else {
        println!("Suggestion cache: disabled");
    }

    Ok(())
}
