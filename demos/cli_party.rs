//! CLI pass-and-play example.

use std::io::{self, Write};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use impostor::{
    Category, ConfigUpdate, GameSession, GameState, RoleCard, RoundConfig, RoundObserver,
    TICK_INTERVAL, WordBank, player_number,
};
use tracing_subscriber::EnvFilter;

/// Terminal stand-in for sounds and vibration.
struct Bell;

impl RoundObserver for Bell {
    fn on_role_revealed(&mut self) {
        print!("\x07");
    }

    fn on_low_time(&mut self, remaining: u32) {
        println!("  ... {remaining}");
    }

    fn on_expired(&mut self) {
        println!("\x07Time's up!");
    }

    fn on_stopped(&mut self) {
        println!("\x07Discussion ended early.");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Impostor CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let session = Arc::new(
        GameSession::new(RoundConfig::default(), WordBank::builtin(), seed).with_observer(Bell),
    );

    loop {
        if !configure(&session) {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = session.start_round() {
            println!("Could not start round: {err}");
            continue;
        }

        if !pass_device(&session) {
            return;
        }

        discuss(&session);
        print_results(&session);

        if prompt_line("Play again? (y/n): ") != "y" {
            break;
        }
        session.reset();
    }
}

/// Returns `false` when the player wants to quit.
fn configure(session: &GameSession) -> bool {
    let config = session.config();
    println!(
        "\nPlayers: {}  Impostors: {}  Spies: {}  Category: {}  Timer: {}s",
        config.player_count,
        config.impostor_count,
        config.spy_count,
        config.category,
        config.timer_seconds
    );

    let categories: Vec<&str> = session.words().category_names().collect();
    let mut update = ConfigUpdate::default();

    let players = prompt_line(&format!("Players ({}): ", config.player_count));
    if players == "q" {
        return false;
    }
    if let Ok(players) = players.parse() {
        update = update.players(players);
    }

    // Input bounds follow the answers given so far.
    let pending = update.clone().apply(config.clone());
    if let Some(impostors) = prompt_count(&format!(
        "Impostors (max {}): ",
        pending.impostor_input_max()
    )) {
        update = update.impostors(impostors);
    }
    let pending = update.clone().apply(config.clone());
    if let Some(spies) = prompt_count(&format!("Spies (max {}): ", pending.spy_input_max())) {
        update = update.spies(spies);
    }

    let category = prompt_line(&format!("Category (mixed, {}): ", categories.join(", ")));
    if categories.contains(&category.as_str()) {
        update = update.category(Category::named(&category));
    } else if category == "mixed" {
        update = update.category(Category::Mixed);
    }

    if let Some(minutes) = prompt_count("Timer minutes: ") {
        update = update.timer_minutes(u32::try_from(minutes).unwrap_or(u32::MAX));
    }

    match session.configure(update) {
        Ok(config) => println!(
            "Playing with {} players, {} impostor(s), {} spy(ies).",
            config.player_count, config.impostor_count, config.spy_count
        ),
        Err(err) => println!("Config error: {err}"),
    }
    true
}

/// Returns `false` when the player wants to quit.
fn pass_device(session: &GameSession) -> bool {
    while session.state() == GameState::Reveals {
        let Some(turn) = session.turn_state() else {
            break;
        };
        clear_screen();
        let answer = prompt_line(&format!(
            "Pass the device to Player {}. Press enter to reveal: ",
            player_number(turn.current_player)
        ));
        if answer == "q" {
            return false;
        }

        match session.reveal() {
            Ok(card) => print_card(&card),
            Err(err) => {
                println!("Reveal error: {err}");
                continue;
            }
        }

        prompt_line("Press enter and pass the device on: ");
        if let Err(err) = session.advance() {
            println!("Advance error: {err}");
        }
    }
    clear_screen();
    true
}

fn discuss(session: &Arc<GameSession>) {
    println!("Discuss! Press enter to end the discussion early.");

    let stopper = Arc::clone(session);
    let (done_tx, done_rx) = mpsc::channel();
    thread::spawn(move || {
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_ok() {
            let _ = stopper.stop_early();
        }
        let _ = done_tx.send(());
    });

    while session.state() == GameState::Discussion {
        thread::sleep(TICK_INTERVAL);
        match session.tick() {
            Ok(timer) => {
                print!("\r{timer} ");
                let _ = io::stdout().flush();
            }
            Err(err) => {
                println!("Timer error: {err}");
                break;
            }
        }
    }
    println!();

    // The input thread still owns stdin until enter is pressed.
    if done_rx.try_recv().is_err() {
        println!("Press enter to see the results.");
        let _ = done_rx.recv();
    }
}

fn print_card(card: &RoleCard) {
    match card {
        RoleCard::Impostor => {
            println!("SECRET ROLE: IMPOSTOR");
            println!("Blend in. Don't let them know you don't know the word.");
        }
        RoleCard::Spy { category } => {
            println!("SECRET ROLE: SPY");
            println!("Category: {category}. You don't know the word.");
        }
        RoleCard::Regular { word } => {
            println!("SECRET WORD: {}", word.word);
            println!("Topic: {}", word.category);
        }
    }
}

fn print_results(session: &GameSession) {
    let Some(result) = session.result() else {
        return;
    };

    println!("Impostor(s): {}", player_list(&result.impostors));
    if result.has_spies() {
        println!("Spy(ies): {}", player_list(&result.spies));
    }
    println!("The word was: {}", result.secret_word.word);
}

fn player_list(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&index| format!("Player {}", player_number(index)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Blank or unparsable input keeps the current value.
fn prompt_count(prompt: &str) -> Option<usize> {
    prompt_line(prompt).parse().ok()
}
