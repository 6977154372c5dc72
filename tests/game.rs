//! Session integration tests.

use std::sync::{Arc, Mutex};

use impostor::{
    Category, ConfigError, ConfigUpdate, GameSession, GameState, Role, RoleCard, RoundConfig,
    RoundError, RoundEvent, RoundObserver, TimerError, TimerState, TurnError, TurnPhase, View,
    WordBank, WordError,
};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<RoundEvent>>>);

impl Recorder {
    fn events(&self) -> Vec<RoundEvent> {
        self.0.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl RoundObserver for Recorder {
    fn on_role_revealed(&mut self) {
        self.0.lock().unwrap().on_role_revealed();
    }

    fn on_turn_passed(&mut self) {
        self.0.lock().unwrap().on_turn_passed();
    }

    fn on_tick(&mut self, remaining: u32) {
        self.0.lock().unwrap().on_tick(remaining);
    }

    fn on_low_time(&mut self, remaining: u32) {
        self.0.lock().unwrap().on_low_time(remaining);
    }

    fn on_expired(&mut self) {
        self.0.lock().unwrap().on_expired();
    }

    fn on_stopped(&mut self) {
        self.0.lock().unwrap().on_stopped();
    }
}

fn new_session(config: RoundConfig, seed: u64) -> (GameSession, Recorder) {
    let recorder = Recorder::default();
    let session = GameSession::new(config, WordBank::builtin(), seed).with_observer(recorder.clone());
    (session, recorder)
}

fn play_reveals(session: &GameSession) -> Vec<RoleCard> {
    let players = session.config().player_count;
    (0..players)
        .map(|_| {
            let card = session.reveal().unwrap();
            session.advance().unwrap();
            card
        })
        .collect()
}

#[test]
fn full_round_with_one_impostor() {
    let config = RoundConfig::default()
        .with_players(4)
        .with_impostors(1)
        .with_spies(0)
        .with_category(Category::named("animals"))
        .with_timer_seconds(5);
    let (session, _) = new_session(config, 7);
    let animals = session.words().words("animals").unwrap().to_vec();

    session.start_round().unwrap();
    assert_eq!(session.state(), GameState::Reveals);

    let cards = play_reveals(&session);
    let impostors = cards.iter().filter(|card| card.role() == Role::Impostor).count();
    assert_eq!(impostors, 1);

    let words: Vec<&str> = cards
        .iter()
        .filter_map(|card| match card {
            RoleCard::Regular { word } => Some(word.word.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(words.len(), 3);
    assert!(words.iter().all(|word| *word == words[0]));
    assert!(animals.iter().any(|animal| animal == words[0]));

    assert_eq!(session.state(), GameState::Discussion);
    assert_eq!(
        session.timer_state(),
        Some(TimerState {
            remaining_seconds: 5,
            running: true,
        })
    );

    for _ in 0..5 {
        session.tick().unwrap();
    }

    assert_eq!(session.state(), GameState::GameOver);
    let result = session.result().unwrap();
    assert_eq!(result.impostors.len(), 1);
    assert!(result.spies.is_empty());
    assert!(!result.has_spies());
    assert!(!result.secret_word.word.is_empty());
    assert_eq!(result.secret_word.word, words[0]);
    assert_eq!(cards[result.impostors[0]], RoleCard::Impostor);
}

#[test]
fn events_fire_in_order() {
    let config = RoundConfig::default().with_players(3).with_timer_seconds(3);
    let (session, recorder) = new_session(config, 1);

    session.start_round().unwrap();
    play_reveals(&session);
    for _ in 0..3 {
        session.tick().unwrap();
    }

    assert_eq!(
        recorder.events(),
        vec![
            RoundEvent::RoleRevealed,
            RoundEvent::TurnPassed,
            RoundEvent::RoleRevealed,
            RoundEvent::TurnPassed,
            RoundEvent::RoleRevealed,
            RoundEvent::TurnPassed,
            RoundEvent::LowTime(3),
            RoundEvent::Tick(2),
            RoundEvent::LowTime(2),
            RoundEvent::Tick(1),
            RoundEvent::LowTime(1),
            RoundEvent::Tick(0),
            RoundEvent::Expired,
        ]
    );
}

#[test]
fn reveal_feedback_is_identical_for_every_role() {
    let config = RoundConfig::default()
        .with_players(6)
        .with_impostors(2)
        .with_spies(2);
    let (session, recorder) = new_session(config, 3);

    session.start_round().unwrap();
    for _ in 0..6 {
        recorder.clear();
        session.reveal().unwrap();
        assert_eq!(recorder.events(), vec![RoundEvent::RoleRevealed]);
        session.advance().unwrap();
    }
}

#[test]
fn spies_see_the_category_only() {
    let config = RoundConfig::default()
        .with_players(5)
        .with_impostors(1)
        .with_spies(2)
        .with_category(Category::named("food"));
    let (session, _) = new_session(config, 11);

    session.start_round().unwrap();
    let cards = play_reveals(&session);

    let spies: Vec<&RoleCard> = cards.iter().filter(|card| card.role() == Role::Spy).collect();
    assert_eq!(spies.len(), 2);
    for card in spies {
        assert_eq!(
            *card,
            RoleCard::Spy {
                category: Category::named("food"),
            }
        );
    }
}

#[test]
fn turn_errors() {
    let (session, _) = new_session(RoundConfig::default(), 1);

    assert_eq!(session.reveal().unwrap_err(), TurnError::InvalidState);
    assert_eq!(session.advance().unwrap_err(), TurnError::InvalidState);

    session.start_round().unwrap();
    assert_eq!(session.advance().unwrap_err(), TurnError::InvalidTransition);

    session.reveal().unwrap();
    assert_eq!(session.reveal().unwrap_err(), TurnError::InvalidTransition);

    let turn = session.advance().unwrap();
    assert_eq!(turn.current_player, 1);
    assert_eq!(turn.phase, TurnPhase::AwaitingPass);
}

#[test]
fn start_round_errors() {
    let (session, _) = new_session(RoundConfig::default(), 1);
    session.start_round().unwrap();
    assert_eq!(session.start_round().unwrap_err(), RoundError::InvalidState);

    let config = RoundConfig::default().with_category(Category::named("sports"));
    let (session, _) = new_session(config, 1);
    assert_eq!(
        session.start_round().unwrap_err(),
        RoundError::Word(WordError::UnknownCategory)
    );
    assert_eq!(session.state(), GameState::Setup);
    assert_eq!(session.turn_state(), None);

    let empty = GameSession::new(RoundConfig::default(), WordBank::new(), 1);
    assert_eq!(
        empty.start_round().unwrap_err(),
        RoundError::Word(WordError::EmptyDataset)
    );
}

#[test]
fn configure_repairs_and_is_locked_during_rounds() {
    let (session, _) = new_session(RoundConfig::default(), 1);

    let config = session
        .configure(ConfigUpdate::default().players(5).spies(3))
        .unwrap();
    assert_eq!(config.spy_count, 3);

    let config = session.configure(ConfigUpdate::default().impostors(2)).unwrap();
    assert_eq!(config.impostor_count, 2);
    assert_eq!(config.spy_count, 2);

    let config = session.configure(ConfigUpdate::default().players(3)).unwrap();
    assert_eq!(config.impostor_count, 2);
    assert_eq!(config.spy_count, 0);
    assert_eq!(session.config(), config);

    session.start_round().unwrap();
    assert_eq!(
        session
            .configure(ConfigUpdate::default().players(8))
            .unwrap_err(),
        ConfigError::InvalidState
    );
    assert_eq!(session.config().player_count, 3);
}

#[test]
fn views_follow_the_round() {
    let config = RoundConfig::default().with_players(3).with_timer_seconds(60);
    let (session, _) = new_session(config, 5);

    assert_eq!(session.current_view(), View::Setup);
    session.start_round().unwrap();
    assert_eq!(session.current_view(), View::Pass { player: 0 });
    session.reveal().unwrap();
    assert_eq!(session.current_view(), View::Reveal { player: 0 });
    session.advance().unwrap();
    assert_eq!(session.current_view(), View::Pass { player: 1 });
    session.reveal().unwrap();
    session.advance().unwrap();
    session.reveal().unwrap();
    session.advance().unwrap();

    assert_eq!(
        session.current_view(),
        View::Discussion {
            timer: TimerState {
                remaining_seconds: 60,
                running: true,
            },
        }
    );

    session.stop_early().unwrap();
    assert_eq!(session.current_view(), View::GameOver);
}

#[test]
fn stop_early_discloses_results_once() {
    let config = RoundConfig::default().with_players(3).with_timer_seconds(30);
    let (session, recorder) = new_session(config, 9);

    session.start_round().unwrap();
    play_reveals(&session);
    session.tick().unwrap();
    recorder.clear();

    let stopped = session.stop_early().unwrap();
    assert_eq!(stopped.remaining_seconds, 0);
    assert!(!stopped.running);
    assert_eq!(session.state(), GameState::GameOver);
    assert!(session.result().is_some());

    session.stop_early().unwrap();
    session.tick().unwrap();
    assert_eq!(recorder.events(), vec![RoundEvent::Stopped]);
}

#[test]
fn timer_commands_require_a_discussion() {
    let (session, _) = new_session(RoundConfig::default(), 1);
    assert_eq!(session.tick().unwrap_err(), TimerError::InvalidState);

    session.start_round().unwrap();
    assert_eq!(session.stop_early().unwrap_err(), TimerError::InvalidState);
    assert_eq!(session.timer_state(), None);
}

#[test]
fn reset_discards_the_round() {
    let config = RoundConfig::default().with_players(3).with_timer_seconds(30);
    let (session, recorder) = new_session(config, 2);

    session.start_round().unwrap();
    play_reveals(&session);
    recorder.clear();

    session.reset();
    assert_eq!(session.state(), GameState::Setup);
    assert_eq!(session.turn_state(), None);
    assert_eq!(session.timer_state(), None);
    assert_eq!(session.result(), None);
    assert_eq!(session.tick().unwrap_err(), TimerError::InvalidState);
    assert!(recorder.events().is_empty());

    session.start_round().unwrap();
    assert_eq!(session.turn_state().unwrap().current_player, 0);
}

#[test]
fn same_seed_same_round() {
    let config = RoundConfig::default().with_players(7).with_impostors(2).with_spies(1);

    let outcome = |seed| {
        let (session, _) = new_session(config.clone(), seed);
        session.start_round().unwrap();
        play_reveals(&session);
        session.stop_early().unwrap();
        session.result().unwrap()
    };

    assert_eq!(outcome(1234), outcome(1234));
}

#[test]
fn session_repairs_initial_config() {
    let config = RoundConfig::default().with_players(4).with_impostors(9).with_spies(9);
    let session = GameSession::new(config, WordBank::builtin(), 1);
    assert!(session.config().is_valid());
}

#[test]
fn failed_start_keeps_the_seeded_sequence() {
    let config = RoundConfig::default()
        .with_players(10)
        .with_impostors(3)
        .with_category(Category::named("animals"));

    let finish = |session: &GameSession| {
        session.start_round().unwrap();
        play_reveals(session);
        session.stop_early().unwrap();
        session.result().unwrap()
    };

    let (fresh, _) = new_session(config.clone(), 1);
    let expected = finish(&fresh);

    let (retried, _) = new_session(config.with_category(Category::named("sports")), 1);
    assert_eq!(
        retried.start_round().unwrap_err(),
        RoundError::Word(WordError::UnknownCategory)
    );
    retried
        .configure(ConfigUpdate::default().category(Category::named("animals")))
        .unwrap();

    assert_eq!(finish(&retried), expected);
}

#[test]
fn configure_rejects_unknown_categories() {
    let (session, _) = new_session(RoundConfig::default(), 1);
    let before = session.config();

    assert_eq!(
        session
            .configure(
                ConfigUpdate::default()
                    .players(6)
                    .category(Category::named("sports"))
            )
            .unwrap_err(),
        ConfigError::UnknownCategory
    );
    assert_eq!(session.config(), before);

    let config = session
        .configure(ConfigUpdate::default().category(Category::named("food")))
        .unwrap();
    assert_eq!(config.category, Category::named("food"));

    let config = session
        .configure(ConfigUpdate::default().category(Category::Mixed))
        .unwrap();
    assert_eq!(config.category, Category::Mixed);
}
