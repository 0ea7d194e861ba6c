//! End-to-end session tests.
//!
//! These drive a `GiftExchange` through the command API exactly as a
//! presentation layer would, calling commands back to back with no delay.

use gift_exchange::{
    Action, GameError, GameResult, GiftExchange, Phase, PlayerId, SessionConfig, Transition,
};

/// Session with the named players added, not yet started.
fn session_with(names: &[&str]) -> GiftExchange {
    let mut game = GiftExchange::with_seed(2024).unwrap();
    for name in names {
        game.add_player(name).unwrap();
    }
    game
}

/// Start the game and return player ids sorted by drawn position.
fn start_and_order(game: &mut GiftExchange) -> Vec<PlayerId> {
    game.start_game().unwrap();
    game.state().turn_order().iter().map(|p| p.id).collect()
}

fn has_gift(game: &GiftExchange, id: PlayerId) -> bool {
    game.state().player(id).unwrap().has_gift
}

/// Run `f`, expect it to fail with `expected`, and check nothing changed.
fn assert_rejected<T: std::fmt::Debug>(
    game: &mut GiftExchange,
    expected: GameError,
    f: impl FnOnce(&mut GiftExchange) -> gift_exchange::Result<T>,
) {
    let before = game.state().clone();
    let err = f(game).unwrap_err();
    assert_eq!(err, expected);
    assert_eq!(game.state(), &before);
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_add_player_trims_and_assigns_fresh_ids() {
    let mut game = GiftExchange::with_seed(1).unwrap();

    let a = game.add_player("  Ada  ").unwrap();
    let b = game.add_player("Ada").unwrap();

    assert_ne!(a, b);
    let players: Vec<_> = game.state().players().cloned().collect();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name, "Ada");
    assert_eq!(players[1].name, "Ada"); // duplicates allowed
    assert!(players.iter().all(|p| p.order.is_none() && !p.has_gift));
    assert!(players.iter().all(|p| !p.icon.is_empty()));
}

#[test]
fn test_blank_names_are_silent_noops() {
    let mut game = session_with(&["Ada"]);

    for blank in ["", "   ", "\t\n"] {
        let before = game.state().clone();
        let err = game.add_player(blank).unwrap_err();
        assert_eq!(err, GameError::EmptyName);
        assert!(err.is_silent());
        assert_eq!(game.state(), &before);
    }
    assert_eq!(game.state().player_count(), 1);
}

#[test]
fn test_try_add_player_swallows_blank_names() {
    let mut game = session_with(&["Ada"]);
    let before = game.state().clone();

    assert_eq!(game.try_add_player("   "), Ok(None));
    assert_eq!(game.state(), &before);

    let id = game.try_add_player("Grace").unwrap();
    assert_eq!(id, Some(PlayerId::new(2)));

    game.start_game().unwrap();
    assert_eq!(
        game.try_add_player("Late"),
        Err(GameError::InvalidPhase { command: "AddPlayer", phase: Phase::Playing })
    );
}

#[test]
fn test_typed_commands_return_errors_after_game_ends() {
    let mut game = session_with(&["A", "B"]);
    let order = start_and_order(&mut game);
    game.take_from_pile(order[0]).unwrap();
    game.advance_turn().unwrap();
    game.take_from_pile(order[1]).unwrap();
    assert_eq!(game.phase(), Phase::Ended);

    assert_rejected(
        &mut game,
        GameError::InvalidPhase { command: "AddPlayer", phase: Phase::Ended },
        |g| g.add_player("Late"),
    );
    assert_rejected(
        &mut game,
        GameError::InvalidPhase { command: "StartGame", phase: Phase::Ended },
        |g| g.start_game(),
    );
}

#[test]
fn test_start_requires_two_players() {
    let mut game = GiftExchange::with_seed(1).unwrap();
    assert_rejected(&mut game, GameError::InsufficientPlayers(0), |g| g.start_game());

    game.add_player("Solo").unwrap();
    assert_rejected(&mut game, GameError::InsufficientPlayers(1), |g| g.start_game());
    assert_eq!(game.phase(), Phase::Setup);
}

#[test]
fn test_roster_frozen_after_start() {
    let mut game = session_with(&["A", "B"]);
    game.start_game().unwrap();

    assert_rejected(
        &mut game,
        GameError::InvalidPhase { command: "AddPlayer", phase: Phase::Playing },
        |g| g.add_player("Late"),
    );
    assert_rejected(
        &mut game,
        GameError::InvalidPhase { command: "StartGame", phase: Phase::Playing },
        |g| g.start_game(),
    );
}

#[test]
fn test_play_commands_rejected_during_setup() {
    let mut game = session_with(&["A", "B"]);
    let a = PlayerId::new(1);

    assert_rejected(
        &mut game,
        GameError::InvalidPhase { command: "TakeFromPile", phase: Phase::Setup },
        |g| g.take_from_pile(a),
    );
    assert_rejected(
        &mut game,
        GameError::InvalidPhase { command: "AdvanceTurn", phase: Phase::Setup },
        |g| g.advance_turn(),
    );
}

#[test]
fn test_start_assigns_permutation_and_first_turn() {
    for n in 2..=10 {
        let names: Vec<String> = (0..n).map(|i| format!("P{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut game = session_with(&refs);

        let first = game.start_game().unwrap();

        let mut orders: Vec<u32> = game.state().players().filter_map(|p| p.order).collect();
        orders.sort_unstable();
        assert_eq!(orders, (1..=n as u32).collect::<Vec<_>>());
        assert_eq!(game.state().player(first).unwrap().order, Some(1));
        assert_eq!(game.state().current_turn(), Some(first));
        assert_eq!(game.phase(), Phase::Playing);
    }
}

#[test]
fn test_roster_keeps_insertion_order_after_start() {
    let mut game = session_with(&["A", "B", "C", "D"]);
    game.start_game().unwrap();

    let names: Vec<_> = game.state().players().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_a_take_and_advance() {
    let mut game = session_with(&["P1", "P2", "P3"]);
    let order = start_and_order(&mut game);
    assert_eq!(game.state().current_turn(), Some(order[0]));

    let transition = game.take_from_pile(order[0]).unwrap();
    assert_eq!(transition, Transition::GiftTaken { player: order[0], game_over: false });
    assert!(has_gift(&game, order[0]));
    assert_eq!(game.state().current_turn(), None);

    let transition = game.advance_turn().unwrap();
    assert_eq!(transition, Transition::TurnAdvanced(order[1]));
    assert_eq!(game.state().current_turn(), Some(order[1]));
}

#[test]
fn test_scenario_b_steal_cascade_and_c_game_end() {
    let mut game = session_with(&["A", "B", "C"]);
    let order = start_and_order(&mut game);
    let (a, b, c) = (order[0], order[1], order[2]);

    game.take_from_pile(a).unwrap();
    game.advance_turn().unwrap();
    assert_eq!(game.state().current_turn(), Some(b));

    let transition = game.steal_gift(b, a).unwrap();
    assert_eq!(transition, Transition::GiftStolen { thief: b, victim: a });
    assert!(!has_gift(&game, a));
    assert!(has_gift(&game, b));
    assert_eq!(game.state().steal_count(a), 1);
    assert_eq!(game.state().current_turn(), Some(a));
    assert_eq!(game.state().just_stolen_from(), Some(a));

    // A must replace the stolen gift before doing anything else
    assert_rejected(&mut game, GameError::ForcedPileTake(a), |g| g.steal_gift(a, b));
    assert!(game.state().steal_targets().is_empty());

    game.take_from_pile(a).unwrap();
    assert!(has_gift(&game, a));
    assert_eq!(game.state().current_turn(), None);
    assert_eq!(game.state().just_stolen_from(), None);

    game.advance_turn().unwrap();
    assert_eq!(game.state().current_turn(), Some(c));

    // Scenario C: last gift ends the game without an AdvanceTurn
    let transition = game.take_from_pile(c).unwrap();
    assert_eq!(transition, Transition::GiftTaken { player: c, game_over: true });
    assert_eq!(game.phase(), Phase::Ended);
    assert!(game.state().all_have_gifts());

    let result = game.result().unwrap();
    assert_eq!(result.max_steals, 1);
    assert_eq!(result.winners.as_slice(), &[a]);

    assert_rejected(
        &mut game,
        GameError::InvalidPhase { command: "AdvanceTurn", phase: Phase::Ended },
        |g| g.advance_turn(),
    );
}

#[test]
fn test_scenario_d_winner_is_most_stolen_from() {
    let mut game = session_with(&["A", "B", "C", "D"]);
    let order = start_and_order(&mut game);
    let (a, b, c, d) = (order[0], order[1], order[2], order[3]);

    game.take_from_pile(a).unwrap();
    game.advance_turn().unwrap();
    game.steal_gift(b, a).unwrap();
    game.take_from_pile(a).unwrap();
    game.advance_turn().unwrap();
    game.steal_gift(c, a).unwrap();
    game.take_from_pile(a).unwrap();
    game.advance_turn().unwrap();
    game.steal_gift(d, b).unwrap();
    game.take_from_pile(b).unwrap();

    assert_eq!(game.phase(), Phase::Ended);
    assert_eq!(game.state().steal_count(a), 2);
    assert_eq!(game.state().steal_count(b), 1);
    assert!(!game.state().steal_counts().contains_key(&c));

    let result = game.result().unwrap();
    assert_eq!(result, GameResult::from_state(game.state()));
    assert_eq!(result.max_steals, 2);
    assert_eq!(result.winners.as_slice(), &[a]);
    assert!(result.is_winner(a));
    assert!(!result.is_winner(b));
}

#[test]
fn test_no_steals_no_winner_announcement() {
    let mut game = session_with(&["A", "B"]);
    let order = start_and_order(&mut game);

    game.take_from_pile(order[0]).unwrap();
    game.advance_turn().unwrap();
    game.take_from_pile(order[1]).unwrap();

    let result = game.result().unwrap();
    assert_eq!(result.max_steals, 0);
    assert!(!result.has_winner());
    assert_eq!(result.winners.len(), 2);
}

// =============================================================================
// Turn validation
// =============================================================================

#[test]
fn test_only_current_player_may_act() {
    let mut game = session_with(&["A", "B", "C"]);
    let order = start_and_order(&mut game);

    assert_rejected(&mut game, GameError::NotCurrentPlayer(order[1]), |g| {
        g.take_from_pile(order[1])
    });
    assert_rejected(&mut game, GameError::UnknownPlayer(PlayerId::new(99)), |g| {
        g.take_from_pile(PlayerId::new(99))
    });

    game.take_from_pile(order[0]).unwrap();

    // Nobody is current until the next turn is revealed
    assert_rejected(&mut game, GameError::NotCurrentPlayer(order[1]), |g| {
        g.take_from_pile(order[1])
    });
    assert_rejected(&mut game, GameError::NotCurrentPlayer(order[1]), |g| {
        g.steal_gift(order[1], order[0])
    });
}

#[test]
fn test_advance_turn_only_between_turns() {
    let mut game = session_with(&["A", "B"]);
    let order = start_and_order(&mut game);

    assert_rejected(&mut game, GameError::TurnInProgress(order[0]), |g| g.advance_turn());
}

#[test]
fn test_invalid_steal_targets() {
    let mut game = session_with(&["A", "B", "C"]);
    let order = start_and_order(&mut game);
    let (a, b, c) = (order[0], order[1], order[2]);

    // First player: nobody holds a gift yet
    assert_rejected(&mut game, GameError::InvalidStealTarget(b), |g| g.steal_gift(a, b));

    game.take_from_pile(a).unwrap();
    game.advance_turn().unwrap();

    assert_rejected(&mut game, GameError::InvalidStealTarget(b), |g| g.steal_gift(b, b));
    assert_rejected(&mut game, GameError::InvalidStealTarget(c), |g| g.steal_gift(b, c));
    assert_rejected(&mut game, GameError::InvalidStealTarget(PlayerId::new(77)), |g| {
        g.steal_gift(b, PlayerId::new(77))
    });
    assert_eq!(game.state().steal_targets(), vec![a]);
}

#[test]
fn test_stolen_from_player_can_steal_again_later() {
    let mut game = session_with(&["A", "B", "C", "D"]);
    let order = start_and_order(&mut game);
    let (a, b, c, d) = (order[0], order[1], order[2], order[3]);

    game.take_from_pile(a).unwrap();
    game.advance_turn().unwrap();
    game.steal_gift(b, a).unwrap();
    game.take_from_pile(a).unwrap();
    game.advance_turn().unwrap();

    // C steals; victim B is forced to the pile
    game.steal_gift(c, b).unwrap();
    assert_rejected(&mut game, GameError::ForcedPileTake(b), |g| g.steal_gift(b, a));
    game.take_from_pile(b).unwrap();

    game.advance_turn().unwrap();
    assert_eq!(game.state().current_turn(), Some(d));
    assert_eq!(game.state().steal_targets(), vec![a, b, c]);
}

// =============================================================================
// Turn advancement
// =============================================================================

#[test]
fn test_advance_turn_skips_gift_holders() {
    let mut game = session_with(&["A", "B", "C", "D"]);
    let order = start_and_order(&mut game);
    let (a, b, c) = (order[0], order[1], order[2]);

    game.take_from_pile(a).unwrap();
    game.advance_turn().unwrap();
    game.steal_gift(b, a).unwrap();
    game.take_from_pile(a).unwrap();

    // A and B hold gifts: next after A is C
    assert_eq!(game.advance_turn().unwrap(), Transition::TurnAdvanced(c));
}

#[test]
fn test_turn_numbers_and_history() {
    let mut game = session_with(&["A", "B"]);
    let order = start_and_order(&mut game);

    game.take_from_pile(order[0]).unwrap();
    game.advance_turn().unwrap();
    game.steal_gift(order[1], order[0]).unwrap();
    game.take_from_pile(order[0]).unwrap();

    let history: Vec<_> = game.state().history().iter().cloned().collect();
    let actions: Vec<_> = history.iter().map(|r| r.action.name()).collect();
    assert_eq!(
        actions,
        vec![
            "AddPlayer",
            "AddPlayer",
            "StartGame",
            "TakeFromPile",
            "AdvanceTurn",
            "StealGift",
            "TakeFromPile",
        ]
    );
    let turns: Vec<_> = history.iter().map(|r| r.turn).collect();
    assert_eq!(turns, vec![0, 0, 1, 1, 2, 2, 2]);
    assert!(history.iter().enumerate().all(|(i, r)| r.sequence == i as u32));
    assert_eq!(game.state().turn_number(), 2);
}

#[test]
fn test_rejections_are_not_recorded() {
    let mut game = session_with(&["A", "B"]);
    let _ = game.add_player(" ");
    let _ = game.advance_turn();

    assert_eq!(game.state().history().len(), 2);
}

// =============================================================================
// Presentation helpers
// =============================================================================

#[test]
fn test_order_reveal_walks_drawn_order() {
    let mut game = session_with(&["A", "B", "C", "D"]);
    let order = start_and_order(&mut game);

    let mut reveal = game.order_reveal();
    assert_eq!(reveal.progress(), (0, 4));
    assert!(reveal.revealed().is_empty());

    let first = reveal.next().unwrap();
    assert_eq!(first.id, order[0]);
    assert_eq!(first.order, Some(1));
    assert_eq!(reveal.progress(), (1, 4));

    let rest: Vec<_> = reveal.by_ref().map(|p| p.id).collect();
    assert_eq!(rest, order[1..].to_vec());
    assert!(reveal.is_complete());
    assert_eq!(reveal.revealed().len(), 4);
    assert!(reveal.next().is_none());

    // Revealing never redraws
    let again: Vec<_> = game.order_reveal().map(|p| p.id).collect();
    assert_eq!(again, order);
}

#[test]
fn test_order_reveal_empty_before_start() {
    let game = session_with(&["A", "B"]);
    let reveal = game.order_reveal();
    assert_eq!(reveal.progress(), (0, 0));
    assert!(reveal.is_complete());
}

#[test]
fn test_card_reveal_follows_turns() {
    let mut game = session_with(&["A", "B", "C"]);
    let order = start_and_order(&mut game);
    let (a, b, c) = (order[0], order[1], order[2]);

    assert!(game.state().is_revealed(a));
    assert!(!game.state().is_revealed(b));
    assert!(!game.state().is_revealed(c));

    game.take_from_pile(a).unwrap();
    game.advance_turn().unwrap();
    assert!(game.state().is_revealed(b));

    game.steal_gift(b, a).unwrap();
    assert!(game.state().has_had_turn(b));
    assert!(!game.state().is_revealed(c));
}

#[test]
fn test_legal_actions_track_turns() {
    let mut game = session_with(&["A", "B"]);
    assert_eq!(game.legal_actions(), vec![Action::StartGame]);

    let order = start_and_order(&mut game);
    assert_eq!(
        game.legal_actions(),
        vec![Action::TakeFromPile { player: order[0] }]
    );

    game.take_from_pile(order[0]).unwrap();
    assert_eq!(game.legal_actions(), vec![Action::AdvanceTurn]);

    game.advance_turn().unwrap();
    game.steal_gift(order[1], order[0]).unwrap();
    assert_eq!(
        game.legal_actions(),
        vec![Action::TakeFromPile { player: order[0] }]
    );
}

#[test]
fn test_custom_palette_and_determinism() {
    let config = SessionConfig::new().with_seed(77).with_icons(["*"]);
    let play = || {
        let mut game = GiftExchange::new(config.clone()).unwrap();
        for name in ["A", "B", "C", "D", "E"] {
            game.add_player(name).unwrap();
        }
        game.start_game().unwrap();
        game.state().clone()
    };

    let first = play();
    let second = play();
    assert_eq!(first, second);
    assert!(first.players().all(|p| p.icon == "*"));
}

#[test]
fn test_new_session_is_fresh() {
    let mut game = session_with(&["A", "B"]);
    game.start_game().unwrap();

    // "Play again" replaces the session
    game = GiftExchange::with_seed(2024).unwrap();
    assert_eq!(game.phase(), Phase::Setup);
    assert_eq!(game.state().player_count(), 0);
    assert!(game.state().steal_counts().is_empty());
}
