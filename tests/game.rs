//! Game integration tests.

use bjcore::{
    Action, ActionReport, Card, DECK_SIZE, Game, GameOptions, OptionsError, Outcome, RoundState,
    ScriptedSource,
};

fn scripted_game(options: GameOptions, draws: &[Card]) -> Game<ScriptedSource> {
    Game::with_source(options, ScriptedSource::new(draws.iter().copied()))
        .expect("valid options")
}

fn play_stand(draws: &[Card]) -> Game<ScriptedSource> {
    let mut game = scripted_game(GameOptions::default(), draws);
    assert_eq!(
        game.handle_action(Action::Deal),
        ActionReport::Applied(RoundState::PlayerTurn)
    );
    game.handle_action(Action::Stand);
    game
}

#[test]
fn deal_order_is_player_player_dealer_dealer() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[Card::Two, Card::Three, Card::Four, Card::Five],
    );

    game.handle_action(Action::Deal);

    assert_eq!(game.state(), RoundState::PlayerTurn);
    assert_eq!(game.player_hand().cards(), &[Card::Two, Card::Three]);
    assert_eq!(game.dealer_hand().cards(), &[Card::Four, Card::Five]);
    assert_eq!(game.cards_remaining(), DECK_SIZE * 4 - 4);
    assert_eq!(game.message(), "");
    assert_eq!(game.round(), 1);
}

#[test]
fn player_wins_when_dealer_stands_lower() {
    let game = play_stand(&[Card::Ten, Card::Nine, Card::Ten, Card::Eight]);

    assert_eq!(game.state(), RoundState::Resolved);
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
    assert_eq!(game.message(), "You Win!");
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.scoreboard().wins(), 1);
    assert_eq!(game.scoreboard().total(), 1);
}

#[test]
fn hit_past_21_busts_immediately() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[Card::King, Card::Five, Card::Ten, Card::Seven, Card::Nine],
    );

    game.handle_action(Action::Deal);
    assert_eq!(
        game.handle_action(Action::Hit),
        ActionReport::Resolved(Outcome::PlayerBust)
    );

    assert_eq!(game.player_score(), 24);
    assert_eq!(game.message(), "Bust! Dealer Wins");
    assert_eq!(game.scoreboard().losses(), 1);

    // A second hit in the same pass must not count the loss again.
    assert_eq!(game.handle_action(Action::Hit), ActionReport::Ignored);
    assert_eq!(game.handle_action(Action::Stand), ActionReport::Ignored);
    assert_eq!(game.scoreboard().losses(), 1);
    assert_eq!(game.scoreboard().total(), 1);
}

#[test]
fn hit_under_21_keeps_player_turn() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[Card::Two, Card::Three, Card::Ten, Card::Seven, Card::Ace],
    );

    game.handle_action(Action::Deal);
    assert_eq!(
        game.handle_action(Action::Hit),
        ActionReport::Applied(RoundState::PlayerTurn)
    );
    assert_eq!(game.player_score(), 16);
    assert_eq!(game.scoreboard().total(), 0);
}

#[test]
fn dealer_draws_to_bust() {
    let game = play_stand(&[Card::Ten, Card::Ten, Card::Ten, Card::Six, Card::Ten]);

    assert_eq!(
        game.dealer_hand().cards(),
        &[Card::Ten, Card::Six, Card::Ten]
    );
    assert_eq!(game.dealer_visible_score(), Some(26));
    assert_eq!(game.outcome(), Some(Outcome::DealerBust));
    assert_eq!(game.message(), "Dealer Busts! You Win");
    assert_eq!(game.scoreboard().wins(), 1);
}

#[test]
fn equal_scores_tie() {
    let game = play_stand(&[Card::Nine, Card::Nine, Card::Nine, Card::Nine]);

    assert_eq!(game.outcome(), Some(Outcome::Tie));
    assert_eq!(game.message(), "Tie Game");
    assert_eq!(game.scoreboard().ties(), 1);
    assert_eq!(game.scoreboard().total(), 1);
}

#[test]
fn dealer_wins_with_higher_score() {
    let game = play_stand(&[Card::Ten, Card::Seven, Card::Ten, Card::Nine]);

    assert_eq!(game.outcome(), Some(Outcome::DealerWins));
    assert_eq!(game.message(), "Dealer Wins");
    assert_eq!(game.scoreboard().losses(), 1);
}

#[test]
fn soft_dealer_hand_keeps_drawing_below_threshold() {
    // Dealer A,5 is a soft 16 and must draw; A,5,K is a hard 16 and must draw again.
    let game = play_stand(&[
        Card::Ten,
        Card::Eight,
        Card::Ace,
        Card::Five,
        Card::King,
        Card::Two,
    ]);

    assert_eq!(game.dealer_hand().len(), 4);
    assert_eq!(game.dealer_visible_score(), Some(18));
    assert_eq!(game.outcome(), Some(Outcome::Tie));
}

#[test]
fn stand_threshold_is_configurable() {
    let mut game = scripted_game(
        GameOptions::default().with_stand_threshold(0),
        &[Card::Ten, Card::Ten, Card::Two, Card::Three],
    );

    game.handle_action(Action::Deal);
    game.handle_action(Action::Stand);

    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn idle_accepts_only_deal() {
    let mut game = scripted_game(GameOptions::default(), &[]);

    for action in [Action::Hit, Action::Stand, Action::NextRound] {
        assert_eq!(game.handle_action(action), ActionReport::Ignored);
        assert_eq!(game.state(), RoundState::Idle);
    }
    assert!(game.player_hand().is_empty());
    assert_eq!(game.available_actions(), &[Action::Deal]);
    assert_eq!(game.round(), 0);
}

#[test]
fn player_turn_rejects_deal_and_next_round() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[Card::Two, Card::Three, Card::Four, Card::Five],
    );
    game.handle_action(Action::Deal);

    assert_eq!(game.handle_action(Action::Deal), ActionReport::Ignored);
    assert_eq!(game.handle_action(Action::NextRound), ActionReport::Ignored);
    assert_eq!(game.player_hand().cards(), &[Card::Two, Card::Three]);
    assert_eq!(game.available_actions(), &[Action::Hit, Action::Stand]);
}

#[test]
fn resolved_accepts_only_next_round() {
    let mut game = play_stand(&[Card::Ten, Card::Nine, Card::Ten, Card::Eight]);
    let board = *game.scoreboard();

    for action in [Action::Deal, Action::Hit, Action::Stand] {
        assert_eq!(game.handle_action(action), ActionReport::Ignored);
        assert_eq!(game.state(), RoundState::Resolved);
    }
    assert_eq!(*game.scoreboard(), board);
    assert_eq!(game.available_actions(), &[Action::NextRound]);

    assert_eq!(
        game.handle_action(Action::NextRound),
        ActionReport::Applied(RoundState::Idle)
    );
    assert_eq!(game.state(), RoundState::Idle);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.message(), "");
    assert_eq!(game.outcome(), None);
    assert_eq!(*game.scoreboard(), board);
}

#[test]
fn dealer_hole_cards_hidden_until_resolved() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[Card::Ten, Card::Nine, Card::Queen, Card::Seven],
    );
    game.handle_action(Action::Deal);

    assert!(!game.is_dealer_revealed());
    assert_eq!(game.visible_dealer_cards(), &[Card::Queen]);
    assert_eq!(game.dealer_visible_score(), None);

    game.handle_action(Action::Stand);

    assert!(game.is_dealer_revealed());
    assert_eq!(game.visible_dealer_cards(), &[Card::Queen, Card::Seven]);
    assert_eq!(game.dealer_visible_score(), Some(17));
}

#[test]
fn each_round_gets_a_fresh_shoe() {
    let mut game = scripted_game(GameOptions::default().with_decks(1), &[]);

    game.handle_action(Action::Deal);
    game.handle_action(Action::Hit);
    game.handle_action(Action::Stand);
    game.handle_action(Action::NextRound);
    game.handle_action(Action::Deal);

    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(game.round(), 2);
}

#[test]
fn exhausted_shoe_aborts_round_without_scoring() {
    let options = GameOptions::default()
        .with_decks(1)
        .with_stand_threshold(u32::MAX);
    let mut game = scripted_game(options, &[]);

    game.handle_action(Action::Deal);
    assert_eq!(
        game.handle_action(Action::Stand),
        ActionReport::Resolved(Outcome::Aborted)
    );

    assert_eq!(game.state(), RoundState::Resolved);
    assert_eq!(game.message(), "Round aborted: deck exhausted");
    assert_eq!(game.dealer_hand().len(), DECK_SIZE - 2);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.scoreboard().total(), 0);

    assert_eq!(
        game.handle_action(Action::NextRound),
        ActionReport::Applied(RoundState::Idle)
    );
}

#[test]
fn zero_decks_is_rejected() {
    let result = Game::new(GameOptions::default().with_decks(0), 1);
    assert_eq!(result.err(), Some(OptionsError::ZeroDecks));
}

#[test]
fn same_seed_deals_same_round() {
    let deal = |seed| {
        let mut game = Game::new(GameOptions::default(), seed).expect("valid options");
        game.handle_action(Action::Deal);
        game.handle_action(Action::Hit);
        (game.player_hand().clone(), game.dealer_hand().clone())
    };

    assert_eq!(deal(99), deal(99));
}

#[test]
fn borrowed_source_can_be_inspected_after_play() {
    let mut source = ScriptedSource::new([Card::Ten, Card::Nine, Card::Ten, Card::Eight]);
    source.extend([Card::Two]);

    {
        let mut game = Game::with_source(GameOptions::default(), &mut source)
            .expect("valid options");
        game.handle_action(Action::Deal);
        game.handle_action(Action::Stand);
        assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
    }

    assert_eq!(source.remaining(), 1);
}

#[test]
fn scoreboard_never_decreases_over_many_rounds() {
    let mut game = Game::new(GameOptions::default(), 2024).expect("valid options");
    let mut previous = *game.scoreboard();

    for round in 0..300_u32 {
        game.handle_action(Action::Deal);
        for _ in 0..(round % 3) {
            game.handle_action(Action::Hit);
        }
        game.handle_action(Action::Stand);
        assert_eq!(game.state(), RoundState::Resolved);

        let board = *game.scoreboard();
        assert!(board.wins() >= previous.wins());
        assert!(board.losses() >= previous.losses());
        assert!(board.ties() >= previous.ties());
        assert_eq!(board.total(), previous.total() + 1);
        previous = board;

        game.handle_action(Action::NextRound);
    }

    assert_eq!(game.scoreboard().total(), 300);
}
