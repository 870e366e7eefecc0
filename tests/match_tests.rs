use broadside::{
    CellState, Fleet, GameError, Match, MatchStatus, Orientation, PlayerId, Seat, Ship, ShipClass,
    ShotOutcome, Strategy,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const PATROL: ShipClass = ShipClass::new("Patrol", 2);

fn two_patrol_match() -> Match {
    let fleet1 = Fleet::from_ships(vec![Ship::new(PATROL, Orientation::Horizontal, 9, 0).unwrap()])
        .unwrap();
    let fleet2 = Fleet::from_ships(vec![Ship::new(PATROL, Orientation::Horizontal, 0, 0).unwrap()])
        .unwrap();
    Match::with_fleets(fleet1, fleet2, Seat::Human, Seat::Human)
}

#[test]
fn test_hit_then_sink_ends_match() {
    let mut game = two_patrol_match();

    // player 1 hits (0,0) on player 2's patrol boat
    assert_eq!(game.fire(0, 0).unwrap(), ShotOutcome::Hit);
    assert_eq!(game.shots(PlayerId::One).get(0, 0), CellState::Hit);
    assert_eq!(game.revealed(PlayerId::Two).get(0, 0), CellState::Hit);
    assert_eq!(game.status(), MatchStatus::InProgress);
    assert_eq!(game.active_player(), PlayerId::Two);

    // player 2 misses
    assert_eq!(game.fire(5, 5).unwrap(), ShotOutcome::Miss);
    assert_eq!(game.shots(PlayerId::Two).get(5, 5), CellState::Miss);
    assert_eq!(game.active_player(), PlayerId::One);

    // player 1 finishes the boat: both cells flip to Sunk on both grids
    assert_eq!(game.fire(0, 1).unwrap(), ShotOutcome::Sunk("Patrol"));
    for col in 0..2 {
        assert_eq!(game.shots(PlayerId::One).get(0, col), CellState::Sunk);
        assert_eq!(game.revealed(PlayerId::Two).get(0, col), CellState::Sunk);
    }
    assert_eq!(game.status(), MatchStatus::Over(PlayerId::One));
    assert_eq!(game.winner(), Some(PlayerId::One));
}

#[test]
fn test_repeated_shot_rejected_without_mutation() {
    let mut game = two_patrol_match();
    assert_eq!(game.fire(4, 4).unwrap(), ShotOutcome::Miss);
    assert_eq!(game.fire(9, 9).unwrap(), ShotOutcome::Miss);

    // player 1 re-targets its own resolved cell
    let active_before = game.active_player();
    assert_eq!(game.fire(4, 4).unwrap_err(), GameError::CellAlreadyResolved);
    assert!(!game.resolve_shot(4, 4));
    assert_eq!(game.active_player(), active_before);
    assert_eq!(game.shots(PlayerId::One).get(4, 4), CellState::Miss);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = two_patrol_match();
    assert_eq!(
        game.fire(10, 0).unwrap_err(),
        GameError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        game.fire(0, 10).unwrap_err(),
        GameError::OutOfBounds { row: 0, col: 10 }
    );
    assert_eq!(game.active_player(), PlayerId::One);
}

#[test]
fn test_no_shots_after_match_over() {
    let mut game = two_patrol_match();
    game.fire(0, 0).unwrap();
    game.fire(9, 9).unwrap();
    game.fire(0, 1).unwrap();
    assert_eq!(game.status(), MatchStatus::Over(PlayerId::One));

    assert_eq!(game.fire(5, 5).unwrap_err(), GameError::MatchOver);
    assert!(!game.resolve_shot(5, 5));
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(!game.ai_move(&mut rng));
}

#[test]
fn test_ai_move_refused_for_human_seat() {
    let mut game = two_patrol_match();
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(!game.ai_move(&mut rng));
    assert_eq!(game.active_player(), PlayerId::One);
}

#[test]
fn test_strict_alternation() {
    let mut game = two_patrol_match();
    let mut expected = PlayerId::One;
    for col in 2..8 {
        assert_eq!(game.active_player(), expected);
        // open water for both players
        assert!(game.resolve_shot(5, col));
        expected = expected.opponent();
    }
}

#[test]
fn test_ai_match_runs_to_completion() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut game = Match::new(
        Seat::Ai(Strategy::HuntTarget),
        Seat::Ai(Strategy::MonteCarloDensity),
        &mut rng,
    );
    let mut moves = 0;
    while game.status() == MatchStatus::InProgress {
        assert!(game.ai_move(&mut rng));
        moves += 1;
        assert!(moves <= 200, "game took too many moves");
    }
    let winner = game.winner().unwrap();
    assert!(game.fleet(winner.opponent()).all_sunk());
    assert!(!game.fleet(winner).all_sunk());
}

#[test]
fn test_overlapping_fleet_rejected() {
    let a = Ship::new(ShipClass::new("A", 3), Orientation::Horizontal, 0, 0).unwrap();
    let b = Ship::new(ShipClass::new("B", 3), Orientation::Vertical, 0, 1).unwrap();
    assert_eq!(Fleet::from_ships(vec![a, b]).unwrap_err(), GameError::ShipOverlap);
}
