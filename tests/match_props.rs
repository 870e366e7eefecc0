use broadside::{CellState, Match, MatchStatus, PlayerId, Seat, Strategy};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

const STRATEGIES: [Strategy; 4] = [
    Strategy::Uniform,
    Strategy::HuntTarget,
    Strategy::GreedyScore,
    Strategy::MonteCarloDensity,
];

/// Per-cell transition language: a cell is resolved at most once, and only
/// `Hit` cells may later flip to `Sunk`.
fn transition_ok(old: CellState, new: CellState) -> bool {
    use CellState::*;
    matches!(
        (old, new),
        (Unknown, Hit) | (Unknown, Miss) | (Unknown, Sunk) | (Hit, Sunk)
    ) || old == new
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn full_game_invariants(
        seed in any::<u64>(),
        s1 in 0..STRATEGIES.len(),
        s2 in 0..STRATEGIES.len(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Match::new(
            Seat::Ai(STRATEGIES[s1]),
            Seat::Ai(STRATEGIES[s2]),
            &mut rng,
        );

        let players = [PlayerId::One, PlayerId::Two];
        let mut prev = [*game.shots(PlayerId::One), *game.shots(PlayerId::Two)];
        let mut moves = 0;
        while game.status() == MatchStatus::InProgress {
            prop_assert!(game.ai_move(&mut rng), "AI move rejected mid-game");
            moves += 1;
            prop_assert!(moves <= 200, "game did not terminate");

            for (i, player) in players.into_iter().enumerate() {
                let cur = game.shots(player);
                for ((r, c), old) in prev[i].iter() {
                    prop_assert!(
                        transition_ok(old, cur.get(r, c)),
                        "illegal transition {:?} -> {:?} at ({}, {})",
                        old, cur.get(r, c), r, c
                    );
                }
                prev[i] = *cur;
            }
        }

        // terminal exactly when the loser's fleet is fully sunk
        let winner = game.winner().unwrap();
        prop_assert!(game.fleet(winner.opponent()).all_sunk());
        prop_assert!(!game.fleet(winner).all_sunk());
        prop_assert_eq!(game.shots(winner).count(CellState::Sunk), 17);

        // mirrored grids never diverge from the shooter's knowledge
        prop_assert_eq!(
            game.shots(PlayerId::One).cells(),
            game.revealed(PlayerId::Two).cells()
        );
        prop_assert_eq!(
            game.shots(PlayerId::Two).cells(),
            game.revealed(PlayerId::One).cells()
        );
    }
}
