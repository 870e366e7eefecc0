use broadside::{init_logging, Match, MatchStatus, PlayerId, Seat, Strategy};
use clap::{Parser, ValueEnum};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Uniform,
    Hunt,
    Greedy,
    MonteCarlo,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Uniform => Strategy::Uniform,
            StrategyArg::Hunt => Strategy::HuntTarget,
            StrategyArg::Greedy => Strategy::GreedyScore,
            StrategyArg::MonteCarlo => Strategy::MonteCarloDensity,
        }
    }
}

/// Run one AI-vs-AI game and print a JSON report on stdout.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = StrategyArg::MonteCarlo)]
    ai1: StrategyArg,
    #[arg(long, value_enum, default_value_t = StrategyArg::Greedy)]
    ai2: StrategyArg,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Include both players' final score matrices in the report")]
    scores: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut game = Match::new(Seat::Ai(cli.ai1.into()), Seat::Ai(cli.ai2.into()), &mut rng);

    let mut moves = 0usize;
    let mut shots = [0usize; 2];
    while game.status() == MatchStatus::InProgress {
        let shooter = game.active_player();
        if !game.ai_move(&mut rng) {
            anyhow::bail!("active AI failed to produce a move");
        }
        shots[shooter.number() - 1] += 1;
        moves += 1;
        // Two full boards bound any game at 199 accepted shots.
        if moves > 200 {
            anyhow::bail!("game exceeded 200 moves without finishing");
        }
    }

    let winner = game.winner().map(|p| format!("player{}", p.number()));
    let mut report = json!({
        "ai1": format!("{:?}", Strategy::from(cli.ai1)),
        "ai2": format!("{:?}", Strategy::from(cli.ai2)),
        "winner": winner,
        "moves": moves,
        "shots": { "player1": shots[0], "player2": shots[1] },
    });
    if cli.scores {
        report["scores"] = json!({
            "player1": game.score_grid(PlayerId::One, &mut rng),
            "player2": game.score_grid(PlayerId::Two, &mut rng),
        });
    }

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
