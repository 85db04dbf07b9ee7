use clap::Parser;
use hand_advisor::holdem::{GameType, Position, Situation, SituationError};
use thiserror::Error;

mod common;

#[derive(Parser, Debug)]
#[command(
    name = "situation",
    about = "Recommend a pre-flop action for a hand, seat and stack"
)]
struct Args {
    /// Starting hand, e.g. AKs, 99 or QJo
    #[arg(default_value = "AKs")]
    hand: String,

    /// Seat: UTG, MP, CO, BTN, SB or BB
    #[arg(short, long, default_value = "UTG")]
    position: String,

    /// Effective stack in big blinds
    #[arg(short, long, default_value_t = 50)]
    stack: u16,

    /// Players at the table
    #[arg(short = 'n', long, default_value_t = 6)]
    players: u8,

    /// Game type: cash, tournament or sitngo
    #[arg(short, long, default_value = "cash")]
    game: String,

    #[command(flatten)]
    demo: common::DemoArgs,
}

#[derive(Debug, Error)]
enum SituationDemoError {
    #[error("unknown position {0}")]
    Position(String),
    #[error("unknown game type {0}")]
    GameType(String),
    #[error(transparent)]
    Situation(#[from] SituationError),
    #[error(transparent)]
    Storage(#[from] hand_advisor::storage::StorageError),
}

fn main() -> Result<(), SituationDemoError> {
    let args = Args::parse();
    let advisor = args.demo.start()?;

    let position = Position::from_code(&args.position)
        .ok_or_else(|| SituationDemoError::Position(args.position.clone()))?;
    let game_type = [GameType::Cash, GameType::Tournament, GameType::SitAndGo]
        .into_iter()
        .find(|g| g.code().eq_ignore_ascii_case(args.game.trim()))
        .ok_or_else(|| SituationDemoError::GameType(args.game.clone()))?;

    let situation = Situation::builder()
        .hand(args.hand.clone())
        .position(position)
        .stack_depth(args.stack)
        .player_count(args.players)
        .game_type(game_type)
        .build()?;

    println!("{}", advisor.t("simulator.title"));
    println!("===========================");
    println!("{}: {}", advisor.t("simulator.gameType"), advisor.t(&game_type.translation_key()));
    println!("{}: {}", advisor.t("simulator.position"), advisor.t(&position.translation_key()));
    println!("{}: {}", advisor.t("simulator.stack"), situation.stack_depth);
    println!("{}: {}", advisor.t("simulator.players"), situation.player_count);
    println!("Hand: {}", situation.hand);

    let suggestions = advisor.suggestions(&args.hand);
    if !suggestions.is_empty() {
        println!("Did you mean: {}", suggestions.join(", "));
    }

    let result = advisor.simulate(&situation);
    println!();
    println!(
        "{} {}",
        advisor.t("simulator.result.action"),
        result.recommendation.action
    );
    println!("{}: {}", advisor.t("simulator.result.proTip"), result.explanation);

    Ok(())
}
