use clap::Parser;

mod common;

#[derive(Parser, Debug)]
#[command(name = "pot_odds", about = "Decide a draw with the rule of 4 and 2")]
struct Args {
    /// Number of outs, 1 to 20
    outs: String,

    /// Pot size before the bet
    pot: String,

    /// Bet you have to call
    bet: String,

    #[command(flatten)]
    demo: common::DemoArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let advisor = args.demo.start()?;

    println!("{}", advisor.t("calculator.title"));
    println!();

    match advisor.calculate_pot_odds(&args.outs, &args.pot, &args.bet) {
        Ok(report) => {
            let odds = report.odds;
            println!("{} {}", advisor.t("calculator.results.recommendation"), report.verdict);
            println!("  {}: {}", advisor.t("calculator.outs"), odds.outs);
            println!("  {}: {}", advisor.t("calculator.results.potOdds"), odds.pot_odds_ratio());
            println!(
                "  {}: {}",
                advisor.t("calculator.results.potOddsBreakdown"),
                odds.equity_required_display()
            );
            println!(
                "  {}: {}",
                advisor.t("calculator.results.hitOddsFlop"),
                odds.hit_odds_flop_display()
            );
            println!(
                "  {}: {}",
                advisor.t("calculator.results.hitOddsTurn"),
                odds.hit_odds_turn_display()
            );
        }
        Err(warning) => {
            println!("{warning}");
            println!("  ({})", warning.cause);
        }
    }

    Ok(())
}
