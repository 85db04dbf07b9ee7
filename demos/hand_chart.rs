use clap::Parser;
use hand_advisor::holdem::Category;

mod common;

#[derive(Parser, Debug)]
#[command(name = "hand_chart", about = "Print the 13x13 starting hand chart")]
struct Args {
    /// Only show one category: premium, strong, situational, weak or fold
    #[arg(short, long)]
    filter: Option<String>,

    /// Show the details of one hand, e.g. AKs
    #[arg(long)]
    hand: Option<String>,

    #[command(flatten)]
    demo: common::DemoArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let advisor = args.demo.start()?;

    let filter = match args.filter.as_deref() {
        Some(name) => Some(
            Category::all()
                .into_iter()
                .find(|c| c.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| format!("unknown category {name}"))?,
        ),
        None => None,
    };

    println!("{}", advisor.t("pokerGrid.title"));
    println!();
    print!("{}", advisor.grid(filter));
    println!();
    for category in Category::all() {
        println!("  {}", advisor.t(&category.legend_key()));
    }

    if let Some(hand) = args.hand {
        let details = advisor.hand_details(&hand);
        println!();
        println!("=== {} ===", details.entry.hand);
        println!("{}: {:.1}%", advisor.t("handModal.winRate"), details.entry.win_rate);
        println!("{}: {}", advisor.t("handModal.category"), details.category);
        println!(
            "{}: {}",
            advisor.t("handModal.recommendation"),
            details.entry.recommendation
        );
        if details.positions.is_empty() {
            println!("{}", advisor.t("handModal.positions.none"));
        } else {
            println!(
                "{}: {}",
                advisor.t("handModal.positions.title"),
                details.positions.join(", ")
            );
        }
        println!("{}: {}", advisor.t("handModal.strategicInfo.strength"), details.strength);
        println!("{}: {}", advisor.t("handModal.strategicInfo.frequency"), details.frequency);
        if let Some(stack) = &details.stack {
            println!("{}: {}", advisor.t("handModal.strategicInfo.stackSize"), stack);
        }
        println!("{}: {}", advisor.t("handModal.tips.beginner"), details.entry.tips.beginner);
        println!(
            "{}: {}",
            advisor.t("handModal.tips.intermediate"),
            details.entry.tips.intermediate
        );
    }

    Ok(())
}
