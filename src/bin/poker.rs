use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::{style, Color, Stylize};
use poker_sim::deck::{build_deck, seeded_rng, Deck};
use poker_sim::evaluator::evaluate;
use poker_sim::hand::Hand;
use poker_sim::showdown::{play, Winner};
use poker_sim::table::reference_table;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::io::IsTerminal;
use std::process::ExitCode;

/// General failure exit status; clap keeps its own code for usage errors.
const EXIT_ERROR: u8 = 2;

/// A five-card poker hand simulator.
#[derive(Debug, Parser)]
#[clap(name = "poker-sim", version)]
struct Cli {
    /// Seed for reproducible deals.
    #[clap(long, global = true, env = "POKER_SIM_SEED")]
    seed: Option<u64>,
    /// Disable colored output.
    #[clap(long, global = true)]
    no_color: bool,
    /// Log deals and showdown summaries to stderr.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Display information about poker hands.
    Info {
        /// Show the probability of each hand.
        #[clap(long)]
        probability: bool,
    },
    /// Deal random hands and classify them.
    Deal {
        /// Number of hands to simulate.
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        hands: u32,
    },
    /// Classify five cards, e.g. `evaluate 10H JH QH KH AH`.
    Evaluate {
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Play two hands against each other; missing hands are dealt at random.
    Play {
        #[clap(long)]
        hand1: Option<String>,
        #[clap(long)]
        hand2: Option<String>,
    },
}

struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, text: impl Into<String>, color: Color) -> String {
        let text = text.into();
        if self.color {
            style(text).with(color).to_string()
        } else {
            text
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Info } else { log::LevelFilter::Warn };
    env_logger::builder().filter_level(level).format_target(false).parse_default_env().init();

    let painter = Painter { color: !cli.no_color && std::io::stdout().is_terminal() };
    match run(cli, &painter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("{}", painter.paint(format!("Error: {e:#}"), Color::Red));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli, painter: &Painter) -> Result<()> {
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("using seed {seed}");
    let mut rng = seeded_rng(seed);

    match cli.command {
        Command::Info { probability } => info(probability, painter),
        Command::Deal { hands } => deal(hands as usize, &mut rng, painter)?,
        Command::Evaluate { cards } => {
            let hand: Hand = cards.join(" ").parse().context("cannot evaluate hand")?;
            let category = evaluate(&hand);
            let label = format!("{category} ({})", category.rank());
            println!("{} {}", hand, painter.paint(label, Color::Green));
        }
        Command::Play { hand1, hand2 } => {
            let (first, second) = resolve_hands(hand1, hand2, &mut rng)?;
            let result = play(&first, &second);
            println!("Hand 1: {}", result.first);
            println!("Hand 2: {}", result.second);
            let verdict = match result.winner {
                Winner::Tie => format!("Tie: both hands are {}", result.first.category),
                w => format!("Winner: {} {}", w, result.winning_hand()),
            };
            println!("{}", painter.paint(verdict, Color::Cyan));
        }
    }
    Ok(())
}

fn info(probability: bool, painter: &Painter) {
    for row in reference_table() {
        if probability {
            println!("{}", painter.paint(row.odds_line(), Color::Yellow));
        } else {
            println!("{}", painter.paint(row.heading(), Color::Green));
            println!("{}", painter.paint(row.example, Color::White));
        }
    }
}

fn deal(hands: usize, rng: &mut ChaCha8Rng, painter: &Painter) -> Result<()> {
    let deck = build_deck();
    for (i, hand) in deck.simulate(hands, rng)?.iter().enumerate() {
        let category = evaluate(hand);
        println!("Hand {}: {} - {}", i + 1, hand, painter.paint(category.name(), Color::Green));
    }
    Ok(())
}

/// Parse the given hands and deal the missing ones from the cards left over.
fn resolve_hands(
    hand1: Option<String>,
    hand2: Option<String>,
    rng: &mut ChaCha8Rng,
) -> Result<(Hand, Hand)> {
    let parse = |s: Option<String>, label: &str| -> Result<Option<Hand>> {
        s.map(|s| s.parse::<Hand>().with_context(|| format!("invalid {label}")))
            .transpose()
    };
    let given1 = parse(hand1, "hand 1")?;
    let given2 = parse(hand2, "hand 2")?;

    let used: Vec<_> = given1.iter().chain(given2.iter()).flat_map(|h| *h.cards()).collect();
    let remaining = Deck::from_cards(build_deck().iter().filter(|c| !used.contains(c)).collect())?;

    let first = match given1 {
        Some(h) => h,
        None => remaining.deal_hand(rng)?,
    };
    let second = match given2 {
        Some(h) => h,
        None => {
            let rest = remaining.iter().filter(|c| !first.contains(*c)).collect();
            Deck::from_cards(rest)?.deal_hand(rng)?
        }
    };
    Ok((first, second))
}
