// src/bin/showdown_cli.rs
//
// Калькулятор шоудауна в терминале:
//   showdown_cli deal --players 4 [--seed 42] [--rounds 3] [--json]
//   showdown_cli eval --board "Ah Kh Qh Jh Th" --hole "2c 3d" --hole "9s 9d" [--json]

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;

use holdem_showdown::api::build_round_report;
use holdem_showdown::domain::{parse_cards, Card, PlayerId, RoundInput};
use holdem_showdown::engine::validation::build_round;
use holdem_showdown::engine::{resolve_round, Dealer, DealerConfig, RoundResult};
use holdem_showdown::infra::AnyRng;

#[derive(Parser)]
#[command(author, version, about = "Texas Hold'em hand wins calculator", long_about = None)]
struct Cli {
    /// Подробный лог (debug) — то же, что RUST_LOG=debug.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Печатать отчёт в JSON вместо текста.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Deal random rounds and resolve the showdown", alias = "r")]
    Deal {
        /// Число игроков (1–9).
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=9))]
        players: u8,

        /// Seed для воспроизводимых раздач.
        #[arg(long)]
        seed: Option<u64>,

        /// Сколько раундов сдать подряд.
        #[arg(short, long, default_value_t = 1)]
        rounds: u32,

        /// Не сжигать карты перед улицами.
        #[arg(long)]
        no_burn: bool,
    },
    #[command(about = "Resolve a showdown for the given cards", alias = "t")]
    Eval {
        /// Пять общих карт: "Ah Kh Qh Jh Th".
        #[arg(long, required = true)]
        board: String,

        /// Карманные карты игрока, по одному флагу на игрока: --hole "2c 3d".
        #[arg(long = "hole", required = true)]
        holes: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Deal {
            players,
            seed,
            rounds,
            no_burn,
        } => {
            let config = DealerConfig {
                burn_cards: !no_burn,
                ..DealerConfig::default()
            };
            let mut dealer = Dealer::new(config, AnyRng::from_optional_seed(seed));
            let ids: Vec<PlayerId> = (1..=PlayerId::from(players)).collect();

            info!("dealing {} round(s) for {} player(s)", rounds, players);
            for _ in 0..rounds {
                let dealt = dealer.deal_round(&ids).context("dealing a round")?;
                let result = resolve_round(&dealt.round).context("resolving the showdown")?;
                print_round(&dealt.round, &result, cli.json)?;
            }
        }
        Command::Eval { board, holes } => {
            let board = parse_cards(&board).context("parsing --board")?;
            let mut seats: Vec<(PlayerId, Vec<Card>)> = Vec::with_capacity(holes.len());
            for (i, hole) in holes.iter().enumerate() {
                let cards = parse_cards(hole).with_context(|| format!("parsing --hole #{}", i + 1))?;
                seats.push((i as PlayerId + 1, cards));
            }
            if seats.is_empty() {
                bail!("at least one --hole is required");
            }

            let round = build_round(&board, &seats).context("invalid round")?;
            let result = resolve_round(&round).context("resolving the showdown")?;
            print_round(&round, &result, cli.json)?;
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn print_round(round: &RoundInput, result: &RoundResult, json: bool) -> anyhow::Result<()> {
    if json {
        let report = build_round_report(round, result);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("----------------------------------------");
    println!("Board:    {}", join(&round.board));
    for seat in &round.seats {
        let hand = result
            .hand_of(seat.player_id)
            .map(|h| h.describe())
            .unwrap_or_default();
        println!("Player {}: {}   {}", seat.player_id, join(&seat.hole), hand);
    }
    println!();
    println!("{}", result.outcome);
    println!();
    Ok(())
}

fn join(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}
