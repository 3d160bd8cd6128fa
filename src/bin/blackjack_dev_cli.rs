// src/bin/blackjack_dev_cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use blackjack_engine::api::{
    build_game_view, execute_command, execute_query, ApiError, Command, CommandResponse,
    GameViewDto, Query, QueryResponse,
};
use blackjack_engine::domain::chips::Chips;
use blackjack_engine::domain::table::TableConfig;
use blackjack_engine::engine::{BlackjackEngine, RandomSource};
use blackjack_engine::infra::{DeterministicRng, SystemRng};

/// Терминальный dev-клиент: одна сессия блэкджека, команды со stdin.
#[derive(Parser, Debug)]
#[command(name = "blackjack_dev_cli", about = "Play blackjack against the engine in a terminal")]
struct Args {
    /// Seed для воспроизводимых раундов (по умолчанию – системный RNG).
    #[arg(long)]
    seed: Option<u64>,

    /// Стол без ставок.
    #[arg(long)]
    no_betting: bool,

    /// Стартовый баланс.
    #[arg(long)]
    balance: Option<u64>,

    /// JSON-конфиг стола (поля TableConfig). Флаги выше его перекрывают.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[CLI] ОШИБКА конфига: {e}");
            std::process::exit(2);
        }
    };

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(DeterministicRng::from_seed(seed)),
        None => Box::new(SystemRng),
    };

    let mut engine = match BlackjackEngine::new(config, rng) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("[CLI] ОШИБКА при создании движка: {e}");
            std::process::exit(1);
        }
    };

    println!("blackjack_dev_cli: команды – bet N | chip N | deal | clear | hit | stand | reset | restore [N] | history | json | help | quit");
    print_view(&build_game_view(&engine));

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("[CLI] ошибка чтения stdin: {e}");
                break;
            }
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, rest)) = words.split_first() else {
            continue;
        };

        let command = match head {
            "q" | "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "history" => {
                if let QueryResponse::History(history) = execute_query(&engine, &Query::GetHistory) {
                    for event in &history.events {
                        println!("  #{:<2} {:?}", event.index, event.kind);
                    }
                }
                continue;
            }
            "json" => {
                match serde_json::to_string_pretty(&build_game_view(&engine)) {
                    Ok(s) => println!("{s}"),
                    Err(e) => eprintln!("[CLI] не удалось сериализовать состояние: {e}"),
                }
                continue;
            }
            "state" => {
                print_view(&build_game_view(&engine));
                continue;
            }
            other => match parse_command(other, rest, &engine) {
                Some(cmd) => cmd,
                None => {
                    println!("[CLI] непонятная команда: {}", line.trim());
                    continue;
                }
            },
        };

        match execute_command(&mut engine, command) {
            Ok(CommandResponse::Hit(hit)) => {
                println!("[CLI] hit → {} карт, очки {}", hit.hand.len(), hit.value);
                print_view(&build_game_view(&engine));
            }
            Ok(CommandResponse::Stand(stand)) => {
                println!(
                    "[CLI] дилер добрал до {} ({} карт)",
                    stand.dealer_value,
                    stand.dealer_hand.len()
                );
                print_view(&build_game_view(&engine));
            }
            Ok(CommandResponse::Game(view)) => print_view(&view),
            Err(e) => print_error(&e),
        }
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

fn load_config(args: &Args) -> Result<TableConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => TableConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => TableConfig::default(),
    };
    if args.no_betting {
        config.betting_enabled = false;
    }
    if let Some(balance) = args.balance {
        config.starting_balance = Chips::new(balance);
    }
    config.validate()?;
    Ok(config)
}

fn parse_command<R: RandomSource>(
    head: &str,
    rest: &[&str],
    engine: &BlackjackEngine<R>,
) -> Option<Command> {
    let amount = rest.first().and_then(|s| s.parse::<u64>().ok()).map(Chips::new);

    let cmd = match head {
        "bet" | "b" => Command::PlaceBet { amount: amount? },
        "chip" | "c" => Command::AddChips { amount: amount? },
        "deal" | "d" => Command::Deal,
        "clear" => Command::ClearBet,
        "hit" | "h" => Command::Hit,
        "stand" | "s" => Command::Stand,
        "reset" | "r" => Command::Reset,
        "restore" => Command::RestoreBalance {
            amount: amount.unwrap_or(engine.config().starting_balance),
        },
        _ => return None,
    };
    Some(cmd)
}

fn print_view(view: &GameViewDto) {
    println!();
    println!("------ ROUND {} | {} ------", view.round_id, view.phase);
    println!(
        "  Player: {:<28} ({})",
        format_cards(&view.player_hand),
        view.player_value_label
    );
    println!(
        "  Dealer: {:<28} ({})",
        format_cards(&view.dealer_hand),
        view.dealer_value_label
    );
    if let Some(balance) = view.balance {
        println!("  Balance: {}  Bet: {}", balance, view.pending_bet);
    }
    if view.out_of_chips {
        println!("  Фишки кончились – `restore` для пополнения.");
    }
    if let Some(outcome) = &view.outcome {
        println!("  >>> {} <<<", outcome.message);
    }
    println!("  (в колоде {} карт)", view.cards_remaining);
}

fn format_cards(cards: &[blackjack_engine::Card]) -> String {
    cards
        .iter()
        .map(|c| c.pretty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_error(err: &ApiError) {
    match err {
        ApiError::InvalidBet { message, balance } => {
            println!("[CLI] ставка отклонена: {message} (баланс {balance})")
        }
        ApiError::RoundAborted(msg) => println!("[CLI] РАУНД ПРЕРВАН: {msg} – нужен reset"),
        other => println!("[CLI] {other:?}"),
    }
}

fn print_help() {
    println!("  bet N      – поставить N и раздать");
    println!("  chip N     – добавить N к набираемой ставке");
    println!("  deal       – раздать с набранной ставкой");
    println!("  clear      – сбросить набираемую ставку");
    println!("  hit/stand  – ход игрока");
    println!("  reset      – новый раунд");
    println!("  restore N  – пополнить баланс (только при нуле)");
    println!("  history    – события текущего раунда");
    println!("  json       – состояние в JSON");
}
