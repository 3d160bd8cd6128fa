// tests/engine_core_test.rs

//! Сценарии раунда целиком:
//! - stand → дилер добирает до 17+ → сравнение
//! - hit до 21 → немедленная победа, дилер не ходит
//! - hit в перебор → немедленное поражение
//! - ничья, reset, стол без ставок, кончились фишки

use blackjack_engine::domain::card::Card;
use blackjack_engine::domain::chips::Chips;
use blackjack_engine::domain::round::{GamePhase, Winner};
use blackjack_engine::domain::table::TableConfig;
use blackjack_engine::engine::{
    BalanceChange, BlackjackEngine, EngineError, RoundEventKind, RoundStatus, DEALER_STANDS_AT,
};
use blackjack_engine::infra::{DeterministicRng, ScriptedRng};

fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

/// Движок со ставками (баланс 1000) и заданным порядком карт.
fn scripted_engine(cards: &[&str]) -> BlackjackEngine<ScriptedRng> {
    let rng = ScriptedRng::new(cards.iter().map(|s| c(s)));
    BlackjackEngine::new(TableConfig::default(), rng).unwrap()
}

#[test]
fn new_engine_waits_for_bet_with_full_deck() {
    let engine = scripted_engine(&[]);

    assert_eq!(engine.phase(), GamePhase::AwaitingBet);
    assert_eq!(engine.round_id(), 1);
    assert!(engine.player_hand().is_empty());
    assert!(engine.dealer_hand().is_empty());
    assert_eq!(engine.deck().len(), 52);
    assert_eq!(engine.balance(), Some(Chips(1000)));
    assert!(engine.outcome().is_none());
}

#[test]
fn initial_deal_is_player_player_dealer() {
    let mut engine = scripted_engine(&["Th", "9s", "7c"]);

    let status = engine.place_bet(Chips(100)).unwrap();
    assert_eq!(status, RoundStatus::PlayerTurn);
    assert_eq!(engine.phase(), GamePhase::PlayerTurn);

    assert_eq!(engine.player_hand().cards(), &[c("Th"), c("9s")]);
    assert_eq!(engine.dealer_hand().cards(), &[c("7c")]);
    assert_eq!(engine.player_value(), 19);
    assert_eq!(engine.dealer_value(), 7);
    assert_eq!(engine.deck().len(), 49);

    // Ставка зарезервирована, не списана
    assert_eq!(engine.balance(), Some(Chips(1000)));
    assert_eq!(engine.pending_bet(), Chips(100));
    engine.verify_invariants().unwrap();
}

/// Игрок 19 стоит, дилер 7 → 16 → 21. Дилер выигрывает.
#[test]
fn stand_dealer_draws_past_player() {
    let mut engine = scripted_engine(&["Th", "9s", "7c", "9d", "5h"]);
    engine.place_bet(Chips(100)).unwrap();

    let status = engine.stand().unwrap();
    let summary = status.summary().expect("round resolved");

    assert_eq!(engine.phase(), GamePhase::Resolved);
    assert_eq!(summary.dealer_cards, vec![c("7c"), c("9d"), c("5h")]);
    assert_eq!(summary.dealer_value, 21);
    assert_eq!(summary.player_value, 19);
    assert_eq!(summary.outcome.winner, Winner::Dealer);
    assert_eq!(summary.outcome.message, "Player Lost, Dealer Wins!");
    assert_eq!(summary.bet, Chips(100));
    assert_eq!(summary.balance_after, Chips(900));

    assert_eq!(engine.balance(), Some(Chips(900)));
    assert_eq!(engine.pending_bet(), Chips::ZERO);
    assert_eq!(engine.history().dealer_draws(), 2);
    engine.verify_invariants().unwrap();
}

/// Игрок 15, hit 6 → ровно 21: победа сразу, дилер остаётся с одной картой.
#[test]
fn hit_to_twenty_one_wins_immediately() {
    let mut engine = scripted_engine(&["Th", "5s", "8c", "6d"]);
    engine.place_bet(Chips(100)).unwrap();

    let status = engine.hit().unwrap();
    let summary = status.summary().expect("round resolved on 21");

    assert_eq!(summary.player_value, 21);
    assert_eq!(summary.outcome.winner, Winner::Player);
    assert_eq!(summary.outcome.message, "Player Wins, Dealer Lost!");
    assert_eq!(engine.dealer_hand().len(), 1);
    assert_eq!(engine.history().dealer_draws(), 0);
    assert_eq!(engine.balance(), Some(Chips(1100)));
}

/// Игрок 19, hit 5 → 24: перебор, дилер не ходит.
#[test]
fn hit_into_bust_loses_immediately() {
    let mut engine = scripted_engine(&["Th", "9s", "8c", "5d"]);
    engine.place_bet(Chips(100)).unwrap();

    let status = engine.hit().unwrap();
    let summary = status.summary().expect("round resolved on bust");

    assert_eq!(summary.player_value, 24);
    assert_eq!(summary.outcome.winner, Winner::Dealer);
    assert_eq!(engine.dealer_hand().len(), 1);
    assert_eq!(engine.history().dealer_draws(), 0);
    assert_eq!(engine.balance(), Some(Chips(900)));

    // Дальше ходить нельзя
    assert!(matches!(
        engine.hit(),
        Err(EngineError::InvalidTransition { .. })
    ));
}

#[test]
fn hit_below_twenty_one_keeps_turn() {
    let mut engine = scripted_engine(&["5h", "4s", "8c", "3d"]);
    engine.place_bet(Chips(10)).unwrap();

    let status = engine.hit().unwrap();
    assert_eq!(status, RoundStatus::PlayerTurn);
    assert_eq!(engine.player_value(), 12);
    assert_eq!(engine.player_hand().len(), 3);
    assert!(engine.outcome().is_none());
    assert_eq!(engine.balance(), Some(Chips(1000)));
}

/// Дилер на 17 останавливается: 7 + K = 17, вторая карта – последняя.
#[test]
fn dealer_stops_at_seventeen() {
    let mut engine = scripted_engine(&["Th", "8s", "7c", "Kd", "2h"]);
    engine.place_bet(Chips(50)).unwrap();

    let summary = engine.stand().unwrap().summary().cloned().unwrap();
    assert_eq!(summary.dealer_cards, vec![c("7c"), c("Kd")]);
    assert_eq!(summary.dealer_value, DEALER_STANDS_AT);
    assert_eq!(summary.outcome.winner, Winner::Player);
    assert_eq!(engine.balance(), Some(Chips(1050)));
}

/// Дилер с мягкими 17 тоже стоит.
#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut engine = scripted_engine(&["Th", "9s", "Ac", "6d"]);
    engine.place_bet(Chips(50)).unwrap();

    let summary = engine.stand().unwrap().summary().cloned().unwrap();
    assert_eq!(summary.dealer_value, 17);
    assert_eq!(summary.dealer_cards.len(), 2);
    assert_eq!(summary.outcome.winner, Winner::Player);
}

#[test]
fn dealer_bust_means_player_wins() {
    let mut engine = scripted_engine(&["Th", "2s", "Tc", "5d", "Kh"]);
    engine.place_bet(Chips(200)).unwrap();

    let summary = engine.stand().unwrap().summary().cloned().unwrap();
    assert_eq!(summary.player_value, 12);
    assert_eq!(summary.dealer_value, 25);
    assert_eq!(summary.outcome.winner, Winner::Player);
    assert_eq!(engine.balance(), Some(Chips(1200)));
}

#[test]
fn equal_totals_are_a_draw() {
    let mut engine = scripted_engine(&["Th", "8s", "8c", "Kd"]);
    engine.place_bet(Chips(100)).unwrap();

    let summary = engine.stand().unwrap().summary().cloned().unwrap();
    assert_eq!(summary.player_value, 18);
    assert_eq!(summary.dealer_value, 18);
    assert_eq!(summary.outcome.winner, Winner::Draw);
    assert_eq!(summary.outcome.message, "It's a Draw!");
    assert_eq!(engine.balance(), Some(Chips(1000)));

    let settled = engine
        .history()
        .events
        .iter()
        .find_map(|e| match &e.kind {
            RoundEventKind::BetSettled { change, .. } => Some(*change),
            _ => None,
        });
    assert_eq!(settled, Some(BalanceChange::Push));
}

/// Любой путь до Resolved даёт дилера либо с одной картой (исход на hit),
/// либо с >= 17 очками.
#[test]
fn dealer_policy_holds_across_seeds() {
    for seed in 0..200 {
        let mut engine =
            BlackjackEngine::new(TableConfig::default(), DeterministicRng::from_seed(seed)).unwrap();
        engine.place_bet(Chips(10)).unwrap();

        let mut status = RoundStatus::PlayerTurn;
        while status == RoundStatus::PlayerTurn && engine.player_value() < 15 {
            status = engine.hit().unwrap();
        }
        if status == RoundStatus::PlayerTurn {
            status = engine.stand().unwrap();
        }

        let summary = status.summary().expect("resolved").clone();
        if summary.dealer_cards.len() > 1 {
            assert!(summary.dealer_value >= 17, "seed {seed}: dealer stopped at {}", summary.dealer_value);
        }
        engine.verify_invariants().unwrap();
    }
}

#[test]
fn reset_starts_fresh_round() {
    let mut engine = scripted_engine(&["Th", "9s", "8c", "5d"]);
    engine.place_bet(Chips(100)).unwrap();
    engine.hit().unwrap();
    assert_eq!(engine.phase(), GamePhase::Resolved);

    let status = engine.reset().unwrap();
    assert_eq!(status, RoundStatus::AwaitingBet);
    assert_eq!(engine.phase(), GamePhase::AwaitingBet);
    assert_eq!(engine.round_id(), 2);
    assert!(engine.player_hand().is_empty());
    assert!(engine.dealer_hand().is_empty());
    assert_eq!(engine.deck().len(), 52);
    assert!(engine.outcome().is_none());
    assert_eq!(engine.history().len(), 1);
    // Баланс переходит в следующий раунд
    assert_eq!(engine.balance(), Some(Chips(900)));
}

#[test]
fn staged_bet_then_deal() {
    let mut engine = scripted_engine(&["Th", "9s", "7c"]);

    assert_eq!(engine.add_chips(Chips(25)).unwrap(), Chips(25));
    assert_eq!(engine.add_chips(Chips(100)).unwrap(), Chips(125));
    engine.clear_bet().unwrap();
    assert_eq!(engine.pending_bet(), Chips::ZERO);

    engine.add_chips(Chips(50)).unwrap();
    let status = engine.deal().unwrap();
    assert_eq!(status, RoundStatus::PlayerTurn);
    assert_eq!(engine.pending_bet(), Chips(50));

    // После раздачи ставку не сбросить
    assert!(engine.clear_bet().is_err());
    assert_eq!(engine.pending_bet(), Chips(50));
}

#[test]
fn table_without_betting_deals_immediately() {
    let rng = ScriptedRng::new([c("Th"), c("5s"), c("8c"), c("6d")]);
    let mut engine = BlackjackEngine::new(TableConfig::without_betting(), rng).unwrap();

    assert_eq!(engine.phase(), GamePhase::PlayerTurn);
    assert_eq!(engine.player_hand().len(), 2);
    assert_eq!(engine.dealer_hand().len(), 1);
    assert_eq!(engine.balance(), None);
    assert!(matches!(
        engine.place_bet(Chips(10)),
        Err(EngineError::BettingDisabled)
    ));

    let summary = engine.hit().unwrap().summary().cloned().unwrap();
    assert_eq!(summary.outcome.winner, Winner::Player);
    assert_eq!(summary.bet, Chips::ZERO);

    // reset сразу сдаёт новый раунд
    let status = engine.reset().unwrap();
    assert_eq!(status, RoundStatus::PlayerTurn);
    assert_eq!(engine.round_id(), 2);
    assert_eq!(engine.deck().len(), 49);
}

/// Баланс 100, all-in проигрыш → фишки кончились → пополнение.
#[test]
fn out_of_chips_then_restore() {
    let rng = ScriptedRng::new([c("Th"), c("9s"), c("8c"), c("5d")]);
    let mut engine = BlackjackEngine::new(TableConfig::with_balance(Chips(100)), rng).unwrap();

    engine.place_bet(Chips(100)).unwrap();
    engine.hit().unwrap();
    assert_eq!(engine.balance(), Some(Chips::ZERO));

    engine.reset().unwrap();
    assert!(engine.is_out_of_chips());
    assert!(matches!(
        engine.place_bet(Chips(1)),
        Err(EngineError::OutOfChips)
    ));

    engine.restore_balance(Chips(500)).unwrap();
    assert!(!engine.is_out_of_chips());
    assert_eq!(engine.balance(), Some(Chips(500)));

    // Второй раз пополнить нельзя – баланс не ноль
    assert!(matches!(
        engine.restore_balance(Chips(500)),
        Err(EngineError::BalanceNotDepleted(Chips(500)))
    ));

    engine.place_bet(Chips(50)).unwrap();
    assert_eq!(engine.phase(), GamePhase::PlayerTurn);
}

#[test]
fn history_records_round_in_order() {
    let mut engine = scripted_engine(&["Th", "9s", "7c", "9d", "5h"]);
    engine.place_bet(Chips(100)).unwrap();
    engine.stand().unwrap();

    let kinds: Vec<&RoundEventKind> = engine.history().events.iter().map(|e| &e.kind).collect();
    assert!(matches!(kinds[0], RoundEventKind::RoundStarted { round_id: 1 }));
    assert!(matches!(kinds[1], RoundEventKind::BetPlaced { amount: Chips(100) }));
    assert!(matches!(kinds[2], RoundEventKind::CardDealt { .. }));
    assert!(matches!(kinds[5], RoundEventKind::PlayerStood { value: 19 }));
    assert!(matches!(kinds[6], RoundEventKind::DealerDrew { value: 16, .. }));
    assert!(matches!(kinds[7], RoundEventKind::DealerDrew { value: 21, .. }));
    assert!(matches!(kinds[8], RoundEventKind::RoundResolved { .. }));
    assert!(matches!(
        kinds[9],
        RoundEventKind::BetSettled {
            change: BalanceChange::Lost(Chips(100)),
            balance: Chips(900)
        }
    ));

    for (i, event) in engine.history().events.iter().enumerate() {
        assert_eq!(event.index as usize, i);
    }
}
