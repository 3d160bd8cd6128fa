//! RNG tests for blackjack-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие порядка карт
//! - ScriptedRng отдаёт карты в заданном порядке
//! - ScriptedRng пропускает карты, которых уже нет в колоде
//! - SystemRng не выходит за границы

use blackjack_engine::domain::card::{Card, Rank, Suit};
use blackjack_engine::domain::deck::Deck;
use blackjack_engine::engine::RandomSource;
use blackjack_engine::infra::{DeterministicRng, ScriptedRng, SystemRng};

fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

fn draw_n<R: RandomSource>(rng: &mut R, n: usize) -> Vec<Card> {
    let mut deck = Deck::standard_52();
    (0..n).map(|_| deck.draw(rng).unwrap()).collect()
}

//
// TEST 1 – DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_draws() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    assert_eq!(draw_n(&mut r1, 52), draw_n(&mut r2, 52));
}

//
// TEST 2 – different seeds produce different order
//
#[test]
fn deterministic_rng_different_seeds_differ() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    assert_ne!(draw_n(&mut r1, 52), draw_n(&mut r2, 52));
}

//
// TEST 3 – ScriptedRng follows the script
//
#[test]
fn scripted_rng_draws_in_script_order() {
    let script = vec![c("Th"), c("9s"), c("7c"), c("Ad")];
    let mut rng = ScriptedRng::new(script.clone());

    assert_eq!(rng.remaining_script(), 4);
    assert_eq!(draw_n(&mut rng, 4), script);
    assert_eq!(rng.remaining_script(), 0);
}

//
// TEST 4 – after the script runs out the deck stays honest
//
#[test]
fn scripted_rng_falls_back_without_repeats() {
    let mut rng = ScriptedRng::new([c("As"), c("Ks")]);
    let mut deck = Deck::standard_52();

    assert_eq!(deck.draw(&mut rng).unwrap(), c("As"));
    assert_eq!(deck.draw(&mut rng).unwrap(), c("Ks"));

    for _ in 0..50 {
        deck.draw(&mut rng).unwrap();
        assert!(deck.validate_unique().is_ok());
    }
    assert!(deck.is_empty());
}

//
// TEST 5 – карта скрипта уже вытянута → пропускаем её
//
#[test]
fn scripted_rng_skips_cards_already_drawn() {
    let mut rng = ScriptedRng::new([c("2h"), c("2h"), c("3h")]);
    let mut deck = Deck::standard_52();

    assert_eq!(deck.draw(&mut rng).unwrap(), c("2h"));
    assert_eq!(deck.draw(&mut rng).unwrap(), c("3h"));
    assert_eq!(rng.remaining_script(), 0);

    rng.extend([Card::new(Rank::Queen, Suit::Diamonds)]);
    assert_eq!(deck.draw(&mut rng).unwrap(), c("Qd"));
}

//
// TEST 6 – SystemRng stays in range
//
#[test]
fn system_rng_index_in_range() {
    let mut rng = SystemRng;
    for len in 1..=52 {
        for _ in 0..20 {
            assert!(rng.pick_index(len) < len);
        }
    }

    let drawn = draw_n(&mut rng, 52);
    let mut sorted = drawn.clone();
    sorted.sort_by_key(|c| (c.suit, c.rank));
    sorted.dedup();
    assert_eq!(sorted.len(), 52);
}
