use crate::domain::card::{Card, Rank};

use super::hand_value::{HandValue, BLACKJACK};

/// Базовая стоимость ранга: числовые = номинал, картинки = 10, туз = 11 (предварительно).
pub fn base_value(rank: Rank) -> u32 {
    match rank {
        Rank::Ace => 11,
        r if r.is_face() => 10,
        r => r as u32,
    }
}

/// Очки руки по правилам блэкджека.
///
/// Тузы сначала считаются за 11; пока сумма больше 21 и есть туз за 11,
/// один туз переводится в 1 (минус 10). Результат может остаться > 21.
/// Пустая рука = 0. От порядка карт не зависит.
pub fn evaluate(cards: &[Card]) -> u32 {
    evaluate_detailed(cards).total
}

/// То же, что `evaluate`, но дополнительно сообщает, мягкая ли рука.
pub fn evaluate_detailed(cards: &[Card]) -> HandValue {
    let mut total = 0u32;
    let mut soft_aces = 0u32;

    for card in cards {
        if card.rank == Rank::Ace {
            soft_aces += 1;
        }
        total += base_value(card.rank);
    }

    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    HandValue {
        total,
        soft: soft_aces > 0,
    }
}
