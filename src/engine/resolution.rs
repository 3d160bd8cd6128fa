use crate::domain::round::Outcome;
use crate::eval::BLACKJACK;

/// Исход раунда после того, как дилер закончил добор.
///
/// Порядок проверок важен: перебор дилера проверяется первым,
/// перебор игрока вторым (обычно он уже отработал на hit).
pub fn compare_hands(player_value: u32, dealer_value: u32) -> Outcome {
    if dealer_value > BLACKJACK {
        Outcome::player_wins()
    } else if player_value > BLACKJACK {
        Outcome::dealer_wins()
    } else if player_value > dealer_value {
        Outcome::player_wins()
    } else if player_value < dealer_value {
        Outcome::dealer_wins()
    } else {
        Outcome::draw()
    }
}

/// Немедленный исход после hit, если он есть:
/// перебор – победа дилера, ровно 21 – победа игрока.
pub fn resolve_after_hit(player_value: u32) -> Option<Outcome> {
    if player_value > BLACKJACK {
        Some(Outcome::dealer_wins())
    } else if player_value == BLACKJACK {
        Some(Outcome::player_wins())
    } else {
        None
    }
}
