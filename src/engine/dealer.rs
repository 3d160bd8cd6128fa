use log::debug;

use crate::domain::card::Card;
use crate::domain::deck::{Deck, DeckError};
use crate::domain::hand::Hand;
use crate::engine::RandomSource;

/// Дилер перестаёт брать карты, когда очков не меньше 17.
/// Политика фиксирована: мягкие 17 не различаются.
pub const DEALER_STANDS_AT: u32 = 17;

/// Должен ли дилер тянуть ещё карту при таком количестве очков.
pub fn dealer_must_draw(value: u32) -> bool {
    value < DEALER_STANDS_AT
}

/// Ход дилера: тянет по одной карте, пока очков < 17.
///
/// Выполняется синхронно целиком. Возвращает вытянутые карты по порядку
/// вместе с очками руки после каждой. При исчерпании колоды возвращает ошибку;
/// уже вытянутые карты остаются в руке.
pub fn play_dealer_turn<R: RandomSource>(
    hand: &mut Hand,
    deck: &mut Deck,
    rng: &mut R,
) -> Result<Vec<(Card, u32)>, DeckError> {
    let mut drawn = Vec::new();
    while dealer_must_draw(hand.value()) {
        let card = deck.draw(rng)?;
        hand.push(card);
        let value = hand.value();
        debug!("dealer draws {card}, value now {value}");
        drawn.push((card, value));
    }
    Ok(drawn)
}
