use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Размер полной колоды.
pub const DECK_SIZE: usize = 52;

/// Ошибки колоды.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Колода пуста: тянуть больше нечего")]
    Empty,

    #[error("Карта {0} встречается в колоде дважды")]
    DuplicateCard(Card),
}

/// Колода раунда: множество ещё не вытянутых карт.
///
/// Меняется только удалением – одна карта за `draw`. Порядок хранения
/// значения не имеет, случайность выбора даёт `RandomSource`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Вернуть колоду к полным 52 картам. Вызывается только в начале раунда.
    pub fn reset(&mut self) {
        *self = Self::standard_52();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Сколько карт уже вытянуто в этом раунде.
    pub fn drawn_count(&self) -> usize {
        DECK_SIZE.saturating_sub(self.cards.len())
    }

    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Вытянуть одну карту равновероятно из оставшихся и удалить её.
    pub fn draw<R: RandomSource>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let idx = rng.pick_card(&self.cards);
        debug_assert!(
            idx < self.cards.len(),
            "RandomSource picked {idx} of {}",
            self.cards.len()
        );
        Ok(self.cards.remove(idx))
    }

    /// Проверка инварианта: в колоде нет одинаковых карт.
    pub fn validate_unique(&self) -> Result<(), DeckError> {
        let mut seen = HashSet::with_capacity(self.cards.len());
        for card in &self.cards {
            if !seen.insert(*card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}
