use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval::{evaluate, evaluate_detailed, HandValue};

/// Чья это рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Participant {
    Player,
    Dealer,
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Player => write!(f, "Player"),
            Participant::Dealer => write!(f, "Dealer"),
        }
    }
}

/// Рука: упорядоченный список карт одного участника.
///
/// Растёт только добавлением в конец; очищается только при сбросе раунда.
/// Очки не хранятся – каждый раз пересчитываются из карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    owner: Participant,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(owner: Participant) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    pub fn owner(&self) -> Participant {
        self.owner
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn value(&self) -> u32 {
        evaluate(&self.cards)
    }

    pub fn detailed_value(&self) -> HandValue {
        evaluate_detailed(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.detailed_value().is_bust()
    }
}

impl fmt::Display for Hand {
    /// `Player: Ah 7c (soft 18)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.owner)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        write!(f, " ({})", self.detailed_value())
    }
}
