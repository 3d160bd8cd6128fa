use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Participant;
use crate::domain::round::Outcome;
use crate::domain::RoundId;
use crate::engine::betting::BalanceChange;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Новый раунд начался (колода полная, руки пустые).
    RoundStarted { round_id: RoundId },

    /// Ставка принята.
    BetPlaced { amount: Chips },

    /// Карта из начальной раздачи.
    CardDealt { to: Participant, card: Card },

    /// Игрок взял карту.
    PlayerHit { card: Card, value: u32 },

    /// Игрок остановился.
    PlayerStood { value: u32 },

    /// Дилер добрал карту.
    DealerDrew { card: Card, value: u32 },

    /// Исход определён.
    RoundResolved { outcome: Outcome },

    /// Ставка рассчитана.
    BetSettled { change: BalanceChange, balance: Chips },

    /// Раунд прерван (колода кончилась и т.п.).
    RoundAborted { reason: String },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// История текущего раунда. Живёт только в памяти.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Сколько карт дилер добрал в свой ход.
    pub fn dealer_draws(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, RoundEventKind::DealerDrew { .. }))
            .count()
    }
}
