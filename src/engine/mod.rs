//! Движок блэкджека: ставки, ход игрока, политика дилера, расчёт.
//!
//! Высокоуровневый объект: `BlackjackEngine`
//! Основные операции:
//!   - `place_bet` – ставка + начальная раздача
//!   - `hit` / `stand` – ход игрока
//!   - `reset` – новый раунд

pub mod actions;
pub mod betting;
pub mod dealer;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod resolution;
pub mod validation;

pub use actions::{ActionKind, PlayerAction};
pub use betting::{BalanceChange, BettingLedger, SettleResult, MIN_BET};
pub use dealer::{dealer_must_draw, DEALER_STANDS_AT};
pub use errors::EngineError;
pub use game_loop::{BlackjackEngine, RoundStatus};
pub use hand_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use resolution::{compare_hands, resolve_after_hit};

use crate::domain::card::Card;

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand` и скриптованный источник для тестов).
pub trait RandomSource {
    /// Равновероятный индекс в `0..len`. `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Какую из оставшихся карт вытянуть. По умолчанию – равновероятно.
    fn pick_card(&mut self, remaining: &[Card]) -> usize {
        self.pick_index(remaining.len())
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn pick_card(&mut self, remaining: &[Card]) -> usize {
        (**self).pick_card(remaining)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn pick_card(&mut self, remaining: &[Card]) -> usize {
        (**self).pick_card(remaining)
    }
}
