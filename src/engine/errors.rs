use crate::domain::chips::Chips;
use crate::domain::deck::DeckError;
use crate::domain::round::GamePhase;
use crate::domain::table::ConfigError;
use crate::engine::actions::ActionKind;

use thiserror::Error;

/// Ошибки движка блэкджека.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Недопустимая ставка {amount}: ставка должна быть от $1 до {balance}")]
    InvalidBet { amount: Chips, balance: Chips },

    #[error("Действие {action} недопустимо в фазе {phase}")]
    InvalidTransition { action: ActionKind, phase: GamePhase },

    #[error("Ставка уже сделана в этом раунде")]
    BetAlreadyPlaced,

    #[error("Фишки закончились – нужно пополнить баланс")]
    OutOfChips,

    #[error("Ставки за этим столом выключены")]
    BettingDisabled,

    #[error("Баланс ещё не обнулён ({0}), пополнение недоступно")]
    BalanceNotDepleted(Chips),

    #[error("Сумма должна быть больше нуля")]
    InvalidAmount,

    #[error("Ошибка колоды: {0}")]
    Deck(#[from] DeckError),

    #[error("Некорректный конфиг: {0}")]
    Config(#[from] ConfigError),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Ошибка, после которой раунд не может продолжаться.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::Deck(_) | EngineError::Internal(_))
    }
}
