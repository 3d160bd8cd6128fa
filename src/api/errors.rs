use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Ставка отклонена; баланс – для показа пользователю.
    InvalidBet { message: String, balance: Chips },

    /// Команда не может быть выполнена в текущей фазе. Состояние не изменилось.
    InvalidCommand(String),

    /// Раунд прерван – нужен reset.
    RoundAborted(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl ApiError {
    /// Можно ли просто показать предупреждение и продолжить.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ApiError::RoundAborted(_) | ApiError::Internal(_))
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match err {
            EngineError::InvalidBet { balance, .. } => ApiError::InvalidBet { message, balance },
            EngineError::OutOfChips => ApiError::InvalidBet {
                message,
                balance: Chips::ZERO,
            },
            EngineError::Deck(_) => ApiError::RoundAborted(message),
            EngineError::Internal(_) => ApiError::Internal(message),
            EngineError::Config(_) => ApiError::BadRequest(message),
            EngineError::InvalidTransition { .. }
            | EngineError::BetAlreadyPlaced
            | EngineError::BettingDisabled
            | EngineError::BalanceNotDepleted(_)
            | EngineError::InvalidAmount => ApiError::InvalidCommand(message),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
