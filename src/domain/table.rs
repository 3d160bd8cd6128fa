use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Стартовый баланс по умолчанию.
pub const DEFAULT_STARTING_BALANCE: Chips = Chips(1_000);

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг стола: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Стартовый баланс должен быть больше нуля, когда ставки включены")]
    ZeroStartingBalance,
}

/// Конфиг стола.
///
/// Правила игры фиксированы (дилер добирает до 17, без сплитов/даблов/страховки),
/// настраивается только наличие ставок и стартовый баланс.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Играем на фишки (true) или просто "на интерес" (false).
    pub betting_enabled: bool,
    /// Баланс игрока в начале сессии.
    pub starting_balance: Chips,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            betting_enabled: true,
            starting_balance: DEFAULT_STARTING_BALANCE,
        }
    }
}

impl TableConfig {
    /// Стол без ставок: раздача начинается сразу.
    pub fn without_betting() -> Self {
        Self {
            betting_enabled: false,
            ..Self::default()
        }
    }

    pub fn with_balance(starting_balance: Chips) -> Self {
        Self {
            starting_balance,
            ..Self::default()
        }
    }

    /// Разобрать конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.betting_enabled && self.starting_balance.is_zero() {
            return Err(ConfigError::ZeroStartingBalance);
        }
        Ok(())
    }
}
