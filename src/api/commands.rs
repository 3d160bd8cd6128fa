use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::{BlackjackEngine, RandomSource};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{build_game_view, build_hit_response, build_stand_response};

/// Команда верхнего уровня: всё, что меняет состояние игры.
///
/// Фронт вызывает их по нажатию кнопок; логики у фронта нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Сделать ставку и раздать карты.
    PlaceBet { amount: Chips },

    /// Добавить фишку к набираемой ставке.
    AddChips { amount: Chips },

    /// Сделать набранную ставку и раздать карты.
    Deal,

    /// Сбросить набираемую ставку.
    ClearBet,

    Hit,

    Stand,

    /// Новый раунд.
    Reset,

    /// Пополнить баланс после обнуления.
    RestoreBalance { amount: Chips },
}

impl Command {
    /// Разобрать команду из JSON (например, из сообщения фронта).
    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Выполнить команду над движком и собрать ответ.
///
/// При ошибке состояние движка не меняется (кроме аварийного Aborted при
/// исчерпании колоды – оно видно в следующем `GetGame`).
pub fn execute_command<R: RandomSource>(
    engine: &mut BlackjackEngine<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::PlaceBet { amount } => {
            engine.place_bet(amount)?;
        }
        Command::AddChips { amount } => {
            engine.add_chips(amount)?;
        }
        Command::Deal => {
            engine.deal()?;
        }
        Command::ClearBet => engine.clear_bet()?,
        Command::Hit => {
            engine.hit()?;
            return Ok(CommandResponse::Hit(build_hit_response(engine)));
        }
        Command::Stand => {
            engine.stand()?;
            return Ok(CommandResponse::Stand(build_stand_response(engine)));
        }
        Command::Reset => {
            engine.reset()?;
        }
        Command::RestoreBalance { amount } => engine.restore_balance(amount)?,
    }

    Ok(CommandResponse::Game(build_game_view(engine)))
}
