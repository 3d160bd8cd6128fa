use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::round::{GamePhase, Outcome};
use crate::domain::RoundId;

/// Полное наблюдаемое состояние игры для фронта.
/// Собирается заново после каждой операции, ничего не кэширует.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub round_id: RoundId,
    pub phase: GamePhase,
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<Card>,
    pub player_value: u32,
    pub dealer_value: u32,
    /// Подпись очков: "17", "soft 17", "bust 24".
    pub player_value_label: String,
    pub dealer_value_label: String,
    pub betting_enabled: bool,
    /// None, если ставки выключены.
    pub balance: Option<Chips>,
    pub pending_bet: Chips,
    /// Фишки кончились – до пополнения ставить нельзя.
    pub out_of_chips: bool,
    pub outcome: Option<Outcome>,
    pub cards_remaining: usize,
}

/// Ответ на hit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HitResponseDto {
    pub hand: Vec<Card>,
    pub value: u32,
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
}

/// Ответ на stand: рука дилера после добора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandResponseDto {
    pub dealer_hand: Vec<Card>,
    pub dealer_value: u32,
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Вернуть обновлённое состояние игры.
    Game(GameViewDto),

    /// Результат hit.
    Hit(HitResponseDto),

    /// Результат stand.
    Stand(StandResponseDto),
}

impl CommandResponse {
    /// Исход раунда, если команда его завершила (или он уже был).
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            CommandResponse::Game(view) => view.outcome.as_ref(),
            CommandResponse::Hit(hit) => hit.outcome.as_ref(),
            CommandResponse::Stand(stand) => stand.outcome.as_ref(),
        }
    }
}
