use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::RoundId;

/// Фаза раунда. В каждый момент активна ровно одна.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Ждём ставку (или пополнения баланса, если фишки кончились).
    AwaitingBet,
    /// Начальная раздача: 2 карты игроку, 1 дилеру.
    Dealing,
    /// Ход игрока: hit / stand.
    PlayerTurn,
    /// Дилер добирает до 17.
    DealerTurn,
    /// Исход определён, ставка рассчитана. Дальше только reset.
    Resolved,
    /// Раунд прерван из-за ошибки колоды. Дальше только reset.
    Aborted,
}

impl GamePhase {
    /// Раунд окончен (нормально или аварийно).
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Resolved | GamePhase::Aborted)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GamePhase::AwaitingBet => "awaiting bet",
            GamePhase::Dealing => "dealing",
            GamePhase::PlayerTurn => "player turn",
            GamePhase::DealerTurn => "dealer turn",
            GamePhase::Resolved => "resolved",
            GamePhase::Aborted => "aborted",
        };
        f.write_str(s)
    }
}

/// Кто выиграл раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Winner {
    Player,
    Dealer,
    /// Ничья.
    Draw,
}

pub const PLAYER_WINS_MESSAGE: &str = "Player Wins, Dealer Lost!";
pub const DEALER_WINS_MESSAGE: &str = "Player Lost, Dealer Wins!";
pub const DRAW_MESSAGE: &str = "It's a Draw!";

/// Исход раунда: победитель + сообщение для показа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Winner,
    pub message: String,
}

impl Outcome {
    pub fn player_wins() -> Self {
        Self::for_winner(Winner::Player)
    }

    pub fn dealer_wins() -> Self {
        Self::for_winner(Winner::Dealer)
    }

    pub fn draw() -> Self {
        Self::for_winner(Winner::Draw)
    }

    pub fn for_winner(winner: Winner) -> Self {
        let message = match winner {
            Winner::Player => PLAYER_WINS_MESSAGE,
            Winner::Dealer => DEALER_WINS_MESSAGE,
            Winner::Draw => DRAW_MESSAGE,
        };
        Self {
            winner,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Краткое описание завершённого раунда. Удобно для истории и стресс-тестов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_id: RoundId,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_value: u32,
    pub dealer_value: u32,
    pub outcome: Outcome,
    /// Ставка раунда (ноль, если ставки выключены).
    pub bet: Chips,
    /// Баланс после расчёта.
    pub balance_after: Chips,
}
