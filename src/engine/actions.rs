use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Ход игрока в фазе PlayerTurn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    Hit,
    Stand,
}

/// Любая операция, которую вызывающий код может попросить у движка.
/// Нужна для проверки "можно ли это сделать в текущей фазе".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    PlaceBet(Chips),
    ClearBet,
    Player(PlayerAction),
    Reset,
    RestoreBalance(Chips),
}

impl From<PlayerAction> for ActionKind {
    fn from(action: PlayerAction) -> Self {
        ActionKind::Player(action)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::PlaceBet(amount) => write!(f, "bet {amount}"),
            ActionKind::ClearBet => write!(f, "clear bet"),
            ActionKind::Player(PlayerAction::Hit) => write!(f, "hit"),
            ActionKind::Player(PlayerAction::Stand) => write!(f, "stand"),
            ActionKind::Reset => write!(f, "reset"),
            ActionKind::RestoreBalance(amount) => write!(f, "restore balance {amount}"),
        }
    }
}
