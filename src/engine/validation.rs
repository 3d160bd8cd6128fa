use crate::domain::round::GamePhase;
use crate::engine::actions::{ActionKind, PlayerAction};
use crate::engine::errors::EngineError;

/// Проверка, разрешена ли операция в текущей фазе.
///
/// Проверяется только фаза. Суммы и баланс проверяет леджер.
pub fn validate_action(phase: GamePhase, action: ActionKind) -> Result<(), EngineError> {
    let allowed = match action {
        ActionKind::PlaceBet(_) | ActionKind::ClearBet => phase == GamePhase::AwaitingBet,
        ActionKind::Player(PlayerAction::Hit) | ActionKind::Player(PlayerAction::Stand) => {
            phase == GamePhase::PlayerTurn
        }
        ActionKind::Reset => phase.is_terminal(),
        // Пополнение – между раундами или после расчёта, но не посреди раздачи.
        ActionKind::RestoreBalance(_) => {
            matches!(phase, GamePhase::AwaitingBet) || phase.is_terminal()
        }
    };

    if allowed {
        Ok(())
    } else {
        Err(EngineError::InvalidTransition { action, phase })
    }
}
