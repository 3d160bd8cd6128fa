use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::round::{Outcome, Winner};
use crate::domain::RoundId;
use crate::engine::errors::EngineError;

/// Минимальная ставка.
pub const MIN_BET: Chips = Chips(1);

/// Как изменился баланс после расчёта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BalanceChange {
    Won(Chips),
    /// Реально списанная сумма (после обрезки по нулю).
    Lost(Chips),
    Push,
}

/// Результат вызова `settle`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettleResult {
    Settled { change: BalanceChange, balance: Chips },
    /// Этот раунд уже рассчитан – баланс не тронут.
    AlreadySettled,
}

/// Леджер ставок: баланс игрока + ставка текущего раунда.
///
/// Ставка при приёме только резервируется; баланс меняется один раз,
/// в `settle`. Повторный `settle` того же раунда – no-op.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingLedger {
    balance: Chips,
    pending_bet: Chips,
    bet_placed: bool,
    /// Последний рассчитанный раунд (одноразовый guard на Resolved).
    last_settled: Option<RoundId>,
}

impl BettingLedger {
    pub fn new(starting_balance: Chips) -> Self {
        Self {
            balance: starting_balance,
            pending_bet: Chips::ZERO,
            bet_placed: false,
            last_settled: None,
        }
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn pending_bet(&self) -> Chips {
        self.pending_bet
    }

    pub fn is_bet_placed(&self) -> bool {
        self.bet_placed
    }

    /// Подсостояние "фишки кончились": ставить нечего до пополнения.
    pub fn is_out_of_chips(&self) -> bool {
        self.balance.is_zero()
    }

    /// Принять ставку: 1 <= amount <= balance. Сумма резервируется, не списывается.
    pub fn place_bet(&mut self, amount: Chips) -> Result<(), EngineError> {
        if self.bet_placed {
            return Err(EngineError::BetAlreadyPlaced);
        }
        if self.is_out_of_chips() {
            return Err(EngineError::OutOfChips);
        }
        if amount < MIN_BET || amount > self.balance {
            return Err(EngineError::InvalidBet {
                amount,
                balance: self.balance,
            });
        }
        self.pending_bet = amount;
        self.bet_placed = true;
        Ok(())
    }

    /// Добавить фишки к набираемой ставке (кнопки фишек в UI).
    /// Ставка ещё не сделана – её можно сбросить через `clear_bet`.
    pub fn add_chips(&mut self, amount: Chips) -> Result<(), EngineError> {
        if self.bet_placed {
            return Err(EngineError::BetAlreadyPlaced);
        }
        if self.is_out_of_chips() {
            return Err(EngineError::OutOfChips);
        }
        let staged = self.pending_bet + amount;
        if amount.is_zero() || staged > self.balance {
            return Err(EngineError::InvalidBet {
                amount: staged,
                balance: self.balance,
            });
        }
        self.pending_bet = staged;
        Ok(())
    }

    /// Сбросить ставку – только пока она не сделана.
    pub fn clear_bet(&mut self) -> Result<(), EngineError> {
        if self.bet_placed {
            return Err(EngineError::BetAlreadyPlaced);
        }
        self.pending_bet = Chips::ZERO;
        Ok(())
    }

    /// Снять резерв без изменения баланса (раунд прерван).
    pub fn release_bet(&mut self) {
        self.pending_bet = Chips::ZERO;
        self.bet_placed = false;
    }

    /// Рассчитать раунд. Ровно один раз на `round`.
    pub fn settle(&mut self, round: RoundId, outcome: &Outcome) -> SettleResult {
        if self.last_settled == Some(round) {
            return SettleResult::AlreadySettled;
        }

        let bet = if self.bet_placed {
            self.pending_bet
        } else {
            Chips::ZERO
        };

        let change = match outcome.winner {
            Winner::Player => {
                self.balance += bet;
                BalanceChange::Won(bet)
            }
            Winner::Dealer => {
                let before = self.balance;
                self.balance -= bet;
                BalanceChange::Lost(before - self.balance)
            }
            Winner::Draw => BalanceChange::Push,
        };

        self.last_settled = Some(round);
        self.release_bet();

        info!(
            "round {} settled: {:?}, balance now {}",
            round, change, self.balance
        );

        SettleResult::Settled {
            change,
            balance: self.balance,
        }
    }

    /// Пополнить баланс. Разрешено только когда он обнулился.
    pub fn restore(&mut self, amount: Chips) -> Result<(), EngineError> {
        if !self.is_out_of_chips() {
            return Err(EngineError::BalanceNotDepleted(self.balance));
        }
        if amount.is_zero() {
            return Err(EngineError::InvalidAmount);
        }
        self.balance = amount;
        Ok(())
    }
}
