use std::collections::HashSet;

use log::{debug, error, info, warn};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::{Deck, DECK_SIZE};
use crate::domain::hand::{Hand, Participant};
use crate::domain::round::{GamePhase, Outcome, RoundSummary};
use crate::domain::table::TableConfig;
use crate::domain::RoundId;
use crate::engine::actions::{ActionKind, PlayerAction};
use crate::engine::betting::{BettingLedger, SettleResult};
use crate::engine::dealer::play_dealer_turn;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{RoundEventKind, RoundHistory};
use crate::engine::resolution::{compare_hands, resolve_after_hit};
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;

/// Порядок начальной раздачи: две карты игроку, одна дилеру.
const INITIAL_DEAL: [Participant; 3] = [Participant::Player, Participant::Player, Participant::Dealer];

/// Статус раунда после операции.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    /// Ждём ставку.
    AwaitingBet,
    /// Ход игрока.
    PlayerTurn,
    /// Раунд завершён.
    Resolved(RoundSummary),
}

impl RoundStatus {
    pub fn summary(&self) -> Option<&RoundSummary> {
        match self {
            RoundStatus::Resolved(summary) => Some(summary),
            _ => None,
        }
    }
}

/// Движок одной игровой сессии: игрок против дилера.
///
/// Единственный, кто меняет состояние игры. Колода, руки, леджер и фаза
/// принадлежат ему целиком; каждая операция – атомарный переход.
///
/// Основные операции:
///   - `place_bet` / `add_chips` + `deal` – ставка и начальная раздача
///   - `hit` / `stand` – ход игрока (stand сразу разыгрывает ход дилера)
///   - `reset` – новый раунд
///   - `restore_balance` – пополнение после обнуления
pub struct BlackjackEngine<R: RandomSource> {
    config: TableConfig,
    rng: R,
    phase: GamePhase,
    round_id: RoundId,
    deck: Deck,
    player_hand: Hand,
    dealer_hand: Hand,
    /// None – стол без ставок.
    ledger: Option<BettingLedger>,
    outcome: Option<Outcome>,
    history: RoundHistory,
}

impl<R: RandomSource> BlackjackEngine<R> {
    /// Создать сессию и сразу начать первый раунд.
    ///
    /// Со ставками – раунд ждёт ставку; без ставок – карты сдаются сразу.
    pub fn new(config: TableConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;

        let ledger = config
            .betting_enabled
            .then(|| BettingLedger::new(config.starting_balance));

        let mut engine = Self {
            config,
            rng,
            phase: GamePhase::AwaitingBet,
            round_id: 0,
            deck: Deck::standard_52(),
            player_hand: Hand::new(Participant::Player),
            dealer_hand: Hand::new(Participant::Dealer),
            ledger,
            outcome: None,
            history: RoundHistory::new(),
        };
        engine.begin_round()?;
        Ok(engine)
    }

    // ---------------------------------------------------------------------
    // Наблюдаемое состояние
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn player_value(&self) -> u32 {
        self.player_hand.value()
    }

    pub fn dealer_value(&self) -> u32 {
        self.dealer_hand.value()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn ledger(&self) -> Option<&BettingLedger> {
        self.ledger.as_ref()
    }

    /// Баланс игрока; None, если ставки выключены.
    pub fn balance(&self) -> Option<Chips> {
        self.ledger.as_ref().map(BettingLedger::balance)
    }

    /// Текущая (набираемая или сделанная) ставка; ноль без ставок.
    pub fn pending_bet(&self) -> Chips {
        self.ledger
            .as_ref()
            .map(BettingLedger::pending_bet)
            .unwrap_or(Chips::ZERO)
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Подсостояние AwaitingBet "фишки кончились": нужна `restore_balance`.
    pub fn is_out_of_chips(&self) -> bool {
        self.phase == GamePhase::AwaitingBet
            && self.ledger.as_ref().is_some_and(BettingLedger::is_out_of_chips)
    }

    // ---------------------------------------------------------------------
    // Ставки
    // ---------------------------------------------------------------------

    /// Сделать ставку и сразу раздать начальные карты.
    pub fn place_bet(&mut self, amount: Chips) -> Result<RoundStatus, EngineError> {
        self.require_betting()?;
        self.guard(ActionKind::PlaceBet(amount))?;
        let ledger = self.ledger.as_mut().ok_or(EngineError::BettingDisabled)?;

        if let Err(e) = ledger.place_bet(amount) {
            warn!("bet {amount} rejected: {e}");
            return Err(e);
        }
        info!("round {}: bet {amount} placed", self.round_id);
        self.history.push(RoundEventKind::BetPlaced { amount });

        self.deal_initial()
    }

    /// Добавить фишки к набираемой ставке (ставка ещё не сделана).
    pub fn add_chips(&mut self, amount: Chips) -> Result<Chips, EngineError> {
        self.require_betting()?;
        self.guard(ActionKind::PlaceBet(amount))?;
        let ledger = self.ledger.as_mut().ok_or(EngineError::BettingDisabled)?;
        ledger.add_chips(amount)?;
        Ok(ledger.pending_bet())
    }

    /// Сделать набранную через `add_chips` ставку и раздать карты.
    pub fn deal(&mut self) -> Result<RoundStatus, EngineError> {
        let staged = self.pending_bet();
        self.place_bet(staged)
    }

    /// Сбросить набираемую ставку. Только до того, как ставка сделана.
    pub fn clear_bet(&mut self) -> Result<(), EngineError> {
        self.require_betting()?;
        self.guard(ActionKind::ClearBet)?;
        let ledger = self.ledger.as_mut().ok_or(EngineError::BettingDisabled)?;
        ledger.clear_bet()
    }

    /// Пополнить баланс после того, как фишки кончились.
    pub fn restore_balance(&mut self, amount: Chips) -> Result<(), EngineError> {
        self.require_betting()?;
        self.guard(ActionKind::RestoreBalance(amount))?;
        let ledger = self.ledger.as_mut().ok_or(EngineError::BettingDisabled)?;
        ledger.restore(amount)?;
        info!("balance restored to {amount}");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Ход игрока
    // ---------------------------------------------------------------------

    /// Игрок берёт карту. Перебор – сразу победа дилера, ровно 21 – сразу победа игрока.
    pub fn hit(&mut self) -> Result<RoundStatus, EngineError> {
        self.guard(PlayerAction::Hit.into())?;

        let card = self.draw_card()?;
        self.player_hand.push(card);
        let value = self.player_hand.value();
        debug!("player hits {card}, value now {value}");
        self.history.push(RoundEventKind::PlayerHit { card, value });

        match resolve_after_hit(value) {
            Some(outcome) => self.resolve(outcome).map(RoundStatus::Resolved),
            None => Ok(RoundStatus::PlayerTurn),
        }
    }

    /// Игрок останавливается; дилер добирает до 17, раунд разрешается.
    pub fn stand(&mut self) -> Result<RoundStatus, EngineError> {
        self.guard(PlayerAction::Stand.into())?;

        let player_value = self.player_hand.value();
        self.history.push(RoundEventKind::PlayerStood {
            value: player_value,
        });
        self.phase = GamePhase::DealerTurn;

        let drawn = match play_dealer_turn(&mut self.dealer_hand, &mut self.deck, &mut self.rng) {
            Ok(drawn) => drawn,
            Err(e) => {
                self.abort(&e.to_string());
                return Err(e.into());
            }
        };
        for (card, value) in drawn {
            self.history.push(RoundEventKind::DealerDrew { card, value });
        }

        let outcome = compare_hands(player_value, self.dealer_hand.value());
        self.resolve(outcome).map(RoundStatus::Resolved)
    }

    // ---------------------------------------------------------------------
    // Раунды
    // ---------------------------------------------------------------------

    /// Новый раунд после Resolved/Aborted.
    pub fn reset(&mut self) -> Result<RoundStatus, EngineError> {
        self.guard(ActionKind::Reset)?;
        self.begin_round()
    }

    /// Проверка инвариантов раунда: карты на руках + в колоде = 52, без повторов.
    pub fn verify_invariants(&self) -> Result<(), EngineError> {
        self.deck.validate_unique()?;

        let in_hands = self.player_hand.len() + self.dealer_hand.len();
        if in_hands + self.deck.len() != DECK_SIZE {
            return Err(EngineError::Internal("card count does not add up to 52"));
        }

        let mut seen: HashSet<Card> = self.deck.remaining().iter().copied().collect();
        for card in self
            .player_hand
            .cards()
            .iter()
            .chain(self.dealer_hand.cards())
        {
            if !seen.insert(*card) {
                return Err(EngineError::Internal("card dealt twice in one round"));
            }
        }
        Ok(())
    }

    fn begin_round(&mut self) -> Result<RoundStatus, EngineError> {
        self.round_id += 1;
        self.deck.reset();
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.outcome = None;
        self.history = RoundHistory::new();
        if let Some(ledger) = self.ledger.as_mut() {
            ledger.release_bet();
        }
        self.phase = GamePhase::AwaitingBet;

        info!("round {} started", self.round_id);
        self.history.push(RoundEventKind::RoundStarted {
            round_id: self.round_id,
        });

        if self.config.betting_enabled {
            if self.is_out_of_chips() {
                info!("round {}: player is out of chips", self.round_id);
            }
            Ok(RoundStatus::AwaitingBet)
        } else {
            self.deal_initial()
        }
    }

    /// Начальная раздача: игрок, игрок, дилер.
    fn deal_initial(&mut self) -> Result<RoundStatus, EngineError> {
        self.phase = GamePhase::Dealing;

        for to in INITIAL_DEAL {
            let card = self.draw_card()?;
            match to {
                Participant::Player => self.player_hand.push(card),
                Participant::Dealer => self.dealer_hand.push(card),
            }
            debug!("dealt {card} to {to}");
            self.history.push(RoundEventKind::CardDealt { to, card });
        }

        if let Err(e) = self.verify_invariants() {
            self.abort(&e.to_string());
            return Err(e);
        }

        self.phase = GamePhase::PlayerTurn;
        Ok(RoundStatus::PlayerTurn)
    }

    /// Вытянуть карту; при пустой колоде раунд закрывается (Aborted).
    fn draw_card(&mut self) -> Result<Card, EngineError> {
        match self.deck.draw(&mut self.rng) {
            Ok(card) => Ok(card),
            Err(e) => {
                self.abort(&e.to_string());
                Err(e.into())
            }
        }
    }

    /// Переход в Resolved: ровно один расчёт ставки.
    fn resolve(&mut self, outcome: Outcome) -> Result<RoundSummary, EngineError> {
        if self.phase == GamePhase::Resolved {
            return Err(EngineError::Internal("round already resolved"));
        }
        self.phase = GamePhase::Resolved;
        self.history.push(RoundEventKind::RoundResolved {
            outcome: outcome.clone(),
        });

        let bet = self.pending_bet();
        if let Some(ledger) = self.ledger.as_mut() {
            match ledger.settle(self.round_id, &outcome) {
                SettleResult::Settled { change, balance } => {
                    self.history
                        .push(RoundEventKind::BetSettled { change, balance });
                }
                SettleResult::AlreadySettled => {
                    warn!("round {} was already settled", self.round_id);
                }
            }
        }

        info!(
            "round {} resolved: {} (player {}, dealer {})",
            self.round_id,
            outcome,
            self.player_hand.value(),
            self.dealer_hand.value()
        );
        self.outcome = Some(outcome.clone());

        Ok(RoundSummary {
            round_id: self.round_id,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards: self.dealer_hand.cards().to_vec(),
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            outcome,
            bet,
            balance_after: self.balance().unwrap_or(Chips::ZERO),
        })
    }

    /// Аварийное завершение раунда: ставка возвращается без списания.
    fn abort(&mut self, reason: &str) {
        error!("round {} aborted: {reason}", self.round_id);
        if let Some(ledger) = self.ledger.as_mut() {
            ledger.release_bet();
        }
        self.outcome = None;
        self.phase = GamePhase::Aborted;
        self.history.push(RoundEventKind::RoundAborted {
            reason: reason.to_string(),
        });
    }

    fn require_betting(&self) -> Result<(), EngineError> {
        if self.ledger.is_none() {
            warn!("betting operation on a table without betting");
            return Err(EngineError::BettingDisabled);
        }
        Ok(())
    }

    fn guard(&self, action: ActionKind) -> Result<(), EngineError> {
        validate_action(self.phase, action).map_err(|e| {
            warn!("rejected: {e}");
            e
        })
    }
}
