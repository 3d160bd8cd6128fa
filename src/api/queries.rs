use serde::{Deserialize, Serialize};

use crate::engine::{BlackjackEngine, RandomSource, RoundHistory};

use super::dto::{GameViewDto, HitResponseDto, StandResponseDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Текущее состояние игры.
    GetGame,

    /// История текущего раунда.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Game(GameViewDto),
    History(RoundHistory),
}

pub fn execute_query<R: RandomSource>(engine: &BlackjackEngine<R>, query: &Query) -> QueryResponse {
    match query {
        Query::GetGame => QueryResponse::Game(build_game_view(engine)),
        Query::GetHistory => QueryResponse::History(engine.history().clone()),
    }
}

/// Сформировать DTO игры из движка.
pub fn build_game_view<R: RandomSource>(engine: &BlackjackEngine<R>) -> GameViewDto {
    let player = engine.player_hand();
    let dealer = engine.dealer_hand();

    GameViewDto {
        round_id: engine.round_id(),
        phase: engine.phase(),
        player_hand: player.cards().to_vec(),
        dealer_hand: dealer.cards().to_vec(),
        player_value: player.value(),
        dealer_value: dealer.value(),
        player_value_label: player.detailed_value().to_string(),
        dealer_value_label: dealer.detailed_value().to_string(),
        betting_enabled: engine.config().betting_enabled,
        balance: engine.balance(),
        pending_bet: engine.pending_bet(),
        out_of_chips: engine.is_out_of_chips(),
        outcome: engine.outcome().cloned(),
        cards_remaining: engine.deck().len(),
    }
}

pub fn build_hit_response<R: RandomSource>(engine: &BlackjackEngine<R>) -> HitResponseDto {
    HitResponseDto {
        hand: engine.player_hand().cards().to_vec(),
        value: engine.player_value(),
        phase: engine.phase(),
        outcome: engine.outcome().cloned(),
    }
}

pub fn build_stand_response<R: RandomSource>(engine: &BlackjackEngine<R>) -> StandResponseDto {
    StandResponseDto {
        dealer_hand: engine.dealer_hand().cards().to_vec(),
        dealer_value: engine.dealer_value(),
        phase: engine.phase(),
        outcome: engine.outcome().cloned(),
    }
}
