//! Движок правил блэкджека: игрок против дилера.
//!
//! Слои:
//! - `domain` – карты, колода, руки, фишки, фазы, конфиг стола;
//! - `eval` – подсчёт очков руки;
//! - `engine` – леджер ставок и машина состояний раунда;
//! - `infra` – реализации RNG;
//! - `api` – команды/запросы/DTO для фронта.
//!
//! Отрисовки здесь нет: фронт читает состояние и вызывает операции.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, Chips, GamePhase, Outcome, Rank, Suit, TableConfig, Winner};
pub use engine::{BlackjackEngine, EngineError, RoundStatus};
pub use eval::evaluate;
