//! Оценка руки в блэкджеке.
//!
//! Основная функция:
//!   `evaluate(cards) -> u32`

pub mod evaluator;
pub mod hand_value;

pub use evaluator::{base_value, evaluate, evaluate_detailed};
pub use hand_value::{describe_value, HandValue, BLACKJACK};
