use std::collections::VecDeque;

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::card::Card;
use crate::engine::RandomSource;

/// Боевой RNG: процессный `thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раунды при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Скриптованный источник: отдаёт карты в заданном порядке.
///
/// Пока скрипт не кончился, `pick_card` ищет следующую карту скрипта среди
/// оставшихся. Когда скрипт пуст (или карты уже нет в колоде) – обычный
/// детерминированный выбор. Колода при этом остаётся честной: 52 карты, без повторов.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    script: VecDeque<Card>,
    fallback: DeterministicRng,
}

impl ScriptedRng {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            script: cards.into_iter().collect(),
            fallback: DeterministicRng::from_seed(0),
        }
    }

    /// Сколько скриптованных карт ещё не вытянуто.
    pub fn remaining_script(&self) -> usize {
        self.script.len()
    }

    /// Дописать карты в конец скрипта (например, перед следующим раундом).
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.script.extend(cards);
    }
}

impl RandomSource for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.fallback.pick_index(len)
    }

    fn pick_card(&mut self, remaining: &[Card]) -> usize {
        while let Some(next) = self.script.pop_front() {
            if let Some(pos) = remaining.iter().position(|c| *c == next) {
                return pos;
            }
            warn!("scripted card {next} is no longer in the deck, skipping");
        }
        self.fallback.pick_index(remaining.len())
    }
}
