use core::fmt;

use serde::{Deserialize, Serialize};

/// Предел, выше которого рука "сгорает".
pub const BLACKJACK: u32 = 21;

/// Результат оценки руки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue {
    /// Итоговая сумма очков (может быть > 21).
    pub total: u32,
    /// Есть ли туз, который всё ещё считается за 11.
    pub soft: bool,
}

impl HandValue {
    pub const ZERO: HandValue = HandValue {
        total: 0,
        soft: false,
    };

    pub fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    pub fn is_soft(&self) -> bool {
        self.soft
    }
}

impl fmt::Display for HandValue {
    /// `17`, `soft 17`, `bust 24`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bust() {
            write!(f, "bust {}", self.total)
        } else if self.soft {
            write!(f, "soft {}", self.total)
        } else {
            write!(f, "{}", self.total)
        }
    }
}

/// Текстовое описание очков руки для UI / логов.
pub fn describe_value(value: HandValue) -> String {
    value.to_string()
}
