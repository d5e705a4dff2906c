use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Количество фишек. Обёртка над i64, чтобы не путать с обычными числами.
///
/// Знаковый тип: лог раздачи не валидируется, и стек игрока после реплея
/// вполне может уйти в минус. Пол по нулю есть только у банка (см. `Pot`).
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct Chips(pub i64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Вычитание с полом по нулю: результат никогда не меньше `Chips::ZERO`.
    pub fn clipped_sub(self, other: Chips) -> Chips {
        Chips(self.0.saturating_sub(other.0).max(0))
    }
}

impl fmt::Display for Chips {
    /// Формат вида `$150`, `$-20`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}
