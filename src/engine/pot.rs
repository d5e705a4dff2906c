use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Общий банк раздачи. Никогда не уходит в минус.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self {
            total: Chips::ZERO,
        }
    }

    pub fn add(&mut self, amount: Chips) {
        self.total = (self.total + amount).max(Chips::ZERO);
    }

    /// Выплата из банка. Если лог просит больше, чем в банке, банк просто
    /// обнуляется: расхождения в записи не считаются ошибкой.
    pub fn pay_out(&mut self, amount: Chips) {
        self.total = self.total.clipped_sub(amount);
    }
}
