use serde::{Deserialize, Serialize};

/// Одна запись лога реплея: какое по счёту действие и как оно описано.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplayEntry {
    /// Позиция действия в развёрнутой последовательности.
    pub index: usize,
    pub description: String,
}

/// Журнал уже проигранных шагов (то, что фронт показывает под столом).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplayHistory {
    pub entries: Vec<ReplayEntry>,
}

impl ReplayHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, index: usize, description: impl Into<String>) {
        self.entries.push(ReplayEntry {
            index,
            description: description.into(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ReplayEntry> {
        self.entries.last()
    }

    /// Описания по порядку, без индексов.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.description.as_str())
    }
}
