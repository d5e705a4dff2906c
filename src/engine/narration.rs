use crate::domain::PlayerNumber;
use crate::engine::actions::{Action, BlindKind};

/// Текст, который показывается, когда раздача доиграна до конца.
pub const HAND_COMPLETE: &str = "Hand complete!";

/// Текст до первого шага (и после reset).
pub const READY_TO_REPLAY: &str = "Ready to replay...";

/// Человекочитаемые описания действий.
///
/// Зритель (`viewer`) описывается от первого лица: "You call $20",
/// остальные – в третьем: "Player 2 calls $20". На числа в состоянии
/// это никак не влияет.
#[derive(Clone, Copy, Debug)]
pub struct Narrator {
    viewer: PlayerNumber,
}

impl Narrator {
    pub fn new(viewer: PlayerNumber) -> Self {
        Self { viewer }
    }

    pub fn describe(&self, action: &Action) -> String {
        match action {
            Action::DealerAssigned { player_index } => {
                let player = player_index.saturating_add(1);
                format!("Dealer: {}", self.label(player))
            }
            Action::PostBlind {
                player,
                kind,
                amount,
            } => {
                let blind = match kind {
                    BlindKind::Small => "SB",
                    BlindKind::Big => "BB",
                };
                format!("{} {} {blind} {amount}", self.label(*player), self.verb(*player, "post"))
            }
            Action::Call { player, amount } => {
                format!("{} {} {amount}", self.label(*player), self.verb(*player, "call"))
            }
            Action::Raise { player, amount } => {
                format!("{} {} {amount}", self.label(*player), self.verb(*player, "raise"))
            }
            Action::Fold { player } => {
                format!("{} {}", self.label(*player), self.verb(*player, "fold"))
            }
            Action::AllIn { player, amount } => {
                format!("{} ALL-IN {amount}", self.label(*player))
            }
            Action::CommunityRevealed { cards } => {
                let cards: Vec<&str> = cards.iter().map(|c| c.as_str()).collect();
                format!("Community: {}", cards.join(", "))
            }
            Action::HoleCardDealt { player, .. } => {
                format!("{} {} card", self.label(*player), self.verb(*player, "receive"))
            }
            Action::WinnerPaid { player, amount } => {
                format!("{} {} {amount}!", self.label(*player), self.verb(*player, "win"))
            }
            Action::Unrecognized { raw } => raw.clone(),
        }
    }

    /// Описание пропущенного действия игрока, которого нет за столом.
    pub fn describe_unseated(&self, action: &Action, player: PlayerNumber) -> String {
        match action {
            Action::WinnerPaid { amount, .. } => {
                format!("Player {player} is not seated, payout of {amount} skipped")
            }
            _ => format!("Player {player} is not seated, action skipped"),
        }
    }

    /// "You" для зрителя, "Player N" для остальных.
    pub fn label(&self, player: PlayerNumber) -> String {
        if player == self.viewer {
            "You".to_string()
        } else {
            format!("Player {player}")
        }
    }

    /// Глагол в нужном лице: "call" / "calls".
    fn verb(&self, player: PlayerNumber, base: &str) -> String {
        if player == self.viewer {
            base.to_string()
        } else {
            format!("{base}s")
        }
    }
}
