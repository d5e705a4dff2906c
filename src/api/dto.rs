use serde::{Deserialize, Serialize};

use crate::domain::card::{CardCode, CardSlot, FACE_DOWN_PLACEHOLDER};
use crate::domain::chips::Chips;
use crate::domain::player::{PlayerNumber, PlayerStatus};
use crate::domain::HandNumber;

/// Точка на поверхности отрисовки (центр элемента).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Как показать карту: рубашкой вверх или открытой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardFaceDto {
    FaceDown,
    FaceUp(CardCode),
}

impl CardFaceDto {
    /// Текст на карте: код карты или плейсхолдер `XX-X`.
    pub fn text(&self) -> &str {
        match self {
            CardFaceDto::FaceDown => FACE_DOWN_PLACEHOLDER,
            CardFaceDto::FaceUp(card) => card.as_str(),
        }
    }
}

impl From<&CardSlot> for CardFaceDto {
    fn from(slot: &CardSlot) -> Self {
        match slot {
            CardSlot::Unknown => CardFaceDto::FaceDown,
            CardSlot::Known(card) => CardFaceDto::FaceUp(card.clone()),
        }
    }
}

/// Стиль места: статус игрока + отметка "это зритель".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatStyleDto {
    pub status: PlayerStatus,
    pub is_viewer: bool,
}

/// Цвета плашки игрока.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct SeatPalette {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: u8,
    pub text: &'static str,
}

impl SeatStyleDto {
    /// Палитра для отрисовки.
    /// Приоритет: Winner > Folded > AllIn > зритель > Active.
    pub fn palette(&self) -> SeatPalette {
        let (fill, stroke, stroke_width) = match self.status {
            PlayerStatus::Winner => ("#FFD700", "#FFA500", 4),
            PlayerStatus::Folded => ("#6c757d", "#495057", 2),
            PlayerStatus::AllIn => ("#9d4edd", "#7209b7", 3),
            PlayerStatus::Active if self.is_viewer => ("#ffc107", "#ff9800", 4),
            PlayerStatus::Active => ("#28a745", "#1e7e34", 2),
        };
        let text = if self.status == PlayerStatus::Folded {
            "#ffffff"
        } else {
            "#000000"
        };

        SeatPalette {
            fill,
            stroke,
            stroke_width,
            text,
        }
    }
}

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSlotDto {
    pub player: PlayerNumber,
    pub seat_index: u8,
    /// `P3` или `P3 (YOU)`.
    pub label: String,
    pub position: Point,
    pub style: SeatStyleDto,
    pub stack: Chips,
    pub hole_cards: [CardFaceDto; 2],
    pub is_dealer: bool,
}

/// Слот общей карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunitySlotDto {
    pub position: Point,
    pub card: CardFaceDto,
}

/// Всё, что нужно внешнему рендеру, чтобы нарисовать стол.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub hand_number: HandNumber,
    /// `Hand 3 (Dealer: P2)`.
    pub header: String,
    pub dealer_seat: Option<u8>,
    pub width: u32,
    pub height: u32,
    pub pot: Chips,
    /// `POT: $150`.
    pub pot_label: String,
    pub pot_position: Point,
    pub players: Vec<PlayerSlotDto>,
    pub community: Vec<CommunitySlotDto>,
}
