//! Проекция состояния реплея в модель для отрисовки.
//!
//! Чистая функция: ничего не меняет, при одинаковом входе даёт одинаковый
//! результат. Рисует уже внешний код (canvas, терминал и т.п.).

use crate::domain::{Chips, GameConfig, HandRecord, HoleCards, PlayerNumber, PlayerStatus};
use crate::engine::GameState;

use super::dto::{
    CardFaceDto, CommunitySlotDto, PlayerSlotDto, Point, SeatStyleDto, TableViewDto,
};

/// Размер поверхности отрисовки.
pub const TABLE_WIDTH: u32 = 550;
pub const TABLE_HEIGHT: u32 = 400;

/// Максимум игроков, под которых есть места на столе.
pub const MAX_SEATS: usize = 6;

/// Места игроков: три сверху, три снизу.
pub const SEAT_POSITIONS: [Point; MAX_SEATS] = [
    Point::new(80, 60),
    Point::new(250, 40),
    Point::new(420, 60),
    Point::new(80, 340),
    Point::new(250, 360),
    Point::new(420, 340),
];

/// Пять общих карт в ряд по центру стола.
pub const COMMUNITY_POSITIONS: [Point; 5] = [
    Point::new(130, 200),
    Point::new(210, 200),
    Point::new(290, 200),
    Point::new(370, 200),
    Point::new(450, 200),
];

pub const POT_POSITION: Point = Point::new(275, 150);

/// Сформировать `TableViewDto` по снэпшоту, записи раздачи и конфигу.
///
/// Игроков больше шести на столе не рисуем – для них нет мест.
pub fn project(state: &GameState, hand: &HandRecord, config: &GameConfig) -> TableViewDto {
    let dealer_seat = hand.dealer.and_then(|d| u8::try_from(d).ok());

    let players = state
        .stacks
        .iter()
        .zip(&state.player_status)
        .zip(&state.hole_cards)
        .take(MAX_SEATS)
        .enumerate()
        .map(|(idx, ((stack, status), cards))| SeatView {
            idx,
            stack: *stack,
            status: *status,
            cards,
        })
        .map(|seat| build_player_slot(seat, config, dealer_seat))
        .collect();

    let community = COMMUNITY_POSITIONS
        .iter()
        .zip(state.community.iter())
        .map(|(position, slot)| CommunitySlotDto {
            position: *position,
            card: CardFaceDto::from(slot),
        })
        .collect();

    TableViewDto {
        hand_number: hand.hand_number,
        header: header_for(hand),
        dealer_seat,
        width: TABLE_WIDTH,
        height: TABLE_HEIGHT,
        pot: state.pot.total,
        pot_label: format!("POT: {}", state.pot.total),
        pot_position: POT_POSITION,
        players,
        community,
    }
}

/// Заголовок раздачи: `Hand 3` или `Hand 3 (Dealer: P2)`.
pub fn header_for(hand: &HandRecord) -> String {
    match hand.dealer {
        Some(dealer) => format!(
            "Hand {} (Dealer: P{})",
            hand.hand_number,
            dealer.saturating_add(1)
        ),
        None => format!("Hand {}", hand.hand_number),
    }
}

/// Одно место за столом: стек, статус и карманные карты игрока.
struct SeatView<'a> {
    idx: usize,
    stack: Chips,
    status: PlayerStatus,
    cards: &'a HoleCards,
}

fn build_player_slot(
    seat: SeatView<'_>,
    config: &GameConfig,
    dealer_seat: Option<u8>,
) -> PlayerSlotDto {
    let SeatView {
        idx,
        stack,
        status,
        cards,
    } = seat;

    // idx < MAX_SEATS, так что в u8 / u32 влезает всегда.
    let seat_index = idx as u8;
    let player = idx as PlayerNumber + 1;
    let is_viewer = config.is_viewer(player);

    let label = if is_viewer {
        format!("P{player} (YOU)")
    } else {
        format!("P{player}")
    };

    PlayerSlotDto {
        player,
        seat_index,
        label,
        position: SEAT_POSITIONS[idx],
        style: SeatStyleDto {
            status,
            is_viewer,
        },
        stack,
        hole_cards: [CardFaceDto::from(&cards.first), CardFaceDto::from(&cards.second)],
        is_dealer: dealer_seat == Some(seat_index),
    }
}
