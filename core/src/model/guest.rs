use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::room::RoomCategory;

/// 8-bit RGB color carried by a booking for rendering its stay block.
/// Opaque to the consolidation logic; only the rendering layer reads it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Text color matching a block fill: every channel pulled down by half
    /// the range, saturating at black.
    pub fn darkened(self) -> Rgb {
        const DARKENING: u8 = 128;
        Rgb {
            r: self.r.saturating_sub(DARKENING),
            g: self.g.saturating_sub(DARKENING),
            b: self.b.saturating_sub(DARKENING),
        }
    }
}

/// One booking record. `start_day` and `end_day` are inclusive day-of-month
/// bounds, both inside the 7-day window named by `week`. `room_index` points
/// into the room list of `category`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Guest {
    pub booking_id: Uuid,
    pub name: String,
    pub color: Rgb,
    pub room_index: usize,
    pub start_day: u32,
    pub end_day: u32,
    pub category: RoomCategory,
    pub week: usize,
}

impl Guest {
    pub fn new(
        name: &str,
        color: Rgb,
        room_index: usize,
        start_day: u32,
        end_day: u32,
        category: RoomCategory,
        week: usize,
    ) -> Self {
        Self {
            booking_id: Uuid::new_v4(),
            name: name.to_string(),
            color,
            room_index,
            start_day,
            end_day,
            category,
            week,
        }
    }

    pub fn covers(&self, day_of_month: u32) -> bool {
        self.start_day <= day_of_month && day_of_month <= self.end_day
    }

    pub fn stay_days(&self) -> u32 {
        self.end_day - self.start_day + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_is_inclusive_on_both_ends() {
        let guest = Guest::new("Bessie Cooper", Rgb::new(179, 230, 179), 0, 15, 20, RoomCategory::Superior, 0);
        assert!(!guest.covers(14));
        assert!(guest.covers(15));
        assert!(guest.covers(20));
        assert!(!guest.covers(21));
        assert_eq!(guest.stay_days(), 6);
    }

    #[test]
    fn test_darkened_saturates_at_black() {
        assert_eq!(Rgb::new(179, 230, 179).darkened(), Rgb::new(51, 102, 51));
        assert_eq!(Rgb::new(100, 0, 255).darkened(), Rgb::new(0, 0, 127));
    }
}
