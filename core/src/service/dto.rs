use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::guest::Rgb;
use crate::model::room::RoomCategory;
use crate::usecase::stay_segments::StaySegment;

/// Display-ready stay block for one room row. Carries everything the
/// rendering layer needs so it never reaches back into the booking records.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StayBlock {
    pub booking_id: Uuid,
    pub guest_name: String,
    pub start_index: usize,
    pub end_index: usize,
    pub fill: Rgb,
    pub text: Rgb,
}

impl StayBlock {
    pub fn from_segment(segment: StaySegment) -> Self {
        let StaySegment {
            guest,
            start_index,
            end_index,
        } = segment;
        Self {
            booking_id: guest.booking_id,
            fill: guest.color,
            text: guest.color.darkened(),
            guest_name: guest.name,
            start_index,
            end_index,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoomRow {
    pub room: String,
    pub blocks: Vec<StayBlock>,
}

/// One column of the day header: weekday and date labels plus the summary
/// figures shown around the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub weekday: String,
    pub day_of_month: u32,
    pub occupancy_percent: u8,
    pub average_income: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SectionBoard {
    pub category: RoomCategory,
    pub title: String,
    pub rooms: Vec<RoomRow>,
}

/// Everything needed to render one week of the board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekBoard {
    pub week: usize,
    pub range_label: String,
    pub days: Vec<DayColumn>,
    pub sections: Vec<SectionBoard>,
}
