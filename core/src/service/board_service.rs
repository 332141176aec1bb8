use anyhow::Result;

use crate::model::guest::Guest;
use crate::model::room::{RoomCatalog, RoomCategory};
use crate::model::week::{WeekWindow, DAYS_PER_WEEK};
use crate::repository::sample::SampleDirectory;
use crate::repository::traits::GuestDirectory;
use crate::service::dto::{DayColumn, RoomRow, SectionBoard, StayBlock, WeekBoard};
use crate::usecase::stay_segments::{SegmentError, StaySegment, StaySegmentBuilder};

/// Assembles display-ready board data from a guest directory, a room
/// catalog, and the defined week windows. Holds no mutable state; every
/// query recomputes from the read-only records.
pub struct BoardService<D: GuestDirectory> {
    directory: D,
    catalog: RoomCatalog,
    weeks: Vec<WeekWindow>,
}

impl<D: GuestDirectory> BoardService<D> {
    pub fn new(directory: D, catalog: RoomCatalog, weeks: Vec<WeekWindow>) -> Self {
        Self {
            directory,
            catalog,
            weeks,
        }
    }

    pub fn weeks(&self) -> &[WeekWindow] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    fn week_window(&self, week: usize) -> Result<&WeekWindow, SegmentError> {
        self.weeks.get(week).ok_or(SegmentError::WeekOutOfRange {
            index: week,
            count: self.weeks.len(),
        })
    }

    /// The booking occupying `room_index` on day `day_index` of `week`, or
    /// `None` when the room is vacant that day. The day index is translated
    /// to a day-of-month through the week window before matching records.
    pub fn occupant(
        &self,
        room_index: usize,
        day_index: usize,
        category: RoomCategory,
        week: usize,
    ) -> Option<&Guest> {
        let window = self.weeks.get(week)?;
        let date = window.day_of_month(day_index);
        self.directory.guests().iter().find(|guest| {
            guest.room_index == room_index
                && guest.category == category
                && guest.week == week
                && guest.covers(date)
        })
    }

    /// Contiguous stay segments for one room row of the selected week.
    pub fn stay_segments(
        &self,
        room_index: usize,
        category: RoomCategory,
        week: usize,
    ) -> Result<Vec<StaySegment>, SegmentError> {
        let builder = StaySegmentBuilder::new(self.catalog.room_count(category), self.weeks.len());
        builder.build(room_index, week, |day| {
            self.occupant(room_index, day, category, week).cloned()
        })
    }

    pub fn section_board(&self, category: RoomCategory, week: usize) -> Result<SectionBoard> {
        let rooms = self.catalog.rooms(category);
        let mut rows = Vec::with_capacity(rooms.len());
        for (room_index, room) in rooms.iter().enumerate() {
            let segments = self.stay_segments(room_index, category, week)?;
            rows.push(RoomRow {
                room: room.clone(),
                blocks: segments.into_iter().map(StayBlock::from_segment).collect(),
            });
        }
        Ok(SectionBoard {
            category,
            title: category.title().to_string(),
            rooms: rows,
        })
    }

    /// Everything the rendering layer needs for one week of the board.
    pub fn week_board(&self, week: usize) -> Result<WeekBoard> {
        let window = self.week_window(week)?;

        let days = (0..DAYS_PER_WEEK)
            .map(|index| DayColumn {
                weekday: window.weekday_label(index),
                day_of_month: window.day_of_month(index),
                occupancy_percent: window.occupancy_percent(index),
                average_income: window.average_income(index),
            })
            .collect();

        let sections = RoomCategory::ALL
            .iter()
            .map(|&category| self.section_board(category, week))
            .collect::<Result<Vec<_>>>()?;

        Ok(WeekBoard {
            week,
            range_label: window.range_label(),
            days,
            sections,
        })
    }

    /// Booking records for one week window, ordered by section, room, then
    /// arrival date.
    pub fn bookings(&self, week: usize) -> Result<Vec<&Guest>> {
        self.week_window(week)?;
        let mut bookings: Vec<&Guest> = self
            .directory
            .guests()
            .iter()
            .filter(|guest| guest.week == week)
            .collect();
        bookings.sort_by_key(|guest| (guest.category, guest.room_index, guest.start_day));
        Ok(bookings)
    }
}

impl BoardService<SampleDirectory> {
    /// Board wired to the hardcoded demo data.
    pub fn sample() -> Self {
        BoardService::new(
            SampleDirectory::new(),
            RoomCatalog::sample(),
            WeekWindow::sample_weeks(),
        )
    }
}
