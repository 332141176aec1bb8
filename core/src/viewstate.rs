use crate::model::room::RoomCategory;

/// Snapshot of everything the dashboard needs to render one frame: the
/// selected week, whether the week picker is showing, and the collapsed
/// flags of the two room sections. Immutable per render; transitions go
/// through [`ViewState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub selected_week: usize,
    pub week_count: usize,
    pub week_picker_open: bool,
    pub superior_collapsed: bool,
    pub standard_collapsed: bool,
}

/// Discrete state transitions fired by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    SelectWeek(usize),
    NextWeek,
    PreviousWeek,
    JumpToToday,
    ToggleWeekPicker,
    ToggleSection(RoomCategory),
}

impl ViewState {
    pub fn new(week_count: usize) -> Self {
        Self {
            selected_week: 0,
            week_count,
            week_picker_open: false,
            superior_collapsed: false,
            standard_collapsed: false,
        }
    }

    /// Pure transition: returns the next state, leaving `self` untouched.
    /// Week navigation clamps at the window bounds; selecting a week closes
    /// the picker, and an out-of-range selection only closes it.
    pub fn apply(self, event: ViewEvent) -> Self {
        let mut next = self;
        match event {
            ViewEvent::SelectWeek(week) => {
                if week < self.week_count {
                    next.selected_week = week;
                }
                next.week_picker_open = false;
            }
            ViewEvent::NextWeek => {
                if self.selected_week + 1 < self.week_count {
                    next.selected_week += 1;
                }
            }
            ViewEvent::PreviousWeek => {
                if self.selected_week > 0 {
                    next.selected_week -= 1;
                }
            }
            ViewEvent::JumpToToday => {
                next.selected_week = 0;
            }
            ViewEvent::ToggleWeekPicker => {
                next.week_picker_open = !self.week_picker_open;
            }
            ViewEvent::ToggleSection(RoomCategory::Superior) => {
                next.superior_collapsed = !self.superior_collapsed;
            }
            ViewEvent::ToggleSection(RoomCategory::Standard) => {
                next.standard_collapsed = !self.standard_collapsed;
            }
        }
        next
    }

    pub fn is_collapsed(&self, category: RoomCategory) -> bool {
        match category {
            RoomCategory::Superior => self.superior_collapsed,
            RoomCategory::Standard => self.standard_collapsed,
        }
    }
}
