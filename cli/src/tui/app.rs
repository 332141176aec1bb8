use staygrid_core::{BoardService, SampleDirectory, ViewEvent, ViewState, WeekBoard};

/// Interactive state of the dashboard: the board data source plus the
/// current view snapshot. The picker cursor is render-only scratch (which
/// row is highlighted while the dropdown is open) and lives outside the
/// view-state transitions.
pub struct App {
    pub service: BoardService<SampleDirectory>,
    pub state: ViewState,
    pub picker_cursor: usize,
}

impl App {
    pub fn new(service: BoardService<SampleDirectory>) -> App {
        let state = ViewState::new(service.week_count());
        App {
            service,
            state,
            picker_cursor: 0,
        }
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        self.state = self.state.apply(event);
    }

    pub fn open_week_picker(&mut self) {
        self.picker_cursor = self.state.selected_week;
        self.dispatch(ViewEvent::ToggleWeekPicker);
    }

    pub fn picker_next(&mut self) {
        if self.picker_cursor + 1 < self.state.week_count {
            self.picker_cursor += 1;
        }
    }

    pub fn picker_previous(&mut self) {
        if self.picker_cursor > 0 {
            self.picker_cursor -= 1;
        }
    }

    pub fn pick_highlighted_week(&mut self) {
        self.dispatch(ViewEvent::SelectWeek(self.picker_cursor));
    }

    /// Board data for the selected week. The reducer keeps `selected_week`
    /// inside the window bounds, so this always resolves.
    pub fn board(&self) -> WeekBoard {
        self.service
            .week_board(self.state.selected_week)
            .expect("selected week is in range")
    }
}
