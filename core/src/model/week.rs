use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;

/// One 7-day window of the board. `anchor` is the Monday the window starts
/// on, so day index 0..6 maps positionally to Mon..Sun. Each day carries the
/// summary figures shown above the grid: occupancy percentage and average
/// income.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekWindow {
    anchor: NaiveDate,
    occupancy_percent: [u8; DAYS_PER_WEEK],
    average_income: [u32; DAYS_PER_WEEK],
}

impl WeekWindow {
    pub fn starting(
        anchor: NaiveDate,
        occupancy_percent: [u8; DAYS_PER_WEEK],
        average_income: [u32; DAYS_PER_WEEK],
    ) -> Self {
        Self {
            anchor,
            occupancy_percent,
            average_income,
        }
    }

    /// The two hardcoded demo windows, anchored on Mondays so the
    /// day-of-month figures line up under the Mon..Sun header.
    pub fn sample_weeks() -> Vec<WeekWindow> {
        vec![
            WeekWindow::starting(
                NaiveDate::from_ymd_opt(2027, 3, 15).unwrap(),
                [85, 90, 75, 80, 95, 70, 65],
                [120, 150, 110, 130, 160, 140, 125],
            ),
            WeekWindow::starting(
                NaiveDate::from_ymd_opt(2027, 3, 22).unwrap(),
                [70, 75, 85, 90, 80, 65, 60],
                [110, 130, 145, 170, 150, 120, 105],
            ),
        ]
    }

    pub fn day(&self, index: usize) -> NaiveDate {
        self.anchor + Duration::days(index as i64)
    }

    pub fn day_of_month(&self, index: usize) -> u32 {
        self.day(index).day()
    }

    pub fn weekday_label(&self, index: usize) -> String {
        self.day(index).format("%a").to_string()
    }

    pub fn occupancy_percent(&self, index: usize) -> u8 {
        self.occupancy_percent[index]
    }

    pub fn average_income(&self, index: usize) -> u32 {
        self.average_income[index]
    }

    /// Label shown in the week picker, e.g. "Mar 15 - Mar 21".
    pub fn range_label(&self) -> String {
        let start = self.anchor;
        let end = self.day(DAYS_PER_WEEK - 1);
        format!(
            "{} {} - {} {}",
            start.format("%b"),
            start.day(),
            end.format("%b"),
            end.day()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_weeks_cover_consecutive_dates() {
        let weeks = WeekWindow::sample_weeks();
        assert_eq!(weeks.len(), 2);

        let first: Vec<u32> = (0..DAYS_PER_WEEK).map(|i| weeks[0].day_of_month(i)).collect();
        assert_eq!(first, vec![15, 16, 17, 18, 19, 20, 21]);
        let second: Vec<u32> = (0..DAYS_PER_WEEK).map(|i| weeks[1].day_of_month(i)).collect();
        assert_eq!(second, vec![22, 23, 24, 25, 26, 27, 28]);
    }

    #[test]
    fn test_weekday_labels_run_mon_to_sun() {
        let week = &WeekWindow::sample_weeks()[0];
        let labels: Vec<String> = (0..DAYS_PER_WEEK).map(|i| week.weekday_label(i)).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn test_range_labels() {
        let weeks = WeekWindow::sample_weeks();
        assert_eq!(weeks[0].range_label(), "Mar 15 - Mar 21");
        assert_eq!(weeks[1].range_label(), "Mar 22 - Mar 28");
    }

    #[test]
    fn test_summary_figures_are_positional() {
        let week = &WeekWindow::sample_weeks()[0];
        assert_eq!(week.occupancy_percent(0), 85);
        assert_eq!(week.occupancy_percent(6), 65);
        assert_eq!(week.average_income(4), 160);
    }
}
