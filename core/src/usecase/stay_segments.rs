use thiserror::Error;

use crate::model::guest::Guest;
use crate::model::week::DAYS_PER_WEEK;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("room index {index} is out of range (0..{count})")]
    RoomIndexOutOfRange { index: usize, count: usize },
    #[error("week index {index} is out of range (0..{count})")]
    WeekOutOfRange { index: usize, count: usize },
}

/// A maximal contiguous run of day indices (0..6) during which one booking
/// occupies a room. Computed on demand per room row and discarded after
/// rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StaySegment {
    pub guest: Guest,
    pub start_index: usize,
    pub end_index: usize,
}

impl StaySegment {
    pub fn day_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// Collapses per-day occupancy answers into contiguous stay segments for one
/// room row. The builder only knows the valid index domain; the occupant
/// lookup itself is a capability supplied by the caller, so the algorithm is
/// data-source-agnostic.
#[derive(Debug, Clone, Copy)]
pub struct StaySegmentBuilder {
    room_count: usize,
    week_count: usize,
}

impl StaySegmentBuilder {
    pub fn new(room_count: usize, week_count: usize) -> Self {
        Self {
            room_count,
            week_count,
        }
    }

    /// Scans day indices 0..6 in order. `resolve` answers who occupies the
    /// room on a given day of the selected week, or `None` for vacancy. A
    /// run stays open while the resolver keeps returning the same booking
    /// id; a vacant day or a different booking closes it.
    ///
    /// Segments come back ordered by `start_index`, non-overlapping, and
    /// covering exactly the occupied days. Index validation happens before
    /// the scan; on valid input the function always returns a (possibly
    /// empty) list.
    pub fn build<F>(
        &self,
        room_index: usize,
        week: usize,
        mut resolve: F,
    ) -> Result<Vec<StaySegment>, SegmentError>
    where
        F: FnMut(usize) -> Option<Guest>,
    {
        if room_index >= self.room_count {
            return Err(SegmentError::RoomIndexOutOfRange {
                index: room_index,
                count: self.room_count,
            });
        }
        if week >= self.week_count {
            return Err(SegmentError::WeekOutOfRange {
                index: week,
                count: self.week_count,
            });
        }

        let mut segments = Vec::new();
        let mut open: Option<(Guest, usize)> = None;

        for day in 0..DAYS_PER_WEEK {
            match resolve(day) {
                Some(guest) => match &open {
                    Some((current, _)) if current.booking_id == guest.booking_id => {}
                    _ => {
                        if let Some((finished, start)) = open.take() {
                            segments.push(StaySegment {
                                guest: finished,
                                start_index: start,
                                end_index: day - 1,
                            });
                        }
                        open = Some((guest, day));
                    }
                },
                None => {
                    if let Some((finished, start)) = open.take() {
                        segments.push(StaySegment {
                            guest: finished,
                            start_index: start,
                            end_index: day - 1,
                        });
                    }
                }
            }
        }

        if let Some((finished, start)) = open {
            segments.push(StaySegment {
                guest: finished,
                start_index: start,
                end_index: DAYS_PER_WEEK - 1,
            });
        }

        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::guest::Rgb;
    use crate::model::room::RoomCategory;

    fn booking(name: &str) -> Guest {
        Guest::new(name, Rgb::new(179, 230, 179), 0, 15, 21, RoomCategory::Superior, 0)
    }

    fn build_row(days: [Option<Guest>; DAYS_PER_WEEK]) -> Vec<StaySegment> {
        StaySegmentBuilder::new(4, 2)
            .build(0, 0, |day| days[day].clone())
            .unwrap()
    }

    #[test]
    fn test_all_vacant_week_yields_no_segments() {
        let segments = build_row([None, None, None, None, None, None, None]);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_full_week_yields_single_segment() {
        let g = booking("Albert Flores");
        let days = [
            Some(g.clone()),
            Some(g.clone()),
            Some(g.clone()),
            Some(g.clone()),
            Some(g.clone()),
            Some(g.clone()),
            Some(g.clone()),
        ];
        let segments = build_row(days);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_index, 0);
        assert_eq!(segments[0].end_index, 6);
        assert_eq!(segments[0].guest, g);
    }

    #[test]
    fn test_two_stays_split_by_vacancy() {
        // [G1, G1, G1, -, G2, G2, -]
        let g1 = booking("Kristin Watson");
        let g2 = booking("John Smith");
        let days = [
            Some(g1.clone()),
            Some(g1.clone()),
            Some(g1.clone()),
            None,
            Some(g2.clone()),
            Some(g2.clone()),
            None,
        ];
        let segments = build_row(days);
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].start_index, segments[0].end_index), (0, 2));
        assert_eq!(segments[0].guest.name, "Kristin Watson");
        assert_eq!((segments[1].start_index, segments[1].end_index), (4, 5));
        assert_eq!(segments[1].guest.name, "John Smith");
    }

    #[test]
    fn test_non_consecutive_days_of_one_booking_never_merge() {
        // [-, G1, -, G1, -, G1, -]
        let g1 = booking("Emma Johnson");
        let days = [
            None,
            Some(g1.clone()),
            None,
            Some(g1.clone()),
            None,
            Some(g1.clone()),
            None,
        ];
        let segments = build_row(days);
        assert_eq!(segments.len(), 3);
        for (segment, expected_day) in segments.iter().zip([1, 3, 5]) {
            assert_eq!(segment.start_index, expected_day);
            assert_eq!(segment.end_index, expected_day);
            assert_eq!(segment.day_count(), 1);
        }
    }

    #[test]
    fn test_single_occupied_day_at_end_of_week() {
        let g = booking("Michael Brown");
        let segments = build_row([None, None, None, None, None, None, Some(g.clone())]);
        assert_eq!(segments.len(), 1);
        assert_eq!((segments[0].start_index, segments[0].end_index), (6, 6));
    }

    #[test]
    fn test_adjacent_distinct_bookings_of_same_named_guest_stay_separate() {
        // Continuity follows the booking id, so a back-to-back rebooking by
        // the same guest still renders as two blocks.
        let first = booking("Bessie Cooper");
        let second = booking("Bessie Cooper");
        assert_ne!(first.booking_id, second.booking_id);

        let days = [
            Some(first.clone()),
            Some(first.clone()),
            Some(second.clone()),
            Some(second.clone()),
            None,
            None,
            None,
        ];
        let segments = build_row(days);
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].start_index, segments[0].end_index), (0, 1));
        assert_eq!(segments[0].guest.booking_id, first.booking_id);
        assert_eq!((segments[1].start_index, segments[1].end_index), (2, 3));
        assert_eq!(segments[1].guest.booking_id, second.booking_id);
    }

    #[test]
    fn test_room_index_out_of_range_fails_before_scanning() {
        let builder = StaySegmentBuilder::new(4, 2);
        let err = builder
            .build(4, 0, |_| -> Option<Guest> { panic!("resolver must not run") })
            .unwrap_err();
        assert_eq!(err, SegmentError::RoomIndexOutOfRange { index: 4, count: 4 });
    }

    #[test]
    fn test_week_out_of_range_fails_before_scanning() {
        let builder = StaySegmentBuilder::new(4, 2);
        let err = builder
            .build(0, 5, |_| -> Option<Guest> { panic!("resolver must not run") })
            .unwrap_err();
        assert_eq!(err, SegmentError::WeekOutOfRange { index: 5, count: 2 });
    }

    #[test]
    fn test_build_is_idempotent() {
        let g1 = booking("Lisa Anderson");
        let g2 = booking("Thomas White");
        let days = [
            Some(g1.clone()),
            Some(g1.clone()),
            None,
            Some(g2.clone()),
            Some(g2.clone()),
            Some(g2.clone()),
            None,
        ];
        let first = build_row(days.clone());
        let second = build_row(days);
        assert_eq!(first, second);
    }
}
