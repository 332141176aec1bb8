use crate::model::guest::{Guest, Rgb};
use crate::model::room::RoomCategory;
use crate::repository::traits::GuestDirectory;

/// Hardcoded demo bookings. Every record is a distinct booking with its own
/// id, even where the same guest appears twice.
pub struct SampleDirectory {
    guests: Vec<Guest>,
}

impl SampleDirectory {
    pub fn new() -> Self {
        use RoomCategory::{Standard, Superior};

        let guests = vec![
            // Week 1 - Superior rooms
            Guest::new("Bessie Cooper", Rgb::new(179, 230, 179), 0, 15, 20, Superior, 0), // pastel green
            Guest::new("Kristin Watson", Rgb::new(179, 204, 230), 1, 16, 18, Superior, 0), // pastel blue
            Guest::new("Albert Flores", Rgb::new(217, 204, 230), 2, 15, 20, Superior, 0), // pastel violet
            Guest::new("Bessie Cooper", Rgb::new(179, 230, 179), 3, 20, 21, Superior, 0), // same guest, second booking
            // Week 1 - Standard rooms
            Guest::new("John Smith", Rgb::new(230, 204, 179), 0, 15, 17, Standard, 0), // pastel orange
            Guest::new("Emma Johnson", Rgb::new(230, 179, 204), 1, 18, 21, Standard, 0), // pastel pink
            Guest::new("Michael Brown", Rgb::new(204, 230, 204), 2, 16, 19, Standard, 0), // light green
            // Week 2 - Superior rooms
            Guest::new("Robert Davis", Rgb::new(204, 179, 230), 0, 22, 25, Superior, 1), // pastel purple
            Guest::new("Sarah Miller", Rgb::new(230, 230, 179), 1, 23, 28, Superior, 1), // pastel yellow
            Guest::new("James Wilson", Rgb::new(179, 230, 230), 2, 24, 27, Superior, 1), // pastel cyan
            Guest::new("Jennifer Lee", Rgb::new(230, 204, 204), 3, 22, 24, Superior, 1), // pastel pink
            // Week 2 - Standard rooms
            Guest::new("David Taylor", Rgb::new(204, 204, 179), 0, 25, 28, Standard, 1), // pastel tan
            Guest::new("Lisa Anderson", Rgb::new(179, 204, 179), 1, 22, 24, Standard, 1), // pastel mint
            Guest::new("Thomas White", Rgb::new(230, 179, 179), 2, 23, 26, Standard, 1), // pastel salmon
        ];

        SampleDirectory { guests }
    }
}

impl Default for SampleDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestDirectory for SampleDirectory {
    fn guests(&self) -> &[Guest] {
        &self.guests
    }
}
