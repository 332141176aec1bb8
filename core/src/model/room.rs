use serde::{Deserialize, Serialize};

/// The two disjoint room lists. Each list is indexed independently, so a
/// `room_index` is only meaningful together with its category.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RoomCategory {
    Superior,
    Standard,
}

impl RoomCategory {
    pub const ALL: [RoomCategory; 2] = [RoomCategory::Superior, RoomCategory::Standard];

    pub fn title(self) -> &'static str {
        match self {
            RoomCategory::Superior => "Superior Room with Queen bed",
            RoomCategory::Standard => "Standard Room",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoomCatalog {
    superior: Vec<String>,
    standard: Vec<String>,
}

impl RoomCatalog {
    pub fn new(superior: Vec<String>, standard: Vec<String>) -> Self {
        Self { superior, standard }
    }

    pub fn sample() -> Self {
        Self::new(
            vec![
                "SUPQA101".to_string(),
                "SUPQA102".to_string(),
                "SUPQA103".to_string(),
                "SUPQA104".to_string(),
            ],
            vec![
                "STDQA101".to_string(),
                "STDQA102".to_string(),
                "STDQA103".to_string(),
            ],
        )
    }

    pub fn rooms(&self, category: RoomCategory) -> &[String] {
        match category {
            RoomCategory::Superior => &self.superior,
            RoomCategory::Standard => &self.standard,
        }
    }

    pub fn room_count(&self, category: RoomCategory) -> usize {
        self.rooms(category).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_lists_are_disjointly_indexed() {
        let catalog = RoomCatalog::sample();
        assert_eq!(catalog.room_count(RoomCategory::Superior), 4);
        assert_eq!(catalog.room_count(RoomCategory::Standard), 3);
        assert_eq!(catalog.rooms(RoomCategory::Superior)[0], "SUPQA101");
        assert_eq!(catalog.rooms(RoomCategory::Standard)[0], "STDQA101");
    }
}
