use crate::model::guest::Guest;

/// Data-source seam for the board. Implementations hand out the full set of
/// booking records; all filtering happens in the service layer.
pub trait GuestDirectory {
    fn guests(&self) -> &[Guest];
}
