pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;
pub mod viewstate;

pub use model::guest::{Guest, Rgb};
pub use model::room::{RoomCatalog, RoomCategory};
pub use model::week::{WeekWindow, DAYS_PER_WEEK};
pub use repository::{GuestDirectory, SampleDirectory};
pub use service::board_service::BoardService;
pub use service::dto::{DayColumn, RoomRow, SectionBoard, StayBlock, WeekBoard};
pub use usecase::layout::{stay_span, StaySpan};
pub use usecase::stay_segments::{SegmentError, StaySegment, StaySegmentBuilder};
pub use viewstate::{ViewEvent, ViewState};
