pub mod guest;
pub mod room;
pub mod week;
