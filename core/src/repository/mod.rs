pub mod sample;
pub mod traits;

// Re-export
pub use sample::SampleDirectory;
pub use traits::GuestDirectory;
