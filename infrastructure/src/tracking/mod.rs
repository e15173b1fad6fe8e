//! Filesystem-backed run tracking

pub mod file_tracker;

pub use file_tracker::FileRunTracker;
