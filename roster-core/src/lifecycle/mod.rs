//! Process lifecycle integration for snapshot/restore runtimes.

pub mod priming;

pub use self::priming::{CheckpointResource, PrimingController, PrimingState};
