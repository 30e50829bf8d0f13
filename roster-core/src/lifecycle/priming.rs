//! Checkpoint/restore priming of the read path.
//!
//! Snapshot-based serverless runtimes freeze the process image after startup
//! and resume it on demand. Storage clients initialize lazily, so without a
//! warm-up the first request after a restore pays connection setup cold. The
//! controller here runs one synthetic lookup when the runtime announces a
//! checkpoint, forcing every lazy resource on the read path to initialize
//! before the freeze.
//!
//! Only the read path is primed; one lookup initializes the client state the
//! write path shares. The hooks are invoked by the external runtime, never by
//! the core, and may overlap ordinary traffic.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::FindUserByIdQuery;
use crate::domain::{Error, UserId};

/// Lifecycle position of the priming controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimingState {
    /// Serving normally; no checkpoint announced.
    Ready,
    /// Warm-up executed; the process may be frozen.
    Primed,
}

/// Hooks the external runtime invokes around a freeze/resume cycle.
///
/// The core assumes nothing about scheduling beyond the documented
/// transitions: `before_checkpoint` at most once before each freeze,
/// `after_restore` at most once after each resume.
#[async_trait]
pub trait CheckpointResource: Send + Sync {
    /// Invoked before the process image is frozen.
    async fn before_checkpoint(&self) -> Result<(), Error>;

    /// Invoked after the process image is reactivated.
    async fn after_restore(&self) -> Result<(), Error>;
}

/// Two-state checkpoint/restore controller over the find-user query port.
pub struct PrimingController<Q> {
    query: Arc<Q>,
    state: Mutex<PrimingState>,
}

impl<Q> PrimingController<Q> {
    /// Wrap a live find-user query for priming.
    pub fn new(query: Arc<Q>) -> Self {
        Self {
            query,
            state: Mutex::new(PrimingState::Ready),
        }
    }

    /// Current lifecycle position.
    pub fn state(&self) -> PrimingState {
        *self.state_guard()
    }

    fn state_guard(&self) -> MutexGuard<'_, PrimingState> {
        // The lock only guards a plain enum; a poisoned value is still valid.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<Q> CheckpointResource for PrimingController<Q>
where
    Q: FindUserByIdQuery,
{
    async fn before_checkpoint(&self) -> Result<(), Error> {
        info!("before checkpoint: priming read path");

        let synthetic = UserId::random();
        match self.query.find_by_user_id(&synthetic).await {
            // The miss is the success path: the probe id was minted fresh, so
            // a completed lookup proves the storage path is warm. An Ok hit on
            // a random id is equally a completed warm-up.
            Err(Error::UserNotFound { .. }) | Ok(_) => {}
            // Anything else means the warm-up itself failed; surface it so the
            // runtime does not freeze a broken process.
            Err(error) => return Err(error),
        }

        *self.state_guard() = PrimingState::Primed;
        info!("read path primed");
        Ok(())
    }

    async fn after_restore(&self) -> Result<(), Error> {
        *self.state_guard() = PrimingState::Ready;
        info!("after restore");
        Ok(())
    }
}
