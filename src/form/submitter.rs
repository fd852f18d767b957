use super::{FormState, SubmissionError};
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;

/// Delivers a validated contact request somewhere.
///
/// Runs on the browser's single thread, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait ContactSubmitter {
    async fn submit(&self, request: &FormState) -> Result<(), SubmissionError>;
}

/// Stands in for a backend: waits, then reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY_MS: u32 = 1500;

    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY_MS)
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, _request: &FormState) -> Result<(), SubmissionError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

/// Submitter handle shared through Leptos context.
#[derive(Clone)]
pub struct SharedSubmitter(pub Rc<dyn ContactSubmitter>);

impl SharedSubmitter {
    pub fn new(submitter: impl ContactSubmitter + 'static) -> Self {
        Self(Rc::new(submitter))
    }
}

impl Default for SharedSubmitter {
    fn default() -> Self {
        Self::new(SimulatedSubmitter::default())
    }
}
