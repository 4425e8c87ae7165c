//! Single-slot request tracking.
//!
//! Each slot remembers the token of the one request allowed to commit its
//! result. Beginning a new request invalidates the previous token and aborts
//! its task; a completion carrying any other token is stale.

use tokio::task::JoinHandle;

/// Identifies one spawned request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestSlot {
    issued: u64,
    current: Option<RequestToken>,
    task: Option<JoinHandle<()>>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding whatever was in flight.
    pub fn begin(&mut self) -> RequestToken {
        self.cancel();
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.current = Some(token);
        token
    }

    /// Attach the task serving the current token so it can be aborted when
    /// superseded.
    pub fn attach(&mut self, task: JoinHandle<()>) {
        self.task = Some(task);
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token)
    }

    /// Consume the slot for a completion. Returns `false` for stale tokens,
    /// which must not commit.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.current = None;
        self.task = None;
        true
    }

    /// Drop the in-flight request, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.current = None;
    }

    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }
}
