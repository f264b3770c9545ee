//! Named execution contexts.
//!
//! The core never builds a runtime of its own. The host hands in tokio
//! runtime handles and every repository pushes its network work onto the
//! `io` one, so callers must not assume the call runs on their thread.

use std::fmt;
use std::future::Future;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{SdkError, SdkResult};

/// Which worker pool an operation runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    Main,
    MainImmediate,
    Io,
    Default,
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionContext::Main => write!(f, "main"),
            ExecutionContext::MainImmediate => write!(f, "main_immediate"),
            ExecutionContext::Io => write!(f, "io"),
            ExecutionContext::Default => write!(f, "default"),
        }
    }
}

/// Set of runtime handles, one per [`ExecutionContext`].
///
/// Cloning is cheap; `Handle` is reference counted.
#[derive(Clone, Debug)]
pub struct Dispatchers {
    main: Handle,
    main_immediate: Handle,
    io: Handle,
    default: Handle,
}

impl Dispatchers {
    pub fn new(main: Handle, main_immediate: Handle, io: Handle, default: Handle) -> Self {
        Self {
            main,
            main_immediate,
            io,
            default,
        }
    }

    /// Maps every context onto the runtime the caller is running in.
    pub fn current() -> SdkResult<Self> {
        let handle = Handle::try_current().map_err(|e| {
            SdkError::configuration("dispatchers", format!("no tokio runtime available: {e}"))
        })?;
        Ok(Self::new(handle.clone(), handle.clone(), handle.clone(), handle))
    }

    /// Replaces the IO handle, e.g. with a dedicated blocking-friendly runtime.
    pub fn with_io(mut self, io: Handle) -> Self {
        self.io = io;
        self
    }

    pub fn handle(&self, context: ExecutionContext) -> &Handle {
        match context {
            ExecutionContext::Main => &self.main,
            ExecutionContext::MainImmediate => &self.main_immediate,
            ExecutionContext::Io => &self.io,
            ExecutionContext::Default => &self.default,
        }
    }

    /// Runs `future` on the given context and waits for it.
    ///
    /// Dropping the returned future aborts the spawned task, so a cancelled
    /// caller never leaves work running behind it. A panic inside the task
    /// comes back as [`SdkError::Internal`].
    pub async fn run<F, T>(&self, context: ExecutionContext, future: F) -> SdkResult<T>
    where
        F: Future<Output = SdkResult<T>> + Send + 'static,
        T: Send + 'static,
    {
        let mut task = AbortOnDrop(self.handle(context).spawn(future));
        match (&mut task.0).await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(SdkError::Cancelled),
            Err(e) => Err(SdkError::Internal {
                source: anyhow::anyhow!("task on {} context failed: {}", context, e),
            }),
        }
    }

    pub async fn io<F, T>(&self, future: F) -> SdkResult<T>
    where
        F: Future<Output = SdkResult<T>> + Send + 'static,
        T: Send + 'static,
    {
        self.run(ExecutionContext::Io, future).await
    }
}

struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
