//! Scripted fetch tasks for exercising the retry and batch logic without a
//! network.

use super::task::FetchTask;
use crate::error::FetchError;
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use url::Url;

pub(crate) struct ScriptedTask {
    fail_first: u32,
    attempts: AtomicU32,
}

impl ScriptedTask {
    pub(crate) fn succeeding() -> ScriptedTask {
        ScriptedTask {
            fail_first: 0,
            attempts: AtomicU32::new(0),
        }
    }

    pub(crate) fn failing() -> ScriptedTask {
        ScriptedTask {
            fail_first: u32::MAX,
            attempts: AtomicU32::new(0),
        }
    }

    /// Fails the first `n` attempts, succeeds afterwards.
    pub(crate) fn failing_first(n: u32) -> ScriptedTask {
        ScriptedTask {
            fail_first: n,
            attempts: AtomicU32::new(0),
        }
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FetchTask for ScriptedTask {
    async fn fetch(&self, _url: &Url, output_path: &Path) -> Result<(), FetchError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt <= self.fail_first {
            return Err(FetchError::Io(std::io::Error::other(
                "scripted transfer failure",
            )));
        }
        if let Some(parent) = output_path.parent()
            && parent.exists()
        {
            std::fs::write(output_path, b"scripted dataset body")?;
        }
        Ok(())
    }
}
