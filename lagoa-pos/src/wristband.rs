//! Wristband reading capability
//!
//! The NFC radio is an external collaborator. The core sees one operation
//! with three outcomes — a UID, a cancellation, or an error — and a hard
//! contract that any technology session opened against the hardware is
//! released on every path, success or not. [`read_wristband`] owns that
//! bracket; callers never touch `begin`/`release` directly.

use crate::error::PosResult;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Outcome of a wristband read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WristbandRead {
    /// Tag scanned; opaque UID as the radio reported it
    Uid(String),
    /// Operator or guest dismissed the scan
    Cancelled,
}

/// Low-level reader contract implemented per radio stack
#[async_trait]
pub trait WristbandReader: Send {
    /// Open a technology session against the radio.
    async fn begin_session(&mut self) -> PosResult<()>;

    /// Wait for a tag or a cancellation.
    async fn poll(&mut self) -> PosResult<WristbandRead>;

    /// Release the technology session. Must be safe to call after a failed
    /// `begin_session`.
    async fn release(&mut self);
}

/// Perform one read with the guaranteed-release bracket.
pub async fn read_wristband<R: WristbandReader>(reader: &mut R) -> PosResult<WristbandRead> {
    let outcome = match reader.begin_session().await {
        Ok(()) => reader.poll().await,
        Err(e) => Err(e),
    };
    // Release runs on every path, including begin/poll failures.
    reader.release().await;
    outcome
}

/// Scripted in-memory reader for tests and demos
#[derive(Debug, Default)]
pub struct ScriptedReader {
    script: Mutex<VecDeque<PosResult<WristbandRead>>>,
    /// Sessions opened so far
    pub sessions_begun: usize,
    /// Sessions released so far; equals `sessions_begun` when the bracket held
    pub sessions_released: usize,
    /// When true, `begin_session` itself fails
    pub fail_begin: bool,
}

impl ScriptedReader {
    pub fn new(script: Vec<PosResult<WristbandRead>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            ..Self::default()
        }
    }

    /// Reader that yields a single UID.
    pub fn with_uid(uid: &str) -> Self {
        Self::new(vec![Ok(WristbandRead::Uid(uid.to_string()))])
    }
}

#[async_trait]
impl WristbandReader for ScriptedReader {
    async fn begin_session(&mut self) -> PosResult<()> {
        self.sessions_begun += 1;
        if self.fail_begin {
            return Err(crate::error::PosError::Validation(
                "NFC radio unavailable".to_string(),
            ));
        }
        Ok(())
    }

    async fn poll(&mut self) -> PosResult<WristbandRead> {
        self.script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or(Ok(WristbandRead::Cancelled))
    }

    async fn release(&mut self) {
        self.sessions_released += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PosError;

    #[tokio::test]
    async fn test_read_yields_uid_and_releases() {
        let mut reader = ScriptedReader::with_uid("NFC01");
        let outcome = read_wristband(&mut reader).await.unwrap();
        assert_eq!(outcome, WristbandRead::Uid("NFC01".to_string()));
        assert_eq!(reader.sessions_begun, 1);
        assert_eq!(reader.sessions_released, 1);
    }

    #[tokio::test]
    async fn test_cancelled_read_releases() {
        let mut reader = ScriptedReader::new(vec![Ok(WristbandRead::Cancelled)]);
        let outcome = read_wristband(&mut reader).await.unwrap();
        assert_eq!(outcome, WristbandRead::Cancelled);
        assert_eq!(reader.sessions_released, 1);
    }

    #[tokio::test]
    async fn test_poll_error_still_releases() {
        let mut reader =
            ScriptedReader::new(vec![Err(PosError::Validation("tag lost".to_string()))]);
        assert!(read_wristband(&mut reader).await.is_err());
        assert_eq!(reader.sessions_begun, 1);
        assert_eq!(reader.sessions_released, 1);
    }

    #[tokio::test]
    async fn test_begin_failure_still_releases() {
        let mut reader = ScriptedReader::default();
        reader.fail_begin = true;
        assert!(read_wristband(&mut reader).await.is_err());
        assert_eq!(reader.sessions_released, 1);
    }
}
