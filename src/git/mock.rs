use crate::error::Result;
use crate::git::RefSource;

/// Mock reference source for testing without a git checkout
pub struct MockRefSource {
    current: String,
}

impl MockRefSource {
    /// Create a mock that reports the given reference string
    pub fn new(current: impl Into<String>) -> Self {
        MockRefSource {
            current: current.into(),
        }
    }
}

impl RefSource for MockRefSource {
    fn current_ref(&self) -> Result<String> {
        Ok(self.current.clone())
    }
}
