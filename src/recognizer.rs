//! Board recognition collaborator.
//!
//! A recognizer turns a screenshot into a placement string. The credential is
//! passed on every call; obtaining and refreshing it is the caller's job.

use std::fmt;

/// Opaque access token for the recognition service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Credential(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("no credential supplied")]
    MissingCredential,
    #[error("recognition service unreachable: {0}")]
    Unreachable(String),
    #[error("credential rejected")]
    Rejected,
}

/// Image-to-position service.
///
/// `Ok(None)` means the service answered but found no board.
pub trait Recognizer {
    fn recognize(&self, image: &[u8], credential: &Credential) -> Result<Option<String>, RecognizerError>;
}

impl<T: Recognizer + ?Sized> Recognizer for &T {
    fn recognize(&self, image: &[u8], credential: &Credential) -> Result<Option<String>, RecognizerError> {
        (**self).recognize(image, credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_redacted() {
        let c = Credential::new("s3cr3t");
        assert_eq!(format!("{:?}", c), "Credential(***)");
        assert_eq!(c.as_str(), "s3cr3t");
        assert!(Credential::new("  ").is_empty());
    }
}
