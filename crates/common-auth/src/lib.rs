//! Bearer token classification shared by the mock rCTF endpoints.

use std::fmt;

/// Outcome of checking an `Authorization` header against the issued token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerStatus {
    /// The presented token matches exactly.
    Valid,
    /// A `<scheme> <token>` pair was presented but the token does not match.
    Invalid,
    /// No header, or a header that does not split into exactly two fields.
    Unset,
}

impl BearerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BearerStatus::Valid => "valid",
            BearerStatus::Invalid => "invalid",
            BearerStatus::Unset => "unset",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, BearerStatus::Valid)
    }
}

impl fmt::Display for BearerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the token from a `<scheme> <token>` header value.
///
/// The value is split on single spaces; anything other than exactly two
/// fields yields `None`. The scheme itself is not inspected.
pub fn presented_token(header: &str) -> Option<&str> {
    let mut fields = header.split(' ');
    let _scheme = fields.next()?;
    let token = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some(token)
}

/// Classify an optional `Authorization` header value against `expected`.
pub fn classify(header: Option<&str>, expected: &str) -> BearerStatus {
    match header.and_then(presented_token) {
        Some(token) if token == expected => BearerStatus::Valid,
        Some(_) => BearerStatus::Invalid,
        None => BearerStatus::Unset,
    }
}
