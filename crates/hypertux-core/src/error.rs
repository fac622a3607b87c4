/// Error returned when parsing a [`Color`] or [`Direction`] from its name fails.
///
/// [`Color`]: crate::Color
/// [`Direction`]: crate::Direction
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown {expected} name: {found:?}")]
pub struct ParseNameError {
    /// What kind of value was being parsed (e.g. `"color"`).
    pub expected: &'static str,
    /// The input that did not match any known name.
    pub found: String,
}

impl ParseNameError {
    pub(crate) fn new(expected: &'static str, found: &str) -> Self {
        Self {
            expected,
            found: found.to_owned(),
        }
    }
}
