//! Wire assignment tokens

use std::fmt::Display;

/// Render an identifier/value pair as the `KEY=VALUE` token used by the
/// device's write endpoint, for single and batched writes alike.
pub fn format_assignment(key: &str, value: impl Display) -> String {
    format!("{}={}", key, value)
}
