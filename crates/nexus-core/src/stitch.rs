//! Combining two normalized responses into one sentence.

use crate::envelope::NormalizedResponse;

/// Sew the two sources' summaries into a single fixed sentence.
///
/// Deterministic on purpose: the same pair of responses always yields the
/// same output.
pub fn stitch(first: &NormalizedResponse, second: &NormalizedResponse) -> String {
    format!(
        "In the laboratory of chaos, {} meets {}. The first limb speaks: '{}' The second limb responds: '{}' And thus, a new creature is born.",
        first.source_id(),
        second.source_id(),
        first.summary(),
        second.summary(),
    )
}
