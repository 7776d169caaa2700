//! Checking and exchanging diff results.
//!
//! [`compute_diff`](crate::compute_diff) always upholds the segment
//! invariants. Results that arrive from elsewhere (a cache, a JSON payload)
//! go through [`validate`] before they are rendered.

use crate::tracing_macros::debug;
use crate::{Segment, SegmentError, SegmentErrorKind};

/// Check that no segment is empty and no two neighbours share a kind.
pub fn validate(segments: &[Segment]) -> Result<(), SegmentError> {
    for (index, segment) in segments.iter().enumerate() {
        if segment.value.is_empty() {
            return Err(SegmentError::at(SegmentErrorKind::EmptyValue, index));
        }
    }

    for (index, pair) in segments.windows(2).enumerate() {
        if pair[0].kind == pair[1].kind {
            return Err(SegmentError::at(
                SegmentErrorKind::AdjacentSameKind(pair[1].kind),
                index + 1,
            ));
        }
    }

    Ok(())
}

/// Serialize segments as `[{"value": "...", "type": "..."}]`.
pub fn to_json(segments: &[Segment]) -> Result<String, SegmentError> {
    facet_json::to_string(segments).map_err(|err| {
        SegmentError::without_index(SegmentErrorKind::Encode(err.to_string()))
    })
}

/// Parse segments from JSON and validate them.
pub fn from_json(input: &str) -> Result<Vec<Segment>, SegmentError> {
    let segments: Vec<Segment> = facet_json::from_str(input).map_err(|err| {
        debug!(%err, "rejecting diff JSON");
        SegmentError::without_index(SegmentErrorKind::Decode(err.to_string()))
    })?;
    validate(&segments)?;
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentKind;

    #[test]
    fn test_validate_rejects_empty_value() {
        let segments = vec![Segment::unchanged("a"), Segment::added("")];
        let err = validate(&segments).unwrap_err();
        assert_eq!(err.kind, SegmentErrorKind::EmptyValue);
        assert_eq!(err.index, Some(1));
    }

    #[test]
    fn test_validate_rejects_split_run() {
        let segments = vec![
            Segment::removed("a"),
            Segment::added("b"),
            Segment::added("c"),
        ];
        let err = validate(&segments).unwrap_err();
        assert_eq!(
            err.kind,
            SegmentErrorKind::AdjacentSameKind(SegmentKind::Added)
        );
        assert_eq!(err.index, Some(2));
        assert_eq!(
            err.to_string(),
            "segment 2: follows another `added` segment; runs must be merged"
        );
    }

    #[test]
    fn test_validate_accepts_empty_result() {
        assert!(validate(&[]).is_ok());
    }
}
