//! Word segmentation boundary
//!
//! Vietnamese word segmentation is an external capability; the engine
//! only depends on this trait. Compound words may come back joined
//! with `_` ("Hà_Nội"); the engine expands the marker to a space
//! before classification.

use crate::error::SegmentError;

/// A word segmenter for one line of rewritten text.
pub trait Segment: Send + Sync {
    /// Splits a line into word tokens. Failures surface as
    /// [`NormalizeError::ExternalService`](crate::NormalizeError::ExternalService);
    /// the engine never guesses around a broken segmenter.
    fn segment(&self, line: &str) -> Result<Vec<String>, SegmentError>;
}

/// Default segmenter: whitespace splitting. The rewrite cascade and
/// the preprocessor space-pad everything this needs to separate.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl Segment for WhitespaceSegmenter {
    fn segment(&self, line: &str) -> Result<Vec<String>, SegmentError> {
        Ok(line.split_whitespace().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_segmentation() {
        let tokens = WhitespaceSegmenter.segment("một  hai\tba").unwrap();
        assert_eq!(tokens, vec!["một", "hai", "ba"]);
    }

    #[test]
    fn failing_segmenter_propagates() {
        struct Broken;
        impl Segment for Broken {
            fn segment(&self, _line: &str) -> Result<Vec<String>, SegmentError> {
                Err(SegmentError("service unavailable".to_string()))
            }
        }
        let err = Broken.segment("bất kỳ").unwrap_err();
        assert_eq!(err.to_string(), "service unavailable");
    }
}
