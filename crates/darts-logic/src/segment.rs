//! Board-segment label parsing
//!
//! The scoring core trusts the face values it is handed; this helper is
//! for input layers that work in segment labels ("T20", "D16", "25",
//! "Bull") and need the matching point value. The core itself never
//! calls it.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("empty segment label")]
    Empty,
    #[error("unknown segment label `{0}`")]
    Unknown(String),
    #[error("segment number {0} out of range 1-20")]
    OutOfRange(u16),
}

/// Face value of a board segment label.
///
/// Accepted forms: `S1`-`S20` (singles), `D1`-`D20` (doubles),
/// `T1`-`T20` (trebles), `25` (outer bull), `50`/`Bull`/`D25` (bull,
/// which counts as a double), and `0`/`Miss`.
pub fn segment_points(label: &str) -> Result<u16, SegmentError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(SegmentError::Empty);
    }

    match label {
        "25" => return Ok(25),
        "50" | "Bull" | "D25" => return Ok(50),
        "0" | "Miss" => return Ok(0),
        _ => {}
    }

    let (multiplier, rest) = match label.as_bytes()[0] {
        b'S' => (1, &label[1..]),
        b'D' => (2, &label[1..]),
        b'T' => (3, &label[1..]),
        _ => return Err(SegmentError::Unknown(label.to_string())),
    };

    let number: u16 = rest
        .parse()
        .map_err(|_| SegmentError::Unknown(label.to_string()))?;
    if !(1..=20).contains(&number) {
        return Err(SegmentError::OutOfRange(number));
    }

    Ok(multiplier * number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singles_doubles_trebles() {
        assert_eq!(segment_points("S1"), Ok(1));
        assert_eq!(segment_points("S20"), Ok(20));
        assert_eq!(segment_points("D16"), Ok(32));
        assert_eq!(segment_points("D20"), Ok(40));
        assert_eq!(segment_points("T19"), Ok(57));
        assert_eq!(segment_points("T20"), Ok(60));
    }

    #[test]
    fn test_bulls_and_miss() {
        assert_eq!(segment_points("25"), Ok(25));
        assert_eq!(segment_points("50"), Ok(50));
        assert_eq!(segment_points("Bull"), Ok(50));
        assert_eq!(segment_points("D25"), Ok(50));
        assert_eq!(segment_points("0"), Ok(0));
        assert_eq!(segment_points("Miss"), Ok(0));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(segment_points(" T20 "), Ok(60));
    }

    #[test]
    fn test_rejects_malformed_labels() {
        assert_eq!(segment_points(""), Err(SegmentError::Empty));
        assert_eq!(segment_points("   "), Err(SegmentError::Empty));
        assert_eq!(
            segment_points("X5"),
            Err(SegmentError::Unknown("X5".to_string()))
        );
        assert_eq!(
            segment_points("d20"),
            Err(SegmentError::Unknown("d20".to_string()))
        );
        assert_eq!(
            segment_points("D"),
            Err(SegmentError::Unknown("D".to_string()))
        );
        assert_eq!(segment_points("T0"), Err(SegmentError::OutOfRange(0)));
        assert_eq!(segment_points("D21"), Err(SegmentError::OutOfRange(21)));
    }

    #[test]
    fn test_error_display() {
        let err = segment_points("D21").unwrap_err();
        assert_eq!(err.to_string(), "segment number 21 out of range 1-20");
    }
}
