//! Relational join kind selection.

use std::str::FromStr;

use crate::error::SeriesError;

/// Relational join kind, with time as the join key.
///
/// Duplicate join keys on either side fan out: every matching pair of rows
/// produces an output row, following standard relational semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinKind {
    /// Keep only timestamps present on both sides.
    Inner,
    /// Keep every left row; unmatched right cells become `None`.
    #[default]
    Left,
    /// Keep every right row; unmatched left cells become `None`.
    Right,
    /// Keep every timestamp from either side.
    Outer,
}

impl FromStr for JoinKind {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inner" => Ok(JoinKind::Inner),
            "left" => Ok(JoinKind::Left),
            "right" => Ok(JoinKind::Right),
            "outer" => Ok(JoinKind::Outer),
            other => Err(SeriesError::UnknownJoinKind {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_kinds() {
        assert_eq!("inner".parse::<JoinKind>().unwrap(), JoinKind::Inner);
        assert_eq!("left".parse::<JoinKind>().unwrap(), JoinKind::Left);
        assert_eq!("right".parse::<JoinKind>().unwrap(), JoinKind::Right);
        assert_eq!("outer".parse::<JoinKind>().unwrap(), JoinKind::Outer);
    }

    #[test]
    fn parse_unknown_kind() {
        let err = "cross".parse::<JoinKind>().unwrap_err();
        assert_eq!(
            err,
            SeriesError::UnknownJoinKind {
                name: "cross".to_string()
            }
        );
    }

    #[test]
    fn default_is_left() {
        assert_eq!(JoinKind::default(), JoinKind::Left);
    }
}
