//! Day-boundary time convention normalization.
//!
//! Daily precipitation products disagree on when a "day" starts: a gauge
//! logger may accumulate 00:00–24:00 while a gridded reanalysis uses a
//! 09:00–09:00 accumulation window for the same nominal date. Before two such
//! series can be joined on time, their timestamps must agree on an
//! hour-of-day.
//!
//! [`to_hour_base`] performs a pure label rewrite: every timestamp keeps its
//! date component and has its time-of-day replaced by a fixed hour. It never
//! re-attributes a value to an adjacent day, so it assumes the date component
//! already encodes the intended attribution. If a source's cutover hour
//! actually implies the value belongs to the neighbouring date, this rewrite
//! is not sufficient and the series must be date-shifted upstream.

pub mod error;

pub use error::TimebaseError;

use chrono::NaiveDateTime;

/// Rewrites every timestamp to (same date, `hour`:00:00).
///
/// The operation is idempotent: normalizing an already-normalized sequence to
/// the same hour returns the sequence unchanged.
///
/// # Errors
///
/// Returns [`TimebaseError::InvalidHour`] if `hour` is not in `0..=23`.
pub fn to_hour_base(times: &[NaiveDateTime], hour: u32) -> Result<Vec<NaiveDateTime>, TimebaseError> {
    if hour > 23 {
        return Err(TimebaseError::InvalidHour { hour });
    }

    let rebased = times
        .iter()
        .map(|t| {
            t.date()
                .and_hms_opt(hour, 0, 0)
                .expect("hour validated to be in 0..=23")
        })
        .collect();

    Ok(rebased)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn rewrites_hour_and_zeroes_minutes_seconds() {
        let times = vec![dt(2020, 5, 1, 0, 0, 0), dt(2020, 5, 2, 14, 37, 59)];
        let out = to_hour_base(&times, 9).unwrap();
        assert_eq!(out, vec![dt(2020, 5, 1, 9, 0, 0), dt(2020, 5, 2, 9, 0, 0)]);
    }

    #[test]
    fn preserves_date_component() {
        // A 23:59 timestamp stays on its own date; no spill to the next day.
        let times = vec![dt(2021, 12, 31, 23, 59, 59)];
        let out = to_hour_base(&times, 9).unwrap();
        assert_eq!(out, vec![dt(2021, 12, 31, 9, 0, 0)]);
    }

    #[test]
    fn idempotent() {
        let times = vec![
            dt(2020, 1, 1, 3, 15, 0),
            dt(2020, 1, 2, 21, 0, 30),
            dt(2020, 2, 29, 12, 0, 0), // leap day
        ];
        let once = to_hour_base(&times, 9).unwrap();
        let twice = to_hour_base(&once, 9).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn hour_zero_is_valid() {
        let times = vec![dt(2020, 5, 1, 9, 0, 0)];
        let out = to_hour_base(&times, 0).unwrap();
        assert_eq!(out, vec![dt(2020, 5, 1, 0, 0, 0)]);
    }

    #[test]
    fn hour_23_is_valid() {
        let times = vec![dt(2020, 5, 1, 9, 0, 0)];
        let out = to_hour_base(&times, 23).unwrap();
        assert_eq!(out, vec![dt(2020, 5, 1, 23, 0, 0)]);
    }

    #[test]
    fn hour_24_is_rejected() {
        let times = vec![dt(2020, 5, 1, 9, 0, 0)];
        assert_eq!(
            to_hour_base(&times, 24).unwrap_err(),
            TimebaseError::InvalidHour { hour: 24 }
        );
    }

    #[test]
    fn empty_input() {
        let out = to_hour_base(&[], 9).unwrap();
        assert!(out.is_empty());
    }
}
