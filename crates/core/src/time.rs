//! Wall-clock readers in local time.
//!
//! Elapsed time since a sketch started lives on its clock
//! (`Canvas::millis`), not here.

use chrono::{Datelike, Local, Timelike};

/// Current second, `0..=59`.
pub fn second() -> u32 {
    Local::now().second()
}

/// Current minute, `0..=59`.
pub fn minute() -> u32 {
    Local::now().minute()
}

/// Current hour, `0..=23`.
pub fn hour() -> u32 {
    Local::now().hour()
}

/// Current day of the month, `1..=31`.
pub fn day() -> u32 {
    Local::now().day()
}

/// Current month, `1..=12`.
pub fn month() -> u32 {
    Local::now().month()
}

/// Current year, e.g. `2026`.
pub fn year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert!(second() <= 60); // leap second
        assert!(minute() < 60);
        assert!(hour() < 24);
        assert!((1..=31).contains(&day()));
        assert!((1..=12).contains(&month()));
        assert!(year() >= 2020);
    }
}
