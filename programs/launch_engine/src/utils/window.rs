//! Day and sell-window arithmetic on unix timestamps (UTC days).
//! Each launch day has two windows, `HALF_DAY` apart.

use crate::consts::{HALF_DAY, SECONDS_PER_DAY, WINDOW_DURATION, WINDOW_OFFSET};

/// Where `now` sits relative to a day's `[start, end)` sell windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowPhase {
    BeforeWindow,
    InWindow,
    AfterWindow,
}

/// `[start, end)` bounds of one sell window.
pub type Window = (i64, i64);

pub fn phase(now: i64, start: i64, end: i64) -> WindowPhase {
    if now < start {
        WindowPhase::BeforeWindow
    } else if now < end {
        WindowPhase::InWindow
    } else {
        WindowPhase::AfterWindow
    }
}

/// Phase across several windows: open if any window holds `now`,
/// before if some window is still ahead, after otherwise.
pub fn phase_of(now: i64, windows: &[Window]) -> WindowPhase {
    let mut ahead = false;
    for &(start, end) in windows {
        match phase(now, start, end) {
            WindowPhase::InWindow => return WindowPhase::InWindow,
            WindowPhase::BeforeWindow => ahead = true,
            WindowPhase::AfterWindow => {}
        }
    }
    if ahead {
        WindowPhase::BeforeWindow
    } else {
        WindowPhase::AfterWindow
    }
}

/// Index of the UTC day containing `ts`.
#[inline]
pub fn day_index(ts: i64) -> i64 {
    ts.div_euclid(SECONDS_PER_DAY)
}

/// 00:00 UTC of the day containing `ts`.
#[inline]
pub fn day_start(ts: i64) -> i64 {
    ts - ts.rem_euclid(SECONDS_PER_DAY)
}

/// The two fixed daily windows for the day containing `now`.
pub fn scheduled_windows(now: i64) -> [Window; 2] {
    let first = day_start(now) + WINDOW_OFFSET;
    let second = first + HALF_DAY;
    [
        (first, first + WINDOW_DURATION),
        (second, second + WINDOW_DURATION),
    ]
}

/// True once `now` falls on a later day than the current first window.
pub fn crossed_day_boundary(window_start: i64, now: i64) -> bool {
    day_index(now) > day_index(window_start)
}
