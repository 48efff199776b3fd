//! Mock appointment slots. There is no scheduling backend; a slot is simply
//! "now" plus a random number of whole hours.

use chrono::{DateTime, Duration, Local, TimeZone};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Display format, e.g. `Monday, 05 Jan 2026 at 03:00 PM`.
pub const SLOT_FORMAT: &str = "%A, %d %b %Y at %I:%M %p";

/// Furthest a mock slot may be scheduled: one year.
pub const MAX_HOURS_AHEAD: u32 = 24 * 365;

/// Inclusive range of hours ahead a mock slot may fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    #[serde(default = "BookingWindow::default_min_hours")]
    pub min_hours_ahead: u32,
    #[serde(default = "BookingWindow::default_max_hours")]
    pub max_hours_ahead: u32,
}

impl BookingWindow {
    const fn default_min_hours() -> u32 {
        3
    }

    const fn default_max_hours() -> u32 {
        48
    }

    pub fn new(min_hours_ahead: u32, max_hours_ahead: u32) -> crate::Result<Self> {
        if min_hours_ahead > max_hours_ahead || max_hours_ahead > MAX_HOURS_AHEAD {
            return Err(Error::BookingWindow {
                min: min_hours_ahead,
                max: max_hours_ahead,
            });
        }
        Ok(Self {
            min_hours_ahead,
            max_hours_ahead,
        })
    }

    /// Reject windows deserialized with `min > max` or reaching past [`MAX_HOURS_AHEAD`].
    pub fn validate(self) -> crate::Result<Self> {
        Self::new(self.min_hours_ahead, self.max_hours_ahead)
    }

    /// Pick a number of hours ahead within the window.
    pub fn pick_hours<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min_hours_ahead..=self.max_hours_ahead)
    }
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self {
            min_hours_ahead: Self::default_min_hours(),
            max_hours_ahead: Self::default_max_hours(),
        }
    }
}

/// Format the slot `hours` after `now`; `None` if that is past chrono's range.
#[must_use]
pub fn slot_after<Tz>(now: &DateTime<Tz>, hours: u32) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let offset = Duration::try_hours(i64::from(hours))?;
    let slot = now.clone().checked_add_signed(offset)?;
    Some(slot.format(SLOT_FORMAT).to_string())
}

/// A random slot within `window`, relative to the local clock.
pub fn next_slot(window: &BookingWindow) -> crate::Result<String> {
    let hours = window.pick_hours(&mut rand::thread_rng());
    slot_after(&Local::now(), hours).ok_or(Error::SlotOutOfRange(hours))
}
