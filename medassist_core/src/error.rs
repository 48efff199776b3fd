use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required free-text field was blank. The message is shown to the user as is.
    #[error("Please enter a {0}.")]
    EmptyInput(&'static str),

    #[error("Unknown speciality: {0}")]
    UnknownSpecialty(String),

    #[error("Invalid booking window: {min}..={max} hours")]
    BookingWindow { min: u32, max: u32 },

    #[error("Invalid max_advice: {0} (expected 1..={max})", max = crate::rules::DEFAULT_MAX_ITEMS)]
    MaxAdvice(usize),

    #[error("No slot {0} hours ahead of now")]
    SlotOutOfRange(u32),
}

impl Error {
    /// Whether this error is an input warning rather than a real failure.
    #[must_use]
    pub const fn is_input_warning(&self) -> bool {
        matches!(self, Self::EmptyInput(_))
    }
}
