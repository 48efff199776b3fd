//! Per-session UI state.
//!
//! The front-end owns one [`SessionState`] and feeds it [`Event`]s; every
//! transition consumes the old state and returns the next one.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which of the four flows is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Nothing selected yet.
    #[default]
    Home,
    Book,
    Symptom,
    Meds,
    Tips,
}

impl Screen {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Book => "Book Appointment",
            Self::Symptom => "Symptom Check",
            Self::Meds => "Order Medicines",
            Self::Tips => "Health Tips",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    Cardiologist,
    Dermatologist,
    Neurologist,
    Physician,
}

impl Specialty {
    pub const ALL: [Self; 4] = [
        Self::Cardiologist,
        Self::Dermatologist,
        Self::Neurologist,
        Self::Physician,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardiologist => "Cardiologist",
            Self::Dermatologist => "Dermatologist",
            Self::Neurologist => "Neurologist",
            Self::Physician => "Physician",
        }
    }

    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Cardiologist => "❤️",
            Self::Dermatologist => "🧴",
            Self::Neurologist => "🧠",
            Self::Physician => "🩺",
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Specialty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(index) = wanted.parse::<usize>() {
            if let Some(specialty) = index.checked_sub(1).and_then(|i| Self::ALL.get(i)) {
                return Ok(*specialty);
            }
        }
        Self::ALL
            .into_iter()
            .find(|specialty| specialty.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownSpecialty(wanted.to_string()))
    }
}

/// User actions that change the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenBook,
    OpenSymptom,
    OpenMeds,
    OpenTips,
    ChooseSpecialty(Specialty),
    /// The "book an appointment" offer shown after a symptom check.
    BookFromSymptom,
}

impl Event {
    /// Map a main menu entry ("1".."4" or a flow name) to its event.
    #[must_use]
    pub fn from_menu(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "book" | "appointment" => Some(Self::OpenBook),
            "2" | "symptom" | "symptoms" => Some(Self::OpenSymptom),
            "3" | "meds" | "medicines" => Some(Self::OpenMeds),
            "4" | "tips" => Some(Self::OpenTips),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub screen: Screen,
    pub specialty: Option<Specialty>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    #[must_use]
    pub const fn apply(self, event: Event) -> Self {
        match event {
            Event::OpenBook => Self {
                screen: Screen::Book,
                specialty: None,
            },
            Event::OpenSymptom => self.with_screen(Screen::Symptom),
            Event::OpenMeds => self.with_screen(Screen::Meds),
            Event::OpenTips => self.with_screen(Screen::Tips),
            Event::BookFromSymptom => self.with_screen(Screen::Book),
            Event::ChooseSpecialty(specialty) => match self.screen {
                Screen::Book => Self {
                    screen: Screen::Book,
                    specialty: Some(specialty),
                },
                _ => self,
            },
        }
    }

    const fn with_screen(self, screen: Screen) -> Self {
        Self {
            screen,
            specialty: self.specialty,
        }
    }
}
