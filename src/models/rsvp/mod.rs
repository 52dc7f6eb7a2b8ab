// RSVP module
// Guest reply model mirroring the wedding-rsvp form

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hidden form identifier expected by the form-submission backend
pub const RSVP_FORM_NAME: &str = "wedding-rsvp";

/// Validation errors for guest replies
#[derive(Debug, Error, PartialEq)]
pub enum RsvpError {
    #[error("Guest name cannot be empty")]
    EmptyGuestName,
    #[error("Email address is not valid: {0}")]
    InvalidEmail(String),
    #[error("Plus-one name cannot be empty when a plus-one is added")]
    EmptyPlusOneName,
}

/// Whether the guest is attending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attendance {
    Yes,
    No,
}

impl Attendance {
    fn as_form_value(self) -> &'static str {
        match self {
            Attendance::Yes => "yes",
            Attendance::No => "no",
        }
    }
}

/// An extra guest, only available once a promo code has been verified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlusOne {
    pub name: String,
    pub meal_preference: Option<String>,
}

/// One guest's reply to the RSVP form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rsvp {
    pub guest_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub attendance: Attendance,
    pub meal_preference: Option<String>,
    /// Set only after the promo gate has been opened for this guest
    pub plus_one: Option<PlusOne>,
    pub dietary_restrictions: Option<String>,
    pub song_request: Option<String>,
    pub message: Option<String>,
}

impl Rsvp {
    /// Create a reply with the required fields
    ///
    /// # Arguments
    /// * `guest_name` - Guest name (required, non-empty)
    /// * `email` - Contact email (required, must contain a local part and domain)
    /// * `attendance` - Whether the guest is attending
    pub fn new(
        guest_name: impl Into<String>,
        email: impl Into<String>,
        attendance: Attendance,
    ) -> Result<Self, RsvpError> {
        let guest_name = guest_name.into();
        let email = email.into();

        if guest_name.trim().is_empty() {
            return Err(RsvpError::EmptyGuestName);
        }

        // Light-touch check; the form backend does its own verification
        let mut parts = email.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(RsvpError::InvalidEmail(email));
        }

        Ok(Self {
            guest_name,
            email,
            phone: None,
            attendance,
            meal_preference: None,
            plus_one: None,
            dietary_restrictions: None,
            song_request: None,
            message: None,
        })
    }

    /// Attach a plus-one; call only after the promo code has been verified
    pub fn add_plus_one(
        &mut self,
        name: impl Into<String>,
        meal_preference: Option<String>,
    ) -> Result<(), RsvpError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RsvpError::EmptyPlusOneName);
        }
        self.plus_one = Some(PlusOne {
            name,
            meal_preference,
        });
        Ok(())
    }

    /// Flatten the reply into the form field pairs the backend expects,
    /// in the order the form lays them out
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("form-name", RSVP_FORM_NAME.to_string()),
            ("guestName", self.guest_name.clone()),
            ("email", self.email.clone()),
        ];

        if let Some(ref phone) = self.phone {
            fields.push(("phone", phone.clone()));
        }

        fields.push(("attendance", self.attendance.as_form_value().to_string()));

        if let Some(ref meal) = self.meal_preference {
            fields.push(("mealPreference", meal.clone()));
        }

        if let Some(ref plus_one) = self.plus_one {
            fields.push(("plusOneIntent", "yes".to_string()));
            fields.push(("plusOneName", plus_one.name.clone()));
            if let Some(ref meal) = plus_one.meal_preference {
                fields.push(("plusOneMeal", meal.clone()));
            }
            fields.push(("plusOne", "yes".to_string()));
        }

        if let Some(ref dietary) = self.dietary_restrictions {
            fields.push(("dietaryRestrictions", dietary.clone()));
        }
        if let Some(ref song) = self.song_request {
            fields.push(("songRequest", song.clone()));
        }
        if let Some(ref message) = self.message {
            fields.push(("message", message.clone()));
        }

        fields
    }
}
