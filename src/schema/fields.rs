//! Field identities and the registration value bag

use chrono::NaiveDate;
use std::fmt;

/// Identifies one field of the registration form.
///
/// Declaration order is validation and rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Address,
    DateOfBirth,
    Password,
    Subscribe,
}

impl FieldId {
    /// All fields, in declaration order
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::DateOfBirth,
        FieldId::Password,
        FieldId::Subscribe,
    ];

    /// Stable wire name for the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::DateOfBirth => "date_of_birth",
            Self::Password => "password",
            Self::Subscribe => "subscribe",
        }
    }

    /// Label shown next to the input box
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Address => "Address",
            Self::DateOfBirth => "Date of Birth (YYYY-MM-DD)",
            Self::Password => "Password",
            Self::Subscribe => "Newsletter",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value bag as typed into the form.
///
/// Everything is text except the newsletter checkbox; the date of birth
/// stays unparsed until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    pub password: String,
    pub subscribe: bool,
}

impl RegistrationValues {
    /// Raw text of a field, `None` for the checkbox
    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => Some(&self.name),
            FieldId::Email => Some(&self.email),
            FieldId::Phone => Some(&self.phone),
            FieldId::Address => Some(&self.address),
            FieldId::DateOfBirth => Some(&self.date_of_birth),
            FieldId::Password => Some(&self.password),
            FieldId::Subscribe => None,
        }
    }

    /// Mutable raw text of a field, `None` for the checkbox
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::Address => Some(&mut self.address),
            FieldId::DateOfBirth => Some(&mut self.date_of_birth),
            FieldId::Password => Some(&mut self.password),
            FieldId::Subscribe => None,
        }
    }
}

/// A value bag that passed every constraint.
///
/// Email and phone are trimmed, the date of birth is parsed. Produced
/// only by [`crate::schema::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub password: String,
    pub subscribe: bool,
}
