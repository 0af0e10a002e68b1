//! The registration form value bag and its navigation state

use super::field::FormField;
use crate::schema::{FieldId, RegistrationValues};

/// Index of the Clear/Submit row, one past the last input field
pub const BUTTONS_ROW: usize = FieldId::ALL.len();

/// Buttons on the action row, left to right
pub const BUTTONS: [&str; 2] = ["Clear", "Submit"];

/// In-memory state of the registration form.
///
/// Holds one field per [`FieldId`] plus the cursor position. Owns the
/// current values exclusively; validation reads a snapshot via
/// [`RegisterForm::values`].
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub address: FormField,
    pub date_of_birth: FormField,
    pub password: FormField,
    pub subscribe: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Clear, 1=Submit)
    pub selected_button: usize,
}

impl RegisterForm {
    pub fn new(subscribe_default: bool) -> Self {
        Self {
            name: FormField::text(FieldId::Name),
            email: FormField::text(FieldId::Email),
            phone: FormField::text(FieldId::Phone),
            address: FormField::text(FieldId::Address),
            date_of_birth: FormField::text(FieldId::DateOfBirth),
            password: FormField::password(FieldId::Password),
            subscribe: FormField::toggle(FieldId::Subscribe, subscribe_default),
            active_field_index: 0,
            selected_button: 1, // Default to "Submit" button
        }
    }

    /// Input fields plus the buttons row
    pub fn field_count(&self) -> usize {
        BUTTONS_ROW + 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTONS.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTONS.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn get(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Address => &self.address,
            FieldId::DateOfBirth => &self.date_of_birth,
            FieldId::Password => &self.password,
            FieldId::Subscribe => &self.subscribe,
        }
    }

    pub fn get_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Address => &mut self.address,
            FieldId::DateOfBirth => &mut self.date_of_birth,
            FieldId::Password => &mut self.password,
            FieldId::Subscribe => &mut self.subscribe,
        }
    }

    /// Field at a cursor position, `None` for the buttons row
    pub fn field_at(&self, index: usize) -> Option<&FormField> {
        FieldId::ALL.get(index).map(|id| self.get(*id))
    }

    /// The field under the cursor, `None` on the buttons row
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        FieldId::ALL
            .get(self.active_field_index)
            .copied()
            .map(|id| self.get_mut(id))
    }

    /// Overwrite one field's raw text, touching nothing else
    #[allow(dead_code)]
    pub fn set_value(&mut self, id: FieldId, raw: &str) {
        self.get_mut(id).set_text(raw.to_string());
    }

    #[allow(dead_code)]
    pub fn set_subscribe(&mut self, on: bool) {
        self.subscribe.set_on(on);
    }

    /// Snapshot of the current values for validation
    pub fn values(&self) -> RegistrationValues {
        RegistrationValues {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            address: self.address.as_text().to_string(),
            date_of_birth: self.date_of_birth.as_text().to_string(),
            password: self.password.as_text().to_string(),
            subscribe: self.subscribe.is_on(),
        }
    }

    /// Reset every field and the cursor
    pub fn clear(&mut self, subscribe_default: bool) {
        for id in FieldId::ALL {
            self.get_mut(id).clear();
        }
        self.subscribe.set_on(subscribe_default);
        self.active_field_index = 0;
        self.selected_button = 1;
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new(false)
    }
}
