//! Form field value objects

use crate::schema::FieldId;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form field with its identity and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: FieldValue,
    /// Render the value as mask characters (password entry)
    pub masked: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Text(String::new()),
            masked: false,
        }
    }

    /// Create a new masked text field
    pub fn password(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Text(String::new()),
            masked: true,
        }
    }

    /// Create a new checkbox field
    pub fn toggle(id: FieldId, on: bool) -> Self {
        Self {
            id,
            value: FieldValue::Toggle(on),
            masked: false,
        }
    }

    /// Label shown in the field border
    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// Get the text value (returns empty string for checkbox fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Toggle(_) => "",
        }
    }

    /// Get the checkbox state (returns false for text fields)
    pub fn is_on(&self) -> bool {
        match &self.value {
            FieldValue::Toggle(on) => *on,
            FieldValue::Text(_) => false,
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(_))
    }

    /// Overwrite the text value (no-op for checkbox fields)
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value;
        }
    }

    /// Overwrite the checkbox state (no-op for text fields)
    pub fn set_on(&mut self, on: bool) {
        if let FieldValue::Toggle(current) = &mut self.value {
            *current = on;
        }
    }

    /// Push a character to the field value.
    ///
    /// Space flips a checkbox; other characters only affect text fields.
    /// Returns true if the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Toggle(on) => {
                if c == ' ' {
                    *on = !*on;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Remove the last character from the field value.
    ///
    /// Returns true if the value changed.
    pub fn pop_char(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => s.pop().is_some(),
            FieldValue::Toggle(_) => false,
        }
    }

    /// Reset the field to its empty/off state
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Toggle(on) => *on = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.masked => "•".repeat(s.chars().count()),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Toggle(true) => "[x] Yes, subscribe me".to_string(),
            FieldValue::Toggle(false) => "[ ] Yes, subscribe me".to_string(),
        }
    }
}
