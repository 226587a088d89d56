//! Form state for the modal dialogs.
//!
//! One [`FormState`] serves every form dialog; the registry configures which
//! fields are active for the open dialog. Validation runs locally before a
//! mutation is built; a validation error never reaches the network and is
//! surfaced inline next to the offending field.

use crate::constants::{
    VALIDATION_FECHA_FUTURE, VALIDATION_FECHA_INVALID, VALIDATION_FECHA_REQUIRED,
    VALIDATION_FECHA_TOO_OLD, VALIDATION_MIN_LENGTH, VALIDATION_REQUIRED,
};
use crate::utils::datetime;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Identity of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Descripcion,
    Fecha,
}

impl FieldId {
    /// Spanish label, as rendered above the input.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Título",
            FieldId::Descripcion => "Descripción",
            FieldId::Fecha => "Fecha (AAAA-MM-DD)",
        }
    }
}

/// A single text input with cursor, counted in characters.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub buffer: String,
    pub cursor: usize,
}

impl InputField {
    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn byte_pos(&self) -> usize {
        self.buffer.chars().take(self.cursor).map(|ch| ch.len_utf8()).sum()
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_pos();
        self.buffer.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_pos = self.byte_pos();
            let prev_len = self
                .buffer
                .chars()
                .nth(self.cursor - 1)
                .map(|ch| ch.len_utf8())
                .unwrap_or(1);
            self.buffer.remove(byte_pos - prev_len);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let byte_pos = self.byte_pos();
            self.buffer.remove(byte_pos);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }
}

/// Validate a required text field: non-empty and at least 2 characters.
pub fn validate_text(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(VALIDATION_REQUIRED)
    } else if trimmed.chars().count() < 2 {
        Some(VALIDATION_MIN_LENGTH)
    } else {
        None
    }
}

/// Validate the date field: required, well-formed, and inside
/// `[1900-01-01, today]` with both endpoints accepted.
pub fn validate_fecha(value: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(VALIDATION_FECHA_REQUIRED);
    }
    let fecha = datetime::parse_date(trimmed).map_err(|_| VALIDATION_FECHA_INVALID)?;
    if fecha > today {
        return Err(VALIDATION_FECHA_FUTURE);
    }
    if fecha < datetime::fecha_minima() {
        return Err(VALIDATION_FECHA_TOO_OLD);
    }
    Ok(fecha)
}

/// State of the form inside the open dialog.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: InputField,
    pub descripcion: InputField,
    pub fecha: InputField,
    /// Active fields for the open dialog, in focus order.
    fields: Vec<FieldId>,
    focus: usize,
    pub errors: HashMap<FieldId, &'static str>,
    /// Set while a mutation built from this form is in flight. While set,
    /// submit and cancel are no-ops.
    pub submitting: bool,
}

impl FormState {
    pub fn for_fields(fields: Vec<FieldId>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &[FieldId] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &InputField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Descripcion => &self.descripcion,
            FieldId::Fecha => &self.fecha,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut InputField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Descripcion => &mut self.descripcion,
            FieldId::Fecha => &mut self.fecha,
        }
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.fields.get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn error(&self, id: FieldId) -> Option<&'static str> {
        self.errors.get(&id).copied()
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.descripcion.clear();
        self.fecha.clear();
        self.fields.clear();
        self.focus = 0;
        self.errors.clear();
        self.submitting = false;
    }

    /// Validate every active field, recording inline errors. Returns whether
    /// the form may be submitted.
    pub fn validate(&mut self, today: NaiveDate) -> bool {
        self.errors.clear();

        for id in self.fields.clone() {
            match id {
                FieldId::Name | FieldId::Descripcion => {
                    if let Some(error) = validate_text(&self.field(id).buffer) {
                        self.errors.insert(id, error);
                    }
                }
                FieldId::Fecha => {
                    if let Err(error) = validate_fecha(&self.fecha.buffer, today) {
                        self.errors.insert(id, error);
                    }
                }
            }
        }

        self.errors.is_empty()
    }

    /// The validated date value. Only meaningful after `validate` passed.
    pub fn fecha_value(&self) -> Option<NaiveDate> {
        datetime::parse_date(self.fecha.buffer.trim()).ok()
    }
}
