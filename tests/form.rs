use campo::constants::{
    VALIDATION_FECHA_FUTURE, VALIDATION_FECHA_INVALID, VALIDATION_FECHA_REQUIRED,
    VALIDATION_FECHA_TOO_OLD, VALIDATION_MIN_LENGTH, VALIDATION_REQUIRED,
};
use campo::ui::core::form::{validate_fecha, validate_text, FieldId, FormState, InputField};
use campo::utils::datetime;
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn text_validation_requires_two_characters() {
    assert_eq!(validate_text(""), Some(VALIDATION_REQUIRED));
    assert_eq!(validate_text("   "), Some(VALIDATION_REQUIRED));
    assert_eq!(validate_text("a"), Some(VALIDATION_MIN_LENGTH));
    assert_eq!(validate_text("ab"), None);
    assert_eq!(validate_text("Visita barrio"), None);
}

#[test]
fn fecha_validation_rejects_future_dates() {
    let today = ymd(2024, 5, 1);
    assert_eq!(validate_fecha("2024-05-02", today), Err(VALIDATION_FECHA_FUTURE));
    // "now" itself is accepted, the boundary is inclusive.
    assert_eq!(validate_fecha("2024-05-01", today), Ok(today));
}

#[test]
fn fecha_validation_rejects_dates_before_the_floor() {
    let today = ymd(2024, 5, 1);
    assert_eq!(validate_fecha("1899-12-31", today), Err(VALIDATION_FECHA_TOO_OLD));
    // The floor itself is accepted.
    assert_eq!(validate_fecha("1900-01-01", today), Ok(datetime::fecha_minima()));
}

#[test]
fn fecha_validation_requires_a_well_formed_date() {
    let today = ymd(2024, 5, 1);
    assert_eq!(validate_fecha("", today), Err(VALIDATION_FECHA_REQUIRED));
    assert_eq!(validate_fecha("ayer", today), Err(VALIDATION_FECHA_INVALID));
    assert_eq!(validate_fecha("2024-13-01", today), Err(VALIDATION_FECHA_INVALID));
}

#[test]
fn form_validation_records_inline_errors_per_field() {
    let mut form = FormState::for_fields(vec![FieldId::Name, FieldId::Descripcion, FieldId::Fecha]);

    assert!(!form.validate(ymd(2024, 5, 1)));
    assert_eq!(form.error(FieldId::Name), Some(VALIDATION_REQUIRED));
    assert_eq!(form.error(FieldId::Descripcion), Some(VALIDATION_REQUIRED));
    assert_eq!(form.error(FieldId::Fecha), Some(VALIDATION_FECHA_REQUIRED));

    form.name.set("Visita barrio");
    form.descripcion.set("Fue bien");
    form.fecha.set("2024-05-01");

    assert!(form.validate(ymd(2024, 5, 1)));
    assert!(form.errors.is_empty());
    assert_eq!(form.fecha_value(), Some(ymd(2024, 5, 1)));
}

#[test]
fn focus_cycles_through_active_fields() {
    let mut form = FormState::for_fields(vec![FieldId::Name, FieldId::Fecha]);
    assert_eq!(form.focused(), Some(FieldId::Name));
    form.focus_next();
    assert_eq!(form.focused(), Some(FieldId::Fecha));
    form.focus_next();
    assert_eq!(form.focused(), Some(FieldId::Name));
}

#[test]
fn input_field_edits_by_character() {
    let mut field = InputField::default();
    for c in "añbo".chars() {
        field.insert_char(c);
    }
    assert_eq!(field.buffer, "añbo");
    assert_eq!(field.cursor, 4);

    field.backspace();
    assert_eq!(field.buffer, "añb");

    field.left();
    field.left();
    field.delete();
    assert_eq!(field.buffer, "ab");

    field.insert_char('x');
    assert_eq!(field.buffer, "axb");
}
