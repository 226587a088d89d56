use campo::constants::{VALIDATION_FECHA_FUTURE, VALIDATION_REQUIRED};
use campo::models::{Grupo, Informe, Misionero, Salida};
use campo::ui::components::DialogComponent;
use campo::ui::core::actions::{Action, DialogKind, DialogType, ResourceKind};
use campo::ui::core::form::FieldId;
use campo::ui::core::route::ParamValue;
use campo::ui::core::Component;
use campo::utils::datetime;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        let _ = dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_dialog(kind: DialogKind) -> DialogType {
    let grupo = Grupo {
        id: "G1".to_string(),
        name: "Grupo Norte".to_string(),
    };
    match kind {
        DialogKind::CreateGrupo => DialogType::CreateGrupo,
        DialogKind::EditGrupo => DialogType::EditGrupo { grupo },
        DialogKind::CreateMisionero => DialogType::CreateMisionero {
            grupo_id: Some(ParamValue::Single("G1".to_string())),
        },
        DialogKind::EditMisionero => DialogType::EditMisionero {
            misionero: Misionero {
                id: "M1".to_string(),
                name: "Ana".to_string(),
                grupo_id: "G1".to_string(),
            },
        },
        DialogKind::CreateSalida => DialogType::CreateSalida {
            grupo_id: Some(ParamValue::Single("G1".to_string())),
        },
        DialogKind::EditSalida => DialogType::EditSalida {
            salida: Salida {
                id: "S1".to_string(),
                name: "Salida centro".to_string(),
                fecha: ymd(2024, 4, 2),
                grupo_id: "G1".to_string(),
            },
        },
        DialogKind::CreateInforme => DialogType::CreateInforme {
            grupo_id: Some(ParamValue::Single("G1".to_string())),
        },
        DialogKind::EditInforme => DialogType::EditInforme {
            informe: Informe {
                id: "I1".to_string(),
                name: "Visita barrio".to_string(),
                descripcion: "Fue bien".to_string(),
                fecha: ymd(2024, 5, 1),
                grupo_id: "G1".to_string(),
            },
        },
        DialogKind::ConfirmDelete => DialogType::ConfirmDelete {
            resource: ResourceKind::Misionero,
            id: "M1".to_string(),
            name: "Ana".to_string(),
        },
        DialogKind::Error => DialogType::Error("boom".to_string()),
        DialogKind::Info => DialogType::Info("hola".to_string()),
        DialogKind::Help => DialogType::Help,
        DialogKind::Logs => DialogType::Logs,
    }
}

#[test]
fn registry_is_total_over_every_dialog_kind() {
    for kind in DialogKind::ALL {
        let mut dialog = DialogComponent::new();
        let _ = dialog.update(Action::ShowDialog(sample_dialog(kind)));
        assert!(dialog.is_visible(), "dialog for {:?} did not open", kind);
        assert!(dialog.modal.is_open_for(kind));
    }
}

#[test]
fn create_informe_defaults_normalize_the_grupo_collection() {
    let mut dialog = DialogComponent::new();
    let _ = dialog.update(Action::ShowDialog(DialogType::CreateInforme {
        grupo_id: Some(ParamValue::Multi(vec!["G1".to_string(), "G2".to_string()])),
    }));

    // The multi-valued route parameter collapses to its first element.
    assert_eq!(dialog.default_grupo_id.as_deref(), Some("G1"));
    assert_eq!(dialog.form.name.buffer, "");
    assert_eq!(dialog.form.descripcion.buffer, "");
    assert_eq!(dialog.form.fecha.buffer, "");
}

#[test]
fn create_informe_submit_builds_the_normalized_mutation() {
    let mut dialog = DialogComponent::new();
    let _ = dialog.update(Action::ShowDialog(DialogType::CreateInforme {
        grupo_id: Some(ParamValue::Multi(vec!["G1".to_string(), "G2".to_string()])),
    }));

    type_text(&mut dialog, "Visita barrio");
    let _ = dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "Fue bien");
    let _ = dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "2024-05-01");

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::CreateInforme { input } => {
            assert_eq!(input.name, "Visita barrio");
            assert_eq!(input.descripcion, "Fue bien");
            assert_eq!(input.fecha, ymd(2024, 5, 1));
            // Normalization applies at submit as well, not just at defaults.
            assert_eq!(input.grupo_id, "G1");
        }
        other => panic!("expected CreateInforme, got {:?}", other),
    }

    assert!(dialog.form.submitting);
    assert!(dialog.is_visible(), "dialog must stay open while submitting");
}

#[test]
fn confirm_is_disabled_while_submitting() {
    let mut dialog = DialogComponent::new();
    let _ = dialog.update(Action::ShowDialog(DialogType::CreateGrupo));
    type_text(&mut dialog, "Grupo Norte");

    assert!(matches!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::CreateGrupo { .. }
    ));

    // A second confirm while in flight is a no-op, and so is cancel.
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None));
    assert!(dialog.is_visible());
}

#[test]
fn failed_mutation_keeps_the_dialog_open_with_values_intact() {
    let mut dialog = DialogComponent::new();
    let _ = dialog.update(Action::ShowDialog(DialogType::CreateInforme {
        grupo_id: Some(ParamValue::Single("G1".to_string())),
    }));

    type_text(&mut dialog, "Visita barrio");
    let _ = dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "Fue bien");
    let _ = dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "2024-05-01");
    let _ = dialog.handle_key_events(key(KeyCode::Enter));

    let passed_through = dialog.update(Action::MutationFailed("500".to_string()));
    assert!(matches!(passed_through, Action::MutationFailed(_)));

    assert!(dialog.is_visible());
    assert!(!dialog.form.submitting, "retry must be possible after a failure");
    assert_eq!(dialog.form.name.buffer, "Visita barrio");
    assert_eq!(dialog.form.descripcion.buffer, "Fue bien");
    assert_eq!(dialog.form.fecha.buffer, "2024-05-01");
}

#[test]
fn hide_dialog_clears_everything() {
    let mut dialog = DialogComponent::new();
    let _ = dialog.update(Action::ShowDialog(sample_dialog(DialogKind::EditInforme)));
    assert_eq!(dialog.form.name.buffer, "Visita barrio");

    let _ = dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
    assert_eq!(dialog.form.name.buffer, "");
    assert!(dialog.default_grupo_id.is_none());
}

#[test]
fn validation_errors_keep_the_submit_local() {
    let mut dialog = DialogComponent::new();
    let _ = dialog.update(Action::ShowDialog(DialogType::CreateInforme {
        grupo_id: Some(ParamValue::Single("G1".to_string())),
    }));

    // Empty form: nothing is submitted, errors land next to their fields.
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(!dialog.form.submitting);
    assert_eq!(dialog.form.error(FieldId::Name), Some(VALIDATION_REQUIRED));
    assert!(dialog.form.error(FieldId::Fecha).is_some());

    // A future date is rejected with its own message.
    type_text(&mut dialog, "Visita barrio");
    let _ = dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "Fue bien");
    let _ = dialog.handle_key_events(key(KeyCode::Tab));
    let tomorrow = datetime::today().succ_opt().unwrap();
    type_text(&mut dialog, &datetime::format_ymd(tomorrow));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert_eq!(dialog.form.error(FieldId::Fecha), Some(VALIDATION_FECHA_FUTURE));
}

#[test]
fn edit_dialogs_prefill_from_the_payload_entity() {
    let mut dialog = DialogComponent::new();
    let _ = dialog.update(Action::ShowDialog(sample_dialog(DialogKind::EditSalida)));

    assert_eq!(dialog.form.name.buffer, "Salida centro");
    assert_eq!(dialog.form.fecha.buffer, "2024-04-02");
    assert_eq!(dialog.default_grupo_id.as_deref(), Some("G1"));
}

#[test]
fn delete_confirmation_submits_the_delete_and_goes_busy() {
    let mut dialog = DialogComponent::new();
    let _ = dialog.update(Action::ShowDialog(sample_dialog(DialogKind::ConfirmDelete)));

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::Delete { resource, id } => {
            assert_eq!(resource, ResourceKind::Misionero);
            assert_eq!(id, "M1");
        }
        other => panic!("expected Delete, got {:?}", other),
    }

    // Busy: no double-submit, no cancel mid-flight.
    assert!(dialog.form.submitting);
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None));
}

#[test]
fn opening_a_second_dialog_replaces_the_first() {
    let mut dialog = DialogComponent::new();
    let _ = dialog.update(Action::ShowDialog(sample_dialog(DialogKind::CreateInforme)));
    type_text(&mut dialog, "medio escrito");

    let _ = dialog.update(Action::ShowDialog(sample_dialog(DialogKind::CreateGrupo)));

    assert!(dialog.modal.is_open_for(DialogKind::CreateGrupo));
    assert!(!dialog.modal.is_open_for(DialogKind::CreateInforme));
    // The replaced dialog's half-typed values are gone.
    assert_eq!(dialog.form.name.buffer, "");
}
