//! Modal dialog component.
//!
//! This component is the registry tying each [`DialogType`] to its form: how
//! it derives default values from the dialog payload, how it validates, and
//! which mutation action a confirmed submit produces. The open/closed state
//! itself lives in [`ModalState`]; the match arms below are total over the
//! dialog types, so a dialog without an entry cannot compile.
//!
//! A form dialog does not close itself on submit. It marks the form as
//! submitting (disabling confirm and cancel) and stays open until the
//! mutation resolves: success closes it via `HideDialog`, failure re-enables
//! it with the user's values intact.

use crate::logger::Logger;
use crate::models::{Grupo, GrupoInput, InformeInput, MisioneroInput, SalidaInput};
use crate::ui::components::dialogs::{form_dialogs, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogKind, DialogType},
    form::{FieldId, FormState},
    modal::ModalState,
    route::{self, ParamValue},
    Component,
};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub modal: ModalState,
    pub form: FormState,
    pub grupos: Vec<Grupo>,
    /// Normalized grupo id derived from the payload when a create dialog
    /// opened. Display only; submit re-normalizes from the payload.
    pub default_grupo_id: Option<String>,
    pub scroll_offset: usize,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            modal: ModalState::new(),
            form: FormState::default(),
            grupos: Vec::new(),
            default_grupo_id: None,
            scroll_offset: 0,
            logger: None,
        }
    }

    pub fn update_data(&mut self, grupos: Vec<Grupo>) {
        self.grupos = grupos;
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.modal.is_open()
    }

    /// Configure the form for a freshly opened dialog, pre-filling edit
    /// forms from the payload entity and resolving the default grupo from
    /// the route value carried by create payloads.
    fn derive_defaults(&mut self, dialog: &DialogType) {
        self.form.reset();
        self.default_grupo_id = None;
        self.scroll_offset = 0;

        match dialog {
            DialogType::CreateGrupo => {
                self.form = FormState::for_fields(vec![FieldId::Name]);
            }
            DialogType::EditGrupo { grupo } => {
                self.form = FormState::for_fields(vec![FieldId::Name]);
                self.form.name.set(&grupo.name);
            }
            DialogType::CreateMisionero { grupo_id } => {
                self.form = FormState::for_fields(vec![FieldId::Name]);
                self.default_grupo_id = normalized_grupo_id(grupo_id);
            }
            DialogType::EditMisionero { misionero } => {
                self.form = FormState::for_fields(vec![FieldId::Name]);
                self.form.name.set(&misionero.name);
                self.default_grupo_id = Some(misionero.grupo_id.clone());
            }
            DialogType::CreateSalida { grupo_id } => {
                self.form = FormState::for_fields(vec![FieldId::Name, FieldId::Fecha]);
                self.default_grupo_id = normalized_grupo_id(grupo_id);
            }
            DialogType::EditSalida { salida } => {
                self.form = FormState::for_fields(vec![FieldId::Name, FieldId::Fecha]);
                self.form.name.set(&salida.name);
                self.form.fecha.set(&datetime::format_ymd(salida.fecha));
                self.default_grupo_id = Some(salida.grupo_id.clone());
            }
            DialogType::CreateInforme { grupo_id } => {
                self.form = FormState::for_fields(vec![FieldId::Name, FieldId::Descripcion, FieldId::Fecha]);
                self.default_grupo_id = normalized_grupo_id(grupo_id);
            }
            DialogType::EditInforme { informe } => {
                self.form = FormState::for_fields(vec![FieldId::Name, FieldId::Descripcion, FieldId::Fecha]);
                self.form.name.set(&informe.name);
                self.form.descripcion.set(&informe.descripcion);
                self.form.fecha.set(&datetime::format_ymd(informe.fecha));
                self.default_grupo_id = Some(informe.grupo_id.clone());
            }
            DialogType::ConfirmDelete { .. }
            | DialogType::Error(_)
            | DialogType::Info(_)
            | DialogType::Help
            | DialogType::Logs => {}
        }
    }

    /// Validate and build the mutation action for the open dialog. The form
    /// stays as-is on validation failure; on success it flips to submitting
    /// and the dialog waits for the mutation outcome.
    fn handle_submit(&mut self) -> Action {
        let Some(dialog) = self.modal.current().cloned() else {
            return Action::None;
        };

        let action = match &dialog {
            DialogType::CreateGrupo => {
                if !self.form.validate(datetime::today()) {
                    return Action::None;
                }
                Action::CreateGrupo {
                    input: GrupoInput {
                        name: self.form.name.buffer.trim().to_string(),
                    },
                }
            }
            DialogType::EditGrupo { grupo } => {
                if !self.form.validate(datetime::today()) {
                    return Action::None;
                }
                Action::EditGrupo {
                    id: grupo.id.clone(),
                    input: GrupoInput {
                        name: self.form.name.buffer.trim().to_string(),
                    },
                }
            }
            DialogType::CreateMisionero { grupo_id } => {
                if !self.form.validate(datetime::today()) {
                    return Action::None;
                }
                Action::CreateMisionero {
                    input: MisioneroInput {
                        name: self.form.name.buffer.trim().to_string(),
                        grupo_id: submit_grupo_id(grupo_id),
                    },
                }
            }
            DialogType::EditMisionero { misionero } => {
                if !self.form.validate(datetime::today()) {
                    return Action::None;
                }
                Action::EditMisionero {
                    id: misionero.id.clone(),
                    input: MisioneroInput {
                        name: self.form.name.buffer.trim().to_string(),
                        grupo_id: misionero.grupo_id.clone(),
                    },
                }
            }
            DialogType::CreateSalida { grupo_id } => {
                if !self.form.validate(datetime::today()) {
                    return Action::None;
                }
                let Some(fecha) = self.form.fecha_value() else {
                    return Action::None;
                };
                Action::CreateSalida {
                    input: SalidaInput {
                        name: self.form.name.buffer.trim().to_string(),
                        fecha,
                        grupo_id: submit_grupo_id(grupo_id),
                    },
                }
            }
            DialogType::EditSalida { salida } => {
                if !self.form.validate(datetime::today()) {
                    return Action::None;
                }
                let Some(fecha) = self.form.fecha_value() else {
                    return Action::None;
                };
                Action::EditSalida {
                    id: salida.id.clone(),
                    input: SalidaInput {
                        name: self.form.name.buffer.trim().to_string(),
                        fecha,
                        grupo_id: salida.grupo_id.clone(),
                    },
                }
            }
            DialogType::CreateInforme { grupo_id } => {
                if !self.form.validate(datetime::today()) {
                    return Action::None;
                }
                let Some(fecha) = self.form.fecha_value() else {
                    return Action::None;
                };
                Action::CreateInforme {
                    input: InformeInput {
                        name: self.form.name.buffer.trim().to_string(),
                        descripcion: self.form.descripcion.buffer.trim().to_string(),
                        fecha,
                        grupo_id: submit_grupo_id(grupo_id),
                    },
                }
            }
            DialogType::EditInforme { informe } => {
                if !self.form.validate(datetime::today()) {
                    return Action::None;
                }
                let Some(fecha) = self.form.fecha_value() else {
                    return Action::None;
                };
                Action::EditInforme {
                    id: informe.id.clone(),
                    input: InformeInput {
                        name: self.form.name.buffer.trim().to_string(),
                        descripcion: self.form.descripcion.buffer.trim().to_string(),
                        fecha,
                        grupo_id: informe.grupo_id.clone(),
                    },
                }
            }
            DialogType::ConfirmDelete { resource, id, .. } => Action::Delete {
                resource: *resource,
                id: id.clone(),
            },
            DialogType::Error(_) | DialogType::Info(_) | DialogType::Help | DialogType::Logs => {
                return Action::None;
            }
        };

        log::info!("dialog submit: {:?}", dialog.kind());
        self.form.submitting = true;
        action
    }

    /// Grupo name for the read-only line of a form dialog.
    fn grupo_label(&self) -> Option<String> {
        let id = self.default_grupo_id.as_deref()?;
        Some(
            self.grupos
                .iter()
                .find(|g| g.id == id)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| id.to_string()),
        )
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        if self.form.submitting {
            // Confirm is disabled while the mutation is in flight; so is
            // cancel, which keeps mid-flight teardown unreachable.
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::Char(c) => {
                if let Some(id) = self.form.focused() {
                    self.form.field_mut(id).insert_char(c);
                }
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(id) = self.form.focused() {
                    self.form.field_mut(id).backspace();
                }
                Action::None
            }
            KeyCode::Delete => {
                if let Some(id) = self.form.focused() {
                    self.form.field_mut(id).delete();
                }
                Action::None
            }
            KeyCode::Left => {
                if let Some(id) = self.form.focused() {
                    self.form.field_mut(id).left();
                }
                Action::None
            }
            KeyCode::Right => {
                if let Some(id) = self.form.focused() {
                    self.form.field_mut(id).right();
                }
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// Both normalization call sites go through `route::normalize`; an empty
/// route value submits as the empty id, mirroring the backend's own
/// "missing parent" handling.
fn normalized_grupo_id(raw: &Option<ParamValue>) -> Option<String> {
    raw.as_ref().and_then(route::normalize).map(str::to_string)
}

fn submit_grupo_id(raw: &Option<ParamValue>) -> String {
    normalized_grupo_id(raw).unwrap_or_default()
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(kind) = self.modal.current().map(DialogType::kind) else {
            return Action::None;
        };

        match kind {
            DialogKind::Error | DialogKind::Info => Action::HideDialog,
            DialogKind::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_offset += 1;
                    Action::None
                }
                _ => Action::None,
            },
            DialogKind::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_offset += 1;
                    Action::None
                }
                _ => Action::None,
            },
            DialogKind::ConfirmDelete => {
                if self.form.submitting {
                    return Action::None;
                }
                match key.code {
                    KeyCode::Esc => Action::HideDialog,
                    KeyCode::Enter => self.handle_submit(),
                    _ => Action::None,
                }
            }
            _ => self.handle_form_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog) => {
                // Last-open-wins: whatever was open before is replaced.
                self.derive_defaults(&dialog);
                self.modal.open(dialog);
                Action::None
            }
            Action::HideDialog => {
                self.modal.close();
                self.form.reset();
                self.default_grupo_id = None;
                Action::None
            }
            Action::MutationFailed(message) => {
                // The dialog stays open with the entered values; only the
                // submitting gate is lifted so the user can retry or cancel.
                self.form.submitting = false;
                Action::MutationFailed(message)
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog) = self.modal.current().cloned() else {
            return;
        };

        match dialog {
            DialogType::CreateGrupo => {
                form_dialogs::render_form_dialog(f, rect, "Crea un nuevo grupo", &self.form, None);
            }
            DialogType::EditGrupo { .. } => {
                form_dialogs::render_form_dialog(f, rect, "Edita el grupo", &self.form, None);
            }
            DialogType::CreateMisionero { .. } => {
                let label = self.grupo_label();
                form_dialogs::render_form_dialog(f, rect, "Crea un nuevo misionero", &self.form, label.as_deref());
            }
            DialogType::EditMisionero { .. } => {
                let label = self.grupo_label();
                form_dialogs::render_form_dialog(f, rect, "Edita el misionero", &self.form, label.as_deref());
            }
            DialogType::CreateSalida { .. } => {
                let label = self.grupo_label();
                form_dialogs::render_form_dialog(f, rect, "Crea una nueva salida", &self.form, label.as_deref());
            }
            DialogType::EditSalida { .. } => {
                let label = self.grupo_label();
                form_dialogs::render_form_dialog(f, rect, "Edita la salida", &self.form, label.as_deref());
            }
            DialogType::CreateInforme { .. } => {
                let label = self.grupo_label();
                form_dialogs::render_form_dialog(f, rect, "Crea un nuevo informe", &self.form, label.as_deref());
            }
            DialogType::EditInforme { .. } => {
                let label = self.grupo_label();
                form_dialogs::render_form_dialog(f, rect, "Edita el informe", &self.form, label.as_deref());
            }
            DialogType::ConfirmDelete { resource, name, .. } => {
                system_dialogs::render_delete_confirmation_dialog(
                    f,
                    rect,
                    resource.singular(),
                    &name,
                    self.form.submitting,
                );
            }
            DialogType::Error(message) => system_dialogs::render_error_dialog(f, rect, &message),
            DialogType::Info(message) => system_dialogs::render_info_dialog(f, rect, &message),
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, self.scroll_offset),
            DialogType::Logs => {
                let entries = self.logger.as_ref().map(|l| l.get_logs()).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &entries, self.scroll_offset);
            }
        }
    }
}
