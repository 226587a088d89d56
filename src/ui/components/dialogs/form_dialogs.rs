//! Render functions for the create/edit form dialogs.
//!
//! All four resource forms share the same skeleton: stacked labelled inputs,
//! an inline error line under each invalid field, a read-only grupo line
//! where the resource belongs to one, and a shortcut footer. While the
//! mutation is in flight the footer shows a busy indicator instead of the
//! shortcuts.

use super::common::{
    centered_rect, create_dialog_block, create_error_line, create_input_paragraph,
    create_instructions_paragraph, create_selection_paragraph, shortcuts,
};
use crate::ui::core::form::{FieldId, FormState};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Height of one field: input box (3 rows) plus its error line.
const FIELD_HEIGHT: u16 = 4;

pub fn render_form_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    form: &FormState,
    grupo_label: Option<&str>,
) {
    let field_count = form.fields().len() as u16;
    let extra = if grupo_label.is_some() { 3 } else { 0 };
    let needed = field_count * FIELD_HEIGHT + extra + 4;
    let percent_y = ((needed as u32 * 100 / area.height.max(1) as u32) as u16).clamp(30, 90);

    let popup_area = centered_rect(60, percent_y, area);
    f.render_widget(Clear, popup_area);

    let block = create_dialog_block(title, Color::Green);
    f.render_widget(block, popup_area);

    let content = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let mut constraints: Vec<Constraint> = form.fields().iter().map(|_| Constraint::Length(FIELD_HEIGHT)).collect();
    if grupo_label.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(1));
    let rows = Layout::vertical(constraints).split(content);

    for (i, field_id) in form.fields().iter().enumerate() {
        render_field(f, rows[i], form, *field_id);
    }

    if let Some(label) = grupo_label {
        let idx = form.fields().len();
        f.render_widget(create_selection_paragraph(label.to_string(), "Grupo"), rows[idx]);
    }

    let footer_area = rows[rows.len() - 1];
    if form.submitting {
        let busy = Paragraph::new(Line::from(Span::styled(
            "Guardando…",
            Style::default().fg(Color::Yellow),
        )))
        .centered();
        f.render_widget(busy, footer_area);
    } else {
        let instructions = create_instructions_paragraph(&[
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::TAB_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, footer_area);
    }
}

fn render_field(f: &mut Frame, area: Rect, form: &FormState, field_id: FieldId) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).split(area);

    let focused = form.focused() == Some(field_id) && !form.submitting;
    let field = form.field(field_id);
    f.render_widget(
        create_input_paragraph(&field.buffer, field_id.label(), focused),
        chunks[0],
    );

    if let Some(error) = form.error(field_id) {
        f.render_widget(create_error_line(error), chunks[1]);
    }
}
