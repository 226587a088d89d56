//! Delete confirmation, error/info, help, and logs dialogs.

use super::common::centered_rect;
use crate::constants::DIALOG_TITLE_LOGS;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Fixed-height centered rect, used by the small message dialogs.
fn centered_rect_lines(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup = centered_rect(percent_x, 100, area);
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(popup.x, y, popup.width, height.min(area.height))
}

pub fn render_delete_confirmation_dialog(
    f: &mut Frame,
    area: Rect,
    resource_label: &str,
    name: &str,
    busy: bool,
) {
    let dialog_area = centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let message = format!("¿Eliminar {} \"{}\"?\nEsta acción no se puede deshacer.", resource_label, name);
    let instructions = if busy {
        "Eliminando…"
    } else {
        "Enter para confirmar, Esc para cancelar"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Confirmar eliminación")
        .style(Style::default().fg(Color::Red));

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)])
        .split(dialog_area.inner(ratatui::layout::Margin {
            horizontal: 1,
            vertical: 1,
        }));

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_color = if busy { Color::Yellow } else { Color::Gray };
    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(instructions_color))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
}

fn render_message_dialog(f: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let dialog_area = centered_rect_lines(60, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(color));

    let chunks = Layout::vertical([Constraint::Min(2), Constraint::Length(1)])
        .split(dialog_area.inner(ratatui::layout::Margin {
            horizontal: 1,
            vertical: 1,
        }));

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions = Paragraph::new("Pulsa cualquier tecla para continuar")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, message: &str) {
    render_message_dialog(f, area, "Info", message, Color::Blue);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, message: &str) {
    render_message_dialog(f, area, "Error", message, Color::Red);
}

const HELP_TEXT: &str = "\
Navegación
  J / K        grupo anterior / siguiente
  j / k        fila anterior / siguiente
  Tab          cambiar panel (misioneros, salidas, informes)

Acciones
  a            crear en el panel actual
  A            crear grupo
  e            editar la fila seleccionada
  E            editar el grupo seleccionado
  d            eliminar la fila seleccionada (pide confirmación)
  D            eliminar el grupo seleccionado (pide confirmación)
  x            marcar/desmarcar asistencia tomada
  r            recargar datos

Otros
  G            registro
  ?            esta ayuda
  q / Esc      salir";

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize) {
    let dialog_area = centered_rect(70, 80, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Ayuda - Press 'Esc' or '?' to close")
        .style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(HELP_TEXT)
        .block(block)
        .style(Style::default().fg(Color::White))
        .scroll((scroll_offset as u16, 0));

    f.render_widget(paragraph, dialog_area);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, entries: &[String], scroll_offset: usize) {
    let dialog_area = centered_rect(80, 80, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(DIALOG_TITLE_LOGS)
        .style(Style::default().fg(Color::Gray));

    let text = if entries.is_empty() {
        "No hay entradas.".to_string()
    } else {
        entries.join("\n")
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White))
        .scroll((scroll_offset as u16, 0));

    f.render_widget(paragraph, dialog_area);
}
