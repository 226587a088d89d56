//! Status bar component
//!
//! The notification surface: mutation outcomes land here as transient
//! notices. With no notice pending it shows key hints.

use crate::ui::core::actions::{Notice, NoticeKind};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, notice: Option<&Notice>, loading: bool) {
        let (status_text, status_color) = match notice {
            Some(notice) => {
                let color = match notice.kind {
                    NoticeKind::Success => Color::Green,
                    NoticeKind::Failure => Color::Red,
                };
                (notice.text.clone(), color)
            }
            None if loading => ("Cargando datos…".to_string(), Color::Yellow),
            None => (
                "a: crear • e: editar • d: eliminar • Tab: panel • ?: ayuda • q: salir".to_string(),
                Color::Gray,
            ),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
