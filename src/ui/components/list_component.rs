//! Main panel: the rows of the selected grupo's active resource.
//!
//! This component owns row selection and the per-row actions: `e` opens the
//! matching edit dialog with the row's entity as payload, `d` opens the
//! delete confirmation dialog (a delete is never issued from here directly).
//! Creation happens at the app level, where the route context lives.

use crate::models::{Informe, Misionero, Salida};
use crate::ui::core::{
    actions::{Action, DialogType, PanelKind, ResourceKind},
    Component,
};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

pub struct ListComponent {
    pub panel: PanelKind,
    pub misioneros: Vec<Misionero>,
    pub salidas: Vec<Salida>,
    pub informes: Vec<Informe>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub asistencia_tomada: bool,
    pub show_descriptions: bool,
    pub loading: bool,
}

impl Default for ListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ListComponent {
    pub fn new() -> Self {
        Self {
            panel: PanelKind::default(),
            misioneros: Vec::new(),
            salidas: Vec::new(),
            informes: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            asistencia_tomada: false,
            show_descriptions: true,
            loading: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_data(
        &mut self,
        panel: PanelKind,
        misioneros: Vec<Misionero>,
        salidas: Vec<Salida>,
        informes: Vec<Informe>,
        asistencia_tomada: bool,
        show_descriptions: bool,
        loading: bool,
    ) {
        if panel != self.panel {
            self.selected_index = 0;
        }
        self.panel = panel;
        self.misioneros = misioneros;
        self.salidas = salidas;
        self.informes = informes;
        self.asistencia_tomada = asistencia_tomada;
        self.show_descriptions = show_descriptions;
        self.loading = loading;
        self.update_list_state();
    }

    pub fn row_count(&self) -> usize {
        match self.panel {
            PanelKind::Misioneros => self.misioneros.len(),
            PanelKind::Salidas => self.salidas.len(),
            PanelKind::Informes => self.informes.len(),
        }
    }

    fn update_list_state(&mut self) {
        let count = self.row_count();
        if count == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= count {
                self.selected_index = count - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn next_row(&mut self) {
        let count = self.row_count();
        if count > 0 && self.selected_index + 1 < count {
            self.selected_index += 1;
            self.update_list_state();
        }
    }

    fn previous_row(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.update_list_state();
        }
    }

    /// The edit dialog for the selected row, payload included.
    fn edit_selected(&self) -> Action {
        match self.panel {
            PanelKind::Misioneros => match self.misioneros.get(self.selected_index) {
                Some(misionero) => Action::ShowDialog(DialogType::EditMisionero {
                    misionero: misionero.clone(),
                }),
                None => Action::None,
            },
            PanelKind::Salidas => match self.salidas.get(self.selected_index) {
                Some(salida) => Action::ShowDialog(DialogType::EditSalida { salida: salida.clone() }),
                None => Action::None,
            },
            PanelKind::Informes => match self.informes.get(self.selected_index) {
                Some(informe) => Action::ShowDialog(DialogType::EditInforme {
                    informe: informe.clone(),
                }),
                None => Action::None,
            },
        }
    }

    /// The delete confirmation dialog for the selected row. The actual
    /// delete only happens when the confirmation dialog submits.
    fn delete_selected(&self) -> Action {
        let (resource, id, name) = match self.panel {
            PanelKind::Misioneros => match self.misioneros.get(self.selected_index) {
                Some(m) => (ResourceKind::Misionero, m.id.clone(), m.name.clone()),
                None => return Action::None,
            },
            PanelKind::Salidas => match self.salidas.get(self.selected_index) {
                Some(s) => (ResourceKind::Salida, s.id.clone(), s.name.clone()),
                None => return Action::None,
            },
            PanelKind::Informes => match self.informes.get(self.selected_index) {
                Some(i) => (ResourceKind::Informe, i.id.clone(), i.name.clone()),
                None => return Action::None,
            },
        };
        Action::ShowDialog(DialogType::ConfirmDelete { resource, id, name })
    }

    fn rows(&self) -> Vec<ListItem<'static>> {
        match self.panel {
            PanelKind::Misioneros => self
                .misioneros
                .iter()
                .map(|m| ListItem::new(Line::from(m.name.clone())))
                .collect(),
            PanelKind::Salidas => self
                .salidas
                .iter()
                .map(|s| {
                    ListItem::new(Line::from(vec![
                        Span::styled(datetime::format_ymd(s.fecha), Style::default().fg(Color::Yellow)),
                        Span::raw("  "),
                        Span::raw(s.name.clone()),
                    ]))
                })
                .collect(),
            PanelKind::Informes => self
                .informes
                .iter()
                .map(|i| {
                    let mut spans = vec![
                        Span::styled(datetime::format_ymd(i.fecha), Style::default().fg(Color::Yellow)),
                        Span::raw("  "),
                        Span::raw(i.name.clone()),
                    ];
                    if self.show_descriptions && !i.descripcion.is_empty() {
                        spans.push(Span::styled(
                            format!("  ({})", i.descripcion),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect(),
        }
    }

    fn title(&self) -> String {
        let mut title = format!(" {} ({}) ", self.panel.title(), self.row_count());
        if self.panel == PanelKind::Misioneros {
            let mark = if self.asistencia_tomada { "x" } else { " " };
            title.push_str(&format!("[{}] Asistencia tomada ", mark));
        }
        title
    }
}

impl Component for ListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next_row();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous_row();
                Action::None
            }
            KeyCode::Char('e') => self.edit_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('x') if self.panel == PanelKind::Misioneros => Action::ToggleAsistencia,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRow => {
                self.next_row();
                Action::None
            }
            Action::PreviousRow => {
                self.previous_row();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title());

        let items = self.rows();
        if items.is_empty() {
            let empty = if self.loading { "Cargando…" } else { "Sin datos." };
            let list = List::new(vec![ListItem::new(Line::from(Span::styled(
                empty,
                Style::default().fg(Color::DarkGray),
            )))])
            .block(block);
            f.render_widget(list, rect);
            return;
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
