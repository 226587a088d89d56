//! Sidebar listing the grupos.
//!
//! `J`/`K` move the grupo selection; every move navigates, which reloads the
//! main panel for the newly selected grupo.

use crate::models::Grupo;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

pub struct SidebarComponent {
    pub grupos: Vec<Grupo>,
    pub selected_index: usize,
    list_state: ListState,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            grupos: Vec::new(),
            selected_index: 0,
            list_state,
        }
    }

    pub fn update_data(&mut self, grupos: Vec<Grupo>, selected_index: usize) {
        self.grupos = grupos;
        self.selected_index = selected_index.min(self.grupos.len().saturating_sub(1));
        if self.grupos.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_grupo(&self) -> Option<&Grupo> {
        self.grupos.get(self.selected_index)
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => {
                if !self.grupos.is_empty() && self.selected_index + 1 < self.grupos.len() {
                    return Action::NavigateToGrupo(self.selected_index + 1);
                }
                Action::None
            }
            KeyCode::Char('K') => {
                if self.selected_index > 0 {
                    return Action::NavigateToGrupo(self.selected_index - 1);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = self.grupos.iter().map(|g| ListItem::new(g.name.clone())).collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Grupos ({}) ", self.grupos.len()));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
