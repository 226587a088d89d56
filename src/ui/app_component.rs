use crate::api::ResourceApi;
use crate::config::Config;
use crate::constants::{
    ERROR_GENERIC, SUCCESS_GRUPO_CREATED, SUCCESS_GRUPO_DELETED, SUCCESS_GRUPO_UPDATED,
    SUCCESS_INFORME_CREATED, SUCCESS_INFORME_DELETED, SUCCESS_INFORME_UPDATED,
    SUCCESS_MISIONERO_CREATED, SUCCESS_MISIONERO_DELETED, SUCCESS_MISIONERO_UPDATED,
    SUCCESS_SALIDA_CREATED, SUCCESS_SALIDA_DELETED, SUCCESS_SALIDA_UPDATED,
};
use crate::logger::Logger;
use crate::models::{Grupo, Informe, Misionero, Salida};
use crate::ui::components::{DialogComponent, ListComponent, SidebarComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType, Notice, PanelKind, ResourceKind},
    event_handler::EventType,
    route::{ParamValue, RouteParams, GRUPO_ID_PARAM},
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::ui_state::UiStateStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub grupos: Vec<Grupo>,
    pub misioneros: Vec<Misionero>,
    pub salidas: Vec<Salida>,
    pub informes: Vec<Informe>,
    pub grupo_index: usize,
    pub panel: PanelKind,
    pub loading: bool,
    pub notice: Option<Notice>,
    pub asistencia_tomada: bool,
}

impl AppState {
    pub fn selected_grupo(&self) -> Option<&Grupo> {
        self.grupos.get(self.grupo_index)
    }
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    list: ListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    api: Arc<dyn ResourceApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    ui_state: UiStateStore,

    // Display settings
    show_descriptions: bool,

    should_quit: bool,
    active_load_task: Option<TaskId>,
}

impl AppComponent {
    pub fn new(api: Arc<dyn ResourceApi>, config: &Config, ui_state: UiStateStore) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();

        let panel = match config.ui.default_panel.as_str() {
            "salidas" => PanelKind::Salidas,
            "informes" => PanelKind::Informes,
            _ => PanelKind::Misioneros,
        };

        let state = AppState {
            panel,
            loading: true,
            asistencia_tomada: ui_state.asistencia_tomada(),
            ..Default::default()
        };

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        Self {
            sidebar: SidebarComponent::new(),
            list: ListComponent::new(),
            dialog,
            state,
            api,
            task_manager,
            background_action_rx,
            logger,
            ui_state,
            show_descriptions: config.display.show_descriptions,
            should_quit: false,
            active_load_task: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Whether a data load is currently in flight.
    pub fn is_refreshing(&self) -> bool {
        self.active_load_task.is_some()
    }

    /// Trigger the initial data load on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("AppComponent: initial data load".to_string());
        self.state.loading = true;
        self.schedule_data_fetch();
    }

    /// The route context of the current view. The grupo segment carries the
    /// selected grupo's identifier.
    pub fn route_params(&self) -> RouteParams {
        let mut params = RouteParams::new();
        if let Some(grupo) = self.state.selected_grupo() {
            params.set(GRUPO_ID_PARAM, ParamValue::Single(grupo.id.clone()));
        }
        params
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.sidebar.update_data(self.state.grupos.clone(), self.state.grupo_index);
        self.list.update_data(
            self.state.panel,
            self.state.misioneros.clone(),
            self.state.salidas.clone(),
            self.state.informes.clone(),
            self.state.asistencia_tomada,
            self.show_descriptions,
            self.state.loading,
        );
        self.dialog.update_data(self.state.grupos.clone());
    }

    /// The create dialog for the active panel, seeded with the current
    /// route's grupo value.
    fn create_dialog_for_panel(&self) -> DialogType {
        let grupo_id = self.route_params().get(GRUPO_ID_PARAM).cloned();
        match self.state.panel {
            PanelKind::Misioneros => DialogType::CreateMisionero { grupo_id },
            PanelKind::Salidas => DialogType::CreateSalida { grupo_id },
            PanelKind::Informes => DialogType::CreateInforme { grupo_id },
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Esc => {
                if self.dialog.is_visible() {
                    Action::HideDialog
                } else {
                    Action::Quit
                }
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - reloading data".to_string());
                Action::RefreshData
            }
            KeyCode::Tab => Action::CyclePanel,
            KeyCode::Char('a') => Action::ShowDialog(self.create_dialog_for_panel()),
            KeyCode::Char('A') => Action::ShowDialog(DialogType::CreateGrupo),
            KeyCode::Char('E') => match self.state.selected_grupo() {
                Some(grupo) => Action::ShowDialog(DialogType::EditGrupo { grupo: grupo.clone() }),
                None => Action::None,
            },
            KeyCode::Char('D') => match self.state.selected_grupo() {
                Some(grupo) => Action::ShowDialog(DialogType::ConfirmDelete {
                    resource: ResourceKind::Grupo,
                    id: grupo.id.clone(),
                    name: grupo.name.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::NavigateToGrupo(index) => {
                if index < self.state.grupos.len() {
                    self.state.grupo_index = index;
                    self.state.loading = true;
                    self.schedule_data_fetch();
                }
                Action::None
            }
            Action::SelectPanel(panel) => {
                self.state.panel = panel;
                self.state.loading = true;
                self.schedule_data_fetch();
                Action::None
            }
            Action::CyclePanel => {
                self.state.panel = self.state.panel.next();
                self.state.loading = true;
                self.schedule_data_fetch();
                Action::None
            }
            Action::RefreshData => {
                self.logger.log("Data: refreshing after mutation or request".to_string());
                self.schedule_data_fetch();
                Action::None
            }
            Action::DataLoaded {
                grupos,
                misioneros,
                salidas,
                informes,
            } => {
                self.logger.log(format!(
                    "Data: loaded {} grupos, {} misioneros, {} salidas, {} informes",
                    grupos.len(),
                    misioneros.len(),
                    salidas.len(),
                    informes.len()
                ));
                self.active_load_task = None;
                self.state.loading = false;
                if self.state.grupo_index >= grupos.len() {
                    self.state.grupo_index = grupos.len().saturating_sub(1);
                }
                self.state.grupos = grupos;
                self.state.misioneros = misioneros;
                self.state.salidas = salidas;
                self.state.informes = informes;
                self.sync_component_data();
                Action::None
            }
            Action::LoadFailed(message) => {
                self.logger.log(format!("Data: load failed: {}", message));
                self.active_load_task = None;
                self.state.loading = false;
                self.state.notice = Some(Notice::failure(ERROR_GENERIC));
                Action::None
            }
            Action::MutationFailed(message) => {
                // The dialog already lifted its submitting gate; here only
                // the notice and the log entry remain.
                self.logger.log(format!("Mutation failed: {}", message));
                self.state.notice = Some(Notice::failure(ERROR_GENERIC));
                Action::None
            }
            Action::Notify(notice) => {
                self.state.notice = Some(notice);
                Action::None
            }
            Action::ToggleAsistencia => {
                let value = !self.state.asistencia_tomada;
                self.state.asistencia_tomada = value;
                if let Err(e) = self.ui_state.set_asistencia_tomada(value) {
                    self.logger.log(format!("UI state: failed to persist flag: {}", e));
                }
                self.sync_component_data();
                Action::None
            }

            // Mutations: each spawns a background task that reports back on
            // the action channel in the protocol's order.
            Action::CreateGrupo { input } => {
                let api = self.api.clone();
                self.spawn_mutation(
                    move || async move { Ok(api.create_grupo(&input).await?) },
                    "Create grupo",
                    SUCCESS_GRUPO_CREATED,
                );
                Action::None
            }
            Action::EditGrupo { id, input } => {
                let api = self.api.clone();
                self.spawn_mutation(
                    move || async move { Ok(api.update_grupo(&id, &input).await?) },
                    "Edit grupo",
                    SUCCESS_GRUPO_UPDATED,
                );
                Action::None
            }
            Action::CreateMisionero { input } => {
                let api = self.api.clone();
                self.spawn_mutation(
                    move || async move { Ok(api.create_misionero(&input).await?) },
                    "Create misionero",
                    SUCCESS_MISIONERO_CREATED,
                );
                Action::None
            }
            Action::EditMisionero { id, input } => {
                let api = self.api.clone();
                self.spawn_mutation(
                    move || async move { Ok(api.update_misionero(&id, &input).await?) },
                    "Edit misionero",
                    SUCCESS_MISIONERO_UPDATED,
                );
                Action::None
            }
            Action::CreateSalida { input } => {
                let api = self.api.clone();
                self.spawn_mutation(
                    move || async move { Ok(api.create_salida(&input).await?) },
                    "Create salida",
                    SUCCESS_SALIDA_CREATED,
                );
                Action::None
            }
            Action::EditSalida { id, input } => {
                let api = self.api.clone();
                self.spawn_mutation(
                    move || async move { Ok(api.update_salida(&id, &input).await?) },
                    "Edit salida",
                    SUCCESS_SALIDA_UPDATED,
                );
                Action::None
            }
            Action::CreateInforme { input } => {
                let api = self.api.clone();
                self.spawn_mutation(
                    move || async move { Ok(api.create_informe(&input).await?) },
                    "Create informe",
                    SUCCESS_INFORME_CREATED,
                );
                Action::None
            }
            Action::EditInforme { id, input } => {
                let api = self.api.clone();
                self.spawn_mutation(
                    move || async move { Ok(api.update_informe(&id, &input).await?) },
                    "Edit informe",
                    SUCCESS_INFORME_UPDATED,
                );
                Action::None
            }
            Action::Delete { resource, id } => {
                let api = self.api.clone();
                let success = match resource {
                    ResourceKind::Grupo => SUCCESS_GRUPO_DELETED,
                    ResourceKind::Misionero => SUCCESS_MISIONERO_DELETED,
                    ResourceKind::Salida => SUCCESS_SALIDA_DELETED,
                    ResourceKind::Informe => SUCCESS_INFORME_DELETED,
                };
                self.spawn_mutation(
                    move || async move {
                        match resource {
                            ResourceKind::Grupo => Ok(api.delete_grupo(&id).await?),
                            ResourceKind::Misionero => Ok(api.delete_misionero(&id).await?),
                            ResourceKind::Salida => Ok(api.delete_salida(&id).await?),
                            ResourceKind::Informe => Ok(api.delete_informe(&id).await?),
                        }
                    },
                    "Delete",
                    success,
                );
                Action::None
            }

            // Pass through other actions
            other => other,
        }
    }

    fn spawn_mutation<F, Fut>(&mut self, operation: F, description: &str, success_notice: &str)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        // Correlation id so a later failure log can be matched to its spawn.
        let op_id = uuid::Uuid::new_v4();
        self.logger
            .log(format!("Background: spawning '{}' [{}]", description, op_id));
        self.task_manager
            .spawn_mutation(operation, format!("{} [{}]", description, op_id), success_notice.to_string());
    }

    /// Schedule a background task to fetch sidebar and panel data
    fn schedule_data_fetch(&mut self) {
        let grupo_id = self.state.selected_grupo().map(|g| g.id.clone());
        let task_id = self
            .task_manager
            .spawn_data_load(self.api.clone(), grupo_id, self.state.panel);
        self.active_load_task = Some(task_id);
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        self.task_manager.cleanup_finished_tasks();

        actions
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                // A fresh key press dismisses any lingering notice.
                self.state.notice = None;

                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    let sidebar_action = self.sidebar.handle_key_events(key);
                    if !matches!(sidebar_action, Action::None) {
                        sidebar_action
                    } else {
                        let list_action = self.list.handle_key_events(key);
                        if !matches!(list_action, Action::None) {
                            list_action
                        } else {
                            self.handle_global_key(key)
                        }
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action).await
    }

    /// Run one action through the component chain, then the app-level
    /// handler.
    pub async fn dispatch(&mut self, action: Action) -> anyhow::Result<()> {
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        let action = self.list.update(action);

        let _ = self.handle_app_action(action).await;

        self.sync_component_data();
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        self.list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(rect);

        let sidebar_width = (vertical[0].width / 3).min(30);
        let main_chunks =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).split(vertical[0]);

        self.sidebar.render(f, main_chunks[0]);
        self.list.render(f, main_chunks[1]);

        StatusBar::render(f, vertical[1], self.state.notice.as_ref(), self.state.loading);

        // Dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, vertical[0]);
        }
    }
}
