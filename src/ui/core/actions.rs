use crate::models::{
    Grupo, GrupoInput, Informe, InformeInput, Misionero, MisioneroInput, Salida, SalidaInput,
};
use crate::ui::core::route::ParamValue;

/// The resource panel shown in the main area for the selected grupo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelKind {
    #[default]
    Misioneros,
    Salidas,
    Informes,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Misioneros => "Misioneros",
            PanelKind::Salidas => "Salidas",
            PanelKind::Informes => "Informes",
        }
    }

    /// Tab order: misioneros → salidas → informes → misioneros.
    pub fn next(&self) -> PanelKind {
        match self {
            PanelKind::Misioneros => PanelKind::Salidas,
            PanelKind::Salidas => PanelKind::Informes,
            PanelKind::Informes => PanelKind::Misioneros,
        }
    }
}

/// Which resource a mutation targets. Used by delete flows and notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Grupo,
    Misionero,
    Salida,
    Informe,
}

impl ResourceKind {
    /// Spanish singular, as shown in confirmation dialogs.
    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Grupo => "grupo",
            ResourceKind::Misionero => "misionero",
            ResourceKind::Salida => "salida",
            ResourceKind::Informe => "informe",
        }
    }
}

/// A transient user-facing notice shown in the status bar after a mutation
/// attempt resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NavigateToGrupo(usize),
    NextRow,
    PreviousRow,
    SelectPanel(PanelKind),
    CyclePanel,

    // Mutations, built by the dialog registry from validated form values
    CreateGrupo { input: GrupoInput },
    EditGrupo { id: String, input: GrupoInput },
    CreateMisionero { input: MisioneroInput },
    EditMisionero { id: String, input: MisioneroInput },
    CreateSalida { input: SalidaInput },
    EditSalida { id: String, input: SalidaInput },
    CreateInforme { input: InformeInput },
    EditInforme { id: String, input: InformeInput },
    Delete { resource: ResourceKind, id: String },

    // Data refresh cycle
    RefreshData,
    DataLoaded {
        grupos: Vec<Grupo>,
        misioneros: Vec<Misionero>,
        salidas: Vec<Salida>,
        informes: Vec<Informe>,
    },
    LoadFailed(String),

    // Mutation protocol results
    MutationFailed(String),
    Notify(Notice),

    // Per-device attendance flag
    ToggleAsistencia,

    // Dialog orchestration
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

/// The open dialog and its payload, as one value.
///
/// Each variant carries exactly what that dialog needs to render and to
/// build its mutation request: the entity being edited, the raw route value
/// for the parent grupo on create, or the target of a delete confirmation.
#[derive(Debug, Clone)]
pub enum DialogType {
    CreateGrupo,
    EditGrupo { grupo: Grupo },
    CreateMisionero { grupo_id: Option<ParamValue> },
    EditMisionero { misionero: Misionero },
    CreateSalida { grupo_id: Option<ParamValue> },
    EditSalida { salida: Salida },
    CreateInforme { grupo_id: Option<ParamValue> },
    EditInforme { informe: Informe },
    ConfirmDelete {
        resource: ResourceKind,
        id: String,
        name: String,
    },
    Error(String),
    Info(String),
    Help,
    Logs,
}

/// Fieldless discriminant of [`DialogType`], for `is_open_for` queries and
/// exhaustiveness checks in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    CreateGrupo,
    EditGrupo,
    CreateMisionero,
    EditMisionero,
    CreateSalida,
    EditSalida,
    CreateInforme,
    EditInforme,
    ConfirmDelete,
    Error,
    Info,
    Help,
    Logs,
}

impl DialogKind {
    /// Every declared dialog kind. Tests iterate this to prove the registry
    /// is total.
    pub const ALL: [DialogKind; 13] = [
        DialogKind::CreateGrupo,
        DialogKind::EditGrupo,
        DialogKind::CreateMisionero,
        DialogKind::EditMisionero,
        DialogKind::CreateSalida,
        DialogKind::EditSalida,
        DialogKind::CreateInforme,
        DialogKind::EditInforme,
        DialogKind::ConfirmDelete,
        DialogKind::Error,
        DialogKind::Info,
        DialogKind::Help,
        DialogKind::Logs,
    ];
}

impl DialogType {
    pub fn kind(&self) -> DialogKind {
        match self {
            DialogType::CreateGrupo => DialogKind::CreateGrupo,
            DialogType::EditGrupo { .. } => DialogKind::EditGrupo,
            DialogType::CreateMisionero { .. } => DialogKind::CreateMisionero,
            DialogType::EditMisionero { .. } => DialogKind::EditMisionero,
            DialogType::CreateSalida { .. } => DialogKind::CreateSalida,
            DialogType::EditSalida { .. } => DialogKind::EditSalida,
            DialogType::CreateInforme { .. } => DialogKind::CreateInforme,
            DialogType::EditInforme { .. } => DialogKind::EditInforme,
            DialogType::ConfirmDelete { .. } => DialogKind::ConfirmDelete,
            DialogType::Error(_) => DialogKind::Error,
            DialogType::Info(_) => DialogKind::Info,
            DialogType::Help => DialogKind::Help,
            DialogType::Logs => DialogKind::Logs,
        }
    }
}
