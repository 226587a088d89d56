use super::actions::{Action, Notice, PanelKind};
use crate::api::ResourceApi;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<anyhow::Result<TaskResult>>,
    pub description: String,
    pub started_at: std::time::Instant,
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    MutationCompleted(String),
    MutationFailed(String),
    DataLoadCompleted,
    Other(String),
}

/// Registry of background tasks plus the action channel they report on.
///
/// Every mutation and data load runs as a spawned task; results come back to
/// the UI as [`Action`]s on an unbounded channel drained on ticks. Within one
/// task, sends happen in a fixed order, and the channel preserves it.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a create/update/delete mutation.
    ///
    /// On success the task emits, in this order: `RefreshData` (so the list
    /// re-fetches before anything else is observed), `HideDialog`, then the
    /// success notice. On failure it emits only `MutationFailed`: the dialog
    /// stays open with the user's values and no refresh is issued.
    pub fn spawn_mutation<F, Fut>(&mut self, operation: F, description: String, success_notice: String) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            match operation().await {
                Ok(()) => {
                    let _ = action_sender.send(Action::RefreshData);
                    let _ = action_sender.send(Action::HideDialog);
                    let _ = action_sender.send(Action::Notify(Notice::success(success_notice.clone())));
                    Ok(TaskResult::MutationCompleted(success_notice))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::MutationFailed(message.clone()));
                    Ok(TaskResult::MutationFailed(message))
                }
            }
        });

        self.track(task_id, handle, desc_for_task);
        task_id
    }

    /// Spawn a load of the sidebar grupos plus the rows of the active panel.
    pub fn spawn_data_load(
        &mut self,
        api: Arc<dyn ResourceApi>,
        grupo_id: Option<String>,
        panel: PanelKind,
    ) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = "Loading data from API".to_string();

        let handle = tokio::spawn(async move {
            let grupos = match api.list_grupos().await {
                Ok(grupos) => grupos,
                Err(e) => {
                    let _ = action_sender.send(Action::LoadFailed(e.to_string()));
                    return Ok(TaskResult::Other(e.to_string()));
                }
            };

            let mut misioneros = Vec::new();
            let mut salidas = Vec::new();
            let mut informes = Vec::new();

            if let Some(grupo_id) = grupo_id {
                let rows = match panel {
                    PanelKind::Misioneros => api.list_misioneros(&grupo_id).await.map(|r| misioneros = r),
                    PanelKind::Salidas => api.list_salidas(&grupo_id).await.map(|r| salidas = r),
                    PanelKind::Informes => api.list_informes(&grupo_id).await.map(|r| informes = r),
                };
                if let Err(e) = rows {
                    let _ = action_sender.send(Action::LoadFailed(e.to_string()));
                    return Ok(TaskResult::Other(e.to_string()));
                }
            }

            let _ = action_sender.send(Action::DataLoaded {
                grupos,
                misioneros,
                salidas,
                informes,
            });

            Ok(TaskResult::DataLoadCompleted)
        });

        self.track(task_id, handle, description);
        task_id
    }

    fn track(&mut self, id: TaskId, handle: JoinHandle<anyhow::Result<TaskResult>>, description: String) {
        self.tasks.insert(
            id,
            BackgroundTask {
                id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
