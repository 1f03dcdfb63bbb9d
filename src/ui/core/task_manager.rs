use super::actions::Action;
use crate::console::{Dispatcher, PreparedCall, Shard};
use crate::remote::RemoteCall;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs remote calls off the UI loop and reports completions as actions.
///
/// Tasks are not serialized: two calls may be in flight at once and their
/// completions arrive in whatever order the network delivers them.
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

    /// Spawn the remote call of a validated action
    pub fn spawn_remote_call(&mut self, dispatcher: Dispatcher, call: PreparedCall) -> TaskId {
        let description = call.request.to_string();
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let completion = dispatcher.execute(call).await;
            let _ = action_sender.send(Action::RemoteCompleted(completion));
        });

        self.track(handle, description)
    }

    /// Spawn a shard archive download into `destination`
    pub fn spawn_download(
        &mut self,
        remote: Arc<dyn RemoteCall>,
        shard: Shard,
        path: String,
        destination: PathBuf,
    ) -> TaskId {
        let description = format!("Download {}", path);
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let result = match remote.download(&path).await {
                Ok(bytes) => tokio::fs::write(&destination, bytes)
                    .await
                    .map(|()| destination.clone())
                    .map_err(|e| format!("{}: {}", destination.display(), e)),
                Err(e) => Err(e.to_string()),
            };
            let _ = action_sender.send(Action::DownloadCompleted { shard, result });
        });

        self.track(handle, description)
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<BackgroundTask> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| self.tasks.remove(&task_id))
            .collect()
    }

    /// Descriptions of the calls still in flight, oldest first
    pub fn in_flight(&self) -> Vec<&str> {
        let mut tasks: Vec<&BackgroundTask> = self.tasks.values().collect();
        tasks.sort_by_key(|task| task.id);
        tasks.iter().map(|task| task.description.as_str()).collect()
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
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
