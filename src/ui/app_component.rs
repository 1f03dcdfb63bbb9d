use crate::console::resolver::download_file_name;
use crate::console::PanelState;
use crate::constants::{MSG_DOWNLOAD_FAILED, MSG_DOWNLOAD_SAVED, MSG_NO_BACKUP_SELECTED};
use crate::logger::Logger;
use crate::ui::components::{DialogComponent, FormComponent, LinksComponent, MessageComponent, StatusBar};
use crate::ui::core::{Action, AppContext, Component, DialogType, EventType, Focus, ScrollDirection, TaskManager};
use crate::ui::layout::LayoutManager;
use crate::ui::components::links_component::LINKS_HEIGHT;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    form: FormComponent,
    message: MessageComponent,
    links: LinksComponent,
    dialog: DialogComponent,

    // Panel state mutated by completions
    state: PanelState,

    // Services
    context: AppContext,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(context: AppContext) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            form: FormComponent::new(&context.initial_date),
            message: MessageComponent::new(),
            links: LinksComponent::new(context.service_root.clone()),
            dialog: DialogComponent::new(context.logger.clone()),
            state: PanelState::new(),
            context,
            task_manager,
            background_action_rx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    fn logger(&self) -> &Logger {
        &self.context.logger
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Update all components with current state
    fn sync_component_data(&mut self) {
        self.message
            .update_data(self.state.current_message().cloned(), self.task_manager.task_count());
        self.links
            .update_data(self.state.links.clone(), self.state.reported_archives().to_vec());
        self.links.focused = self.form.focus == Focus::Links;
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.logger().log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('g') if ctrl => Action::ShowDialog(DialogType::Logs),
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::F(5) => Action::Dispatch(crate::console::Action::Status),
            KeyCode::F(6) => Action::Dispatch(crate::console::Action::Start),
            KeyCode::F(7) => Action::Dispatch(crate::console::Action::Stop),
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Esc => {
                self.logger().log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Mouse wheel: scrolls the open dialog, otherwise moves the link selection
    fn scroll(&mut self, direction: ScrollDirection) -> Action {
        match (self.dialog.is_visible(), direction) {
            (true, ScrollDirection::Up) => Action::DialogScrollUp,
            (true, ScrollDirection::Down) => Action::DialogScrollDown,
            (false, ScrollDirection::Up) => self.links.handle_key_events(KeyEvent::from(KeyCode::Up)),
            (false, ScrollDirection::Down) => self.links.handle_key_events(KeyEvent::from(KeyCode::Down)),
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Dispatch(operator_action) => {
                self.logger().log(format!("Action: {}", operator_action));
                if let Some(call) = self.context.dispatcher.begin(&operator_action, &mut self.state) {
                    let task_id = self
                        .task_manager
                        .spawn_remote_call(self.context.dispatcher.clone(), call);
                    self.logger()
                        .log(format!("Background: spawned task {} for {}", task_id, operator_action.label()));
                }
                Action::None
            }
            Action::RemoteCompleted(completion) => {
                self.logger().log(format!("Background: {} finished", completion.call.request));
                self.context.dispatcher.apply(completion, &mut self.state);
                Action::None
            }
            Action::Download(shard) => {
                let link = self.state.links.get(shard).clone();
                match self.state.listing_target.clone() {
                    Some(target) if !link.is_cleared() => {
                        let destination = self
                            .context
                            .download_dir
                            .join(download_file_name(&target.app_name, shard, &target.date));
                        self.logger()
                            .log(format!("Download: {} -> {}", link.url, destination.display()));
                        self.state.show(format!("Downloading {} ...", link.label));
                        self.task_manager
                            .spawn_download(self.context.dispatcher.remote(), shard, link.url, destination);
                    }
                    _ => {
                        self.logger().log(format!("Download: {} has no link", shard));
                        self.state.show(MSG_NO_BACKUP_SELECTED);
                    }
                }
                Action::None
            }
            Action::DownloadCompleted { shard, result } => {
                match result {
                    Ok(path) => self
                        .state
                        .show(format!("{} {}.zip to {}", MSG_DOWNLOAD_SAVED, shard, path.display())),
                    Err(e) => self.state.show(format!("{} ({}.zip): {}", MSG_DOWNLOAD_FAILED, shard, e)),
                }
                Action::None
            }
            Action::FocusNext => {
                self.form.focus = self.form.focus.next();
                Action::None
            }
            Action::FocusPrevious => {
                self.form.focus = self.form.focus.previous();
                Action::None
            }
            // Pass through other actions
            other => other,
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            self.logger()
                .log(format!("Background: cleaned up {} finished tasks", finished.len()));
        }

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    self.dialog.handle_key_events(key)
                } else {
                    let global_action = self.handle_global_key(key);
                    if !matches!(global_action, Action::None) {
                        global_action
                    } else if self.form.focus == Focus::Links {
                        self.links.handle_key_events(key)
                    } else {
                        self.form.handle_key_events(key)
                    }
                }
            }
            EventType::Scroll(direction) => self.scroll(direction),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
        self.sync_component_data();

        Ok(())
    }

    /// Apply a background action and refresh components
    pub fn apply_background_action(&mut self, action: Action) -> Action {
        let action = self.update(action);
        let result = self.handle_app_action(action);
        self.sync_component_data();
        result
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Focus routing lives in handle_event
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dialog.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let main = LayoutManager::main_layout(rect);
        let top = LayoutManager::top_pane_layout(main[0]);
        let output = LayoutManager::output_pane_layout(top[1], LINKS_HEIGHT);

        self.form.render(f, top[0]);
        self.message.render(f, output[0]);
        self.links.render(f, output[1]);
        StatusBar::render(f, main[1], &self.task_manager.in_flight());

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
