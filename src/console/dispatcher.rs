//! Action dispatcher: validate, issue one remote call, apply the outcome.
//!
//! Dispatching is split in three steps so a front-end can run the network
//! call on a background task:
//!
//! 1. [`Dispatcher::begin`] validates locally and shows either the validation
//!    message or the progress line. Nothing touches the network here.
//! 2. [`Dispatcher::execute`] awaits the single remote call.
//! 3. [`Dispatcher::apply`] routes the outcome into the [`PanelState`].
//!
//! Completions are applied in whatever order they arrive. There is no request
//! id, so two overlapping calls race and the later completion wins the
//! display.

use std::sync::Arc;

use crate::console::action::{Action, ListingTarget, PreparedCall};
use crate::console::message::Payload;
use crate::console::resolver::{BackupLinks, BackupListing, DeploymentContext};
use crate::console::state::PanelState;
use crate::remote::{RemoteCall, RemoteError, RemoteResponse};

/// How download links pick their base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    /// Explicit base path; `None` falls back to classifying `origin`.
    pub base_path: Option<String>,
    /// Origin the panel talks to (the configured service root).
    pub origin: String,
}

impl LinkSettings {
    pub fn new(base_path: Option<String>, origin: impl Into<String>) -> Self {
        Self {
            base_path,
            origin: origin.into(),
        }
    }

    /// Deployment context as of now.
    pub fn context(&self) -> DeploymentContext {
        DeploymentContext::resolve(self.base_path.as_deref(), &self.origin)
    }
}

/// A finished remote call, waiting to be applied.
#[derive(Debug, Clone)]
pub struct Completion {
    pub call: PreparedCall,
    pub outcome: Result<RemoteResponse, RemoteError>,
}

#[derive(Clone)]
pub struct Dispatcher {
    remote: Arc<dyn RemoteCall>,
    links: LinkSettings,
}

impl Dispatcher {
    pub fn new(remote: Arc<dyn RemoteCall>, links: LinkSettings) -> Self {
        Self { remote, links }
    }

    pub fn remote(&self) -> Arc<dyn RemoteCall> {
        Arc::clone(&self.remote)
    }

    /// Validate `action`. On failure the local message is shown and `None` is
    /// returned; on success the progress line (if any) is shown.
    pub fn begin(&self, action: &Action, state: &mut PanelState) -> Option<PreparedCall> {
        match action.prepare() {
            Ok(call) => {
                log::info!("Dispatch: {} -> {}", action, call.request);
                if let Some(progress) = call.progress {
                    state.show(progress);
                }
                Some(call)
            }
            Err(e) => {
                log::warn!("Dispatch: {} rejected locally: {}", action.label(), e);
                state.show(e.to_string());
                None
            }
        }
    }

    /// Perform the remote call for a prepared action.
    pub async fn execute(&self, call: PreparedCall) -> Completion {
        let outcome = self.remote.call(call.request.clone()).await;
        match &outcome {
            Ok(response) => log::info!("Remote: {} completed ({:?}, {} bytes)", call.request, response.kind, response.body.len()),
            Err(e) => log::warn!("Remote: {} failed: {}", call.request, e),
        }
        Completion { call, outcome }
    }

    /// Route a completion into the panel state.
    pub fn apply(&self, completion: Completion, state: &mut PanelState) {
        let Completion { call, outcome } = completion;
        match call.listing {
            Some(target) => self.apply_listing(&target, outcome, state),
            None => match outcome {
                Ok(response) => state.show(response),
                Err(e) => state.show(Payload::from(e)),
            },
        }
    }

    fn apply_listing(&self, target: &ListingTarget, outcome: Result<RemoteResponse, RemoteError>, state: &mut PanelState) {
        let (listing, error) = match outcome {
            Ok(response) => (BackupListing::from_body(&response.body), None),
            Err(e) => (BackupListing::ListingFailed(e.clone()), Some(e)),
        };
        self.resolve_links(target, listing, state);
        if let Some(e) = error {
            state.show(Payload::from(e));
        }
    }

    /// Materialize the seven links for a listing and store both on the state.
    pub fn resolve_links(&self, target: &ListingTarget, listing: BackupListing, state: &mut PanelState) {
        let context = self.links.context();
        state.links = BackupLinks::resolve(&listing, &target.app_name, &target.date, &context);
        log::info!(
            "Backups: {} item(s) for '{}' on '{}', base '{}'",
            listing.len(),
            target.app_name,
            target.date,
            context.base_path()
        );
        state.listing = Some(listing);
        state.listing_target = Some(target.clone());
    }

    /// Validate, call and apply in one go.
    pub async fn dispatch(&self, action: &Action, state: &mut PanelState) {
        if let Some(call) = self.begin(action, state) {
            let completion = self.execute(call).await;
            self.apply(completion, state);
        }
    }
}
