//! Page controller
//!
//! Keeps a view in sync with the name store and handles the one write a user
//! can make. Each user action runs as a single sequential task.

use std::sync::Arc;
use std::time::Duration;

use crate::client::{AddedName, NamesApi};
use crate::error::ClientError;
use crate::view::PageView;

/// How long the success notice stays up
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

pub const EMPTY_NAME_MESSAGE: &str = "Please enter a name";

pub const LOAD_ERROR_MESSAGE: &str = "Error loading names. Please refresh the page.";

/// What a submit attempt ended in
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was sent
    Empty,
    Added(AddedName),
    Failed(ClientError),
}

/// Marks the view busy for as long as it lives
///
/// Dropping the guard re-enables the input and gives it focus, so every exit
/// from a submit releases it.
struct BusyGuard<'a, V: PageView> {
    view: &'a V,
}

impl<'a, V: PageView> BusyGuard<'a, V> {
    fn acquire(view: &'a V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: PageView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
        self.view.focus_input();
    }
}

/// Controller binding a names API to a view
pub struct PageController<A, V>
where
    A: NamesApi,
    V: PageView,
{
    api: Arc<A>,
    view: V,
}

impl<A, V> PageController<A, V>
where
    A: NamesApi,
    V: PageView,
{
    pub fn new(api: Arc<A>, view: V) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch the roster and render it
    ///
    /// On failure the list is replaced by an inline error and the count is
    /// left as it was.
    pub async fn load(&self) -> Result<usize, ClientError> {
        match self.api.list_names().await {
            Ok(names) => {
                self.view.render_names(&names);
                self.view.render_count(names.len());
                Ok(names.len())
            }
            Err(e) => {
                tracing::warn!("Error loading names: {}", e);
                self.view.render_load_error(LOAD_ERROR_MESSAGE);
                Err(e)
            }
        }
    }

    /// Submit the raw input field value
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let name = raw.trim();
        if name.is_empty() {
            self.view.alert(EMPTY_NAME_MESSAGE);
            return SubmitOutcome::Empty;
        }

        let _busy = BusyGuard::acquire(&self.view);

        match self.api.add_name(name).await {
            Ok(added) => {
                self.view.clear_input();
                if let Err(e) = self.load().await {
                    tracing::debug!("Reload after submit failed: {}", e);
                }
                self.view.show_notice(
                    &format!("Name \"{}\" added successfully!", added.name),
                    NOTICE_DURATION,
                );
                SubmitOutcome::Added(added)
            }
            Err(e) => {
                tracing::warn!("Error submitting name: {}", e);
                self.view.alert(&format!("Error submitting name: {}", e));
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Escape shortcut: empty the input and focus it
    pub fn clear_input(&self) {
        self.view.clear_input();
        self.view.focus_input();
    }

    /// Refresh shortcut: reload the roster without touching the input
    pub async fn refresh(&self) -> Result<usize, ClientError> {
        self.load().await
    }
}
