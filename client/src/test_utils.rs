//! Test utilities
//!
//! Manual mocks for the names API and a view that records what it was told.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::client::{AddedName, NamesApi};
use crate::error::ClientError;
use crate::view::PageView;

// ============================================================================
// Mock Names API
// ============================================================================

#[derive(Debug, Clone)]
enum AddFailure {
    Reject(String),
    Unreachable,
}

#[derive(Debug, Default)]
struct MockState {
    names: Vec<String>,
    submitted: Vec<String>,
    fail_list: bool,
    add_failure: Option<AddFailure>,
}

/// In-memory names API; clones share state
#[derive(Debug, Clone, Default)]
pub struct MockNamesApi {
    state: Arc<Mutex<MockState>>,
}

impl MockNamesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(names: &[&str]) -> Self {
        let api = Self::new();
        api.state.lock().unwrap().names = names.iter().map(|s| s.to_string()).collect();
        api
    }

    /// Listing fails with a 500
    pub fn failing_list(self) -> Self {
        self.state.lock().unwrap().fail_list = true;
        self
    }

    /// Submissions are rejected with a validation error
    pub fn rejecting(self, message: &str) -> Self {
        self.state.lock().unwrap().add_failure = Some(AddFailure::Reject(message.to_string()));
        self
    }

    /// Submissions fail as if the server could not be reached
    pub fn unreachable(self) -> Self {
        self.state.lock().unwrap().add_failure = Some(AddFailure::Unreachable);
        self
    }

    /// Simulate another client adding a name
    pub fn push_remote(&self, name: &str) {
        self.state.lock().unwrap().names.push(name.to_string());
    }

    /// Names passed to `add_name`, including rejected ones
    pub fn submitted(&self) -> Vec<String> {
        self.state.lock().unwrap().submitted.clone()
    }

    pub fn add_calls(&self) -> usize {
        self.state.lock().unwrap().submitted.len()
    }
}

#[async_trait]
impl NamesApi for MockNamesApi {
    async fn list_names(&self) -> Result<Vec<String>, ClientError> {
        let state = self.state.lock().unwrap();
        if state.fail_list {
            return Err(ClientError::Api {
                status: 500,
                message: "Internal server error".to_string(),
            });
        }
        Ok(state.names.clone())
    }

    async fn add_name(&self, name: &str) -> Result<AddedName, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.submitted.push(name.to_string());

        match state.add_failure.clone() {
            Some(AddFailure::Reject(message)) => Err(ClientError::Validation(message)),
            Some(AddFailure::Unreachable) => Err(ClientError::Api {
                status: 503,
                message: "Service unavailable".to_string(),
            }),
            None => {
                state.names.push(name.to_string());
                Ok(AddedName {
                    success: true,
                    name: name.to_string(),
                    total: state.names.len(),
                })
            }
        }
    }
}

// ============================================================================
// Recording View
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Names(Vec<String>),
    Count(usize),
    LoadError(String),
    Alert(String),
    Notice(String, Duration),
    Busy(bool),
    InputCleared,
    Focused,
}

#[derive(Debug, Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    fn record(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PageView for RecordingView {
    fn render_names(&self, names: &[String]) {
        self.record(ViewEvent::Names(names.to_vec()));
    }

    fn render_count(&self, count: usize) {
        self.record(ViewEvent::Count(count));
    }

    fn render_load_error(&self, message: &str) {
        self.record(ViewEvent::LoadError(message.to_string()));
    }

    fn alert(&self, message: &str) {
        self.record(ViewEvent::Alert(message.to_string()));
    }

    fn show_notice(&self, message: &str, duration: Duration) {
        self.record(ViewEvent::Notice(message.to_string(), duration));
    }

    fn set_busy(&self, busy: bool) {
        self.record(ViewEvent::Busy(busy));
    }

    fn clear_input(&self) {
        self.record(ViewEvent::InputCleared);
    }

    fn focus_input(&self) {
        self.record(ViewEvent::Focused);
    }
}
