//! State of the "create tag" form.

use crate::error::{AppError, Result as AppErrorResult};
use crate::flow::TagCreationFlow;

use std::future::Future;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use error_location::ErrorLocation;
use log::debug;
use tag_core::TagDraft;

/// Icon rendered inside the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitIcon {
    Check,
    /// Spinner shown while a submission is pending
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub icon: SubmitIcon,
    pub disabled: bool,
}

/// Snapshot of everything the form displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub name: String,
    /// Read-only, derived from `name`
    pub slug: String,
    /// Shown beneath the name field
    pub error: Option<String>,
    pub submit: SubmitButton,
    pub open: bool,
}

#[derive(Default)]
struct FormState {
    draft: TagDraft,
    error: Option<String>,
    /// Set once a submit has reached validation
    submitted: bool,
    closed: bool,
}

/// One instance of the create-tag form.
///
/// Safe to share between the input handler and whatever renders it. At most
/// one submission is in flight per instance.
pub struct CreateTagForm {
    state: Mutex<FormState>,
    submitting: AtomicBool,
    flow: Arc<TagCreationFlow>,
}

impl CreateTagForm {
    pub fn new(flow: Arc<TagCreationFlow>) -> Self {
        Self {
            state: Mutex::new(FormState::default()),
            submitting: AtomicBool::new(false),
            flow,
        }
    }

    /// Input change on the name field. Recomputes the slug immediately.
    ///
    /// The field error is left alone until the first submit; after that the
    /// name is re-validated on every change.
    pub fn on_name_change(&self, value: &str) {
        let mut state = self.lock_state();
        state.draft.set_name(value);
        if state.submitted {
            state.error = state
                .draft
                .validate()
                .err()
                .map(|e| e.message().to_string());
        }
    }

    pub fn name(&self) -> String {
        self.lock_state().draft.name().to_string()
    }

    pub fn slug(&self) -> String {
        self.lock_state().draft.slug().to_string()
    }

    pub fn error(&self) -> Option<String> {
        self.lock_state().error.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub fn is_open(&self) -> bool {
        !self.lock_state().closed
    }

    pub fn view(&self) -> FormView {
        let state = self.lock_state();
        let submitting = self.is_submitting();

        FormView {
            name: state.draft.name().to_string(),
            slug: state.draft.slug().to_string(),
            error: state.error.clone(),
            submit: SubmitButton {
                label: "Save",
                icon: if submitting {
                    SubmitIcon::Busy
                } else {
                    SubmitIcon::Check
                },
                disabled: submitting,
            },
            open: !state.closed,
        }
    }

    /// Validate and send the current name.
    ///
    /// A name under three characters stores the field error and returns it
    /// without touching the network.
    #[track_caller]
    pub fn submit(&self) -> impl Future<Output = AppErrorResult<()>> + Send + '_ {
        let location = ErrorLocation::from(Location::caller());

        async move {
            if self
                .submitting
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                debug!("Submit ignored: a submission is already pending");
                return Err(AppError::SubmissionPending { location });
            }
            let _pending = PendingGuard(&self.submitting);

            let name = {
                let mut state = self.lock_state();
                if state.closed {
                    return Err(AppError::FormClosed { location });
                }

                state.submitted = true;
                match state.draft.validate() {
                    Ok(name) => {
                        state.error = None;
                        name
                    }
                    Err(e) => {
                        state.error = Some(e.message().to_string());
                        return Err(e.into());
                    }
                }
            };

            self.flow.create_tag(&name).await
        }
    }

    /// Close the form. Nothing is sent; later submits are refused.
    pub fn cancel(&self) {
        self.lock_state().closed = true;
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the pending flag when the submission finishes, however it ends.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
