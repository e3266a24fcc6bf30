use std::cell::Cell;

use log::{error, info, warn};

use crate::error::{RollbackOutcome, SubmitError};
use crate::event::Severity;
use crate::map::MapSurface;
use crate::state::EditorContext;

use super::backend::{ContributionBackend, FileUpload};
use super::diff::ContributionChanges;
use super::form::ContributionForm;
use super::model::{Record, User};

/// Clears the loading flag however the submission ends.
struct LoadingGuard<'a>(&'a Cell<bool>);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self(flag))
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Sends finished drawings to the contributions backend.
///
/// One submission at a time: while a call is in flight the host should
/// disable its submit control, and further attempts fail with
/// [`SubmitError::Busy`].
#[derive(Debug)]
pub struct SubmissionBridge<B> {
    backend: B,
    loading: Cell<bool>,
}

impl<B: ContributionBackend> SubmissionBridge<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            loading: Cell::new(false),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Validate, create or update, then attach files.
    ///
    /// On success the form is cleared, the editor exits to its idle state and
    /// the published record is returned. On failure the drawing is left as
    /// it was so the user can retry.
    pub async fn submit<M: MapSurface>(
        &self,
        editor: &mut EditorContext<M>,
        form: &mut ContributionForm,
        user: &User,
    ) -> Result<Record, SubmitError> {
        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            warn!("Submission ignored: another one is in flight");
            return Err(SubmitError::Busy);
        };

        let contribution = match form.to_contribution(user, editor.session().completed()) {
            Ok(contribution) => contribution,
            Err(err) => {
                warn!("Submission failed validation: {err}");
                editor
                    .events()
                    .toast("Submission Failed", &err.to_string(), Severity::Error);
                return Err(err.into());
            }
        };

        let response = match &form.preview_record {
            Some(preview) => {
                let changes = ContributionChanges::between(&contribution, preview, form.has_file_changes);
                if !changes.has_changes() {
                    info!("Record {} unchanged, nothing submitted", preview.id);
                    editor.events().toast(
                        "No Changes Detected",
                        "The current draft is identical to the record preview.",
                        Severity::Info,
                    );
                    return Err(SubmitError::NoChanges);
                }
                info!("Updating record {} ({:?})", preview.id, changes.changed_fields());
                self.backend
                    .update_contribution(preview.id, &contribution, user.id)
                    .await
            }
            None => self.backend.create_contribution(&contribution).await,
        };

        let record = match response {
            Ok(response) => Record::from_response(response),
            Err(err) => {
                error!("Contribution rejected by backend: {err:?}");
                editor
                    .events()
                    .toast("Submission Unsuccessful", &err.message(), Severity::Error);
                return Err(SubmitError::Backend(err));
            }
        };

        let upload = FileUpload {
            contribution: record.id,
            user: user.id,
            files: form.files.clone(),
        };
        if let Err(err) = self.backend.attach_files(&upload).await {
            error!("File upload for contribution {} failed: {err:?}", record.id);
            let rollback = if form.is_update() {
                RollbackOutcome::NotAttempted
            } else {
                self.roll_back(record.id).await
            };

            let mut message = err.message();
            if let RollbackOutcome::Failed(_) = rollback {
                message.push_str("\nThe new contribution could not be removed.");
            }
            editor
                .events()
                .toast("File Upload Failed", &message, Severity::Error);
            return Err(SubmitError::FileUpload {
                source: err,
                rollback,
            });
        }

        form.reset();
        editor.exit();
        info!("Contribution {} submitted", record.id);
        editor.events().toast(
            "Submission Successful",
            "Your contribution has been submitted successfully.",
            Severity::Success,
        );
        Ok(record)
    }

    async fn roll_back(&self, id: u64) -> RollbackOutcome {
        match self.backend.delete_contribution(id).await {
            Ok(()) => {
                info!("Rolled back contribution {id}");
                RollbackOutcome::RolledBack
            }
            Err(err) => {
                error!("Rollback of contribution {id} failed: {err:?}");
                RollbackOutcome::Failed(err.message())
            }
        }
    }
}
