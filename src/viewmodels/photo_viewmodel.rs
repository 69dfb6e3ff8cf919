use crate::models::{Photo, PhotoForm, ValidationError};
use crate::services::preview::PreviewProvider;
use crate::services::transport::Transport;
use crate::state::{PhotoFilter, UploadStaging};
use crate::viewmodels::entity_viewmodel::{EntityViewModel, SubmitError};

pub type PhotoViewModel<T> = EntityViewModel<Photo, T>;

impl<T: Transport> EntityViewModel<Photo, T> {
    pub async fn create<P: PreviewProvider>(
        &self,
        form: &PhotoForm,
        staging: &mut UploadStaging<P>,
    ) -> Result<Photo, SubmitError> {
        form.validate()?;
        let files = staging.to_submission_list();
        if files.is_empty() {
            return Err(ValidationError::NoImages.into());
        }

        let created = self.run_create(self.service().create(form, files)).await?;
        staging.reset();
        Ok(created)
    }

    pub async fn update<P: PreviewProvider>(
        &self,
        id: &str,
        form: &PhotoForm,
        staging: &UploadStaging<P>,
    ) -> Result<Photo, SubmitError> {
        form.validate()?;
        self.run_update(self.service().update(id, form, staging.to_submission_list())).await
    }

    /// Photos table contents under the current filter
    pub fn filtered(&self, filter: &PhotoFilter) -> Vec<Photo> {
        self.store()
            .with(|state| filter.apply(&state.items).into_iter().cloned().collect())
    }
}
