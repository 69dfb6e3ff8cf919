use crate::models::{Collection, CollectionForm, ValidationError};
use crate::services::preview::PreviewProvider;
use crate::services::transport::Transport;
use crate::state::UploadStaging;
use crate::viewmodels::entity_viewmodel::{EntityViewModel, SubmitError};

pub type CollectionViewModel<T> = EntityViewModel<Collection, T>;

impl<T: Transport> EntityViewModel<Collection, T> {
    /// Needs exactly one staged thumbnail
    pub async fn create<P: PreviewProvider>(
        &self,
        form: &CollectionForm,
        staging: &mut UploadStaging<P>,
    ) -> Result<Collection, SubmitError> {
        form.validate()?;
        let mut files = staging.to_submission_list();
        if files.len() > 1 {
            return Err(ValidationError::TooManyImages { max: 1 }.into());
        }
        let thumbnail = files.pop().ok_or(ValidationError::NoImages)?;

        let created = self.run_create(self.service().create(form, thumbnail)).await?;
        staging.reset();
        Ok(created)
    }

    /// Keeps the current thumbnail unless one new file is staged
    pub async fn update<P: PreviewProvider>(
        &self,
        id: &str,
        form: &CollectionForm,
        staging: &UploadStaging<P>,
    ) -> Result<Collection, SubmitError> {
        form.validate()?;
        let mut files = staging.to_submission_list();
        if files.len() > 1 {
            return Err(ValidationError::TooManyImages { max: 1 }.into());
        }
        self.run_update(self.service().update(id, form, files.pop())).await
    }
}
