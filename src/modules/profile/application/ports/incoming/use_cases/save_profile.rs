use async_trait::async_trait;

use crate::modules::admin::application::save_workflow::{SaveError, SaveOutcome};
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::forms::ProfileForm;

/// Admin save of a profile form: validate, upload the photo, persist.
/// A newly created profile always ends up with its section visibility row.
#[async_trait]
pub trait SaveProfileUseCase: Send + Sync {
    async fn create(&self, form: ProfileForm) -> Result<SaveOutcome<Profile>, SaveError>;

    async fn update(&self, id: i32, form: ProfileForm) -> Result<SaveOutcome<Profile>, SaveError>;
}
