use uuid::Uuid;

use crate::groups::domain::group::GroupPage;
use crate::persons::domain::person::{ImagePage, Person, PersonFields, PersonImage};
use crate::shared::api_error::ApiError;
use crate::shared::image_payload::ImageFields;

/// Person CRUD, enrolled images and group associations. Pages are 1-based.
pub trait PersonApi {
    fn create_person(&self, person: &PersonFields) -> Result<Person, ApiError>;

    fn get_person(&self, person_id: Uuid) -> Result<Person, ApiError>;

    fn update_person(&self, person_id: Uuid, person: &PersonFields) -> Result<(), ApiError>;

    fn delete_person(&self, person_id: Uuid) -> Result<(), ApiError>;

    fn add_image_to_person(
        &self,
        person_id: Uuid,
        image: &ImageFields,
    ) -> Result<PersonImage, ApiError>;

    fn get_all_images_by_person_id(
        &self,
        page: u32,
        size: u32,
        person_id: Uuid,
    ) -> Result<ImagePage, ApiError>;

    /// Raw bytes of a stored image.
    fn get_image_of_person(&self, person_id: Uuid, image_id: Uuid) -> Result<Vec<u8>, ApiError>;

    fn delete_image_of_person(&self, person_id: Uuid, image_id: Uuid) -> Result<(), ApiError>;

    fn get_all_groups_by_person_id(
        &self,
        page: u32,
        size: u32,
        person_id: Uuid,
    ) -> Result<GroupPage, ApiError>;
}
