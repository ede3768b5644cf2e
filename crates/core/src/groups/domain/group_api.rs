use uuid::Uuid;

use crate::groups::domain::group::{Group, GroupPage, GroupToCreate, UpdateGroup};
use crate::persons::domain::person::PersonPage;
use crate::shared::api_error::ApiError;

/// Group CRUD and membership. Pages are 1-based.
pub trait GroupApi {
    fn create_group(&self, group: &GroupToCreate) -> Result<Group, ApiError>;

    fn get_all_groups(&self, page: u32, size: u32) -> Result<GroupPage, ApiError>;

    fn get_group(&self, group_id: Uuid) -> Result<Group, ApiError>;

    fn update_group(&self, group_id: Uuid, group: &GroupToCreate) -> Result<(), ApiError>;

    fn delete_group(&self, group_id: Uuid) -> Result<(), ApiError>;

    fn get_all_persons_by_group_id(
        &self,
        page: u32,
        size: u32,
        group_id: Uuid,
    ) -> Result<PersonPage, ApiError>;

    /// Adds and removes persons in one batch.
    fn update_persons_in_group(&self, group_id: Uuid, update: &UpdateGroup)
        -> Result<(), ApiError>;
}
