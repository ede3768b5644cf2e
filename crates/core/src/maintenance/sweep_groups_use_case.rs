use std::collections::HashSet;

use uuid::Uuid;

use crate::groups::domain::group::Group;
use crate::groups::domain::group_api::GroupApi;
use crate::persons::domain::person_api::PersonApi;
use crate::shared::api_error::ApiError;
use crate::shared::constants::LISTING_PAGE_SIZE;

/// Outcome of a sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepReport {
    pub groups_deleted: usize,
    pub persons_deleted: usize,
    /// Entities whose deletion failed; they are left in place.
    pub failures: usize,
}

/// Removes groups (and the persons listed in them) left behind by test
/// runs whose teardown never happened.
///
/// Listing failures abort the sweep; individual deletion failures are
/// logged and counted.
pub struct SweepGroupsUseCase<'a, A: GroupApi + PersonApi + ?Sized> {
    api: &'a A,
    names: HashSet<String>,
    page_size: u32,
}

impl<'a, A: GroupApi + PersonApi + ?Sized> SweepGroupsUseCase<'a, A> {
    pub fn new(api: &'a A, names: impl IntoIterator<Item = String>) -> Self {
        Self {
            api,
            names: names.into_iter().collect(),
            page_size: LISTING_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Groups whose name is one of the swept names.
    ///
    /// The whole listing is collected before anything is deleted, since
    /// deleting while paging would shift later pages.
    pub fn find_targets(&self) -> Result<Vec<Group>, ApiError> {
        let mut targets = Vec::new();
        let mut page = 1;
        loop {
            let listing = self.api.get_all_groups(page, self.page_size)?;
            let has_next = listing.has_next(self.page_size);
            targets.extend(
                listing
                    .items
                    .into_iter()
                    .filter(|g| self.names.contains(&g.name)),
            );
            if !has_next {
                break;
            }
            page += 1;
        }
        Ok(targets)
    }

    pub fn execute(&self) -> Result<SweepReport, ApiError> {
        let mut report = SweepReport::default();
        for group in self.find_targets()? {
            for person_id in self.member_ids(group.id)? {
                match self.api.delete_person(person_id) {
                    Ok(()) => report.persons_deleted += 1,
                    Err(e) => {
                        log::warn!("Failed to delete person {person_id}: {e}");
                        report.failures += 1;
                    }
                }
            }
            match self.api.delete_group(group.id) {
                Ok(()) => {
                    log::info!("Deleted group {} ({})", group.id, group.name);
                    report.groups_deleted += 1;
                }
                Err(e) => {
                    log::warn!("Failed to delete group {}: {e}", group.id);
                    report.failures += 1;
                }
            }
        }
        Ok(report)
    }

    fn member_ids(&self, group_id: Uuid) -> Result<Vec<Uuid>, ApiError> {
        let mut ids = Vec::new();
        let mut page = 1;
        loop {
            let listing = self
                .api
                .get_all_persons_by_group_id(page, self.page_size, group_id)?;
            let has_next = listing.has_next(self.page_size);
            ids.extend(listing.items.into_iter().map(|p| p.id));
            if !has_next {
                break;
            }
            page += 1;
        }
        Ok(ids)
    }
}
