//! Scoped remote entities for live tests.
//!
//! Creation goes through `?` and fails the test. Deletion happens in `Drop`,
//! so it also runs while a failing test unwinds; a failed deletion is logged
//! at warn and never panics.

use facesdk_core::groups::domain::group::{Group, GroupToCreate};
use facesdk_core::groups::domain::group_api::GroupApi;
use facesdk_core::persons::domain::person::{Person, PersonFields, PersonImage};
use facesdk_core::persons::domain::person_api::PersonApi;
use facesdk_core::shared::api_error::ApiError;
use facesdk_core::shared::image_payload::ImagePayload;
use uuid::Uuid;

/// A group that is deleted when the fixture goes out of scope.
pub struct GroupFixture<'a, A: GroupApi + ?Sized> {
    api: &'a A,
    group: Group,
}

impl<'a, A: GroupApi + ?Sized> GroupFixture<'a, A> {
    pub fn create(api: &'a A, fields: &GroupToCreate) -> Result<Self, ApiError> {
        let group = api.create_group(fields)?;
        log::debug!("Created fixture group {} ({})", group.id, group.name);
        Ok(Self { api, group })
    }

    pub fn id(&self) -> Uuid {
        self.group.id
    }

    /// The group as the service returned it on creation.
    pub fn group(&self) -> &Group {
        &self.group
    }
}

impl<A: GroupApi + ?Sized> Drop for GroupFixture<'_, A> {
    fn drop(&mut self) {
        release("group", self.group.id, self.api.delete_group(self.group.id));
    }
}

/// A person enrolled in its own fixture group, optionally with one image.
///
/// The person is deleted before the group.
pub struct PersonFixture<'a, A: GroupApi + PersonApi + ?Sized> {
    person: Person,
    image: Option<PersonImage>,
    group: GroupFixture<'a, A>,
}

impl<'a, A: GroupApi + PersonApi + ?Sized> PersonFixture<'a, A> {
    /// Creates the group, then the person as a member of it.
    ///
    /// If the person cannot be created the group is released before the
    /// error is returned.
    pub fn create(
        api: &'a A,
        group: &GroupToCreate,
        person: PersonFields,
    ) -> Result<Self, ApiError> {
        let group = GroupFixture::create(api, group)?;
        let person = api.create_person(&person.in_groups([group.id()]))?;
        log::debug!("Created fixture person {} ({})", person.id, person.name);
        Ok(Self {
            person,
            image: None,
            group,
        })
    }

    /// `create` followed by `enroll_image`.
    pub fn with_image(
        api: &'a A,
        group: &GroupToCreate,
        person: PersonFields,
        image: ImagePayload,
    ) -> Result<Self, ApiError> {
        let mut fixture = Self::create(api, group, person)?;
        fixture.enroll_image(image)?;
        Ok(fixture)
    }

    /// Uploads an image for the person. The stored image is deleted together
    /// with the person.
    pub fn enroll_image(&mut self, image: ImagePayload) -> Result<&PersonImage, ApiError> {
        let stored = self
            .group
            .api
            .add_image_to_person(self.person.id, &image.into())?;
        Ok(self.image.insert(stored))
    }

    pub fn id(&self) -> Uuid {
        self.person.id
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    /// The most recently enrolled image.
    pub fn image(&self) -> Option<&PersonImage> {
        self.image.as_ref()
    }

    pub fn group_id(&self) -> Uuid {
        self.group.id()
    }

    pub fn group(&self) -> &Group {
        self.group.group()
    }
}

impl<A: GroupApi + PersonApi + ?Sized> Drop for PersonFixture<'_, A> {
    fn drop(&mut self) {
        release(
            "person",
            self.person.id,
            self.group.api.delete_person(self.person.id),
        );
    }
}

/// Entities a test creates mid-flight, released together on drop.
pub struct Cleanup<'a, A: GroupApi + PersonApi + ?Sized> {
    api: &'a A,
    groups: Vec<Uuid>,
    persons: Vec<Uuid>,
}

impl<'a, A: GroupApi + PersonApi + ?Sized> Cleanup<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            groups: Vec::new(),
            persons: Vec::new(),
        }
    }

    pub fn track_group(&mut self, id: Uuid) -> Uuid {
        self.groups.push(id);
        id
    }

    pub fn track_person(&mut self, id: Uuid) -> Uuid {
        self.persons.push(id);
        id
    }

    /// Stops tracking a person the test already deleted itself.
    pub fn forget_person(&mut self, id: Uuid) {
        self.persons.retain(|p| *p != id);
    }

    pub fn forget_group(&mut self, id: Uuid) {
        self.groups.retain(|g| *g != id);
    }
}

impl<A: GroupApi + PersonApi + ?Sized> Drop for Cleanup<'_, A> {
    fn drop(&mut self) {
        for id in self.persons.drain(..) {
            release("person", id, self.api.delete_person(id));
        }
        for id in self.groups.drain(..) {
            release("group", id, self.api.delete_group(id));
        }
    }
}

fn release(kind: &str, id: Uuid, outcome: Result<(), ApiError>) {
    match outcome {
        Ok(()) => log::debug!("Deleted fixture {kind} {id}"),
        Err(e) => log::warn!("Failed to delete fixture {kind} {id}: {e}"),
    }
}
