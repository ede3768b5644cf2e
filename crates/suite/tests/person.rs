use facesdk_core::groups::domain::group::GroupToCreate;
use facesdk_core::groups::domain::group_api::GroupApi;
use facesdk_core::persons::domain::person::PersonFields;
use facesdk_core::persons::domain::person_api::PersonApi;
use facesdk_core::shared::constants::CONTENT_TYPE_JPEG;
use facesdk_core::shared::image_payload::ImagePayload;
use facesdk_suite::assertions::{expect_contains, expect_count, expect_eq, AssertionError};
use facesdk_suite::fixture::{Cleanup, GroupFixture, PersonFixture};
use facesdk_suite::paths::{FixturePaths, FACE1};
use facesdk_suite::service::{connect, description};

use crate::TestResult;

const GROUP_NAME: &str = "testGroup";
const SECOND_GROUP_NAME: &str = "secondTestGroup";
const DESCRIPTION: &str = "This is a test group";
const NAME_A: &str = "Person A";
const NAME_B: &str = "Person B";

fn group_fields() -> GroupToCreate {
    GroupToCreate::new(GROUP_NAME).with_metadata(description(DESCRIPTION))
}

fn person_fields() -> PersonFields {
    PersonFields::new(NAME_A).with_metadata(description(DESCRIPTION))
}

fn face1() -> Result<ImagePayload, Box<dyn std::error::Error>> {
    let bytes = FixturePaths::from_env().read(FACE1)?;
    Ok(ImagePayload::from_bytes(bytes, CONTENT_TYPE_JPEG))
}

#[test]
#[ignore = "requires a running face recognition service"]
fn test_create_person() -> TestResult {
    let sdk = connect()?;
    let fixture = PersonFixture::create(&sdk, &group_fields(), person_fields())?;
    let person = fixture.person();

    expect_eq("name", NAME_A, person.name.as_str())?;
    expect_eq("groups[0]", Some(&fixture.group_id()), person.groups.first())?;
    expect_eq(
        "metadata.description",
        Some(DESCRIPTION),
        person.metadata.get("description").and_then(|v| v.as_str()),
    )?;
    Ok(())
}

#[test]
#[ignore = "requires a running face recognition service"]
fn test_get_person() -> TestResult {
    let sdk = connect()?;
    let fixture = PersonFixture::create(&sdk, &group_fields(), person_fields())?;

    let fetched = sdk.get_person(fixture.id())?;

    expect_eq("id", fixture.id(), fetched.id)?;
    Ok(())
}

#[test]
#[ignore = "requires a running face recognition service"]
fn test_update_person() -> TestResult {
    let sdk = connect()?;
    let fixture = PersonFixture::create(&sdk, &group_fields(), person_fields())?;

    sdk.update_person(
        fixture.id(),
        &PersonFields::new(NAME_B).with_metadata(description("upd")),
    )?;
    let fetched = sdk.get_person(fixture.id())?;

    expect_eq("name", NAME_B, fetched.name.as_str())?;
    expect_eq(
        "metadata.description",
        Some("upd"),
        fetched.metadata.get("description").and_then(|v| v.as_str()),
    )?;
    Ok(())
}

#[test]
#[ignore = "requires a running face recognition service"]
fn test_delete_person_empties_group() -> TestResult {
    let sdk = connect()?;
    let group = GroupFixture::create(&sdk, &group_fields())?;
    let mut cleanup = Cleanup::new(&sdk);
    let person = sdk.create_person(&person_fields().in_groups([group.id()]))?;
    cleanup.track_person(person.id);

    sdk.delete_person(person.id)?;
    cleanup.forget_person(person.id);
    let listing = sdk.get_all_persons_by_group_id(1, 1, group.id())?;

    expect_count("items", 0, listing.items.len())?;
    Ok(())
}

#[test]
#[ignore = "requires a running face recognition service"]
fn test_get_person_images() -> TestResult {
    let sdk = connect()?;
    let fixture = PersonFixture::with_image(&sdk, &group_fields(), person_fields(), face1()?)?;

    let listing = sdk.get_all_images_by_person_id(1, 1, fixture.id())?;

    let image = listing.items.first().ok_or(AssertionError::Empty("items"))?;
    match image.path.as_deref() {
        Some(path) if !path.is_empty() => Ok(()),
        _ => Err(AssertionError::Missing("items[0].path").into()),
    }
}

#[test]
#[ignore = "requires a running face recognition service"]
fn test_get_all_groups_of_person() -> TestResult {
    let sdk = connect()?;
    let first = GroupFixture::create(&sdk, &group_fields())?;
    let second = GroupFixture::create(
        &sdk,
        &GroupToCreate::new(SECOND_GROUP_NAME).with_metadata(description(DESCRIPTION)),
    )?;
    let mut cleanup = Cleanup::new(&sdk);
    let person = sdk.create_person(&person_fields().in_groups([first.id(), second.id()]))?;
    cleanup.track_person(person.id);

    let listing = sdk.get_all_groups_by_person_id(1, 2, person.id)?;
    let names: Vec<String> = listing.items.into_iter().map(|g| g.name).collect();

    expect_count("items", 2, names.len())?;
    expect_contains("group names", &names, &GROUP_NAME.to_string())?;
    expect_contains("group names", &names, &SECOND_GROUP_NAME.to_string())?;
    Ok(())
}

#[test]
#[ignore = "requires a running face recognition service"]
fn test_add_image_to_person() -> TestResult {
    let sdk = connect()?;
    let mut fixture = PersonFixture::create(&sdk, &group_fields(), person_fields())?;

    let image = fixture.enroll_image(face1()?)?;
    expect_eq(
        "contentType",
        Some(CONTENT_TYPE_JPEG),
        image.content_type.as_deref(),
    )?;

    let fetched = sdk.get_person(fixture.id())?;
    expect_eq("id", fixture.id(), fetched.id)?;
    Ok(())
}

#[test]
#[ignore = "requires a running face recognition service"]
fn test_stored_image_can_be_downloaded_and_deleted() -> TestResult {
    let sdk = connect()?;
    let fixture = PersonFixture::with_image(&sdk, &group_fields(), person_fields(), face1()?)?;
    let image_id = fixture
        .image()
        .map(|image| image.id)
        .ok_or(AssertionError::Missing("image"))?;

    let bytes = sdk.get_image_of_person(fixture.id(), image_id)?;
    if bytes.is_empty() {
        return Err(AssertionError::Empty("image content").into());
    }

    sdk.delete_image_of_person(fixture.id(), image_id)?;
    let listing = sdk.get_all_images_by_person_id(1, 10, fixture.id())?;
    expect_eq(
        "deleted image listed",
        false,
        listing.items.iter().any(|i| i.id == image_id),
    )?;
    Ok(())
}

#[test]
#[ignore = "requires a running face recognition service"]
fn test_create_person_without_metadata() -> TestResult {
    let sdk = connect()?;
    let group = GroupFixture::create(&sdk, &group_fields())?;
    let mut cleanup = Cleanup::new(&sdk);

    let person = sdk.create_person(&PersonFields::new(NAME_A).in_groups([group.id()]))?;
    cleanup.track_person(person.id);

    sdk.delete_person(person.id)?;
    cleanup.forget_person(person.id);
    Ok(())
}
