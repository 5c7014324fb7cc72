//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn alice() -> UserProfile {
    UserProfile::try_from_parts("Alice", "a@x.com", 30).expect("valid profile")
}

#[rstest]
fn rejects_empty_name() {
    assert_eq!(UserName::new(""), Err(UserValidationError::EmptyName));
}

#[rstest]
#[case(" Ada Lovelace ")]
#[case(" ")]
#[case("\t\n")]
fn keeps_non_empty_names_verbatim(#[case] raw: &str) {
    let name = UserName::new(raw).expect("non-empty name");
    assert_eq!(name.as_ref(), raw);
}

#[rstest]
#[case("a@x.com")]
#[case("first.last+tag@sub.example.org")]
#[case("o'brien@example.ie")]
#[case("x@a-b.co")]
fn accepts_valid_emails(#[case] email: &str) {
    assert!(EmailAddress::new(email).is_ok(), "{email} should be accepted");
}

#[rstest]
#[case("")]
#[case("plainaddress")]
#[case("@no-local.com")]
#[case("no-domain@")]
#[case("no-tld@localhost")]
#[case("two@@x.com")]
#[case(".leading@x.com")]
#[case("trailing.@x.com")]
#[case("double..dot@x.com")]
#[case("spaces in@x.com")]
#[case("a@-bad.com")]
fn rejects_invalid_emails(#[case] email: &str) {
    assert_eq!(
        EmailAddress::new(email),
        Err(UserValidationError::InvalidEmail),
        "{email} should be rejected"
    );
}

#[rstest]
fn rejects_overlong_email() {
    let local = "a".repeat(64);
    let domain = format!("{}.com", "b".repeat(EMAIL_MAX_LEN));
    let result = EmailAddress::new(format!("{local}@{domain}"));
    assert_eq!(result, Err(UserValidationError::InvalidEmail));
}

#[rstest]
fn normalises_domain_case_only() {
    let email = EmailAddress::new("  Ada.Lovelace@Example.COM ").expect("valid email");
    assert_eq!(email.as_ref(), "Ada.Lovelace@example.com");
    assert_eq!(
        email,
        EmailAddress::new("Ada.Lovelace@example.com").expect("valid email")
    );
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::MIN)]
fn rejects_non_positive_ages(#[case] age: i64) {
    assert_eq!(Age::new(age), Err(UserValidationError::NonPositiveAge));
}

#[rstest]
fn rejects_ages_beyond_u32() {
    let too_old = i64::from(u32::MAX) + 1;
    assert_eq!(
        Age::new(too_old),
        Err(UserValidationError::AgeOutOfRange { max: u32::MAX })
    );
}

#[rstest]
#[case(1)]
#[case(30)]
fn accepts_positive_ages(#[case] age: i64) {
    let parsed = Age::new(age).expect("positive age");
    assert_eq!(i64::from(parsed.get()), age);
}

#[rstest]
fn user_id_rejects_empty_and_padded_values() {
    assert_eq!(UserId::new(""), Err(UserValidationError::EmptyId));
    assert_eq!(
        UserId::new(format!(" {VALID_ID}")),
        Err(UserValidationError::InvalidId)
    );
    assert_eq!(UserId::new("nope"), Err(UserValidationError::InvalidId));
}

#[rstest]
fn user_id_round_trips_display() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
}

#[rstest]
fn random_ids_differ() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
fn profile_reports_first_failing_field() {
    let result = UserProfile::try_from_parts("", "bad", 0);
    assert_eq!(result, Err(UserValidationError::EmptyName));

    let result = UserProfile::try_from_parts("Bob", "bad", 0);
    assert_eq!(result, Err(UserValidationError::InvalidEmail));

    let result = UserProfile::try_from_parts("Bob", "b@x.com", 0);
    assert_eq!(result, Err(UserValidationError::NonPositiveAge));
}

#[rstest]
fn serialises_flat_record(alice: UserProfile) {
    let id = UserId::new(VALID_ID).expect("valid id");
    let user = User::new(id, alice);

    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({ "id": VALID_ID, "name": "Alice", "email": "a@x.com", "age": 30 })
    );
}

#[rstest]
fn deserialising_validates_fields() {
    let payload = json!({ "id": VALID_ID, "name": "Alice", "email": "a@x.com", "age": -3 });
    let result: Result<User, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
fn deserialising_rejects_unknown_fields() {
    let payload = json!({
        "id": VALID_ID,
        "name": "Alice",
        "email": "a@x.com",
        "age": 30,
        "admin": true,
    });
    let result: Result<User, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
fn accessors_expose_profile(alice: UserProfile) {
    let user = User::new(UserId::random(), alice);
    assert_eq!(user.name().as_ref(), "Alice");
    assert_eq!(user.email().as_ref(), "a@x.com");
    assert_eq!(user.age().get(), 30);
}
