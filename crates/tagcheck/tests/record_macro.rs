//! # `record!` Macro Tests

use tagcheck::{
    record, validate, Inspect, Kind, RuleError, UnexportedPolicy, ValidateError, Validator,
    ValidatorConfig, Visibility,
};

record! {
    #[derive(Debug, Clone)]
    pub struct Profile {
        pub id: String => "len:8",
        pub age: i32 => "min:18;max:120",
        pub status: String => "in:active,suspended",
        pub scores: Vec<i64> => "min:0;max:100",
        pub bio: String,
        secret: String => "len:64",
    }
}

fn profile() -> Profile {
    Profile {
        id: "abcd1234".into(),
        age: 40,
        status: "active".into(),
        scores: vec![10, 99, 100],
        bio: String::new(),
        secret: "short".into(),
    }
}

#[test]
fn test_generated_fields_follow_declaration_order() {
    let p = profile();
    let view = p.inspect();
    let fields = view.fields().unwrap();
    let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["id", "age", "status", "scores", "bio", "secret"]);
}

#[test]
fn test_generated_tags_and_visibility() {
    let p = profile();
    let view = p.inspect();
    let fields = view.fields().unwrap();

    assert_eq!(fields[0].tag(), "len:8");
    assert_eq!(fields[3].value().kind(), Kind::Seq);
    assert_eq!(fields[4].tag(), "");
    assert_eq!(fields[4].visibility(), Visibility::Exported);
    assert_eq!(fields[5].visibility(), Visibility::Unexported);
}

#[test]
fn test_valid_profile_passes_and_private_field_is_skipped() {
    // `secret` violates its tag but is unexported.
    assert_eq!(validate(&profile()), Ok(()));
}

#[test]
fn test_invalid_profile_reports_each_field() {
    let mut p = profile();
    p.id = "short".into();
    p.age = 12;
    p.status = "Active".into();
    p.scores = vec![50, 101, -1];

    let err = validate(&p).unwrap_err();
    let errors = err.errors().unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
    assert_eq!(fields, vec!["id", "age", "status", "scores", "scores"]);
    assert_eq!(errors.count_of(RuleError::ValidationFailed), 5);
}

#[test]
fn test_reject_policy_reports_tagged_private_field() {
    let validator = Validator::new(ValidatorConfig::default().with_unexported(UnexportedPolicy::Reject));
    let err = validator.validate(&profile()).unwrap_err();
    let errors = err.errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].field(), "secret");
    assert_eq!(errors.errors()[0].cause(), RuleError::UnexportedField);
}

record! {
    struct Minimal {
        pub(crate) count: u8 => "max:3"
    }
}

#[test]
fn test_restricted_visibility_counts_as_exported() {
    let err = validate(&Minimal { count: 4 }).unwrap_err();
    assert!(matches!(err, ValidateError::Invalid(ref e) if e.len() == 1));
}
