use swim_times::{
    error::SwimError,
    event::{CourseType, EventCode, Gender},
    import::{ImportError, ImportOptions, SwimmerImport, validate_import},
    time::Time,
};

fn load(raw: &str) -> SwimmerImport {
    serde_json::from_str(raw).expect("fixture should deserialize")
}

#[test]
fn valid_import() {
    let data = load(include_str!("fixtures/valid.json"));
    let plan = validate_import(&data, ImportOptions::default()).unwrap();

    assert!(plan.success);
    assert!(plan.errors.is_empty());
    assert_eq!(plan.swimmer.gender, Gender::Female);
    assert_eq!(plan.meets.len(), 2);
    assert_eq!(plan.times_count(), 3);

    let winter = &plan.meets[0];
    assert_eq!(winter.course_type, CourseType::Short);
    assert_eq!(winter.times[0].event, EventCode::Free50);
    assert_eq!(winter.times[0].time, Time(28_450));
    assert_eq!(winter.times[1].notes, "lane 4");

    assert_eq!(plan.skipped_times, 1);
    assert_eq!(
        plan.skipped_reason,
        ["Meet Winter Open (2026-01-15 to 2026-01-17): 1 duplicate event(s) skipped"]
    );

    let spring = &plan.meets[1];
    assert_eq!(spring.country, "");
    assert_eq!(spring.times[0].time, Time(151_500));
}

#[test]
fn invalid_meets_are_reported() {
    let data = load(include_str!("fixtures/partial.json"));
    let plan = validate_import(&data, ImportOptions::default()).unwrap();

    assert!(plan.success);
    assert_eq!(plan.meets.len(), 1);
    assert_eq!(
        plan.errors,
        [
            "Meet 2 (Broken Meet) validation failed: course_type must be '25m' or '50m', got: 33m",
            "Meet 3 (Late Entry) validation failed: time 1 validation failed: event_date \
                2026-02-12 is outside meet date range (2026-02-10 to 2026-02-11)",
        ]
    );
}

#[test]
fn strict_import_rejects_invalid_meets() {
    let data = load(include_str!("fixtures/partial.json"));
    let err = validate_import(&data, ImportOptions { strict: true }).unwrap_err();

    assert!(matches!(
        err,
        SwimError::Import(ImportError::InvalidMeet { index: 2, .. })
    ));
}

#[test]
fn invalid_swimmer_rejects_import() {
    let mut data = load(include_str!("fixtures/valid.json"));
    data.swimmer.name.clear();

    let err = validate_import(&data, ImportOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Swimmer validation failed: swimmer name is required"
    );
}

#[test]
fn no_valid_meet_is_a_failure() {
    let mut data = load(include_str!("fixtures/partial.json"));
    data.meets.remove(0);

    let plan = validate_import(&data, ImportOptions::default()).unwrap();
    assert!(!plan.success);
    assert!(plan.meets.is_empty());
    assert_eq!(plan.errors.len(), 2);
    assert!(plan.errors[0].starts_with("Meet 1 (Broken Meet) validation failed:"));
}
