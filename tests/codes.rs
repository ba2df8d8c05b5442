#![forbid(unsafe_code)]
use rosterly::ShiftCode;

#[test]
fn empty_and_blank_cells_mean_no_override() {
    assert_eq!(ShiftCode::normalize(""), None);
    assert_eq!(ShiftCode::normalize("   "), None);
    assert_eq!(ShiftCode::normalize("\t \n"), None);
}

#[test]
fn known_variants_map_to_canonical_forms() {
    let cases = [
        ("a", ShiftCode::A),
        (" B ", ShiftCode::B),
        ("g", ShiftCode::G),
        ("wo", ShiftCode::WeekOff),
        ("WEEKOFF", ShiftCode::WeekOff),
        ("week-off", ShiftCode::WeekOff),
        ("off", ShiftCode::WeekOff),
        ("Holiday", ShiftCode::Holiday),
        ("ho", ShiftCode::Holiday),
        ("co-ho", ShiftCode::CompOffHoliday),
        ("COHO", ShiftCode::CompOffHoliday),
        ("co - ho", ShiftCode::CompOffHoliday),
        ("leave", ShiftCode::Leave),
        ("ad-leave", ShiftCode::AdLeave),
        ("AD LEAVE", ShiftCode::AdLeave),
    ];
    for (raw, expected) in cases {
        assert_eq!(ShiftCode::normalize(raw), Some(expected), "raw: {raw:?}");
    }
}

#[test]
fn unknown_codes_pass_through_as_custom() {
    assert_eq!(
        ShiftCode::normalize(" sl "),
        Some(ShiftCode::Custom("SL".into()))
    );
    assert_eq!(
        ShiftCode::normalize("CL"),
        Some(ShiftCode::Custom("CL".into()))
    );
}

#[test]
fn normalize_is_idempotent_over_the_whole_vocabulary() {
    let raws = [
        "A", "b", " C", "g", "WO", "weekoff", "OFF", "HO", "holiday", "CO-HO", "coho", "Leave",
        "LEAVE", "AD-Leave", "adleave", "SL", " custom code ",
    ];
    for raw in raws {
        let once = ShiftCode::normalize(raw).unwrap();
        let twice = ShiftCode::normalize(once.as_str()).unwrap();
        assert_eq!(once, twice, "raw: {raw:?}");
    }
}

#[test]
fn serde_round_trips_as_plain_strings() {
    let codes = vec![
        ShiftCode::A,
        ShiftCode::CompOffHoliday,
        ShiftCode::AdLeave,
        ShiftCode::Custom("SL".into()),
    ];
    let json = serde_json::to_string(&codes).unwrap();
    assert_eq!(json, r#"["A","CO-HO","AD-Leave","SL"]"#);
    let back: Vec<ShiftCode> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, codes);
}
