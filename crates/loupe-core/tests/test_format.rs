use serde_json::json;

use loupe_core::format::{
    coerce_integer, format_coordinate, format_integer, format_percentage, format_score,
    format_yes_no, value_text, Formatter,
};

// ---------------------------------------------------------------------------
// Percentage
// ---------------------------------------------------------------------------

#[test]
fn test_percentage_truncates() {
    assert_eq!(format_percentage(&json!(42.9)), "42%");
    assert_eq!(format_percentage(&json!(99.999)), "99%");
    assert_eq!(format_percentage(&json!(7)), "7%");
}

#[test]
fn test_percentage_negative_truncates_toward_zero() {
    assert_eq!(format_percentage(&json!(-3.7)), "-3%");
}

#[test]
fn test_percentage_numeric_string() {
    assert_eq!(format_percentage(&json!("12.5abc")), "12%");
}

#[test]
fn test_percentage_non_numeric_is_nan() {
    assert_eq!(format_percentage(&json!("abc")), "NaN%");
    assert_eq!(format_percentage(&json!(null)), "NaN%");
    assert_eq!(format_percentage(&json!({"a": 1})), "NaN%");
    assert_eq!(format_percentage(&json!(true)), "NaN%");
}

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

#[test]
fn test_coordinate_first_pair() {
    assert_eq!(format_coordinate(&json!([[512.8, 300.2], [1, 2]])), "(512, 300)");
}

#[test]
fn test_coordinate_malformed() {
    assert_eq!(format_coordinate(&json!([])), "(NaN, NaN)");
    assert_eq!(format_coordinate(&json!([[3]])), "(3, NaN)");
    assert_eq!(format_coordinate(&json!(5)), "(NaN, NaN)");
}

// ---------------------------------------------------------------------------
// Yes / No
// ---------------------------------------------------------------------------

#[test]
fn test_yes_no_truthiness() {
    assert_eq!(format_yes_no(&json!(true)), "Yes");
    assert_eq!(format_yes_no(&json!(1)), "Yes");
    assert_eq!(format_yes_no(&json!("x")), "Yes");
    assert_eq!(format_yes_no(&json!([])), "Yes");

    assert_eq!(format_yes_no(&json!(false)), "No");
    assert_eq!(format_yes_no(&json!(0)), "No");
    assert_eq!(format_yes_no(&json!(0.0)), "No");
    assert_eq!(format_yes_no(&json!("")), "No");
    assert_eq!(format_yes_no(&json!(null)), "No");
}

// ---------------------------------------------------------------------------
// Integer coercion
// ---------------------------------------------------------------------------

#[test]
fn test_integer_formatter() {
    assert_eq!(format_integer(&json!(13.99)), "13");
    assert_eq!(format_integer(&json!("  -8 units")), "-8");
    assert_eq!(format_integer(&json!("-")), "NaN");
}

#[test]
fn test_coerce_integer_arrays_use_joined_text() {
    assert_eq!(coerce_integer(&json!([7, 8])), Some(7.0));
    assert_eq!(coerce_integer(&json!([[2.5], 1])), Some(2.0));
    assert_eq!(coerce_integer(&json!([])), None);
}

#[test]
fn test_integer_beyond_i64_range_keeps_magnitude() {
    assert_eq!(format_integer(&json!(1e20)), "100000000000000000000");
    assert_eq!(format_percentage(&json!(-1e20)), "-100000000000000000000%");
    assert_eq!(
        format_percentage(&json!("99999999999999999999")),
        "100000000000000000000%"
    );
    assert_eq!(coerce_integer(&json!("123456789012345678901x")), Some(123456789012345678901.0));
}

#[test]
fn test_formatter_enum_dispatches() {
    assert_eq!(Formatter::Percentage.apply(&json!(42.9)), "42%");
    assert_eq!(Formatter::YesNo.apply(&json!(false)), "No");
    assert_eq!(Formatter::Integer.apply(&json!(3.2)), "3");
    assert_eq!(Formatter::Coordinate.apply(&json!([[1, 2]])), "(1, 2)");
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

#[test]
fn test_score_as_percentage() {
    assert_eq!(format_score(0.8), "80%");
    assert_eq!(format_score(0.95), "95%");
    assert_eq!(format_score(f64::NAN), "NaN%");
}

#[test]
fn test_value_text() {
    assert_eq!(value_text(&json!("caption")), "caption");
    assert_eq!(value_text(&json!(42)), "42");
    assert_eq!(value_text(&json!([1, 2])), "[1,2]");
}
