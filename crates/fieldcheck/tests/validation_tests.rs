//! End-to-end validation tests

use fieldcheck::{Constraint, ErrorType, EvaluationMode, Field, Validator, Value};

type Build = Box<dyn Fn(Field<'_>)>;

fn build(f: impl Fn(Field<'_>) + 'static) -> Build {
    Box::new(f)
}

fn single_message(value: impl Into<Value>, build: impl FnOnce(Field<'_>)) -> Option<String> {
    let mut v = Validator::new();
    build(v.field(value, "X"));
    v.validate(true).err().map(|errors| errors.to_string())
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn test_required() {
    assert!(single_message("", |f| {
        f.required(None);
    })
    .is_some());
    assert!(single_message("a", |f| {
        f.required(None);
    })
    .is_none());

    let mut v = Validator::new();
    v.field(0, "Age").required(None);
    assert_eq!(v.validate(true).unwrap_err().to_string(), "Age is required");

    let mut v = Validator::new();
    v.field(1, "Age").required(None);
    assert!(v.validate(true).is_ok());

    let mut v = Validator::new();
    v.field(true, "Flag").required(None);
    v.field(false, "Flag").required(None);
    assert!(v.validate(false).is_ok());

    let mut v = Validator::new();
    v.field(None::<String>, "Nickname").required(None);
    assert_eq!(v.validate(true).unwrap_err().to_string(), "Nickname is required");
}

#[test]
fn test_email() {
    let mut v = Validator::new();
    v.field("a@b.co", "Email").email(None);
    assert!(v.validate(true).is_ok());

    let mut v = Validator::new();
    v.field("a@b", "Email").email(None);
    assert_eq!(
        v.validate(true).unwrap_err().to_string(),
        "Email must be a valid email"
    );

    let mut v = Validator::new();
    v.field(42, "Email").email(None);
    let errors = v.validate(true).unwrap_err();
    assert_eq!(errors.as_slice()[0].error_type, ErrorType::TypeMismatch);
    assert_eq!(errors.to_string(), "Email must be a valid email");
}

#[test]
fn test_number() {
    let mut v = Validator::new();
    v.field(5, "Count").number(None);
    assert!(v.validate(true).is_ok());

    let mut v = Validator::new();
    v.field(5.0, "Count").number(None);
    assert_eq!(
        v.validate(true).unwrap_err().to_string(),
        "Count must be a number"
    );
}

#[test]
fn test_min_message_order() {
    let mut v = Validator::new();
    v.field(3, "Age").min(5, None);
    let message = v.validate(true).unwrap_err().to_string();
    let three = message.find('3').unwrap();
    let five = message.find('5').unwrap();
    assert!(three < five);
    assert_eq!(message, "3 cannot be less than 5");

    let mut v = Validator::new();
    v.field(6, "Age").min(5, None);
    assert!(v.validate(true).is_ok());
}

#[test]
fn test_max() {
    let mut v = Validator::new();
    v.field(11, "Rating").max(10, None);
    assert_eq!(
        v.validate(true).unwrap_err().to_string(),
        "11 cannot be greater than 10"
    );

    let mut v = Validator::new();
    v.field("11", "Rating").max(10, None);
    assert_eq!(
        v.validate(true).unwrap_err().to_string(),
        "Rating must be an integer"
    );
}

#[test]
fn test_lengths() {
    let mut v = Validator::new();
    v.field("ab", "Code").min_length(3, None);
    assert!(v.validate(true).is_err());

    let mut v = Validator::new();
    v.field("abc", "Code").min_length(3, None).max_length(3, None);
    assert!(v.validate(true).is_ok());

    let mut v = Validator::new();
    v.field("abcd", "Code").max_length(3, None);
    assert_eq!(
        v.validate(true).unwrap_err().to_string(),
        "abcd cannot be more than 3 characters"
    );
}

#[test]
fn test_lengths_count_bytes() {
    let mut v = Validator::new();
    v.field("äöü", "Code").max_length(3, None);
    assert_eq!(
        v.validate(true).unwrap_err().to_string(),
        "äöü cannot be more than 3 characters"
    );

    let mut v = Validator::new();
    v.field("日本", "Code").min_length(4, None);
    assert!(v.validate(true).is_ok());
}

#[test]
fn test_collection_length_as_field() {
    let items = vec!["a", "b"];
    let mut v = Validator::new();
    v.field(items.len(), "Count").number(None).min(3, None);
    assert_eq!(
        v.validate(false).unwrap_err().to_string(),
        "2 cannot be less than 3"
    );
}

#[test]
fn test_phone() {
    let mut v = Validator::new();
    v.field("+12345678901", "Phone").phone(None);
    assert!(v.validate(true).is_ok());

    for bad in ["123", "1234567890123456"] {
        let mut v = Validator::new();
        v.field(bad, "Phone").phone(None);
        assert_eq!(
            v.validate(true).unwrap_err().to_string(),
            "Phone must be a valid phone number"
        );
    }

    let mut v = Validator::new();
    v.field(12345678901_i64, "Phone").phone(None);
    assert_eq!(
        v.validate(true).unwrap_err().to_string(),
        "Phone must be a valid phone number"
    );
}

// ============================================================================
// Custom Messages
// ============================================================================

#[test]
fn test_custom_message_is_verbatim_for_every_rule() {
    let custom = "custom failure text";
    let cases: Vec<(Value, Build)> = vec![
        (Value::Int(1), build(move |f| { f.string(Some(custom)); })),
        (Value::from(""), build(move |f| { f.required(Some(custom)); })),
        (Value::Int(0), build(move |f| { f.required(Some(custom)); })),
        (Value::from("nope"), build(move |f| { f.email(Some(custom)); })),
        (Value::Int(7), build(move |f| { f.email(Some(custom)); })),
        (Value::Float(1.5), build(move |f| { f.number(Some(custom)); })),
        (Value::Int(1), build(move |f| { f.min(2, Some(custom)); })),
        (Value::from("1"), build(move |f| { f.min(2, Some(custom)); })),
        (Value::Int(3), build(move |f| { f.max(2, Some(custom)); })),
        (Value::Null, build(move |f| { f.max(2, Some(custom)); })),
        (Value::from("a"), build(move |f| { f.min_length(2, Some(custom)); })),
        (Value::Bool(true), build(move |f| { f.min_length(2, Some(custom)); })),
        (Value::from("abc"), build(move |f| { f.max_length(2, Some(custom)); })),
        (Value::List(vec![]), build(move |f| { f.max_length(2, Some(custom)); })),
        (Value::from("12"), build(move |f| { f.phone(Some(custom)); })),
        (Value::Int(12), build(move |f| { f.phone(Some(custom)); })),
    ];

    for (value, apply) in cases {
        let mut v = Validator::new();
        apply(v.field(value.clone(), "Field"));
        let errors = v.validate(false).unwrap_err();
        assert_eq!(errors.len(), 1, "value {:?}", value);
        assert_eq!(errors.to_string(), custom, "value {:?}", value);
    }
}

// ============================================================================
// Evaluation Modes
// ============================================================================

#[test]
fn test_empty_validator_succeeds() {
    let v = Validator::new();
    assert!(v.validate(true).is_ok());
    assert!(v.validate(false).is_ok());
    assert!(v.evaluate(EvaluationMode::CollectAll).is_ok());
}

#[test]
fn test_fail_fast_vs_collect_all() {
    let mut v = Validator::new();
    v.field("", "Name").required(None);
    v.field("x@y", "Email").email(None);

    let first = v.validate(true).unwrap_err();
    assert_eq!(first.len(), 1);
    assert_eq!(first.to_string(), "Name is required");

    let all = v.validate(false).unwrap_err();
    assert_eq!(all.messages(), vec!["Name is required", "Email must be a valid email"]);
    assert_eq!(all.to_string(), "Name is required; Email must be a valid email");
}

#[test]
fn test_registration_order_is_evaluation_order() {
    let mut v = Validator::new();
    v.field("x@y", "Email").email(None);
    v.field("", "Name").required(None);

    assert_eq!(
        v.validate(true).unwrap_err().to_string(),
        "Email must be a valid email"
    );
}

#[test]
fn test_each_rule_reports_at_most_once() {
    let mut v = Validator::new();
    v.field(3.5, "Age")
        .required(None)
        .number(None)
        .min(10, None)
        .max(1, None);

    let errors = v.validate(false).unwrap_err();
    let constraints: Vec<_> = errors.iter().map(|e| e.constraint).collect();
    assert_eq!(constraints, vec!["number", "min", "max"]);
    assert!(errors.iter().all(|e| e.field == "Age"));
    assert!(errors.iter().all(|e| e.is_type_mismatch()));
}

#[test]
fn test_mixed_kinds_never_panic() {
    let values = vec![
        Value::Null,
        Value::Bool(false),
        Value::Int(i64::MIN),
        Value::Float(f64::NAN),
        Value::from(""),
        Value::List(vec![Value::Null]),
        Value::Object(vec![("k".to_string(), Value::Int(1))]),
    ];

    for value in values {
        let mut v = Validator::new();
        v.field(value, "Any")
            .string(None)
            .required(None)
            .email(None)
            .number(None)
            .min(0, None)
            .max(0, None)
            .min_length(1, None)
            .max_length(1, None)
            .phone(None);
        assert_eq!(v.len(), 9);
        let _ = v.validate(false);
    }
}

#[test]
fn test_rules_are_inspectable() {
    let mut v = Validator::new();
    v.field("bob", "Username").min_length(5, Some("too short"));

    let rules = v.rules();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].constraint, Constraint::MinLength(5));
    assert_eq!(rules[0].value, Value::from("bob"));
    assert_eq!(rules[0].message.as_deref(), Some("too short"));
}

#[cfg(feature = "serde")]
#[test]
fn test_json_values() {
    let body = serde_json::json!({"email": "a@b.co", "age": 17});

    let mut v = Validator::new();
    v.field(body["email"].clone(), "Email").required(None).email(None);
    v.field(body["age"].clone(), "Age").number(None).min(18, None);
    v.field(body["missing"].clone(), "Name").required(None);

    assert_eq!(
        v.validate(false).unwrap_err().to_string(),
        "17 cannot be less than 18; Name is required"
    );
}
