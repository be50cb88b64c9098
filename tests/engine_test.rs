use anyhow::Result;
use numsign::{classify, Sign, SignEngine, SignError, StringSource};
use pretty_assertions::assert_eq;

#[test]
fn test_engine_end_to_end_messages() -> Result<()> {
    let cases = [
        ("-12", "-12.0000 is negative"),
        ("0", "input is zero"),
        ("1", "1.0000 is positive"),
        ("0.0000001", "0.0000 is positive"),
        ("-0.0000001", "-0.0000 is negative"),
        ("101", "101.0000 is positive"),
    ];

    for (input, expected) in cases {
        let mut engine = SignEngine::new(StringSource::new(input));
        assert_eq!(engine.run()?.to_string(), expected);
    }

    Ok(())
}

#[test]
fn test_negative_zero_input_is_zero() -> Result<()> {
    let mut engine = SignEngine::new(StringSource::new("-0.0"));
    let result = engine.run()?;
    assert_eq!(result.sign, Sign::Zero);
    assert_eq!(result.to_string(), "input is zero");
    Ok(())
}

#[test]
fn test_exactly_one_category_per_value() {
    let values = [-1e9, -3.5, -1e-300, 0.0, 1e-300, 2.25, 1e9];
    for value in values {
        let sign = classify(value).sign;
        match sign {
            Sign::Zero => assert!(value == 0.0),
            Sign::Negative => assert!(value < 0.0),
            Sign::Positive => assert!(value > 0.0),
        }
    }
}

#[test]
fn test_malformed_input_errors() {
    let mut engine = SignEngine::new(StringSource::new("1.2.3"));
    assert!(matches!(engine.run(), Err(SignError::InvalidNumber { .. })));

    let mut engine = SignEngine::new(StringSource::new("   "));
    assert!(matches!(engine.run(), Err(SignError::MissingInput)));
}
