use crate::domain::model::{Classification, Sign};

/// Places `value` in exactly one sign category. `-0.0` counts as zero.
pub fn classify(value: f64) -> Classification {
    let sign = if value == 0.0 {
        Sign::Zero
    } else if value < 0.0 {
        Sign::Negative
    } else {
        Sign::Positive
    };

    Classification { value, sign }
}
