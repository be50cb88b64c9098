use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Zero,
    Negative,
    Positive,
}

impl Sign {
    pub fn label(&self) -> &'static str {
        match self {
            Sign::Zero => "zero",
            Sign::Negative => "negative",
            Sign::Positive => "positive",
        }
    }
}

/// A parsed input value together with its sign category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub value: f64,
    pub sign: Sign,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            Sign::Zero => write!(f, "input is zero"),
            Sign::Negative | Sign::Positive => {
                write!(f, "{:.4} is {}", self.value, self.sign.label())
            }
        }
    }
}
