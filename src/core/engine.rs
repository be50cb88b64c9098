use crate::core::classifier::classify;
use crate::domain::model::Classification;
use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use crate::utils::validation::{first_token, parse_value};

pub struct SignEngine<S: InputSource> {
    source: S,
}

impl<S: InputSource> SignEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads one value from the source and classifies it.
    pub fn run(&mut self) -> Result<Classification> {
        let input = self.source.read_input()?;
        tracing::debug!("Read {} byte(s) of input", input.len());

        let token = first_token(&input)?;
        let value = parse_value(token)?;
        tracing::debug!("Parsed '{}' as {}", token, value);

        let classification = classify(value);
        tracing::debug!("Classified as {}", classification.sign.label());

        Ok(classification)
    }
}
