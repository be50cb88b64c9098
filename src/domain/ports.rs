use crate::utils::error::Result;

/// Where the raw input text comes from.
pub trait InputSource {
    fn read_input(&mut self) -> Result<String>;
}
