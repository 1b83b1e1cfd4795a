use crate::utils::error::InputError;

/// Turns one raw line into a typed value or a rejection reason.
///
/// Implemented for every `Fn(&str) -> Result<T, InputError>`, so plain validator
/// functions and closures can be handed to the prompt loop directly.
pub trait LineValidator<T> {
    fn validate_line(&self, line: &str) -> Result<T, InputError>;
}

impl<T, F> LineValidator<T> for F
where
    F: Fn(&str) -> Result<T, InputError>,
{
    fn validate_line(&self, line: &str) -> Result<T, InputError> {
        self(line)
    }
}
