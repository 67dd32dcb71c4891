use crate::core::field::FieldError;

/// One submit attempt. Starts out allowed until something cancels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    proceed: bool,
    errors: Vec<FieldError>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self {
            proceed: true,
            errors: Vec::new(),
        }
    }

    pub fn should_proceed(&self) -> bool {
        self.proceed
    }

    pub fn is_cancelled(&self) -> bool {
        !self.proceed
    }

    pub fn cancel(&mut self) {
        self.proceed = false;
    }

    /// Records a failed check. Cancelling is left to the caller once every
    /// check has run.
    pub fn reject(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl Default for FormSubmission {
    fn default() -> Self {
        Self::new()
    }
}
