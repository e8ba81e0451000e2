use crate::types::FormInput;

/// Where the orchestrator reads the five form fields from.
///
/// Read once per submission, at the moment the submission starts.
pub trait FormSource: Send + Sync {
    fn read(&self) -> FormInput;
}

// A snapshot taken beforehand serves as its own source
impl FormSource for FormInput {
    fn read(&self) -> FormInput {
        self.clone()
    }
}
