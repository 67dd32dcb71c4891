use crate::core::field::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged {
        id: FieldId,
        value: String,
    },
    ErrorScheduled {
        id: FieldId,
        message: String,
    },
    ErrorCancelled {
        id: FieldId,
    },
    SubmitAllowed,
    SubmitCancelled,
}
