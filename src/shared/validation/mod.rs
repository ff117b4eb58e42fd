mod errors;
mod file_kind;
mod rules;

pub use errors::{FieldError, RuleViolation, ValidationError};
pub use file_kind::{validate_file_kind, FileKindRule};
pub use rules::{
    validate_date_in_range, validate_date_order, validate_decimal_digits, validate_email,
    validate_file_size, validate_max_len, validate_min, validate_non_negative, validate_required,
    EARLIEST_DATE, LATEST_DATE, MAX_UPLOAD_BYTES,
};
