use chrono::NaiveDate;
use std::fmt;

// ============================================================================
// Rule violations
// ============================================================================

/// A single failed rule. The `Display` output is the operator-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("La fecha debe estar entre {earliest} y {latest}")]
    OutOfRange {
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("{0}")]
    InvalidFileType(String),

    #[error("La fecha de inicio no puede ser posterior a la fecha fin.")]
    InvalidDateOrder,

    #[error("El valor no puede ser negativo")]
    NegativeValue,

    #[error("Asegúrese de que no haya más de {max_digits} dígitos en total, con un máximo de {decimal_places} decimales.")]
    TooManyDigits { max_digits: u32, decimal_places: u32 },

    #[error("Este campo es obligatorio.")]
    Required,

    #[error("Asegúrese de que este valor tenga como máximo {max} caracteres.")]
    TooLong { max: usize },

    #[error("Asegúrese de que este valor sea mayor o igual a {min}.")]
    BelowMinimum { min: i64 },

    #[error("Introduzca una dirección de correo electrónico válida.")]
    InvalidEmail,

    #[error("El archivo supera el tamaño máximo permitido ({max_bytes} bytes).")]
    FileTooLarge { max_bytes: u64 },

    #[error("Error subiendo el archivo al almacenamiento: {cause}")]
    UploadFailed { cause: String },

    #[error("El perfil indicado no existe.")]
    UnknownProfile,

    #[error("Ya existe un perfil con este número de cédula.")]
    Duplicate,
}

impl RuleViolation {
    /// Stable machine-readable code, exposed in API error details.
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::OutOfRange { .. } => "OUT_OF_RANGE",
            RuleViolation::InvalidFileType(_) => "INVALID_FILE_TYPE",
            RuleViolation::InvalidDateOrder => "INVALID_DATE_ORDER",
            RuleViolation::NegativeValue => "NEGATIVE_VALUE",
            RuleViolation::TooManyDigits { .. } => "TOO_MANY_DIGITS",
            RuleViolation::Required => "REQUIRED",
            RuleViolation::TooLong { .. } => "TOO_LONG",
            RuleViolation::BelowMinimum { .. } => "BELOW_MINIMUM",
            RuleViolation::InvalidEmail => "INVALID_EMAIL",
            RuleViolation::FileTooLarge { .. } => "FILE_TOO_LARGE",
            RuleViolation::UploadFailed { .. } => "UPLOAD_ERROR",
            RuleViolation::UnknownProfile => "UNKNOWN_PROFILE",
            RuleViolation::Duplicate => "DUPLICATE",
        }
    }
}

// ============================================================================
// Field-attached errors
// ============================================================================

/// A violation attached to a form field. `field == None` means the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Option<String>,
    pub violation: RuleViolation,
}

impl FieldError {
    pub fn message(&self) -> String {
        self.violation.to_string()
    }
}

/// Aggregate of every field-level failure found during full form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, violation: RuleViolation) -> Self {
        let mut err = Self::new();
        err.push(field, violation);
        err
    }

    pub fn push(&mut self, field: &str, violation: RuleViolation) {
        self.errors.push(FieldError {
            field: Some(field.to_string()),
            violation,
        });
    }

    pub fn push_form(&mut self, violation: RuleViolation) {
        self.errors.push(FieldError {
            field: None,
            violation,
        });
    }

    /// Records the outcome of a rule against `field` when it failed.
    pub fn check(&mut self, field: &str, outcome: Result<(), RuleViolation>) {
        if let Err(violation) = outcome {
            self.push(field, violation);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_violation(&self, field: &str, code: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.field.as_deref() == Some(field) && e.violation.code() == code)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| match &e.field {
                Some(field) => format!("{}: {}", field, e.violation),
                None => e.violation.to_string(),
            })
            .collect();

        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}
