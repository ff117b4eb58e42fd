use super::errors::RuleViolation;

/// Allowlist applied to an uploaded file before it reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileKindRule {
    /// Lowercase extensions including the leading dot.
    pub extensions: &'static [&'static str],
    /// Checked only when the client also declared a content type.
    pub content_type: Option<&'static str>,
    pub extension_message: &'static str,
    pub content_type_message: &'static str,
}

impl FileKindRule {
    pub const PDF: FileKindRule = FileKindRule {
        extensions: &[".pdf"],
        content_type: Some("application/pdf"),
        extension_message: "El archivo debe tener extensión .pdf",
        content_type_message: "Sólo se aceptan archivos PDF (content-type inválido).",
    };

    pub const IMAGE: FileKindRule = FileKindRule {
        extensions: &[".jpg", ".jpeg", ".png", ".gif", ".webp"],
        content_type: None,
        extension_message:
            "Tipo de imagen no permitido. Extensiones permitidas: jpg, jpeg, png, gif, webp",
        content_type_message:
            "Tipo de imagen no permitido. Extensiones permitidas: jpg, jpeg, png, gif, webp",
    };

    pub const PROFILE_PHOTO: FileKindRule = FileKindRule {
        extensions: &[".png"],
        content_type: Some("image/png"),
        extension_message: "Solo se permiten imágenes PNG (.png)",
        content_type_message: "Solo se permiten imágenes PNG (content-type debe ser image/png)",
    };

    pub fn accepts_extension(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext))
    }
}

/// Extension is the authoritative check; content type is secondary and only
/// compared when both the client and the rule supply one.
pub fn validate_file_kind(
    file_name: &str,
    declared_content_type: Option<&str>,
    rule: &FileKindRule,
) -> Result<(), RuleViolation> {
    if !rule.accepts_extension(file_name) {
        return Err(RuleViolation::InvalidFileType(
            rule.extension_message.to_string(),
        ));
    }

    if let (Some(declared), Some(expected)) = (declared_content_type, rule.content_type) {
        if declared.trim() != expected {
            return Err(RuleViolation::InvalidFileType(
                rule.content_type_message.to_string(),
            ));
        }
    }

    Ok(())
}
