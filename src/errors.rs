use std::fmt;

// === LengthError ===

/// Reasons the raw length text is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    /// The field is empty.
    Required,
    /// The value is below the minimum length.
    TooShort,
    /// The value is above the maximum length.
    TooLong,
    /// The text is not a whole number.
    NotANumber,
}

impl LengthError {
    /// Inline message shown next to the length field.
    pub fn message(&self) -> &'static str {
        match self {
            LengthError::Required => "Required",
            LengthError::TooShort => "Too Short!",
            LengthError::TooLong => "Too Long!",
            LengthError::NotANumber => "Must be a number",
        }
    }
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LengthError {}

// === GenerationError ===

/// Invalid input handed to the password builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// No character class was selected.
    EmptyAlphabet,
    /// A zero-length password was requested.
    ZeroLength,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::EmptyAlphabet => write!(f, "Alphabet is empty"),
            GenerationError::ZeroLength => write!(f, "Password length must be positive"),
        }
    }
}

impl std::error::Error for GenerationError {}

// === FormError ===

/// Why a generate action did not produce a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// The length field failed validation.
    Length(LengthError),
    /// All four class toggles are off.
    NoCharacterClass,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Length(err) => write!(f, "{}", err),
            FormError::NoCharacterClass => write!(f, "Select at least one character type"),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Length(err) => Some(err),
            FormError::NoCharacterClass => None,
        }
    }
}

impl From<LengthError> for FormError {
    fn from(e: LengthError) -> Self {
        FormError::Length(e)
    }
}

impl From<GenerationError> for FormError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::EmptyAlphabet => FormError::NoCharacterClass,
            // Lengths reaching the builder have passed validation, so a zero
            // length can only mean the bounds let it through.
            GenerationError::ZeroLength => FormError::Length(LengthError::TooShort),
        }
    }
}

// === SettingsError ===

/// Errors while reading the settings file.
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error: {}", e),
            SettingsError::Parse(e) => write!(f, "Malformed settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}
