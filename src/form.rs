//! Form view-model.
//!
//! Owns everything the screen shows: the raw length text, the four class
//! toggles and the last generated password. The UI layer only forwards
//! events here and reads the query methods back.

use log::debug;
use zeroize::Zeroize;

use crate::charset::{CharClass, ClassFlags};
use crate::errors::{FormError, LengthError};
use crate::password::{GenerationOptions, generate_password};
use crate::validation::{LengthBounds, validate_length_within};

#[derive(Debug)]
pub struct GeneratorForm {
    length_input: String,
    // Validation messages stay hidden until the field is blurred or submitted
    touched: bool,
    flags: ClassFlags,
    generated_password: String,
    is_generated: bool,
    notice: Option<FormError>,
    bounds: LengthBounds,
}

impl Default for GeneratorForm {
    fn default() -> Self {
        Self::with_bounds(LengthBounds::default())
    }
}

impl GeneratorForm {
    pub fn with_bounds(bounds: LengthBounds) -> Self {
        Self {
            length_input: String::new(),
            touched: false,
            flags: ClassFlags::default(),
            generated_password: String::new(),
            is_generated: false,
            notice: None,
            bounds,
        }
    }

    // ---- events ----

    pub fn set_length_input(&mut self, text: impl Into<String>) {
        self.length_input = text.into();
    }

    /// Mutable access for text widgets that edit in place.
    pub fn length_input_mut(&mut self) -> &mut String {
        &mut self.length_input
    }

    pub fn blur_length(&mut self) {
        self.touched = true;
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        self.flags.set(class, enabled);
        if enabled && self.notice == Some(FormError::NoCharacterClass) {
            self.notice = None;
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        let enabled = !self.flags.is_enabled(class);
        self.set_class(class, enabled);
    }

    /// Validates, assembles the alphabet and builds a password.
    ///
    /// On failure the previous result is hidden and the error is kept for
    /// display.
    pub fn generate(&mut self) -> Result<&str, FormError> {
        self.touched = true;

        let outcome = self
            .options()
            .map_err(FormError::from)
            .and_then(|options| generate_password(&options).map_err(FormError::from));

        match outcome {
            Ok(password) => {
                debug!("Generated password of {} chars", password.chars().count());
                self.clear_password();
                self.generated_password = password;
                self.is_generated = true;
                self.notice = None;
                Ok(self.generated_password.as_str())
            }
            Err(e) => {
                debug!("Generation refused: {}", e);
                self.clear_password();
                self.notice = Some(e);
                Err(e)
            }
        }
    }

    /// Returns the form to its initial state.
    pub fn reset(&mut self) {
        debug!("Resetting form");
        self.length_input.clear();
        self.touched = false;
        self.flags = ClassFlags::default();
        self.clear_password();
        self.notice = None;
    }

    // ---- queries ----

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn flags(&self) -> ClassFlags {
        self.flags
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        self.flags.is_enabled(class)
    }

    pub fn is_generated(&self) -> bool {
        self.is_generated
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// The password to show, only after a successful generation.
    pub fn displayed_password(&self) -> Option<&str> {
        self.is_generated.then_some(self.generated_password.as_str())
    }

    /// Inline message for the length field, once it has been touched.
    pub fn length_error(&self) -> Option<&'static str> {
        if !self.touched {
            return None;
        }
        validate_length_within(&self.length_input, self.bounds)
            .err()
            .map(|e| e.message())
    }

    /// Form-level message that is not tied to the length field.
    pub fn notice(&self) -> Option<String> {
        match self.notice {
            Some(e @ FormError::NoCharacterClass) => Some(e.to_string()),
            _ => None,
        }
    }

    /// Current options, if the length text validates.
    pub fn options(&self) -> Result<GenerationOptions, LengthError> {
        let length = validate_length_within(&self.length_input, self.bounds)?;
        Ok(GenerationOptions {
            include_lowercase: self.flags.lowercase,
            include_uppercase: self.flags.uppercase,
            include_numbers: self.flags.digits,
            include_specials: self.flags.specials,
            length,
        })
    }

    fn clear_password(&mut self) {
        self.generated_password.zeroize();
        self.is_generated = false;
    }
}

impl Drop for GeneratorForm {
    fn drop(&mut self) {
        self.generated_password.zeroize();
    }
}
