use log::debug;
use rand::Rng;

use crate::charset::{ClassFlags, assemble_alphabet};
use crate::errors::GenerationError;

/// A validated request: class flags plus a length already inside bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_specials: bool,
    pub length: usize,
}

impl GenerationOptions {
    pub fn flags(&self) -> ClassFlags {
        ClassFlags {
            lowercase: self.include_lowercase,
            uppercase: self.include_uppercase,
            digits: self.include_numbers,
            specials: self.include_specials,
        }
    }
}

/// Builds a password of `length` characters drawn uniformly from `alphabet`
/// using the thread-local RNG.
pub fn build_password(alphabet: &[char], length: usize) -> Result<String, GenerationError> {
    build_password_with(&mut rand::rng(), alphabet, length)
}

/// Same as [`build_password`] but with a caller-supplied RNG.
pub fn build_password_with<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &[char],
    length: usize,
) -> Result<String, GenerationError> {
    if alphabet.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }
    if length == 0 {
        return Err(GenerationError::ZeroLength);
    }

    Ok((0..length)
        .map(|_| {
            let idx = rng.random_range(0..alphabet.len());
            alphabet[idx]
        })
        .collect())
}

/// Assembles the alphabet for `options` and builds one password from it.
pub fn generate_password(options: &GenerationOptions) -> Result<String, GenerationError> {
    let alphabet = assemble_alphabet(options.flags());
    debug!(
        "Generating password: length={}, alphabet size={}",
        options.length,
        alphabet.len()
    );
    build_password(&alphabet, options.length)
}
