//! Character classes and alphabet assembly.
//!
//! The alphabet is rebuilt for every generation request by concatenating the
//! fixed class strings in canonical order: lower, upper, digits, special.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIALS: &str = "!@#$%^&*()_+";

/// One of the four selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Specials,
}

impl CharClass {
    /// All classes in canonical assembly order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Specials,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Specials => SPECIALS,
        }
    }

    /// Checkbox caption used by the form.
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Include Lowercase",
            CharClass::Uppercase => "Include Uppercase",
            CharClass::Digits => "Include Numbers",
            CharClass::Specials => "Include Special Characters",
        }
    }
}

/// The four class toggles. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassFlags {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub specials: bool,
}

impl ClassFlags {
    pub fn all() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            specials: true,
        }
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digits => self.digits,
            CharClass::Specials => self.specials,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Digits => &mut self.digits,
            CharClass::Specials => &mut self.specials,
        };
        *flag = enabled;
    }

    pub fn any(&self) -> bool {
        CharClass::ALL.iter().any(|&c| self.is_enabled(c))
    }
}

/// Concatenates the enabled class strings in canonical order.
///
/// Returns an empty vector when no class is enabled; the password builder
/// rejects that case.
pub fn assemble_alphabet(flags: ClassFlags) -> Vec<char> {
    let mut charset = String::new();
    for class in CharClass::ALL {
        if flags.is_enabled(class) {
            charset.push_str(class.chars());
        }
    }
    charset.chars().collect()
}
