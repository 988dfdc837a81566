//  ____  ____       ____        _ _
// |  _ \|  _ \ __ _/ ___| _   _(_) |_ ___
// | |_) | |_) / _` \___ \| | | | | __/ _ \
// |  _ <|  __/ (_| |___) | |_| | | ||  __/
// |_| \_\_|   \__,_|____/ \__,_|_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-08
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::collections::HashSet;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use thiserror::Error;

// 基础字符集
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
// Full ASCII punctuation, the same 32 characters the strength model counts
const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const SPECIAL_URL_SAFE: &str = "-._~";

const CONFUSING_CHARS: [char; 6] = ['l', 'I', '1', 'O', '0', 'o'];

/// 密码生成失败的原因
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassGenError {
    #[error("At least one character set must be included")]
    NoCharacterSetSelected,

    #[error("Password length must be at least {min_length} to include all required character sets")]
    LengthTooShort { min_length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub url_safe: bool,
    pub avoid_confusion: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: true,
            url_safe: false,
            avoid_confusion: false,
        }
    }
}

impl PasswordOptions {
    /// Number of character sets these options enable
    pub fn enabled_sets(&self) -> usize {
        [
            self.include_uppercase,
            self.include_lowercase,
            self.include_numbers,
            self.include_special,
        ]
        .iter()
        .filter(|&&on| on)
        .count()
    }
}

// 预设安全等级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
    Easy,
    Medium,
    Hard,
}

impl SecurityLevel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(SecurityLevel::Easy),
            "medium" => Some(SecurityLevel::Medium),
            "hard" => Some(SecurityLevel::Hard),
            _ => None,
        }
    }

    /// Generation options preset for this level
    pub fn options(&self) -> PasswordOptions {
        match self {
            SecurityLevel::Easy => PasswordOptions {
                length: 10,
                include_numbers: false,
                include_special: false,
                ..PasswordOptions::default()
            },
            SecurityLevel::Medium => PasswordOptions {
                length: 14,
                include_special: false,
                ..PasswordOptions::default()
            },
            SecurityLevel::Hard => PasswordOptions {
                length: 18,
                ..PasswordOptions::default()
            },
        }
    }
}

/// Generate a random password using the operating system CSPRNG.
pub fn generate_password(options: &PasswordOptions) -> Result<String, PassGenError> {
    generate_password_with_rng(options, &mut OsRng)
}

/// Generate a random password from the given random source.
///
/// The `CryptoRng` bound keeps general-purpose PRNGs out of this path;
/// password material must come from a cryptographically secure source.
pub fn generate_password_with_rng<R: Rng + CryptoRng>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, PassGenError> {
    // Base character sets
    let mut uppercase = UPPERCASE.to_string();
    let mut lowercase = LOWERCASE.to_string();
    let mut numbers = NUMBERS.to_string();
    let mut special = if options.url_safe {
        SPECIAL_URL_SAFE.to_string()
    } else {
        SPECIAL.to_string()
    };

    // Remove confusing characters if requested
    if options.avoid_confusion {
        let confusing_chars: HashSet<char> = CONFUSING_CHARS.iter().cloned().collect();
        uppercase.retain(|c| !confusing_chars.contains(&c));
        lowercase.retain(|c| !confusing_chars.contains(&c));
        numbers.retain(|c| !confusing_chars.contains(&c));
        special.retain(|c| !confusing_chars.contains(&c));
    }

    // Collect the character sets that must each appear at least once
    let mut required_sets = Vec::new();
    if options.include_uppercase {
        required_sets.push(uppercase.chars().collect::<Vec<_>>());
    }
    if options.include_lowercase {
        required_sets.push(lowercase.chars().collect::<Vec<_>>());
    }
    if options.include_numbers {
        required_sets.push(numbers.chars().collect::<Vec<_>>());
    }
    if options.include_special {
        required_sets.push(special.chars().collect::<Vec<_>>());
    }

    // Validate at least one character set is selected
    if required_sets.is_empty() {
        return Err(PassGenError::NoCharacterSetSelected);
    }

    // Every required set needs a slot of its own
    if options.length < required_sets.len() {
        return Err(PassGenError::LengthTooShort {
            min_length: required_sets.len(),
        });
    }

    // Build the combined character pool
    let mut char_pool = String::new();
    if options.include_uppercase { char_pool.push_str(&uppercase); }
    if options.include_lowercase { char_pool.push_str(&lowercase); }
    if options.include_numbers { char_pool.push_str(&numbers); }
    if options.include_special { char_pool.push_str(&special); }
    let all_chars: Vec<char> = char_pool.chars().collect();

    let mut password_chars = Vec::with_capacity(options.length);

    // Add one character from each required set
    for chars in &required_sets {
        password_chars.push(*chars.choose(rng).unwrap());
    }

    // Add remaining characters from combined pool
    for _ in 0..(options.length - required_sets.len()) {
        password_chars.push(*all_chars.choose(rng).unwrap());
    }

    // Shuffle the characters to avoid predictable pattern
    password_chars.shuffle(rng);

    Ok(password_chars.into_iter().collect())
}

pub fn check_url_safe(password: &str) -> bool {
    password.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

pub fn check_confusing_chars(password: &str) -> Vec<char> {
    password.chars().filter(|c| CONFUSING_CHARS.contains(c)).collect()
}
