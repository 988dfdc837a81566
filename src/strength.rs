//  ____  ____       ____        _ _
// |  _ \|  _ \ __ _/ ___| _   _(_) |_ ___
// | |_) | |_) / _` \___ \| | | | | __/ _ \
// |  _ <|  __/ (_| |___) | |_| | | ||  __/
// |_| \_\_|   \__,_|____/ \__,_|_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-09
// Version : 0.1.0
// License : Mulan PSL v2
//
// Brute-force crack-time estimation

// 认为攻击者每秒可尝试 10^10 次
const GUESSES_PER_SECOND_LOG10: f64 = 10.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_30_DAYS: f64 = 86_400.0 * 30.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// 密码强度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthRating {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrengthEstimate {
    pub rating: StrengthRating,
    /// Estimated brute-force time. `None` when no analysis is possible,
    /// `f64::INFINITY` when the estimate exceeds floating-point range.
    pub seconds_to_crack: Option<f64>,
    pub display: String,
}

/// Sum the sizes of the character classes that appear in the password.
///
/// Classes and sizes: lowercase 26, uppercase 26, digits 10, punctuation 32.
/// Characters outside all four classes add length but no alphabet.
pub fn alphabet_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| c.is_ascii_punctuation()) {
        size += 32;
    }
    size
}

/// Estimate how long a brute-force search over the password's alphabet
/// would take, and bucket the result into a qualitative rating.
pub fn estimate_crack_time(password: &str) -> StrengthEstimate {
    let alphabet = alphabet_size(password);
    if alphabet == 0 {
        return StrengthEstimate {
            rating: StrengthRating::Unavailable,
            seconds_to_crack: None,
            display: "Analysis unavailable.".to_string(),
        };
    }

    // combinations = alphabet ^ length, searched at 10^10 guesses per second.
    // Computed in log10 space so long passwords cannot overflow the math.
    let length = password.chars().count();
    let log10_seconds = length as f64 * (alphabet as f64).log10() - GUESSES_PER_SECOND_LOG10;
    let seconds = 10f64.powf(log10_seconds);

    if seconds.is_infinite() {
        return StrengthEstimate {
            rating: StrengthRating::VeryStrong,
            seconds_to_crack: Some(f64::INFINITY),
            display: "Astronomically Strong".to_string(),
        };
    }

    let (rating, display) = if seconds < SECONDS_PER_MINUTE {
        (StrengthRating::VeryWeak, "Very Weak (< 1 min)".to_string())
    } else if seconds < SECONDS_PER_HOUR {
        (
            StrengthRating::Weak,
            format!("Weak (~{:.1} mins)", seconds / SECONDS_PER_MINUTE),
        )
    } else if seconds < SECONDS_PER_30_DAYS {
        (
            StrengthRating::Moderate,
            format!("Moderate (~{:.1} hrs)", seconds / SECONDS_PER_HOUR),
        )
    } else if seconds < SECONDS_PER_YEAR {
        (
            StrengthRating::Strong,
            format!("Strong (~{:.1} days)", seconds / SECONDS_PER_DAY),
        )
    } else {
        (
            StrengthRating::VeryStrong,
            format!("Very Strong (~{:.1} yrs)", seconds / SECONDS_PER_YEAR),
        )
    };

    StrengthEstimate {
        rating,
        seconds_to_crack: Some(seconds),
        display,
    }
}
