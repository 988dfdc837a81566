use anyhow::Result;

use crate::configtool;
use crate::passgen;
use crate::strength;

pub fn check_password(
    password: Option<String>,
    check_url_safe: bool,
    check_confusion: bool,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => configtool::read_password_from_stdin("Enter password to check: ")?,
    };

    let estimate = strength::estimate_crack_time(&password);
    println!("Password strength: {}", estimate.display);

    if check_url_safe {
        let is_safe = passgen::check_url_safe(&password);
        println!("URL-safe: {}", if is_safe { "Yes" } else { "No" });
    }

    if check_confusion {
        let confusing = passgen::check_confusing_chars(&password);
        if !confusing.is_empty() {
            println!("Potentially confusing characters: {:?}", confusing);
        } else {
            println!("No confusing characters detected");
        }
    }
    Ok(())
}
