use anyhow::{Context, Result, anyhow};
use log::debug;

use crate::configtool::{self, ConfigFile};
use crate::passgen::{self, PasswordOptions, SecurityLevel};
use crate::setclip;
use crate::strength;

pub fn generate_random(
    length: Option<usize>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_special: bool,
    url_safe: bool,
    avoid_confusion: bool,
    level: Option<String>,
    copy: bool,
    clear_after: Option<u64>,
) -> Result<()> {
    let config_dir = configtool::get_config_dir()
        .context("Failed to locate configuration directory")?;
    let config = ConfigFile::load(&config_dir)
        .context("Failed to load configuration")?;

    // 配置策略 -> 预设等级 -> 命令行参数，后者覆盖前者
    let mut options = PasswordOptions::from(&config.policy);

    if let Some(level_name) = level {
        let level = SecurityLevel::from_str(&level_name).ok_or_else(|| {
            anyhow!(
                "Unknown security level '{}'. Expected easy, medium or hard.",
                level_name
            )
        })?;
        options = level.options();
    }

    if let Some(length) = length {
        options.length = length;
    }
    if no_uppercase {
        options.include_uppercase = false;
    }
    if no_lowercase {
        options.include_lowercase = false;
    }
    if no_numbers {
        options.include_numbers = false;
    }
    if no_special {
        options.include_special = false;
    }
    if url_safe {
        options.url_safe = true;
    }
    if avoid_confusion {
        options.avoid_confusion = true;
    }
    debug!("resolved generation options: {:?}", options);

    let password = passgen::generate_password(&options)?;
    println!("Generated random password: {}", password);

    let estimate = strength::estimate_crack_time(&password);
    println!("Password strength: {}", estimate.display);

    if copy {
        let clear_secs = clear_after.unwrap_or(config.policy.clip_clear_secs);
        setclip::copy_with_expiry(&password, clear_secs)
            .context("Failed to copy password to clipboard")?;
        if clear_secs > 0 {
            println!(
                "📋 Password copied to clipboard, will be cleared in {} seconds.",
                clear_secs
            );
        } else {
            println!("📋 Password copied to clipboard.");
        }
    } else if clear_after.is_some() {
        println!("⚠️ --clear-after has no effect without --copy");
    }

    Ok(())
}
