use anyhow::{Context, Result};

use crate::configtool::{self, ConfigFile};
use crate::passgen::PasswordOptions;

pub fn manage_policy(
    length: Option<usize>,
    uppercase: Option<bool>,
    lowercase: Option<bool>,
    numbers: Option<bool>,
    special: Option<bool>,
    url_safe: Option<bool>,
    avoid_confusion: Option<bool>,
    clear_after: Option<u64>,
    reset: bool,
) -> Result<()> {
    let config_dir = configtool::get_config_dir()
        .context("Failed to locate configuration directory")?;

    if reset {
        let config = configtool::reset_config(&config_dir)
            .context("Failed to reset configuration")?;
        println!("Policy reset to built-in defaults.");
        print_policy(&config);
        return Ok(());
    }

    let mut config = ConfigFile::load(&config_dir)
        .context("Failed to load configuration")?;

    let has_update = length.is_some()
        || uppercase.is_some()
        || lowercase.is_some()
        || numbers.is_some()
        || special.is_some()
        || url_safe.is_some()
        || avoid_confusion.is_some()
        || clear_after.is_some();

    if !has_update {
        print_policy(&config);
        return Ok(());
    }

    if let Some(v) = length {
        config.policy.length = v;
    }
    if let Some(v) = uppercase {
        config.policy.include_uppercase = v;
    }
    if let Some(v) = lowercase {
        config.policy.include_lowercase = v;
    }
    if let Some(v) = numbers {
        config.policy.include_numbers = v;
    }
    if let Some(v) = special {
        config.policy.include_special = v;
    }
    if let Some(v) = url_safe {
        config.policy.url_safe = v;
    }
    if let Some(v) = avoid_confusion {
        config.policy.avoid_confusion = v;
    }
    if let Some(v) = clear_after {
        config.policy.clip_clear_secs = v;
    }

    config.touch();
    config.save(&config_dir).context("Failed to save configuration")?;
    println!("Policy updated.");

    let p = &config.policy;
    let enabled = PasswordOptions::from(p).enabled_sets();
    if enabled == 0 {
        println!("⚠️ No character set is enabled; `gen` will fail until one is enabled.");
    } else if p.length < enabled {
        println!(
            "⚠️ Length {} is below the {} enabled character sets; `gen` will fail until it is raised.",
            p.length, enabled
        );
    }

    print_policy(&config);
    Ok(())
}

fn print_policy(config: &ConfigFile) {
    let yn = |v: bool| if v { "Yes" } else { "No" };

    println!("{:<18} | {:<10}", "设置", "值");
    println!("{}", "-".repeat(31));
    println!("{:<18} | {:<10}", "length", config.policy.length);
    println!("{:<18} | {:<10}", "uppercase", yn(config.policy.include_uppercase));
    println!("{:<18} | {:<10}", "lowercase", yn(config.policy.include_lowercase));
    println!("{:<18} | {:<10}", "numbers", yn(config.policy.include_numbers));
    println!("{:<18} | {:<10}", "special", yn(config.policy.include_special));
    println!("{:<18} | {:<10}", "url-safe", yn(config.policy.url_safe));
    println!("{:<18} | {:<10}", "avoid-confusion", yn(config.policy.avoid_confusion));
    println!("{:<18} | {:<10}", "clear-after (s)", config.policy.clip_clear_secs);
    println!();
    println!("Created: {}  Last modified: {}", config.created_at, config.last_modified);
}
