//  ____  ____       ____        _ _
// |  _ \|  _ \ __ _/ ___| _   _(_) |_ ___
// | |_) | |_) / _` \___ \| | | | | __/ _ \
// |  _ <|  __/ (_| |___) | |_| | | ||  __/
// |_| \_\_|   \__,_|____/ \__,_|_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-14
// Version : 0.1.0
// License : Mulan PSL v2
//
// A password generation and strength estimation toolkit written in Rust.

use anyhow::Result;
use clap::Parser;

use rpasuite::commands;
use rpasuite::setclip;

#[derive(Debug, Parser)]
#[command(name = "rpasuite")]
#[command(about = "A password generation and strength estimation toolkit", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Estimate password strength and check properties
    Check(CheckArgs),

    /// Show or update the saved generation policy
    Policy(PolicyArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (default from saved policy)
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Make password URL-safe
    #[arg(short = 's', long, default_value_t = false)]
    url_safe: bool,

    /// Avoid visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    avoid_confusion: bool,

    /// Preset security level: easy, medium or hard
    #[arg(long)]
    level: Option<String>,

    /// Copy the password to the clipboard
    #[arg(long, default_value_t = false)]
    copy: bool,

    /// Seconds before the clipboard is cleared, 0 disables (default from saved policy)
    #[arg(long)]
    clear_after: Option<u64>,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Password to check (prompted for when omitted)
    password: Option<String>,

    /// Check if password is URL-safe
    #[arg(short = 's', long, default_value_t = false)]
    check_url_safe: bool,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    check_confusion: bool,
}

#[derive(Debug, Parser)]
struct PolicyArgs {
    /// Default password length
    #[arg(long)]
    length: Option<usize>,

    /// Include uppercase letters (true/false)
    #[arg(long)]
    uppercase: Option<bool>,

    /// Include lowercase letters (true/false)
    #[arg(long)]
    lowercase: Option<bool>,

    /// Include numbers (true/false)
    #[arg(long)]
    numbers: Option<bool>,

    /// Include special characters (true/false)
    #[arg(long)]
    special: Option<bool>,

    /// Generate URL-safe passwords (true/false)
    #[arg(long)]
    url_safe: Option<bool>,

    /// Avoid visually confusing characters (true/false)
    #[arg(long)]
    avoid_confusion: Option<bool>,

    /// Seconds before a copied password is cleared, 0 disables
    #[arg(long)]
    clear_after: Option<u64>,

    /// Reset the policy to built-in defaults
    #[arg(long, default_value_t = false)]
    reset: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    // 剪贴板守护进程入口，必须在解析命令行之前检查
    if setclip::run_clear_daemon_if_spawned() {
        return Ok(());
    }

    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => commands::password_gen::generate_random(
            args.length,
            args.no_uppercase,
            args.no_lowercase,
            args.no_numbers,
            args.no_special,
            args.url_safe,
            args.avoid_confusion,
            args.level,
            args.copy,
            args.clear_after,
        ),
        Cli::Check(args) => commands::check::check_password(
            args.password,
            args.check_url_safe,
            args.check_confusion,
        ),
        Cli::Policy(args) => commands::policy::manage_policy(
            args.length,
            args.uppercase,
            args.lowercase,
            args.numbers,
            args.special,
            args.url_safe,
            args.avoid_confusion,
            args.clear_after,
            args.reset,
        ),
    }
}
