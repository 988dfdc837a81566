//  ____  ____       ____        _ _
// |  _ \|  _ \ __ _/ ___| _   _(_) |_ ___
// | |_) | |_) / _` \___ \| | | | | __/ _ \
// |  _ <|  __/ (_| |___) | |_| | | ||  __/
// |_| \_\_|   \__,_|____/ \__,_|_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use anyhow::Result;
use arboard::Clipboard;
use log::{info, warn};
use std::{env, process, thread, time::Duration};

/// 剪贴板清空前的默认等待时间(秒)
pub const DEFAULT_CLEAR_SECS: u64 = 30;

/// Copy a secret to the clipboard and schedule a timed clear.
///
/// A detached helper process clears the clipboard after
/// `clear_after_secs`, but only if it still holds the secret.
/// `clear_after_secs == 0` copies without scheduling a clear.
pub fn copy_with_expiry(secret: &str, clear_after_secs: u64) -> Result<()> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    if clear_after_secs > 0 {
        spawn_daemon(secret, clear_after_secs)?;
    }
    Ok(())
}

/// 检查是否作为守护进程运行
///
/// Must run before CLI parsing: the helper process is this same binary
/// re-executed with marker environment variables and no arguments.
/// Returns true when this process was the helper and has finished.
pub fn run_clear_daemon_if_spawned() -> bool {
    if env::var("CLIPBOARD_DAEMON").is_err() {
        return false;
    }
    let secret = env::var("DYNAMIC_INFO").unwrap_or_default();
    if secret.is_empty() {
        warn!("[守护进程] 未收到DYNAMIC_INFO环境变量");
        return true;
    }
    let delay = parse_clear_delay(env::var("CLEAR_DELAY_SECS").ok());
    daemon_task(&secret, delay);
    true
}

/// Interpret the clear-delay environment value, falling back to the
/// default when missing or unparsable.
pub fn parse_clear_delay(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_CLEAR_SECS)
}

fn spawn_daemon(secret: &str, clear_after_secs: u64) -> Result<()> {
    let exe_path = env::current_exe()?;

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env("CLIPBOARD_DAEMON", "1")
           .env("DYNAMIC_INFO", secret) // 传递动态信息
           .env("CLEAR_DELAY_SECS", clear_after_secs.to_string())
           .stderr(process::Stdio::inherit())
           .process_group(0);

        cmd.spawn()?;
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env("CLIPBOARD_DAEMON", "1")
           .env("DYNAMIC_INFO", secret) // 传递动态信息
           .env("CLEAR_DELAY_SECS", clear_after_secs.to_string())
           .stderr(process::Stdio::inherit())
           .creation_flags(0x08000000); // CREATE_NO_WINDOW

        cmd.spawn()?;
    }

    Ok(())
}

fn daemon_task(secret: &str, delay_secs: u64) {
    // 等待指定时间(秒)
    thread::sleep(Duration::from_secs(delay_secs));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("[守护进程] 剪贴板初始化失败: {}", e);
            return;
        }
    };

    let current_content = ctx.get_text().unwrap_or_else(|_| String::new());

    if current_content == secret {
        if let Err(e) = ctx.set_text("") {
            warn!("[守护进程] 清空剪贴板失败: {}", e);
        } else {
            info!("[守护进程] 剪贴板内容未更改，已清空");
        }
    } else {
        info!("[守护进程] 剪贴板已更改，无需操作");
    }
}
