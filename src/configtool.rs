//  ____  ____       ____        _ _
// |  _ \|  _ \ __ _/ ___| _   _(_) |_ ___
// | |_) | |_) / _` \___ \| | | | | __/ _ \
// |  _ <|  __/ (_| |___) | |_| | | ||  __/
// |_| \_\_|   \__,_|____/ \__,_|_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-10
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use serde::{Serialize, Deserialize};
use serde_json;
use std::{fs, path::{Path, PathBuf}};
use std::io::{self, Write};
use dirs::config_dir;
use chrono::Utc;
use log::debug;
use rpassword::read_password;
use thiserror::Error;

use crate::passgen::PasswordOptions;

const CONFIG_FILE_NAME: &str = "config.json";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDirError(String),
}

/// 默认生成策略，随配置文件持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub url_safe: bool,
    pub avoid_confusion: bool,
    /// Seconds before a copied password is cleared from the clipboard.
    /// Zero disables the timed clear.
    pub clip_clear_secs: u64,
}

impl Default for GenPolicy {
    fn default() -> Self {
        let options = PasswordOptions::default();
        Self {
            length: options.length,
            include_uppercase: options.include_uppercase,
            include_lowercase: options.include_lowercase,
            include_numbers: options.include_numbers,
            include_special: options.include_special,
            url_safe: options.url_safe,
            avoid_confusion: options.avoid_confusion,
            clip_clear_secs: 30,
        }
    }
}

impl From<&GenPolicy> for PasswordOptions {
    fn from(policy: &GenPolicy) -> Self {
        Self {
            length: policy.length,
            include_uppercase: policy.include_uppercase,
            include_lowercase: policy.include_lowercase,
            include_numbers: policy.include_numbers,
            include_special: policy.include_special,
            url_safe: policy.url_safe,
            avoid_confusion: policy.avoid_confusion,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub policy: GenPolicy,
    pub created_at: String,
    pub last_modified: String,
}

impl ConfigFile {
    pub fn new() -> Self {
        let timenow = Utc::now().format(TIME_FORMAT).to_string();
        Self {
            policy: GenPolicy::default(),
            created_at: timenow.clone(),
            last_modified: timenow,
        }
    }

    /// 加载配置文件，不存在时返回内置默认值
    pub fn load(base_dir: &Path) -> Result<Self, ConfigError> {
        let config_file_path = base_dir.join(CONFIG_FILE_NAME);
        if !config_file_path.exists() {
            debug!("no config at {}, using defaults", config_file_path.display());
            return Ok(Self::new());
        }
        debug!("loading config from {}", config_file_path.display());
        let config_data = fs::read_to_string(&config_file_path)?;
        let config: Self = serde_json::from_str(&config_data)?;
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self, base_dir: &Path) -> Result<(), ConfigError> {
        fs::create_dir_all(base_dir)?;
        let config_file_path = base_dir.join(CONFIG_FILE_NAME);
        debug!("saving config to {}", config_file_path.display());
        let config_file = fs::File::create(&config_file_path)?;
        serde_json::to_writer_pretty(config_file, &self)?;
        Ok(())
    }

    pub fn touch(&mut self) {
        self.last_modified = Utc::now().format(TIME_FORMAT).to_string();
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

/// 重置为内置默认策略并写回
pub fn reset_config(base_dir: &Path) -> Result<ConfigFile, ConfigError> {
    let config = ConfigFile::new();
    config.save(base_dir)?;
    Ok(config)
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpasuite")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

/// 提示用户输入密码
pub fn read_password_from_stdin(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    read_password()
}
