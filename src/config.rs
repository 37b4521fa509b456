// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

use serde_derive::Deserialize;
use serde_derive::Serialize;

use log::{error, warn};
use std::fs::File;
use std::io::{self, prelude::*};

use crate::{builder::Culture, exception::Exception, param::SERVER_NAME};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_log_config")]
    log_config: String,
    #[serde(default = "default_server_name")]
    server_name: String,
    #[serde(default)]
    culture: Option<String>,
    #[serde(default = "default_sample_method")]
    sample_method: String,
    #[serde(default = "default_sample_path")]
    sample_path: String,
    #[serde(default)]
    sample_body: Option<String>,
    #[serde(default)]
    sample_query: Option<String>,
}

fn default_log_config() -> String {
    "config/log4rs.yaml".to_string()
}

fn default_server_name() -> String {
    SERVER_NAME.to_string()
}

fn default_sample_method() -> String {
    "GET".to_string()
}

fn default_sample_path() -> String {
    "/".to_string()
}

impl Config {
    pub fn new() -> Self {
        Self {
            log_config: default_log_config(),
            server_name: default_server_name(),
            culture: None,
            sample_method: default_sample_method(),
            sample_path: default_sample_path(),
            sample_body: None,
            sample_query: None,
        }
    }

    /// 从 TOML 文件读取配置。
    ///
    /// 文件不存在或无法读取时返回错误；内容无法解析时记录错误并使用默认配置。
    pub fn from_toml(filename: &str) -> Result<Self, Exception> {
        let mut file = match File::open(filename) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                error!("配置文件{}不存在：{}", filename, e);
                return Err(Exception::ConfigNotFound);
            }
            Err(e) => {
                error!("无法打开配置文件{}：{}", filename, e);
                return Err(Exception::ConfigUnreadable);
            }
        };
        let mut str_val = String::new();
        if let Err(e) = file.read_to_string(&mut str_val) {
            error!("读取配置文件{}失败：{}", filename, e);
            return Err(Exception::ConfigUnreadable);
        }

        let mut raw_config: Config = match toml::from_str(&str_val) {
            Ok(t) => t,
            Err(e) => {
                error!("无法成功从配置文件构建配置对象，使用默认配置：{}", e);
                Config::new()
            }
        };
        if let Some(name) = &raw_config.culture {
            if Culture::new(name).is_err() {
                warn!("culture被设置为{}，这不是合法的区域名称，因此将忽略该值。", name);
                raw_config.culture = None;
            }
        }
        Ok(raw_config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn log_config(&self) -> &str {
        &self.log_config
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// 已校验的区域设置，未配置时为 `None`。
    pub fn culture(&self) -> Option<Culture> {
        self.culture.as_deref().and_then(|name| Culture::new(name).ok())
    }

    pub fn sample_method(&self) -> &str {
        &self.sample_method
    }

    pub fn sample_path(&self) -> &str {
        &self.sample_path
    }

    pub fn sample_body(&self) -> Option<&str> {
        self.sample_body.as_deref()
    }

    pub fn sample_query(&self) -> Option<&str> {
        self.sample_query.as_deref()
    }
}
