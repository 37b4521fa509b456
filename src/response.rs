// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 显式响应状态模块
//!
//! 被包装的运行时通常把响应状态藏在框架内部，后一个处理器可以悄悄覆盖前一个
//! 处理器写下的状态码或标头。`ResponseState` 把这份状态变成一个显式的可变对象，
//! 通过 `&mut` 在处理链中传递。
//!
//! 覆盖策略统一为 **后写者胜出**（last writer wins）：
//! - 状态码：最后一次 `set_code` 生效；
//! - 标头：同名（大小写不敏感）标头被替换，位置保持不变；
//! - 响应体：最后一次 `set_content` 生效。

use bytes::Bytes;
use log::{debug, error};

use crate::{exception::Exception, param::*};

#[derive(Debug, Clone)]
pub struct ResponseState {
    status_code: u16,
    information: String,
    headers: Vec<(String, String)>,
    content: Option<Bytes>,
    server_name: String,
}

impl ResponseState {
    pub fn new() -> Self {
        Self {
            status_code: 200,
            information: "OK".to_string(),
            headers: Vec::new(),
            content: None,
            server_name: SERVER_NAME.to_string(),
        }
    }

    /// 指定渲染 `Server` 标头时使用的名称。
    pub fn with_server_name(mut self, server_name: &str) -> Self {
        self.server_name = server_name.to_string();
        self
    }

    /// 设置状态码，并从状态码表中取出原因短语。未知状态码不会改变当前状态。
    pub fn set_code(&mut self, code: u16) -> Result<&mut Self, Exception> {
        match STATUS_CODES.get(&code) {
            Some(&information) => {
                debug!("状态码：{} -> {}", self.status_code, code);
                self.status_code = code;
                self.information = information.to_string();
                Ok(self)
            }
            None => {
                error!("非法的状态码：{}", code);
                Err(Exception::InvalidStatusCode)
            }
        }
    }

    /// 设置标头，同名标头（大小写不敏感）被替换。
    pub fn set_header(&mut self, key: &str, value: &str) -> &mut Self {
        match self
            .headers
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
        {
            Some(entry) => {
                debug!("覆盖标头{}：{} -> {}", key, entry.1, value);
                entry.1 = value.to_string();
            }
            None => self.headers.push((key.to_string(), value.to_string())),
        }
        self
    }

    /// 设置响应体，`content_type` 为 `None` 时保留已有的 `Content-Type`。
    pub fn set_content(&mut self, content_type: Option<&str>, content: Bytes) -> &mut Self {
        if let Some(t) = content_type {
            self.set_header("Content-Type", t);
        }
        self.content = Some(content);
        self
    }

    /// 恢复为 `200 OK`，丢弃所有标头与响应体。
    pub fn clear(&mut self) -> &mut Self {
        self.status_code = 200;
        self.information = "OK".to_string();
        self.headers.clear();
        self.content = None;
        self
    }

    /// 永久重定向使用 301，临时重定向使用 302。
    pub fn redirect(&mut self, permanent: bool, location: &str) -> Result<&mut Self, Exception> {
        self.set_code(if permanent { 301 } else { 302 })?;
        Ok(self.set_header("Location", location))
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        let status_code: &str = &self.status_code.to_string();
        let information: &str = &self.information;
        let content_length: &str = &self.content_length().to_string();
        let server: &str = &self.server_name;

        let mut header = [HTTP_VERSION, " ", status_code, " ", information, CRLF].concat();
        for (name, value) in &self.headers {
            header.push_str(&[name.as_str(), ": ", value.as_str(), CRLF].concat());
        }
        header.push_str(&["Content-Length: ", content_length, CRLF].concat());
        header.push_str(&["Server: ", server, CRLF].concat());
        header.push_str(CRLF);
        let body: &[u8] = match &self.content {
            Some(c) => &c[..],
            None => &[],
        };
        [header.as_bytes(), body].concat()
    }
}

impl Default for ResponseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseState {
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn information(&self) -> &str {
        &self.information
    }

    /// 按名称（大小写不敏感）查找标头。
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn content(&self) -> Option<&Bytes> {
        self.content.as_ref()
    }

    pub fn content_length(&self) -> usize {
        self.content.as_ref().map_or(0, |c| c.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_new() {
        let state = ResponseState::new();

        assert_eq!(state.status_code(), 200);
        assert_eq!(state.information(), "OK");
        assert!(state.headers().is_empty());
        assert!(state.content().is_none());
    }

    #[test]
    fn test_status_code_last_writer_wins() {
        let mut state = ResponseState::new();
        state.set_code(404).unwrap();
        state.set_code(201).unwrap();

        assert_eq!(state.status_code(), 201);
        assert_eq!(state.information(), "Created");
    }

    #[test]
    fn test_unknown_status_code_keeps_state() {
        let mut state = ResponseState::new();
        state.set_code(404).unwrap();

        assert_eq!(state.set_code(999).unwrap_err(), Exception::InvalidStatusCode);
        assert_eq!(state.status_code(), 404);
        assert_eq!(state.information(), "Not Found");
    }

    #[test]
    fn test_header_last_writer_wins_ignoring_case() {
        let mut state = ResponseState::new();
        state.set_header("X-Trace", "one");
        state.set_header("Cache-Control", "no-cache");
        state.set_header("x-trace", "two");

        assert_eq!(state.headers().len(), 2);
        assert_eq!(state.header("X-TRACE"), Some("two"));
        assert_eq!(state.headers()[0].0, "X-Trace");
    }

    #[test]
    fn test_content_keeps_previous_type_when_none() {
        let mut state = ResponseState::new();
        state.set_content(Some(TEXT_PLAIN), Bytes::from("a"));
        state.set_content(None, Bytes::from("bb"));

        assert_eq!(state.header("content-type"), Some(TEXT_PLAIN));
        assert_eq!(state.content(), Some(&Bytes::from("bb")));
        assert_eq!(state.content_length(), 2);
    }

    #[test]
    fn test_clear() {
        let mut state = ResponseState::new();
        state.set_code(500).unwrap();
        state.set_header("X-A", "1");
        state.set_content(Some(TEXT_PLAIN), Bytes::from("boom"));
        state.clear();

        assert_eq!(state.status_code(), 200);
        assert_eq!(state.information(), "OK");
        assert!(state.headers().is_empty());
        assert!(state.content().is_none());
    }

    #[test]
    fn test_redirect() {
        let mut state = ResponseState::new();
        state.redirect(true, "/new").unwrap();
        assert_eq!(state.status_code(), 301);
        assert_eq!(state.header("Location"), Some("/new"));

        state.redirect(false, "/tmp").unwrap();
        assert_eq!(state.status_code(), 302);
        assert_eq!(state.header("location"), Some("/tmp"));
        assert_eq!(state.headers().len(), 1);
    }

    #[test]
    fn test_response_as_bytes_basic() {
        let state = ResponseState::new();
        let bytes = state.as_bytes();
        let response_str = String::from_utf8_lossy(&bytes);

        assert!(response_str.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response_str.contains("Content-Length: 0\r\n"));
        assert!(response_str.contains("Server: shaneyale-webbuilder\r\n"));
        assert!(response_str.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_response_as_bytes_with_content() {
        let mut state = ResponseState::new().with_server_name("test-server");
        state.set_code(404).unwrap();
        state.set_content(Some(TEXT_PLAIN), Bytes::from("Hello"));

        let bytes = state.as_bytes();
        let response_str = String::from_utf8_lossy(&bytes);

        assert!(response_str.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(response_str.contains("Content-Type: text/plain; charset=utf-8\r\n"));
        assert!(response_str.contains("Content-Length: 5\r\n"));
        assert!(response_str.contains("Server: test-server\r\n"));
        assert!(response_str.ends_with("\r\n\r\nHello"));
    }
}
