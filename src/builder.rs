// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 能力接口模块
//!
//! `ServerBuilder` 是组合子门面与具体 HTTP 运行时之间唯一的接缝。
//! 运行时适配器实现该 trait，`combinator` 中的每个自由函数都只做一件事：
//! 把参数原样转交给同名方法，并把结果原样返回。
//!
//! 路由树、请求解析、模型绑定、内容协商以及响应流式写出都属于实现方的职责。

use std::{fmt, path::Path};

use bytes::Bytes;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};

use crate::{exception::Exception, format::RouteArgs};

lazy_static! {
    static ref CULTURE_NAME: Regex = Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap();
}

/// 文化相关解析所使用的区域设置，例如 `de-DE` 中的小数逗号。
///
/// 门面不解释区域设置，只把它交给能力对象的绑定操作。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    name: String,
}

impl Culture {
    /// 以语言标记构造区域设置，名称不合法时返回 `Exception::InvalidCulture`。
    pub fn new(name: &str) -> Result<Self, Exception> {
        if CULTURE_NAME.is_match(name) {
            Ok(Self {
                name: name.to_string(),
            })
        } else {
            Err(Exception::InvalidCulture)
        }
    }

    /// 与区域无关的固定格式，名称为空字符串。
    pub fn invariant() -> Self {
        Self {
            name: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            write!(f, "invariant")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// 请求处理原语的能力集合。
///
/// `Handler` 是实现方定义的“一个请求处理单元”，门面从不查看其内部结构。
/// 带续延（continuation）的方法要求续延为 `'static`，实现方可以把它保存到
/// 处理器中，等到真正的请求到来时再调用。
pub trait ServerBuilder: Clone + 'static {
    type Handler;

    // --- 请求方法过滤 ---
    fn get(&self) -> Self::Handler;
    fn post(&self) -> Self::Handler;
    fn put(&self) -> Self::Handler;
    fn patch(&self) -> Self::Handler;
    fn delete(&self) -> Self::Handler;
    fn head(&self) -> Self::Handler;
    fn options(&self) -> Self::Handler;
    fn trace(&self) -> Self::Handler;
    fn connect(&self) -> Self::Handler;

    // --- 路由过滤 ---
    fn route(&self, path: &str) -> Self::Handler;
    fn route_ci(&self, path: &str) -> Self::Handler;
    fn routex(&self, pattern: &str) -> Self::Handler;
    fn route_cix(&self, pattern: &str) -> Self::Handler;
    fn route_starts_with(&self, prefix: &str) -> Self::Handler;
    fn route_starts_with_ci(&self, prefix: &str) -> Self::Handler;
    fn sub_route(&self, prefix: &str, handler: Self::Handler) -> Self::Handler;
    fn sub_route_ci(&self, prefix: &str, handler: Self::Handler) -> Self::Handler;

    /// 按模板解析路径参数，解析出的元组交给 `next`。
    fn routef<T, F>(&self, format: &str, next: F) -> Self::Handler
    where
        T: RouteArgs,
        F: Fn(T) -> Self::Handler + 'static;

    /// 大小写不敏感的 `routef`。
    fn route_cif<T, F>(&self, format: &str, next: F) -> Self::Handler
    where
        T: RouteArgs,
        F: Fn(T) -> Self::Handler + 'static;

    /// 只匹配路径前缀的 `routef`，其余部分留给 `next` 产生的处理器。
    fn sub_routef<T, F>(&self, format: &str, next: F) -> Self::Handler
    where
        T: RouteArgs,
        F: Fn(T) -> Self::Handler + 'static;

    fn route_ports(&self, routes: Vec<(u16, Self::Handler)>) -> Self::Handler;

    // --- 组合 ---

    /// 顺序组合两个处理器（即 `>=>`）。
    fn compose(&self, first: Self::Handler, second: Self::Handler) -> Self::Handler;

    /// 选择第一个成功的处理器，选择策略完全由实现方决定。
    fn choose(&self, handlers: Vec<Self::Handler>) -> Self::Handler;

    // --- 模型绑定 ---
    fn bind_json<T, F>(&self, next: F) -> Self::Handler
    where
        T: DeserializeOwned,
        F: Fn(T) -> Self::Handler + 'static;

    fn bind_xml<T, F>(&self, next: F) -> Self::Handler
    where
        T: DeserializeOwned,
        F: Fn(T) -> Self::Handler + 'static;

    fn bind_form<T, F>(&self, culture: Option<&Culture>, next: F) -> Self::Handler
    where
        T: DeserializeOwned,
        F: Fn(T) -> Self::Handler + 'static;

    fn try_bind_form<T, E, F>(&self, on_error: E, culture: Option<&Culture>, next: F) -> Self::Handler
    where
        T: DeserializeOwned,
        E: Fn(String) -> Self::Handler + 'static,
        F: Fn(T) -> Self::Handler + 'static;

    fn bind_query<T, F>(&self, culture: Option<&Culture>, next: F) -> Self::Handler
    where
        T: DeserializeOwned,
        F: Fn(T) -> Self::Handler + 'static;

    fn try_bind_query<T, E, F>(&self, on_error: E, culture: Option<&Culture>, next: F) -> Self::Handler
    where
        T: DeserializeOwned,
        E: Fn(String) -> Self::Handler + 'static,
        F: Fn(T) -> Self::Handler + 'static;

    fn bind_model<T, F>(&self, culture: Option<&Culture>, next: F) -> Self::Handler
    where
        T: DeserializeOwned,
        F: Fn(T) -> Self::Handler + 'static;

    // --- 响应写入 ---
    fn set_body(&self, bytes: Bytes) -> Self::Handler;
    fn set_body_from_string(&self, body: &str) -> Self::Handler;
    fn text(&self, body: &str) -> Self::Handler;
    fn json<T: Serialize + ?Sized>(&self, value: &T) -> Self::Handler;
    fn json_chunked<T: Serialize + ?Sized>(&self, value: &T) -> Self::Handler;
    fn xml<T: Serialize + ?Sized>(&self, value: &T) -> Self::Handler;
    fn html_file(&self, path: &Path) -> Self::Handler;
    fn html_string(&self, html: &str) -> Self::Handler;

    // --- 响应状态 ---
    fn set_status_code(&self, code: u16) -> Self::Handler;
    fn set_http_header(&self, key: &str, value: &str) -> Self::Handler;
    fn clear_response(&self) -> Self::Handler;
    fn redirect_to(&self, permanent: bool, location: &str) -> Self::Handler;
    fn must_accept(&self, mime_types: &[&str]) -> Self::Handler;
}
