// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 记录型能力对象
//!
//! `Recorder` 实现了 `ServerBuilder`，但不处理任何真实请求：
//! 每次原语调用都按顺序追加到调用日志中，返回的 `Recorded` 是一棵描述处理链的树。
//! 它既是门面测试用的替身，也是命令行工具用来展示处理链的能力对象。
//!
//! ## 约定
//! - 调用日志由所有克隆共享，续延拿到的克隆与调用方的 `Recorder` 指向同一份日志。
//! - `compose` 与 `choose` 不写入日志，只作为树中的节点出现。
//! - 父调用先于其续延内部的调用写入日志。
//! - `routef` 系列用示例路径（及其去掉前导段后的各个后缀）匹配模板，匹配成功才调用续延。
//! - 绑定操作不解码任何报文格式：json/xml/form/model 统一从 JSON 请求体桩数据
//!   反序列化，query 从 JSON 查询桩数据反序列化。`culture` 参数只写入调用记录，
//!   不影响反序列化。
//!
//! ## 回放
//! `Recorder::replay` 以示例请求（方法与路径）走一遍处理链：
//! - 方法过滤与路由过滤在回放时判定，不匹配即为未命中；
//! - `sub_route` 去掉前缀后把剩余路径交给内层处理器；
//! - `compose` 遇到未命中立即停止，`choose` 回放第一个命中的分支；
//! - `must_accept` 总是通过，`route_ports` 只回放第一个端口的处理器；
//! - 序列化失败的写入操作使回放返回错误。

use std::{cell::RefCell, fmt, fs, iter, path::Path, rc::Rc};

use bytes::Bytes;
use log::{debug, error, warn};
use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    builder::{Culture, ServerBuilder},
    config::Config,
    exception::Exception,
    format::{PathFormat, RouteArgs},
    param::*,
    response::ResponseState,
};

/// 一次原语调用：操作名与按字符串记录的参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    op: &'static str,
    args: Vec<String>,
}

impl Call {
    pub fn new(op: &'static str, args: Vec<String>) -> Self {
        Self { op, args }
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.op)
        } else {
            write!(f, "{}({})", self.op, self.args.join(", "))
        }
    }
}

/// 构造处理链时就能确定的结果。
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    /// 留到回放时判定
    Deferred,
    /// 续延没有被调用：模板不匹配或绑定失败
    Skipped,
    /// 模板匹配了示例路径中的 `path`，`rest` 是前缀模板剩下的部分
    Matched { path: String, rest: String },
    /// 写入操作失败
    Failed(String),
}

/// `Recorder` 产生的处理器：一次调用以及由它派生出的子处理器。
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    call: Call,
    children: Vec<Recorded>,
    outcome: Outcome,
}

impl Recorded {
    fn leaf(call: Call) -> Self {
        Self::with_children(call, Vec::new())
    }

    fn with_children(call: Call, children: Vec<Recorded>) -> Self {
        Self {
            call,
            children,
            outcome: Outcome::Deferred,
        }
    }

    fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn call(&self) -> &Call {
        &self.call
    }

    pub fn children(&self) -> &[Recorded] {
        &self.children
    }

    /// 续延是否因为模板不匹配或绑定失败而没有被调用。
    pub fn is_skipped(&self) -> bool {
        self.outcome == Outcome::Skipped
    }

    /// 写入操作失败时的错误信息。
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    fn first_arg(&self) -> &str {
        self.call.args.first().map(String::as_str).unwrap_or("")
    }

    /// 对 `method path` 回放处理链，返回请求是否被处理。
    fn apply(&self, method: &str, path: &str, state: &mut ResponseState) -> Result<bool, Exception> {
        match &self.outcome {
            Outcome::Failed(message) => {
                error!("回放{}失败：{}", self.call.op, message);
                return Err(Exception::ModelSerialization);
            }
            Outcome::Skipped => return Ok(false),
            Outcome::Matched { path: matched, rest } => {
                if matched.as_str() != path {
                    return Ok(false);
                }
                return self.apply_children(method, rest, state);
            }
            Outcome::Deferred => {}
        }

        let op = self.call.op;
        match op {
            "compose" => self.apply_children(method, path, state),
            "choose" => {
                for child in &self.children {
                    let mut trial = state.clone();
                    if child.apply(method, path, &mut trial)? {
                        *state = trial;
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            "route_ports" => match self.children.first() {
                Some(first) => first.apply(method, path, state),
                None => Ok(false),
            },
            "get" | "post" | "put" | "patch" | "delete" | "head" | "options" | "trace" | "connect" => {
                Ok(op.eq_ignore_ascii_case(method))
            }
            "route" => Ok(path == self.first_arg()),
            "route_ci" => Ok(path.eq_ignore_ascii_case(self.first_arg())),
            "routex" => Ok(matches_pattern(self.first_arg(), path, false)),
            "route_cix" => Ok(matches_pattern(self.first_arg(), path, true)),
            "route_starts_with" => Ok(path.starts_with(self.first_arg())),
            "route_starts_with_ci" => Ok(strip_prefix_ci(path, self.first_arg()).is_some()),
            "sub_route" | "sub_route_ci" => {
                let rest = if op == "sub_route" {
                    path.strip_prefix(self.first_arg())
                } else {
                    strip_prefix_ci(path, self.first_arg())
                };
                match rest {
                    Some(rest) => self.apply_children(method, rest, state),
                    None => Ok(false),
                }
            }
            "must_accept" => Ok(true),
            "set_status_code" => {
                let code = match self.first_arg().parse() {
                    Ok(c) => c,
                    Err(_) => return Err(Exception::InvalidStatusCode),
                };
                state.set_code(code)?;
                Ok(true)
            }
            "set_http_header" => {
                if let [key, value] = self.call.args.as_slice() {
                    state.set_header(key, value);
                }
                Ok(true)
            }
            "clear_response" => {
                state.clear();
                Ok(true)
            }
            "redirect_to" => {
                if let [permanent, location] = self.call.args.as_slice() {
                    state.redirect(permanent.as_str() == "true", location)?;
                }
                Ok(true)
            }
            "set_body" | "set_body_from_string" => {
                state.set_content(None, Bytes::from(self.first_arg().to_string()));
                Ok(true)
            }
            "text" => {
                state.set_content(Some(TEXT_PLAIN), Bytes::from(self.first_arg().to_string()));
                Ok(true)
            }
            "json" | "json_chunked" => {
                state.set_content(Some(APPLICATION_JSON), Bytes::from(self.first_arg().to_string()));
                Ok(true)
            }
            "xml" => {
                state.set_content(Some(APPLICATION_XML), Bytes::from(self.first_arg().to_string()));
                Ok(true)
            }
            "html_string" => {
                state.set_content(Some(TEXT_HTML), Bytes::from(self.first_arg().to_string()));
                Ok(true)
            }
            "html_file" => {
                let content = match fs::read(self.first_arg()) {
                    Ok(c) => c,
                    Err(e) => {
                        error!("无法读取HTML文件{}：{}", self.first_arg(), e);
                        return Err(Exception::FileNotFound);
                    }
                };
                state.set_content(Some(TEXT_HTML), Bytes::from(content));
                Ok(true)
            }
            _ => self.apply_children(method, path, state),
        }
    }

    fn apply_children(&self, method: &str, path: &str, state: &mut ResponseState) -> Result<bool, Exception> {
        for child in &self.children {
            if !child.apply(method, path, state)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn matches_pattern(pattern: &str, path: &str, ignore_case: bool) -> bool {
    let anchored = format!("{}^(?:{})$", if ignore_case { "(?i)" } else { "" }, pattern);
    match Regex::new(&anchored) {
        Ok(regex) => regex.is_match(path),
        Err(_) => false,
    }
}

fn strip_prefix_ci<'p>(path: &'p str, prefix: &str) -> Option<&'p str> {
    let head = path.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        path.get(prefix.len()..)
    } else {
        None
    }
}

/// 示例路径本身以及去掉若干前导段后的各个后缀，即 `sub_route` 可能交给内层处理器的路径。
fn path_suffixes(path: &str) -> impl Iterator<Item = &str> {
    iter::once(path).chain(
        path.char_indices()
            .filter(|&(i, c)| c == '/' && i > 0)
            .map(move |(i, _)| &path[i..]),
    )
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Recorded], separator: &str) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Recorded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Outcome::Failed(message) = &self.outcome {
            return write!(f, "{} [error: {}]", self.call, message);
        }
        match self.call.op {
            "compose" => write_joined(f, &self.children, " >=> "),
            "choose" => {
                write!(f, "choose [")?;
                write_joined(f, &self.children, "; ")?;
                write!(f, "]")
            }
            "route_ports" => {
                write!(f, "route_ports [")?;
                for (index, (port, child)) in self.call.args.iter().zip(&self.children).enumerate() {
                    if index > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", port, child)?;
                }
                write!(f, "]")
            }
            _ if self.children.is_empty() => write!(f, "{}", self.call),
            _ => {
                write!(f, "{} => (", self.call)?;
                write_joined(f, &self.children, "; ")?;
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Fixture {
    method: String,
    path: String,
    body: Option<Value>,
    query: Option<Value>,
}

/// 记录每次原语调用的能力对象。
#[derive(Debug, Clone)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
    fixture: Rc<Fixture>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            fixture: Rc::new(Fixture {
                method: "GET".to_string(),
                path: "/".to_string(),
                body: None,
                query: None,
            }),
        }
    }

    /// 设置回放时方法过滤所比较的示例请求方法。
    pub fn with_method(mut self, method: &str) -> Self {
        Rc::make_mut(&mut self.fixture).method = method.to_ascii_uppercase();
        self
    }

    /// 设置 `routef` 系列与回放所使用的示例请求路径。
    pub fn with_path(mut self, path: &str) -> Self {
        Rc::make_mut(&mut self.fixture).path = path.to_string();
        self
    }

    /// 设置 json/xml/form/model 绑定所使用的请求体。
    pub fn with_body(mut self, body: Value) -> Self {
        Rc::make_mut(&mut self.fixture).body = Some(body);
        self
    }

    /// 设置 query 绑定所使用的查询参数。
    pub fn with_query(mut self, query: Value) -> Self {
        Rc::make_mut(&mut self.fixture).query = Some(query);
        self
    }

    /// 按配置文件中的示例数据构造。请求体或查询参数不是合法 JSON 时返回 `Exception::InvalidFixture`。
    pub fn from_config(config: &Config) -> Result<Self, Exception> {
        let mut recorder = Self::new()
            .with_method(config.sample_method())
            .with_path(config.sample_path());
        if let Some(body) = config.sample_body() {
            recorder = recorder.with_body(parse_fixture(body)?);
        }
        if let Some(query) = config.sample_query() {
            recorder = recorder.with_query(parse_fixture(query)?);
        }
        Ok(recorder)
    }

    /// 到目前为止记录的全部调用（按调用顺序）。
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// 两个 `Recorder` 是否写入同一份调用日志。
    pub fn shares_log_with(&self, other: &Recorder) -> bool {
        Rc::ptr_eq(&self.calls, &other.calls)
    }

    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }

    /// 以示例请求回放 `handler`，返回请求是否被处理。
    ///
    /// 只有请求被处理时写入才会落到 `state` 上；未命中时 `state` 保持不变。
    pub fn replay(&self, handler: &Recorded, state: &mut ResponseState) -> Result<bool, Exception> {
        let mut trial = state.clone();
        let handled = handler.apply(&self.fixture.method, &self.fixture.path, &mut trial)?;
        if handled {
            *state = trial;
        } else {
            debug!("示例请求{} {}没有被处理链处理", self.fixture.method, self.fixture.path);
        }
        Ok(handled)
    }

    fn record(&self, op: &'static str, args: Vec<String>) -> Call {
        let call = Call::new(op, args);
        let mut calls = self.calls.borrow_mut();
        debug!("[#{}]记录调用：{}", calls.len(), call);
        calls.push(call.clone());
        call
    }

    fn leaf(&self, op: &'static str, args: Vec<String>) -> Recorded {
        Recorded::leaf(self.record(op, args))
    }

    fn format_route<T, F>(
        &self,
        op: &'static str,
        format: &str,
        compiled: Result<PathFormat<T>, Exception>,
        next: F,
    ) -> Recorded
    where
        T: RouteArgs,
        F: Fn(T) -> Recorded,
    {
        let call = self.record(op, vec![format.to_string()]);
        let compiled = match compiled {
            Ok(c) => c,
            Err(e) => {
                error!("{}的路由模板{}无法使用：{}", op, format, e);
                return Recorded::leaf(call).with_outcome(Outcome::Skipped);
            }
        };
        let found = path_suffixes(&self.fixture.path)
            .find_map(|candidate| compiled.extract(candidate).map(|args| (candidate, args)));
        match found {
            Some((candidate, args)) => {
                let rest = compiled.remainder(candidate).unwrap_or("").to_string();
                let outcome = Outcome::Matched {
                    path: candidate.to_string(),
                    rest,
                };
                Recorded::with_children(call, vec![next(args)]).with_outcome(outcome)
            }
            None => {
                debug!("示例路径{}与模板{}不匹配，跳过续延", self.fixture.path, format);
                Recorded::leaf(call).with_outcome(Outcome::Skipped)
            }
        }
    }

    fn bind<T, F>(&self, op: &'static str, culture: Option<&Culture>, source: Option<&Value>, next: F) -> Recorded
    where
        T: DeserializeOwned,
        F: Fn(T) -> Recorded,
    {
        let call = self.record(op, culture_args(culture));
        match deserialize(source) {
            Ok(model) => Recorded::with_children(call, vec![next(model)]),
            Err(message) => {
                warn!("{}绑定失败：{}", op, message);
                Recorded::leaf(call).with_outcome(Outcome::Skipped)
            }
        }
    }

    fn try_bind<T, E, F>(
        &self,
        op: &'static str,
        on_error: E,
        culture: Option<&Culture>,
        source: Option<&Value>,
        next: F,
    ) -> Recorded
    where
        T: DeserializeOwned,
        E: Fn(String) -> Recorded,
        F: Fn(T) -> Recorded,
    {
        let call = self.record(op, culture_args(culture));
        let child = match deserialize(source) {
            Ok(model) => next(model),
            Err(message) => {
                debug!("{}绑定失败，转交错误续延：{}", op, message);
                on_error(message)
            }
        };
        Recorded::with_children(call, vec![child])
    }

    fn write_model<T: Serialize + ?Sized>(&self, op: &'static str, value: &T) -> Recorded {
        match serde_json::to_string(value) {
            Ok(rendered) => self.leaf(op, vec![rendered]),
            Err(e) => {
                error!("{}无法序列化模型：{}", op, e);
                Recorded::leaf(self.record(op, vec![])).with_outcome(Outcome::Failed(e.to_string()))
            }
        }
    }

    fn check_pattern(&self, op: &'static str, pattern: &str) {
        if let Err(e) = Regex::new(pattern) {
            warn!("{}的正则{}无法编译：{}", op, pattern, e);
        }
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_fixture(text: &str) -> Result<Value, Exception> {
    match serde_json::from_str(text) {
        Ok(v) => Ok(v),
        Err(e) => {
            error!("测试桩数据不是合法的JSON：{}", e);
            Err(Exception::InvalidFixture)
        }
    }
}

fn deserialize<T: DeserializeOwned>(source: Option<&Value>) -> Result<T, String> {
    match source {
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| e.to_string()),
        None => Err("no data to bind".to_string()),
    }
}

fn culture_args(culture: Option<&Culture>) -> Vec<String> {
    culture.map(|c| c.to_string()).into_iter().collect()
}

impl ServerBuilder for Recorder {
    type Handler = Recorded;

    fn get(&self) -> Recorded {
        self.leaf("get", vec![])
    }

    fn post(&self) -> Recorded {
        self.leaf("post", vec![])
    }

    fn put(&self) -> Recorded {
        self.leaf("put", vec![])
    }

    fn patch(&self) -> Recorded {
        self.leaf("patch", vec![])
    }

    fn delete(&self) -> Recorded {
        self.leaf("delete", vec![])
    }

    fn head(&self) -> Recorded {
        self.leaf("head", vec![])
    }

    fn options(&self) -> Recorded {
        self.leaf("options", vec![])
    }

    fn trace(&self) -> Recorded {
        self.leaf("trace", vec![])
    }

    fn connect(&self) -> Recorded {
        self.leaf("connect", vec![])
    }

    fn route(&self, path: &str) -> Recorded {
        self.leaf("route", vec![path.to_string()])
    }

    fn route_ci(&self, path: &str) -> Recorded {
        self.leaf("route_ci", vec![path.to_string()])
    }

    fn routex(&self, pattern: &str) -> Recorded {
        self.check_pattern("routex", pattern);
        self.leaf("routex", vec![pattern.to_string()])
    }

    fn route_cix(&self, pattern: &str) -> Recorded {
        self.check_pattern("route_cix", pattern);
        self.leaf("route_cix", vec![pattern.to_string()])
    }

    fn route_starts_with(&self, prefix: &str) -> Recorded {
        self.leaf("route_starts_with", vec![prefix.to_string()])
    }

    fn route_starts_with_ci(&self, prefix: &str) -> Recorded {
        self.leaf("route_starts_with_ci", vec![prefix.to_string()])
    }

    fn sub_route(&self, prefix: &str, handler: Recorded) -> Recorded {
        let call = self.record("sub_route", vec![prefix.to_string()]);
        Recorded::with_children(call, vec![handler])
    }

    fn sub_route_ci(&self, prefix: &str, handler: Recorded) -> Recorded {
        let call = self.record("sub_route_ci", vec![prefix.to_string()]);
        Recorded::with_children(call, vec![handler])
    }

    fn routef<T, F>(&self, format: &str, next: F) -> Recorded
    where
        T: RouteArgs,
        F: Fn(T) -> Recorded + 'static,
    {
        self.format_route("routef", format, PathFormat::exact(format, false), next)
    }

    fn route_cif<T, F>(&self, format: &str, next: F) -> Recorded
    where
        T: RouteArgs,
        F: Fn(T) -> Recorded + 'static,
    {
        self.format_route("route_cif", format, PathFormat::exact(format, true), next)
    }

    fn sub_routef<T, F>(&self, format: &str, next: F) -> Recorded
    where
        T: RouteArgs,
        F: Fn(T) -> Recorded + 'static,
    {
        self.format_route("sub_routef", format, PathFormat::prefix(format, false), next)
    }

    fn route_ports(&self, routes: Vec<(u16, Recorded)>) -> Recorded {
        let (ports, handlers): (Vec<u16>, Vec<Recorded>) = routes.into_iter().unzip();
        let call = self.record("route_ports", ports.iter().map(u16::to_string).collect());
        Recorded::with_children(call, handlers)
    }

    fn compose(&self, first: Recorded, second: Recorded) -> Recorded {
        Recorded::with_children(Call::new("compose", vec![]), vec![first, second])
    }

    fn choose(&self, handlers: Vec<Recorded>) -> Recorded {
        Recorded::with_children(Call::new("choose", vec![]), handlers)
    }

    fn bind_json<T, F>(&self, next: F) -> Recorded
    where
        T: DeserializeOwned,
        F: Fn(T) -> Recorded + 'static,
    {
        self.bind("bind_json", None, self.fixture.body.as_ref(), next)
    }

    fn bind_xml<T, F>(&self, next: F) -> Recorded
    where
        T: DeserializeOwned,
        F: Fn(T) -> Recorded + 'static,
    {
        self.bind("bind_xml", None, self.fixture.body.as_ref(), next)
    }

    fn bind_form<T, F>(&self, culture: Option<&Culture>, next: F) -> Recorded
    where
        T: DeserializeOwned,
        F: Fn(T) -> Recorded + 'static,
    {
        self.bind("bind_form", culture, self.fixture.body.as_ref(), next)
    }

    fn try_bind_form<T, E, F>(&self, on_error: E, culture: Option<&Culture>, next: F) -> Recorded
    where
        T: DeserializeOwned,
        E: Fn(String) -> Recorded + 'static,
        F: Fn(T) -> Recorded + 'static,
    {
        self.try_bind("try_bind_form", on_error, culture, self.fixture.body.as_ref(), next)
    }

    fn bind_query<T, F>(&self, culture: Option<&Culture>, next: F) -> Recorded
    where
        T: DeserializeOwned,
        F: Fn(T) -> Recorded + 'static,
    {
        self.bind("bind_query", culture, self.fixture.query.as_ref(), next)
    }

    fn try_bind_query<T, E, F>(&self, on_error: E, culture: Option<&Culture>, next: F) -> Recorded
    where
        T: DeserializeOwned,
        E: Fn(String) -> Recorded + 'static,
        F: Fn(T) -> Recorded + 'static,
    {
        self.try_bind("try_bind_query", on_error, culture, self.fixture.query.as_ref(), next)
    }

    fn bind_model<T, F>(&self, culture: Option<&Culture>, next: F) -> Recorded
    where
        T: DeserializeOwned,
        F: Fn(T) -> Recorded + 'static,
    {
        self.bind("bind_model", culture, self.fixture.body.as_ref(), next)
    }

    fn set_body(&self, bytes: Bytes) -> Recorded {
        self.leaf("set_body", vec![String::from_utf8_lossy(&bytes).into_owned()])
    }

    fn set_body_from_string(&self, body: &str) -> Recorded {
        self.leaf("set_body_from_string", vec![body.to_string()])
    }

    fn text(&self, body: &str) -> Recorded {
        self.leaf("text", vec![body.to_string()])
    }

    fn json<T: Serialize + ?Sized>(&self, value: &T) -> Recorded {
        self.write_model("json", value)
    }

    fn json_chunked<T: Serialize + ?Sized>(&self, value: &T) -> Recorded {
        self.write_model("json_chunked", value)
    }

    fn xml<T: Serialize + ?Sized>(&self, value: &T) -> Recorded {
        self.write_model("xml", value)
    }

    fn html_file(&self, path: &Path) -> Recorded {
        self.leaf("html_file", vec![path.display().to_string()])
    }

    fn html_string(&self, html: &str) -> Recorded {
        self.leaf("html_string", vec![html.to_string()])
    }

    fn set_status_code(&self, code: u16) -> Recorded {
        self.leaf("set_status_code", vec![code.to_string()])
    }

    fn set_http_header(&self, key: &str, value: &str) -> Recorded {
        self.leaf("set_http_header", vec![key.to_string(), value.to_string()])
    }

    fn clear_response(&self) -> Recorded {
        self.leaf("clear_response", vec![])
    }

    fn redirect_to(&self, permanent: bool, location: &str) -> Recorded {
        self.leaf("redirect_to", vec![permanent.to_string(), location.to_string()])
    }

    fn must_accept(&self, mime_types: &[&str]) -> Recorded {
        self.leaf("must_accept", mime_types.iter().map(|m| m.to_string()).collect())
    }
}
