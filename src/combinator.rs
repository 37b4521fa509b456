// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 处理器组合子门面
//!
//! 本模块以自由函数的形式提供一组固定的请求处理原语：请求方法过滤、路由过滤、
//! 模型绑定、响应写入、重定向以及组合算子。每个函数的最后一个参数都是能力对象
//! `builder`，函数体只是把参数转交给 `builder` 上的同名方法并原样返回结果。
//!
//! 本地唯一的工作是参数整理：
//! - 把“产生处理器的函数”对同一个能力对象求值（`compose`、`choose`、`sub_route`、`route_ports`）；
//! - 包装调用方的续延，使续延再次拿到同一个能力对象（`routef`、`bind_*`）。
//!
//! 门面不做校验、不捕获错误、不写日志，也不保存任何状态。
//!
//! ```ignore
//! let app = fish(
//!     |b: &Recorder| route("/a", b),
//!     |b: &Recorder| text("and test a", b),
//! );
//! let handler = app(&recorder);
//! ```

use std::path::Path;

use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    builder::{Culture, ServerBuilder},
    format::RouteArgs,
};

/// 装箱后的处理器生成函数，用于在 `choose` 中混合不同的闭包。
pub type HandlerFn<B> = Box<dyn Fn(&B) -> <B as ServerBuilder>::Handler>;

// --- 请求方法过滤 ---

pub fn get<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.get()
}

pub fn post<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.post()
}

pub fn put<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.put()
}

pub fn patch<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.patch()
}

pub fn delete<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.delete()
}

pub fn head<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.head()
}

pub fn options<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.options()
}

pub fn trace<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.trace()
}

pub fn connect<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.connect()
}

// --- 路由过滤 ---

pub fn route<B: ServerBuilder>(path: &str, builder: &B) -> B::Handler {
    builder.route(path)
}

pub fn route_ci<B: ServerBuilder>(path: &str, builder: &B) -> B::Handler {
    builder.route_ci(path)
}

pub fn routex<B: ServerBuilder>(pattern: &str, builder: &B) -> B::Handler {
    builder.routex(pattern)
}

pub fn route_cix<B: ServerBuilder>(pattern: &str, builder: &B) -> B::Handler {
    builder.route_cix(pattern)
}

pub fn route_starts_with<B: ServerBuilder>(prefix: &str, builder: &B) -> B::Handler {
    builder.route_starts_with(prefix)
}

pub fn route_starts_with_ci<B: ServerBuilder>(prefix: &str, builder: &B) -> B::Handler {
    builder.route_starts_with_ci(prefix)
}

/// 先对同一个能力对象求出内层处理器，再交给 `builder.sub_route`。
pub fn sub_route<B, F>(prefix: &str, handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    F: FnOnce(&B) -> B::Handler,
{
    builder.sub_route(prefix, handler(builder))
}

pub fn sub_route_ci<B, F>(prefix: &str, handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    F: FnOnce(&B) -> B::Handler,
{
    builder.sub_route_ci(prefix, handler(builder))
}

/// 解析出的参数元组原样交给 `handler`，`handler` 同时收到调用方提供的能力对象。
pub fn routef<B, T, F>(format: &str, handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    T: RouteArgs,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let inner = builder.clone();
    builder.routef(format, move |args: T| handler(args, &inner))
}

pub fn route_cif<B, T, F>(format: &str, handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    T: RouteArgs,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let inner = builder.clone();
    builder.route_cif(format, move |args: T| handler(args, &inner))
}

pub fn sub_routef<B, T, F>(format: &str, handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    T: RouteArgs,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let inner = builder.clone();
    builder.sub_routef(format, move |args: T| handler(args, &inner))
}

/// 按给定顺序对每个端口的处理器求值，再把整张表交给能力对象。
pub fn route_ports<B, I, F>(routes: I, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    I: IntoIterator<Item = (u16, F)>,
    F: FnOnce(&B) -> B::Handler,
{
    let routes = routes
        .into_iter()
        .map(|(port, handler)| (port, handler(builder)))
        .collect();
    builder.route_ports(routes)
}

// --- 组合 ---

/// 先求 `first`，再求 `second`，各一次，然后请能力对象把两者串联。
pub fn compose<B, F, G>(first: F, second: G, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    F: FnOnce(&B) -> B::Handler,
    G: FnOnce(&B) -> B::Handler,
{
    let first = first(builder);
    let second = second(builder);
    builder.compose(first, second)
}

/// `>=>` 运算符：返回一个新的处理器生成函数，调用时等价于 `compose(first, second, builder)`。
///
/// 返回值本身也可以作为 `fish` 的参数，从而自左向右串起任意长的处理链。
pub fn fish<B, F, G>(first: F, second: G) -> impl Fn(&B) -> B::Handler
where
    B: ServerBuilder,
    F: Fn(&B) -> B::Handler,
    G: Fn(&B) -> B::Handler,
{
    move |builder: &B| compose(&first, &second, builder)
}

/// 对列表中的每个处理器生成函数都求值（从不短路），再由能力对象选出第一个成功的。
pub fn choose<B, I>(handlers: I, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    I: IntoIterator,
    I::Item: FnOnce(&B) -> B::Handler,
{
    let handlers = handlers.into_iter().map(|handler| handler(builder)).collect();
    builder.choose(handlers)
}

// --- 模型绑定 ---

pub fn bind_json<B, T, F>(handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    T: DeserializeOwned,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let inner = builder.clone();
    builder.bind_json(move |model: T| handler(model, &inner))
}

pub fn bind_xml<B, T, F>(handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    T: DeserializeOwned,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let inner = builder.clone();
    builder.bind_xml(move |model: T| handler(model, &inner))
}

pub fn bind_form<B, T, F>(culture: Option<&Culture>, handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    T: DeserializeOwned,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let inner = builder.clone();
    builder.bind_form(culture, move |model: T| handler(model, &inner))
}

pub fn try_bind_form<B, T, E, F>(
    on_error: E,
    culture: Option<&Culture>,
    handler: F,
    builder: &B,
) -> B::Handler
where
    B: ServerBuilder,
    T: DeserializeOwned,
    E: Fn(String, &B) -> B::Handler + 'static,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let error_inner = builder.clone();
    let inner = builder.clone();
    builder.try_bind_form(
        move |message: String| on_error(message, &error_inner),
        culture,
        move |model: T| handler(model, &inner),
    )
}

pub fn bind_query<B, T, F>(culture: Option<&Culture>, handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    T: DeserializeOwned,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let inner = builder.clone();
    builder.bind_query(culture, move |model: T| handler(model, &inner))
}

pub fn try_bind_query<B, T, E, F>(
    on_error: E,
    culture: Option<&Culture>,
    handler: F,
    builder: &B,
) -> B::Handler
where
    B: ServerBuilder,
    T: DeserializeOwned,
    E: Fn(String, &B) -> B::Handler + 'static,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let error_inner = builder.clone();
    let inner = builder.clone();
    builder.try_bind_query(
        move |message: String| on_error(message, &error_inner),
        culture,
        move |model: T| handler(model, &inner),
    )
}

pub fn bind_model<B, T, F>(culture: Option<&Culture>, handler: F, builder: &B) -> B::Handler
where
    B: ServerBuilder,
    T: DeserializeOwned,
    F: Fn(T, &B) -> B::Handler + 'static,
{
    let inner = builder.clone();
    builder.bind_model(culture, move |model: T| handler(model, &inner))
}

// --- 响应写入 ---

pub fn set_body<B: ServerBuilder>(bytes: Bytes, builder: &B) -> B::Handler {
    builder.set_body(bytes)
}

pub fn set_body_from_string<B: ServerBuilder>(body: &str, builder: &B) -> B::Handler {
    builder.set_body_from_string(body)
}

pub fn text<B: ServerBuilder>(body: &str, builder: &B) -> B::Handler {
    builder.text(body)
}

pub fn json<B: ServerBuilder, T: Serialize + ?Sized>(value: &T, builder: &B) -> B::Handler {
    builder.json(value)
}

pub fn json_chunked<B: ServerBuilder, T: Serialize + ?Sized>(value: &T, builder: &B) -> B::Handler {
    builder.json_chunked(value)
}

pub fn xml<B: ServerBuilder, T: Serialize + ?Sized>(value: &T, builder: &B) -> B::Handler {
    builder.xml(value)
}

pub fn html_file<B: ServerBuilder>(path: &Path, builder: &B) -> B::Handler {
    builder.html_file(path)
}

pub fn html_string<B: ServerBuilder>(html: &str, builder: &B) -> B::Handler {
    builder.html_string(html)
}

// --- 响应状态 ---

pub fn set_status_code<B: ServerBuilder>(code: u16, builder: &B) -> B::Handler {
    builder.set_status_code(code)
}

pub fn set_http_header<B: ServerBuilder>(key: &str, value: &str, builder: &B) -> B::Handler {
    builder.set_http_header(key, value)
}

pub fn clear_response<B: ServerBuilder>(builder: &B) -> B::Handler {
    builder.clear_response()
}

pub fn redirect_to<B: ServerBuilder>(permanent: bool, location: &str, builder: &B) -> B::Handler {
    builder.redirect_to(permanent, location)
}

pub fn must_accept<B: ServerBuilder>(mime_types: &[&str], builder: &B) -> B::Handler {
    builder.must_accept(mime_types)
}
