// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # webbuilder
//!
//! 一组与具体 HTTP 运行时无关的处理器组合子。组合子以自由函数的形式书写，
//! 通过可替换的能力对象 `ServerBuilder` 分派，同一套组合语法可以对接不同的运行时。

pub mod builder;
pub mod combinator;
pub mod config;
pub mod exception;
pub mod format;
pub mod param;
pub mod recorder;
pub mod response;

pub use builder::{Culture, ServerBuilder};
pub use combinator::HandlerFn;
pub use config::Config;
pub use exception::Exception;
pub use format::{PathFormat, Placeholder, RouteArgs, RouteValue};
pub use recorder::{Call, Recorded, Recorder};
pub use response::ResponseState;
