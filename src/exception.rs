// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 该模块定义了组合子门面之外的辅助组件可能产生的各类异常情况。
//!
//! ## 设计意图
//! - **错误分类**：涵盖了路由模板解析错误、响应状态错误、配置加载错误以及测试桩数据错误。
//! - **门面透明**：`combinator` 模块本身从不构造异常，能力对象返回的任何结果都原样传回调用方。
//! - **用户友好**：通过实现 `std::fmt::Display`，确保错误信息可以被安全地记录到日志中。

use std::fmt;

/// 处理路由模板、响应状态与配置时发生的异常类型。
///
/// 该枚举通常作为 `Result` 的 `Err` 部分返回，用于指示失败的具体原因。
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Exception {
    /// 路由模板以单独的 `%` 结尾，后面没有格式说明符。
    DanglingFormatSpecifier,
    /// 路由模板中出现了不认识的格式说明符（例如 `%x`）。
    UnknownFormatSpecifier,
    /// 路由模板中的占位符与调用方期望的参数类型不一致。
    PlaceholderMismatch,
    /// 正则路由或模板编译后的正则表达式非法。
    InvalidRoutePattern,
    /// 区域设置名称不符合 `xx-YY` 这类语言标记格式。
    InvalidCulture,
    /// 状态码不在已知的 HTTP 状态码表中。
    InvalidStatusCode,
    /// 回放 `html_file` 时找不到指定的文件。
    FileNotFound,
    /// 配置文件不存在。
    ConfigNotFound,
    /// 配置文件存在但无法读取。
    ConfigUnreadable,
    /// 测试桩的请求体或查询参数不是合法的 JSON。
    InvalidFixture,
    /// 响应模型无法序列化（例如映射的键不是字符串）。
    ModelSerialization,
}

use Exception::*;

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DanglingFormatSpecifier => write!(f, "Format string ends with a lone '%'"),
            UnknownFormatSpecifier => write!(f, "Unknown format specifier in route template"),
            PlaceholderMismatch => write!(f, "Route placeholders don't match the argument types"),
            InvalidRoutePattern => write!(f, "Route pattern is not a valid regular expression"),
            InvalidCulture => write!(f, "Invalid culture name"),
            InvalidStatusCode => write!(f, "Unknown HTTP status code"),
            FileNotFound => write!(f, "File not found (404)"),
            ConfigNotFound => write!(f, "Config file not found"),
            ConfigUnreadable => write!(f, "Config file can't be read"),
            InvalidFixture => write!(f, "Fixture data is not valid JSON"),
            ModelSerialization => write!(f, "Response model can't be serialized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DanglingFormatSpecifier.to_string(),
            "Format string ends with a lone '%'"
        );
        assert_eq!(InvalidStatusCode.to_string(), "Unknown HTTP status code");
        assert_eq!(FileNotFound.to_string(), "File not found (404)");
        assert_eq!(ModelSerialization.to_string(), "Response model can't be serialized");
    }
}
