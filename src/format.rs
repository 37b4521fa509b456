// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 路由模板语法模块
//!
//! `routef` 系列组合子的模板字符串（如 `/user/%i/%s`）在门面中只是被原样转交。
//! 本模块提供一份参考语法，供能力对象的实现方编译模板并提取强类型参数：
//!
//! | 说明符 | Rust 类型 | 匹配内容 |
//! |---|---|---|
//! | `%b` | `bool` | `true` / `false`（大小写不敏感） |
//! | `%c` | `char` | 单个非 `/` 字符 |
//! | `%s` | `String` | 一个或多个非 `/` 字符，`%2F` 解码为 `/` |
//! | `%i` | `i32` | 十进制整数 |
//! | `%d` | `i64` | 十进制整数 |
//! | `%f` | `f64` | 带小数点的十进制数 |
//! | `%O` | `Uuid` | 带连字符或 32 位十六进制的 GUID |
//! | `%%` | - | 字面量 `%` |

use std::{collections::HashMap, fmt, marker::PhantomData};

use lazy_static::lazy_static;
use log::error;
use regex::Regex;
use uuid::Uuid;

use crate::exception::Exception;

/// 模板中的一个占位符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Bool,
    Char,
    String,
    Int32,
    Int64,
    Float,
    Guid,
}

lazy_static! {
    /// 格式说明符到占位符及其正则片段的映射表。
    ///
    /// 每个片段恰好包含一个捕获组，捕获组的序号即参数的序号。
    static ref PLACEHOLDERS: HashMap<char, (Placeholder, &'static str)> = {
        let mut map = HashMap::new();
        map.insert('b', (Placeholder::Bool, r"((?i:true|false))"));
        map.insert('c', (Placeholder::Char, r"([^/])"));
        map.insert('s', (Placeholder::String, r"([^/]+)"));
        map.insert('i', (Placeholder::Int32, r"(-?\d+)"));
        map.insert('d', (Placeholder::Int64, r"(-?\d+)"));
        map.insert('f', (Placeholder::Float, r"(-?\d+\.\d+)"));
        map.insert(
            'O',
            (
                Placeholder::Guid,
                r"([0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}|[0-9A-Fa-f]{32})",
            ),
        );
        map
    };
}

impl Placeholder {
    pub fn from_specifier(specifier: char) -> Option<Self> {
        PLACEHOLDERS.get(&specifier).map(|(placeholder, _)| *placeholder)
    }

    pub fn specifier(&self) -> char {
        match self {
            Placeholder::Bool => 'b',
            Placeholder::Char => 'c',
            Placeholder::String => 's',
            Placeholder::Int32 => 'i',
            Placeholder::Int64 => 'd',
            Placeholder::Float => 'f',
            Placeholder::Guid => 'O',
        }
    }

    fn pattern(&self) -> &'static str {
        PLACEHOLDERS
            .get(&self.specifier())
            .map(|(_, pattern)| *pattern)
            .unwrap_or(r"([^/]+)")
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.specifier())
    }
}

/// 可以从单个捕获片段转换得到的路径参数类型。
pub trait RouteValue: Sized {
    const PLACEHOLDER: Placeholder;

    fn from_capture(capture: &str) -> Option<Self>;
}

impl RouteValue for bool {
    const PLACEHOLDER: Placeholder = Placeholder::Bool;

    fn from_capture(capture: &str) -> Option<Self> {
        capture.to_ascii_lowercase().parse().ok()
    }
}

impl RouteValue for char {
    const PLACEHOLDER: Placeholder = Placeholder::Char;

    fn from_capture(capture: &str) -> Option<Self> {
        let mut chars = capture.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl RouteValue for String {
    const PLACEHOLDER: Placeholder = Placeholder::String;

    fn from_capture(capture: &str) -> Option<Self> {
        Some(capture.replace("%2F", "/").replace("%2f", "/"))
    }
}

impl RouteValue for i32 {
    const PLACEHOLDER: Placeholder = Placeholder::Int32;

    fn from_capture(capture: &str) -> Option<Self> {
        capture.parse().ok()
    }
}

impl RouteValue for i64 {
    const PLACEHOLDER: Placeholder = Placeholder::Int64;

    fn from_capture(capture: &str) -> Option<Self> {
        capture.parse().ok()
    }
}

impl RouteValue for f64 {
    const PLACEHOLDER: Placeholder = Placeholder::Float;

    fn from_capture(capture: &str) -> Option<Self> {
        capture.parse().ok()
    }
}

impl RouteValue for Uuid {
    const PLACEHOLDER: Placeholder = Placeholder::Guid;

    fn from_capture(capture: &str) -> Option<Self> {
        Uuid::parse_str(capture).ok()
    }
}

/// `routef` 续延所接收的参数：单个值、元组或 `()`。
pub trait RouteArgs: Sized {
    /// 参数依次对应的占位符。
    fn placeholders() -> Vec<Placeholder>;

    /// 把按顺序捕获的片段转换为参数，个数不符或任一转换失败时返回 `None`。
    fn from_captures(captures: &[&str]) -> Option<Self>;
}

impl RouteArgs for () {
    fn placeholders() -> Vec<Placeholder> {
        Vec::new()
    }

    fn from_captures(captures: &[&str]) -> Option<Self> {
        captures.is_empty().then_some(())
    }
}

macro_rules! scalar_route_args {
    ($($ty:ty),+) => {
        $(
            impl RouteArgs for $ty {
                fn placeholders() -> Vec<Placeholder> {
                    vec![<$ty as RouteValue>::PLACEHOLDER]
                }

                fn from_captures(captures: &[&str]) -> Option<Self> {
                    match captures {
                        [capture] => <$ty as RouteValue>::from_capture(capture),
                        _ => None,
                    }
                }
            }
        )+
    };
}

scalar_route_args!(bool, char, String, i32, i64, f64, Uuid);

macro_rules! tuple_route_args {
    ($($name:ident),+) => {
        impl<$($name: RouteValue),+> RouteArgs for ($($name,)+) {
            fn placeholders() -> Vec<Placeholder> {
                vec![$(<$name as RouteValue>::PLACEHOLDER),+]
            }

            fn from_captures(captures: &[&str]) -> Option<Self> {
                let mut iter = captures.iter();
                let args = ($(<$name as RouteValue>::from_capture(iter.next()?)?,)+);
                match iter.next() {
                    Some(_) => None,
                    None => Some(args),
                }
            }
        }
    };
}

tuple_route_args!(A);
tuple_route_args!(A, B);
tuple_route_args!(A, B, C);
tuple_route_args!(A, B, C, D);
tuple_route_args!(A, B, C, D, E);
tuple_route_args!(A, B, C, D, E, G);

/// 编译后的路由模板，参数类型 `T` 在编译时与占位符逐一核对。
pub struct PathFormat<T> {
    template: String,
    placeholders: Vec<Placeholder>,
    regex: Regex,
    prefix: bool,
    args: PhantomData<fn() -> T>,
}

impl<T: RouteArgs> PathFormat<T> {
    /// 编译匹配完整路径的模板（`routef` / `route_cif`）。
    pub fn exact(template: &str, ignore_case: bool) -> Result<Self, Exception> {
        Self::compile(template, ignore_case, false)
    }

    /// 编译只匹配路径前缀的模板（`sub_routef`），匹配必须结束于路径末尾或 `/` 之前。
    pub fn prefix(template: &str, ignore_case: bool) -> Result<Self, Exception> {
        Self::compile(template, ignore_case, true)
    }

    fn compile(template: &str, ignore_case: bool, prefix: bool) -> Result<Self, Exception> {
        let mut pattern = String::from(if ignore_case { "(?i)^" } else { "^" });
        let mut placeholders = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            match chars.next() {
                None => {
                    error!("路由模板{}以单独的%结尾", template);
                    return Err(Exception::DanglingFormatSpecifier);
                }
                Some('%') => literal.push('%'),
                Some(specifier) => {
                    let placeholder = match Placeholder::from_specifier(specifier) {
                        Some(p) => p,
                        None => {
                            error!("路由模板{}包含未知的格式说明符：%{}", template, specifier);
                            return Err(Exception::UnknownFormatSpecifier);
                        }
                    };
                    pattern.push_str(&regex::escape(&literal));
                    literal.clear();
                    pattern.push_str(placeholder.pattern());
                    placeholders.push(placeholder);
                }
            }
        }
        pattern.push_str(&regex::escape(&literal));
        if !prefix {
            pattern.push('$');
        }

        if placeholders != T::placeholders() {
            error!(
                "路由模板{}的占位符{:?}与参数类型要求的{:?}不一致",
                template,
                placeholders,
                T::placeholders()
            );
            return Err(Exception::PlaceholderMismatch);
        }

        let regex = match Regex::new(&pattern) {
            Ok(r) => r,
            Err(e) => {
                error!("路由模板{}编译为正则{}失败：{}", template, pattern, e);
                return Err(Exception::InvalidRoutePattern);
            }
        };

        Ok(Self {
            template: template.to_string(),
            placeholders,
            regex,
            prefix,
            args: PhantomData,
        })
    }

    /// 匹配路径并提取参数。路径不匹配或任一片段无法转换（如 `%i` 溢出）时返回 `None`。
    pub fn extract(&self, path: &str) -> Option<T> {
        let (captures, _) = self.captures(path)?;
        T::from_captures(&captures)
    }

    /// 前缀模板匹配后剩余的路径部分，以 `/` 开头或为空。
    pub fn remainder<'p>(&self, path: &'p str) -> Option<&'p str> {
        self.captures(path).map(|(_, rest)| rest)
    }

    fn captures<'p>(&self, path: &'p str) -> Option<(Vec<&'p str>, &'p str)> {
        let caps = self.regex.captures(path)?;
        let whole = caps.get(0)?;
        let rest = &path[whole.end()..];
        if self.prefix && !rest.is_empty() && !rest.starts_with('/') && !whole.as_str().ends_with('/') {
            return None;
        }
        let values = (1..caps.len())
            .map(|i| caps.get(i).map(|m| m.as_str()))
            .collect::<Option<Vec<_>>>()?;
        Some((values, rest))
    }
}

impl<T> PathFormat<T> {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn is_prefix(&self) -> bool {
        self.prefix
    }
}

impl<T> fmt::Debug for PathFormat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathFormat")
            .field("template", &self.template)
            .field("placeholders", &self.placeholders)
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl<T> fmt::Display for PathFormat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_int_and_string() {
        let format = PathFormat::<(i32, String)>::exact("/user/%i/%s", false).unwrap();
        assert_eq!(format.extract("/user/42/alice"), Some((42, "alice".to_string())));
        assert_eq!(format.extract("/user/42/alice/extra"), None);
        assert_eq!(format.extract("/user/x/alice"), None);
    }

    #[test]
    fn test_single_value_without_tuple() {
        let format = PathFormat::<i64>::exact("/order/%d", false).unwrap();
        assert_eq!(format.extract("/order/-9000000000"), Some(-9_000_000_000));
    }

    #[test]
    fn test_int32_overflow_does_not_match() {
        let format = PathFormat::<i32>::exact("/n/%i", false).unwrap();
        assert_eq!(format.extract("/n/99999999999"), None);
    }

    #[test]
    fn test_bool_char_float() {
        let format = PathFormat::<(bool, char, f64)>::exact("/%b/%c/%f", false).unwrap();
        assert_eq!(format.extract("/TRUE/x/1.5"), Some((true, 'x', 1.5)));
        assert_eq!(format.extract("/false/xy/1.5"), None);
        assert_eq!(format.extract("/false/x/15"), None);
    }

    #[test]
    fn test_guid_forms() {
        let format = PathFormat::<Uuid>::exact("/item/%O", false).unwrap();
        let id = Uuid::parse_str("6f9619ff-8b86-d011-b42d-00c04fc964ff").unwrap();
        assert_eq!(format.extract("/item/6f9619ff-8b86-d011-b42d-00c04fc964ff"), Some(id));
        assert_eq!(format.extract("/item/6f9619ff8b86d011b42d00c04fc964ff"), Some(id));
        assert_eq!(format.extract("/item/not-a-guid"), None);
    }

    #[test]
    fn test_string_decodes_slashes() {
        let format = PathFormat::<String>::exact("/file/%s", false).unwrap();
        assert_eq!(format.extract("/file/a%2Fb%2fc"), Some("a/b/c".to_string()));
    }

    #[test]
    fn test_escaped_percent_and_literal_regex_chars() {
        let format = PathFormat::<i32>::exact("/100%%/v1.0/%i", false).unwrap();
        assert_eq!(format.extract("/100%/v1.0/7"), Some(7));
        assert_eq!(format.extract("/100%/v1x0/7"), None);
    }

    #[test]
    fn test_ignore_case() {
        let strict = PathFormat::<i32>::exact("/Api/%i", false).unwrap();
        let loose = PathFormat::<i32>::exact("/Api/%i", true).unwrap();
        assert_eq!(strict.extract("/api/1"), None);
        assert_eq!(loose.extract("/api/1"), Some(1));
    }

    #[test]
    fn test_no_placeholders() {
        let format = PathFormat::<()>::exact("/health", false).unwrap();
        assert_eq!(format.extract("/health"), Some(()));
        assert_eq!(format.extract("/healthz"), None);
    }

    #[test]
    fn test_prefix_boundary_and_remainder() {
        let format = PathFormat::<i32>::prefix("/v%i", false).unwrap();
        assert_eq!(format.extract("/v2/users"), Some(2));
        assert_eq!(format.remainder("/v2/users"), Some("/users"));
        assert_eq!(format.remainder("/v2"), Some(""));

        let literal = PathFormat::<()>::prefix("/api", false).unwrap();
        assert_eq!(literal.remainder("/api/x"), Some("/x"));
        assert_eq!(literal.remainder("/apix"), None);
    }

    #[test]
    fn test_dangling_percent() {
        let result = PathFormat::<()>::exact("/oops%", false);
        assert_eq!(result.unwrap_err(), Exception::DanglingFormatSpecifier);
    }

    #[test]
    fn test_unknown_specifier() {
        let result = PathFormat::<i32>::exact("/x/%x", false);
        assert_eq!(result.unwrap_err(), Exception::UnknownFormatSpecifier);
    }

    #[test]
    fn test_placeholder_mismatch() {
        let wrong_type = PathFormat::<i64>::exact("/x/%i", false);
        assert_eq!(wrong_type.unwrap_err(), Exception::PlaceholderMismatch);

        let wrong_count = PathFormat::<(i32, i32)>::exact("/x/%i", false);
        assert_eq!(wrong_count.unwrap_err(), Exception::PlaceholderMismatch);
    }

    #[test]
    fn test_template_accessors() {
        let format = PathFormat::<(String, i32)>::prefix("/%s/%i", true).unwrap();
        assert_eq!(format.template(), "/%s/%i");
        assert_eq!(format.placeholders(), &[Placeholder::String, Placeholder::Int32]);
        assert!(format.is_prefix());
        assert_eq!(format.to_string(), "/%s/%i");
    }

    #[test]
    fn test_placeholder_specifiers() {
        for c in ['b', 'c', 's', 'i', 'd', 'f', 'O'] {
            let placeholder = Placeholder::from_specifier(c).unwrap();
            assert_eq!(placeholder.specifier(), c);
        }
        assert_eq!(Placeholder::from_specifier('u'), None);
        assert_eq!(Placeholder::Int32.to_string(), "%i");
    }
}
