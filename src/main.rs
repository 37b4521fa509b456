// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 处理链演示程序
//!
//! 载入配置与日志后，用组合子门面书写一个与运行时无关的示例应用，
//! 交给记录型能力对象 `Recorder` 求值，再输出：
//! - 处理链的文本形式；
//! - 按顺序记录的原语调用；
//! - 以配置中的示例请求回放处理链后得到的 HTTP 响应报文。

use log::{debug, error, info, warn};
use serde_derive::{Deserialize, Serialize};

use webbuilder::{combinator::*, Config, Culture, HandlerFn, Recorder, ResponseState, ServerBuilder};

#[derive(Debug, Serialize, Deserialize)]
struct Greeting {
    name: String,
    #[serde(default)]
    times: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Search {
    q: String,
    #[serde(default)]
    page: u32,
}

fn main() {
    // 1. 环境配置加载：从 TOML 文件读取运行参数，失败时退回默认配置
    let config = match Config::from_toml("config/development.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("无法载入配置文件：{}，使用默认配置", e);
            Config::new()
        }
    };

    // 2. 初始化日志系统：通过外部 YAML 配置级别与输出目的地
    if let Err(e) = log4rs::init_file(config.log_config(), Default::default()) {
        eprintln!("无法初始化日志系统：{}", e);
    }
    info!("配置文件已载入");

    // 3. 能力对象：使用配置中的示例请求构造 Recorder
    let recorder = match Recorder::from_config(&config) {
        Ok(r) => r,
        Err(e) => {
            error!("无法根据配置构造Recorder：{}", e);
            std::process::exit(1);
        }
    };
    info!("示例请求：{} {}", config.sample_method(), config.sample_path());

    // 4. 对能力对象求值，得到处理链
    let app = application::<Recorder>(config.culture());
    let handler = app(&recorder);
    info!("处理链：{}", handler);
    for (index, call) in recorder.calls().iter().enumerate() {
        debug!("[#{}]{}", index, call);
    }

    // 5. 以示例请求回放到显式响应状态并输出报文
    let mut state = ResponseState::new().with_server_name(config.server_name());
    match recorder.replay(&handler, &mut state) {
        Ok(true) => {}
        Ok(false) => {
            warn!("没有任何路由处理示例请求{} {}", config.sample_method(), config.sample_path());
            if let Err(e) = state.set_code(404) {
                error!("无法设置状态码：{}", e);
            }
        }
        Err(e) => {
            error!("回放处理链失败：{}", e);
            return;
        }
    }
    println!("{}", String::from_utf8_lossy(&state.as_bytes()));
}

/// 示例应用。只依赖 `ServerBuilder`，换一个能力对象即可对接另一个运行时。
fn application<B: ServerBuilder>(culture: Option<Culture>) -> impl Fn(&B) -> B::Handler {
    move |builder: &B| {
        let culture = culture.clone();
        let routes: Vec<HandlerFn<B>> = vec![
            Box::new(fish(
                get::<B>,
                fish(|b: &B| route("/", b), |b: &B| text("hello from webbuilder", b)),
            )),
            Box::new(fish(get::<B>, |b: &B| {
                routef(
                    "/hello/%s",
                    |name: String, b: &B| text(&format!("hello, {}", name), b),
                    b,
                )
            })),
            Box::new(fish(
                post::<B>,
                fish(
                    |b: &B| route("/greet", b),
                    |b: &B| bind_json(|greeting: Greeting, b: &B| json(&greeting, b), b),
                ),
            )),
            Box::new(fish(
                get::<B>,
                fish(|b: &B| route("/search", b), move |b: &B| {
                    try_bind_query(
                        |message: String, b: &B| {
                            compose(|b: &B| set_status_code(400, b), |b: &B| text(&message, b), b)
                        },
                        culture.as_ref(),
                        |search: Search, b: &B| json(&search, b),
                        b,
                    )
                }),
            )),
            Box::new(fish(|b: &B| route_ci("/old", b), |b: &B| redirect_to(true, "/", b))),
        ];
        compose(
            move |b: &B| choose(routes, b),
            |b: &B| set_http_header("Cache-Control", "no-cache", b),
            builder,
        )
    }
}
