mod app;
mod assets;
mod config;
mod geometry;
mod model;
mod render;
mod systems;
mod timer;

use crate::config::window_conf;

#[macroquad::main(window_conf)]
// 程序入口：初始化窗口配置并启动游戏主循环
async fn main() {
    app::run().await;
}
