use std::path::Path;

use macroquad::logging::warn;
use macroquad::prelude::*;

use crate::model::Direction;

// 贴图文件名里的方向顺序，与 Direction::index 一一对应
const DIRECTION_NAMES: [&str; 4] = ["down", "left", "right", "up"];

// 玩家的 8 张定向贴图：4 个朝向各有站立图与走路图
pub struct PlayerSprites {
    idle: [Option<Texture2D>; 4],
    walk: [Option<Texture2D>; 4],
}

impl PlayerSprites {
    // 启动时按固定命名约定加载一次，缺失的文件记录后跳过
    pub async fn load() -> Self {
        let mut idle = [None, None, None, None];
        let mut walk = [None, None, None, None];
        for (i, name) in DIRECTION_NAMES.iter().enumerate() {
            idle[i] = load_sprite(&format!("assets/player_{name}.png")).await;
            walk[i] = load_sprite(&format!("assets/player_{name}_walk.png")).await;
        }
        Self { idle, walk }
    }

    // 按（朝向，走路帧）选择贴图
    pub fn select(&self, direction: Direction, walking_frame: bool) -> Option<&Texture2D> {
        let set = if walking_frame { &self.walk } else { &self.idle };
        set[direction.index()].as_ref()
    }
}

async fn load_sprite(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            Some(texture)
        }
        Err(_) => {
            warn!("贴图缺失：{}，对应精灵不绘制", path);
            None
        }
    }
}

// 加载UI字体，优先使用项目资源中的字体，其次尝试系统字体
pub async fn load_ui_font() -> Option<Font> {
    let candidates = [
        "assets/NotoSansSC-Regular.ttf",
        "assets/NotoSansSC-Regular.otf",
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/STHeiti Light.ttc",
        "/Library/Fonts/Arial Unicode.ttf",
        "C:/Windows/Fonts/simhei.ttf",
        "C:/Windows/Fonts/msyh.ttc",
    ];

    for path in candidates {
        // 跳过不存在的候选路径
        if !Path::new(path).exists() {
            continue;
        }
        // 成功加载即可返回
        if let Ok(font) = load_ttf_font(path).await {
            return Some(font);
        }
    }

    None
}
