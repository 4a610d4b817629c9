use macroquad::prelude::Conf;

pub const SCREEN_W: f32 = 600.0;
pub const SCREEN_H: f32 = 400.0;

// 得分上限，计分板只显示 5 位数字
pub const MAX_SCORE: u32 = 99999;

// 钻石生成与走路动画的时间间隔（秒）
pub const DIAMOND_SPAWN_INTERVAL: f64 = 0.277;
pub const WALK_ANIM_INTERVAL: f64 = 0.2;

// 玩家允许越出画布边缘的横向余量（像素）
pub const PLAYER_MARGIN: f32 = 25.0;

pub const PLAYER_SIZE: f32 = 70.0;
pub const PLAYER_SPEED: f32 = 3.0;

pub const BULLET_SIZE: f32 = 5.0;
pub const BULLET_SPEED: f32 = 6.0;

pub const DIAMOND_SIZE: f32 = 20.0;
pub const DIAMOND_SPEED_MIN: f32 = 2.0;
pub const DIAMOND_SPEED_MAX: f32 = 6.0;

// 配置窗口标题、尺寸与可变大小选项
pub fn window_conf() -> Conf {
    let resizable = cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux"));
    Conf {
        window_title: "宝石风暴".to_string(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        high_dpi: true,
        window_resizable: resizable,
        ..Default::default()
    }
}
