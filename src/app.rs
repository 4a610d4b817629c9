use macroquad::prelude::*;

use crate::assets::{load_ui_font, PlayerSprites};
use crate::config::{SCREEN_H, SCREEN_W};
use crate::model::{AppMode, Game, HeldKeys};
use crate::render::{self, Hud};
use crate::systems::{collision, input, update};

// 游戏主循环：加载资源，然后按 输入、推进、碰撞、渲染 的顺序走帧
pub async fn run() {
    let sprites = PlayerSprites::load().await;
    let hud = Hud {
        font: load_ui_font().await,
    };
    let mut game = Game::new(get_time());

    // 固定 600x400 的逻辑画布，窗口变化时整体缩放居中
    let render_target = render_target(SCREEN_W as u32, SCREEN_H as u32);
    render_target.texture.set_filter(FilterMode::Nearest);

    loop {
        let frame_input = input::poll();
        let now = get_time();

        match game.mode {
            AppMode::Playing => {
                if frame_input.pause {
                    enter_pause(&mut game);
                } else {
                    input::apply(&mut game, &frame_input, now);
                    update::advance(&mut game, now);
                    collision::resolve(&mut game);
                }
            }
            AppMode::Paused => {
                if frame_input.pause {
                    leave_pause(&mut game, now);
                }
            }
            // 结算画面不再推进任何一刻，只等待重开
            AppMode::Ended(_) => {
                if frame_input.restart {
                    game.reset(now);
                }
            }
        }

        let (scale, offset_x, offset_y) = compute_viewport();
        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, SCREEN_W, SCREEN_H));
        camera.render_target = Some(render_target.clone());
        set_camera(&camera);

        render::draw_game(&sprites, &hud, &game);
        match game.mode {
            AppMode::Playing => {}
            AppMode::Paused => hud.draw_pause_overlay(),
            AppMode::Ended(outcome) => hud.draw_end_overlay(outcome),
        }

        // 回到默认相机并放大显示
        set_default_camera();
        clear_background(BLACK);
        draw_texture_ex(
            &render_target.texture,
            offset_x,
            offset_y,
            WHITE,
            DrawTextureParams {
                // RenderTarget 在纹理坐标系中是倒置的，这里做一次垂直翻转
                source: Some(Rect::new(0.0, SCREEN_H, SCREEN_W, -SCREEN_H)),
                dest_size: Some(vec2(SCREEN_W * scale, SCREEN_H * scale)),
                ..Default::default()
            },
        );

        next_frame().await;
    }
}

// 暂停即停掉两个周期定时器，按键状态一并清空
fn enter_pause(game: &mut Game) {
    game.mode = AppMode::Paused;
    game.spawn_timer.stop();
    game.walk_timer.stop();
    game.keys = HeldKeys::default();
    game.player.is_walking = false;
    game.player.walk_frame = false;
}

// 恢复时从当前时刻重新启动钻石生成
fn leave_pause(game: &mut Game, now: f64) {
    game.mode = AppMode::Playing;
    game.spawn_timer.start(now);
}

// 根据窗口尺寸计算缩放比例与居中偏移
fn compute_viewport() -> (f32, f32, f32) {
    let sw = screen_width();
    let sh = screen_height();
    let scale = (sw / SCREEN_W).min(sh / SCREEN_H).max(0.1);
    let offset_x = (sw - SCREEN_W * scale) * 0.5;
    let offset_y = (sh - SCREEN_H * scale) * 0.5;
    (scale, offset_x, offset_y)
}
