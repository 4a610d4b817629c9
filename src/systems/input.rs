use macroquad::prelude::*;

use crate::model::{Bullet, Game, HeldKeys};

// 一帧内采集到的按键事件，方向键之外的按键一律忽略
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub pressed: HeldKeys,
    pub released: HeldKeys,
    pub fire: bool,
    pub pause: bool,
    pub restart: bool,
}

// 从窗口事件读取本帧输入快照
pub fn poll() -> FrameInput {
    FrameInput {
        pressed: HeldKeys {
            left: is_key_pressed(KeyCode::Left),
            right: is_key_pressed(KeyCode::Right),
            up: is_key_pressed(KeyCode::Up),
            down: is_key_pressed(KeyCode::Down),
        },
        released: HeldKeys {
            left: is_key_released(KeyCode::Left),
            right: is_key_released(KeyCode::Right),
            up: is_key_released(KeyCode::Up),
            down: is_key_released(KeyCode::Down),
        },
        fire: is_key_pressed(KeyCode::Space),
        pause: is_key_pressed(KeyCode::Escape),
        restart: is_key_pressed(KeyCode::Enter),
    }
}

// 把输入快照作用到游戏状态上
pub fn apply(game: &mut Game, input: &FrameInput, now: f64) {
    if input.pressed.left {
        game.keys.left = true;
    }
    if input.pressed.right {
        game.keys.right = true;
    }
    if input.pressed.up {
        game.keys.up = true;
    }
    if input.pressed.down {
        game.keys.down = true;
    }
    // 任一方向键按下即进入行走状态，动画定时器只在未运行时启动
    if input.pressed.any() {
        game.player.is_walking = true;
        if !game.walk_timer.is_running() {
            game.walk_timer.start(now);
        }
    }

    if input.fire {
        let bullet = Bullet::fired_from(&game.player);
        game.bullets.push(bullet);
    }

    if input.released.left {
        game.keys.left = false;
    }
    if input.released.right {
        game.keys.right = false;
    }
    if input.released.up {
        game.keys.up = false;
    }
    if input.released.down {
        game.keys.down = false;
    }
    // 所有方向键都松开后结束行走，动画帧复位并停表
    if input.released.any() && !game.keys.any() {
        game.player.is_walking = false;
        game.player.walk_frame = false;
        game.walk_timer.stop();
    }
}
