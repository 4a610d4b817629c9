use macroquad::prelude::*;

use crate::assets::PlayerSprites;
use crate::config::{SCREEN_H, SCREEN_W};
use crate::model::{format_score, Bullet, Diamond, Game, Outcome, Player};

// 钻石的青绿色 #2DFDCB
const DIAMOND_COLOR: Color = Color::new(0.176, 0.992, 0.796, 1.0);
const BACKGROUND: Color = Color::new(0.05, 0.05, 0.08, 1.0);

// HUD 与遮罩文字，字体缺失时退回内置字体
pub struct Hud {
    pub font: Option<Font>,
}

impl Hud {
    fn text(&self, text: &str, x: f32, y: f32, size: u16, color: Color) {
        if let Some(font) = self.font.as_ref() {
            draw_text_ex(
                text,
                x,
                y,
                TextParams {
                    font: Some(font),
                    font_size: size,
                    color,
                    ..Default::default()
                },
            );
        } else {
            draw_text(text, x, y, size as f32, color);
        }
    }

    // 绘制水平居中的文字
    fn centered(&self, text: &str, y: f32, size: u16, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), size, 1.0);
        self.text(text, (SCREEN_W - dims.width) * 0.5, y, size, color);
    }

    // 计分板：固定 5 位，左上角
    pub fn draw_score(&self, score: u32) {
        self.text(&format_score(score), 12.0, 26.0, 24, WHITE);
    }

    pub fn draw_pause_overlay(&self) {
        self.dim();
        self.centered("已暂停", 180.0, 32, WHITE);
        self.centered("按 Esc 继续", 222.0, 20, GRAY);
    }

    // 结算遮罩：区分胜负，提示重开
    pub fn draw_end_overlay(&self, outcome: Outcome) {
        self.dim();
        match outcome {
            Outcome::Win => self.centered("你赢了！", 180.0, 36, GOLD),
            Outcome::Loss => self.centered("游戏结束", 180.0, 36, RED),
        }
        self.centered("按回车重新开始", 226.0, 20, GRAY);
    }

    fn dim(&self) {
        draw_rectangle(0.0, 0.0, SCREEN_W, SCREEN_H, Color::new(0.0, 0.0, 0.0, 0.55));
    }
}

// 每帧清屏后按 玩家、子弹、钻石、计分板 的顺序绘制
pub fn draw_game(sprites: &PlayerSprites, hud: &Hud, game: &Game) {
    clear_background(BACKGROUND);
    draw_player(sprites, &game.player);
    draw_bullets(&game.bullets);
    draw_diamonds(&game.diamonds);
    hud.draw_score(game.score);
}

fn draw_player(sprites: &PlayerSprites, player: &Player) {
    // 行走中每隔一个动画刻换成走路图
    let walking_frame = player.is_walking && player.walk_frame;
    if let Some(texture) = sprites.select(player.direction, walking_frame) {
        draw_texture_ex(
            texture,
            player.pos.x,
            player.pos.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(player.size),
                ..Default::default()
            },
        );
    }
}

fn draw_bullets(bullets: &[Bullet]) {
    for bullet in bullets {
        draw_rectangle(bullet.pos.x, bullet.pos.y, bullet.size, bullet.size, WHITE);
    }
}

// 菱形用两个三角形沿四个顶点拼出
fn draw_diamonds(diamonds: &[Diamond]) {
    for diamond in diamonds {
        let half = diamond.size * 0.5;
        let top = vec2(diamond.pos.x + half, diamond.pos.y);
        let right = vec2(diamond.pos.x + diamond.size, diamond.pos.y + half);
        let bottom = vec2(diamond.pos.x + half, diamond.pos.y + diamond.size);
        let left = vec2(diamond.pos.x, diamond.pos.y + half);
        draw_triangle(top, right, bottom, DIAMOND_COLOR);
        draw_triangle(top, bottom, left, DIAMOND_COLOR);
    }
}
