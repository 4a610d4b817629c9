use macroquad::prelude::*;

use crate::config::{
    BULLET_SIZE, BULLET_SPEED, DIAMOND_SIZE, DIAMOND_SPAWN_INTERVAL, MAX_SCORE, PLAYER_SIZE,
    PLAYER_SPEED, SCREEN_H, SCREEN_W, WALK_ANIM_INTERVAL,
};
use crate::timer::IntervalTimer;

// 四个正方向，所有移动实体每刻只沿其中一条轴平移
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // 该方向上的单位位移（左/上为负号）
    pub fn step(self) -> Vec2 {
        match self {
            Direction::Up => vec2(0.0, -1.0),
            Direction::Down => vec2(0.0, 1.0),
            Direction::Left => vec2(-1.0, 0.0),
            Direction::Right => vec2(1.0, 0.0),
        }
    }

    // 精灵贴图的索引顺序
    pub fn index(self) -> usize {
        match self {
            Direction::Down => 0,
            Direction::Left => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }
}

// 当前按住的方向键集合
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

// 玩家精细碰撞采样点，相对精灵左上角（比整个包围盒窄）
pub const COLLISION_PROBES: [(f32, f32); 5] = [
    (36.0, 62.0),
    (36.0, 57.0),
    (35.0, 51.0),
    (35.0, 44.0),
    (35.0, 37.0),
];

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub direction: Direction,
    pub is_walking: bool,
    pub walk_frame: bool,
}

impl Player {
    // 初始位置让精灵在画布正中
    pub fn new() -> Self {
        Self {
            pos: vec2(
                SCREEN_W * 0.5 - PLAYER_SIZE * 0.5,
                SCREEN_H * 0.5 - PLAYER_SIZE * 0.5,
            ),
            size: vec2(PLAYER_SIZE, PLAYER_SIZE),
            speed: PLAYER_SPEED,
            direction: Direction::Down,
            is_walking: false,
            walk_frame: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    // 采样点平移到当前位置
    pub fn probe_points(&self) -> [Vec2; 5] {
        COLLISION_PROBES.map(|(dx, dy)| vec2(self.pos.x + dx, self.pos.y + dy))
    }
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub direction: Direction,
}

impl Bullet {
    // 从玩家中心发射，方向继承开火瞬间的朝向
    pub fn fired_from(player: &Player) -> Self {
        Self {
            pos: vec2(
                player.pos.x + player.size.x * 0.5 - BULLET_SIZE * 0.5,
                player.pos.y + player.size.y * 0.5 - BULLET_SIZE * 0.5,
            ),
            size: BULLET_SIZE,
            speed: BULLET_SPEED,
            direction: player.direction,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

#[derive(Clone, Debug)]
pub struct Diamond {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub direction: Direction,
}

impl Diamond {
    // 在指定边缘生成，沿边缘的坐标由 along 给出，方向指向画布内侧。
    // 边缘编号：0 左、1 右、2 上、3 下。
    pub fn at_edge(edge: usize, along: f32, speed: f32) -> Self {
        let (pos, direction) = match edge {
            0 => (vec2(0.0, along), Direction::Right),
            1 => (vec2(SCREEN_W, along), Direction::Left),
            2 => (vec2(along, 0.0), Direction::Down),
            _ => (vec2(along, SCREEN_H), Direction::Up),
        };
        Self {
            pos,
            size: DIAMOND_SIZE,
            speed,
            direction,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppMode {
    Playing,
    Paused,
    Ended(Outcome),
}

// 一局游戏的全部状态，由主循环持有并传给各个系统
#[derive(Clone, Debug)]
pub struct Game {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub diamonds: Vec<Diamond>,
    pub score: u32,
    pub mode: AppMode,
    pub keys: HeldKeys,
    pub spawn_timer: IntervalTimer,
    pub walk_timer: IntervalTimer,
}

impl Game {
    // 开始新的一局：计分清零，钻石生成定时器立即启动
    pub fn new(now: f64) -> Self {
        let mut spawn_timer = IntervalTimer::new(DIAMOND_SPAWN_INTERVAL);
        spawn_timer.start(now);
        Self {
            player: Player::new(),
            bullets: Vec::new(),
            diamonds: Vec::new(),
            score: 0,
            mode: AppMode::Playing,
            keys: HeldKeys::default(),
            spawn_timer,
            walk_timer: IntervalTimer::new(WALK_ANIM_INTERVAL),
        }
    }

    // 完全重开一局，效果等同重新启动游戏
    pub fn reset(&mut self, now: f64) {
        *self = Game::new(now);
    }
}

// 计分板固定显示 5 位数字
pub fn format_score(score: u32) -> String {
    format!("{:05}", score.min(MAX_SCORE))
}
