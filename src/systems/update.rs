use macroquad::prelude::*;
use macroquad::rand::gen_range;

use crate::config::{
    DIAMOND_SPEED_MAX, DIAMOND_SPEED_MIN, PLAYER_MARGIN, SCREEN_H, SCREEN_W,
};
use crate::model::{Diamond, Direction, Game, HeldKeys, Player};

// 推进一刻：先结算两个周期定时器，再移动子弹、钻石和玩家。
// 实体移动完成之后才轮到碰撞检测，本刻的判定都基于移动后的位置。
pub fn advance(game: &mut Game, now: f64) {
    for _ in 0..game.spawn_timer.fire(now) {
        game.diamonds.push(spawn_diamond());
    }
    if game.walk_timer.fire(now) % 2 == 1 {
        game.player.walk_frame = !game.player.walk_frame;
    }

    update_bullets(game);
    update_diamonds(game);
    if game.player.is_walking {
        move_player(&mut game.player, game.keys);
    }
}

// 随机挑一条边生成钻石，速度在 [2,6) 内均匀取值
pub fn spawn_diamond() -> Diamond {
    let edge = gen_range(0u32, 4) as usize;
    let along = if edge < 2 {
        gen_range(0.0, SCREEN_H)
    } else {
        gen_range(0.0, SCREEN_W)
    };
    Diamond::at_edge(edge, along, gen_range(DIAMOND_SPEED_MIN, DIAMOND_SPEED_MAX))
}

// 按固定优先级 左>右>上>下 移动玩家，每刻只取一个方向。
// 每个分支都带边界护栏，横向允许越界 25 像素，纵向上方允许半个身位。
fn move_player(player: &mut Player, keys: HeldKeys) {
    if keys.left && player.pos.x > -PLAYER_MARGIN {
        player.pos.x = (player.pos.x - player.speed).max(-PLAYER_MARGIN);
        player.direction = Direction::Left;
    } else if keys.right && player.pos.x + player.size.x < SCREEN_W + PLAYER_MARGIN {
        player.pos.x = (player.pos.x + player.speed).min(SCREEN_W - player.size.x + PLAYER_MARGIN);
        player.direction = Direction::Right;
    } else if keys.up && player.pos.y > -player.size.y * 0.5 {
        player.pos.y = (player.pos.y - player.speed).max(-player.size.y * 0.5);
        player.direction = Direction::Up;
    } else if keys.down && player.pos.y + player.size.y < SCREEN_H {
        player.pos.y = (player.pos.y + player.speed).min(SCREEN_H - player.size.y);
        player.direction = Direction::Down;
    }
}

fn update_bullets(game: &mut Game) {
    game.bullets.retain_mut(|bullet| {
        bullet.pos += bullet.direction.step() * bullet.speed;
        on_canvas(bullet.pos)
    });
}

fn update_diamonds(game: &mut Game) {
    game.diamonds.retain_mut(|diamond| {
        diamond.pos += diamond.direction.step() * diamond.speed;
        on_canvas(diamond.pos)
    });
}

// 位置仍落在画布范围内（含边缘）
fn on_canvas(pos: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= SCREEN_W && pos.y >= 0.0 && pos.y <= SCREEN_H
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::rand::srand;

    use crate::model::Bullet;

    fn still_game() -> Game {
        let mut game = Game::new(0.0);
        game.spawn_timer.stop();
        game
    }

    fn bullet_towards(direction: Direction) -> Bullet {
        let mut player = Player::new();
        player.direction = direction;
        Bullet::fired_from(&player)
    }

    #[test]
    fn bullets_translate_along_their_axis_only() {
        let mut game = still_game();
        game.bullets = vec![
            bullet_towards(Direction::Left),
            bullet_towards(Direction::Right),
            bullet_towards(Direction::Up),
            bullet_towards(Direction::Down),
        ];
        advance(&mut game, 0.0);
        assert_eq!(game.bullets[0].pos, vec2(291.5, 197.5));
        assert_eq!(game.bullets[1].pos, vec2(303.5, 197.5));
        assert_eq!(game.bullets[2].pos, vec2(297.5, 191.5));
        assert_eq!(game.bullets[3].pos, vec2(297.5, 203.5));
    }

    #[test]
    fn bullets_leaving_the_canvas_are_dropped() {
        let mut game = still_game();
        let mut bullet = bullet_towards(Direction::Right);
        bullet.pos.x = SCREEN_W - 1.0;
        game.bullets.push(bullet);
        advance(&mut game, 0.0);
        assert!(game.bullets.is_empty());
    }

    // 钻石沿着自己的轴向匀速逼近画布内部，出界后被移除且不再出现
    #[test]
    fn diamonds_move_monotonically_until_culled() {
        let mut game = still_game();
        game.diamonds.push(Diamond::at_edge(1, 200.0, 3.0));

        let mut last_x = game.diamonds[0].pos.x;
        while !game.diamonds.is_empty() {
            advance(&mut game, 0.0);
            if let Some(diamond) = game.diamonds.first() {
                assert_eq!(diamond.pos.x, last_x - 3.0);
                assert_eq!(diamond.pos.y, 200.0);
                last_x = diamond.pos.x;
            }
        }
        for _ in 0..10 {
            advance(&mut game, 0.0);
            assert!(game.diamonds.is_empty());
        }
    }

    // 右边缘生成、速度 3 向左，100 刻后正好走到 x = 300
    #[test]
    fn left_moving_diamond_reaches_center_in_100_ticks() {
        let mut game = still_game();
        game.diamonds.push(Diamond::at_edge(1, 200.0, 3.0));
        for _ in 0..100 {
            advance(&mut game, 0.0);
        }
        assert_eq!(game.diamonds[0].pos, vec2(300.0, 200.0));
    }

    #[test]
    fn held_left_key_clamps_at_the_margin() {
        let mut game = still_game();
        game.keys.left = true;
        game.player.is_walking = true;
        for _ in 0..200 {
            advance(&mut game, 0.0);
            assert!(game.player.pos.x >= -PLAYER_MARGIN);
        }
        assert_eq!(game.player.pos.x, -PLAYER_MARGIN);
        assert_eq!(game.player.direction, Direction::Left);
    }

    // 同时按住 左+上 时只向左移动，永远不会斜着走
    #[test]
    fn left_beats_up_when_both_held() {
        let mut game = still_game();
        game.keys.left = true;
        game.keys.up = true;
        game.player.is_walking = true;
        let start = game.player.pos;
        advance(&mut game, 0.0);
        assert_eq!(game.player.pos.x, start.x - 3.0);
        assert_eq!(game.player.pos.y, start.y);
        assert_eq!(game.player.direction, Direction::Left);
    }

    // 左键到达边界护栏后，优先级顺延到下一个按住的方向
    #[test]
    fn blocked_left_falls_through_to_right() {
        let mut game = still_game();
        game.player.pos.x = -PLAYER_MARGIN;
        game.keys.left = true;
        game.keys.right = true;
        game.player.is_walking = true;
        advance(&mut game, 0.0);
        assert_eq!(game.player.pos.x, -PLAYER_MARGIN + 3.0);
        assert_eq!(game.player.direction, Direction::Right);
    }

    // 任意输入序列下玩家始终停留在允许的活动范围内
    #[test]
    fn player_stays_inside_bounds_under_random_input() {
        srand(42);
        let mut game = still_game();
        game.player.is_walking = true;
        for _ in 0..2000 {
            game.keys = HeldKeys {
                left: gen_range(0u32, 2) == 1,
                right: gen_range(0u32, 2) == 1,
                up: gen_range(0u32, 2) == 1,
                down: gen_range(0u32, 2) == 1,
            };
            advance(&mut game, 0.0);
            let pos = game.player.pos;
            assert!(pos.x >= -PLAYER_MARGIN && pos.x <= SCREEN_W - 70.0 + PLAYER_MARGIN);
            assert!(pos.y >= -35.0 && pos.y <= SCREEN_H - 70.0);
        }
    }

    #[test]
    fn spawn_timer_appends_one_diamond_per_period() {
        srand(7);
        let mut game = Game::new(0.0);
        // 0.277 的三个周期都已到期
        advance(&mut game, 0.9);
        assert_eq!(game.diamonds.len(), 3);
        advance(&mut game, 0.9);
        assert_eq!(game.diamonds.len(), 3);
    }

    // 随机生成的钻石总是贴着某条边、方向朝内、速度在区间内
    #[test]
    fn spawned_diamonds_sit_on_an_edge_moving_inward() {
        srand(99);
        for _ in 0..200 {
            let diamond = spawn_diamond();
            let pos = diamond.pos;
            match diamond.direction {
                Direction::Right => assert_eq!(pos.x, 0.0),
                Direction::Left => assert_eq!(pos.x, SCREEN_W),
                Direction::Down => assert_eq!(pos.y, 0.0),
                Direction::Up => assert_eq!(pos.y, SCREEN_H),
            }
            assert!(pos.x >= 0.0 && pos.x <= SCREEN_W);
            assert!(pos.y >= 0.0 && pos.y <= SCREEN_H);
            assert!(diamond.speed >= DIAMOND_SPEED_MIN && diamond.speed < DIAMOND_SPEED_MAX);
        }
    }

    #[test]
    fn walk_timer_toggles_the_frame() {
        let mut game = still_game();
        game.player.is_walking = true;
        game.walk_timer.start(0.0);
        advance(&mut game, 0.25);
        assert!(game.player.walk_frame);
        advance(&mut game, 0.45);
        assert!(!game.player.walk_frame);
        // 一次补两个周期等于没翻转
        advance(&mut game, 0.85);
        assert!(!game.player.walk_frame);
    }
}
