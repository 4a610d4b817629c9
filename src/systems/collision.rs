use macroquad::rand::gen_range;

use crate::config::MAX_SCORE;
use crate::geometry::{boxes_intersect, point_in_box};
use crate::model::{AppMode, Diamond, Game, Outcome, Player};

// 本刻的碰撞结算：先算子弹打钻石，再算玩家撞钻石。
// 子弹命中已经触发胜利时跳过玩家判定，一刻最多发生一次状态切换。
pub fn resolve(game: &mut Game) {
    resolve_bullet_hits(game);
    if game.mode != AppMode::Playing {
        return;
    }
    if player_hit(&game.player, &game.diamonds) {
        game.mode = AppMode::Ended(Outcome::Loss);
    }
}

// 每颗子弹找集合顺序里第一个相交的钻石，双双移除并加分。
// 总分钳制在上限，达到上限即胜利。
fn resolve_bullet_hits(game: &mut Game) {
    let Game {
        bullets,
        diamonds,
        score,
        mode,
        ..
    } = game;

    bullets.retain(|bullet| {
        let hit = diamonds
            .iter()
            .position(|diamond| boxes_intersect(bullet.rect(), diamond.rect()));
        match hit {
            Some(index) => {
                diamonds.remove(index);
                *score = (*score + award()).min(MAX_SCORE);
                false
            }
            None => true,
        }
    });

    if *score >= MAX_SCORE {
        *mode = AppMode::Ended(Outcome::Win);
    }
}

// 单次击落的得分，[10, 1010) 内的随机整数
fn award() -> u32 {
    gen_range(10, 1010)
}

// 任一采样点落进任一钻石的包围盒即判定玩家被撞，短路返回
pub fn player_hit(player: &Player, diamonds: &[Diamond]) -> bool {
    let probes = player.probe_points();
    diamonds.iter().any(|diamond| {
        let rect = diamond.rect();
        probes.iter().any(|probe| point_in_box(*probe, rect))
    })
}
