// 战斗能力值
// 面板加成只作用于计算用的攻防，显示时保留输入的面板值

use serde::Serialize;
use log::debug;

use crate::constants::{MAX_BOOST_LEVEL, MIN_BOOST_LEVEL, PANEL_BONUS};
use crate::core::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BattleStats {
    /// 输入的攻击能力值
    pub panel_attack: i64,
    /// 输入的防御能力值
    pub panel_defense: i64,
    /// 参与计算的攻击能力值
    pub attack: i64,
    /// 参与计算的防御能力值
    pub defense: i64,
    pub panel_bonus_applied: bool,
}

impl BattleStats {
    pub fn new(attack: i64, defense: i64, panel_bonus: bool) -> Self {
        let bonus = if panel_bonus { PANEL_BONUS } else { 0 };
        let stats = Self {
            panel_attack: attack,
            panel_defense: defense,
            attack: attack.saturating_add(bonus),
            defense: defense.saturating_add(bonus),
            panel_bonus_applied: panel_bonus,
        };
        if panel_bonus {
            debug!(
                "面板加成: 攻击 {} -> {}, 防御 {} -> {}",
                stats.panel_attack, stats.attack, stats.panel_defense, stats.defense
            );
        }
        stats
    }
}

/// 强化等级必须在 [-6, 6] 之间
pub fn check_boost_levels(attack_level: i64, defense_level: i64) -> Result<()> {
    let range = MIN_BOOST_LEVEL..=MAX_BOOST_LEVEL;
    if range.contains(&attack_level) && range.contains(&defense_level) {
        Ok(())
    } else {
        Err(CalcError::OutOfRangeLevel { attack_level, defense_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_bonus_applied() {
        let stats = BattleStats::new(400, 300, true);
        assert_eq!(stats.panel_attack, 400);
        assert_eq!(stats.panel_defense, 300);
        assert_eq!(stats.attack, 540);
        assert_eq!(stats.defense, 440);
        assert!(stats.panel_bonus_applied);
    }

    #[test]
    fn test_without_panel_bonus() {
        let stats = BattleStats::new(490, 340, false);
        assert_eq!(stats.attack, 490);
        assert_eq!(stats.defense, 340);
        assert_eq!(stats.panel_attack, stats.attack);
    }

    #[test]
    fn test_boost_level_bounds() {
        assert!(check_boost_levels(6, -6).is_ok());
        assert!(check_boost_levels(0, 0).is_ok());
        assert_eq!(
            check_boost_levels(7, 0),
            Err(CalcError::OutOfRangeLevel { attack_level: 7, defense_level: 0 })
        );
        assert!(check_boost_levels(0, -7).is_err());
    }
}
