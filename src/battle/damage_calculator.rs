// 战斗伤害计算器
// 开发心理：公式是纯函数，唯一的不确定性来自注入的随机源
// 浮点计算到最后一步再截断，上下限对相同输入总是一致

use serde::Serialize;
use log::debug;

use crate::battle::modifier::stage_modifier;
use crate::constants::{MIN_ROLL_RATIO, REFERENCE_LEVEL};
use crate::utils::DamageRoller;

// 伤害计算输入，数值已经过校验
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageInput {
    pub power: i64,
    pub attack: i64,
    pub defense: i64,
    pub attack_level: i64,
    pub defense_level: i64,
    pub type_multiplier: f64,
}

// 伤害计算结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DamageResult {
    pub min_damage: i64,
    pub max_damage: i64,
    pub sampled_damage: i64,
}

#[derive(Debug, Clone)]
pub struct DamageCalculator {
    /// 宠物等级基准
    pub reference_level: f64,
    /// 最低伤害占最高伤害的比例
    pub min_roll_ratio: f64,
}

impl Default for DamageCalculator {
    fn default() -> Self {
        Self {
            reference_level: REFERENCE_LEVEL,
            min_roll_ratio: MIN_ROLL_RATIO,
        }
    }
}

impl DamageCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 属性相性修正后、截断前的伤害
    pub fn scaled_base_damage(&self, input: &DamageInput) -> f64 {
        let modified_attack = input.attack as f64 * stage_modifier(input.attack_level);
        let modified_defense = (input.defense as f64 * stage_modifier(input.defense_level)).max(1.0);
        let level_factor = self.reference_level * 2.0 / 5.0 + 2.0;
        let base_damage =
            (level_factor * input.power as f64 * (modified_attack / modified_defense)) / 50.0 + 2.0;

        debug!(
            "基础伤害计算: attack={}, defense={}, power={}, base={}",
            modified_attack, modified_defense, input.power, base_damage
        );

        base_damage * input.type_multiplier
    }

    /// 伤害浮动范围 (最低, 最高)
    pub fn damage_range(&self, input: &DamageInput) -> (i64, i64) {
        let scaled = self.scaled_base_damage(input);
        let floor = (scaled * self.min_roll_ratio) as i64;
        let ceiling = scaled as i64;
        // 负数威力或攻击会让缩放后的下限高于上限
        (floor.min(ceiling), floor.max(ceiling))
    }

    pub fn calculate<R: DamageRoller + ?Sized>(&self, input: &DamageInput, roller: &mut R) -> DamageResult {
        let (min_damage, max_damage) = self.damage_range(input);
        let sampled_damage = if min_damage < max_damage {
            roller.roll(min_damage, max_damage)
        } else {
            min_damage
        };

        DamageResult {
            min_damage,
            max_damage,
            sampled_damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{FixedRoll, RandomGenerator};

    fn input(power: i64, attack: i64, defense: i64) -> DamageInput {
        DamageInput {
            power,
            attack,
            defense,
            attack_level: 0,
            defense_level: 0,
            type_multiplier: 1.0,
        }
    }

    #[test]
    fn test_basic_damage_range() {
        let calculator = DamageCalculator::new();
        let result = calculator.calculate(&input(120, 490, 340), &mut FixedRoll::Max);
        assert_eq!(result.min_damage, 117);
        assert_eq!(result.max_damage, 147);
        assert_eq!(result.sampled_damage, 147);
    }

    #[test]
    fn test_sampled_damage_within_range() {
        let calculator = DamageCalculator::new();
        let mut rng = RandomGenerator::with_seed(77);
        for _ in 0..200 {
            let result = calculator.calculate(&input(120, 490, 340), &mut rng);
            assert!(result.min_damage <= result.sampled_damage);
            assert!(result.sampled_damage <= result.max_damage);
        }
    }

    #[test]
    fn test_min_is_truncated_fraction_of_exact_max() {
        let calculator = DamageCalculator::new();
        let damage_input = DamageInput {
            power: 90,
            attack: 540,
            defense: 440,
            attack_level: 2,
            defense_level: -1,
            type_multiplier: 2.0,
        };
        let scaled = calculator.scaled_base_damage(&damage_input);
        let (min_damage, max_damage) = calculator.damage_range(&damage_input);
        assert_eq!(min_damage, (scaled * 0.8).floor() as i64);
        assert_eq!(max_damage, scaled.floor() as i64);
    }

    #[test]
    fn test_range_is_idempotent() {
        let calculator = DamageCalculator::new();
        let damage_input = DamageInput {
            type_multiplier: 1.0 / 3.0,
            ..input(75, 333, 281)
        };
        assert_eq!(calculator.damage_range(&damage_input), calculator.damage_range(&damage_input));
    }

    #[test]
    fn test_defense_floor_of_one() {
        let calculator = DamageCalculator::new();
        let zero_defense = calculator.damage_range(&input(10, 50, 0));
        let unit_defense = calculator.damage_range(&input(10, 50, 1));
        assert_eq!(zero_defense, unit_defense);
        // 42 * 10 * 50 / 50 + 2 = 422
        assert_eq!(unit_defense, (337, 422));
    }

    #[test]
    fn test_degenerate_range_skips_roller() {
        struct PanicRoller;
        impl DamageRoller for PanicRoller {
            fn roll(&mut self, _min: i64, _max: i64) -> i64 {
                panic!("roller should not be used for a degenerate range");
            }
        }

        let calculator = DamageCalculator::new();
        // 威力为0时基础伤害为2，强力抵抗后不足1点
        let result = calculator.calculate(
            &DamageInput { type_multiplier: 1.0 / 3.0, ..input(0, 100, 100) },
            &mut PanicRoller,
        );
        assert_eq!(result, DamageResult { min_damage: 0, max_damage: 0, sampled_damage: 0 });
    }

    #[test]
    fn test_negative_power_keeps_range_ordered() {
        let calculator = DamageCalculator::new();
        let damage_input = input(-120, 490, 340);
        assert_eq!(calculator.damage_range(&damage_input), (-143, -114));

        let mut rng = RandomGenerator::with_seed(5);
        for _ in 0..50 {
            let result = calculator.calculate(&damage_input, &mut rng);
            assert!(result.min_damage <= result.sampled_damage);
            assert!(result.sampled_damage <= result.max_damage);
        }
    }

    #[test]
    fn test_type_multiplier_scales_damage() {
        let calculator = DamageCalculator::new();
        let neutral = calculator.scaled_base_damage(&input(120, 490, 340));
        let effective = calculator.scaled_base_damage(&DamageInput {
            type_multiplier: 2.0,
            ..input(120, 490, 340)
        });
        assert!((effective - neutral * 2.0).abs() < 1e-9);
    }
}
