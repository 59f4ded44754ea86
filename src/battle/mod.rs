// 战斗计算模块
// 开发心理：与指令文本无关的数值部分，输入均为已校验的整数

pub mod damage_calculator;
pub mod modifier;
pub mod stats;
pub mod type_effectiveness;

pub use damage_calculator::{DamageCalculator, DamageInput, DamageResult};
pub use modifier::stage_modifier;
pub use stats::{check_boost_levels, BattleStats};
pub use type_effectiveness::TypeEffectiveness;
