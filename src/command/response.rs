// 回复格式化
// 开发心理：详细/简洁两种回复共用一条渲染路径，只有能力值部分随模式变化

use std::fmt;
use serde::Serialize;

use crate::battle::{BattleStats, DamageResult, TypeEffectiveness};

const SEPARATOR: &str = "-------------------";

pub const HELP_TEXT: &str = "--- 洛克王国页游伤害计算器帮助 ---

指令格式 (参数顺序可随意打乱):
/伤害计算 威力<数值> 攻击<数值> 防御<数值>

--- 可选参数 ---

1. 强化等级 (范围: -6 到 6):
   - `攻击强化<等级>`
   - `防御强化<等级>`

2. 属性相性 (一次只能用一个):
   - `克制` (伤害 x2.0)
   - `抵抗` (伤害 x0.5)
   - `双克` / `双重克制` (伤害 x3.0)
   - `强力抵抗` / `双重抵抗` (伤害 x0.33)

3. 战斗内加成 (模拟装备和守护兽):
   - `面板` 或 `面板能力值`
   - 说明: 使用此参数时，输入的【攻击】和【防御】应为宠物背包中看到的基础值。计算器会自动为其增加140点 (90装备 + 50守护兽) 来模拟战斗中的实际能力值。

--- 示例 ---

▶︎ 基础计算 (输入战斗内的实际能力值):
/伤害计算 威力120 攻击490 防御340

▶︎ 复杂计算 (输入背包能力值，并使用面板加成):
/伤害计算 威力90 攻击400 防御300 攻击强化2 防御强化-1 克制 面板";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayMode {
    /// 同时显示面板值和实际值
    Detailed,
    /// 只显示参与计算的实际值
    Concise,
}

// 一次计算的完整记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageReport {
    pub power: i64,
    pub stats: BattleStats,
    pub attack_level: i64,
    pub defense_level: i64,
    pub type_effectiveness: TypeEffectiveness,
    pub damage: DamageResult,
}

impl DamageReport {
    pub fn display_mode(&self) -> DisplayMode {
        if self.stats.panel_bonus_applied {
            DisplayMode::Detailed
        } else {
            DisplayMode::Concise
        }
    }

    pub fn render(&self) -> String {
        render(self, self.display_mode())
    }
}

impl fmt::Display for DamageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

pub fn render(report: &DamageReport, mode: DisplayMode) -> String {
    let stats = &report.stats;
    let mut lines = vec![
        "伤害计算结果：".to_string(),
        SEPARATOR.to_string(),
        "攻击方信息：".to_string(),
    ];
    lines.extend(stat_lines(mode, "攻击", stats.panel_attack, stats.attack, report.attack_level));
    lines.push("受击方信息：".to_string());
    lines.extend(stat_lines(mode, "防御", stats.panel_defense, stats.defense, report.defense_level));
    lines.push(format!("技能威力: {}", report.power));
    lines.push(format!("属性相性: {}", report.type_effectiveness.label()));
    lines.push(SEPARATOR.to_string());
    lines.push(format!("本次随机伤害: {}", report.damage.sampled_damage));
    lines.push(format!(
        "伤害浮动范围: {} ~ {}",
        report.damage.min_damage, report.damage.max_damage
    ));
    lines.join("\n")
}

fn stat_lines(mode: DisplayMode, name: &str, panel: i64, actual: i64, level: i64) -> Vec<String> {
    match mode {
        DisplayMode::Detailed => vec![
            format!("  - 面板{}能力值: {}", name, panel),
            format!("  - 实际{}能力值: {} (强化等级: {})", name, actual, level),
        ],
        DisplayMode::Concise => vec![format!("  - {}: {} (强化等级: {})", name, actual, level)],
    }
}
