// 指令关键字
// 开发心理：所有可识别的中文关键字集中在一张表里，别名在这里归一

use std::fmt;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Keyword {
    Power,
    Attack,
    Defense,
    AttackBoost,
    DefenseBoost,
    DoubleEffective,
    Effective,
    DoubleResistant,
    Resistant,
    Panel,
    Help,
}

// 字面量 -> 关键字，同一关键字可有多个别名
const KEYWORD_TABLE: &[(&str, Keyword)] = &[
    ("威力", Keyword::Power),
    ("攻击", Keyword::Attack),
    ("防御", Keyword::Defense),
    ("攻击强化", Keyword::AttackBoost),
    ("防御强化", Keyword::DefenseBoost),
    ("双重克制", Keyword::DoubleEffective),
    ("双克", Keyword::DoubleEffective),
    ("克制", Keyword::Effective),
    ("强力抵抗", Keyword::DoubleResistant),
    ("双重抵抗", Keyword::DoubleResistant),
    ("抵抗", Keyword::Resistant),
    ("面板", Keyword::Panel),
    ("面板能力值", Keyword::Panel),
    ("帮助", Keyword::Help),
];

impl Keyword {
    /// 精确匹配，不做子串查找
    pub fn lookup(text: &str) -> Option<Keyword> {
        KEYWORD_TABLE
            .iter()
            .find(|(literal, _)| *literal == text)
            .map(|(_, keyword)| *keyword)
    }

    /// 以数值关键字结尾的中文串，取最长的匹配，例如 `面板防御` -> 防御
    pub fn value_suffix(run: &str) -> Option<Keyword> {
        KEYWORD_TABLE
            .iter()
            .filter(|(literal, keyword)| keyword.takes_value() && run.ends_with(literal))
            .max_by_key(|(literal, _)| literal.len())
            .map(|(_, keyword)| *keyword)
    }

    /// 规范名称，取表中第一个别名
    pub fn label(&self) -> &'static str {
        self.aliases().next().unwrap_or_default()
    }

    pub fn aliases(&self) -> impl Iterator<Item = &'static str> + '_ {
        KEYWORD_TABLE
            .iter()
            .filter(move |(_, keyword)| keyword == self)
            .map(|(literal, _)| *literal)
    }

    /// 需要紧跟数值的关键字
    pub fn takes_value(&self) -> bool {
        matches!(
            self,
            Keyword::Power
                | Keyword::Attack
                | Keyword::Defense
                | Keyword::AttackBoost
                | Keyword::DefenseBoost
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
