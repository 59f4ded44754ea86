// 属性相性
// 开发心理：四种相性互斥，按“先双重、后单一”的顺序逐项检查
// 关键字别名在词法阶段已归一，这里只看关键字种类

use serde::Serialize;
use log::debug;

use crate::command::Keyword;
use crate::core::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeEffectiveness {
    None,
    DoubleEffective,
    Effective,
    DoubleResistant,
    Resistant,
}

impl TypeEffectiveness {
    /// 检查顺序，更具体的双重关系排在前面
    pub const PRECEDENCE: [TypeEffectiveness; 4] = [
        TypeEffectiveness::DoubleEffective,
        TypeEffectiveness::Effective,
        TypeEffectiveness::DoubleResistant,
        TypeEffectiveness::Resistant,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            TypeEffectiveness::None => 1.0,
            TypeEffectiveness::DoubleEffective => 3.0,
            TypeEffectiveness::Effective => 2.0,
            TypeEffectiveness::DoubleResistant => 1.0 / 3.0,
            TypeEffectiveness::Resistant => 0.5,
        }
    }

    pub fn label(&self) -> String {
        match self {
            TypeEffectiveness::None => "无".to_string(),
            TypeEffectiveness::DoubleEffective => "双重克制 (x3.0)".to_string(),
            TypeEffectiveness::Effective => "克制 (x2.0)".to_string(),
            TypeEffectiveness::DoubleResistant => format!("强力抵抗 (x{:.2})", self.multiplier()),
            TypeEffectiveness::Resistant => "抵抗 (x0.5)".to_string(),
        }
    }

    fn keyword(&self) -> Option<Keyword> {
        match self {
            TypeEffectiveness::None => None,
            TypeEffectiveness::DoubleEffective => Some(Keyword::DoubleEffective),
            TypeEffectiveness::Effective => Some(Keyword::Effective),
            TypeEffectiveness::DoubleResistant => Some(Keyword::DoubleResistant),
            TypeEffectiveness::Resistant => Some(Keyword::Resistant),
        }
    }

    /// 从指令中出现的关键字确定唯一的相性关系
    pub fn resolve(keywords: &[Keyword]) -> Result<TypeEffectiveness> {
        let active: Vec<TypeEffectiveness> = Self::PRECEDENCE
            .iter()
            .copied()
            .filter(|category| {
                category
                    .keyword()
                    .is_some_and(|keyword| keywords.contains(&keyword))
            })
            .collect();

        match active.as_slice() {
            [] => Ok(TypeEffectiveness::None),
            [single] => {
                debug!("属性相性: {:?} x{}", single, single.multiplier());
                Ok(*single)
            }
            _ => Err(CalcError::ConflictingType(active)),
        }
    }
}
