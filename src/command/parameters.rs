// 数值参数提取
// 同一关键字出现多次时以最后一次为准

use std::collections::HashMap;
use serde::Serialize;
use log::debug;

use crate::command::{Keyword, Token};
use crate::core::{CalcError, Result};

const REQUIRED: [Keyword; 3] = [Keyword::Power, Keyword::Attack, Keyword::Defense];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedParameters {
    pub power: i64,
    pub attack: i64,
    pub defense: i64,
    pub attack_level: i64,
    pub defense_level: i64,
}

impl ParsedParameters {
    pub fn extract(tokens: &[Token<'_>]) -> Result<Self> {
        let mut params: HashMap<Keyword, i64> = HashMap::new();
        for token in tokens {
            if let (Some(keyword), Some(value)) = (token.value_keyword(), token.value) {
                params.insert(keyword, value);
            }
        }

        let missing: Vec<Keyword> = REQUIRED
            .iter()
            .copied()
            .filter(|keyword| !params.contains_key(keyword))
            .collect();
        if !missing.is_empty() {
            debug!("缺少参数: {:?}", missing);
            return Err(CalcError::MissingParameter(missing));
        }

        let get = |keyword: Keyword| params.get(&keyword).copied().unwrap_or(0);
        let parsed = Self {
            power: get(Keyword::Power),
            attack: get(Keyword::Attack),
            defense: get(Keyword::Defense),
            attack_level: get(Keyword::AttackBoost),
            defense_level: get(Keyword::DefenseBoost),
        };
        debug!("参数提取结果: {:?}", parsed);
        Ok(parsed)
    }
}
