/*
* 开发心理过程：
* 1. 指令处理是一条单向流水线：词法 -> 未知参数 -> 帮助 -> 取参 -> 面板加成 -> 相性 -> 等级范围 -> 计算
* 2. 每一步都可能以用户可读的错误短路，不产生部分结果
* 3. 随机源由调用方注入，解释器本身无状态，可重复使用
*/

use log::{debug, info, log};
use serde::Serialize;

use crate::battle::{check_boost_levels, BattleStats, DamageCalculator, DamageInput, TypeEffectiveness};
use crate::command::{
    response::HELP_TEXT, strip_trigger, tokenize, validate_keywords, DamageReport, Keyword,
    ParsedParameters,
};
use crate::constants::HELP_COMMAND;
use crate::core::Result;
use crate::utils::DamageRoller;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Response {
    Help,
    Report(DamageReport),
}

impl Response {
    pub fn render(&self) -> String {
        match self {
            Response::Help => HELP_TEXT.to_string(),
            Response::Report(report) => report.render(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DamageCommand {
    calculator: DamageCalculator,
}

impl DamageCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// 帮助指令不经过任何校验
    pub fn is_help_command(text: &str) -> bool {
        let text = text.trim();
        text.strip_prefix('/').unwrap_or(text) == HELP_COMMAND
    }

    pub fn execute<R: DamageRoller + ?Sized>(&self, text: &str, roller: &mut R) -> Result<Response> {
        if Self::is_help_command(text) {
            return Ok(Response::Help);
        }

        let tokens = tokenize(strip_trigger(text));
        validate_keywords(&tokens)?;

        let keywords: Vec<Keyword> = tokens.iter().filter_map(|token| token.keyword).collect();
        if keywords.contains(&Keyword::Help) {
            return Ok(Response::Help);
        }

        let params = ParsedParameters::extract(&tokens)?;
        let stats = BattleStats::new(
            params.attack,
            params.defense,
            keywords.contains(&Keyword::Panel),
        );
        let type_effectiveness = TypeEffectiveness::resolve(&keywords)?;
        check_boost_levels(params.attack_level, params.defense_level)?;

        let input = DamageInput {
            power: params.power,
            attack: stats.attack,
            defense: stats.defense,
            attack_level: params.attack_level,
            defense_level: params.defense_level,
            type_multiplier: type_effectiveness.multiplier(),
        };
        let damage = self.calculator.calculate(&input, roller);
        debug!("伤害计算完成: {:?}", damage);

        Ok(Response::Report(DamageReport {
            power: params.power,
            stats,
            attack_level: params.attack_level,
            defense_level: params.defense_level,
            type_effectiveness,
            damage,
        }))
    }

    /// 处理一条指令并返回回复文本，错误也作为回复
    pub fn reply<R: DamageRoller + ?Sized>(&self, text: &str, roller: &mut R) -> String {
        match self.execute(text, roller) {
            Ok(response) => {
                info!("指令处理成功: {}", text.trim());
                response.render()
            }
            Err(e) => {
                log!(e.log_level(), "指令被拒绝: {} ({:?})", text.trim(), e);
                e.to_string()
            }
        }
    }
}
