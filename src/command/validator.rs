// 未知参数校验
// 只检查每个片段开头的中文关键字，数值后缀不算关键字的一部分

use std::collections::BTreeSet;
use log::debug;

use crate::command::Token;
use crate::core::{CalcError, Result};

/// 去重并排序后的未知关键字
pub fn find_unknown_keywords(tokens: &[Token<'_>]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| token.leading && token.keyword.is_none())
        .map(|token| token.text.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn validate_keywords(tokens: &[Token<'_>]) -> Result<()> {
    let unknown = find_unknown_keywords(tokens);
    if unknown.is_empty() {
        Ok(())
    } else {
        debug!("未知参数: {:?}", unknown);
        Err(CalcError::UnknownParameter(unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tokenize;

    #[test]
    fn test_known_keywords_pass() {
        let tokens = tokenize("威力90 攻击400 防御300 攻击强化2 防御强化-1 双克 面板能力值 帮助");
        assert!(validate_keywords(&tokens).is_ok());
    }

    #[test]
    fn test_unknown_keyword_reported() {
        let tokens = tokenize("威力120 速度120");
        assert_eq!(
            validate_keywords(&tokens),
            Err(CalcError::UnknownParameter(vec!["速度".to_string()]))
        );
    }

    #[test]
    fn test_unknown_keywords_sorted_and_unique() {
        let tokens = tokenize("速度1 闪避 速度2 命中");
        let unknown = find_unknown_keywords(&tokens);
        let mut expected = vec!["命中".to_string(), "速度".to_string(), "闪避".to_string()];
        expected.sort();
        assert_eq!(unknown, expected);
    }

    #[test]
    fn test_only_leading_runs_are_checked() {
        // 非开头位置的中文不参与校验
        let tokens = tokenize("威力120速度5 x闪避");
        assert!(find_unknown_keywords(&tokens).is_empty());
    }

    #[test]
    fn test_glued_keywords_are_unknown() {
        let tokens = tokenize("克制面板");
        assert_eq!(find_unknown_keywords(&tokens), vec!["克制面板".to_string()]);
    }
}
