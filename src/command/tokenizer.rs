// 指令词法分析
// 开发心理：把自由文本一次性切成“中文关键字 + 可选带符号整数”的记号
// 后续的校验、取参、相性判断都只看记号，不再反复对原文做模式匹配

use lazy_static::lazy_static;
use regex::Regex;

use crate::command::Keyword;
use crate::constants::TRIGGER;

lazy_static! {
    // 连续的中文字符，后面可以紧跟一个带符号整数
    static ref KEYWORD_REGEX: Regex =
        Regex::new(r"([\x{4E00}-\x{9FA5}]+)(-?[0-9]+)?").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// 原文中的中文字符串
    pub text: &'a str,
    pub keyword: Option<Keyword>,
    pub value: Option<i64>,
    /// 是否位于空白分隔片段的开头
    pub leading: bool,
}

impl Token<'_> {
    /// 数值归属的关键字：精确匹配优先，未识别的中文串按结尾的数值关键字处理
    pub fn value_keyword(&self) -> Option<Keyword> {
        self.value?;
        match self.keyword {
            Some(keyword) => keyword.takes_value().then_some(keyword),
            None => Keyword::value_suffix(self.text),
        }
    }
}

/// 去掉开头的 `/` 和触发词
pub fn strip_trigger(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix('/').unwrap_or(text);
    text.strip_prefix(TRIGGER).map(str::trim).unwrap_or(text)
}

pub fn tokenize(args: &str) -> Vec<Token<'_>> {
    args.split_whitespace()
        .flat_map(|part| {
            KEYWORD_REGEX.captures_iter(part).filter_map(|caps| {
                let run = caps.get(1)?;
                Some(Token {
                    text: run.as_str(),
                    keyword: Keyword::lookup(run.as_str()),
                    value: caps.get(2).map(|digits| parse_signed(digits.as_str())),
                    leading: run.start() == 0,
                })
            })
        })
        .collect()
}

// 超出范围的数值按符号取极值，交给后续的范围校验处理
fn parse_signed(digits: &str) -> i64 {
    digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}
