// 错误处理系统
// 开发心理：指令的每个校验阶段都可能短路，错误本身就是回复给用户的文本
// 用户输入错误与配置、IO错误共用一个类型，由严重程度区分日志级别

use std::io;
use log::Level;
use thiserror::Error;

use crate::battle::TypeEffectiveness;
use crate::command::Keyword;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    // 指令校验错误，Display即用户看到的回复
    #[error("错误：检测到未知参数 -> {}\n请发送 /伤害计算帮助 查看可用参数。", join_names(.0))]
    UnknownParameter(Vec<String>),

    #[error("参数不足或格式错误，请发送 /伤害计算帮助 查看详细说明。")]
    MissingParameter(Vec<Keyword>),

    #[error("属性相性参数冲突！一次只能使用一种关系。\n请发送 /伤害计算帮助 查看详细说明。")]
    ConflictingType(Vec<TypeEffectiveness>),

    #[error("错误：强化等级必须在 -6 到 6 之间。")]
    OutOfRangeLevel { attack_level: i64, defense_level: i64 },

    // 系统级错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("文件错误: {0}")]
    IOError(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

impl From<io::Error> for CalcError {
    fn from(error: io::Error) -> Self {
        CalcError::IOError(error.to_string())
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(error: toml::de::Error) -> Self {
        CalcError::ConfigError(error.to_string())
    }
}

impl From<toml::ser::Error> for CalcError {
    fn from(error: toml::ser::Error) -> Self {
        CalcError::ConfigError(error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl CalcError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::ConfigError(_) => ErrorSeverity::High,
            CalcError::IOError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::Low,
        }
    }

    /// 记录该错误时使用的日志级别，用户输入错误只是警告
    pub fn log_level(&self) -> Level {
        match self.severity() {
            ErrorSeverity::Low => Level::Warn,
            ErrorSeverity::Medium | ErrorSeverity::High => Level::Error,
        }
    }
}
