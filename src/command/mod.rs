// 指令模块 - 伤害计算指令的解析、校验与回复
// 开发心理：文本只在词法阶段解析一次，之后都在类型化的记号上工作

pub mod interpreter;
pub mod keyword;
pub mod parameters;
pub mod response;
pub mod tokenizer;
pub mod validator;

pub use interpreter::{DamageCommand, Response};
pub use keyword::Keyword;
pub use parameters::ParsedParameters;
pub use response::{render, DamageReport, DisplayMode, HELP_TEXT};
pub use tokenizer::{strip_trigger, tokenize, Token};
pub use validator::{find_unknown_keywords, validate_keywords};
