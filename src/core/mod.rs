// 核心模块 - 错误类型与配置管理
// 开发心理：指令流水线和命令行入口共用的基础设施

pub mod error;
pub mod config;

// 重新导出核心类型
pub use error::{CalcError, ErrorSeverity, Result};
pub use config::{CalculatorConfig, ConfigManager};
