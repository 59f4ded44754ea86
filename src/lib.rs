// 洛克王国伤害计算器库入口
// 开发心理：聊天指令“伤害计算”的完整处理流程，传输层之外的部分都在这里
// 架构：core(错误/配置) + utils(随机源) + battle(数值) + command(文本)

pub mod core;
pub mod utils;
pub mod battle;
pub mod command;

// 重新导出核心类型
pub use crate::core::{CalcError, CalculatorConfig, ConfigManager, Result};
pub use battle::{DamageCalculator, DamageInput, DamageResult, TypeEffectiveness};
pub use command::{DamageCommand, DamageReport, Keyword, Response};
pub use utils::{DamageRoller, FixedRoll, RandomGenerator};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "roco-damage";

// 计算常量
pub mod constants {
    /// 指令触发词
    pub const TRIGGER: &str = "伤害计算";
    pub const HELP_COMMAND: &str = "伤害计算帮助";

    /// 宠物等级基准
    pub const REFERENCE_LEVEL: f64 = 100.0;
    /// 最低伤害 = 最高伤害 x 0.80
    pub const MIN_ROLL_RATIO: f64 = 0.80;
    /// 面板加成：90装备 + 50守护兽
    pub const PANEL_BONUS: i64 = 140;

    pub const MIN_BOOST_LEVEL: i64 = -6;
    pub const MAX_BOOST_LEVEL: i64 = 6;
}

// 初始化日志系统，RUST_LOG优先于配置
pub fn init(config: &CalculatorConfig) -> Result<()> {
    ConfigManager::validate_config(config)?;

    let initialized = env_logger::Builder::new()
        .filter_level(config.log_filter())
        .parse_default_env()
        .try_init();
    if initialized.is_err() {
        log::debug!("日志系统已初始化，跳过");
    }

    log::info!("伤害计算器初始化完成 v{}", VERSION);
    Ok(())
}
