// 工具模块 - 通用工具
// 开发心理：随机数等与具体业务无关的基础能力

pub mod random;

pub use random::{DamageRoller, FixedRoll, RandomGenerator};
