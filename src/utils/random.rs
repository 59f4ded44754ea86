/*
* 开发心理过程：
* 1. 伤害浮动需要随机数，但计算公式本身必须可测试
* 2. 随机源抽象为DamageRoller，由调用方注入，公式不持有全局状态
* 3. RandomGenerator基于StdRng，支持固定种子重现结果
* 4. 固定取值的实现用于测试和“只看上下限”的场景
*/

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 伤害随机源，返回 [min, max] 闭区间内的整数
pub trait DamageRoller {
    fn roll(&mut self, min: i64, max: i64) -> i64;
}

/// 随机数生成器
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: StdRng,
    seed: u64,
    total_rolls: u64,
}

impl RandomGenerator {
    /// 创建新的随机数生成器
    pub fn new() -> Self {
        let seed = rand::random::<u64>();
        Self::with_seed(seed)
    }

    /// 使用指定种子创建
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            total_rolls: 0,
        }
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    pub fn total_rolls(&self) -> u64 {
        self.total_rolls
    }

    /// 生成指定范围的整数 [min, max] (包含max)
    pub fn range_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.total_rolls += 1;
        self.rng.gen_range(min..=max)
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DamageRoller for RandomGenerator {
    fn roll(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.range_inclusive(min, max)
    }
}

/// 固定取值的随机源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedRoll {
    Min,
    Max,
}

impl DamageRoller for FixedRoll {
    fn roll(&mut self, min: i64, max: i64) -> i64 {
        match self {
            FixedRoll::Min => min,
            FixedRoll::Max => max,
        }
    }
}
