// 强化等级修正
// 正数等级为强化，负数为弱化，等级范围由调用方保证

/// 强化: (2 + 等级) / 2，弱化: 2 / (2 + |等级|)
pub fn stage_modifier(level: i64) -> f64 {
    if level > 0 {
        (2.0 + level as f64) / 2.0
    } else if level < 0 {
        2.0 / (2.0 + level.unsigned_abs() as f64)
    } else {
        1.0
    }
}
