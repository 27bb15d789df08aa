/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at shop scale)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// 带前缀的时间衍生 ID，如 `ord_288230376151711`、`p288230376151712`
///
/// 前缀约定：订单 `ord_`、请求 `req_`、商品 `p`、分类 `cat_`、用户 `user_`
pub fn prefixed_id(prefix: &str) -> String {
    format!("{}{}", prefix, snowflake_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_ids_are_js_safe_and_increasing_over_time() {
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id <= 0x1F_FFFF_FFFF_FFFF); // 2^53 - 1
    }

    #[test]
    fn prefixed_ids_keep_their_prefix() {
        let id = prefixed_id("ord_");
        assert!(id.starts_with("ord_"));
        assert!(id.len() > 4);
    }

    #[test]
    fn prefixed_ids_are_unique() {
        let a = prefixed_id("p");
        let b = prefixed_id("p");
        assert_ne!(a, b);
    }
}
