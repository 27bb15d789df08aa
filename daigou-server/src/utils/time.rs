//! 时间工具函数 — 业务时区的统计窗口
//!
//! 仪表板的四个窗口（今日 / 本周 / 本月 / 今年）都锚定在业务时区
//! (预设 Asia/Taipei)。所有日期→时间戳转换在这里完成，repository
//! 层只接收 `i64` Unix millis。

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// 日期 00:00:00 → Unix millis (业务时区)
///
/// DST gap fallback: 如果本地时间不存在 (夏令时跳跃)，fallback 到 UTC。
fn date_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// 今日 00:00 (业务时区)
pub fn day_start_millis(now: DateTime<Utc>, tz: Tz) -> i64 {
    date_start_millis(now.with_timezone(&tz).date_naive(), tz)
}

/// 本周周一 00:00 (ISO 周，业务时区)
pub fn week_start_millis(now: DateTime<Utc>, tz: Tz) -> i64 {
    let today = now.with_timezone(&tz).date_naive();
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    date_start_millis(monday, tz)
}

/// 本月 1 号 00:00 (业务时区)
pub fn month_start_millis(now: DateTime<Utc>, tz: Tz) -> i64 {
    let today = now.with_timezone(&tz).date_naive();
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    date_start_millis(first, tz)
}

/// 今年 1/1 00:00 (业务时区)
pub fn year_start_millis(now: DateTime<Utc>, tz: Tz) -> i64 {
    let today = now.with_timezone(&tz).date_naive();
    let first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    date_start_millis(first, tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Taipei;

    fn taipei_millis(y: i32, m: u32, d: u32) -> i64 {
        Taipei
            .with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .expect("valid Taipei midnight")
            .timestamp_millis()
    }

    #[test]
    fn window_starts_cross_the_utc_date_line() {
        // 2025-08-06 18:30 UTC == 2025-08-07 02:30 台北 (周四)
        let now = Utc.with_ymd_and_hms(2025, 8, 6, 18, 30, 0).unwrap();

        assert_eq!(day_start_millis(now, Taipei), taipei_millis(2025, 8, 7));
        assert_eq!(week_start_millis(now, Taipei), taipei_millis(2025, 8, 4));
        assert_eq!(month_start_millis(now, Taipei), taipei_millis(2025, 8, 1));
        assert_eq!(year_start_millis(now, Taipei), taipei_millis(2025, 1, 1));
    }

    #[test]
    fn sunday_belongs_to_the_week_started_last_monday() {
        // 2025-08-10 是周日，ISO 周起点应是 8/4 (周一) 而非 8/10
        let now = Utc.with_ymd_and_hms(2025, 8, 10, 4, 0, 0).unwrap();
        assert_eq!(week_start_millis(now, Taipei), taipei_millis(2025, 8, 4));
    }

    #[test]
    fn monday_is_its_own_week_start() {
        let now = Utc.with_ymd_and_hms(2025, 8, 4, 4, 0, 0).unwrap();
        assert_eq!(week_start_millis(now, Taipei), taipei_millis(2025, 8, 4));
    }

    #[test]
    fn january_first_day_and_year_coincide() {
        // 台北 2025-01-01 08:00
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(day_start_millis(now, Taipei), taipei_millis(2025, 1, 1));
        assert_eq!(year_start_millis(now, Taipei), taipei_millis(2025, 1, 1));
        assert_eq!(month_start_millis(now, Taipei), taipei_millis(2025, 1, 1));
    }
}
