//! Dashboard API Handlers
//!
//! 四个独立窗口 (今日/本周/本月/今年)，都锚定业务时区。
//! 今天建立的订单同时落进四个窗口。

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::AppResult;
use crate::utils::time;
use shared::client::{DashboardSummary, WindowStats};
use shared::models::Order;

/// GET /api/dashboard-summary - 时间窗销售统计
pub async fn summary(
    State(state): State<ServerState>,
    _user: CurrentUser,
) -> AppResult<Json<DashboardSummary>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all().await?;

    Ok(Json(summarize(&orders, Utc::now(), state.config.timezone)))
}

/// 单趟扫过订单集，对四个窗口各累计 {count, sales}
fn summarize(orders: &[Order], now: DateTime<Utc>, tz: Tz) -> DashboardSummary {
    let today_start = time::day_start_millis(now, tz);
    let week_start = time::week_start_millis(now, tz);
    let month_start = time::month_start_millis(now, tz);
    let year_start = time::year_start_millis(now, tz);

    let mut today = WindowStats::default();
    let mut this_week = WindowStats::default();
    let mut this_month = WindowStats::default();
    let mut this_year = WindowStats::default();

    for order in orders {
        for (start, stats) in [
            (today_start, &mut today),
            (week_start, &mut this_week),
            (month_start, &mut this_month),
            (year_start, &mut this_year),
        ] {
            if order.created_at >= start {
                stats.count += 1;
                stats.sales += order.total_amount;
            }
        }
    }

    DashboardSummary {
        today,
        this_week,
        this_month,
        this_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Taipei;
    use rust_decimal::Decimal;
    use shared::models::OrderStatus;

    fn order_at(created_at: i64, total: i64) -> Order {
        Order {
            order_id: format!("ord_{created_at}"),
            created_at,
            status: OrderStatus::Pending,
            is_new: false,
            activity_log: vec![],
            paopaohu_id: "PPH-1".to_string(),
            email: "buyer@example.com".to_string(),
            tax_id: None,
            last_five_digits: "12345".to_string(),
            total_amount: Decimal::from(total),
            items: vec![],
        }
    }

    #[test]
    fn empty_order_set_yields_zeroed_windows() {
        let now = Utc.with_ymd_and_hms(2025, 8, 6, 10, 0, 0).unwrap();
        let summary = summarize(&[], now, Taipei);
        for window in [
            summary.today,
            summary.this_week,
            summary.this_month,
            summary.this_year,
        ] {
            assert_eq!(window.count, 0);
            assert_eq!(window.sales, Decimal::ZERO);
        }
    }

    #[test]
    fn todays_order_lands_in_all_four_windows() {
        // 周三 2025-08-06 18:00 台北
        let now = Utc.with_ymd_and_hms(2025, 8, 6, 10, 0, 0).unwrap();
        let today_noon = Taipei
            .with_ymd_and_hms(2025, 8, 6, 12, 0, 0)
            .unwrap()
            .timestamp_millis();

        let summary = summarize(&[order_at(today_noon, 240)], now, Taipei);

        assert_eq!(summary.today.count, 1);
        assert_eq!(summary.this_week.count, 1);
        assert_eq!(summary.this_month.count, 1);
        assert_eq!(summary.this_year.count, 1);
        assert_eq!(summary.today.sales, Decimal::from(240));
    }

    #[test]
    fn windows_are_independent_not_cumulative() {
        let now = Utc.with_ymd_and_hms(2025, 8, 6, 10, 0, 0).unwrap();
        // 周一 (本周内但不是今天)
        let monday = Taipei
            .with_ymd_and_hms(2025, 8, 4, 9, 0, 0)
            .unwrap()
            .timestamp_millis();
        // 上个月
        let last_month = Taipei
            .with_ymd_and_hms(2025, 7, 15, 9, 0, 0)
            .unwrap()
            .timestamp_millis();
        // 去年
        let last_year = Taipei
            .with_ymd_and_hms(2024, 12, 31, 9, 0, 0)
            .unwrap()
            .timestamp_millis();

        let orders = vec![
            order_at(monday, 100),
            order_at(last_month, 200),
            order_at(last_year, 400),
        ];
        let summary = summarize(&orders, now, Taipei);

        assert_eq!(summary.today.count, 0);
        assert_eq!(summary.this_week.count, 1);
        assert_eq!(summary.this_week.sales, Decimal::from(100));
        assert_eq!(summary.this_month.count, 1);
        assert_eq!(summary.this_year.count, 2);
        assert_eq!(summary.this_year.sales, Decimal::from(300));
    }
}
