//! 购物车
//!
//! 项目以 productId 去重；数量改到 0 以下即移除。购物车
//! 完全存在客户端，订单送出成功后清空。

use rust_decimal::Decimal;

use crate::storage::{KEY_CART, LocalStore};
use shared::models::{OrderItem, Product};

/// Typed cart over [`LocalStore`]
#[derive(Debug, Clone)]
pub struct CartStore {
    store: LocalStore,
}

impl CartStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// 读取购物车；资料损坏时回空 (与店面行为一致)
    pub fn get(&self) -> Vec<OrderItem> {
        self.store.get(KEY_CART).unwrap_or_default()
    }

    fn save(&self, items: &Vec<OrderItem>) {
        if let Err(e) = self.store.set(KEY_CART, items) {
            tracing::error!(error = %e, "Failed to persist cart");
        }
    }

    /// 加入商品：已在车内就数量 +1，否则新增一笔数量 1
    pub fn add_product(&self, product: &Product) {
        let mut items = self.get();
        match items.iter_mut().find(|item| item.product_id == product.id) {
            Some(existing) => existing.quantity += 1,
            None => items.push(OrderItem {
                product_id: product.id.clone(),
                title: product.title.clone(),
                price: product.price,
                service_fee: product.service_fee,
                quantity: 1,
                notes: String::new(),
            }),
        }
        self.save(&items);
    }

    /// 更新数量；0 以下等同移除
    pub fn update_quantity(&self, product_id: &str, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove(product_id);
            return;
        }

        let mut items = self.get();
        if let Some(item) = items.iter_mut().find(|item| item.product_id == product_id) {
            item.quantity = new_quantity as u32;
            self.save(&items);
        }
    }

    /// 更新备注
    pub fn update_notes(&self, product_id: &str, notes: impl Into<String>) {
        let mut items = self.get();
        if let Some(item) = items.iter_mut().find(|item| item.product_id == product_id) {
            item.notes = notes.into();
            self.save(&items);
        }
    }

    /// 移除商品
    pub fn remove(&self, product_id: &str) {
        let mut items = self.get();
        items.retain(|item| item.product_id != product_id);
        self.save(&items);
    }

    /// 清空购物车 (下单成功后)
    pub fn clear(&self) {
        self.save(&Vec::new());
    }

    /// 购物车角标的件数 (数量加总)
    pub fn count(&self) -> u32 {
        self.get().iter().map(|item| item.quantity).sum()
    }

    /// 总金额 = Σ (单价 + 服务费) × 数量
    pub fn total(&self) -> Decimal {
        self.get()
            .iter()
            .map(|item| (item.price + item.service_fee) * Decimal::from(item.quantity))
            .sum()
    }
}
