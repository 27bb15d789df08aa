//! 店面 (公开) API 客户端
//!
//! 目录读取、结帐下单、代采购请求与订单查询；下单成功后
//! 自动清空本地购物车。

use crate::cart::CartStore;
use crate::http::HttpClient;
use crate::{ClientConfig, ClientError, ClientResult};
use shared::client::{OrderCreate, OrderCreated, RequestCreate, RequestCreated};
use shared::models::{Category, Order, Product};

/// 结帐表单的联络资讯
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    /// 跑跑虎会员编号 (必填)
    pub paopaohu_id: String,
    /// 联络信箱 (必填)
    pub email: String,
    /// 统一编号 (选填，8 码数字)
    pub tax_id: Option<String>,
    /// 汇款帐号末五码 (必填)
    pub last_five_digits: String,
}

/// Storefront API client
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: HttpClient,
    cart: CartStore,
}

impl StorefrontClient {
    pub fn new(config: &ClientConfig, cart: CartStore) -> Self {
        Self {
            http: HttpClient::new(config),
            cart,
        }
    }

    /// 本地购物车
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// GET /api/products - 已上架商品，依 sortOrder
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.http.get("/api/products").await
    }

    /// GET /api/products/:id - 商品详情
    pub async fn get_product(&self, id: &str) -> ClientResult<Product> {
        self.http.get(&format!("/api/products/{id}")).await
    }

    /// GET /api/categories - 分类列表
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get("/api/categories").await
    }

    /// POST /api/orders - 以购物车内容结帐
    ///
    /// 总金额在客户端计算 (与店面一致)；成功后清空购物车。
    pub async fn checkout(&self, details: CheckoutDetails) -> ClientResult<OrderCreated> {
        let items = self.cart.get();
        if items.is_empty() {
            return Err(ClientError::Validation(
                "您的購物車是空的，無法建立訂單！".to_string(),
            ));
        }

        let payload = OrderCreate {
            paopaohu_id: details.paopaohu_id,
            email: details.email,
            tax_id: details.tax_id,
            last_five_digits: details.last_five_digits,
            total_amount: self.cart.total(),
            items,
        };

        let created: OrderCreated = self.http.post("/api/orders", &payload).await?;
        self.cart.clear();
        Ok(created)
    }

    /// POST /api/requests - 送出代采购请求
    pub async fn submit_request(&self, request: RequestCreate) -> ClientResult<RequestCreated> {
        self.http.post("/api/requests", &request).await
    }

    /// GET /api/orders/lookup - 以会员编号查历史订单 (新到旧)
    pub async fn lookup_orders(&self, paopaohu_id: &str) -> ClientResult<Vec<Order>> {
        self.http
            .get(&format!("/api/orders/lookup?paopaohuId={paopaohu_id}"))
            .await
    }
}
