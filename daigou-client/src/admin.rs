//! 后台 (Bearer) API 客户端
//!
//! 登入后把令牌写进本地存储 (对应浏览器版的 `localStorage`)，
//! 之后每个请求自动带 `Authorization: Bearer`。

use crate::http::HttpClient;
use crate::storage::{KEY_TOKEN, LocalStore};
use crate::{ClientConfig, ClientResult};
use shared::client::{
    BulkDeleteRequest, CategoryCreate, DashboardSummary, LoginRequest, LoginResponse,
    MessageResponse, NotificationSummary, OrderStatusUpdate, OrderUpdated, PasswordChangeRequest,
    ProductCreate, ProductUpdate, ProductUpdated, ReorderRequest, RequestStatusUpdate,
    RequestUpdated, SiteSettingsUpdate, UserCreate,
};
use shared::models::{
    Category, Order, OrderStatus, Product, PurchaseRequest, RequestStatus, SiteSettings, User,
};

/// Admin API client
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: HttpClient,
    store: LocalStore,
}

impl AdminClient {
    /// 建立客户端；本地存储里已有令牌就直接沿用
    pub fn new(config: &ClientConfig, store: LocalStore) -> Self {
        let mut http = HttpClient::new(config);
        if http.token().is_none()
            && let Some(saved) = store.get::<String>(KEY_TOKEN)
        {
            http.set_token(saved);
        }

        Self { http, store }
    }

    /// 是否已持有令牌 (不保证未过期)
    pub fn is_logged_in(&self) -> bool {
        self.http.token().is_some()
    }

    // ========== Auth ==========

    /// POST /api/login - 登入并保存令牌
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.http.post("/api/login", &request).await?;
        self.store.set(KEY_TOKEN, &response.token)?;
        self.http.set_token(response.token.clone());
        Ok(response)
    }

    /// 清除本地令牌
    pub fn logout(&mut self) -> ClientResult<()> {
        self.store.remove(KEY_TOKEN)?;
        self.http.clear_token();
        Ok(())
    }

    /// PATCH /api/user/password - 更新自己的密码
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> ClientResult<MessageResponse> {
        let request = PasswordChangeRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.http.patch("/api/user/password", &request).await
    }

    // ========== Products ==========

    /// GET /api/admin/products - 全部商品 (含草稿)
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.http.get("/api/admin/products").await
    }

    /// POST /api/products - 新增商品
    pub async fn create_product(&self, product: ProductCreate) -> ClientResult<Product> {
        self.http.post("/api/products", &product).await
    }

    /// PUT /api/products/:id - 合并更新
    pub async fn update_product(
        &self,
        id: &str,
        update: ProductUpdate,
    ) -> ClientResult<ProductUpdated> {
        self.http.put(&format!("/api/products/{id}"), &update).await
    }

    /// DELETE /api/products/:id
    pub async fn delete_product(&self, id: &str) -> ClientResult<MessageResponse> {
        self.http.delete(&format!("/api/products/{id}")).await
    }

    /// PATCH /api/products/order - 手动排序
    pub async fn reorder_products(&self, ordered_ids: Vec<String>) -> ClientResult<MessageResponse> {
        self.http
            .patch("/api/products/order", &ReorderRequest { ordered_ids })
            .await
    }

    // ========== Orders ==========

    /// GET /api/orders - 订单列表 (副作用：清除未读标记)
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get("/api/orders").await
    }

    /// PATCH /api/orders/:orderId/status - 状态流转
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> ClientResult<OrderUpdated> {
        self.http
            .patch(
                &format!("/api/orders/{order_id}/status"),
                &OrderStatusUpdate { status },
            )
            .await
    }

    /// DELETE /api/orders/:orderId
    pub async fn delete_order(&self, order_id: &str) -> ClientResult<MessageResponse> {
        self.http.delete(&format!("/api/orders/{order_id}")).await
    }

    /// POST /api/orders/bulk-delete - 批次删除
    pub async fn bulk_delete_orders(
        &self,
        order_ids: Vec<String>,
    ) -> ClientResult<MessageResponse> {
        self.http
            .post("/api/orders/bulk-delete", &BulkDeleteRequest { order_ids })
            .await
    }

    // ========== Purchase Requests ==========

    /// GET /api/requests - 请求列表 (副作用：清除未读标记)
    pub async fn list_requests(&self) -> ClientResult<Vec<PurchaseRequest>> {
        self.http.get("/api/requests").await
    }

    /// PATCH /api/requests/:requestId/status - 状态覆写
    pub async fn update_request_status(
        &self,
        request_id: &str,
        status: RequestStatus,
    ) -> ClientResult<RequestUpdated> {
        self.http
            .patch(
                &format!("/api/requests/{request_id}/status"),
                &RequestStatusUpdate { status },
            )
            .await
    }

    // ========== Users ==========

    /// GET /api/users
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.http.get("/api/users").await
    }

    /// POST /api/users
    pub async fn create_user(&self, user: UserCreate) -> ClientResult<User> {
        self.http.post("/api/users", &user).await
    }

    /// DELETE /api/users/:username (最高管理员会拿到 403)
    pub async fn delete_user(&self, username: &str) -> ClientResult<MessageResponse> {
        self.http.delete(&format!("/api/users/{username}")).await
    }

    // ========== Categories ==========

    /// GET /api/categories
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get("/api/categories").await
    }

    /// POST /api/categories
    pub async fn create_category(&self, name: impl Into<String>) -> ClientResult<Category> {
        self.http
            .post("/api/categories", &CategoryCreate { name: name.into() })
            .await
    }

    /// DELETE /api/categories/:id
    pub async fn delete_category(&self, id: &str) -> ClientResult<MessageResponse> {
        self.http.delete(&format!("/api/categories/{id}")).await
    }

    // ========== Site Settings ==========

    /// GET /api/admin/site-settings - 本人站台设定
    pub async fn site_settings(&self) -> ClientResult<SiteSettings> {
        self.http.get("/api/admin/site-settings").await
    }

    /// PUT /api/admin/site-settings - 整包覆写
    pub async fn update_site_settings(
        &self,
        settings: SiteSettingsUpdate,
    ) -> ClientResult<MessageResponse> {
        self.http.put("/api/admin/site-settings", &settings).await
    }

    // ========== Notifications & Dashboard ==========

    /// GET /api/notifications/summary - 铃铛未读计数
    pub async fn notification_summary(&self) -> ClientResult<NotificationSummary> {
        self.http.get("/api/notifications/summary").await
    }

    /// GET /api/dashboard-summary - 时间窗销售统计
    pub async fn dashboard_summary(&self) -> ClientResult<DashboardSummary> {
        self.http.get("/api/dashboard-summary").await
    }
}
