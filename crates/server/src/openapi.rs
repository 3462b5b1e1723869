use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct LoginRequestDoc {
    pub username: String,
    pub password: String,
}

#[derive(ToSchema)]
#[schema(as = Brand, rename_all = "camelCase")]
pub struct BrandDoc {
    pub id: String,
    pub name: String,
    pub description: String,
    pub origin_country: String,
    pub certifications: Vec<String>,
    pub image_url: String,
}

#[derive(ToSchema)]
#[schema(as = Product, rename_all = "camelCase")]
pub struct ProductDoc {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    pub specs: String,
    pub description: String,
    pub base_price: i64,
    pub image_url: String,
    /// IN_STOCK | LOW_STOCK | OUT_OF_STOCK
    pub stock_status: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpsertUserDoc {
    pub id: String,
    pub username: String,
    /// ADMIN | USER
    pub role: String,
    pub full_name: String,
    pub clinic_name: Option<String>,
    pub discount_tier: f64,
    pub is_active: bool,
    /// Omit to keep the stored credential
    pub password: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateOrderDoc {
    pub product_id: String,
    pub quantity: u32,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateOrderStatusDoc {
    /// PENDING | APPROVED | SHIPPED | CANCELLED
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::me,
        crate::routes::catalog::list_brands,
        crate::routes::catalog::get_brand,
        crate::routes::catalog::list_products,
        crate::routes::catalog::upsert_brand,
        crate::routes::catalog::upsert_product,
        crate::routes::catalog::delete_product,
        crate::routes::users::list,
        crate::routes::users::upsert,
        crate::routes::orders::create,
        crate::routes::orders::list_mine,
        crate::routes::orders::list_all,
        crate::routes::orders::update_status,
        crate::routes::admin::stats,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequestDoc,
            BrandDoc,
            ProductDoc,
            UpsertUserDoc,
            CreateOrderDoc,
            UpdateOrderStatusDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "catalog"),
        (name = "orders"),
        (name = "admin")
    )
)]
pub struct ApiDoc;
