//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 [`ROUTE_TABLE`] 한 곳에 (메서드, 경로 패턴, 인증 여부, 핸들러) 로
//! 선언되고, 위에서 아래 순서로 등록됩니다. actix 라우터는 등록 순서대로 첫 번째로
//! 일치하는 리소스를 선택하므로 테이블 순서가 곧 매칭 우선순위입니다.
//!
//! # 매칭 우선순위
//!
//! 같은 요청에 두 패턴이 모두 일치할 수 있는 경우 리터럴 세그먼트를 가진 패턴이
//! 반드시 먼저 와야 합니다.
//!
//! ```text
//! GET /products/all          ← /products/{category} 보다 먼저
//! GET /users/admin/{email}   ← /users/{email} 보다 먼저
//! GET /users/sellers/{email} ← /users/{email} 보다 먼저
//! ```
//!
//! 각 리소스는 메서드 가드를 가지므로 `POST /products/add` 가
//! `GET /products/{category}` 에 가로채이지 않습니다.
//!
//! # Auth Middleware Usage
//!
//! `protected: true` 인 항목만 [`AuthGate`] 로 감쌉니다. 게이트가 거부하면
//! 핸들러는 실행되지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .app_data(web::Data::from(tokens))
//!     .configure(configure_all_routes);
//! ```

use actix_web::http::Method;
use actix_web::{guard, web, HttpRequest, HttpResponse, ResponseError, Route};
use serde_json::json;
use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthGate;

/// 라우트 테이블에서 사용하는 HTTP 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RouteMethod {
    pub fn as_http(&self) -> Method {
        match self {
            RouteMethod::Get => Method::GET,
            RouteMethod::Post => Method::POST,
            RouteMethod::Put => Method::PUT,
            RouteMethod::Delete => Method::DELETE,
        }
    }

    pub fn matches(&self, method: &Method) -> bool {
        self.as_http() == *method
    }
}

/// 라우트가 연결되는 핸들러
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Root,
    ListCategories,
    ListUnsoldProducts,
    ListProductsByCategory,
    ListProductsBySeller,
    PaymentProduct,
    AddProduct,
    DeleteProduct,
    AdvertiseProduct,
    ListUsers,
    RegisterUser,
    VerifyUser,
    DeleteUser,
    GetSeller,
    CheckAdmin,
    CheckSeller,
    CheckBuyer,
    ListWishlist,
    WishlistProduct,
    AddToWishlist,
    ListOrders,
    AddOrder,
    IssueJwt,
    CreatePaymentIntent,
    CompletePayment,
}

/// 라우트 테이블 항목
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub method: RouteMethod,
    /// actix 경로 패턴 (`{name}` 은 한 세그먼트를 캡처)
    pub pattern: &'static str,
    /// 인증 게이트 적용 여부
    pub protected: bool,
    pub endpoint: Endpoint,
}

const fn entry(method: RouteMethod, pattern: &'static str, protected: bool, endpoint: Endpoint) -> RouteEntry {
    RouteEntry { method, pattern, protected, endpoint }
}

use Endpoint::*;
use RouteMethod::{Delete, Get, Post, Put};

/// 순서가 있는 라우트 테이블 (위에서부터 첫 번째 일치)
pub static ROUTE_TABLE: &[RouteEntry] = &[
    entry(Get, "/", false, Root),
    entry(Get, "/categories", false, ListCategories),
    // products
    entry(Get, "/products/all", false, ListUnsoldProducts),
    entry(Get, "/products/{category}", false, ListProductsByCategory),
    entry(Get, "/products", false, ListProductsBySeller),
    entry(Get, "/payment/products/{id}", false, PaymentProduct),
    entry(Post, "/products/add", true, AddProduct),
    entry(Delete, "/products/{id}", true, DeleteProduct),
    entry(Put, "/advertise/{email}/{id}", false, AdvertiseProduct),
    // users
    entry(Get, "/users", false, ListUsers),
    entry(Post, "/users", true, RegisterUser),
    entry(Put, "/users/{id}", true, VerifyUser),
    entry(Delete, "/users/{id}", true, DeleteUser),
    entry(Get, "/seller/{email}", false, GetSeller),
    entry(Get, "/users/admin/{email}", false, CheckAdmin),
    entry(Get, "/users/sellers/{email}", false, CheckSeller),
    entry(Get, "/users/{email}", false, CheckBuyer),
    // wishlist / orders
    entry(Get, "/wishlist", false, ListWishlist),
    entry(Get, "/wishlist/products/{id}", false, WishlistProduct),
    entry(Post, "/wishlist/add", true, AddToWishlist),
    entry(Get, "/orders", false, ListOrders),
    entry(Post, "/orders/add", true, AddOrder),
    // auth / payments
    entry(Get, "/jwt", false, IssueJwt),
    entry(Post, "/create-payment-intent", true, CreatePaymentIntent),
    entry(Post, "/payment", true, CompletePayment),
];

fn handler_route(endpoint: Endpoint) -> Route {
    let route = web::route();
    match endpoint {
        Root => route.to(handlers::root::root),
        ListCategories => route.to(handlers::categories::list_categories),
        ListUnsoldProducts => route.to(handlers::products::list_unsold),
        ListProductsByCategory => route.to(handlers::products::list_by_category),
        ListProductsBySeller => route.to(handlers::products::list_by_seller),
        PaymentProduct => route.to(handlers::products::get_for_payment),
        AddProduct => route.to(handlers::products::add_product),
        DeleteProduct => route.to(handlers::products::delete_product),
        AdvertiseProduct => route.to(handlers::products::advertise),
        ListUsers => route.to(handlers::users::list_users),
        RegisterUser => route.to(handlers::users::register_user),
        VerifyUser => route.to(handlers::users::verify_user),
        DeleteUser => route.to(handlers::users::delete_user),
        GetSeller => route.to(handlers::users::get_seller),
        CheckAdmin => route.to(handlers::users::check_admin),
        CheckSeller => route.to(handlers::users::check_seller),
        CheckBuyer => route.to(handlers::users::check_buyer),
        ListWishlist => route.to(handlers::market::list_wishlist),
        WishlistProduct => route.to(handlers::market::wishlist_product),
        AddToWishlist => route.to(handlers::market::add_to_wishlist),
        ListOrders => route.to(handlers::market::list_orders),
        AddOrder => route.to(handlers::market::add_order),
        IssueJwt => route.to(handlers::auth::issue_jwt),
        CreatePaymentIntent => route.to(handlers::payments::create_payment_intent),
        CompletePayment => route.to(handlers::payments::complete_payment),
    }
}

/// 모든 라우트를 설정합니다
///
/// [`ROUTE_TABLE`] 순서대로 메서드 가드가 붙은 리소스를 등록하고,
/// 추출기 오류를 JSON 400 응답으로 바꾸는 설정과 기본 서비스를 추가합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));

    for route in ROUTE_TABLE {
        let resource = web::resource(route.pattern)
            .guard(guard::Method(route.method.as_http()))
            .route(handler_route(route.endpoint));

        if route.protected {
            cfg.service(resource.wrap(AuthGate::required()));
        } else {
            cfg.service(resource);
        }
    }

    cfg.default_service(web::to(unmatched));
}

/// 경로 해석 결과
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    Matched(&'static RouteEntry),
    /// 경로는 일치하지만 메서드가 다름
    MethodNotAllowed,
    NotFound,
}

fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn pattern_matches(pattern: &str, path: &[&str]) -> bool {
    let pattern = segments(pattern);
    pattern.len() == path.len()
        && pattern.iter().zip(path).all(|(expected, actual)| {
            (expected.starts_with('{') && expected.ends_with('}')) || expected == actual
        })
}

/// (메서드, 경로) 를 라우트 테이블에서 첫 번째로 일치하는 항목으로 해석합니다.
///
/// actix 라우터와 같은 규칙(등록 순서, 메서드 가드, 세그먼트 단위 캡처)을 따릅니다.
pub fn resolve(method: &Method, path: &str) -> Resolution {
    let path = segments(path);
    let mut path_matched = false;

    for route in ROUTE_TABLE {
        if !pattern_matches(route.pattern, &path) {
            continue;
        }
        if route.method.matches(method) {
            return Resolution::Matched(route);
        }
        path_matched = true;
    }

    if path_matched {
        Resolution::MethodNotAllowed
    } else {
        Resolution::NotFound
    }
}

async fn unmatched(req: HttpRequest) -> HttpResponse {
    match resolve(req.method(), req.path()) {
        Resolution::MethodNotAllowed => HttpResponse::MethodNotAllowed().json(json!({
            "error": "method_not_allowed",
            "message": format!("{} {} 는 지원하지 않는 메서드입니다", req.method(), req.path()),
        })),
        _ => AppError::NotFound(format!("{} {}", req.method(), req.path())).error_response(),
    }
}
