use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin, auth, cart, catalog, comment, company, course, media, order, subscription, wallet,
        wishlist,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        catalog::get_catalog,
        catalog::get_course_detail,
        course::create_course,
        course::get_own_courses,
        course::get_own_course_detail,
        course::update_course,
        course::delete_course,
        course::publish_course,
        course::unpublish_course,
        cart::add_to_cart,
        cart::get_cart,
        cart::remove_from_cart,
        cart::clear_cart,
        wishlist::toggle_wishlist,
        wishlist::get_wishlist,
        wallet::get_wallet,
        wallet::get_transactions,
        order::place_order,
        order::get_orders,
        order::get_owned_courses,
        order::get_dashboard,
        comment::get_comments,
        comment::create_comment,
        comment::toggle_like,
        comment::toggle_dislike,
        comment::delete_comment,
        company::create_employee,
        company::get_employees,
        company::get_employee_detail,
        company::update_employee,
        company::delete_employee,
        company::start_purchase,
        company::get_purchases,
        company::confirm_purchase,
        company::get_assignments,
        company::assign_seat,
        company::release_seat,
        subscription::get_plans,
        subscription::create_plan,
        subscription::update_plan,
        subscription::delete_plan,
        subscription::subscribe,
        subscription::get_subscription,
        admin::get_users,
        admin::block_user,
        admin::unblock_user,
        admin::credit_wallet,
        admin::get_stats,
    ),
    tags(
        (name = "catalog", description = "Public course catalog"),
        (name = "course", description = "Teacher course management"),
        (name = "cart", description = "Shopping cart"),
        (name = "wishlist", description = "Student wishlist"),
        (name = "wallet", description = "Wallet balance and history"),
        (name = "order", description = "Orders and the student dashboard"),
        (name = "comment", description = "Course discussion threads"),
        (name = "company", description = "Employee rosters and seat licenses"),
        (name = "subscription", description = "Subscription plans"),
        (name = "admin", description = "Platform administration"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        // auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        // public catalog and discussion
        .route("/api/courses", get(catalog::get_catalog))
        .route("/api/courses/{course_id}", get(catalog::get_course_detail))
        .route(
            "/api/courses/{course_id}/comments",
            get(comment::get_comments).post(comment::create_comment),
        )
        .route("/api/comments/{comment_id}", delete(comment::delete_comment))
        .route("/api/comments/{comment_id}/like", post(comment::toggle_like))
        .route(
            "/api/comments/{comment_id}/dislike",
            post(comment::toggle_dislike),
        )
        .route("/api/plans", get(subscription::get_plans))
        // any authenticated user
        .route(
            "/api/cart",
            get(cart::get_cart).post(cart::add_to_cart).delete(cart::clear_cart),
        )
        .route("/api/cart/{course_id}", delete(cart::remove_from_cart))
        .route("/api/wallet", get(wallet::get_wallet))
        .route("/api/wallet/transactions", get(wallet::get_transactions))
        .route("/api/media/signature", post(media::sign_upload))
        // student
        .route("/api/student/wishlist", get(wishlist::get_wishlist))
        .route(
            "/api/student/wishlist/{course_id}",
            post(wishlist::toggle_wishlist),
        )
        .route(
            "/api/student/orders",
            get(order::get_orders).post(order::place_order),
        )
        .route("/api/student/courses", get(order::get_owned_courses))
        .route("/api/student/dashboard", get(order::get_dashboard))
        .route(
            "/api/student/subscription",
            get(subscription::get_subscription),
        )
        .route(
            "/api/student/subscription/{plan_id}",
            post(subscription::subscribe),
        )
        // teacher
        .route(
            "/api/teacher/courses",
            get(course::get_own_courses).post(course::create_course),
        )
        .route(
            "/api/teacher/courses/{course_id}",
            get(course::get_own_course_detail)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route(
            "/api/teacher/courses/{course_id}/publish",
            post(course::publish_course),
        )
        .route(
            "/api/teacher/courses/{course_id}/unpublish",
            post(course::unpublish_course),
        )
        .route(
            "/api/teacher/courses/{course_id}/modules",
            post(course::create_module),
        )
        .route(
            "/api/teacher/modules/{module_id}",
            put(course::update_module).delete(course::delete_module),
        )
        .route(
            "/api/teacher/modules/{module_id}/lessons",
            post(course::create_lesson),
        )
        .route(
            "/api/teacher/lessons/{lesson_id}",
            put(course::update_lesson).delete(course::delete_lesson),
        )
        // company
        .route(
            "/api/company/employees",
            get(company::get_employees).post(company::create_employee),
        )
        .route(
            "/api/company/employees/{employee_id}",
            get(company::get_employee_detail)
                .put(company::update_employee)
                .delete(company::delete_employee),
        )
        .route(
            "/api/company/purchases",
            get(company::get_purchases).post(company::start_purchase),
        )
        .route(
            "/api/company/purchases/{purchase_id}/confirm",
            post(company::confirm_purchase),
        )
        .route(
            "/api/company/purchases/{purchase_id}/assignments",
            get(company::get_assignments).post(company::assign_seat),
        )
        .route(
            "/api/company/purchases/{purchase_id}/assignments/{employee_id}",
            delete(company::release_seat),
        )
        // admin
        .route("/api/admin/users", get(admin::get_users))
        .route("/api/admin/users/{user_id}/block", post(admin::block_user))
        .route(
            "/api/admin/users/{user_id}/unblock",
            post(admin::unblock_user),
        )
        .route(
            "/api/admin/users/{user_id}/wallet/credit",
            post(admin::credit_wallet),
        )
        .route("/api/admin/stats", get(admin::get_stats))
        .route("/api/admin/plans", post(subscription::create_plan))
        .route(
            "/api/admin/plans/{plan_id}",
            put(subscription::update_plan).delete(subscription::delete_plan),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
