use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::logout,
        record,
        user::{current_user, get_all_users},
    },
    model::{
        article::Articles, help_request::HelpRequests, menu_item_review::MenuItemReviews,
        recommendation_request::RecommendationRequests,
        ucsb_dining_commons_menu_item::UcsbDiningCommonsMenuItems,
        ucsb_organization::UcsbOrganizations, resource::Resource,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/logout", get(logout))
        .route("/api/currentUser", get(current_user))
        .route("/api/admin/users", get(get_all_users))
        .merge(resource_routes::<Articles>())
        .merge(resource_routes::<HelpRequests>())
        .merge(resource_routes::<MenuItemReviews>())
        .merge(resource_routes::<RecommendationRequests>())
        .merge(resource_routes::<UcsbOrganizations>())
        .merge(resource_routes::<UcsbDiningCommonsMenuItems>())
}

/// Mounts the five operations of `R` under `/api/{R::PATH}`.
fn resource_routes<R: Resource>() -> Router<AppState> {
    let base = format!("/api/{}", R::PATH);

    Router::new()
        .route(&format!("{}/all", base), get(record::list::<R>))
        .route(&format!("{}/post", base), post(record::create::<R>))
        .route(
            &base,
            get(record::get::<R>)
                .put(record::update::<R>)
                .delete(record::delete::<R>),
        )
}
