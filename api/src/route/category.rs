use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::category::{
    delete_category, register_category, show_category, show_category_list,
};

pub fn build_category_routers() -> Router<AppRegistry> {
    let category_routers = Router::new()
        .route("/", post(register_category))
        .route("/", get(show_category_list))
        .route("/:category_id", get(show_category))
        .route("/:category_id", delete(delete_category));

    Router::new().nest("/categories", category_routers)
}
