use crate::services::store::SharedStore;
use warp::Filter;

pub mod page;
pub mod recommendations;

pub fn global_handler(
    store: SharedStore,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    page::page_handler(store.clone()).or(recommendations::channel_handler(store))
}

fn with_store(
    store: SharedStore,
) -> impl warp::Filter<Extract = (SharedStore,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || store.clone())
}
