//! The recommendation lookup channel served on `/ws`.
//!
//! Every text frame is taken as a product name and answered with one text
//! frame holding the JSON array of related products (`[]` on a miss). The
//! loop only ends when the client goes away.

use super::with_store;
use crate::services::store::SharedStore;
use futures::{SinkExt, StreamExt};
use warp::ws::{Message, WebSocket, Ws};
use warp::Filter;

pub fn channel_handler(
    store: SharedStore,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path("ws")
        .and(warp::path::end())
        .and(warp::ws())
        .and(with_store(store))
        .map(|ws: Ws, store: SharedStore| {
            ws.on_upgrade(move |socket| handle_channel(socket, store))
        })
}

async fn handle_channel(socket: WebSocket, store: SharedStore) {
    log::info!("Recommendation channel opened");
    let (mut tx, mut rx) = socket.split();

    while let Some(result) = rx.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                log::warn!("Recommendation channel error: {}", e);
                break;
            }
        };

        let reply = match reply_for(&message, &store) {
            Some(reply) => reply,
            None if message.is_close() => break,
            None => continue,
        };

        if let Err(e) = tx.send(Message::text(reply)).await {
            log::warn!("Failed to send recommendations: {}", e);
            break;
        }
    }

    log::info!("Recommendation channel closed");
}

/// The reply owed for one inbound frame, if any.
///
/// Binary payloads can never equal a product name, so they get `[]`.
/// Control frames get nothing.
fn reply_for(message: &Message, store: &SharedStore) -> Option<String> {
    if let Ok(product_name) = message.to_str() {
        log::debug!("Received request for recommendations for: {}", product_name);
        Some(store.recommend_json(product_name))
    } else if message.is_binary() {
        log::debug!("Received binary frame of {} bytes", message.as_bytes().len());
        Some("[]".to_string())
    } else {
        None
    }
}
