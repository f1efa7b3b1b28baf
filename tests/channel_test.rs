use product_recommender::handlers::global_handler;
use product_recommender::models::catalog::{ProductStore, RecommendationTable};
use product_recommender::services::store::{build_store, default_store, SharedStore};
use std::sync::Arc;
use tokio_test::assert_ok;
use warp::test::WsClient;

async fn connect(store: SharedStore) -> WsClient {
    assert_ok!(
        warp::test::ws()
            .path("/ws")
            .handshake(global_handler(store))
            .await
    )
}

async fn ask(client: &mut WsClient, product_name: &str) -> String {
    client.send_text(product_name).await;
    let reply = assert_ok!(client.recv().await);
    assert_ok!(reply.to_str()).to_string()
}

#[tokio::test]
async fn every_key_yields_its_list_in_order() {
    let store = build_store(None).unwrap();
    let mut client = connect(store.clone()).await;

    for (product, related) in store.recommendations() {
        let reply = ask(&mut client, product).await;
        let decoded: Vec<String> = serde_json::from_str(&reply).unwrap();
        assert_eq!(&decoded, related, "recommendations for {}", product);
    }
}

#[tokio::test]
async fn known_and_unknown_products() {
    let mut client = connect(build_store(None).unwrap()).await;

    assert_eq!(ask(&mut client, "Product C").await, r#"["Product A","Product E"]"#);
    assert_eq!(ask(&mut client, "Product Z").await, "[]");
}

#[tokio::test]
async fn empty_string_yields_empty_list() {
    let mut client = connect(build_store(None).unwrap()).await;

    assert_eq!(ask(&mut client, "").await, "[]");
}

#[tokio::test]
async fn lookup_is_exact_match() {
    let mut client = connect(build_store(None).unwrap()).await;

    assert_eq!(ask(&mut client, "product a").await, "[]");
    assert_eq!(ask(&mut client, " Product A").await, "[]");
    assert_eq!(ask(&mut client, "Product A\n").await, "[]");
}

#[tokio::test]
async fn repeated_sends_are_independent() {
    let mut client = connect(build_store(None).unwrap()).await;

    assert_eq!(ask(&mut client, "Product A").await, r#"["Product B","Product C"]"#);
    assert_eq!(ask(&mut client, "Product B").await, r#"["Product A","Product D"]"#);
    assert_eq!(ask(&mut client, "Product Z").await, "[]");
    assert_eq!(ask(&mut client, "Product A").await, r#"["Product B","Product C"]"#);
}

#[tokio::test]
async fn binary_frame_yields_empty_list() {
    let mut client = connect(build_store(None).unwrap()).await;

    client
        .send(warp::ws::Message::binary(b"Product A".to_vec()))
        .await;
    let reply = assert_ok!(client.recv().await);
    assert_eq!(assert_ok!(reply.to_str()), "[]");

    // The channel stays usable afterwards
    assert_eq!(ask(&mut client, "Product E").await, r#"["Product C","Product D"]"#);
}

#[tokio::test]
async fn connections_do_not_share_state() {
    let store = build_store(None).unwrap();
    let mut first = connect(store.clone()).await;
    let mut second = connect(store).await;

    assert_eq!(ask(&mut first, "Product D").await, r#"["Product B","Product E"]"#);
    assert_eq!(ask(&mut second, "Product A").await, r#"["Product B","Product C"]"#);
    assert_eq!(ask(&mut first, "Product E").await, r#"["Product C","Product D"]"#);
}

#[tokio::test]
async fn table_is_served_verbatim() {
    let mut table = RecommendationTable::new();
    table.insert(
        "Lamp".to_string(),
        vec!["Bulb".to_string(), "Not In Catalog".to_string()],
    );
    let store = Arc::new(ProductStore::new(vec!["Lamp".to_string()], table));
    let mut client = connect(store).await;

    assert_eq!(ask(&mut client, "Lamp").await, r#"["Bulb","Not In Catalog"]"#);
    assert_eq!(ask(&mut client, "Bulb").await, "[]");
}

#[tokio::test]
async fn plain_get_on_channel_is_rejected() {
    let response = warp::test::request()
        .method("GET")
        .path("/ws")
        .reply(&global_handler(Arc::new(default_store())))
        .await;

    assert!(response.status().is_client_error());
}
