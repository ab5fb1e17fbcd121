//! `HttpCatalogApi` against the real catalog router on a loopback port.

use catalog_client::{CatalogApi, ClientError, HttpCatalogApi};
use domain_catalog::{
    CatalogService, CreateItem, InMemoryCatalogRepository, ListQuery, SortOrder, handlers,
};
use tokio::net::TcpListener;

async fn spawn_server() -> HttpCatalogApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let service = CatalogService::new(InMemoryCatalogRepository::seeded(600));
    let router = handlers::router(service);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    HttpCatalogApi::new(&format!("http://{addr}")).unwrap()
}

fn quick_item(price: f64) -> CreateItem {
    CreateItem {
        name: "New Item 1700000000000".into(),
        description: "Created from the UI for demo purposes.".into(),
        price,
        image: "https://picsum.photos/seed/ui-created/400/250".into(),
        image_alt: None,
        image_tags: Some(vec!["demo".into(), "new".into()]),
    }
}

#[tokio::test]
async fn test_fetch_page_sends_query_parameters() {
    let api = spawn_server().await;

    let page = api
        .fetch_page(&ListQuery::new("nature", 100, 20, SortOrder::Desc))
        .await
        .unwrap();

    assert_eq!(page.total, 120);
    assert_eq!(page.items.len(), 20);
    assert_eq!(page.next_offset, None);
    assert!(!page.has_more);
    assert!(page.items.windows(2).all(|w| w[0].price >= w[1].price));
}

#[tokio::test]
async fn test_create_then_get() {
    let api = spawn_server().await;

    let created = api.create_item(&quick_item(12.345)).await.unwrap();
    assert_eq!(created.id, "601");
    assert_eq!(created.price, 12.35);

    let fetched = api.get_item("601").await.unwrap();
    assert_eq!(fetched, created);

    let first = api.fetch_page(&ListQuery::default()).await.unwrap();
    assert_eq!(first.items[0], created);
}

#[tokio::test]
async fn test_server_errors_carry_status_and_message() {
    let api = spawn_server().await;

    let missing = api.get_item("nope").await.unwrap_err();
    assert_eq!(missing.status(), Some(404));
    assert!(matches!(missing, ClientError::Api { ref message, .. } if message == "Not found"));

    let rejected = api.create_item(&quick_item(-1.0)).await.unwrap_err();
    assert_eq!(rejected.status(), Some(400));
}

#[tokio::test]
async fn test_get_item_sends_id_as_one_segment() {
    let api = spawn_server().await;

    // unescaped, this would fetch item 1
    let err = api.get_item("1?x").await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    let err = api.get_item("1/2").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpCatalogApi::new(&format!("http://{addr}")).unwrap();
    let err = api.fetch_page(&ListQuery::default()).await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
}
