use std::sync::Arc;

use food_client::{FoodSearchResponse, FoodSource, Pagination, UsdaClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn usda_client_behind_trait_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fdc/v1/foods/search"))
        .and(header("content-type", "application/json"))
        .and(query_param("api_key", "DEMO_KEY"))
        .and(query_param("query", "greek yogurt"))
        .and(query_param("pageSize", "25"))
        .and(query_param("pageNumber", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalHits": 1,
            "currentPage": 1,
            "totalPages": 1,
            "foods": [{
                "fdcId": 2259793,
                "description": "Yogurt, Greek, plain, nonfat",
                "dataType": "Foundation",
                "publicationDate": "2022-10-28",
                "foodCategory": "Dairy and Egg Products"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source: Arc<dyn FoodSource> = Arc::new(UsdaClient::new(
        format!("{}/fdc/v1/", server.uri()),
        "DEMO_KEY",
    ));

    let body = source
        .search_foods("greek yogurt".into(), Pagination::default())
        .await
        .unwrap();
    let response: FoodSearchResponse = serde_json::from_value(body).unwrap();

    assert_eq!(response.total_pages, Some(1));
    assert_eq!(response.foods[0].fdc_id, 2259793);
    assert_eq!(
        response.foods[0].publication_date.as_deref(),
        Some("2022-10-28")
    );
}

#[tokio::test]
async fn list_through_trait_object_keeps_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/list"))
        .and(query_param("pageSize", "200"))
        .and(query_param("pageNumber", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let source: Arc<dyn FoodSource> = Arc::new(UsdaClient::new(server.uri(), "DEMO_KEY"));
    let pagination = Pagination {
        page_size: Some("200".into()),
        page_number: None,
    };

    let body = source.list_foods(pagination).await.unwrap();
    assert_eq!(body, json!([]));
}
