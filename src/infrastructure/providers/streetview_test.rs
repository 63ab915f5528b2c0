use anyhow::Result;

use super::StreetView;

impl StreetView {
    fn with_url(url: String) -> StreetView {
        return StreetView {
            url,
            api_key: "abc".to_string(),
        };
    }
}

#[tokio::test]
async fn it_fetches_street_view_images() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/maps/api/streetview")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("location".to_string(), "33.097433,-111.463253".to_string()),
            mockito::Matcher::UrlEncoded("heading".to_string(), "0".to_string()),
            mockito::Matcher::UrlEncoded("pitch".to_string(), "0".to_string()),
            mockito::Matcher::UrlEncoded("key".to_string(), "abc".to_string()),
        ]))
        .with_status(200)
        .with_body(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .create();

    let provider = StreetView::with_url(server.url());
    let bytes = provider.image(33.097433, -111.463253).await?;
    mock.assert();

    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_maps_errors() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/maps/api/streetview")
        .match_query(mockito::Matcher::Any)
        .with_status(400)
        .create();

    let provider = StreetView::with_url(server.url());
    let res = provider.image(0.0, 0.0).await;

    assert!(res.is_err());
    mock.assert();
}
