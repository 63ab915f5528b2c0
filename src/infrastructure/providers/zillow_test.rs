use anyhow::Result;

use super::Zillow;
use super::ZillowProperty;

impl Zillow {
    fn with_url(url: String) -> Zillow {
        return Zillow {
            url,
            api_key: "abc".to_string(),
        };
    }
}

#[tokio::test]
async fn it_fetches_property_details() -> Result<()> {
    let body = r#"{
        "streetViewMetadataUrlMapLightboxAddress": "https://maps.example.com/metadata?pano=abc",
        "originalPhotos": [
            {"mixedSources": {"jpeg": [{"url": "https://photos.example.com/1-full.jpg"}, {"url": "https://photos.example.com/1-small.jpg"}]}},
            {"mixedSources": {"jpeg": [{"url": "https://photos.example.com/2-full.jpg"}]}},
            {"mixedSources": {"jpeg": []}}
        ]
    }"#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/property")
        .match_query(mockito::Matcher::UrlEncoded(
            "address".to_string(),
            "9564 Cotton Rd Florence AZ 85132".to_string(),
        ))
        .match_header("X-RapidAPI-Key", "abc")
        .with_status(200)
        .with_body(body)
        .create();

    let provider = Zillow::with_url(server.url());
    let property = provider.property("9564 Cotton Rd Florence AZ 85132").await?;
    mock.assert();

    assert_eq!(
        property.street_view_metadata_url,
        Some("https://maps.example.com/metadata?pano=abc".to_string())
    );
    assert_eq!(
        property.photo_urls(),
        vec![
            "https://photos.example.com/1-full.jpg".to_string(),
            "https://photos.example.com/2-full.jpg".to_string(),
        ]
    );

    return Ok(());
}

#[tokio::test]
async fn it_tolerates_missing_photo_arrays() -> Result<()> {
    let property: ZillowProperty = serde_json::from_str("{}")?;

    assert_eq!(property.street_view_metadata_url, None);
    assert!(property.photo_urls().is_empty());

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_provider_errors() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/property")
        .match_query(mockito::Matcher::Any)
        .with_status(403)
        .create();

    let provider = Zillow::with_url(server.url());
    let res = provider.property("anywhere").await;

    assert!(res.is_err());
    mock.assert();
}
