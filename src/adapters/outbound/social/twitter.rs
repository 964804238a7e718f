use crate::adapters::outbound::social::oauth::authorization_header;
use crate::domain::credentials::Credentials;
use crate::ports::outbound::social::{MediaId, PlatformError, SocialPlatform};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

const MEDIA_UPLOAD_URL: &str = "https://upload.twitter.com/1.1/media/upload.json";
const TWEETS_URL: &str = "https://api.twitter.com/2/tweets";

#[derive(Debug, Deserialize)]
struct UploadedMedia {
    media_id_string: String,
}

#[derive(Debug, Serialize)]
struct NewTweet<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<TweetMedia<'a>>,
}

#[derive(Debug, Serialize)]
struct TweetMedia<'a> {
    media_ids: Vec<&'a str>,
}

impl<'a> NewTweet<'a> {
    fn new(text: &'a str, media: &'a [MediaId]) -> Self {
        let media = (!media.is_empty()).then(|| TweetMedia {
            media_ids: media.iter().map(|id| id.0.as_str()).collect(),
        });
        Self { text, media }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedTweet {
    data: CreatedTweetData,
}

#[derive(Debug, Deserialize)]
struct CreatedTweetData {
    id: String,
}

pub struct Twitter {
    http_client: reqwest::Client,
}

impl Twitter {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

async fn read_success(response: reqwest::Response, action: &str) -> Result<String, PlatformError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|why| PlatformError::new(format!("{action} response unreadable: {why}")))?;

    if !status.is_success() {
        return Err(PlatformError::new(format!("{action} returned {status}: {body}")));
    }
    Ok(body)
}

#[async_trait]
impl SocialPlatform for Twitter {
    async fn upload_media(
        &self,
        credentials: &Credentials,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<MediaId, PlatformError> {
        let header = authorization_header(credentials, "POST", MEDIA_UPLOAD_URL, &[])?;
        let form = Form::new().part("media", Part::bytes(image).file_name(filename.to_string()));

        let response = self
            .http_client
            .post(MEDIA_UPLOAD_URL)
            .header(AUTHORIZATION, header)
            .multipart(form)
            .send()
            .await
            .map_err(|why| PlatformError::new(format!("Media upload failed: {why}")))?;

        let body = read_success(response, "Media upload").await?;
        let uploaded: UploadedMedia = serde_json::from_str(&body)
            .map_err(|why| PlatformError::new(format!("Unexpected media upload reply: {why}")))?;

        log::info!("Uploaded {filename} as media {}", uploaded.media_id_string);
        Ok(MediaId(uploaded.media_id_string))
    }

    async fn post(
        &self,
        credentials: &Credentials,
        text: &str,
        media: &[MediaId],
    ) -> Result<String, PlatformError> {
        let header = authorization_header(credentials, "POST", TWEETS_URL, &[])?;

        let response = self
            .http_client
            .post(TWEETS_URL)
            .header(AUTHORIZATION, header)
            .json(&NewTweet::new(text, media))
            .send()
            .await
            .map_err(|why| PlatformError::new(format!("Tweet failed: {why}")))?;

        let body = read_success(response, "Tweet").await?;
        let created: CreatedTweet = serde_json::from_str(&body)
            .map_err(|why| PlatformError::new(format!("Unexpected tweet reply: {why}")))?;

        Ok(created.data.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tweet_body_with_media() {
        let media = vec![MediaId(String::from("710511363345354753"))];
        let body = serde_json::to_value(NewTweet::new("Card name:  Island", &media)).unwrap();

        assert_eq!(
            body,
            json!({
                "text": "Card name:  Island",
                "media": {"media_ids": ["710511363345354753"]}
            })
        );
    }

    #[test]
    fn test_tweet_body_without_media() {
        let body = serde_json::to_value(NewTweet::new("hello", &[])).unwrap();
        assert_eq!(body, json!({"text": "hello"}));
    }

    #[test]
    fn test_parse_upload_reply() {
        let reply = r#"{
            "media_id": 710511363345354753,
            "media_id_string": "710511363345354753",
            "size": 11065,
            "expires_after_secs": 86400,
            "image": {"image_type": "image/png", "w": 800, "h": 320}
        }"#;

        let uploaded: UploadedMedia = serde_json::from_str(reply).unwrap();
        assert_eq!(uploaded.media_id_string, "710511363345354753");
    }

    #[test]
    fn test_parse_tweet_reply() {
        let reply = r#"{"data": {"id": "1445880548472328192", "text": "Hello world!"}}"#;

        let created: CreatedTweet = serde_json::from_str(reply).unwrap();
        assert_eq!(created.data.id, "1445880548472328192");
    }
}
