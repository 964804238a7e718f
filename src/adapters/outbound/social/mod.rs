mod oauth;
mod twitter;

use crate::adapters::outbound::social::twitter::Twitter;
use crate::ports::outbound::social::SocialPlatform;

#[must_use]
pub fn init_social_platform(http_client: reqwest::Client) -> impl SocialPlatform {
    Twitter::new(http_client)
}
