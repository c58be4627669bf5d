use crate::net::HttpClient;
use crate::outcome::Outcome;

// Loads an URL. Whatever goes wrong comes back as the failure message, never as an error
pub async fn load_url<C: HttpClient>(client: &C, url: &str) -> Outcome {
    match client.get(url).await {
        Ok(response) => Outcome::Success(response),
        Err(e) => Outcome::Failure(e.message()),
    }
}
