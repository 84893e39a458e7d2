use reqwest::Client;

/// # Errors
///
/// Will return `Err` if the request cannot be sent or the body cannot be read
pub async fn fetch_page(url: &str) -> Result<(u16, String), reqwest::Error> {
    let client = Client::new();
    let resp = client.get(url).send().await?;
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    Ok((status, body))
}
