#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const SCORECARD_HTML: &str = r#"<html><body>
<h1>Baaninformatie</h1>
<table>
  <tr><th>Hole</th><th>1</th><th>2</th><th>3</th></tr>
  <tr><td>Par</td><td>4</td><td>5</td><td>3</td></tr>
</table>
</body></html>"#;

pub const TOTAL_ONLY_HTML: &str = r#"<html><body>
<table>
  <tr><td>Tees</td><td>Par 72</td></tr>
</table>
</body></html>"#;

pub const ONE_HOLE_HTML: &str = r#"<html><body>
<table>
  <tr><td>Par</td><td>4</td></tr>
</table>
</body></html>"#;

pub fn html_response(body: &str) -> String {
    format!("HTTP/1.1 200 OK\r\ncontent-type: text/html\r\nconnection: close\r\n\r\n{body}")
}

pub fn not_found_response() -> String {
    "HTTP/1.1 404 Not Found\r\ncontent-type: text/plain\r\nconnection: close\r\n\r\nniet gevonden"
        .to_string()
}

/// Serves exactly one canned HTTP response on a random local port and
/// returns the URL pointing at it.
pub async fn serve_once(response: String) -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    Ok(format!("http://{addr}/"))
}

/// Binds and immediately drops a listener, yielding a local URL that
/// refuses connections.
pub async fn unreachable_url() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/"))
}
