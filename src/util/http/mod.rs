use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use once_cell::sync::{Lazy, OnceCell};
use reqwest::{header, Client, Method, Response};

use crate::{config::Upstream, logging::Logger, util};

pub mod element;
pub mod user_agent;

/// A singleton instance of the reqwest client.
static CLIENT: OnceCell<Client> = OnceCell::new();

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("http"));

/// Builds a reqwest client for the given upstream settings.
///
/// One attempt per request, no retry; the connect and total timeouts are the only
/// deadlines applied to an outbound fetch.
pub fn build_client(upstream: &Upstream) -> Result<Client> {
    util::ensure_rustls_crypto_provider();

    let mut builder = Client::builder()
        // ===== 壓縮 =====
        .brotli(true)
        .deflate(true)
        .gzip(true)
        .zstd(true)
        // ===== 超時設置 =====
        .connect_timeout(Duration::from_secs(upstream.connect_timeout_secs))
        .timeout(Duration::from_secs(upstream.timeout_secs))
        // ===== TCP 優化 =====
        .tcp_nodelay(true)
        .tcp_keepalive(Duration::from_secs(60))
        // ===== 連接池 =====
        .pool_max_idle_per_host(20)
        .pool_idle_timeout(Duration::from_secs(90))
        // ===== Cookie 和重定向 =====
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::limited(5))
        // ===== Headers =====
        .referer(true)
        .user_agent(user_agent::gen_random_ua());

    if !upstream.use_system_proxy {
        builder = builder.no_proxy();
    }

    builder
        .build()
        .map_err(|e| anyhow!("Failed to create reqwest client: {:?}", e))
}

/// Returns the reqwest client singleton instance or creates one if it doesn't exist.
///
/// # Returns
///
/// * Result<&'static Client>: A reference to the reqwest client instance,
///   or an error if the client cannot be created.
pub fn get_client(upstream: &Upstream) -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| build_client(upstream))
}

/// Performs an HTTP GET request and returns the response as text.
///
/// Non-2xx statuses are reported as errors.
///
/// # Arguments
///
/// * `client`: The client to send the request with.
/// * `url`: The URL to send the GET request to.
/// * `headers`: An optional set of headers to include with the request.
///
/// # Returns
///
/// * `Result<String>`: The response text, or an error if the request fails or the response cannot be read.
pub async fn get(client: &Client, url: &str, headers: Option<header::HeaderMap>) -> Result<String> {
    get_response(client, url, headers)
        .await?
        .text()
        .await
        .map_err(|e| anyhow!("Error parsing response text: {}", e))
}

pub async fn get_response(
    client: &Client,
    url: &str,
    headers: Option<header::HeaderMap>,
) -> Result<Response> {
    send(client, Method::GET, url, headers).await
}

/// Sends a single HTTP request and rejects non-success statuses.
///
/// The elapsed time of every attempt is written to the `http` log.
async fn send(
    client: &Client,
    method: Method,
    url: &str,
    headers: Option<header::HeaderMap>,
) -> Result<Response> {
    let visit_log = format!("{method}:{url}");
    let mut rb = client.request(method, url);

    if let Some(h) = headers {
        rb = rb.headers(h);
    }

    let start = Instant::now();
    let res = rb.send().await;
    let elapsed = start.elapsed().as_millis();

    match res {
        Ok(response) => {
            let status = response.status();
            LOGGER.info(format!("{} {} {} ms", visit_log, status, elapsed));
            if !status.is_success() {
                return Err(anyhow!("Request failed with status code {}", status.as_u16()));
            }

            Ok(response)
        }
        Err(why) => {
            LOGGER.error(format!("{} failed because {:?}. {} ms", visit_log, why, elapsed));
            Err(anyhow!("{}", why))
        }
    }
}
