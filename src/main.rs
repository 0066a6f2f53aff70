#[cfg(all(target_os = "linux", target_env = "musl"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod config;
pub mod crawler;
pub mod declare;
pub mod logging;
pub mod server;
pub mod util;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    util::ensure_rustls_crypto_provider();

    logging::info_file_async(format!(
        "quote_scraper 啟動，上游 {}",
        config::SETTINGS.upstream.base_url
    ));

    if let Err(why) = server::start().await {
        logging::error_file_async(format!("Failed to start HTTP server because {:?}", why));
        logging::error_console(format!("HTTP 服務無法啟動: {}", why));
        return Err(why);
    }

    Ok(())
}
