use std::sync::Once;

pub mod http;
pub mod map;
pub mod text;

static RUSTLS_PROVIDER: Once = Once::new();

/// reqwest 以 `rustls-no-provider` 編譯，使用前需先安裝 ring 作為加密提供者
pub fn ensure_rustls_crypto_provider() {
    RUSTLS_PROVIDER.call_once(|| {
        // 其他元件可能已先安裝，忽略重複安裝的錯誤
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}
