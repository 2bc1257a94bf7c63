use crate::error::ConfigError;

pub const DEFAULT_UPLOAD_URL: &str = "https://sleep.projectswhynot.site/upload";

const UPLOAD_URL_VAR: &str = "UPLOAD_URL";

pub fn validate_endpoint(value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(value.to_string())
    } else {
        Err(ConfigError::InvalidUrl {
            name: UPLOAD_URL_VAR,
            value: value.to_string(),
        })
    }
}

fn configured_endpoint() -> Option<String> {
    // The browser has no process environment, so wasm builds bake it in.
    #[cfg(target_arch = "wasm32")]
    {
        option_env!("UPLOAD_URL").map(str::to_string)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var(UPLOAD_URL_VAR).ok()
    }
}

pub fn get_upload_endpoint() -> String {
    resolve_endpoint(configured_endpoint())
}

pub(crate) fn resolve_endpoint(configured: Option<String>) -> String {
    let Some(raw) = configured else {
        log::warn!("{} not set, using default upload endpoint", UPLOAD_URL_VAR);
        return DEFAULT_UPLOAD_URL.to_string();
    };
    match validate_endpoint(&raw) {
        Ok(url) => {
            log::info!("Using upload endpoint: {}", url);
            url
        }
        Err(e) => {
            log::warn!("{}, falling back to default", e);
            DEFAULT_UPLOAD_URL.to_string()
        }
    }
}
