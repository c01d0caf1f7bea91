//! Browser side effects via `web-sys`.
use alloc::string::ToString;

use crate::{HostError, ImagePrefetcher, LinkOpener};

/// Prefetches by creating a detached `<img>` and setting its `src`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebImagePrefetcher;

impl ImagePrefetcher for WebImagePrefetcher {
    fn prefetch(&mut self, url: &str) -> Result<(), HostError> {
        let img = web_sys::HtmlImageElement::new().map_err(|_| HostError::Prefetch {
            url: url.to_string(),
        })?;
        img.set_src(url);
        Ok(())
    }
}

/// Opens links with `window.open(url, "_blank")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebLinkOpener;

impl LinkOpener for WebLinkOpener {
    fn open_in_new_context(&mut self, url: &str) -> Result<(), HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        window
            .open_with_url_and_target(url, "_blank")
            .map_err(|_| HostError::OpenLink {
                url: url.to_string(),
            })?;
        Ok(())
    }
}
