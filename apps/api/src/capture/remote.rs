//! Remote image prefetch.
//!
//! The SVG parser only reads `data:` URIs and local files, so `http(s)` image
//! hrefs in a layout are downloaded before painting and handed to the parser
//! through its href resolver. A fetch that fails leaves the href unresolved,
//! and the parser then drops that image.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use usvg::{ImageHrefResolver, ImageKind, Options};

use crate::render::{Element, RenderedLayout};

/// Upper bound for a single image download.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloaded image bytes keyed by their original href.
#[derive(Debug, Clone, Default)]
pub struct RemoteImages {
    images: HashMap<String, Arc<Vec<u8>>>,
}

impl RemoteImages {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// An href resolver that serves prefetched bytes and otherwise defers to
    /// the parser's own handling of local paths.
    pub fn resolver(&self) -> ImageHrefResolver<'static> {
        let images = self.images.clone();
        let fallback = ImageHrefResolver::default_string_resolver();
        let sniff = ImageHrefResolver::default_data_resolver();
        ImageHrefResolver {
            resolve_data: ImageHrefResolver::default_data_resolver(),
            resolve_string: Box::new(move |href: &str, opts: &Options| -> Option<ImageKind> {
                match images.get(href) {
                    // "text/plain" makes the data resolver sniff the format.
                    Some(bytes) => sniff("text/plain", bytes.clone(), opts),
                    None => fallback(href, opts),
                }
            }),
        }
    }
}

pub fn is_remote(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Remote image hrefs referenced by the layout, deduplicated, in order.
pub fn remote_hrefs(layout: &RenderedLayout) -> Vec<&str> {
    let mut hrefs: Vec<&str> = Vec::new();
    for element in &layout.elements {
        if let Element::Image { href, .. } = element {
            if is_remote(href) && !hrefs.contains(&href.as_str()) {
                hrefs.push(href.as_str());
            }
        }
    }
    hrefs
}

/// Downloads every remote image the layout references. Failures are logged
/// and skipped.
pub async fn prefetch(client: &Client, layout: &RenderedLayout) -> RemoteImages {
    let mut images = HashMap::new();
    for href in remote_hrefs(layout) {
        match fetch(client, href).await {
            Ok(bytes) => {
                debug!(href, bytes = bytes.len(), "Fetched remote image");
                images.insert(href.to_string(), Arc::new(bytes));
            }
            Err(e) => warn!(href, "Remote image unavailable, dropping it: {e}"),
        }
    }
    RemoteImages { images }
}

async fn fetch(client: &Client, href: &str) -> Result<Vec<u8>, reqwest::Error> {
    let response = client
        .get(href.trim())
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResumeDocument, TemplateId};
    use crate::render::{render_template, RenderOptions};

    fn layout_with_logo(href: &str) -> RenderedLayout {
        render_template(
            &ResumeDocument::default(),
            TemplateId::Simple,
            &RenderOptions::export().with_logo(href),
        )
    }

    #[test]
    fn test_only_http_hrefs_are_remote() {
        assert!(is_remote("https://cdn.example/logo.png"));
        assert!(is_remote("HTTP://cdn.example/logo.png"));
        assert!(!is_remote("logo.png"));
        assert!(!is_remote("/srv/logo.png"));
        assert!(!is_remote("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_local_logo_is_not_prefetched() {
        assert!(remote_hrefs(&layout_with_logo("assets/logo.png")).is_empty());
        assert_eq!(
            remote_hrefs(&layout_with_logo("https://cdn.example/logo.png")),
            vec!["https://cdn.example/logo.png"]
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_is_skipped() {
        let images = prefetch(&Client::new(), &layout_with_logo("http://127.0.0.1:9/logo.png")).await;
        assert!(images.is_empty());
    }
}
