use url::Url;

use super::models::MediaRef;
use crate::config::SourceConfig;

/// Turns media references from the content source into displayable URLs
///
/// Never fails: a missing or blank locator resolves to the configured
/// placeholder for that kind of media.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    base_url: String,
    placeholder_image: String,
    placeholder_avatar: String,
}

impl MediaResolver {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            placeholder_image: config.placeholder_image.clone(),
            placeholder_avatar: config.placeholder_avatar.clone(),
        }
    }

    /// Resolve a post cover image
    pub fn resolve_image(&self, media: Option<&MediaRef>) -> String {
        self.resolve(media, &self.placeholder_image)
    }

    /// Resolve an author avatar
    pub fn resolve_avatar(&self, media: Option<&MediaRef>) -> String {
        self.resolve(media, &self.placeholder_avatar)
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    pub fn placeholder_avatar(&self) -> &str {
        &self.placeholder_avatar
    }

    fn resolve(&self, media: Option<&MediaRef>, placeholder: &str) -> String {
        let Some(locator) = media.and_then(MediaRef::locator) else {
            return placeholder.to_string();
        };

        // Uploads on external storage already come back absolute
        if is_web_url(locator) {
            return locator.to_string();
        }

        format!("{}/{}", self.base_url, locator.trim_start_matches('/'))
    }
}

fn is_web_url(locator: &str) -> bool {
    Url::parse(locator)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> MediaResolver {
        MediaResolver::new(&SourceConfig {
            base_url: "https://cms.example.com/".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_missing_media_uses_placeholder() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_image(None), resolver.placeholder_image());
        assert_eq!(
            resolver.resolve_image(Some(&MediaRef::default())),
            resolver.placeholder_image()
        );
        assert_eq!(resolver.resolve_avatar(None), resolver.placeholder_avatar());
        assert_ne!(resolver.placeholder_image(), resolver.placeholder_avatar());
    }

    #[test]
    fn test_relative_locator_joined_to_base() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve_image(Some(&MediaRef::new("/x.png"))),
            "https://cms.example.com/x.png"
        );
        assert_eq!(
            resolver.resolve_avatar(Some(&MediaRef::new("uploads/a.png"))),
            "https://cms.example.com/uploads/a.png"
        );
    }

    #[test]
    fn test_absolute_locator_passthrough() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve_image(Some(&MediaRef::new("https://cdn.example.com/c.jpg"))),
            "https://cdn.example.com/c.jpg"
        );
    }

    #[test]
    fn test_scheme_like_paths_are_joined() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve_image(Some(&MediaRef::new("localhost:1337/x.png"))),
            "https://cms.example.com/localhost:1337/x.png"
        );
        assert_eq!(
            resolver.resolve_image(Some(&MediaRef::new("c:/x.png"))),
            "https://cms.example.com/c:/x.png"
        );
        assert_eq!(
            resolver.resolve_image(Some(&MediaRef::new("HTTP://cdn.example.com/c.jpg"))),
            "HTTP://cdn.example.com/c.jpg"
        );
    }
}
