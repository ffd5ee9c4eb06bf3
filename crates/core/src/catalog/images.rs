//! Image URL construction.
//!
//! Pure helpers mapping a relative image path and a size to an absolute
//! CDN URL. A missing path maps to a fixed local placeholder asset, so
//! callers never have to branch on null artwork.

/// Poster sizes supported by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    W200,
    W300,
    W400,
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(self) -> &'static str {
        match self {
            PosterSize::W200 => "w200",
            PosterSize::W300 => "w300",
            PosterSize::W400 => "w400",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Backdrop sizes supported by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropSize {
    W300,
    W780,
    W1280,
    Original,
}

impl BackdropSize {
    pub fn as_str(self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

/// Profile image sizes supported by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSize {
    W45,
    W185,
    H632,
    Original,
}

impl ProfileSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileSize::W45 => "w45",
            ProfileSize::W185 => "w185",
            ProfileSize::H632 => "h632",
            ProfileSize::Original => "original",
        }
    }
}

/// Placeholder shown when a movie or series has no poster.
pub const POSTER_PLACEHOLDER: &str = "/abstract-movie-poster.png";
/// Placeholder shown when a movie or series has no backdrop.
pub const BACKDROP_PLACEHOLDER: &str = "/movie-backdrop.png";
/// Placeholder shown when a person has no profile image.
pub const PROFILE_PLACEHOLDER: &str = "/person-placeholder.png";

/// Image URL builder bound to a CDN base URL.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base_url: String,
}

impl ImageUrls {
    /// Default image CDN base.
    pub const DEFAULT_BASE_URL: &'static str = "https://image.tmdb.org/t/p";

    /// Create a builder for the given CDN base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute poster URL, or the poster placeholder when `path` is absent.
    pub fn poster(&self, path: Option<&str>, size: PosterSize) -> String {
        self.build(path, size.as_str(), POSTER_PLACEHOLDER)
    }

    /// Absolute backdrop URL, or the backdrop placeholder when `path` is absent.
    pub fn backdrop(&self, path: Option<&str>, size: BackdropSize) -> String {
        self.build(path, size.as_str(), BACKDROP_PLACEHOLDER)
    }

    /// Absolute profile image URL, or the profile placeholder when `path` is absent.
    pub fn profile(&self, path: Option<&str>, size: ProfileSize) -> String {
        self.build(path, size.as_str(), PROFILE_PLACEHOLDER)
    }

    fn build(&self, path: Option<&str>, size: &str, placeholder: &str) -> String {
        match path {
            Some(p) if !p.is_empty() => format!("{}/{}{}", self.base_url, size, p),
            _ => placeholder.to_string(),
        }
    }
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url() {
        let urls = ImageUrls::default();
        assert_eq!(
            urls.poster(Some("/abc.jpg"), PosterSize::W500),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn test_poster_placeholder_on_missing_path() {
        let urls = ImageUrls::default();
        assert_eq!(urls.poster(None, PosterSize::W500), POSTER_PLACEHOLDER);
        assert_eq!(urls.poster(Some(""), PosterSize::W500), POSTER_PLACEHOLDER);
    }

    #[test]
    fn test_backdrop_url() {
        let urls = ImageUrls::default();
        assert_eq!(
            urls.backdrop(Some("/bd.jpg"), BackdropSize::W1280),
            "https://image.tmdb.org/t/p/w1280/bd.jpg"
        );
        assert_eq!(urls.backdrop(None, BackdropSize::W780), BACKDROP_PLACEHOLDER);
    }

    #[test]
    fn test_profile_url_custom_base() {
        let urls = ImageUrls::new("https://cdn.example.com/img");
        assert_eq!(
            urls.profile(Some("/face.jpg"), ProfileSize::W185),
            "https://cdn.example.com/img/w185/face.jpg"
        );
        assert_eq!(urls.profile(None, ProfileSize::W185), PROFILE_PLACEHOLDER);
    }
}
