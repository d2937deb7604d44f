use crate::models::GalleryName;

pub(crate) const DEFAULT_STORAGE_PREFIX: &str = "taco";
pub(crate) const DEFAULT_ALBUM_TITLE: &str = "Taco's Album";

/// How story dates are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum DateLocale {
    /// `2024年3月7日`
    #[default]
    ZhCn,
    /// `March 7, 2024`
    EnUs,
}

impl DateLocale {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" => Some(Self::ZhCn),
            "en-us" | "en" => Some(Self::EnUs),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AlbumConfig {
    pub storage_prefix: String,
    pub date_locale: DateLocale,
    pub album_title: String,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self {
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            date_locale: DateLocale::default(),
            album_title: DEFAULT_ALBUM_TITLE.to_string(),
        }
    }
}

impl AlbumConfig {
    /// Reads overrides from `window.ENV`.
    ///
    /// Each setting accepts the upper-case key first and then the lower-case
    /// one. Anything missing, blank or not a string keeps its default.
    pub fn from_window() -> Self {
        let mut cfg = Self::default();

        let Some(env) = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return cfg;
        };

        let read = |upper: &str, lower: &str| -> Option<String> {
            [upper, lower].iter().find_map(|k| {
                js_sys::Reflect::get(&env, &(*k).into())
                    .ok()
                    .and_then(|v| v.as_string())
                    .filter(|s| !s.trim().is_empty())
            })
        };

        if let Some(prefix) = read("STORAGE_PREFIX", "storage_prefix") {
            cfg.storage_prefix = prefix.trim().to_string();
        }
        if let Some(locale) = read("DATE_LOCALE", "date_locale").and_then(|l| DateLocale::parse(&l))
        {
            cfg.date_locale = locale;
        }
        if let Some(title) = read("ALBUM_TITLE", "album_title") {
            cfg.album_title = title;
        }

        cfg
    }

    pub fn keys(&self) -> StorageKeys {
        StorageKeys::with_prefix(&self.storage_prefix)
    }
}

/// Every localStorage key the album writes, derived from one prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    pub fn gallery(&self, name: GalleryName) -> String {
        match name {
            GalleryName::Home => format!("{}-photos", self.prefix),
            GalleryName::Puppy => format!("{}-puppy-photos", self.prefix),
            GalleryName::Grownup => format!("{}-grownup-photos", self.prefix),
        }
    }

    pub fn stories(&self) -> String {
        format!("{}-stories", self.prefix)
    }

    pub fn profile_photo(&self) -> String {
        format!("{}-profile", self.prefix)
    }

    pub fn profile_fields(&self) -> String {
        format!("{}-profile-info", self.prefix)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_STORAGE_PREFIX)
    }
}
