use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};
use uuid::Uuid;

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum GalleryName {
    Home,
    Puppy,
    Grownup,
}

impl GalleryName {
    /// DOM/wire identifier, e.g. `puppy`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Everyday",
            Self::Puppy => "Puppy Days",
            Self::Grownup => "All Grown Up",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub(crate) struct PhotoId(pub Uuid);

impl PhotoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Photo {
    pub id: PhotoId,

    /// `data:image/...;base64,...`
    pub src: String,
}

impl Photo {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            id: PhotoId::new(),
            src: src.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub(crate) struct StoryId(pub Uuid);

impl StoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Story {
    /// Older saves carry no id; one is minted on load.
    #[serde(default)]
    pub id: StoryId,
    pub title: String,
    pub body: String,
    pub date: String,
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub(crate) enum ProfileField {
    Name,
    Breed,
    Birthday,
    GotchaDay,
    FavoriteThings,
}

impl ProfileField {
    /// Display order. Older saves stored field texts positionally in this order.
    pub const ALL: [ProfileField; 5] = [
        Self::Name,
        Self::Breed,
        Self::Birthday,
        Self::GotchaDay,
        Self::FavoriteThings,
    ];

    /// Stable persistence key, e.g. `gotcha_day`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Breed => "Breed",
            Self::Birthday => "Birthday",
            Self::GotchaDay => "Gotcha day",
            Self::FavoriteThings => "Favorite things",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Taco",
            Self::Breed => "Click to add a breed",
            Self::Birthday => "Click to add a birthday",
            Self::GotchaDay => "Click to add the day you met",
            Self::FavoriteThings => "Squeaky toys, long walks, naps in the sun",
        }
    }
}
