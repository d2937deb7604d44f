mod lightbox;
mod photo_grid;
mod profile_card;
mod story_list;
mod upload_zone;

pub(crate) use lightbox::LightboxOverlay;
pub(crate) use photo_grid::PhotoGrid;
pub(crate) use profile_card::ProfileCard;
pub(crate) use story_list::{StoryComposer, StoryList};
pub(crate) use upload_zone::UploadZone;
