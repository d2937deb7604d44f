use crate::config::StorageKeys;
use crate::models::ProfileField;
use crate::storage::{load_json, save_json, KvStore, StorageResult};
use leptos::logging::warn;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Values are kept loose so one odd entry only costs that entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredFields {
    Keyed(BTreeMap<String, serde_json::Value>),
    /// Older saves: one text per editable field, in display order.
    Positional(Vec<serde_json::Value>),
}

impl From<StoredFields> for BTreeMap<ProfileField, String> {
    fn from(stored: StoredFields) -> Self {
        match stored {
            StoredFields::Keyed(map) => map
                .into_iter()
                .filter_map(|(key, value)| {
                    let Some(field) = ProfileField::from_key(&key) else {
                        warn!("ignoring unknown profile field `{key}`");
                        return None;
                    };
                    text_of(field, value).map(|text| (field, text))
                })
                .collect(),
            StoredFields::Positional(texts) => ProfileField::ALL
                .iter()
                .copied()
                .zip(texts)
                .filter_map(|(field, value)| text_of(field, value).map(|text| (field, text)))
                .collect(),
        }
    }
}

fn text_of(field: ProfileField, value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) if !text.is_empty() => Some(text),
        serde_json::Value::String(_) | serde_json::Value::Null => None,
        other => {
            warn!("ignoring non-text value for profile field `{}`: {other}", field.key());
            None
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Profile<S> {
    store: S,
    photo_key: String,
    fields_key: String,
    photo: Option<String>,
    fields: BTreeMap<ProfileField, String>,
}

impl<S: KvStore> Profile<S> {
    pub fn load(store: S, keys: &StorageKeys) -> Self {
        let photo_key = keys.profile_photo();
        let fields_key = keys.profile_fields();

        // The photo is stored as the raw data URI, not JSON.
        let photo = match store.get(&photo_key) {
            Ok(v) => v.filter(|s| !s.is_empty()),
            Err(e) => {
                warn!("{e}");
                None
            }
        };
        let fields = load_json::<StoredFields>(&store, &fields_key)
            .map(Into::into)
            .unwrap_or_default();

        Self {
            store,
            photo_key,
            fields_key,
            photo,
            fields,
        }
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    pub fn set_photo(&mut self, src: impl Into<String>) -> StorageResult<()> {
        let src = src.into();
        let written = self.store.set(&self.photo_key, &src);
        self.photo = Some(src);
        written
    }

    /// Persisted text for `field`, or its placeholder.
    pub fn field(&self, field: ProfileField) -> &str {
        self.fields
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.placeholder())
    }

    /// Updates one field and writes the whole field map back.
    pub fn set_field(&mut self, field: ProfileField, text: &str) -> StorageResult<()> {
        let text = text.trim();
        if text.is_empty() {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, text.to_string());
        }
        save_json(&self.store, &self.fields_key, &self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn profile(mem: &MemoryStore) -> Profile<MemoryStore> {
        Profile::load(mem.clone(), &StorageKeys::default())
    }

    #[test]
    fn test_empty_profile_uses_placeholders() {
        let p = profile(&MemoryStore::new());
        assert_eq!(p.photo(), None);
        for f in ProfileField::ALL {
            assert_eq!(p.field(f), f.placeholder());
        }
    }

    #[test]
    fn test_photo_survives_reload() {
        let mem = MemoryStore::new();
        let mut p = profile(&mem);
        p.set_photo("data:image/jpeg;base64,/9j/").unwrap();

        assert_eq!(mem.raw("taco-profile").as_deref(), Some("data:image/jpeg;base64,/9j/"));
        assert_eq!(profile(&mem).photo(), Some("data:image/jpeg;base64,/9j/"));
    }

    #[test]
    fn test_set_photo_replaces_previous() {
        let mem = MemoryStore::new();
        let mut p = profile(&mem);
        p.set_photo("data:one").unwrap();
        p.set_photo("data:two").unwrap();
        assert_eq!(profile(&mem).photo(), Some("data:two"));
    }

    #[test]
    fn test_fields_are_keyed_and_written_as_batch() {
        let mem = MemoryStore::new();
        let mut p = profile(&mem);
        p.set_field(ProfileField::Breed, "Shiba Inu").unwrap();
        p.set_field(ProfileField::Name, " Taco ").unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&mem.raw("taco-profile-info").unwrap()).unwrap();
        assert_eq!(raw["breed"], "Shiba Inu");
        assert_eq!(raw["name"], "Taco");

        let reloaded = profile(&mem);
        assert_eq!(reloaded.field(ProfileField::Breed), "Shiba Inu");
        assert_eq!(reloaded.field(ProfileField::Name), "Taco");
        assert_eq!(
            reloaded.field(ProfileField::Birthday),
            ProfileField::Birthday.placeholder()
        );
    }

    #[test]
    fn test_clearing_field_restores_placeholder() {
        let mem = MemoryStore::new();
        let mut p = profile(&mem);
        p.set_field(ProfileField::GotchaDay, "June 1").unwrap();
        p.set_field(ProfileField::GotchaDay, "   ").unwrap();
        assert_eq!(
            profile(&mem).field(ProfileField::GotchaDay),
            ProfileField::GotchaDay.placeholder()
        );
    }

    #[test]
    fn test_positional_legacy_fields_map_in_order() {
        let mem = MemoryStore::new();
        mem.set("taco-profile-info", r#"["Taco","","2019-04-02"]"#)
            .unwrap();

        let p = profile(&mem);
        assert_eq!(p.field(ProfileField::Name), "Taco");
        assert_eq!(p.field(ProfileField::Breed), ProfileField::Breed.placeholder());
        assert_eq!(p.field(ProfileField::Birthday), "2019-04-02");
    }

    #[test]
    fn test_unknown_and_odd_keys_keep_known_fields() {
        let mem = MemoryStore::new();
        mem.set(
            "taco-profile-info",
            r#"{"name":"Rex","breed":"Shiba","nickname":"R","birthday":7,"gotcha_day":null}"#,
        )
        .unwrap();

        let mut p = profile(&mem);
        assert_eq!(p.field(ProfileField::Name), "Rex");
        assert_eq!(p.field(ProfileField::Breed), "Shiba");
        assert_eq!(p.field(ProfileField::Birthday), ProfileField::Birthday.placeholder());
        assert_eq!(p.field(ProfileField::GotchaDay), ProfileField::GotchaDay.placeholder());

        p.set_field(ProfileField::FavoriteThings, "Naps").unwrap();
        let reloaded = profile(&mem);
        assert_eq!(reloaded.field(ProfileField::Name), "Rex");
        assert_eq!(reloaded.field(ProfileField::FavoriteThings), "Naps");
    }

    #[test]
    fn test_malformed_fields_fall_back_to_placeholders() {
        let mem = MemoryStore::new();
        mem.set("taco-profile-info", "{{{").unwrap();
        let p = profile(&mem);
        assert_eq!(p.field(ProfileField::Name), ProfileField::Name.placeholder());
    }
}
