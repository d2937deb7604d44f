use crate::config::{DateLocale, StorageKeys};
use crate::models::{Story, StoryId};
use crate::storage::{load_json, save_json, KvStore, StorageResult};
use crate::util::{format_long_date, today_local};
use chrono::NaiveDate;

pub(crate) const UNTITLED: &str = "Untitled";

/// Journal entries, newest first. The whole list is rewritten on every change.
#[derive(Clone, Debug)]
pub(crate) struct StoryLog<S> {
    store: S,
    key: String,
    locale: DateLocale,
    stories: Vec<Story>,
}

impl<S: KvStore> StoryLog<S> {
    pub fn load(store: S, keys: &StorageKeys, locale: DateLocale) -> Self {
        let key = keys.stories();
        let stories = load_json::<Vec<Story>>(&store, &key).unwrap_or_default();
        Self {
            store,
            key,
            locale,
            stories,
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    fn persist(&self) -> StorageResult<()> {
        save_json(&self.store, &self.key, &self.stories)
    }

    pub fn add_story(&mut self, title: &str, body: &str) -> StorageResult<Option<&Story>> {
        self.add_story_on(title, body, today_local())
    }

    /// Adds a story dated `date`. Blank title and body together is a no-op.
    pub fn add_story_on(
        &mut self,
        title: &str,
        body: &str,
        date: NaiveDate,
    ) -> StorageResult<Option<&Story>> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() && body.is_empty() {
            return Ok(None);
        }

        let story = Story {
            id: StoryId::new(),
            title: if title.is_empty() { UNTITLED } else { title }.to_string(),
            body: body.to_string(),
            date: format_long_date(date, self.locale),
        };
        self.stories.insert(0, story);
        self.persist()?;
        Ok(self.stories.first())
    }

    pub fn delete_story(&mut self, index: usize) -> StorageResult<Option<Story>> {
        if index >= self.stories.len() {
            return Ok(None);
        }
        let removed = self.stories.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    pub fn delete_by_id(&mut self, id: StoryId) -> StorageResult<Option<Story>> {
        match self.stories.iter().position(|s| s.id == id) {
            Some(index) => self.delete_story(index),
            None => Ok(None),
        }
    }
}
