//! The bookmark store: single owner of bookmarks, categories and settings.

use chrono::{DateTime, SubsecRound, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::core::bookmark::{parse_tags, Bookmark, NewBookmark};
use crate::core::category::{
    default_categories, Category, CategoryId, CategorySummary, CATEGORY_PALETTE, DEFAULT_ICON,
    NEUTRAL_COLOR, UNCATEGORIZED,
};
use crate::core::confirm::{
    AlwaysConfirm, ConfirmationGate, Outcome, CONFIRM_CLEAR, CONFIRM_DELETE, CONFIRM_IMPORT,
    CONFIRM_RESET,
};
use crate::core::export::{self, ImportData, Snapshot};
use crate::core::settings::{Settings, Theme};
use crate::core::stats::{StorageFootprint, StoreStats};
use crate::{LinkboxError, Result, Storage};

/// Storage key holding the JSON array of bookmarks.
pub const BOOKMARKS_KEY: &str = "linkbox_bookmarks";
/// Storage key holding the JSON array of categories.
pub const CATEGORIES_KEY: &str = "linkbox_categories";
/// Storage key holding the JSON settings object.
pub const SETTINGS_KEY: &str = "linkbox_settings";

/// What to do when a persisted blob cannot be decoded at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log a warning and keep the in-memory default for that key.
    #[default]
    FallBackToDefaults,
    /// Refuse to open and report [`LinkboxError::CorruptData`].
    FailFast,
}

/// Construction-time knobs for [`BookmarkStore::open_with`].
pub struct StoreOptions {
    load_policy: LoadPolicy,
    gate: Box<dyn ConfirmationGate>,
    rng: StdRng,
    clock: fn() -> DateTime<Utc>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            load_policy: LoadPolicy::default(),
            gate: Box::new(AlwaysConfirm),
            rng: StdRng::from_os_rng(),
            clock: Utc::now,
        }
    }
}

impl StoreOptions {
    pub fn load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Sets the gate consulted before delete, import, clear and reset.
    pub fn gate(mut self, gate: impl ConfirmationGate + 'static) -> Self {
        self.gate = Box::new(gate);
        self
    }

    /// Seeds the palette color picker so category colors are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replaces the wall clock used for timestamps and ids.
    pub fn clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }
}

/// Issues strictly increasing ids derived from the millisecond clock.
#[derive(Debug, Clone, Copy, Default)]
struct IdClock {
    last: i64,
}

impl IdClock {
    fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    /// Returns `None` once the previous id is `i64::MAX`.
    fn next(&mut self, now: DateTime<Utc>) -> Option<i64> {
        let after = self.last.checked_add(1)?;
        self.last = now.timestamp_millis().max(after);
        Some(self.last)
    }
}

/// The single source of truth for a LinkBox profile.
///
/// Every mutating method applies its change and writes all three collections
/// to [`Storage`] before returning. Destructive methods consult the
/// configured [`ConfirmationGate`] first and report whether they ran.
pub struct BookmarkStore {
    storage: Storage,
    bookmarks: Vec<Bookmark>,
    categories: Vec<Category>,
    settings: Settings,
    ids: IdClock,
    gate: Box<dyn ConfirmationGate>,
    rng: StdRng,
    clock: fn() -> DateTime<Utc>,
}

impl BookmarkStore {
    /// Opens a store over `storage` with default options.
    pub fn open(storage: Storage) -> Result<Self> {
        Self::open_with(storage, StoreOptions::default())
    }

    /// Opens a store over `storage`, loading each persisted collection that is
    /// present and keeping defaults for the rest.
    ///
    /// # Errors
    ///
    /// Returns [`LinkboxError::Database`] if storage cannot be read, or
    /// [`LinkboxError::CorruptData`] for an undecodable blob under
    /// [`LoadPolicy::FailFast`].
    pub fn open_with(storage: Storage, options: StoreOptions) -> Result<Self> {
        let mut store = Self {
            storage,
            bookmarks: Vec::new(),
            categories: default_categories(),
            settings: Settings::default(),
            ids: IdClock::default(),
            gate: options.gate,
            rng: options.rng,
            clock: options.clock,
        };
        store.load_data(options.load_policy)?;
        Ok(store)
    }

    fn load_data(&mut self, policy: LoadPolicy) -> Result<()> {
        if let Some(bookmarks) = load_entry(&self.storage, BOOKMARKS_KEY, policy)? {
            self.bookmarks = bookmarks;
        }
        if let Some(categories) = load_entry(&self.storage, CATEGORIES_KEY, policy)? {
            self.categories = categories;
        }
        if let Some(settings) = load_entry(&self.storage, SETTINGS_KEY, policy)? {
            self.settings = settings;
        }
        self.reseed_ids();
        log::debug!(
            "Loaded {} bookmarks and {} categories",
            self.bookmarks.len(),
            self.categories.len()
        );
        Ok(())
    }

    fn save_data(&mut self) -> Result<()> {
        let items = [
            (BOOKMARKS_KEY, serde_json::to_string(&self.bookmarks)?),
            (CATEGORIES_KEY, serde_json::to_string(&self.categories)?),
            (SETTINGS_KEY, serde_json::to_string(&self.settings)?),
        ];
        self.storage.set_items(&items)
    }

    fn reseed_ids(&mut self) {
        let mut ids = IdClock::default();
        for bookmark in &self.bookmarks {
            ids.observe(bookmark.id);
        }
        for id in self.categories.iter().filter_map(|c| c.id.as_number()) {
            ids.observe(id);
        }
        self.ids = ids;
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    fn next_id(&mut self) -> Result<i64> {
        let now = self.now();
        self.ids.next(now).ok_or(LinkboxError::IdsExhausted)
    }

    // ── Read accessors ──────────────────────────────────────────

    /// All bookmarks, most recently added first.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bookmark(&self, id: i64) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Names offered in the category picker, in stored order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Color of the category named exactly `name`, or the neutral gray.
    pub fn category_color(&self, name: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map_or(NEUTRAL_COLOR, |c| c.color.as_str())
    }

    /// Bookmarks whose title, url, notes, category or tags contain `query`,
    /// ignoring case. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Bookmark> {
        if query.trim().is_empty() {
            return self.bookmarks.iter().collect();
        }
        let needle = query.to_lowercase();
        self.bookmarks
            .iter()
            .filter(|b| b.search_text().contains(&needle))
            .collect()
    }

    pub fn compute_stats(&self) -> StoreStats {
        let distinct_tags: HashSet<&str> = self
            .bookmarks
            .iter()
            .flat_map(|b| b.tags.iter().map(String::as_str))
            .collect();
        StoreStats {
            total_links: self.bookmarks.len(),
            total_categories: self.categories.len(),
            total_tags: distinct_tags.len(),
        }
    }

    /// Bookmark counts per stored category.
    ///
    /// Bookmarks with an empty category count toward "Uncategorized"; if any
    /// exist and no stored category has that name, a derived entry is
    /// appended to the result. The stored list is never modified.
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for bookmark in &self.bookmarks {
            *counts.entry(bookmark.display_category()).or_default() += 1;
        }

        let mut summaries: Vec<CategorySummary> = self
            .categories
            .iter()
            .map(|category| CategorySummary {
                category: category.clone(),
                bookmark_count: counts.get(category.name.as_str()).copied().unwrap_or(0),
            })
            .collect();

        let uncategorized = counts.get(UNCATEGORIZED).copied().unwrap_or(0);
        if uncategorized > 0 && !self.categories.iter().any(|c| c.name == UNCATEGORIZED) {
            summaries.push(CategorySummary {
                category: Category::uncategorized(),
                bookmark_count: uncategorized,
            });
        }
        summaries
    }

    /// Size of the three collections as they are persisted.
    pub fn storage_footprint(&self) -> Result<StorageFootprint> {
        let used_bytes = serde_json::to_string(&self.bookmarks)?.len()
            + serde_json::to_string(&self.categories)?.len()
            + serde_json::to_string(&self.settings)?.len();
        Ok(StorageFootprint { used_bytes })
    }

    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot {
            bookmarks: self.bookmarks.clone(),
            categories: self.categories.clone(),
            settings: self.settings.clone(),
            exported_at: self.now().trunc_subsecs(3),
        }
    }

    /// Writes an export document into `dir` and returns its path.
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let snapshot = self.export_snapshot();
        let path = export::write_export(dir, &snapshot)?;
        log::info!("Exported {} bookmarks to {:?}", snapshot.bookmarks.len(), path);
        Ok(path)
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Adds a bookmark from raw form input and returns it.
    ///
    /// The bookmark goes to the front of the list. A non-empty
    /// `new_category` overrides `category` and, if no category has exactly
    /// that name, appends one with a palette color and the folder icon.
    ///
    /// # Errors
    ///
    /// Returns [`LinkboxError::ValidationFailed`] without touching state if
    /// the url or title is blank.
    pub fn add_bookmark(&mut self, input: NewBookmark) -> Result<Bookmark> {
        let url = input.url.trim();
        let title = input.title.trim();
        if url.is_empty() || title.is_empty() {
            return Err(LinkboxError::ValidationFailed(
                "Please fill in required fields (URL and Title)".to_string(),
            ));
        }

        let new_category = input.new_category.trim();
        let category = if new_category.is_empty() {
            input.category.clone()
        } else {
            new_category.to_string()
        };

        let creates_category =
            !new_category.is_empty() && !self.categories.iter().any(|c| c.name == new_category);
        let id = self.next_id()?;
        let category_id = if creates_category {
            Some(self.next_id()?)
        } else {
            None
        };

        let bookmark = Bookmark {
            id,
            url: url.to_string(),
            title: title.to_string(),
            category,
            tags: parse_tags(&input.tags),
            notes: input.notes.trim().to_string(),
            created_at: self.now().trunc_subsecs(3),
            clicks: 0,
            favorite: false,
        };
        self.bookmarks.insert(0, bookmark.clone());

        if let Some(id) = category_id {
            let color = CATEGORY_PALETTE[self.rng.random_range(0..CATEGORY_PALETTE.len())];
            self.categories.push(Category {
                id: CategoryId::Number(id),
                name: new_category.to_string(),
                color: color.to_string(),
                icon: DEFAULT_ICON.to_string(),
            });
            log::info!("Created category '{new_category}' from new bookmark");
        }

        self.save_data()?;
        log::info!("Saved bookmark {} ({})", bookmark.id, bookmark.url);
        Ok(bookmark)
    }

    /// Removes the bookmark with `id` once the gate approves. Unknown ids are a no-op.
    pub fn delete_bookmark(&mut self, id: i64) -> Result<Outcome> {
        if !self.gate.confirm(CONFIRM_DELETE) {
            return Ok(Outcome::Cancelled);
        }
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        if self.bookmarks.len() < before {
            log::info!("Deleted bookmark {id}");
        }
        self.save_data()?;
        Ok(Outcome::Applied)
    }

    /// Counts a click on bookmark `id` and returns the url to navigate to.
    ///
    /// Returns `None` without persisting if no bookmark has that id.
    pub fn open_bookmark(&mut self, id: i64) -> Result<Option<String>> {
        let Some(bookmark) = self.bookmarks.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        bookmark.clicks += 1;
        let url = bookmark.url.clone();
        self.save_data()?;
        Ok(Some(url))
    }

    /// Flips the favorite flag and returns the new value, or `None` if absent.
    pub fn toggle_favorite(&mut self, id: i64) -> Result<Option<bool>> {
        let Some(bookmark) = self.bookmarks.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        bookmark.favorite = !bookmark.favorite;
        let favorite = bookmark.favorite;
        self.save_data()?;
        Ok(Some(favorite))
    }

    /// Appends a category named `name` with `color` and the folder icon.
    ///
    /// # Errors
    ///
    /// Returns [`LinkboxError::ValidationFailed`] for a blank name and
    /// [`LinkboxError::DuplicateCategory`] if a category already has the same
    /// name ignoring case.
    pub fn add_category(&mut self, name: &str, color: &str) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LinkboxError::ValidationFailed(
                "Please enter a category name".to_string(),
            ));
        }
        if self.categories.iter().any(|c| c.name_matches_ignore_case(name)) {
            return Err(LinkboxError::DuplicateCategory(name.to_string()));
        }

        let category = Category {
            id: CategoryId::Number(self.next_id()?),
            name: name.to_string(),
            color: color.to_string(),
            icon: DEFAULT_ICON.to_string(),
        };
        self.categories.push(category.clone());
        self.save_data()?;
        log::info!("Added category '{name}'");
        Ok(category)
    }

    /// Switches the active theme and persists it.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.apply_theme(theme);
        self.save_data()
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        log::debug!("Applied theme '{theme}'");
    }

    /// Replaces whichever collections `data` carries, once the gate approves.
    ///
    /// Collections missing from `data` keep their current contents.
    pub fn import_snapshot(&mut self, data: ImportData) -> Result<Outcome> {
        if !self.gate.confirm(CONFIRM_IMPORT) {
            return Ok(Outcome::Cancelled);
        }
        let summary = data.summary();
        if let Some(bookmarks) = data.bookmarks {
            self.bookmarks = bookmarks;
        }
        if let Some(categories) = data.categories {
            self.categories = categories;
        }
        if let Some(settings) = data.settings {
            let theme = settings.theme;
            self.settings = settings;
            self.apply_theme(theme);
        }
        self.reseed_ids();
        self.save_data()?;
        log::info!(
            "Imported data: {} bookmarks, {} categories",
            self.bookmarks.len(),
            self.categories.len()
        );
        log::debug!("Import replaced {summary:?}");
        Ok(Outcome::Applied)
    }

    /// Parses an export document and imports it.
    ///
    /// # Errors
    ///
    /// Returns [`LinkboxError::ImportFormat`] before the gate is consulted if
    /// `text` does not parse; state is left untouched.
    pub fn import_json(&mut self, text: &str) -> Result<Outcome> {
        let data = export::parse_import(text)?;
        self.import_snapshot(data)
    }

    /// Reads an export document from `path` and imports it.
    pub fn import_from_file(&mut self, path: &Path) -> Result<Outcome> {
        let data = export::read_import(path)?;
        self.import_snapshot(data)
    }

    /// Removes every bookmark and restores the default categories.
    /// Settings are kept.
    pub fn clear_all(&mut self) -> Result<Outcome> {
        if !self.gate.confirm(CONFIRM_CLEAR) {
            return Ok(Outcome::Cancelled);
        }
        self.bookmarks.clear();
        self.categories = default_categories();
        self.save_data()?;
        log::warn!("All bookmarks and categories cleared");
        Ok(Outcome::Applied)
    }

    /// Restores default settings and applies the default theme.
    pub fn reset_settings(&mut self) -> Result<Outcome> {
        if !self.gate.confirm(CONFIRM_RESET) {
            return Ok(Outcome::Cancelled);
        }
        self.settings = Settings::default();
        self.apply_theme(Theme::default());
        self.save_data()?;
        log::info!("Settings reset to default");
        Ok(Outcome::Applied)
    }
}

fn load_entry<T: DeserializeOwned>(
    storage: &Storage,
    key: &str,
    policy: LoadPolicy,
) -> Result<Option<T>> {
    let raw = match storage.get_item(key)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(source) => match policy {
            LoadPolicy::FailFast => Err(LinkboxError::CorruptData {
                key: key.to_string(),
                source,
            }),
            LoadPolicy::FallBackToDefaults => {
                log::warn!("Ignoring unreadable value under '{key}': {source}");
                Ok(None)
            }
        },
    }
}
