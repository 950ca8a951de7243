//! Project records, category filtering, and load state.
//!
//! DESIGN
//! ======
//! The full project list is loaded once per page session and treated as
//! read-only afterwards. Filtering always derives a fresh vector from the
//! full list, so the source order survives any sequence of filter changes.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::Deserialize;

/// Opaque project identifier; the data document may use numbers or strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(i64),
    Text(String),
}

/// One portfolio entry with summary and case-study detail fields.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Category tag (e.g. `"backend"`), used for filtering and label lookup.
    pub category: String,
    /// Technology badges in display order.
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "imageAlt")]
    pub image_alt: Option<String>,
    /// Author's role on the project; display falls back to [`DEFAULT_ROLE`].
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solution: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
}

/// Role shown when a record has none.
pub const DEFAULT_ROLE: &str = "Full Stack Developer";

/// Display label for a category tag; unknown tags fall back to the raw tag.
#[must_use]
pub fn category_label(category: &str) -> &str {
    match category {
        "fullstack" => "Full Stack",
        "backend" => "Backend",
        other => other,
    }
}

/// Active category filter; `All` is the `"all"` sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a filter button tag (`"all"` or a category value).
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "all" {
            Self::All
        } else {
            Self::Category(tag.to_owned())
        }
    }

    /// Wire tag for this filter, matching filter button `data-filter` values.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(category) => category,
        }
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == *category,
        }
    }
}

/// Loaded project data plus the derived filtered view.
#[derive(Clone, Debug)]
pub struct ProjectsState {
    /// Full list as loaded; read-only after load.
    pub all: Vec<Project>,
    /// Subset for the active filter, in full-list order.
    pub filtered: Vec<Project>,
    pub filter: Filter,
    /// Grid error message when the load failed.
    pub load_error: Option<String>,
    /// True between mount and the completion of the initial fetch.
    pub loading: bool,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            filter: Filter::All,
            load_error: None,
            loading: true,
        }
    }
}

impl ProjectsState {
    /// Install a successfully loaded list; the filtered view starts as an
    /// identical copy.
    pub fn apply_loaded(&mut self, list: Vec<Project>) {
        self.filtered = list.clone();
        self.all = list;
        self.filter = Filter::All;
        self.load_error = None;
        self.loading = false;
    }

    /// Record a failed load: both lists reset to empty and the grid shows
    /// `message` instead of cards.
    pub fn apply_load_failure(&mut self, message: impl Into<String>) {
        self.all = Vec::new();
        self.filtered = Vec::new();
        self.load_error = Some(message.into());
        self.loading = false;
    }

    /// Set the active filter and recompute the filtered view from the full
    /// list, preserving relative order.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filtered = self
            .all
            .iter()
            .filter(|project| filter.matches(project))
            .cloned()
            .collect();
        self.filter = filter;
    }

    /// Look up a project by id in the full list (not the filtered view).
    /// Duplicate ids are not validated; the first match wins.
    #[must_use]
    pub fn find(&self, id: &ProjectId) -> Option<&Project> {
        self.all.iter().find(|project| project.id == *id)
    }
}
