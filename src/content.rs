//! Static content catalog: projects, blog posts, and career timeline events.
//!
//! The catalog is embedded as JSON and parsed once at startup. Dates are
//! normalized to [`TimePoint`] here, at the boundary, so the layout code only
//! ever sees canonical values. Nothing in this module is mutated after load.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::components::timeline::position::TimePoint;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Project,
    Blog,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Project => "project",
            ContentKind::Blog => "blog",
        }
    }
}

/// A point-in-time content entity, shown as a dot on the timeline and as a
/// card on the listing pages.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: String,
    pub description: String,
    /// Display date, `"Jul 2025"` or `"2024"`.
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub blog_path: Option<String>,
    /// `"owner/repo"`.
    #[serde(default)]
    pub github_repo: Option<String>,
    #[serde(default)]
    pub show_on_front_page: bool,
    #[serde(default)]
    pub show_on_timeline: bool,
    #[serde(skip)]
    when: TimePoint,
}

impl ContentItem {
    /// Canonical date, resolved once at load.
    pub fn when(&self) -> TimePoint {
        self.when
    }

    /// Where activating this item should take the user. Blogs with a local
    /// body open the internal detail page; anything with a repo goes to
    /// GitHub; a bare link opens externally; everything else falls back to
    /// the detail page.
    pub fn navigation(&self) -> NavigationTarget {
        if self.kind == ContentKind::Blog && self.blog_path.is_some() {
            return NavigationTarget::Detail(self.id.clone());
        }
        if let Some(repo) = &self.github_repo {
            return NavigationTarget::Repo(repo.clone());
        }
        if let Some(link) = &self.link {
            return NavigationTarget::External(link.clone());
        }
        NavigationTarget::Detail(self.id.clone())
    }
}

/// One variant per kind of navigation, each carrying only what it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Internal route to the content detail page.
    Detail(String),
    /// External URL, opened in a new tab.
    External(String),
    /// GitHub repository (`owner/repo`), opened in a new tab.
    Repo(String),
}

impl NavigationTarget {
    pub fn href(&self) -> String {
        match self {
            NavigationTarget::Detail(id) => format!("/content/{id}"),
            NavigationTarget::External(url) => url.clone(),
            NavigationTarget::Repo(repo) => format!("https://github.com/{repo}"),
        }
    }

    pub fn opens_new_tab(&self) -> bool {
        !matches!(self, NavigationTarget::Detail(_))
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Education,
    Work,
    Research,
}

impl EventCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Education => "Education",
            EventCategory::Work => "Work",
            EventCategory::Research => "Research",
        }
    }
}

/// A time-span entity, shown as a horizontal bar on the timeline.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: EventCategory,
    pub start_year: i32,
    /// 0-based month.
    #[serde(default)]
    pub start_month: u32,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub end_month: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub current: bool,
}

impl TimelineEvent {
    pub fn start(&self) -> TimePoint {
        TimePoint::from_year_month(self.start_year, self.start_month)
    }

    /// `None` means ongoing. A missing end month defaults to December.
    pub fn end(&self) -> Option<TimePoint> {
        self.end_year
            .map(|year| TimePoint::from_year_month(year, self.end_month.unwrap_or(11)))
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.current && self.end_year.is_some() {
            return Err("current event must not have an end date");
        }
        if let Some(end) = self.end() {
            if end.fractional_year() < self.start().fractional_year() {
                return Err("event ends before it starts");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    items: Vec<ContentItem>,
    // Individually deserialized so one malformed event is dropped with a
    // warning instead of failing the whole catalog.
    events: Vec<serde_json::Value>,
}

#[derive(Debug)]
pub struct Catalog {
    items: Vec<ContentItem>,
    events: Vec<TimelineEvent>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let mut items = raw.items;
        for item in &mut items {
            item.when = TimePoint::parse(&item.date);
        }
        let events = raw
            .events
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<TimelineEvent>(value) {
                Ok(event) => Some(event),
                Err(error) => {
                    tracing::warn!(%error, "dropping malformed timeline event");
                    None
                }
            })
            .filter(|event| match event.validate() {
                Ok(()) => true,
                Err(reason) => {
                    tracing::warn!(id = %event.id, %reason, "dropping invalid timeline event");
                    false
                }
            })
            .collect();
        Ok(Catalog { items, events })
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(include_str!("../assets/content.json"))
        .expect("failed to parse assets/content.json")
});

pub fn all_content() -> &'static [ContentItem] {
    &CATALOG.items
}

pub fn events() -> &'static [TimelineEvent] {
    &CATALOG.events
}

pub fn front_page_content() -> Vec<&'static ContentItem> {
    CATALOG
        .items
        .iter()
        .filter(|item| item.show_on_front_page)
        .take(3)
        .collect()
}

pub fn projects() -> Vec<&'static ContentItem> {
    CATALOG
        .items
        .iter()
        .filter(|item| item.kind == ContentKind::Project)
        .collect()
}

pub fn blogs() -> Vec<&'static ContentItem> {
    CATALOG
        .items
        .iter()
        .filter(|item| item.kind == ContentKind::Blog)
        .collect()
}

pub fn timeline_content() -> Vec<&'static ContentItem> {
    CATALOG
        .items
        .iter()
        .filter(|item| item.show_on_timeline)
        .collect()
}

pub fn content_by_id(id: &str) -> Option<&'static ContentItem> {
    CATALOG.items.iter().find(|item| item.id == id)
}

pub fn event_by_id(id: &str) -> Option<&'static TimelineEvent> {
    CATALOG.events.iter().find(|event| event.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        assert!(!all_content().is_empty());
        assert!(!events().is_empty());
        assert!(front_page_content().len() <= 3);
        assert!(!timeline_content().is_empty());
    }

    #[test]
    fn test_dates_normalized_at_load() {
        let json = r#"{
            "items": [{
                "id": "a",
                "type": "blog",
                "title": "A",
                "description": "d",
                "date": "Jul 2025",
                "category": "Research"
            }],
            "events": []
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let when = catalog.items[0].when();
        assert_eq!(when.year, 2025);
        assert!((when.month_fraction - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_navigation_precedence() {
        let json = r#"{
            "items": [
                {"id": "b", "type": "blog", "title": "B", "description": "d",
                 "date": "2024", "category": "c", "blogPath": "assets/blog/b.md",
                 "githubRepo": "o/r"},
                {"id": "p", "type": "project", "title": "P", "description": "d",
                 "date": "2024", "category": "c", "githubRepo": "o/r",
                 "link": "https://example.com"},
                {"id": "l", "type": "project", "title": "L", "description": "d",
                 "date": "2024", "category": "c", "link": "https://example.com"},
                {"id": "n", "type": "project", "title": "N", "description": "d",
                 "date": "2024", "category": "c"}
            ],
            "events": []
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(
            catalog.items[0].navigation(),
            NavigationTarget::Detail("b".into())
        );
        assert_eq!(
            catalog.items[1].navigation(),
            NavigationTarget::Repo("o/r".into())
        );
        assert_eq!(
            catalog.items[2].navigation(),
            NavigationTarget::External("https://example.com".into())
        );
        assert_eq!(
            catalog.items[3].navigation(),
            NavigationTarget::Detail("n".into())
        );
    }

    #[test]
    fn test_navigation_hrefs() {
        assert_eq!(
            NavigationTarget::Detail("x".into()).href(),
            "/content/x"
        );
        assert_eq!(
            NavigationTarget::Repo("o/r".into()).href(),
            "https://github.com/o/r"
        );
        assert!(!NavigationTarget::Detail("x".into()).opens_new_tab());
        assert!(NavigationTarget::Repo("o/r".into()).opens_new_tab());
    }

    #[test]
    fn test_invalid_events_dropped_not_fatal() {
        let json = r#"{
            "items": [],
            "events": [
                {"id": "ok", "type": "work", "title": "T", "subtitle": "s",
                 "description": "d", "startYear": 2020, "startMonth": 0,
                 "endYear": 2021},
                {"id": "backwards", "type": "work", "title": "T", "subtitle": "s",
                 "description": "d", "startYear": 2022, "startMonth": 6,
                 "endYear": 2021, "endMonth": 0},
                {"id": "current-with-end", "type": "work", "title": "T",
                 "subtitle": "s", "description": "d", "startYear": 2020,
                 "current": true, "endYear": 2022},
                {"id": "bad-category", "type": "sabbatical", "title": "T",
                 "subtitle": "s", "description": "d", "startYear": 2020}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.events.len(), 1);
        assert_eq!(catalog.events[0].id, "ok");
    }

    #[test]
    fn test_event_end_month_defaults_to_december() {
        let event = TimelineEvent {
            id: "e".into(),
            title: "T".into(),
            subtitle: "s".into(),
            description: "d".into(),
            category: EventCategory::Education,
            start_year: 2019,
            start_month: 8,
            end_year: Some(2023),
            end_month: None,
            location: None,
            current: false,
        };
        let end = event.end().unwrap();
        assert_eq!(end.year, 2023);
        assert!((end.month_fraction - 11.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_ongoing_event_has_no_end() {
        let catalog = Catalog::from_json(
            r#"{"items": [], "events": [{"id": "e", "type": "work", "title": "T",
                "subtitle": "s", "description": "d", "startYear": 2025,
                "startMonth": 7, "current": true}]}"#,
        )
        .unwrap();
        assert!(catalog.events[0].end().is_none());
        assert!(catalog.events[0].current);
    }
}
