//! The listing/filtering engine.
//!
//! All search, filter, sort, pagination, and row-selection state lives in a
//! single serializable [`ViewState`] value, and [`ViewState::apply`] is a
//! pure function from that value plus the full contact set to one page of
//! results. Nothing here touches storage or a terminal.

use crate::model::{Contact, Service, Status};
use serde::{Deserialize, Serialize};

pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 15];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// The combined search/filter/sort/page/selection criteria driving the
/// listing engine. `None` in a filter field means "all".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub service: Option<Service>,
    pub status: Option<Status>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: usize,
    pub selected: Vec<i64>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            service: None,
            status: None,
            sort_by: SortKey::CreatedAt,
            sort_order: SortOrder::Desc,
            page: 1,
            page_size: PAGE_SIZE_OPTIONS[0],
            selected: Vec::new(),
        }
    }
}

/// One page of filtered, sorted contacts.
#[derive(Debug, Clone)]
pub struct Page {
    pub items: Vec<Contact>,
    /// Size of the filtered set before pagination.
    pub filtered_count: usize,
    /// The page actually shown, after clamping.
    pub page: usize,
    pub page_count: usize,
    /// Zero-based offset of the first item within the filtered set.
    pub start_index: usize,
}

impl ViewState {
    /// Any filter change resets to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_service(&mut self, service: Option<Service>) {
        self.service = service;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<Status>) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Toggling the active sort key flips direction; a new key resets to
    /// ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.sort_order = match self.sort_order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
        } else {
            self.sort_by = key;
            self.sort_order = SortOrder::Asc;
        }
    }

    pub fn toggle_select(&mut self, id: i64) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// "Select all" is bound to the current page's visible rows: if every
    /// visible row is already selected the selection clears, otherwise it
    /// becomes exactly the visible rows. Selection is not carried across
    /// page changes.
    pub fn toggle_select_all(&mut self, visible: &[Contact]) {
        if self.selected.len() == visible.len() && !visible.is_empty() {
            self.selected.clear();
        } else {
            self.selected = visible.iter().map(|c| c.id).collect();
        }
    }

    fn matches(&self, contact: &Contact) -> bool {
        let search = self.search.to_lowercase();
        let search_match = search.is_empty()
            || contact.name.to_lowercase().contains(&search)
            || contact.email.to_lowercase().contains(&search);

        let service_match = self.service.map_or(true, |s| contact.service == s);
        let status_match = self.status.map_or(true, |s| contact.status == s);

        search_match && service_match && status_match
    }

    /// Filter → stable sort → paginate. The requested page is clamped into
    /// `[1, max(1, page_count)]` before slicing.
    pub fn apply(&self, contacts: &[Contact]) -> Page {
        let mut filtered: Vec<Contact> = contacts
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| {
            let (a_value, b_value) = match self.sort_by {
                SortKey::CreatedAt => (a.created_at, b.created_at),
                SortKey::UpdatedAt => (a.updated_at, b.updated_at),
            };
            let ordering = a_value.cmp(&b_value);
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        // ViewState is deserializable, so a zero page size can arrive from
        // outside the mutators; treat it as 1 rather than dividing by zero.
        let page_size = self.page_size.max(1);
        let filtered_count = filtered.len();
        let page_count = filtered_count.div_ceil(page_size);
        let page = self.page.clamp(1, page_count.max(1));
        let start_index = (page - 1) * page_size;
        let items: Vec<Contact> = filtered
            .into_iter()
            .skip(start_index)
            .take(page_size)
            .collect();

        Page {
            items,
            filtered_count,
            page,
            page_count,
            start_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn contact(id: i64, name: &str, service: Service, status: Status) -> Contact {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let created = base + Duration::hours(id);
        Contact {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "+380991234567".to_string(),
            service,
            message: "A message long enough to pass validation.".to_string(),
            status,
            referral_code: None,
            created_at: created,
            updated_at: created + Duration::minutes(30),
        }
    }

    fn sample() -> Vec<Contact> {
        vec![
            contact(1, "Ann Arbor", Service::Sauna, Status::New),
            contact(2, "Bob Builder", Service::TinyHouse, Status::Todo),
            contact(3, "Cara Craft", Service::Sauna, Status::Completed),
            contact(4, "Dan Dale", Service::MicroHouse, Status::Inprogress),
        ]
    }

    #[test]
    fn service_filter_keeps_only_matching_contacts() {
        let mut view = ViewState::default();
        view.set_service(Some(Service::Sauna));

        let page = view.apply(&sample());
        assert_eq!(page.filtered_count, 2);
        assert!(page.items.iter().all(|c| c.service == Service::Sauna));
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let mut view = ViewState::default();
        view.set_search("BOB");
        let page = view.apply(&sample());
        assert_eq!(page.filtered_count, 1);
        assert_eq!(page.items[0].name, "Bob Builder");

        view.set_search("cara.craft@");
        let page = view.apply(&sample());
        assert_eq!(page.filtered_count, 1);
        assert_eq!(page.items[0].name, "Cara Craft");
    }

    #[test]
    fn filters_combine_with_and() {
        let mut view = ViewState::default();
        view.set_service(Some(Service::Sauna));
        view.set_status(Some(Status::Completed));
        let page = view.apply(&sample());
        assert_eq!(page.filtered_count, 1);
        assert_eq!(page.items[0].name, "Cara Craft");
    }

    #[test]
    fn default_sort_is_created_descending() {
        let view = ViewState::default();
        let page = view.apply(&sample());
        let ids: Vec<i64> = page.items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn toggle_sort_flips_direction_then_new_key_resets_to_asc() {
        let mut view = ViewState::default();
        // Active key: flip desc -> asc.
        view.toggle_sort(SortKey::CreatedAt);
        assert_eq!(view.sort_order, SortOrder::Asc);
        // Flip back.
        view.toggle_sort(SortKey::CreatedAt);
        assert_eq!(view.sort_order, SortOrder::Desc);
        // New key: ascending regardless of previous direction.
        view.toggle_sort(SortKey::UpdatedAt);
        assert_eq!(view.sort_by, SortKey::UpdatedAt);
        assert_eq!(view.sort_order, SortOrder::Asc);
    }

    #[test]
    fn toggling_sort_twice_restores_original_order() {
        let mut view = ViewState::default();
        let before: Vec<i64> = view.apply(&sample()).items.iter().map(|c| c.id).collect();
        view.toggle_sort(SortKey::CreatedAt);
        view.toggle_sort(SortKey::CreatedAt);
        let after: Vec<i64> = view.apply(&sample()).items.iter().map(|c| c.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn pagination_slices_and_reports_page_count() {
        let contacts: Vec<Contact> = (1..=12)
            .map(|i| contact(i, &format!("Person {:02}", i), Service::Sauna, Status::New))
            .collect();

        let mut view = ViewState::default();
        view.toggle_sort(SortKey::CreatedAt); // ascending, so ids line up
        view.page_size = 5;

        let page = view.apply(&contacts);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].id, 1);

        view.page = 3;
        let page = view.apply(&contacts);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.start_index, 10);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let contacts: Vec<Contact> = (1..=12)
            .map(|i| contact(i, &format!("Person {:02}", i), Service::Sauna, Status::New))
            .collect();

        let mut view = ViewState {
            page_size: 5,
            page: 9,
            ..ViewState::default()
        };
        let page = view.apply(&contacts);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 2);

        // Empty result set still reports page 1 of 0.
        view.set_search("no such person");
        let page = view.apply(&contacts);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn zero_page_size_from_deserialized_state_does_not_panic() {
        let json = r#"{
            "search": "",
            "service": null,
            "status": null,
            "sort_by": "createdAt",
            "sort_order": "desc",
            "page": 1,
            "page_size": 0,
            "selected": []
        }"#;
        let view: ViewState = serde_json::from_str(json).unwrap();

        let page = view.apply(&[]);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());

        // Behaves as a page size of 1 over real data.
        let page = view.apply(&sample());
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.page_count, 4);
    }

    #[test]
    fn filter_and_page_size_changes_reset_page() {
        let mut view = ViewState {
            page: 4,
            ..ViewState::default()
        };
        view.set_search("ann");
        assert_eq!(view.page, 1);

        view.page = 4;
        view.set_status(Some(Status::Todo));
        assert_eq!(view.page, 1);

        view.page = 4;
        view.set_page_size(10);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn select_all_tracks_visible_rows_only() {
        let contacts = sample();
        let mut view = ViewState {
            page_size: 2,
            ..ViewState::default()
        };
        let page = view.apply(&contacts);
        assert_eq!(page.items.len(), 2);

        view.toggle_select_all(&page.items);
        assert_eq!(view.selected.len(), 2);
        assert!(view.selected.contains(&page.items[0].id));

        // All visible rows selected: toggling again clears.
        view.toggle_select_all(&page.items);
        assert!(view.selected.is_empty());
    }

    #[test]
    fn toggle_select_adds_and_removes_one_id() {
        let mut view = ViewState::default();
        view.toggle_select(7);
        assert_eq!(view.selected, vec![7]);
        view.toggle_select(7);
        assert!(view.selected.is_empty());
    }

    #[test]
    fn view_state_round_trips_through_json() {
        let mut view = ViewState::default();
        view.set_service(Some(Service::TinyHouse));
        view.toggle_sort(SortKey::UpdatedAt);
        let json = serde_json::to_string(&view).unwrap();
        let parsed: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(view, parsed);
    }
}
