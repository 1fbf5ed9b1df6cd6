use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;
use crate::view::ViewState;

/// Fetch the full contact set and run the listing engine over it. The store
/// does no filtering or pagination of its own.
pub fn run<S: ContactStore>(store: &S, view: &ViewState) -> Result<CmdResult> {
    let contacts = store.contacts()?;
    let page = view.apply(&contacts);
    Ok(CmdResult::default().with_page(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::submit;
    use crate::model::Service;
    use crate::store::memory::MemoryStore;
    use crate::validate::ContactDraft;

    fn draft(name: &str, service: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "+380991234567".into(),
            service: service.into(),
            message: "We would like a quote for our project.".into(),
        }
    }

    #[test]
    fn lists_everything_by_default() {
        let mut store = MemoryStore::new();
        submit::run(&mut store, &draft("Jane Doe", "sauna"), None).unwrap();
        submit::run(&mut store, &draft("John Roe", "tiny-house"), None).unwrap();

        let result = run(&store, &ViewState::default()).unwrap();
        assert_eq!(result.page.unwrap().filtered_count, 2);
    }

    #[test]
    fn applies_service_filter_from_view_state() {
        let mut store = MemoryStore::new();
        submit::run(&mut store, &draft("Jane Doe", "sauna"), None).unwrap();
        submit::run(&mut store, &draft("John Roe", "tiny-house"), None).unwrap();

        let mut view = ViewState::default();
        view.set_service(Some(Service::Sauna));
        let page = run(&store, &view).unwrap().page.unwrap();
        assert_eq!(page.filtered_count, 1);
        assert_eq!(page.items[0].name, "Jane Doe");
    }
}
