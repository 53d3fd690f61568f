use super::*;
use crate::net::types::Species;

#[test]
fn builds_with_active_filters() {
    let owner = Owner::new();
    owner.set();
    let query = RwSignal::new(FeedQuery::default());
    query.update(|q| q.set_species(Some(Species::Cat)));

    let _view = SearchBar(SearchBarProps { query });

    assert!(query.get_untracked().has_filters());
    assert_eq!(query.get_untracked().page, 1);
}
