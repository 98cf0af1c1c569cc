use super::*;

fn unsorted() -> ProductQuery {
    ProductQuery {
        primary: None,
        secondary: None,
        ..ProductQuery::default()
    }
}

fn sort(column: SortColumn, direction: SortDirection) -> Option<ColumnSort> {
    Some(ColumnSort { column, direction })
}

// =============================================================
// Sort rotation
// =============================================================

#[test]
fn default_query_sorts_by_name_ascending() {
    let query = ProductQuery::default();
    assert_eq!(query.primary, sort(SortColumn::Name, SortDirection::Asc));
    assert_eq!(query.secondary, None);
    assert_eq!(query.page, 0);
    assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn first_click_sets_primary_ascending() {
    let mut query = unsorted();
    query.toggle_sort(SortColumn::Price);
    assert_eq!(query.primary, sort(SortColumn::Price, SortDirection::Asc));
    assert_eq!(query.secondary, None);
}

#[test]
fn second_click_flips_primary_to_descending() {
    let mut query = unsorted();
    query.toggle_sort(SortColumn::Price);
    query.toggle_sort(SortColumn::Price);
    assert_eq!(query.primary, sort(SortColumn::Price, SortDirection::Desc));
}

#[test]
fn third_click_clears_a_lone_primary() {
    let mut query = unsorted();
    for _ in 0..3 {
        query.toggle_sort(SortColumn::Price);
    }
    assert_eq!(query.primary, None);
    assert_eq!(query.secondary, None);
}

#[test]
fn click_on_second_column_sets_secondary_ascending() {
    let mut query = unsorted();
    query.toggle_sort(SortColumn::Name);
    query.toggle_sort(SortColumn::Stock);
    assert_eq!(query.primary, sort(SortColumn::Name, SortDirection::Asc));
    assert_eq!(query.secondary, sort(SortColumn::Stock, SortDirection::Asc));
}

#[test]
fn clearing_primary_promotes_secondary_keeping_its_direction() {
    let mut query = unsorted();
    query.toggle_sort(SortColumn::Name); // primary asc
    query.toggle_sort(SortColumn::Stock); // secondary asc
    query.toggle_sort(SortColumn::Stock); // secondary desc
    query.toggle_sort(SortColumn::Name); // primary desc
    query.toggle_sort(SortColumn::Name); // cleared; secondary promotes

    assert_eq!(query.primary, sort(SortColumn::Stock, SortDirection::Desc));
    assert_eq!(query.secondary, None);
}

#[test]
fn secondary_cycles_asc_desc_then_clears() {
    let mut query = unsorted();
    query.toggle_sort(SortColumn::Name);
    query.toggle_sort(SortColumn::Stock);
    query.toggle_sort(SortColumn::Stock);
    assert_eq!(query.secondary, sort(SortColumn::Stock, SortDirection::Desc));

    query.toggle_sort(SortColumn::Stock);
    assert_eq!(query.primary, sort(SortColumn::Name, SortDirection::Asc));
    assert_eq!(query.secondary, None);
}

#[test]
fn new_column_replaces_an_existing_secondary() {
    let mut query = unsorted();
    query.toggle_sort(SortColumn::Name);
    query.toggle_sort(SortColumn::Stock);
    query.toggle_sort(SortColumn::Price);
    assert_eq!(query.primary, sort(SortColumn::Name, SortDirection::Asc));
    assert_eq!(query.secondary, sort(SortColumn::Price, SortDirection::Asc));
}

#[test]
fn sort_of_reports_slot_and_direction() {
    let mut query = unsorted();
    query.toggle_sort(SortColumn::Name);
    query.toggle_sort(SortColumn::Stock);
    query.toggle_sort(SortColumn::Stock);

    assert_eq!(
        query.sort_of(SortColumn::Name),
        Some((SortSlot::Primary, SortDirection::Asc))
    );
    assert_eq!(
        query.sort_of(SortColumn::Stock),
        Some((SortSlot::Secondary, SortDirection::Desc))
    );
    assert_eq!(query.sort_of(SortColumn::Price), None);
}

// =============================================================
// Parameter composition and signatures
// =============================================================

#[test]
fn params_always_carry_page_and_size() {
    let query = unsorted();
    assert_eq!(
        query.to_params(),
        vec![("page", "0".to_owned()), ("size", "10".to_owned())]
    );
}

#[test]
fn params_include_set_filters_only() {
    let query = ProductQuery {
        filters: ProductFilters {
            name: "  milk  ".to_owned(),
            categories: vec![3, 1, 4],
            availability: Availability::InStock,
        },
        ..unsorted()
    };
    let params = query.to_params();
    assert_eq!(params[0], ("name", "milk".to_owned()));
    assert_eq!(params[1], ("categories", "3,1,4".to_owned()));
    assert_eq!(params[2], ("available", "instock".to_owned()));
}

#[test]
fn secondary_sort_is_dropped_without_a_primary() {
    let query = ProductQuery {
        primary: None,
        secondary: sort(SortColumn::Stock, SortDirection::Desc),
        ..ProductQuery::default()
    };
    let params = query.to_params();
    assert!(!params.iter().any(|(key, _)| key.starts_with("secondary")));
    assert!(!params.iter().any(|(key, _)| key.starts_with("primary")));
}

#[test]
fn full_query_serializes_both_sort_levels() {
    let mut query = ProductQuery::default();
    query.toggle_sort(SortColumn::Price);
    assert_eq!(
        query.signature(),
        "page=0&size=10&primarySortBy=name&primarySortDirection=asc\
         &secondarySortBy=price&secondarySortDirection=asc"
    );
}

#[test]
fn identical_queries_share_a_signature() {
    let a = ProductQuery::default();
    let b = ProductQuery::default();
    assert_eq!(a.signature(), b.signature());

    let mut c = ProductQuery::default();
    c.page = 2;
    assert_ne!(a.signature(), c.signature());
}

// =============================================================
// Pagination rules
// =============================================================

#[test]
fn page_size_change_resets_page() {
    let mut query = ProductQuery::default();
    query.page = 4;
    query.set_page_size(25);
    assert_eq!(query.page_size, 25);
    assert_eq!(query.page, 0);
}

#[test]
fn unchanged_page_size_keeps_the_page() {
    let mut query = ProductQuery::default();
    query.page = 4;
    query.set_page_size(DEFAULT_PAGE_SIZE);
    assert_eq!(query.page, 4);
}

#[test]
fn filter_change_resets_page() {
    let mut query = ProductQuery::default();
    query.page = 2;
    query.set_filters(ProductFilters {
        name: "soap".to_owned(),
        ..ProductFilters::default()
    });
    assert_eq!(query.page, 0);

    query.page = 3;
    query.set_filters(ProductFilters {
        name: "soap".to_owned(),
        ..ProductFilters::default()
    });
    assert_eq!(query.page, 3, "identical filters keep the page");
}

#[test]
fn page_count_is_ceiling_with_a_floor_of_one() {
    let query = ProductQuery::default();
    assert_eq!(query.page_count(0), 1);
    assert_eq!(query.page_count(10), 1);
    assert_eq!(query.page_count(11), 2);
    assert_eq!(query.page_count(101), 11);
}

#[test]
fn clamp_page_pulls_an_overrun_page_back() {
    let mut query = ProductQuery::default();
    query.page = 5;
    query.clamp_page(31);
    assert_eq!(query.page, 3);

    query.clamp_page(0);
    assert_eq!(query.page, 0);
}
