//! The product listing query descriptor.
//!
//! Combines persisted filters, zero-based pagination, and a two-level sort
//! into one request descriptor. The descriptor serializes to both the query
//! parameter list sent to the server and a signature string used to suppress
//! consecutive identical fetches.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Selectable rows-per-page values.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 25, 50];

/// Rows per page before the user picks one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A sortable product column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Category,
    Name,
    Price,
    ExpirationDate,
    Stock,
}

impl SortColumn {
    /// Every sortable column in display order.
    pub const ALL: [Self; 5] = [
        Self::Category,
        Self::Name,
        Self::Price,
        Self::ExpirationDate,
        Self::Stock,
    ];

    /// The server-side sort key.
    pub fn param(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Name => "name",
            Self::Price => "price",
            Self::ExpirationDate => "expirationdate",
            Self::Stock => "stock",
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Name => "Name",
            Self::Price => "Price",
            Self::ExpirationDate => "Expiration Date",
            Self::Stock => "Stock",
        }
    }
}

/// Sort direction for one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A column with a direction, occupying the primary or secondary slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Which sort slot a column currently occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortSlot {
    Primary,
    Secondary,
}

/// Availability filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    Any,
    InStock,
    OutOfStock,
}

impl Availability {
    /// Query parameter value; `None` when the filter is not narrowing.
    pub fn param(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::InStock => Some("instock"),
            Self::OutOfStock => Some("outofstock"),
        }
    }
}

/// The filter portion of the listing query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub name: String,
    pub categories: Vec<i64>,
    pub availability: Availability,
}

/// The full listing query: filters, pagination, and a two-level sort.
///
/// Invariant: a secondary sort only exists while a primary sort is set, and
/// only then is it serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    pub filters: ProductFilters,
    pub page: u32,
    pub page_size: u32,
    pub primary: Option<ColumnSort>,
    pub secondary: Option<ColumnSort>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            filters: ProductFilters::default(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            primary: Some(ColumnSort {
                column: SortColumn::Name,
                direction: SortDirection::Asc,
            }),
            secondary: None,
        }
    }
}

impl ProductQuery {
    /// Rotate the sort state for a clicked column.
    ///
    /// - Primary column: ascending flips to descending; descending clears the
    ///   column and promotes the secondary sort (keeping its direction) into
    ///   the primary slot.
    /// - Secondary column: ascending flips to descending; descending clears
    ///   the secondary slot.
    /// - Unsorted column: becomes the primary sort ascending when no primary
    ///   exists, otherwise the secondary sort ascending, replacing any
    ///   previous secondary.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.primary.is_some_and(|sort| sort.column == column) {
            match self.primary.map(|sort| sort.direction) {
                Some(SortDirection::Asc) => {
                    self.primary = Some(ColumnSort {
                        column,
                        direction: SortDirection::Desc,
                    });
                }
                _ => {
                    self.primary = self.secondary.take();
                }
            }
        } else if self.secondary.is_some_and(|sort| sort.column == column) {
            match self.secondary.map(|sort| sort.direction) {
                Some(SortDirection::Asc) => {
                    self.secondary = Some(ColumnSort {
                        column,
                        direction: SortDirection::Desc,
                    });
                }
                _ => {
                    self.secondary = None;
                }
            }
        } else {
            let sort = ColumnSort {
                column,
                direction: SortDirection::Asc,
            };
            if self.primary.is_none() {
                self.primary = Some(sort);
                self.secondary = None;
            } else {
                self.secondary = Some(sort);
            }
        }
    }

    /// The slot and direction a column currently occupies, if any.
    pub fn sort_of(&self, column: SortColumn) -> Option<(SortSlot, SortDirection)> {
        if let Some(sort) = self.primary.filter(|sort| sort.column == column) {
            return Some((SortSlot::Primary, sort.direction));
        }
        self.secondary
            .filter(|sort| sort.column == column)
            .map(|sort| (SortSlot::Secondary, sort.direction))
    }

    /// Replace the filters, resetting to the first page on change.
    pub fn set_filters(&mut self, filters: ProductFilters) {
        if self.filters != filters {
            self.filters = filters;
            self.page = 0;
        }
    }

    /// Change the rows-per-page, resetting to the first page on change.
    pub fn set_page_size(&mut self, size: u32) {
        if self.page_size != size && size > 0 {
            self.page_size = size;
            self.page = 0;
        }
    }

    /// Number of pages for `total` rows; at least 1 so the pager always has
    /// a current page.
    pub fn page_count(&self, total: u64) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Pull the page back into range after the total shrinks.
    pub fn clamp_page(&mut self, total: u64) {
        let last = self.page_count(total) - 1;
        if self.page > last {
            self.page = last;
        }
    }

    /// Compose the query parameters for the listing request.
    ///
    /// Unset filters are omitted; the secondary sort is included only when a
    /// primary sort is set.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let name = self.filters.name.trim();
        if !name.is_empty() {
            params.push(("name", name.to_owned()));
        }
        if !self.filters.categories.is_empty() {
            let ids = self
                .filters
                .categories
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            params.push(("categories", ids));
        }
        if let Some(available) = self.filters.availability.param() {
            params.push(("available", available.to_owned()));
        }

        params.push(("page", self.page.to_string()));
        params.push(("size", self.page_size.to_string()));

        if let Some(primary) = self.primary {
            params.push(("primarySortBy", primary.column.param().to_owned()));
            params.push(("primarySortDirection", primary.direction.param().to_owned()));
            if let Some(secondary) = self.secondary {
                params.push(("secondarySortBy", secondary.column.param().to_owned()));
                params.push((
                    "secondarySortDirection",
                    secondary.direction.param().to_owned(),
                ));
            }
        }

        params
    }

    /// Canonical serialization used to suppress duplicate fetches.
    pub fn signature(&self) -> String {
        self.to_params()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
