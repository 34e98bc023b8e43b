//! A page-window paginator component for bubbletea-rs.
//!
//! The paginator owns the current page of a list view. It derives the page
//! window (first page, last page, the pages around the current one and
//! ellipses for the gaps) from the total item count and page size, reacts to
//! navigation keys and tells the parent about page changes with a
//! [`PageChangedMsg`] so the parent can load the new page.
//!
//! It does not render the items themselves; use [`Model::get_slice_bounds`]
//! for in-memory lists, or the `page`/`per_page` of [`Model::request`] when
//! fetching pages from a backend.

use crate::error::Result;
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::page::{PageRequest, DEFAULT_PER_PAGE};
use crate::window::{PageIndicator, PageWindow, PageWindowCalculator};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// How the paginator is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Clickable page window with arrows (e.g. "‹ 1 … 4 [5] 6 … 10 ›").
    #[default]
    Window,
    /// Compact "current/total" counter (e.g. "5/10").
    Arabic,
}

/// Sent to the parent whenever the paginator moves to another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangedMsg {
    /// Identifier of the paginator that changed.
    pub id: i64,
    /// The new 1-based page.
    pub page: usize,
    /// Page size at the time of the change.
    pub per_page: usize,
}

impl PageChangedMsg {
    /// The page request the parent should issue for the new page.
    pub fn request(&self) -> Result<PageRequest> {
        PageRequest::new(self.page, self.per_page)
    }
}

/// Key bindings for paginator navigation.
///
/// ```rust
/// use storefront_paginator::paginator::PaginatorKeyMap;
/// use storefront_paginator::key::KeyMap;
///
/// let keymap = PaginatorKeyMap::default();
/// assert_eq!(keymap.short_help().len(), 2);
/// assert_eq!(keymap.full_help()[0].len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'
    pub first_page: key::Binding,
    /// Last page. Default keys: End, 'G'
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// Styles applied to the parts of the page window.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Page numbers other than the current one.
    pub page: Style,
    /// The current page number.
    pub current_page: Style,
    /// Ellipsis markers.
    pub ellipsis: Style,
    /// Enabled previous/next arrows.
    pub arrow: Style,
    /// Previous/next arrows that cannot be used.
    pub disabled_arrow: Style,
    /// The compact "current/total" counter.
    pub arabic: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let very_subdued_color = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };

        Self {
            page: Style::new().foreground(subdued_color.clone()),
            current_page: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            ellipsis: Style::new().foreground(very_subdued_color.clone()),
            arrow: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            disabled_arrow: Style::new().foreground(very_subdued_color),
            arabic: Style::new().foreground(subdued_color),
        }
    }
}

/// The paginator model.
///
/// The current page is 1-based and always stays within
/// `[1, max(page_count, 1)]`: every setter clamps it after the page count
/// changes.
///
/// # Examples
///
/// ```rust
/// use storefront_paginator::paginator::Model;
///
/// let mut paginator = Model::new()
///     .with_per_page(10)
///     .with_total_items(100)
///     .with_page(5);
///
/// assert_eq!(strip(&paginator.view()), "‹ 1 … 4 [5] 6 … 10 ›");
///
/// assert!(paginator.next_page());
/// assert_eq!(paginator.page(), 6);
///
/// paginator.set_total_items(30); // now only 3 pages
/// assert_eq!(paginator.page(), 3);
/// assert!(!paginator.next_page());
/// # fn strip(s: &str) -> String { lipgloss_extras::lipgloss::strip_ansi(s).to_string() }
/// ```
///
/// ## Integration with bubbletea-rs
///
/// ```rust
/// use storefront_paginator::paginator::{Model as Paginator, PageChangedMsg};
/// use bubbletea_rs::{Cmd, Model, Msg};
///
/// struct ProductList {
///     paginator: Paginator,
///     products: Vec<String>,
/// }
///
/// impl Model for ProductList {
///     fn init() -> (Self, Option<Cmd>) {
///         let products: Vec<String> = (1..=42).map(|i| format!("Product {}", i)).collect();
///         let paginator = Paginator::new().with_per_page(10).with_total_items(products.len());
///         (Self { paginator, products }, None)
///     }
///
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         if let Some(changed) = msg.downcast_ref::<PageChangedMsg>() {
///             // A backed list would fetch `changed.request()` here.
///             let _ = changed.page;
///             return None;
///         }
///         self.paginator.update(&msg)
///     }
///
///     fn view(&self) -> String {
///         let (start, end) = self.paginator.get_slice_bounds(self.products.len());
///         format!("{}\n\n{}", self.products[start..end].join("\n"), self.paginator.view())
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Rendering mode.
    pub paginator_type: Type,
    /// Format of non-current page numbers; `%d` is replaced by the number.
    pub page_format: String,
    /// Format of the current page number.
    pub current_page_format: String,
    /// Format for [`Type::Arabic`] (current, then total).
    pub arabic_format: String,
    /// Label of the previous-page control.
    pub prev_label: String,
    /// Label of the next-page control.
    pub next_label: String,
    /// Label of ellipsis markers.
    pub ellipsis_label: String,
    /// Whether the previous/next controls are rendered.
    pub show_arrows: bool,
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,

    id: i64,
    page: usize,
    per_page: usize,
    total_items: usize,
    calculator: PageWindowCalculator,
}

impl Default for Model {
    fn default() -> Self {
        let mut model = Self {
            paginator_type: Type::default(),
            page_format: "%d".to_string(),
            current_page_format: "[%d]".to_string(),
            arabic_format: "%d/%d".to_string(),
            prev_label: "‹".to_string(),
            next_label: "›".to_string(),
            ellipsis_label: "…".to_string(),
            show_arrows: true,
            styles: Styles::default(),
            keymap: PaginatorKeyMap::default(),
            id: next_id(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total_items: 0,
            calculator: PageWindowCalculator::default(),
        };
        model.sync_keymap();
        model
    }
}

impl Model {
    /// Creates a paginator on page 1 with no items, 10 items per page and
    /// three visible pages around the current one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern). Values below 1
    /// are raised to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the total number of items (builder pattern).
    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.set_total_items(total_items);
        self
    }

    /// Sets the current page (builder pattern), clamped to the valid range.
    pub fn with_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }

    /// Sets how many numbered pages surround the current page.
    ///
    /// # Errors
    ///
    /// [`PaginationError::InvalidMaxVisible`](crate::PaginationError::InvalidMaxVisible)
    /// for zero or even values.
    ///
    /// ```rust
    /// use storefront_paginator::paginator::Model;
    ///
    /// let paginator = Model::new()
    ///     .with_total_items(200)
    ///     .with_page(10)
    ///     .with_max_visible(5)
    ///     .unwrap();
    /// assert_eq!(paginator.window().unwrap().to_string(), "1 … 8 9 [10] 11 12 … 20");
    /// assert!(Model::new().with_max_visible(2).is_err());
    /// ```
    pub fn with_max_visible(mut self, max_visible: usize) -> Result<Self> {
        self.calculator = self.calculator.with_max_visible(max_visible)?;
        Ok(self)
    }

    /// Sets the rendering mode (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Replaces the styles (builder pattern).
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Identifier carried by this paginator's [`PageChangedMsg`]s.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Total number of items being paginated.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Numbered pages shown around the current page.
    pub fn max_visible(&self) -> usize {
        self.calculator.max_visible()
    }

    /// `ceil(total_items / per_page)`; zero when there are no items.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Sets the number of items per page. Values below 1 are raised to 1 and
    /// the current page is clamped to the new page count.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.clamp_page();
    }

    /// Sets the total number of items and clamps the current page.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp_page();
    }

    /// Sets the current page, clamped to `[1, max(page_count, 1)]`.
    ///
    /// Returns true when the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let previous = self.page;
        self.page = page;
        self.clamp_page();
        self.page != previous
    }

    fn clamp_page(&mut self) {
        let last = self.page_count().max(1);
        self.page = self.page.clamp(1, last);
        self.sync_keymap();
    }

    fn sync_keymap(&mut self) {
        let has_prev = self.page > 1;
        let has_next = self.page < self.page_count();
        self.keymap.prev_page.set_enabled(has_prev);
        self.keymap.first_page.set_enabled(has_prev);
        self.keymap.next_page.set_enabled(has_next);
        self.keymap.last_page.set_enabled(has_next);
    }

    /// The page window for the current state.
    pub fn window(&self) -> Result<PageWindow> {
        self.calculator
            .calculate(self.total_items, self.per_page, self.page)
    }

    /// The request for the current page.
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page).unwrap_or_default()
    }

    /// Moves to the next page. Returns false (and changes nothing) on the
    /// last page.
    pub fn next_page(&mut self) -> bool {
        self.navigate(|window| window.go_next())
    }

    /// Moves to the previous page. Returns false (and changes nothing) on the
    /// first page.
    pub fn prev_page(&mut self) -> bool {
        self.navigate(|window| window.go_previous())
    }

    /// Jumps to `page`, as when a page indicator is activated. Out-of-range
    /// pages are ignored and return false.
    ///
    /// ```rust
    /// use storefront_paginator::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_total_items(100);
    /// assert!(paginator.go_to_page(7));
    /// assert_eq!(paginator.page(), 7);
    /// assert!(!paginator.go_to_page(11));
    /// assert_eq!(paginator.page(), 7);
    /// ```
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.navigate(|window| window.go_to(page))
    }

    /// Jumps to page 1.
    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) -> bool {
        let last = self.page_count();
        self.go_to_page(last)
    }

    fn navigate<F>(&mut self, target: F) -> bool
    where
        F: FnOnce(&PageWindow) -> Result<usize>,
    {
        match self.window().and_then(|window| target(&window)) {
            Ok(page) if page != self.page => {
                tracing::trace!(id = self.id, from = self.page, to = page, "page changed");
                self.page = page;
                self.sync_keymap();
                true
            }
            Ok(_) => false,
            Err(err) => {
                tracing::debug!(id = self.id, error = %err, "ignored page navigation");
                false
            }
        }
    }

    /// True on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// True on the last page, and when there are no pages at all.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.page_count()
    }

    /// `[start, end)` indices of the current page within `length` items.
    ///
    /// ```rust
    /// use storefront_paginator::paginator::Model;
    ///
    /// let items: Vec<i32> = (1..=25).collect();
    /// let paginator = Model::new().with_total_items(items.len()).with_page(3);
    /// let (start, end) = paginator.get_slice_bounds(items.len());
    /// assert_eq!(&items[start..end], &[21, 22, 23, 24, 25]);
    /// ```
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        self.request().slice_bounds(length)
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self, length: usize) -> usize {
        let (start, end) = self.get_slice_bounds(length);
        end - start
    }

    /// A command that delivers a [`PageChangedMsg`] for the current page.
    pub fn page_changed_cmd(&self) -> Cmd {
        let msg = PageChangedMsg {
            id: self.id,
            page: self.page,
            per_page: self.per_page,
        };
        Box::pin(async move { Some(Box::new(msg) as Msg) })
    }

    /// Handles navigation keys.
    ///
    /// Returns a command delivering [`PageChangedMsg`] when the page
    /// changed, and `None` otherwise.
    ///
    /// ```rust
    /// use storefront_paginator::paginator::Model;
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut paginator = Model::new().with_total_items(50);
    /// let right: Msg = Box::new(KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE });
    ///
    /// assert!(paginator.update(&right).is_some());
    /// assert_eq!(paginator.page(), 2);
    /// ```
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        let changed = if self.keymap.next_page.matches(key_msg) {
            self.next_page()
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page()
        } else if self.keymap.first_page.matches(key_msg) {
            self.first_page()
        } else if self.keymap.last_page.matches(key_msg) {
            self.last_page()
        } else {
            false
        };

        changed.then(|| self.page_changed_cmd())
    }

    /// Renders the paginator. An empty collection renders as an empty string.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Window => self.window_view(),
            Type::Arabic => self.arabic_view(),
        }
    }

    fn arabic_view(&self) -> String {
        if self.total_items == 0 {
            return String::new();
        }
        let text = self
            .arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.page_count().to_string(), 1);
        self.styles.arabic.render(&text)
    }

    fn window_view(&self) -> String {
        let window = match self.window() {
            Ok(window) => window,
            Err(err) => {
                tracing::debug!(id = self.id, error = %err, "cannot render page window");
                return String::new();
            }
        };
        if window.is_empty() {
            return String::new();
        }

        let mut parts = Vec::with_capacity(window.indicators().len() + 2);
        if self.show_arrows {
            parts.push(self.arrow(&self.prev_label, window.can_go_previous()));
        }
        for indicator in &window {
            parts.push(match *indicator {
                PageIndicator::Page {
                    number,
                    current: true,
                } => self
                    .styles
                    .current_page
                    .render(&self.current_page_format.replacen("%d", &number.to_string(), 1)),
                PageIndicator::Page { number, .. } => self
                    .styles
                    .page
                    .render(&self.page_format.replacen("%d", &number.to_string(), 1)),
                PageIndicator::Ellipsis => self.styles.ellipsis.render(&self.ellipsis_label),
            });
        }
        if self.show_arrows {
            parts.push(self.arrow(&self.next_label, window.can_go_next()));
        }
        parts.join(" ")
    }

    fn arrow(&self, label: &str, enabled: bool) -> String {
        if enabled {
            self.styles.arrow.render(label)
        } else {
            self.styles.disabled_arrow.render(label)
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, &msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;
    use crossterm::event::KeyModifiers;
    use proptest::prelude::*;

    fn strip(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_defaults() {
        let paginator = Model::new();
        assert_eq!(paginator.page(), 1);
        assert_eq!(paginator.per_page(), 10);
        assert_eq!(paginator.total_items(), 0);
        assert_eq!(paginator.max_visible(), 3);
        assert_eq!(paginator.page_count(), 0);
        assert_eq!(paginator.paginator_type, Type::Window);
        assert!(paginator.id() > 0);
        assert_ne!(paginator.id(), Model::new().id());
    }

    #[test]
    fn test_empty_collection() {
        let mut paginator = Model::new();
        assert_eq!(paginator.view(), "");
        assert!(paginator.on_first_page());
        assert!(paginator.on_last_page());
        assert!(!paginator.next_page());
        assert!(!paginator.prev_page());
        assert!(paginator.window().unwrap().is_empty());
        assert_eq!(paginator.items_on_page(0), 0);
    }

    #[test]
    fn test_view_window() {
        let paginator = Model::new().with_total_items(100).with_page(5);
        assert_eq!(strip(&paginator.view()), "‹ 1 … 4 [5] 6 … 10 ›");

        let paginator = Model::new().with_total_items(20);
        assert_eq!(strip(&paginator.view()), "‹ [1] 2 ›");

        let mut paginator = Model::new().with_total_items(5);
        paginator.show_arrows = false;
        assert_eq!(strip(&paginator.view()), "[1]");
    }

    #[test]
    fn test_view_arabic() {
        let paginator = Model::new()
            .with_total_items(95)
            .with_page(4)
            .with_type(Type::Arabic);
        assert_eq!(strip(&paginator.view()), "4/10");
    }

    #[test]
    fn test_setters_clamp_page() {
        let mut paginator = Model::new().with_total_items(100).with_page(50);
        assert_eq!(paginator.page(), 10);

        paginator.set_per_page(25);
        assert_eq!(paginator.page(), 4);

        paginator.set_per_page(0);
        assert_eq!(paginator.per_page(), 1);

        paginator.set_total_items(0);
        assert_eq!(paginator.page(), 1);

        assert!(!paginator.set_page(0));
        assert_eq!(paginator.page(), 1);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut paginator = Model::new().with_total_items(30);
        assert!(!paginator.prev_page());
        assert!(paginator.next_page());
        assert!(paginator.next_page());
        assert!(!paginator.next_page());
        assert_eq!(paginator.page(), 3);
        assert!(paginator.on_last_page());

        assert!(paginator.first_page());
        assert!(!paginator.first_page());
        assert!(paginator.last_page());
        assert_eq!(paginator.page(), 3);
    }

    #[test]
    fn test_keymap_follows_position() {
        let mut paginator = Model::new().with_total_items(30);
        assert!(!paginator.keymap.prev_page.enabled());
        assert!(paginator.keymap.next_page.enabled());

        paginator.last_page();
        assert!(paginator.keymap.prev_page.enabled());
        assert!(!paginator.keymap.last_page.enabled());

        let short = paginator.keymap.short_help();
        let help: Vec<&str> = short.iter().map(|b| b.help().desc.as_str()).collect();
        assert_eq!(help, ["prev page", "next page"]);
    }

    #[test]
    fn test_update_ignores_other_messages() {
        let mut paginator = Model::new().with_total_items(30);
        let msg: Msg = Box::new(42u32);
        assert!(paginator.update(&msg).is_none());
        assert!(paginator.update(&key(KeyCode::Char('x'))).is_none());
        assert!(paginator.update(&key(KeyCode::Left)).is_none());
        assert_eq!(paginator.page(), 1);
    }

    #[test]
    fn test_slice_bounds() {
        let paginator = Model::new().with_per_page(10).with_total_items(95).with_page(10);
        assert_eq!(paginator.get_slice_bounds(95), (90, 95));
        assert_eq!(paginator.items_on_page(95), 5);
    }

    #[tokio::test]
    async fn test_update_emits_page_changed() {
        let mut paginator = Model::new().with_per_page(20).with_total_items(100);

        let cmd = paginator.update(&key(KeyCode::End)).expect("page should change");
        let msg = cmd.await.expect("command should produce a message");
        let changed = msg
            .downcast_ref::<PageChangedMsg>()
            .expect("message should be PageChangedMsg");

        assert_eq!(
            *changed,
            PageChangedMsg {
                id: paginator.id(),
                page: 5,
                per_page: 20,
            }
        );
        assert_eq!(changed.request().unwrap().offset(), 80);

        let cmd = paginator.update(&key(KeyCode::Char('h'))).unwrap();
        let msg = cmd.await.unwrap();
        assert_eq!(msg.downcast_ref::<PageChangedMsg>().unwrap().page, 4);
    }

    proptest! {
        #[test]
        fn prop_page_stays_in_range(
            total in 0usize..500,
            per_page in 1usize..30,
            keys in proptest::collection::vec(0u8..4, 0..40),
        ) {
            let mut paginator = Model::new().with_per_page(per_page).with_total_items(total);
            for k in keys {
                let code = match k {
                    0 => KeyCode::Right,
                    1 => KeyCode::Left,
                    2 => KeyCode::Home,
                    _ => KeyCode::End,
                };
                let _ = paginator.update(&key(code));
                prop_assert!(paginator.page() >= 1);
                prop_assert!(paginator.page() <= paginator.page_count().max(1));
                prop_assert!(paginator.window().is_ok());
            }
        }
    }
}
