//! 屏幕布局
//!
//! One layout pass over the terminal: every focusable element gets a cell
//! rectangle here, and both the navigator (through [`FocusLayout`] /
//! [`FocusSurface`]) and the view read the same geometry.

use couchtube_core::traits::{FocusLayout, FocusSurface};
use couchtube_core::types::{
    aligned_offset, ElementKind, Focusable, NavAction, Rect as Bounds, ScrollOptions,
};
use ratatui::layout::Rect;

pub const SIDEBAR_WIDTH: u16 = 20;
pub const NAV_ITEM_HEIGHT: u16 = 3;
pub const CONTROL_HEIGHT: u16 = 3;
pub const SEARCH_INPUT_WIDTH: u16 = 48;
pub const SEARCH_BUTTON_WIDTH: u16 = 14;
pub const CARD_MIN_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 6;

/// Geometry of the current frame plus the focused marker and scroll.
///
/// The search panel and the card rows share one vertical flow inside the
/// content area: scrolling moves both, so no card ever sits above the panel.
#[derive(Debug, Default)]
pub struct Screen {
    area: Rect,
    sidebar: Rect,
    content: Rect,
    /// Area below the panel when the flow is not scrolled (placeholders).
    grid: Rect,
    search_visible: bool,
    card_count: usize,
    columns: u16,
    card_width: u16,
    /// Flow rows scrolled out at the top.
    scroll: u16,
    elements: Vec<Focusable<ElementKind>>,
    marked: Option<ElementKind>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the layout for `area`.
    ///
    /// The marker is dropped when its element no longer exists; the scroll
    /// is kept but clamped to the new content.
    pub fn layout(&mut self, area: Rect, search_visible: bool, card_count: usize) {
        self.area = area;
        self.search_visible = search_visible;
        self.card_count = card_count;

        let body_height = area.height.saturating_sub(2);
        let sidebar_width = SIDEBAR_WIDTH.min(area.width);
        self.sidebar = Rect::new(area.x, area.y + 1, sidebar_width, body_height);
        self.content = Rect::new(
            area.x + sidebar_width,
            area.y + 1,
            area.width - sidebar_width,
            body_height,
        );

        let inner = self.content_inner();
        let panel = self.panel_height().min(inner.height);
        self.grid = Rect::new(inner.x, inner.y + panel, inner.width, inner.height - panel);
        self.columns = (inner.width / CARD_MIN_WIDTH).max(1);
        self.card_width = inner.width / self.columns;
        self.scroll = self.scroll.min(self.max_scroll());

        self.place();

        if let Some(marked) = self.marked {
            if !self.contains(marked) {
                self.marked = None;
            }
        }
    }

    /// Rebuild element rectangles from the current regions and scroll.
    fn place(&mut self) {
        let mut elements = Vec::with_capacity(NavAction::ALL.len() + 2 + self.card_count);

        let items = self.sidebar_inner();
        for (i, action) in NavAction::ALL.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = items.y + (i as u16) * NAV_ITEM_HEIGHT;
            let rect = Rect::new(items.x, y, items.width, NAV_ITEM_HEIGHT);
            elements.push(Focusable::new(
                ElementKind::NavItem(*action),
                bounds(rect.intersection(items)),
            ));
        }

        let hidden = !self.search_visible;
        for key in [ElementKind::SearchInput, ElementKind::SearchButton] {
            if let Some(slot) = self.slot(key) {
                elements.push(Focusable::new(key, self.flow_bounds(slot)).hidden(hidden));
            }
        }

        for index in 0..self.card_count {
            let key = ElementKind::VideoCard(index);
            if let Some(slot) = self.slot(key) {
                elements.push(Focusable::new(key, self.flow_bounds(slot)));
            }
        }

        self.elements = elements;
    }

    fn sidebar_inner(&self) -> Rect {
        shrink(self.sidebar)
    }

    fn content_inner(&self) -> Rect {
        shrink(self.content)
    }

    fn panel_height(&self) -> u16 {
        if self.search_visible {
            CONTROL_HEIGHT * 2
        } else {
            0
        }
    }

    fn card_row_col(&self, index: usize) -> (usize, usize) {
        let columns = usize::from(self.columns);
        (index / columns, index % columns)
    }

    /// Where `key` sits in the scrolling flow.
    fn slot(&self, key: ElementKind) -> Option<Slot> {
        let inner = self.content_inner();
        match key {
            ElementKind::NavItem(_) => None,
            ElementKind::SearchInput => Some(Slot {
                top: 0,
                x: inner.x,
                width: SEARCH_INPUT_WIDTH.min(inner.width),
                height: CONTROL_HEIGHT,
            }),
            ElementKind::SearchButton => Some(Slot {
                top: u32::from(CONTROL_HEIGHT),
                x: inner.x,
                width: SEARCH_BUTTON_WIDTH.min(inner.width),
                height: CONTROL_HEIGHT,
            }),
            ElementKind::VideoCard(index) => {
                if index >= self.card_count {
                    return None;
                }
                let (row, col) = self.card_row_col(index);
                let top = u32::try_from(row)
                    .ok()?
                    .checked_mul(u32::from(CARD_HEIGHT))?
                    .checked_add(u32::from(self.panel_height()))?;
                let x = inner.x + u16::try_from(col).ok()? * self.card_width;
                Some(Slot {
                    top,
                    x,
                    width: self.card_width,
                    height: CARD_HEIGHT,
                })
            }
        }
    }

    /// Slot rectangle in viewport coordinates; may lie above or below the content.
    fn flow_bounds(&self, slot: Slot) -> Bounds {
        let inner = self.content_inner();
        Bounds::new(
            f64::from(slot.x),
            f64::from(inner.y) + f64::from(slot.top) - f64::from(self.scroll),
            f64::from(slot.width),
            f64::from(slot.height),
        )
    }

    /// Slot rectangle when it is fully inside the content area.
    fn visible_slot(&self, slot: Slot) -> Option<Rect> {
        let inner = self.content_inner();
        let scroll = u32::from(self.scroll);
        let bottom = slot.top + u32::from(slot.height);
        if slot.width == 0 || slot.top < scroll || bottom > scroll + u32::from(inner.height) {
            return None;
        }
        let y = inner.y + u16::try_from(slot.top - scroll).ok()?;
        Some(Rect::new(slot.x, y, slot.width, slot.height))
    }

    fn content_height(&self) -> u32 {
        let rows = self.card_count.div_ceil(usize::from(self.columns.max(1)));
        u32::try_from(rows)
            .unwrap_or(u32::MAX)
            .saturating_mul(u32::from(CARD_HEIGHT))
            .saturating_add(u32::from(self.panel_height()))
    }

    fn max_scroll(&self) -> u16 {
        let overflow = self
            .content_height()
            .saturating_sub(u32::from(self.content_inner().height));
        u16::try_from(overflow).unwrap_or(u16::MAX)
    }

    fn contains(&self, key: ElementKind) -> bool {
        self.elements.iter().any(|e| e.key == key)
    }

    // ===== 供 view 层读取 =====

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn sidebar(&self) -> Rect {
        self.sidebar
    }

    pub fn content(&self) -> Rect {
        self.content
    }

    pub fn grid(&self) -> Rect {
        self.grid
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn marked(&self) -> Option<ElementKind> {
        self.marked
    }

    pub fn is_marked(&self, key: ElementKind) -> bool {
        self.marked == Some(key)
    }

    /// Cell rectangle of an element that is fully on screen.
    pub fn cell_rect(&self, key: ElementKind) -> Option<Rect> {
        match key {
            ElementKind::NavItem(action) => {
                let items = self.sidebar_inner();
                let i = NavAction::ALL.iter().position(|a| *a == action)?;
                let y = items.y + u16::try_from(i).ok()? * NAV_ITEM_HEIGHT;
                let rect =
                    Rect::new(items.x, y, items.width, NAV_ITEM_HEIGHT).intersection(items);
                (!rect.is_empty()).then_some(rect)
            }
            ElementKind::SearchInput | ElementKind::SearchButton if !self.search_visible => None,
            _ => self.visible_slot(self.slot(key)?),
        }
    }

    /// Cards fully visible in the content area, with their cell rectangles.
    pub fn visible_cards(&self) -> Vec<(usize, Rect)> {
        (0..self.card_count)
            .filter_map(|i| self.cell_rect(ElementKind::VideoCard(i)).map(|r| (i, r)))
            .collect()
    }
}

/// Position of an element in the scrolling flow, in rows from its top.
#[derive(Debug, Clone, Copy)]
struct Slot {
    top: u32,
    x: u16,
    width: u16,
    height: u16,
}

fn bounds(rect: Rect) -> Bounds {
    Bounds::new(
        f64::from(rect.x),
        f64::from(rect.y),
        f64::from(rect.width),
        f64::from(rect.height),
    )
}

fn shrink(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

impl FocusLayout<ElementKind> for Screen {
    fn focusables(&self) -> Vec<Focusable<ElementKind>> {
        self.elements.clone()
    }
}

impl FocusSurface<ElementKind> for Screen {
    fn set_marker(&mut self, key: &ElementKind, focused: bool) {
        if !self.contains(*key) {
            return;
        }
        if focused {
            self.marked = Some(*key);
        } else if self.marked == Some(*key) {
            self.marked = None;
        }
    }

    fn scroll_into_view(&mut self, key: &ElementKind, options: ScrollOptions) {
        // 侧边栏固定；内容区只有纵向滚动，卡片列数总是适配宽度
        let scrolls = match key {
            ElementKind::NavItem(_) => false,
            ElementKind::SearchInput | ElementKind::SearchButton => self.search_visible,
            ElementKind::VideoCard(_) => true,
        };
        let Some(slot) = self.slot(*key).filter(|_| scrolls) else {
            return;
        };
        let offset = aligned_offset(
            f64::from(self.scroll),
            f64::from(self.content_inner().height),
            f64::from(slot.top),
            f64::from(slot.height),
            f64::from(self.max_scroll()),
            options.block,
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let offset = offset.round() as u16;
        if offset != self.scroll {
            self.scroll = offset;
            self.place();
        }
    }
}
