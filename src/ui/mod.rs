//! Showroom UI - a single-column terminal storefront
//!
//! Layout:
//! ╔══════════════════════════════════════════════╗
//! ║  KYMCO · 车型库                              ║
//! ║  / 搜索车型名称或系列…     [全部] 踏板 街车  ║
//! ║  ▸ LIKE 150     LIKE · 踏板        ¥15800    ║
//! ║    KRV 180 TCS  KRV · 踏板         ¥23800    ║
//! ║    赛艇 S350    赛艇 · 踏板        ¥39800    ║
//! ╠══════════════════════════════════════════════╣
//! ║  1 车型  2 对比  3 顾问 │ ↵ 详情  ␣ 对比  q 退出 ║
//! ╚══════════════════════════════════════════════╝

pub mod helpers;
pub mod render;
pub mod theme;

use crate::advisor::Session;
use crate::catalog::{Catalog, Record};
use crate::compare::CompareSet;
use crate::filter::{self, FilterCriteria};
use crate::view::{View, ViewState};
use std::time::Instant;

pub use render::render;

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    Chat, // Typing into the advisory session
}

/// Spinner animation frames (braille pattern)
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Toast notification kind - affects duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

impl ToastKind {
    /// Duration in seconds before toast expires
    pub fn duration_secs(&self) -> u64 {
        match self {
            ToastKind::Info => 3,
            ToastKind::Error => 8,
        }
    }
}

/// Toast notification
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: &str) -> Self {
        let kind = if message.contains("失败") || message.contains("错误") {
            ToastKind::Error
        } else {
            ToastKind::Info
        };
        Self {
            message: message.to_string(),
            created_at: Instant::now(),
            kind,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.kind.duration_secs()
    }
}

/// Main application state for Showroom
pub struct App {
    // Core data
    pub catalog: Catalog,

    // Core interaction state
    pub criteria: FilterCriteria,
    pub compare: CompareSet,
    pub view: ViewState,
    pub session: Session,

    // UI state
    pub input_mode: InputMode,
    pub list_selected: usize,
    pub chat_scroll: usize,
    pub pending_frame: usize,
    pub toast: Option<Toast>,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            compare: CompareSet::new(),
            view: ViewState::default(),
            session: Session::new(),
            input_mode: InputMode::default(),
            list_selected: 0,
            chat_scroll: 0,
            pending_frame: 0,
            toast: None,
            should_quit: false,
        }
    }

    /// Filtered list, recomputed from the current criteria on every call.
    pub fn filtered(&self) -> Vec<&Record> {
        filter::apply(&self.catalog, &self.criteria)
    }

    /// Navigate via the bottom bar. Focus clears; the input mode follows the
    /// destination (the advisory view owns the keyboard).
    pub fn navigate(&mut self, target: View) {
        self.view.navigate(target);
        self.input_mode = if self.view.view() == View::Advisory {
            InputMode::Chat
        } else {
            InputMode::Normal
        };
    }

    /// Open the detail view for the highlighted list entry, if any.
    pub fn open_selected_detail(&mut self) {
        let id = self
            .filtered()
            .get(self.list_selected)
            .map(|r| r.id.clone());
        if let Some(id) = id {
            self.view.open_detail(id);
            self.input_mode = InputMode::Normal;
        }
    }

    /// Toggle comparison membership for the record under the cursor: the
    /// focused record in the detail view, the highlighted row in the list.
    pub fn toggle_compare_current(&mut self) {
        let id = match self.view.view() {
            View::Detail => self.view.focus().map(str::to_string),
            View::List => self.filtered().get(self.list_selected).map(|r| r.id.clone()),
            _ => None,
        };
        if let Some(id) = id {
            self.compare.toggle(&id);
        }
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len > 0 && self.list_selected + 1 < len {
            self.list_selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.list_selected = self.list_selected.saturating_sub(1);
    }

    /// Clamp the cursor after the filtered list shrinks.
    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if self.list_selected >= len {
            self.list_selected = len.saturating_sub(1);
        }
    }

    pub fn cycle_category(&mut self) {
        self.criteria.category = self.criteria.category.cycle();
        self.clamp_selection();
    }

    pub fn search_push(&mut self, c: char) {
        self.criteria.query.push(c);
        self.clamp_selection();
    }

    pub fn search_pop(&mut self) {
        self.criteria.query.pop();
        self.clamp_selection();
    }

    pub fn exit_search(&mut self) {
        self.criteria.query.clear();
        self.input_mode = InputMode::Normal;
        self.clamp_selection();
    }

    pub fn chat_scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn chat_scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    /// Advance the typing-indicator animation while a reply is in flight.
    pub fn tick_pending(&mut self) {
        if self.session.is_pending() {
            self.pending_frame = self.pending_frame.wrapping_add(1);
        }
    }

    pub fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}
