//! # Session State
//!
//! Per-run mutable state: the catalog cache, the sale in progress, the
//! logged-in cashier, and the checkout stage machine.
//!
//! ## Checkout Stages
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │   Idle ──submit()──► ReceiptPending ──confirm()──► Idle      │
//! │     ▲                      │                                 │
//! │     └──────cancel()────────┘                                 │
//! │                                                              │
//! │  Recording happens only on confirm; cancel keeps the cart    │
//! │  and cash untouched so the operator can keep editing.        │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};

use crate::presentation::{FeedbackSound, Presentation, ReceiptPreview};
use crate::state::ConfigState;
use tally_core::cart::CartItem;
use tally_core::{Cart, Product, Register, User};
use tally_store::Store;

/// A receipt built at submit time, awaiting the operator's confirm or
/// cancel. Everything on it is frozen: re-submitting after an edit
/// builds a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReceipt {
    pub receipt_no: String,
    pub date: String,
    pub recorded_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub total_minor: i64,
    pub cash_minor: i64,
    pub change_minor: i64,
}

impl PendingReceipt {
    /// Builds the render payload for the host shell.
    pub fn preview(&self, config: &ConfigState) -> ReceiptPreview {
        ReceiptPreview {
            store_name: config.store_name.clone(),
            receipt_no: self.receipt_no.clone(),
            date: self.date.clone(),
            items: self.items.clone(),
            total_minor: self.total_minor,
            cash_minor: self.cash_minor,
            change_minor: self.change_minor,
        }
    }
}

/// Which screen the host shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Catalog, cart, and cash entry.
    #[default]
    Register,

    /// Recorded sale history.
    SalesHistory,
}

/// Where the current sale is within checkout.
#[derive(Debug, Clone, Default)]
pub enum CheckoutStage {
    /// Editing the cart and cash freely.
    #[default]
    Idle,

    /// A receipt is on screen, awaiting confirm or cancel.
    ReceiptPending(PendingReceipt),
}

/// Mutable per-run state.
#[derive(Debug, Default)]
pub struct Session {
    /// In-memory catalog cache, refreshed after every catalog write.
    pub products: Vec<Product>,

    /// Current catalog filter keyword.
    pub keyword: String,

    /// The sale in progress.
    pub cart: Cart,

    /// Cash tendered and derived change for the sale in progress.
    pub register: Register,

    /// The cashier who passed the login gate, if any.
    pub current_user: Option<User>,

    /// Checkout stage machine.
    pub stage: CheckoutStage,

    /// Which screen the host is showing.
    pub active_view: ActiveView,
}

impl Session {
    /// Creates a fresh logged-out session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Whether a cashier has logged in.
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Clears the sale in progress: cart, cash, and checkout stage.
    /// The catalog cache and the login survive.
    pub fn reset_sale(&mut self) {
        self.cart.clear();
        self.register.clear();
        self.stage = CheckoutStage::Idle;
    }
}

/// Everything a command needs: the store adapter, static config, the
/// session, and the presentation backend.
pub struct AppContext {
    pub store: Store,
    pub config: ConfigState,
    pub session: Session,
    presentation: Box<dyn Presentation>,
}

impl AppContext {
    /// Assembles an application context.
    pub fn new(store: Store, config: ConfigState, presentation: Box<dyn Presentation>) -> Self {
        AppContext {
            store,
            config,
            session: Session::new(),
            presentation,
        }
    }

    /// The presentation backend.
    pub fn presentation(&self) -> &dyn Presentation {
        self.presentation.as_ref()
    }

    /// Plays an audio cue, honoring the sound toggle.
    pub fn play(&self, sound: FeedbackSound) {
        if self.config.sound_enabled {
            self.presentation.play(sound);
        }
    }
}
