//! # Core Application Logic
//!
//! This module contains Sahaayak's conversation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No timers.│
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all conversation state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`message`]: Turns and action buttons
//! - [`responses`]: Canned reply tables and the seedable picker
//! - [`recording`]: Voice-input state machine for the input bar
//! - [`capture`]: Microphone device abstraction
//! - [`language`] / [`locale`]: Supported languages and their static text
//! - [`config`]: Layered configuration

pub mod action;
pub mod capture;
pub mod config;
pub mod language;
pub mod locale;
pub mod message;
pub mod recording;
pub mod responses;
pub mod state;
