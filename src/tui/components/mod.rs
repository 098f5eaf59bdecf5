//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props and are rebuilt every frame:
//! - `Header`: Brand, tagline, status and language selector
//! - `WelcomePanel`: Onboarding text for an empty conversation
//! - `QuickActionBar`: Suggested first questions as chips
//! - `MessageBubble`: One conversation turn with its action buttons
//! - `TypingIndicator`: Animated dots while a reply is pending
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit events:
//! - `InputBox`: Draft editor with voice recording
//! - `MessageList`: Scrollable conversation view with layout caching
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! Header::new(app.language, app.status_message.clone()).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── chips.rs             (chip layout shared by quick actions and buttons)
//! ├── header.rs            (top bar)
//! ├── welcome.rs           (empty-conversation panel)
//! ├── quick_actions.rs     (suggested questions)
//! ├── message.rs           (single bubble)
//! ├── typing_indicator.rs  (pending reply animation)
//! ├── message_list.rs      (scrollable container)
//! └── input_box/           (draft editor + recording)
//! ```

pub mod chips;
pub mod header;
pub mod input_box;
pub mod message;
pub mod message_list;
pub mod quick_actions;
pub mod typing_indicator;
pub mod welcome;

pub use header::Header;
pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use quick_actions::QuickActionBar;
pub use welcome::WelcomePanel;
