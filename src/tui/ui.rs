use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, MessageList, QuickActionBar, WelcomePanel};

/// Draw one frame.
///
/// ```text
/// ┌ header (1 row) ──────────────────────────┐
/// │ welcome panel  or  message list          │
/// │ quick actions (empty conversation only)  │
/// └ input box (grows with the draft) ────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let welcome = app.show_welcome();
    let chips_height = if welcome {
        QuickActionBar::calculate_height(app.quick_actions(), area.width)
    } else {
        0
    };
    let input_height = tui.input_box.calculate_height(area.width);

    let [header_area, main_area, chips_area, input_area] = Layout::vertical([
        Length(1),
        Min(0),
        Length(chips_height),
        Length(input_height),
    ])
    .areas(area);

    Header::new(app.language, app.status_message.clone()).render(frame, header_area);

    if welcome {
        WelcomePanel::new(app.language).render(frame, main_area);
        QuickActionBar::new(app.quick_actions(), tui.focus, app.is_typing)
            .render(frame, chips_area);
    } else {
        MessageList::new(
            &mut tui.message_list,
            &app.messages,
            app.is_typing,
            app.language,
            tui.focus,
            tui.anim_frame,
        )
        .render(frame, main_area);
    }

    tui.input_box.render(frame, input_area);
}
