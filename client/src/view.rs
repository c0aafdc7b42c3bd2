//! Rendering surface driven by the page controller

use std::time::Duration;

/// Everything the controller can show or change on the page
///
/// Methods take `&self`; implementations hold their own interior state so the
/// busy guard can borrow the view while a request is in flight.
pub trait PageView {
    /// Replace the visible list with `names`, in order
    fn render_names(&self, names: &[String]);

    fn render_count(&self, count: usize);

    /// Inline message shown in place of the list when loading fails
    fn render_load_error(&self, message: &str);

    /// Blocking message the user must acknowledge
    fn alert(&self, message: &str);

    /// Transient confirmation, dismissed after `duration`
    fn show_notice(&self, message: &str, duration: Duration);

    /// Disable (or re-enable) the input and submit control
    fn set_busy(&self, busy: bool);

    fn clear_input(&self);

    fn focus_input(&self);
}
