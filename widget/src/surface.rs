//! Host-page seam.

/// Minimal view of the host page.
///
/// The widget never touches the page directly: element presence is checked
/// once at initialization, and rendering replaces the results container
/// content wholesale.
pub trait Surface {
    /// Whether `selector` resolves to an element on the page.
    fn has_element(&self, selector: &str) -> bool;

    /// Current value of the query input.
    fn input_value(&self) -> String;

    /// Overwrites the query input value.
    fn set_input_value(&mut self, value: &str);

    /// Replaces the results container content in one assignment.
    fn replace_results(&mut self, markup: &str);
}
