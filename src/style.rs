//! Terminal styling utilities
//!
//! Consistent color scheme for passenger listings.
//! Uses crossterm for cross-platform terminal colors.

use crossterm::style::{StyledContent, Stylize};

/// Flight/group header
pub fn group_header(name: &str) -> StyledContent<String> {
    format!("Flight: {}", name).cyan().bold()
}

/// Seat code, or a dim placeholder when the passenger has none
pub fn seat(seat: &str) -> StyledContent<String> {
    if seat.is_empty() {
        "Sem assento".to_string().dark_grey()
    } else {
        seat.to_string().green()
    }
}

/// Field labels in expanded details
pub fn label(text: &str) -> StyledContent<String> {
    text.to_string().yellow()
}

/// Result count line
/// - Zero: Dim
/// - Positive: White/bold
pub fn count_line(n: usize, text: &str) -> StyledContent<String> {
    if n == 0 {
        text.to_string().dark_grey()
    } else {
        text.to_string().bold()
    }
}

/// Section headers
pub fn header(text: &str) -> StyledContent<String> {
    text.to_string().bold()
}

/// Dim/muted text
pub fn dim(text: &str) -> StyledContent<String> {
    text.to_string().dark_grey()
}

/// Success text
pub fn success(text: &str) -> StyledContent<String> {
    text.to_string().green()
}

/// Warning text
pub fn warning(text: &str) -> StyledContent<String> {
    text.to_string().yellow()
}

/// Error text
pub fn error(text: &str) -> StyledContent<String> {
    text.to_string().red()
}

/// Path styling
pub fn path(p: &str) -> StyledContent<String> {
    p.to_string().blue()
}

/// Render styled content, or just its text when color is off
pub fn paint(styled: StyledContent<String>, color: bool) -> String {
    if color {
        styled.to_string()
    } else {
        styled.content().clone()
    }
}
