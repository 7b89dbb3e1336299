use crate::config::DisplayConfig;

/// Box-drawing characters for the scoreboard frame
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub left_junction: String,
    pub right_junction: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            left_junction: "├".to_string(),
            right_junction: "┤".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            left_junction: "+".to_string(),
            right_junction: "+".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

/// Wrap lines in a frame `width` characters wide (inner width, padding excluded).
///
/// Lines equal to `"-"` become a horizontal rule across the frame.
pub fn framed(lines: &[String], width: usize, display: &DisplayConfig) -> String {
    let bc = &display.box_chars;
    let rule = bc.horizontal.repeat(width + 2);
    let mut out = format!("{}{}{}\n", bc.top_left, rule, bc.top_right);
    for line in lines {
        if line == "-" {
            out.push_str(&format!("{}{}{}\n", bc.left_junction, rule, bc.right_junction));
        } else {
            out.push_str(&format!("{} {:<width$} {}\n", bc.vertical, line, bc.vertical, width = width));
        }
    }
    out.push_str(&format!("{}{}{}\n", bc.bottom_left, rule, bc.bottom_right));
    out
}
