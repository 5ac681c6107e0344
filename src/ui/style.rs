use crossterm::style::Stylize;

use crate::domain::entities::StatusTone;
use crate::ui::theme;

/// Semantic tint; maps onto the five theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl From<StatusTone> for Tint {
    fn from(tone: StatusTone) -> Self {
        match tone {
            StatusTone::Pending => Tint::Dim,
            StatusTone::Success => Tint::Success,
            StatusTone::Failure => Tint::Error,
        }
    }
}

/// Colour `text` when `color` is on, otherwise return it unchanged
pub fn paint(text: &str, tint: Tint, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let c = match tint {
        Tint::Success => theme::colors::SUCCESS,
        Tint::Error => theme::colors::ERROR,
        Tint::Warning => theme::colors::WARNING,
        Tint::Info => theme::colors::INFO,
        Tint::Dim => theme::colors::DIM,
    };
    format!("{}", text.with(c))
}

pub fn bold(text: &str, color: bool) -> String {
    if color {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}
