use owo_colors::Style;

/// Terminal colors used by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Blue,
    Red,
    Cyan,
    Gray,
}

impl Color {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "red" => Some(Color::Red),
            "cyan" => Some(Color::Cyan),
            "gray" => Some(Color::Gray),
            _ => None,
        }
    }

    fn style(self) -> Style {
        let style = Style::new();
        match self {
            Color::Green => style.green(),
            Color::Yellow => style.yellow(),
            Color::Blue => style.blue(),
            Color::Red => style.red(),
            Color::Cyan => style.cyan(),
            Color::Gray => style.bright_black(),
        }
    }
}

/// Wrap `text` in the SGR sequence for `color`, terminated by a full reset.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    color.style().style(text).to_string()
}

/// Name-based variant of [`paint`]; unknown names leave the text untouched.
pub fn decorate(text: &str, name: &str, enabled: bool) -> String {
    match Color::from_name(name) {
        Some(color) => paint(text, color, enabled),
        None => text.to_string(),
    }
}
