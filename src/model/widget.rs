use std::fmt;

/// One trackable input widget on the test form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetId {
    #[default]
    Text,
    Number,
    Range,
    Checkbox,
    Radio,
    Select,
    Textarea,
    Date,
    Color,
    VerticalScroll,
    HorizontalScroll,
    Drag,
    Submit,
}

/// Form order: the order widgets are laid out, focused and reported in.
static ALL_WIDGETS: &[WidgetId] = &[
    WidgetId::Text,
    WidgetId::Number,
    WidgetId::Range,
    WidgetId::Checkbox,
    WidgetId::Radio,
    WidgetId::Select,
    WidgetId::Textarea,
    WidgetId::Date,
    WidgetId::Color,
    WidgetId::VerticalScroll,
    WidgetId::HorizontalScroll,
    WidgetId::Drag,
    WidgetId::Submit,
];

impl WidgetId {
    /// Number of tracked widgets.
    pub const COUNT: usize = 13;

    /// Returns every widget in form order.
    pub fn all() -> &'static [WidgetId] {
        ALL_WIDGETS
    }

    /// Position of this widget in [`WidgetId::all`].
    pub fn index(self) -> usize {
        match self {
            Self::Text => 0,
            Self::Number => 1,
            Self::Range => 2,
            Self::Checkbox => 3,
            Self::Radio => 4,
            Self::Select => 5,
            Self::Textarea => 6,
            Self::Date => 7,
            Self::Color => 8,
            Self::VerticalScroll => 9,
            Self::HorizontalScroll => 10,
            Self::Drag => 11,
            Self::Submit => 12,
        }
    }

    /// Stable machine-readable key, used in exported reports.
    pub fn key(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Range => "range",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Date => "date",
            Self::Color => "color",
            Self::VerticalScroll => "verticalScroll",
            Self::HorizontalScroll => "horizontalScroll",
            Self::Drag => "drag",
            Self::Submit => "submit",
        }
    }

    /// Human-readable label shown on the form and the report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::Number => "Number Input",
            Self::Range => "Range Slider",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio Buttons",
            Self::Select => "Select Menu",
            Self::Textarea => "Textarea",
            Self::Date => "Date Picker",
            Self::Color => "Color Picker",
            Self::VerticalScroll => "Vertical Scroll",
            Self::HorizontalScroll => "Horizontal Scroll",
            Self::Drag => "Drag and Drop",
            Self::Submit => "Submit Button",
        }
    }

    /// Returns `true` for the two scroll regions, which the report lists separately.
    pub fn is_scroll(self) -> bool {
        matches!(self, Self::VerticalScroll | Self::HorizontalScroll)
    }

    /// Returns `true` for widgets that accept typed text and summon the virtual keyboard.
    pub fn accepts_text(self) -> bool {
        matches!(self, Self::Text | Self::Number | Self::Textarea)
    }
}

#[mutants::skip]
impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
