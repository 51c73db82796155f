use chrono::{DateTime, Local};
use serde::Serialize;

use super::status::{FieldStatus, FieldValue};
use super::widget::WidgetId;

/// The complete set of [`FieldStatus`] entries for one test session.
///
/// One named field per [`WidgetId`], so the key set is fixed at compile time.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    text: FieldStatus,
    number: FieldStatus,
    range: FieldStatus,
    checkbox: FieldStatus,
    radio: FieldStatus,
    select: FieldStatus,
    textarea: FieldStatus,
    date: FieldStatus,
    color: FieldStatus,
    vertical_scroll: FieldStatus,
    horizontal_scroll: FieldStatus,
    drag: FieldStatus,
    submit: FieldStatus,
}

impl StatusRecord {
    /// Creates a record with every widget untested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the status of one widget.
    pub fn get(&self, widget: WidgetId) -> &FieldStatus {
        match widget {
            WidgetId::Text => &self.text,
            WidgetId::Number => &self.number,
            WidgetId::Range => &self.range,
            WidgetId::Checkbox => &self.checkbox,
            WidgetId::Radio => &self.radio,
            WidgetId::Select => &self.select,
            WidgetId::Textarea => &self.textarea,
            WidgetId::Date => &self.date,
            WidgetId::Color => &self.color,
            WidgetId::VerticalScroll => &self.vertical_scroll,
            WidgetId::HorizontalScroll => &self.horizontal_scroll,
            WidgetId::Drag => &self.drag,
            WidgetId::Submit => &self.submit,
        }
    }

    fn get_mut(&mut self, widget: WidgetId) -> &mut FieldStatus {
        match widget {
            WidgetId::Text => &mut self.text,
            WidgetId::Number => &mut self.number,
            WidgetId::Range => &mut self.range,
            WidgetId::Checkbox => &mut self.checkbox,
            WidgetId::Radio => &mut self.radio,
            WidgetId::Select => &mut self.select,
            WidgetId::Textarea => &mut self.textarea,
            WidgetId::Date => &mut self.date,
            WidgetId::Color => &mut self.color,
            WidgetId::VerticalScroll => &mut self.vertical_scroll,
            WidgetId::HorizontalScroll => &mut self.horizontal_scroll,
            WidgetId::Drag => &mut self.drag,
            WidgetId::Submit => &mut self.submit,
        }
    }

    /// Marks `widget` as tested with `value` at time `at`.
    pub fn mark(&mut self, widget: WidgetId, value: FieldValue, at: DateTime<Local>) {
        self.get_mut(widget).mark_tested(value, at);
    }

    /// Iterates over every widget and its status in form order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &FieldStatus)> {
        WidgetId::all().iter().map(move |&w| (w, self.get(w)))
    }

    /// Iterates over every widget except the scroll regions.
    pub fn standard(&self) -> impl Iterator<Item = (WidgetId, &FieldStatus)> {
        self.iter().filter(|(w, _)| !w.is_scroll())
    }

    /// Iterates over the scroll regions: vertical, then horizontal.
    pub fn scroll(&self) -> impl Iterator<Item = (WidgetId, &FieldStatus)> {
        [WidgetId::VerticalScroll, WidgetId::HorizontalScroll]
            .into_iter()
            .map(move |w| (w, self.get(w)))
    }

    /// Returns the number of widgets that have been exercised.
    pub fn tested_count(&self) -> usize {
        self.iter().filter(|(_, s)| s.tested()).count()
    }
}
