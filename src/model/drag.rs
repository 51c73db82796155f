use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value recorded when a free-drag gesture completes.
pub const DRAGGED_MESSAGE: &str = "Element dragged";

/// An in-progress pointer drag: where on the element it was grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gesture {
    grab_dx: i32,
    grab_dy: i32,
}

/// A single element that can be dragged freely inside a container.
///
/// Coordinates are cells relative to the container's top-left corner. The
/// element always stays fully inside the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeDrag {
    x: u16,
    y: u16,
    container: (u16, u16),
    element: (u16, u16),
    gesture: Option<Gesture>,
}

impl FreeDrag {
    /// Creates an element of size `element` at the container origin.
    pub fn new(container: (u16, u16), element: (u16, u16)) -> Self {
        Self {
            x: 0,
            y: 0,
            container,
            element,
            gesture: None,
        }
    }

    /// Element top-left position.
    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Element size.
    pub fn element_size(&self) -> (u16, u16) {
        self.element
    }

    /// Returns `true` while a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    fn max_x(&self) -> u16 {
        self.container.0.saturating_sub(self.element.0)
    }

    fn max_y(&self) -> u16 {
        self.container.1.saturating_sub(self.element.1)
    }

    fn contains(&self, px: i32, py: i32) -> bool {
        let (x, y) = (i32::from(self.x), i32::from(self.y));
        px >= x
            && px < x + i32::from(self.element.0)
            && py >= y
            && py < y + i32::from(self.element.1)
    }

    /// Resizes the container and pulls the element back inside it.
    pub fn resize(&mut self, container: (u16, u16)) {
        self.container = container;
        self.x = self.x.min(self.max_x());
        self.y = self.y.min(self.max_y());
    }

    /// Starts a gesture if the pointer is on the element. Returns `true` if one started.
    pub fn begin(&mut self, px: i32, py: i32) -> bool {
        if !self.contains(px, py) {
            return false;
        }
        self.gesture = Some(Gesture {
            grab_dx: px - i32::from(self.x),
            grab_dy: py - i32::from(self.y),
        });
        true
    }

    /// Follows the pointer during a gesture. No-op when no gesture is active.
    pub fn move_to(&mut self, px: i32, py: i32) {
        let Some(gesture) = self.gesture else {
            return;
        };
        self.x = clamp_axis(px - gesture.grab_dx, self.max_x());
        self.y = clamp_axis(py - gesture.grab_dy, self.max_y());
    }

    /// Ends the gesture. Returns `true` if one was active.
    pub fn end(&mut self) -> bool {
        self.gesture.take().is_some()
    }

    /// Abandons any gesture without completing it.
    pub fn cancel(&mut self) {
        self.gesture = None;
    }

    /// Moves the element by a keyboard step, clamped to the container.
    pub fn nudge(&mut self, dx: i32, dy: i32) {
        self.x = clamp_axis(i32::from(self.x) + dx, self.max_x());
        self.y = clamp_axis(i32::from(self.y) + dy, self.max_y());
    }
}

fn clamp_axis(value: i32, max: u16) -> u16 {
    u16::try_from(value.clamp(0, i32::from(max))).unwrap_or(0)
}

/// Errors from a swap-grid drop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("invalid drag payload: {0}")]
    InvalidPayload(String),
    #[error("no item with id {0}")]
    UnknownItem(String),
    #[error("no slot at position {0}")]
    InvalidSlot(u8),
}

/// The serialised description of the item being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub id: String,
    pub position: u8,
}

/// An item in the swap grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    pub id: String,
    pub position: u8,
}

/// Number of slots in the swap grid.
pub const GRID_SLOTS: u8 = 4;

/// A 2×2 grid of slots, each holding one item; dropping an item on another
/// slot swaps the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapGrid {
    items: Vec<GridItem>,
    payload: Option<String>,
}

impl Default for SwapGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapGrid {
    /// Creates the grid with item N in slot N.
    pub fn new() -> Self {
        let items = (1..=GRID_SLOTS)
            .map(|n| GridItem {
                id: n.to_string(),
                position: n,
            })
            .collect();
        Self {
            items,
            payload: None,
        }
    }

    /// Returns the item currently in `position`.
    pub fn item_at(&self, position: u8) -> Option<&GridItem> {
        self.items.iter().find(|i| i.position == position)
    }

    /// Returns `true` while an item is being carried.
    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    /// Picks up the item in `position`, storing its serialised payload.
    /// Returns `false` if the slot is empty or out of range.
    pub fn begin(&mut self, position: u8) -> bool {
        let Some(item) = self.item_at(position) else {
            return false;
        };
        let payload = DragPayload {
            id: item.id.clone(),
            position: item.position,
        };
        self.payload = serde_json::to_string(&payload).ok();
        self.payload.is_some()
    }

    /// Releases the carried item over `target`, if any is being carried.
    pub fn end(&mut self, target: Option<u8>) -> Result<Option<String>, DragError> {
        let Some(payload) = self.payload.take() else {
            return Ok(None);
        };
        match target {
            Some(target) => self.drop_payload(&payload, target),
            None => Ok(None),
        }
    }

    /// Abandons any carried item.
    pub fn cancel(&mut self) {
        self.payload = None;
    }

    /// Applies a drop of the serialised `payload` onto slot `target`.
    ///
    /// Returns the swap description when two items changed places, `None`
    /// when the item was dropped back on its own slot. On error the grid is
    /// unchanged.
    pub fn drop_payload(&mut self, payload: &str, target: u8) -> Result<Option<String>, DragError> {
        let dragged: DragPayload = serde_json::from_str(payload)
            .map_err(|e| DragError::InvalidPayload(e.to_string()))?;
        if !(1..=GRID_SLOTS).contains(&target) {
            return Err(DragError::InvalidSlot(target));
        }
        if !self.items.iter().any(|i| i.id == dragged.id) {
            return Err(DragError::UnknownItem(dragged.id));
        }
        if dragged.position == target {
            return Ok(None);
        }

        for item in &mut self.items {
            if item.id == dragged.id {
                item.position = target;
            } else if item.position == target {
                item.position = dragged.position;
            }
        }
        Ok(Some(format!(
            "Swapped: Item {} ({} → {})",
            dragged.id, dragged.position, target
        )))
    }
}
