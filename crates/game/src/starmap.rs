//! Galaxy map interaction: pan, zoom and system selection as discrete commands.
//!
//! Input wiring turns raw pointer events into [`MapCommand`]s; the map only
//! ever sees commands, so it can be driven from tests or replays the same way.

use engine_core::{DVec2, SpatialPicker, Viewport};
use procgen::{Galaxy, StarSystem};

/// One pointer gesture on the galaxy map, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapCommand {
    /// Start panning with the pointer at this position.
    BeginDrag(DVec2),
    /// Pointer moved while panning.
    Drag(DVec2),
    EndDrag,
    /// Mouse wheel at `at`; positive `delta_y` zooms out.
    Wheel { at: DVec2, delta_y: f64 },
    /// Select whatever is under the pointer (or clear the selection).
    Click(DVec2),
    /// Pointer moved without a button held.
    Hover(DVec2),
}

/// What a command changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// Selection was set (or cleared).
    Selected(Option<usize>),
    /// System under the pointer, for cursor feedback.
    Hovering(Option<usize>),
    ViewChanged,
    None,
}

/// The galaxy as shown on the map.
#[derive(Debug, Clone)]
pub struct StarMap {
    galaxy: Galaxy,
    viewport: Viewport,
    picker: SpatialPicker,
    /// Pointer minus offset at drag start, while panning.
    drag_anchor: Option<DVec2>,
}

impl StarMap {
    pub fn new(galaxy: Galaxy, viewport: Viewport, picker: SpatialPicker) -> Self {
        Self {
            galaxy,
            viewport,
            picker,
            drag_anchor: None,
        }
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn galaxy_mut(&mut self) -> &mut Galaxy {
        &mut self.galaxy
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// System under a canvas position, if any.
    pub fn system_at(&self, screen: DVec2) -> Option<usize> {
        self.picker.pick(&self.viewport, screen, self.galaxy.systems())
    }

    /// Canvas position of a system.
    pub fn screen_position(&self, system: &StarSystem) -> DVec2 {
        self.viewport.world_to_screen(system.position)
    }

    /// Apply one input command.
    pub fn apply(&mut self, command: MapCommand) -> MapEvent {
        match command {
            MapCommand::BeginDrag(at) => {
                self.drag_anchor = Some(at - self.viewport.offset());
                MapEvent::None
            }
            MapCommand::Drag(at) => match self.drag_anchor {
                Some(anchor) => {
                    self.viewport.set_offset(at - anchor);
                    MapEvent::ViewChanged
                }
                None => MapEvent::None,
            },
            MapCommand::EndDrag => {
                self.drag_anchor = None;
                MapEvent::None
            }
            MapCommand::Wheel { at, delta_y } => {
                self.viewport.zoom_by_wheel(at, delta_y);
                MapEvent::ViewChanged
            }
            MapCommand::Click(at) => {
                let hit = self.system_at(at);
                self.galaxy.select(hit);
                if let Some(i) = hit {
                    log::debug!("Selected system {}", self.galaxy.systems()[i].name);
                }
                MapEvent::Selected(hit)
            }
            MapCommand::Hover(at) => {
                if self.is_dragging() {
                    return self.apply(MapCommand::Drag(at));
                }
                MapEvent::Hovering(self.system_at(at))
            }
        }
    }
}
