use egui::Vec2;
use log::{debug, info, warn};

use crate::aids::{self, Aid, AidOutcome};
use crate::config::EditorConfig;
use crate::error::{DrawingError, TransitionError};
use crate::event::{EditorEvent, EventBus, EventHandler, Severity};
use crate::geometry::{MultiPolygon, format, hit_testing, path_length, ring_area, ring_bounds};
use crate::input::{EventPropagation, InputEvent, route_event};
use crate::map::MapSurface;
use crate::state::{DrawingSession, ToolKind};
use crate::submission::Record;
use crate::tools::{Tool, ToolContext, ToolType};

/// Live read-out for the vertices under the Draw or Meter tool.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurement {
    pub area_hectares: f64,
    pub perimeter_km: f64,
}

/// Owns the active tool, its drawing session and the map it drives.
///
/// This is the one state container the host keeps; nothing else holds
/// editor state, and every tool handler borrows from here for a single event.
#[derive(Debug)]
pub struct EditorContext<M: MapSurface> {
    tool: ToolType,
    session: DrawingSession,
    map: M,
    config: EditorConfig,
    events: EventBus,
}

impl<M: MapSurface> EditorContext<M> {
    pub fn new(map: M, config: EditorConfig) -> Self {
        Self {
            tool: ToolType::None,
            session: DrawingSession::new(),
            map,
            config,
            events: EventBus::new(),
        }
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool.kind()
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    fn emit_history(&self) {
        self.events.emit(EditorEvent::HistoryChanged {
            can_undo: self.session.history().can_undo(),
            can_redo: self.session.history().can_redo(),
        });
    }

    /// Make `kind` the active tool.
    ///
    /// Refused with a warning toast while the active tool holds unsaved work.
    pub fn select_tool(&mut self, kind: ToolKind) -> Result<(), TransitionError> {
        let active = self.tool.kind();
        if active == kind {
            return Ok(());
        }

        if !active.can_transition_to(kind, &self.session) {
            warn!("Rejected switch from {active} to {kind}: unsaved changes");
            self.events.toast(
                "Unsaved Changes",
                "Please save or cancel your changes or exit the current tool.",
                Severity::Warning,
            );
            self.events.emit(EditorEvent::ToolSwitchRejected {
                active,
                requested: kind,
            });
            return Err(TransitionError::UnsavedChanges {
                active,
                requested: kind,
            });
        }

        self.switch_tool(kind);
        Ok(())
    }

    fn switch_tool(&mut self, kind: ToolKind) {
        let Self {
            tool,
            session,
            map,
            config,
            events,
        } = self;
        let mut ctx = ToolContext {
            session,
            map,
            events,
            config,
        };

        let old = tool.kind();
        tool.on_exit(&mut ctx);
        *tool = ToolType::for_kind(kind);
        ctx.session.begin_tool_session();
        tool.on_enter(&mut ctx);

        info!("Tool changed from {old} to {kind}");
        ctx.events.emit(EditorEvent::ToolChanged { old, new: kind });
    }

    /// Route a map event to the active tool.
    pub fn handle_input(&mut self, event: &InputEvent) -> EventPropagation {
        let Self {
            tool,
            session,
            map,
            config,
            events,
        } = self;
        let mut ctx = ToolContext {
            session,
            map,
            events,
            config,
        };
        route_event(event, tool, &mut ctx)
    }

    /// Commit the active tool's work.
    pub fn save(&mut self) -> Result<(), DrawingError> {
        match self.tool.kind() {
            ToolKind::Draw => {
                if let Err(err) = self.session.close_pending() {
                    warn!("Save rejected: {err}");
                    self.events.toast("Drawing Failed", &err.to_string(), Severity::Error);
                    return Err(err);
                }
            }
            ToolKind::Edit | ToolKind::Delete => {
                if let Err(err) = self.session.save_alterations() {
                    warn!("Save rejected: {err}");
                    self.events.toast("Drawing Failed", &err.to_string(), Severity::Error);
                    return Err(err);
                }
            }
            ToolKind::Meter | ToolKind::None => {
                debug!("Nothing to save under {}", self.tool.kind());
                return Ok(());
            }
        }

        self.session.populate_draft();
        self.session.reset_history();
        self.session.reset_progress();

        let ring_count = self.session.completed().len();
        info!("Saved draft with {ring_count} rings");
        self.events.emit(EditorEvent::DraftSaved { ring_count });
        self.emit_history();
        Ok(())
    }

    /// Drop the active tool's unsaved work.
    pub fn cancel(&mut self) {
        match self.tool.kind() {
            ToolKind::Draw => self.session.reset_history(),
            ToolKind::Edit | ToolKind::Delete => self.session.cancel_alterations(),
            ToolKind::Meter | ToolKind::None => {}
        }
        self.session.reset_progress();
        self.events.emit(EditorEvent::DraftCancelled);
        self.emit_history();
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.session.undo();
        if undone {
            self.emit_history();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.session.redo();
        if redone {
            self.emit_history();
        }
        redone
    }

    /// Leave the active tool unconditionally and start over.
    pub fn exit(&mut self) {
        if self.tool.kind() != ToolKind::None {
            self.switch_tool(ToolKind::None);
        }
        self.session.reset();
        self.map.set_interaction(true);
        self.events.emit(EditorEvent::SessionReset);
    }

    /// Show a previously submitted record's rings as the committed geometry.
    pub fn load_record_geometry(&mut self, rings: MultiPolygon) {
        self.session.load_geometry(rings);
        self.events.emit(EditorEvent::SessionReset);
    }

    /// Load a record preview and bring it into view.
    pub fn load_record(&mut self, record: &Record) {
        self.load_record_geometry(record.geom.clone());
        if let Some(bounds) = record.bounding_box {
            self.map.fly_to_bounds(
                bounds,
                Vec2::from(self.config.fly_padding),
                self.config.fly_duration,
            );
        }
    }

    fn fly_to_ring(&mut self, index: usize) {
        let Some(bounds) = self.session.completed().get(index).and_then(|ring| ring_bounds(ring)) else {
            return;
        };
        self.map.fly_to_bounds(
            bounds,
            Vec2::from(self.config.fly_padding),
            self.config.fly_duration,
        );
        self.events.emit(EditorEvent::PreviewIndexChanged { index });
    }

    /// Cycle the preview to the next completed ring and fly to it.
    pub fn next_ring(&mut self) -> Option<usize> {
        let index = self.session.next_preview()?;
        self.fly_to_ring(index);
        Some(index)
    }

    /// Cycle the preview to the previous completed ring and fly to it.
    pub fn previous_ring(&mut self) -> Option<usize> {
        let index = self.session.previous_preview()?;
        self.fly_to_ring(index);
        Some(index)
    }

    /// Area of the pending vertices as a closed ring, and the distance along them as an open path.
    pub fn measurement(&self) -> Measurement {
        let vertices = self.session.vertices();
        Measurement {
            area_hectares: ring_area(vertices),
            perimeter_km: path_length(vertices),
        }
    }

    /// Radius in metres for vertex markers at the current zoom.
    pub fn vertex_marker_radius(&self) -> f64 {
        hit_testing::vertex_marker_radius(self.map.zoom(), &self.config)
    }

    pub fn scale_label(&self) -> String {
        format::scale_label(self.map.ground_distance(self.config.scale_max_width))
    }

    pub fn available_aids(&self, preview: Option<&Record>) -> Vec<Aid> {
        aids::available_aids(self.tool.kind(), &self.session, preview)
    }

    /// Invoke an aid button. Aids not currently on offer are ignored.
    pub fn apply_aid(&mut self, aid: Aid, preview: Option<&Record>) -> AidOutcome {
        if !self.available_aids(preview).contains(&aid) {
            warn!("Ignoring {} under {}: not available", aid.label(), self.tool.kind());
            return AidOutcome::Ignored;
        }

        let applied = match aid {
            Aid::Submit => return AidOutcome::SubmitRequested,
            Aid::Save => {
                return match self.save() {
                    Ok(()) => AidOutcome::Applied,
                    Err(err) => AidOutcome::Rejected(err),
                };
            }
            Aid::Cancel => {
                self.cancel();
                true
            }
            Aid::Exit => {
                self.exit();
                true
            }
            Aid::Undo => self.undo(),
            Aid::Redo => self.redo(),
            Aid::Previous => self.previous_ring().is_some(),
            Aid::Next => self.next_ring().is_some(),
        };

        if applied {
            AidOutcome::Applied
        } else {
            AidOutcome::Ignored
        }
    }
}
