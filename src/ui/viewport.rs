//! Viewport: Input-Handling (Maus → AppIntent) und Painter-Darstellung.
//!
//! Die Szene wird top-down auf die XY-Ebene projiziert und mit dem
//! egui-Painter gezeichnet. Der Input-Zustand verwaltet Drag-Modi
//! (Kamera-Pan, Selektion-Move, Rechteck-Selektion) über Frame-Grenzen.

use std::collections::HashSet;

use glam::Vec2;

use crate::app::{AppIntent, AppState, EditorTool};
use crate::core::{Camera2D, Scene};
use crate::shared::EditorOptions;

use super::keyboard;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PrimaryDragMode {
    #[default]
    None,
    SelectionMove,
    CameraPan,
}

/// Laufende Rechteck-Selektion (Shift + Drag).
#[derive(Debug, Clone, Copy)]
struct DragSelection {
    start_screen: egui::Pos2,
    current_screen: egui::Pos2,
    additive: bool,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
struct ViewportContext<'a> {
    ui: &'a egui::Ui,
    response: &'a egui::Response,
    viewport_size: [f32; 2],
    camera: &'a Camera2D,
    scene: &'a Scene,
    selected_object_ids: &'a HashSet<u64>,
    active_tool: EditorTool,
    options: &'a EditorOptions,
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Selektion, Scroll)
#[derive(Default)]
pub struct InputState {
    primary_drag_mode: PrimaryDragMode,
    drag_selection: Option<DragSelection>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        state: &AppState,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera: &state.view.camera,
            scene: &state.scene,
            selected_object_ids: &state.selection.selected_object_ids,
            active_tool: state.editor.active_tool,
            options: &state.options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(
            ui,
            &state.selection.selected_object_ids,
            state.selection.is_empty(),
            state.editor.active_tool,
        ));

        let modifiers = ui.input(|i| i.modifiers);

        self.handle_drag_start(&ctx, modifiers, &mut events);
        self.handle_drag_update(&ctx);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, modifiers, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        self.draw_drag_selection_overlay(ui);

        events
    }

    fn handle_drag_start(
        &mut self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };

        if modifiers.shift {
            self.drag_selection = Some(DragSelection {
                start_screen: pointer_pos,
                current_screen: pointer_pos,
                additive: modifiers.command,
            });
            return;
        }

        // Drag auf einem selektierten Objekt startet den Move-Lifecycle,
        // sonst Kamera-Pan
        let world_pos = screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
        let pick_radius = ctx.camera.pick_radius_world(
            ctx.viewport_size[1],
            ctx.options.selection_pick_radius_px * ctx.options.selection_size_factor,
        );

        let over_selected = ctx
            .scene
            .nearest_object(world_pos)
            .filter(|hit| hit.distance <= pick_radius)
            .map(|hit| ctx.selected_object_ids.contains(&hit.object_id))
            .unwrap_or(false);

        if ctx.active_tool == EditorTool::Select && over_selected {
            self.primary_drag_mode = PrimaryDragMode::SelectionMove;
            events.push(AppIntent::BeginMoveSelectedRequested);
        } else {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
        }
    }

    fn handle_drag_update(&mut self, ctx: &ViewportContext) {
        if let Some(drag) = self.drag_selection.as_mut() {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                drag.current_screen = pointer_pos;
            }
        }
    }

    fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if let Some(drag) = self.drag_selection.take() {
            let a = screen_pos_to_world(drag.start_screen, ctx.response, ctx.viewport_size, ctx.camera);
            let b = screen_pos_to_world(
                drag.current_screen,
                ctx.response,
                ctx.viewport_size,
                ctx.camera,
            );
            events.push(AppIntent::SelectObjectsInRectRequested {
                min: a.min(b),
                max: a.max(b),
                additive: drag.additive,
            });
        } else if self.primary_drag_mode == PrimaryDragMode::SelectionMove {
            events.push(AppIntent::EndMoveSelectedRequested);
        }

        self.primary_drag_mode = PrimaryDragMode::None;
    }

    fn handle_clicks(
        &self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.clicked() {
            return;
        }
        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };

        let world_pos = screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);

        match ctx.active_tool {
            EditorTool::Select => events.push(AppIntent::ObjectPickRequested {
                world_pos,
                additive: modifiers.command,
            }),
            EditorTool::Place => events.push(AppIntent::PlaceObjectRequested { world_pos }),
        }
    }

    fn handle_pointer_delta(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let wpp = ctx.camera.world_per_pixel(ctx.viewport_size[1]);

        if self.drag_selection.is_some() {
            // Während Drag-Selektion keine Pan/Move-Events senden.
        } else if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::SelectionMove if !ctx.selected_object_ids.is_empty() => {
                    events.push(AppIntent::MoveSelectedRequested {
                        delta_world: Vec2::new(pointer_delta.x * wpp, pointer_delta.y * wpp),
                    });
                }
                PrimaryDragMode::CameraPan | PrimaryDragMode::None => {
                    events.push(AppIntent::CameraPan {
                        delta: Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
                    });
                }
                PrimaryDragMode::SelectionMove => {}
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPan {
                delta: Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
            });
        }
    }

    fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = ctx.options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };
        let focus_world = ctx
            .response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera));
        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }

    fn draw_drag_selection_overlay(&self, ui: &egui::Ui) {
        if let Some(drag) = self.drag_selection.as_ref() {
            let rect = egui::Rect::from_two_pos(drag.start_screen, drag.current_screen);
            ui.painter().rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, egui::Color32::LIGHT_BLUE),
                egui::StrokeKind::Inside,
            );
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_rgba_unmultiplied(80, 160, 255, 24));
        }
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        Vec2::new(local.x, local.y),
        Vec2::new(viewport_size[0], viewport_size[1]),
    )
}

/// Rechnet eine Weltposition in eine Bildschirmposition innerhalb des Viewports um.
fn world_to_screen_pos(world: Vec2, rect: egui::Rect, camera: &Camera2D) -> egui::Pos2 {
    let size = Vec2::new(rect.width(), rect.height());
    let screen = camera.world_to_screen(world, size);
    rect.min + egui::vec2(screen.x, screen.y)
}

/// Konvertiert eine RGBA-Farbe aus den Optionen in `egui::Color32`.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Zeichnet die Szene in den Viewport (Top-Down-Projektion).
pub fn draw_scene(ui: &egui::Ui, rect: egui::Rect, state: &AppState) {
    let painter = ui.painter_at(rect);
    let camera = &state.view.camera;
    let options = &state.options;
    let wpp = camera.world_per_pixel(rect.height().max(1.0));
    let px = |world_units: f32| (world_units / wpp).max(1.0);

    // Kabel zuerst, damit Masten darüber liegen
    for assembly in state.scene.assemblies.values() {
        let selected = state
            .selection
            .selected_assembly_ids
            .contains(&assembly.id);
        let color = if selected {
            color32(options.cable_color_selected)
        } else {
            color32(options.cable_color_default)
        };
        let stroke = egui::Stroke::new(px(options.cable_thickness_world), color);

        for span in &assembly.spans {
            let screen_points: Vec<egui::Pos2> = span
                .points
                .iter()
                .map(|point| {
                    world_to_screen_pos(
                        Vec2::new(point.position.x, point.position.y),
                        rect,
                        camera,
                    )
                })
                .collect();
            painter.add(egui::Shape::line(screen_points, stroke));
        }
    }

    for object in state.scene.objects.values() {
        let selected = state.selection.selected_object_ids.contains(&object.id);
        let (color, radius_world) = if selected {
            (
                color32(options.object_color_selected),
                options.object_radius_world * options.selection_size_factor,
            )
        } else {
            (color32(options.object_color_default), options.object_radius_world)
        };

        let center = world_to_screen_pos(object.ground_position(), rect, camera);
        painter.circle_filled(center, px(radius_world), color);

        // Socket-Markierungen (nur bei ausreichendem Zoom sichtbar)
        if let Some(asset) = state.mesh_library.get(&object.mesh_id) {
            let socket_radius = px(options.socket_radius_world);
            if socket_radius >= 2.0 {
                for socket in &asset.sockets {
                    let world = object.socket_world_position(socket);
                    let pos = world_to_screen_pos(Vec2::new(world.x, world.y), rect, camera);
                    painter.circle_filled(pos, socket_radius, color32(options.socket_color));
                }
            }
        }
    }

    if state.scene.objects.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Keine Masten platziert. Werkzeug 'Mast platzieren' (2) wählen",
            egui::FontId::proportional(20.0),
            egui::Color32::WHITE,
        );
    }
}
