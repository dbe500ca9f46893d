//! Use-Cases für Kamera und Viewport.

use crate::app::AppState;
use crate::core::Camera2D;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera2D::new();
}

/// Zoomt stufenweise hinein (Menü-Button / Shortcut).
pub fn zoom_in(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    zoom_towards(state, step, None);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    zoom_towards(state, 1.0 / step, None);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
///
/// Mit Fokuspunkt bleibt der Punkt unter dem Mauszeiger stehen: die
/// Kameraposition wird so nachgeführt, dass sich nur der Maßstab ändert.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    let camera = &mut state.view.camera;
    let zoom_old = camera.zoom;
    let zoom_new = (zoom_old * factor).clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);

    if let Some(focus) = focus_world {
        camera.position = focus + (camera.position - focus) * (zoom_old / zoom_new);
    }
    camera.zoom = zoom_new;
}

/// Zentriert die Kamera auf den Schwerpunkt der selektierten Objekte.
///
/// Ohne selektierte Objekte bleibt die Kamera unverändert. Der Zoom wird
/// nicht angepasst, nur die Position.
pub fn focus_selection(state: &mut AppState) {
    let positions: Vec<glam::Vec2> = state
        .selection
        .selected_object_ids
        .iter()
        .filter_map(|id| state.scene.objects.get(id))
        .map(|object| object.ground_position())
        .collect();

    if positions.is_empty() {
        return;
    }

    let centroid = positions.iter().copied().sum::<glam::Vec2>() / positions.len() as f32;
    state.view.camera.look_at(centroid);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn resize_viewport(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn zoom_towards_keeps_focus_point_fixed() {
        let mut state = AppState::new();
        state.view.camera.position = Vec2::new(10.0, 10.0);
        let focus = Vec2::new(50.0, 20.0);
        let screen_size = Vec2::new(800.0, 600.0);

        let screen_before = state.view.camera.world_to_screen(focus, screen_size);
        zoom_towards(&mut state, 2.0, Some(focus));
        let screen_after = state.view.camera.world_to_screen(focus, screen_size);

        assert_relative_eq!(screen_before.x, screen_after.x, epsilon = 1e-3);
        assert_relative_eq!(screen_before.y, screen_after.y, epsilon = 1e-3);
        assert_relative_eq!(state.view.camera.zoom, 2.0);
    }

    #[test]
    fn zoom_respects_configured_limits() {
        let mut state = AppState::new();
        zoom_towards(&mut state, 1e6, None);
        assert_relative_eq!(state.view.camera.zoom, state.options.camera_zoom_max);

        zoom_towards(&mut state, 1e-9, None);
        assert_relative_eq!(state.view.camera.zoom, state.options.camera_zoom_min);
    }

    #[test]
    fn focus_selection_centers_on_centroid() {
        let mut scene = crate::core::Scene::new();
        let a = scene.spawn_object("mast_holz", glam::Vec3::new(0.0, 0.0, 0.0));
        let b = scene.spawn_object("mast_holz", glam::Vec3::new(40.0, 20.0, 0.0));

        let mut state = AppState::new();
        state.scene = std::sync::Arc::new(scene);
        state.selection.selected_object_ids.insert(a);
        state.selection.selected_object_ids.insert(b);

        focus_selection(&mut state);

        assert_relative_eq!(state.view.camera.position.x, 20.0);
        assert_relative_eq!(state.view.camera.position.y, 10.0);
    }

    #[test]
    fn focus_selection_without_objects_is_a_noop() {
        let mut state = AppState::new();
        state.view.camera.position = Vec2::new(5.0, -3.0);

        focus_selection(&mut state);

        assert_eq!(state.view.camera.position, Vec2::new(5.0, -3.0));
    }

    #[test]
    fn reset_restores_default_camera() {
        let mut state = AppState::new();
        state.view.camera.position = Vec2::new(99.0, -42.0);
        state.view.camera.zoom = 7.0;

        reset_camera(&mut state);

        assert_eq!(state.view.camera.position, Vec2::ZERO);
        assert_relative_eq!(state.view.camera.zoom, 1.0);
    }
}
