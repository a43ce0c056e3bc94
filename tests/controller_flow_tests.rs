use approx::assert_abs_diff_eq;
use curve_sandbox::{AppCommand, AppController, AppIntent, AppState, SandboxOptions, SceneObject};
use glam::Vec2;

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::ViewportClicked {
                pixel: Vec2::new(x, y),
            },
        )
        .expect("ViewportClicked sollte ohne Fehler durchlaufen");
}

fn frame(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::FrameStarted)
        .expect("FrameStarted sollte ohne Fehler durchlaufen");
}

fn point_positions(state: &AppState) -> Vec<Vec2> {
    state
        .session
        .objects()
        .iter()
        .filter_map(SceneObject::as_point)
        .map(|p| p.position)
        .collect()
}

fn temp_config_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "curve_sandbox_flow_{}_{}.toml",
        name,
        std::process::id()
    ))
}

#[test]
fn test_click_is_deferred_until_frame_started() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 374.0, 374.0);
    assert_eq!(state.object_count(), 0);
    assert_eq!(state.pending_clicks.len(), 1);

    frame(&mut controller, &mut state);
    assert_eq!(state.object_count(), 1);
    assert!(state.pending_clicks.is_empty());

    let center = point_positions(&state)[0];
    assert_abs_diff_eq!(center.x, 374.0 * (20.0 / 749.0) - 10.0, epsilon = 1e-5);
    assert_abs_diff_eq!(center.y, 10.0 - 374.0 * (20.0 / 749.0), epsilon = 1e-5);
}

#[test]
fn test_three_clicks_across_frames_generate_curves() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for (x, y) in [(374.0, 374.0), (0.0, 0.0), (749.0, 0.0)] {
        click(&mut controller, &mut state, x, y);
        frame(&mut controller, &mut state);
    }

    let objects = state.session.objects();
    assert_eq!(objects.len(), 3 + 1 + 3 + 1);

    let corners: Vec<Vec2> = objects[..3]
        .iter()
        .filter_map(SceneObject::as_point)
        .map(|p| p.position)
        .collect();
    assert_eq!(corners.len(), 3);
    assert_abs_diff_eq!(corners[1].x, -10.0, epsilon = 1e-5);
    assert_abs_diff_eq!(corners[1].y, 10.0, epsilon = 1e-5);
    assert_abs_diff_eq!(corners[2].x, 10.0, epsilon = 1e-5);
    assert_abs_diff_eq!(corners[2].y, 10.0, epsilon = 1e-5);

    let raw = objects[3].as_curve().expect("Index 3 sollte die Kurve sein");
    assert!((100..=101).contains(&raw.samples.len()));
    assert_eq!(raw.samples[0], corners[0]);

    // Verschobene Kontrollpunkte
    for (i, original) in corners.iter().enumerate() {
        let moved = objects[4 + i]
            .as_point()
            .expect("Indizes 4..7 sollten verschobene Punkte sein");
        assert_abs_diff_eq!(moved.position.x, original.x + 3.0, epsilon = 1e-5);
        assert_abs_diff_eq!(moved.position.y, original.y - 3.0, epsilon = 1e-5);
    }

    let translated = objects[7]
        .as_curve()
        .expect("Index 7 sollte die verschobene Kurve sein");
    assert_eq!(translated.samples.len(), raw.samples.len());
}

#[test]
fn test_fourth_click_resets_full_list() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for (x, y) in [(374.0, 374.0), (0.0, 0.0), (749.0, 0.0)] {
        click(&mut controller, &mut state, x, y);
        frame(&mut controller, &mut state);
    }
    assert_eq!(state.object_count(), 8);

    click(&mut controller, &mut state, 0.0, 749.0);
    frame(&mut controller, &mut state);

    assert_eq!(state.object_count(), 1);
    let only = point_positions(&state)[0];
    assert_abs_diff_eq!(only.x, -10.0, epsilon = 1e-5);
    assert_abs_diff_eq!(only.y, -10.0, epsilon = 1e-5);
}

#[test]
fn test_clicks_in_one_frame_are_processed_last_first() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 749.0, 0.0);
    frame(&mut controller, &mut state);

    let points = point_positions(&state);
    assert_eq!(points.len(), 2);
    assert_abs_diff_eq!(points[0].x, 10.0, epsilon = 1e-5);
    assert_abs_diff_eq!(points[1].x, -10.0, epsilon = 1e-5);
}

#[test]
fn test_three_clicks_in_one_frame_generate_curves_in_same_frame() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for (x, y) in [(0.0, 0.0), (374.0, 374.0), (749.0, 0.0)] {
        click(&mut controller, &mut state, x, y);
    }
    frame(&mut controller, &mut state);

    assert_eq!(state.object_count(), 8);
    assert!(state.session.objects()[3].as_curve().is_some());
}

#[test]
fn test_clean_requested_empties_session() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 20.0, 20.0);
    frame(&mut controller, &mut state);
    assert_eq!(state.object_count(), 2);

    controller
        .handle_intent(&mut state, AppIntent::CleanRequested)
        .expect("CleanRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.object_count(), 0);
    match state.command_log.entries().last() {
        Some(AppCommand::ClearObjects) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::RequestExit)
    );
}

#[test]
fn test_frame_started_logs_both_frame_commands_in_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    frame(&mut controller, &mut state);

    assert_eq!(
        state.command_log.entries(),
        &[
            AppCommand::ProcessPendingClicks,
            AppCommand::GenerateCurvesIfReady
        ]
    );
}

#[test]
fn test_test_window_toggle_round_trip() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::TestWindowToggled { visible: true })
        .expect("TestWindowToggled sollte ohne Fehler durchlaufen");
    assert!(state.ui.show_test_window);

    controller
        .handle_intent(&mut state, AppIntent::TestWindowToggled { visible: false })
        .expect("TestWindowToggled sollte ohne Fehler durchlaufen");
    assert!(!state.ui.show_test_window);
}

#[test]
fn test_reload_with_missing_config_reports_error() {
    let mut controller = AppController::new();
    let path = temp_config_path("missing");
    let _ = std::fs::remove_file(&path);
    let mut state = AppState::with_options(SandboxOptions::default(), path);

    let result = controller.handle_intent(&mut state, AppIntent::OptionsReloadRequested);

    assert!(result.is_err());
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_save_then_reload_keeps_clear_color() {
    let mut controller = AppController::new();
    let path = temp_config_path("save_reload");
    let mut state = AppState::with_options(SandboxOptions::default(), path.clone());

    let color = [0.1, 0.2, 0.3, 1.0];
    controller
        .handle_intent(&mut state, AppIntent::ClearColorChanged { color })
        .expect("ClearColorChanged sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::OptionsSaveRequested)
        .expect("Speichern sollte funktionieren");

    let mut reloaded = AppState::with_options(SandboxOptions::default(), path.clone());
    controller
        .handle_intent(&mut reloaded, AppIntent::OptionsReloadRequested)
        .expect("Neu laden sollte funktionieren");

    assert_eq!(reloaded.view.clear_color, color);
    assert!(reloaded.ui.status_message.is_none());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_reload_applies_translation_offset_to_next_curves() {
    let mut controller = AppController::new();
    let path = temp_config_path("offset");
    std::fs::write(&path, "translation_offset = [1.0, 1.0]\n")
        .expect("Test-Konfiguration sollte schreibbar sein");
    let mut state = AppState::with_options(SandboxOptions::default(), path.clone());

    controller
        .handle_intent(&mut state, AppIntent::OptionsReloadRequested)
        .expect("Neu laden sollte funktionieren");

    for (x, y) in [(0.0, 0.0), (374.0, 374.0), (749.0, 0.0)] {
        click(&mut controller, &mut state, x, y);
        frame(&mut controller, &mut state);
    }

    let first = state.session.objects()[0]
        .as_point()
        .expect("Index 0 sollte ein Punkt sein")
        .position;
    let moved = state.session.objects()[4]
        .as_point()
        .expect("Index 4 sollte ein verschobener Punkt sein")
        .position;
    assert_abs_diff_eq!(moved.x, first.x + 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(moved.y, first.y + 1.0, epsilon = 1e-5);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_render_scene_shares_session_objects() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 100.0, 100.0);
    frame(&mut controller, &mut state);

    let scene = controller.build_render_scene(&state);
    assert!(scene.has_objects());
    assert_eq!(scene.objects.len(), 1);
    assert_eq!(scene.clear_color, state.view.clear_color);
}
