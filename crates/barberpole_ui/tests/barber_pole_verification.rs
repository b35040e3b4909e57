//! # Barber Pole Verification Tests
//!
//! End-to-end checks of the widget through its host callbacks:
//!
//! 1. **Geometry**: rotated bounds, x shift, degenerate angles
//! 2. **Stripes**: spacing, color cycling, clipping and transform order
//! 3. **Animation**: linear wrap, pause/resume continuity, teardown
//! 4. **Configuration**: rejection of undrawable setups
//!
//! Run with: cargo test -p barberpole_ui --test barber_pole_verification

use std::time::Duration;

use barberpole_ui::{
    AnimatorState, BarberPoleConfig, BarberPoleError, BarberPoleView, Color, CommandRecorder,
    IntRect, Orientation, RenderCommand, Widget,
};

fn config(colors: Vec<Color>, line_width: i32) -> BarberPoleConfig {
    BarberPoleConfig {
        colors,
        line_width,
        line_rotation: 45,
        animated: true,
        animation_speed: 400,
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

#[test]
fn verify_bounds_for_100x200_at_45_degrees() {
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");
    view.on_resize(100, 200);

    let bounds = view.rotated_bounds();
    assert_eq!(bounds.width, 212);
    assert_eq!(bounds.height, 212);
    assert_eq!(bounds.rect, IntRect::new(-112, -12, 312, 412));
    assert_eq!(bounds.x_shift, 112);
}

#[test]
fn verify_bounds_equal_viewport_at_zero_and_half_turn() {
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");
    view.on_resize(100, 200);

    for degrees in [0, 180, 360, -180] {
        view.set_line_rotation(degrees);
        let bounds = view.rotated_bounds();
        assert_eq!((bounds.width, bounds.height), (100, 200), "{degrees}°");
    }
}

#[test]
fn verify_bounds_grow_with_trig_values() {
    // Square viewport: |sin| + |cos| grows from 0° to 45°
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");
    view.on_resize(120, 120);

    let mut previous = 0;
    for degrees in 0..=45 {
        view.set_line_rotation(degrees);
        let bounds = view.rotated_bounds();
        assert!(bounds.width >= previous, "{degrees}°: {} < {previous}", bounds.width);
        assert_eq!(bounds.width, bounds.height);
        previous = bounds.width;
    }

    // Flat viewport: width follows |cos| alone
    view.on_resize(300, 0);
    let mut previous = 0;
    for degrees in (0..=90).rev() {
        view.set_line_rotation(degrees);
        let width = view.rotated_bounds().width;
        assert!(width >= previous, "{degrees}°: {width} < {previous}");
        previous = width;
    }
}

#[test]
fn verify_x_shift_is_absolute_left_edge() {
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");

    for (w, h) in [(100, 200), (640, 24), (24, 640), (1, 1)] {
        view.on_resize(w, h);
        for degrees in (-720..=720).step_by(9) {
            view.set_line_rotation(degrees);
            let bounds = view.rotated_bounds();
            assert!(bounds.x_shift >= 0);
            assert_eq!(bounds.x_shift, bounds.rect.left.abs());
        }
    }
}

#[test]
fn verify_orientation_trig_is_absolute() {
    let orientation = Orientation::from_degrees(-135);
    assert!(orientation.sin_abs() >= 0.0);
    assert!(orientation.cos_abs() >= 0.0);
    assert!((orientation.sin_abs() - orientation.cos_abs()).abs() < 1e-9);
}

// ============================================================================
// STRIPES
// ============================================================================

#[test]
fn verify_paint_sequence() {
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");
    view.on_resize(100, 200);

    let mut recorder = CommandRecorder::new();
    view.on_paint(&mut recorder);
    let commands = recorder.commands();

    assert_eq!(
        commands[..4],
        [
            RenderCommand::ClipRect {
                bounds: IntRect::from_size(100, 200)
            },
            RenderCommand::Save,
            RenderCommand::Rotate {
                degrees: 45.0,
                pivot_x: 50.0,
                pivot_y: 100.0
            },
            RenderCommand::Translate { dx: -112.0, dy: 0.0 },
        ]
    );
    assert_eq!(commands.last(), Some(&RenderCommand::Restore));
    // cursor 0..=424 step 5
    assert_eq!(recorder.lines().count(), 85);
}

#[test]
fn verify_color_is_a_function_of_step_count() {
    let palette = [Color::RED, Color::WHITE, Color::BLUE];
    let mut view = BarberPoleView::new(&config(palette.to_vec(), 10)).expect("valid config");
    view.on_resize(100, 200);

    let plan: Vec<_> = view.stripe_plan().expect("sized widget").collect();
    assert!(!plan.is_empty());
    for line in &plan {
        assert_eq!(line.color_index, line.step % 3);
        assert_eq!(line.color_index, (line.cursor / 10) as usize % 3);
    }

    let mut recorder = CommandRecorder::new();
    view.on_paint(&mut recorder);
    for (line, command) in plan.iter().zip(recorder.lines()) {
        let RenderCommand::Line { x1, color, .. } = command else {
            unreachable!("lines() only yields line commands");
        };
        assert_eq!(*color, palette[line.color_index]);
        assert!((x1 - line.x).abs() < f32::EPSILON);
    }
}

#[test]
fn verify_offset_shifts_every_line() {
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");
    view.on_resize(100, 200);
    view.on_frame(Duration::from_millis(200), &mut || {});
    assert!((view.offset() - 2.5).abs() < 0.001);

    let mut recorder = CommandRecorder::new();
    view.on_paint(&mut recorder);
    for (step, command) in recorder.lines().enumerate() {
        let RenderCommand::Line { x1, .. } = command else {
            unreachable!("lines() only yields line commands");
        };
        assert!((x1 - (step as f32 * 5.0 + 2.5)).abs() < 0.001);
    }
}

#[test]
fn verify_paint_is_deterministic() {
    let build = || {
        let mut view = BarberPoleView::new(&config(vec![Color::RED, Color::BLUE], 7))
            .expect("valid config");
        view.on_resize(333, 77);
        view.set_line_rotation(-20);
        view.on_frame(Duration::from_millis(123), &mut || {});
        let mut recorder = CommandRecorder::new();
        view.on_paint(&mut recorder);
        recorder.take_commands()
    };

    assert_eq!(build(), build());
}

#[test]
fn verify_unsized_widget_skips_paint() {
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");
    let mut recorder = CommandRecorder::new();

    view.on_paint(&mut recorder);
    assert_eq!(recorder.command_count(), 0);

    view.on_resize(0, 50);
    view.on_paint(&mut recorder);
    assert_eq!(recorder.command_count(), 0);
}

// ============================================================================
// ANIMATION
// ============================================================================

#[test]
fn verify_offset_wraps_after_one_period() {
    // line width 5, two colors: offset runs 0 → 10 over 2 × 400ms
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");

    let mut offsets = Vec::new();
    for _ in 0..16 {
        view.on_frame(Duration::from_millis(100), &mut || {});
        offsets.push(view.offset());
    }

    let expected = [
        1.25, 2.5, 3.75, 5.0, 6.25, 7.5, 8.75, 0.0, 1.25, 2.5, 3.75, 5.0, 6.25, 7.5, 8.75, 0.0,
    ];
    for (offset, expected) in offsets.iter().zip(expected) {
        assert!((offset - expected).abs() < 0.001, "{offset} != {expected}");
    }
    assert!(offsets.iter().all(|offset| (0.0..10.0).contains(offset)));
}

#[test]
fn verify_pause_resume_continuity() {
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");
    view.on_resize(100, 200);
    view.on_frame(Duration::from_millis(300), &mut || {});
    let before = view.offset();

    let mut redraws = 0;
    view.on_visibility_changed(false);
    for _ in 0..10 {
        view.on_frame(Duration::from_millis(16), &mut || redraws += 1);
    }
    assert_eq!(redraws, 0);
    assert_eq!(view.animator_state(), AnimatorState::Paused);

    view.on_visibility_changed(true);
    assert!((view.offset() - before).abs() < f32::EPSILON);

    view.on_frame(Duration::from_millis(100), &mut || redraws += 1);
    assert_eq!(redraws, 1);
    assert!((view.offset() - (before + 1.25)).abs() < 0.001);
}

#[test]
fn verify_host_progress_drives_offset() {
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");

    let mut redraws = 0;
    view.on_progress(0.5, &mut || redraws += 1);
    assert!((view.offset() - 5.0).abs() < 0.001);

    view.on_progress(1.0, &mut || redraws += 1);
    assert!(view.offset().abs() < f32::EPSILON);
    assert_eq!(redraws, 2);
}

#[test]
fn verify_static_widget_never_animates() {
    let mut view = BarberPoleView::new(&BarberPoleConfig {
        animated: false,
        ..config(vec![Color::RED, Color::WHITE], 5)
    })
    .expect("valid config");
    view.on_resize(100, 200);

    let mut redraws = 0;
    for _ in 0..10 {
        view.on_frame(Duration::from_millis(100), &mut || redraws += 1);
    }
    view.on_visibility_changed(false);
    view.on_visibility_changed(true);

    assert_eq!(redraws, 0);
    assert!(view.offset().abs() < f32::EPSILON);
    assert_eq!(view.animator_state(), AnimatorState::Stopped);
}

#[test]
fn verify_detach_releases_animator() {
    let mut view =
        BarberPoleView::new(&config(vec![Color::RED, Color::WHITE], 5)).expect("valid config");
    view.detach();
    view.on_visibility_changed(true);

    let mut redraws = 0;
    view.on_frame(Duration::from_millis(100), &mut || redraws += 1);
    assert_eq!(redraws, 0);
    assert_eq!(view.animator_state(), AnimatorState::Stopped);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn verify_empty_colors_rejected() {
    let result = BarberPoleView::new(&config(Vec::new(), 5));
    assert!(matches!(
        result,
        Err(BarberPoleError::InvalidConfiguration(_))
    ));
}

#[test]
fn verify_non_positive_line_width_rejected() {
    for width in [0, -3] {
        let result = BarberPoleView::new(&config(vec![Color::RED], width));
        assert!(matches!(
            result,
            Err(BarberPoleError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn verify_toml_configuration() {
    let mut view = BarberPoleView::from_toml_str(
        r##"
        colors = ["#FF0000", "#FFFFFF", "#0000FF"]
        line_width = 10
        line_rotation = 90
        animation_speed = 100
        "##,
    )
    .expect("valid document");
    view.on_resize(100, 200);

    assert_eq!(view.line_rotation(), 90);
    assert_eq!(view.line_width(), 10);
    assert_eq!(view.rotated_bounds().rect.left, -100);

    // 3 colors × 100ms = 300ms cycle over 30px
    view.on_frame(Duration::from_millis(150), &mut || {});
    assert!((view.offset() - 15.0).abs() < 0.001);

    let result = BarberPoleView::from_toml_str("colors = []");
    assert!(matches!(
        result,
        Err(BarberPoleError::InvalidConfiguration(_))
    ));
}
