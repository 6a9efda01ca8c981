//! Headless replay of recorded pointer input.
//!
//! A drag script is a JSON document with a viewport, optional trackball
//! config and a list of pointer events in pixel coordinates. Replaying it
//! through a fresh [`Trackball`] gives a reproducible final orientation.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::TrackballConfig;
use crate::input::PointerInput;
use crate::math::axis_angle;
use crate::trackball::Trackball;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Deserialize)]
pub struct DragScript {
    pub viewport: Viewport,
    #[serde(default)]
    pub config: TrackballConfig,
    pub events: Vec<PointerEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Tick {
        #[serde(default = "default_tick_count")]
        count: u32,
    },
    Resize { width: u32, height: u32 },
}

fn default_tick_count() -> u32 {
    1
}

/// Final controller state after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// [x, y, z, w]
    pub quaternion: [f32; 4],
    pub axis: [f32; 3],
    pub angle_degrees: f32,
    /// Column-major
    pub matrix: [[f32; 4]; 4],
    pub spinning: bool,
    pub events: usize,
}

pub fn parse_script(json: &str) -> Result<DragScript> {
    let script: DragScript = serde_json::from_str(json).context("Invalid drag script")?;
    ensure!(
        script.viewport.width > 0 && script.viewport.height > 0,
        "Drag script viewport must be non-empty, got {}x{}",
        script.viewport.width,
        script.viewport.height
    );
    Ok(script)
}

pub fn load_script(path: &Path) -> Result<DragScript> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read drag script: {}", path.display()))?;
    parse_script(&json).with_context(|| format!("Failed to load drag script: {}", path.display()))
}

/// Feed one event through the pointer adapter, the same path live input takes.
pub fn apply_event(input: &mut PointerInput, trackball: &mut Trackball, event: PointerEvent) {
    match event {
        PointerEvent::Down { x, y } => {
            input.cursor_moved(trackball, x, y);
            input.press(trackball);
        }
        PointerEvent::Move { x, y } => {
            input.cursor_moved(trackball, x, y);
        }
        PointerEvent::Up => {
            input.release(trackball);
        }
        PointerEvent::Tick { count } => {
            for _ in 0..count {
                trackball.tick();
            }
        }
        PointerEvent::Resize { width, height } => trackball.resize(width, height),
    }
}

pub fn run_script(script: &DragScript) -> ReplayReport {
    let mut trackball = Trackball::new(script.viewport, script.config);
    let mut input = PointerInput::new();

    for event in &script.events {
        apply_event(&mut input, &mut trackball, *event);
    }

    log::debug!(
        "Replayed {} events, final rotation {:?}",
        script.events.len(),
        trackball.rotation()
    );

    ReplayReport::new(&trackball, script.events.len())
}

impl ReplayReport {
    pub fn new(trackball: &Trackball, events: usize) -> Self {
        let rotation = trackball.rotation();
        let (axis, angle) = axis_angle(rotation);
        Self {
            quaternion: rotation.to_array(),
            axis: axis.to_array(),
            angle_degrees: angle.to_degrees(),
            matrix: trackball.uniform().matrix,
            spinning: trackball.is_spinning(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_script() {
        let script = parse_script(
            r#"{"viewport": {"width": 500, "height": 500}, "events": []}"#,
        )
        .unwrap();
        assert_eq!(script.viewport, Viewport::new(500, 500));
        assert_eq!(script.config, TrackballConfig::default());
        assert!(script.events.is_empty());
    }

    #[test]
    fn test_parse_all_event_kinds() {
        let script = parse_script(
            r#"{
                "viewport": {"width": 100, "height": 100},
                "events": [
                    {"type": "down", "x": 1, "y": 2},
                    {"type": "move", "x": 3.5, "y": 4},
                    {"type": "up"},
                    {"type": "tick"},
                    {"type": "tick", "count": 5},
                    {"type": "resize", "width": 200, "height": 50}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            script.events,
            vec![
                PointerEvent::Down { x: 1.0, y: 2.0 },
                PointerEvent::Move { x: 3.5, y: 4.0 },
                PointerEvent::Up,
                PointerEvent::Tick { count: 1 },
                PointerEvent::Tick { count: 5 },
                PointerEvent::Resize {
                    width: 200,
                    height: 50
                },
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_event() {
        let result = parse_script(
            r#"{"viewport": {"width": 10, "height": 10}, "events": [{"type": "wheel"}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_empty_viewport() {
        let result =
            parse_script(r#"{"viewport": {"width": 0, "height": 10}, "events": []}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_empty_script_reports_identity() {
        let script = parse_script(
            r#"{"viewport": {"width": 500, "height": 500}, "events": []}"#,
        )
        .unwrap();
        let report = run_script(&script);
        assert_eq!(report.quaternion, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(report.angle_degrees, 0.0);
        assert!(!report.spinning);
        assert_eq!(report.events, 0);
    }

    #[test]
    fn test_ticks_spin_after_release() {
        let base = r#"{"viewport": {"width": 500, "height": 500}, "events": [
            {"type": "down", "x": 250, "y": 250},
            {"type": "move", "x": 260, "y": 250},
            {"type": "up"}
        ]}"#;
        let spun = r#"{"viewport": {"width": 500, "height": 500}, "events": [
            {"type": "down", "x": 250, "y": 250},
            {"type": "move", "x": 260, "y": 250},
            {"type": "up"},
            {"type": "tick", "count": 3}
        ]}"#;

        let base = run_script(&parse_script(base).unwrap());
        let spun = run_script(&parse_script(spun).unwrap());

        assert!(base.spinning);
        assert!((spun.angle_degrees - 4.0 * base.angle_degrees).abs() < 1e-2);
    }
}
