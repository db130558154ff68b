use std::thread;
use std::time::Duration;

use tracing::info;

use crate::contact::{ContactDescriptor, TouchPhase};
use crate::error::InjectError;
use crate::injector::TouchSink;

/// Contact identifier of the single simulated touch point.
pub const CONTACT_ID: u32 = 0;

/// Pause between submissions so receivers see a gesture instead of a jump.
pub const STEP_DELAY: Duration = Duration::from_millis(50);

/// One step of a scripted gesture.
#[derive(Debug, Clone, Copy)]
pub struct ScriptStep {
    pub phase: TouchPhase,
    pub x: i32,
    pub y: i32,
}

/// The demo gesture: press at (300, 300), drag to (500, 400), release.
pub const SWIPE_SCRIPT: [ScriptStep; 4] = [
    ScriptStep { phase: TouchPhase::Down, x: 300, y: 300 },
    ScriptStep { phase: TouchPhase::Move, x: 400, y: 350 },
    ScriptStep { phase: TouchPhase::Move, x: 500, y: 400 },
    ScriptStep { phase: TouchPhase::Up, x: 500, y: 400 },
];

/// Submits every step of `steps` through `sink`, pausing `delay` after each
/// submission but the last.
///
/// The first failed submission aborts the remaining steps; events already
/// delivered are not undone.
pub fn run_script(
    sink: &mut dyn TouchSink,
    steps: &[ScriptStep],
    delay: Duration,
) -> Result<(), InjectError> {
    for (i, step) in steps.iter().enumerate() {
        info!("simulating {} at ({}, {})", step.phase, step.x, step.y);
        let contact = ContactDescriptor::new(step.phase, step.x, step.y, CONTACT_ID);
        sink.inject(&contact)?;
        if i + 1 < steps.len() {
            thread::sleep(delay);
        }
    }
    info!("touch simulation complete");
    Ok(())
}
