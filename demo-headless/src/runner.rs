//! Headless tick loop with scheduled commands
//!
//! Commands scheduled for frame `n` are applied, in script order, just before
//! tick `n`; frame `0` entries therefore run before the first tick.

use crate::script::ScheduledCommand;
use anyhow::Result;
use quark_viz_core::{Animator, Command, Frame};
use tracing::{debug, info};

fn apply_scheduled(animator: &mut Animator, scheduled: &ScheduledCommand) {
    debug!(frame = scheduled.frame, command = ?scheduled.command, "Scripted command");
    animator.handle(scheduled.command);
    if let Command::SetSpeed(_) | Command::SetMarkerSize(_) = scheduled.command {
        let state = animator.state();
        info!(speed = state.speed, marker_size = state.marker_size, "Controls updated");
    }
}

/// Run `frames` ticks, calling `report` every `report_interval` ticks and on
/// the last one with the frame and the running flag
///
/// `script` must be sorted by frame, as [`crate::script::parse_script`]
/// returns it. Returns the largest norm drift seen.
///
/// # Errors
/// Returns the first error from `report`
pub fn run<F>(
    animator: &mut Animator,
    script: &[ScheduledCommand],
    frames: u32,
    report_interval: u32,
    mut report: F,
) -> Result<f64>
where
    F: FnMut(&Frame, bool) -> Result<()>,
{
    let report_interval = report_interval.max(1);
    let mut pending = script.iter().peekable();
    let mut max_drift = 0.0_f64;

    for tick in 1..=frames {
        while let Some(scheduled) = pending.next_if(|c| c.frame <= tick) {
            apply_scheduled(animator, scheduled);
        }

        let frame = animator.tick();
        max_drift = max_drift.max(frame.max_norm_drift());

        if tick % report_interval == 0 || tick == frames {
            report(&frame, animator.state().running)?;
        }
    }

    info!(frames, max_drift, "Run complete");
    Ok(max_drift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;
    use quark_viz_core::{Degrees, VisualizerConfig};

    fn collect(script: &str, frames: u32, report_interval: u32) -> Vec<(f64, u64, bool)> {
        let script = parse_script(script).expect("script should parse");
        let mut animator = Animator::new(&VisualizerConfig::default());
        let mut reports = Vec::new();
        run(&mut animator, &script, frames, report_interval, |frame, running| {
            reports.push((*frame.angle, frame.index, running));
            Ok(())
        })
        .expect("run should succeed");
        reports
    }

    #[test]
    fn test_pause_start_reset_schedule() {
        let reports = collect("2:pause,4:start,6:reset", 8, 1);
        let angles: Vec<f64> = reports.iter().map(|r| r.0).collect();
        let indices: Vec<u64> = reports.iter().map(|r| r.1).collect();
        let running: Vec<bool> = reports.iter().map(|r| r.2).collect();

        assert_eq!(angles, vec![0.5, 0.5, 0.5, 1.0, 1.5, 0.5, 1.0, 1.5]);
        assert_eq!(indices, vec![1, 1, 1, 2, 3, 1, 2, 3]);
        assert_eq!(
            running,
            vec![true, false, false, true, true, true, true, true]
        );
    }

    #[test]
    fn test_frame_zero_commands_apply_before_first_tick_in_order() {
        // speed=2 then pause then start: running at double speed from tick 1
        let reports = collect("0:speed=2,0:pause,0:start", 3, 2);
        assert_eq!(reports, vec![(2.0, 2, true), (3.0, 3, true)]);

        // Same frame, reversed order: ends paused before any tick
        let reports = collect("0:start,0:pause", 3, 5);
        assert_eq!(reports, vec![(0.0, 0, false)]);
    }

    #[test]
    fn test_reports_on_interval_and_last_tick() {
        let reports = collect("", 10, 4);
        let indices: Vec<u64> = reports.iter().map(|r| r.1).collect();
        assert_eq!(indices, vec![4, 8, 10]);
        assert_eq!(reports[2].0, *Degrees::new(5.0));
    }

    #[test]
    fn test_report_error_stops_the_run() {
        let mut animator = Animator::new(&VisualizerConfig::default());
        let result = run(&mut animator, &[], 10, 3, |_, _| anyhow::bail!("sink closed"));
        assert!(result.is_err());
        assert_eq!(animator.state().frame, 3);
    }
}
