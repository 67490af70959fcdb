//! Snapshot command - render frames headlessly on virtual time.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use medici_config::Config;
use ratatui::layout::Rect;
use tracing::info;

use crate::config_bridge;
use crate::theme::Theme;
use crate::ui::{self, App, state::MIN_VISIBLE_ROWS};

/// Options for `medici snapshot`.
pub(crate) struct SnapshotOptions {
    pub(crate) scenario: Option<String>,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) seed: Option<u64>,
    pub(crate) at_ms: Vec<u64>,
}

/// One rendered frame and the logical time it shows.
struct Frame {
    at: Duration,
    text: String,
}

/// Print the requested frames followed by the final one.
pub(crate) fn run_snapshot(cfg: &Config, options: &SnapshotOptions) -> Result<()> {
    let initial = super::scenario_index(options.scenario.as_deref())?;
    let seed = config_bridge::resolve_seed(options.seed, cfg);
    info!(seed, initial, "rendering snapshots");

    let frames = capture(cfg, initial, seed, options)?;
    let Some((last, timed)) = frames.split_last() else {
        return Ok(());
    };

    for frame in timed {
        println!(
            "\n{}",
            Theme::header(&format!("┌─── t = {} ms ───┐", frame.at.as_millis()))
        );
        println!("{}", frame.text);
    }

    println!(
        "\n{}",
        Theme::success(&format!(
            "Complete at {} ms (seed {seed})",
            last.at.as_millis()
        ))
    );
    println!("{}", last.text);
    Ok(())
}

/// Render a frame at each requested time, then one after the play-through.
fn capture(cfg: &Config, initial: usize, seed: u64, options: &SnapshotOptions) -> Result<Vec<Frame>> {
    let area = Rect::new(0, 0, options.width, options.height);
    if ui::body_area(area).height < MIN_VISIBLE_ROWS {
        bail!(
            "a {}x{} frame is too small to show the terminal",
            options.width,
            options.height
        );
    }

    let mut app = App::new(cfg, initial, seed);
    if options.scenario.is_some() {
        app = app.start_immediately();
    }
    app.observe_frame(area);

    let mut times = options.at_ms.clone();
    times.sort_unstable();
    times.dedup();

    let mut frames = Vec::with_capacity(times.len().saturating_add(1));
    for ms in times {
        app.update(Duration::from_millis(ms));
        frames.push(render(&app, options)?);
    }

    let end = app.player.run_until_idle(app.now());
    app.update(end);
    frames.push(render(&app, options)?);
    Ok(frames)
}

fn render(app: &App, options: &SnapshotOptions) -> Result<Frame> {
    let text = ui::render_snapshot(app, options.width, options.height)
        .context("failed to render frame")?;
    Ok(Frame {
        at: app.now(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::strip_ansi;

    fn options(at_ms: Vec<u64>) -> SnapshotOptions {
        SnapshotOptions {
            scenario: None,
            width: 100,
            height: 30,
            seed: Some(4),
            at_ms,
        }
    }

    #[test]
    fn test_frames_in_time_order_then_final() {
        let frames = capture(&Config::default(), 0, 4, &options(vec![3000, 0, 3000])).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].at, Duration::ZERO);
        assert_eq!(frames[1].at, Duration::from_millis(3000));
        assert!(frames[2].at > frames[1].at);
    }

    #[test]
    fn test_first_frame_is_empty_final_is_complete() {
        let frames = capture(&Config::default(), 0, 4, &options(vec![0])).unwrap();
        let first = strip_ansi(&frames[0].text);
        let last = strip_ansi(&frames[1].text);
        assert!(!first.contains("Alpine"));
        assert!(last.contains("meridian_coinvest.pdf"));
    }

    #[test]
    fn test_same_seed_same_frames() {
        let opts = options(vec![1500, 4200]);
        let a = capture(&Config::default(), 1, 4, &opts).unwrap();
        let b = capture(&Config::default(), 1, 4, &opts).unwrap();
        let texts = |f: &[Frame]| f.iter().map(|x| x.text.clone()).collect::<Vec<_>>();
        assert_eq!(texts(&a), texts(&b));
        assert_eq!(a.last().unwrap().at, b.last().unwrap().at);
    }

    #[test]
    fn test_too_small_frame_is_rejected() {
        let mut opts = options(Vec::new());
        opts.height = 6;
        assert!(capture(&Config::default(), 0, 4, &opts).is_err());
    }
}
