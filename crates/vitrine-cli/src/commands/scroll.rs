use anyhow::Result;

use vitrine_core::AppConfig;
use vitrine_view::{Page, PageKind, ScrollFrame};

pub fn run(config: &AppConfig, kind: PageKind, frames: u32, settle: u32) -> Result<()> {
    let mut page = Page::from_config(kind, config)?;

    print_header(&page.tick(0.0));
    for (frame, raw) in raw_samples(frames, settle) {
        let snapshot = page.tick(raw);
        print_row(frame, raw, &snapshot);
    }

    Ok(())
}

/// Linear scroll from top to bottom over `frames`, then `settle` frames at the bottom
fn raw_samples(frames: u32, settle: u32) -> impl Iterator<Item = (u32, f64)> {
    let frames = frames.max(1);
    (1..=frames.saturating_add(settle))
        .map(move |frame| (frame, (f64::from(frame) / f64::from(frames)).min(1.0)))
}

fn print_header(frame: &ScrollFrame) {
    let names: Vec<String> = frame
        .values()
        .iter()
        .map(|(name, _)| format!("{:>18}", name))
        .collect();
    println!("{:>5} {:>8} {:>9}{}", "frame", "raw", "smoothed", names.join(""));
}

fn print_row(index: u32, raw: f64, frame: &ScrollFrame) {
    let values: Vec<String> = frame
        .values()
        .iter()
        .map(|(_, value)| format!("{:>18.3}", value))
        .collect();
    println!(
        "{:>5} {:>8.3} {:>9.4}{}",
        index,
        raw,
        frame.progress,
        values.join("")
    );
}
