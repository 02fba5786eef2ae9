use super::*;

fn fill(progress: &mut LoadingProgress) -> u32 {
    let mut ticks = 0;
    while progress.percent() < 100 {
        ticks += 1;
        progress.tick(f64::from(ticks * TICK_MS));
    }
    ticks
}

#[test]
fn bar_fills_in_fifty_ticks() {
    let mut progress = LoadingProgress::default();
    assert_eq!(fill(&mut progress), 50);
    assert_eq!(progress.percent(), 100);
    assert!(!progress.is_ready());
}

#[test]
fn prompt_waits_for_minimum_display_time() {
    let mut progress = LoadingProgress::default();
    fill(&mut progress);

    progress.tick(1_500.0);
    assert!(!progress.is_ready());

    progress.tick(MIN_LOADING_MS);
    assert!(progress.is_ready());
    assert_eq!(progress.percent(), 100);
}

#[test]
fn slow_timer_shows_prompt_on_the_tick_after_full() {
    let mut progress = LoadingProgress::default();
    while progress.percent() < 100 {
        progress.tick(5_000.0);
    }
    assert!(!progress.is_ready());
    progress.tick(5_040.0);
    assert!(progress.is_ready());
}

#[test]
fn press_is_ignored_until_ready_and_fires_once() {
    let mut progress = LoadingProgress::default();
    assert!(!progress.press());

    fill(&mut progress);
    progress.tick(MIN_LOADING_MS);
    assert!(progress.press());
    assert!(progress.is_pressed());
    assert!(!progress.press());
}

#[test]
fn fill_width_is_capped() {
    assert_eq!(progress_style(42), "width: 42%;");
    assert_eq!(progress_style(250), "width: 100%;");
}

