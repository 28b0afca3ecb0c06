use std::time::{Duration, Instant};

use canvas_arcade::scheduler::*;

#[test]
fn runs_until_the_stop_flag_is_cleared() {
    let scheduler = FrameScheduler::new(Duration::from_millis(1));
    let stop = scheduler.stop_flag();
    let mut seen = Vec::new();

    let frames = scheduler
        .run(|tick| -> Result<(), ()> {
            seen.push(tick.index);
            if tick.index == 5 {
                stop.stop();
            }
            Ok(())
        })
        .unwrap();

    assert_eq!(frames, 5);
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
}

#[test]
fn stopped_scheduler_runs_no_frames() {
    let scheduler = FrameScheduler::new(Duration::from_millis(1));
    scheduler.stop_flag().stop();
    let mut ran = false;
    let frames = scheduler
        .run(|_| -> Result<(), ()> {
            ran = true;
            Ok(())
        })
        .unwrap();
    assert_eq!(frames, 0);
    assert!(!ran);
}

#[test]
fn callback_error_ends_the_loop() {
    let scheduler = FrameScheduler::new(Duration::from_millis(1));
    let result = scheduler.run(|tick| if tick.index == 3 { Err("boom") } else { Ok(()) });
    assert_eq!(result, Err("boom"));
}

#[test]
fn frames_are_paced_by_the_cadence() {
    let cadence = Duration::from_millis(10);
    let scheduler = FrameScheduler::new(cadence);
    let stop = scheduler.stop_flag();
    let mut deltas = Vec::new();

    let started = Instant::now();
    scheduler
        .run(|tick| -> Result<(), ()> {
            deltas.push(tick.delta);
            if tick.index == 4 {
                stop.stop();
            }
            Ok(())
        })
        .unwrap();

    // three sleeps between four frames
    assert!(started.elapsed() >= cadence * 3);
    assert_eq!(deltas[0], cadence);
    assert!(deltas[1..].iter().all(|d| *d >= cadence));
}

#[test]
fn stop_flag_clones_share_state() {
    let flag = StopFlag::new();
    let other = flag.clone();
    assert!(other.is_running());
    flag.stop();
    assert!(!other.is_running());
}
