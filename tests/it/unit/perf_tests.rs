//! Unit tests for perf module.

use ruler::perf::{PerfMonitor, ScopedTimer, TARGET_FRAME_MS};

#[test]
fn test_perf_monitor_basic() {
    let mut monitor = PerfMonitor::new();

    monitor.begin_frame();
    let time = monitor.end_frame();

    assert!(time.is_some());
    assert!(time.unwrap() >= 0.0);
    assert_eq!(monitor.total_frames(), 1);
}

#[test]
fn test_end_without_begin() {
    let mut monitor = PerfMonitor::new();
    assert_eq!(monitor.end_frame(), None);
    assert_eq!(monitor.total_frames(), 0);
}

#[test]
fn test_average_and_max() {
    let mut monitor = PerfMonitor::new();
    monitor.record(5.0);
    monitor.record(10.0);
    monitor.record(15.0);

    assert!((monitor.average_frame_time() - 10.0).abs() < 1e-9);
    assert_eq!(monitor.max_frame_time(), 15.0);
    assert_eq!(monitor.slow_frame_percentage(), 0.0);
}

#[test]
fn test_slow_frames_counted() {
    let mut monitor = PerfMonitor::new();
    for _ in 0..3 {
        monitor.record(1.0);
    }
    monitor.record(TARGET_FRAME_MS * 3.0);

    assert!((monitor.slow_frame_percentage() - 25.0).abs() < 1e-9);
}

#[test]
fn test_rolling_window() {
    let mut monitor = PerfMonitor::new();
    monitor.record(30.0);
    for _ in 0..60 {
        monitor.record(1.0);
    }

    // The first sample has rolled out of the window
    assert_eq!(monitor.max_frame_time(), 1.0);
    assert_eq!(monitor.total_frames(), 61);
}

#[test]
fn test_scoped_timer() {
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}
