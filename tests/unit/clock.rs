//! Unit tests for the trading window and exchange clock.

use chrono::NaiveTime;
use daygate::clock::{ExchangeClock, TradingWindow};

fn t(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[test]
fn window_is_half_open() {
    let window = TradingWindow::new(t(9, 10, 0), t(13, 25, 0));
    assert!(!window.contains(t(9, 9, 59)));
    assert!(window.contains(t(9, 10, 0)));
    assert!(window.contains(t(12, 0, 0)));
    assert!(window.contains(t(13, 24, 59)));
    assert!(!window.contains(t(13, 25, 0)));
    assert!(!window.contains(t(14, 0, 0)));
}

#[test]
fn empty_window_contains_nothing() {
    let window = TradingWindow::new(t(9, 10, 0), t(9, 10, 0));
    assert!(!window.contains(t(9, 10, 0)));
    assert!(!window.contains(t(9, 9, 59)));
}

#[test]
fn clock_produces_a_local_time() {
    // smoke only: the engine never consumes the raw timestamp, so there
    // is nothing further to pin here without depending on the wall clock
    let clock = ExchangeClock::new(chrono_tz::Asia::Taipei);
    let _ = clock.now_local();

    let always = TradingWindow::new(t(0, 0, 0), t(23, 59, 59));
    assert!(clock.within(&always));
}
