use crate::*;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use carousel::{CarouselOptions, DragRelease, Slide};

#[derive(Debug, Default)]
struct RecordingPrefetcher {
    requested: Vec<String>,
    fail_on: Option<String>,
}

impl ImagePrefetcher for RecordingPrefetcher {
    fn prefetch(&mut self, url: &str) -> Result<(), HostError> {
        self.requested.push(url.to_string());
        if self.fail_on.as_deref() == Some(url) {
            return Err(HostError::Prefetch {
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct RecordingOpener {
    opened: Vec<String>,
    fail: bool,
}

impl LinkOpener for RecordingOpener {
    fn open_in_new_context(&mut self, url: &str) -> Result<(), HostError> {
        if self.fail {
            return Err(HostError::Other("popup blocked".to_string()));
        }
        self.opened.push(url.to_string());
        Ok(())
    }
}

fn slides(n: usize) -> Arc<[Slide]> {
    (0..n)
        .map(|i| {
            Slide::new(
                i as u64 + 1,
                format!("Slide {i}"),
                format!("https://img.example/{i}.jpg"),
                format!("https://example.com/{i}"),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

type TestController = Controller<RecordingPrefetcher, RecordingOpener>;

fn controller() -> TestController {
    Controller::new(
        slides(6),
        CarouselOptions::new(),
        1024.0,
        0,
        RecordingPrefetcher::default(),
        RecordingOpener::default(),
    )
}

#[test]
fn mount_prefetches_every_buffer_slot() {
    let c = controller();
    let expected: Vec<String> = [3, 4, 5, 0, 1, 2, 3, 4, 5, 0, 1, 2]
        .iter()
        .map(|i| format!("https://img.example/{i}.jpg"))
        .collect();
    assert_eq!(c.prefetcher().requested, expected);
}

#[test]
fn prefetch_failures_are_ignored() {
    let prefetcher = RecordingPrefetcher {
        fail_on: Some("https://img.example/0.jpg".to_string()),
        ..Default::default()
    };
    let mut c = Controller::new(
        slides(6),
        CarouselOptions::new(),
        1024.0,
        0,
        prefetcher,
        RecordingOpener::default(),
    );
    assert_eq!(c.prefetcher().requested.len(), 12);
    assert_eq!(c.tick(3000), -900.0);
    assert_eq!(c.carousel().logical_index(), 4);
}

#[test]
fn new_slide_list_is_prefetched_once() {
    let mut c = controller();
    let same = Arc::clone(c.carousel().slides());
    assert!(!c.set_slides(same, 10));
    assert_eq!(c.prefetcher().requested.len(), 12);

    assert!(c.set_slides(slides(2), 10));
    assert_eq!(c.prefetcher().requested.len(), 12 + 8);
    assert_eq!(c.displayed_offset(), -900.0);
}

#[test]
fn timer_advance_plays_a_tween() {
    let mut c = controller();
    assert_eq!(c.tick(3000), -900.0);
    assert!(c.is_animating());

    let mid = c.tick(3175);
    assert!(mid < -900.0 && mid > -1200.0, "mid={mid}");

    assert_eq!(c.tick(3350), -1200.0);
    assert!(!c.is_animating());
}

#[test]
fn boundary_reset_is_applied_without_animation() {
    let mut c = controller();
    for i in 1..=6u64 {
        c.tick(i * 3000);
    }
    assert_eq!(c.carousel().logical_index(), 9);
    assert_eq!(c.tick(18_350), -900.0);
    assert!(!c.is_animating());
}

#[test]
fn retarget_starts_from_the_on_screen_offset() {
    let mut c = controller();
    c.tick(3000);
    let mid = c.tick(3100);
    c.carousel_mut().advance(3100);
    assert_eq!(c.tick(3100), mid);
    assert_eq!(c.tick(3450), -1500.0);
}

#[test]
fn drag_follows_pointer_then_settles() {
    let mut c = controller();
    assert_eq!(
        c.handle(InputEvent::PointerDown { x: 500.0 }, 100),
        Response::Changed
    );
    assert_eq!(
        c.handle(InputEvent::PointerMove { x: 450.0 }, 120),
        Response::Changed
    );
    assert_eq!(c.displayed_offset(), -950.0);
    assert!(!c.is_animating());

    assert_eq!(
        c.handle(InputEvent::PointerUp, 140),
        Response::DragReleased(DragRelease::Advanced)
    );
    assert!(c.is_animating());
    assert_eq!(c.tick(140), -950.0);
    assert_eq!(c.tick(490), -1200.0);
}

#[test]
fn touch_and_pointer_leave_end_drags() {
    let mut c = controller();
    c.handle(InputEvent::TouchStart { x: 100.0 }, 0);
    c.handle(InputEvent::TouchMove { x: 150.0 }, 10);
    assert_eq!(
        c.handle(InputEvent::TouchEnd, 20),
        Response::DragReleased(DragRelease::Retreated)
    );

    c.handle(InputEvent::PointerDown { x: 100.0 }, 500);
    c.handle(InputEvent::PointerMove { x: 90.0 }, 510);
    assert_eq!(
        c.handle(InputEvent::PointerLeave, 520),
        Response::DragReleased(DragRelease::SnappedBack)
    );
    assert_eq!(c.handle(InputEvent::PointerLeave, 530), Response::Ignored);
}

#[test]
fn move_without_drag_is_ignored() {
    let mut c = controller();
    assert_eq!(
        c.handle(InputEvent::PointerMove { x: 10.0 }, 0),
        Response::Ignored
    );
}

#[test]
fn tap_opens_landing_page() {
    let mut c = controller();
    assert_eq!(
        c.handle(InputEvent::Click { buffer_index: 3 }, 0),
        Response::LinkOpened { slide: 1 }
    );
    assert_eq!(c.opener().opened, ["https://example.com/0"]);
}

#[test]
fn click_after_drag_is_suppressed() {
    let mut c = controller();
    c.handle(InputEvent::PointerDown { x: 100.0 }, 0);
    c.handle(InputEvent::PointerMove { x: 40.0 }, 10);
    c.handle(InputEvent::PointerUp, 20);
    assert_eq!(
        c.handle(InputEvent::Click { buffer_index: 4 }, 20),
        Response::ClickSuppressed
    );
    assert!(c.opener().opened.is_empty());

    c.tick(120);
    assert_eq!(
        c.handle(InputEvent::Click { buffer_index: 4 }, 120),
        Response::LinkOpened { slide: 2 }
    );
}

#[test]
fn failed_open_is_not_surfaced() {
    let mut c = Controller::new(
        slides(6),
        CarouselOptions::new(),
        1024.0,
        0,
        RecordingPrefetcher::default(),
        RecordingOpener {
            fail: true,
            ..Default::default()
        },
    );
    assert_eq!(
        c.handle(InputEvent::Click { buffer_index: 3 }, 0),
        Response::Ignored
    );
    assert_eq!(c.carousel().logical_index(), 3);
}

#[test]
fn host_errors_name_what_failed() {
    let err = HostError::Prefetch {
        url: "https://img.example/0.jpg".to_string(),
    };
    assert_eq!(err.to_string(), "image prefetch failed for https://img.example/0.jpg");
    assert_eq!(
        HostError::Other("popup blocked".to_string()).to_string(),
        "popup blocked"
    );
    assert_eq!(
        HostError::NoWindow.to_string(),
        "no browsing context is available"
    );
}

#[test]
fn hover_pauses_autoplay() {
    let mut c = controller();
    assert_eq!(c.handle(InputEvent::HoverEnter, 500), Response::Changed);
    assert_eq!(c.handle(InputEvent::HoverEnter, 600), Response::Ignored);
    assert_eq!(c.next_wakeup_ms(600), None);
    c.tick(10_000);
    assert_eq!(c.carousel().logical_index(), 3);

    c.handle(InputEvent::HoverLeave, 10_000);
    assert_eq!(c.next_wakeup_ms(10_000), Some(13_000));
}

#[test]
fn resize_applies_immediately() {
    let mut c = controller();
    assert_eq!(
        c.handle(
            InputEvent::Resize {
                viewport_width: 600.0
            },
            0
        ),
        Response::Changed
    );
    assert_eq!(c.displayed_offset(), -720.0);
    assert!(!c.is_animating());
    assert_eq!(
        c.handle(
            InputEvent::Resize {
                viewport_width: 600.0
            },
            0
        ),
        Response::Ignored
    );
}

#[test]
fn wakeups_follow_frames_while_animating() {
    let mut c = controller();
    assert_eq!(c.next_wakeup_ms(0), Some(3000));
    c.tick(3000);
    assert_eq!(c.next_wakeup_ms(3000), Some(3000 + FRAME_INTERVAL_MS));
    // Settle completion wins over the next frame once it is closer.
    assert_eq!(c.next_wakeup_ms(3340), Some(3350));
}

#[test]
fn track_style_reflects_motion() {
    let mut c = controller();
    let style = c.track_style();
    assert_eq!(style.transform, "translateX(-900px)");
    assert_eq!(style.transition, "none");

    c.tick(3000);
    let style = c.track_style();
    assert_eq!(style.transform, "translateX(-1200px)");
    assert_eq!(style.transition, "transform 350ms ease-out");
}

#[test]
fn unmount_stops_everything() {
    let mut c = controller();
    c.tick(3000);
    c.unmount();
    assert!(!c.is_animating());
    assert_eq!(c.next_wakeup_ms(3000), None);
    let shown = c.tick(60_000);
    assert_eq!(c.carousel().logical_index(), 4);
    assert_eq!(c.tick(70_000), shown);
    assert_eq!(
        c.handle(InputEvent::PointerDown { x: 0.0 }, 70_000),
        Response::Ignored
    );
    assert_eq!(
        c.handle(InputEvent::Click { buffer_index: 3 }, 70_000),
        Response::Ignored
    );
}

#[test]
fn tween_samples_and_retargets() {
    let mut t = Tween::new(0.0, 100.0, 1000, 200, Easing::Linear);
    assert_eq!(t.sample(900), 0.0);
    assert_eq!(t.sample(1100), 50.0);
    assert_eq!(t.sample(1200), 100.0);
    assert!(t.is_done(1200));
    assert_eq!(t.end_ms(), 1200);

    t.retarget(1100, 0.0, 100);
    assert_eq!(t.from, 50.0);
    assert_eq!(t.sample(1150), 25.0);

    // Zero durations are clamped so sampling never divides by zero.
    let z = Tween::new(1.0, 2.0, 0, 0, Easing::EaseOut);
    assert_eq!(z.duration_ms, 1);
    assert_eq!(z.sample(1), 2.0);
}

#[test]
fn css_easing_names() {
    assert_eq!(css_easing(Easing::Linear), "linear");
    assert_eq!(css_easing(Easing::EaseOut), "ease-out");
}
