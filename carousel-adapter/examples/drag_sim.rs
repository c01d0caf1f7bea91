// Example: replay a touch swipe and a short tap-like drag through the controller.
use carousel::{CarouselOptions, Slide};
use carousel_adapter::{Controller, HostError, InputEvent, LinkOpener, NoopPrefetcher};

#[derive(Default)]
struct Opened(Vec<String>);

impl LinkOpener for Opened {
    fn open_in_new_context(&mut self, url: &str) -> Result<(), HostError> {
        self.0.push(url.to_string());
        Ok(())
    }
}

fn main() {
    let slides: Vec<Slide> = (1..=5)
        .map(|i| {
            Slide::new(
                i,
                format!("Slide {i}"),
                format!("https://img.example/{i}.jpg"),
                format!("https://example.com/{i}"),
            )
        })
        .collect();

    let mut c = Controller::new(
        slides,
        CarouselOptions::new().with_autoplay(false),
        390.0,
        0,
        NoopPrefetcher,
        Opened::default(),
    );
    println!("card width {}", c.carousel().card_width());

    let swipe = [
        InputEvent::TouchStart { x: 300.0 },
        InputEvent::TouchMove { x: 260.0 },
        InputEvent::TouchMove { x: 180.0 },
        InputEvent::TouchEnd,
        InputEvent::Click { buffer_index: 4 },
    ];
    for (i, event) in swipe.into_iter().enumerate() {
        let now = i as u64 * 16;
        println!("{event:?} -> {:?} (offset {})", c.handle(event, now), c.displayed_offset());
    }

    for now in (64..=500).step_by(48) {
        println!("t={now} offset={}", c.tick(now));
    }

    // Below the click slop the gesture still counts as a tap.
    c.handle(InputEvent::PointerDown { x: 100.0 }, 600);
    c.handle(InputEvent::PointerMove { x: 103.0 }, 610);
    println!("{:?}", c.handle(InputEvent::PointerUp, 620));
    let visible = c.carousel().logical_index();
    println!("{:?}", c.handle(InputEvent::Click { buffer_index: visible }, 620));
    println!("opened {:?}", c.opener().0);
}
