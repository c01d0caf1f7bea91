// Example: drive a controller from a simulated frame loop and print the displayed offset.
use carousel::{CarouselOptions, Slide};
use carousel_adapter::{Controller, HostError, ImagePrefetcher, InputEvent, LinkOpener};

struct LogPrefetcher;

impl ImagePrefetcher for LogPrefetcher {
    fn prefetch(&mut self, url: &str) -> Result<(), HostError> {
        println!("prefetch {url}");
        Ok(())
    }
}

struct LogOpener;

impl LinkOpener for LogOpener {
    fn open_in_new_context(&mut self, url: &str) -> Result<(), HostError> {
        println!("open {url}");
        Ok(())
    }
}

fn main() {
    let slides: Vec<Slide> = ["Shoes", "Jackets", "Hats"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Slide::new(
                i as u64 + 1,
                *name,
                format!("https://img.example/{}.jpg", name.to_lowercase()),
                format!("https://shop.example/{}", name.to_lowercase()),
            )
        })
        .collect();

    let mut c = Controller::new(
        slides,
        CarouselOptions::new(),
        1280.0,
        0,
        LogPrefetcher,
        LogOpener,
    );

    let mut now = 0;
    while now < 10_000 {
        let Some(next) = c.next_wakeup_ms(now) else {
            break;
        };
        now = next;
        let offset = c.tick(now);
        if !c.is_animating() {
            println!(
                "t={now} index={} offset={offset} style={:?}",
                c.carousel().logical_index(),
                c.track_style()
            );
        }
    }

    // Hover pauses the timer; a tap on the visible card opens its landing page.
    c.handle(InputEvent::HoverEnter, now);
    println!("paused: next wakeup {:?}", c.next_wakeup_ms(now));
    let visible = c.carousel().logical_index();
    println!("{:?}", c.handle(InputEvent::Click { buffer_index: visible }, now));
}
