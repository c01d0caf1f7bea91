use carousel::{Carousel, CarouselOptions, Slide};

const DESTINATIONS: [(&str, &str); 6] = [
    ("Bali Island, Indonesia", "bali"),
    ("Paris, France", "paris"),
    ("Santorini, Greece", "santorini"),
    ("Banff National Park, Canada", "banff"),
    ("Jeju Island, South Korea", "jeju"),
    ("Cappadocia, Turkey", "cappadocia"),
];

fn main() {
    let slides: Vec<Slide> = DESTINATIONS
        .iter()
        .zip(1..)
        .map(|(&(title, slug), id)| {
            Slide::new(
                id,
                title,
                format!("https://img.example/{slug}.jpg"),
                format!("https://example.com/{slug}"),
            )
        })
        .collect();

    let mut c = Carousel::new(slides, CarouselOptions::new(), 1280.0, 0);
    println!(
        "buffer={:?}",
        c.buffer().iter().map(|s| s.id).collect::<Vec<_>>()
    );

    // Drive the auto-advance timer for a full loop; the adapter would call tick() from a timer
    // scheduled at next_deadline_ms().
    while let Some(at) = c.next_deadline_ms() {
        if at > 21_000 {
            break;
        }
        c.tick(at);
        println!(
            "t={at} index={} offset={} phase={:?} slide={:?}",
            c.logical_index(),
            c.pixel_offset(),
            c.phase(),
            c.current_slide()
        );
    }
}
