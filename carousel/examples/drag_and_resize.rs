// Example: a drag gesture racing a boundary reset, then a responsive resize.
use carousel::{Carousel, CarouselOptions, Slide};

fn main() {
    let slides: Vec<Slide> = (1..=4)
        .map(|i| {
            Slide::new(
                i,
                format!("Slide {i}"),
                format!("https://img.example/{i}.jpg"),
                format!("https://example.com/{i}"),
            )
        })
        .collect();

    let mut c = Carousel::new(slides, CarouselOptions::new().with_autoplay(false), 600.0, 0);
    println!("card_width={} offset={}", c.card_width(), c.pixel_offset());

    // Jump onto the tail copy of the first slide; a silent reset is now pending.
    c.go_to_slide(3, 0);
    c.advance(400);
    println!("index={} phase={:?}", c.logical_index(), c.phase());

    // Start dragging before the reset fires.
    c.drag_start(300.0);
    c.drag_move(250.0);
    c.tick(750);
    println!(
        "after reset during drag: index={} offset={}",
        c.logical_index(),
        c.pixel_offset()
    );

    let release = c.drag_end(800);
    println!("release={release:?} index={}", c.logical_index());

    // A click right after the drag is suppressed.
    println!("click activates: {:?}", c.activate(4).map(|s| &s.title));
    c.tick(900);
    println!("click activates: {:?}", c.activate(4).map(|s| &s.title));

    c.set_viewport_width(1024.0);
    println!(
        "resized: card_width={} offset={} transition={:?}",
        c.card_width(),
        c.pixel_offset(),
        c.transition()
    );
}
