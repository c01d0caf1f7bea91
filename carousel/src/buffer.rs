use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::Slide;

/// Builds the extended buffer: the last `padding` slides, the canonical list, then the first
/// `padding` slides.
///
/// The result has `canonical.len() + 2 * padding` entries. When the canonical list is shorter
/// than `padding`, head and tail wrap around and repeat slides. An empty canonical list yields an
/// empty buffer.
pub fn build_extended(canonical: &[Slide], padding: usize) -> Vec<Slide> {
    let n = canonical.len();
    if n == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n + 2 * padding);
    // head[j] = canonical[(n - padding + j) mod n]
    let head_start = (n - padding % n) % n;
    out.extend((0..padding).map(|j| canonical[(head_start + j) % n].clone()));
    out.extend_from_slice(canonical);
    out.extend((0..padding).map(|j| canonical[j % n].clone()));
    out
}

/// The canonical slide list together with its padded, loop-friendly extension.
#[derive(Clone, Debug)]
pub struct ExtendedBuffer {
    canonical: Arc<[Slide]>,
    slides: Vec<Slide>,
    padding: usize,
    generation: u64,
}

impl ExtendedBuffer {
    /// `padding` is clamped to at least 1.
    pub fn new(canonical: Arc<[Slide]>, padding: usize) -> Self {
        let padding = padding.max(1);
        let slides = build_extended(&canonical, padding);
        Self {
            canonical,
            slides,
            padding,
            generation: 0,
        }
    }

    /// Rebuilds the buffer if `canonical` is a different list (by reference, not by value).
    ///
    /// Returns `true` when a rebuild happened.
    pub fn rebuild_if_changed(&mut self, canonical: Arc<[Slide]>) -> bool {
        if Arc::ptr_eq(&self.canonical, &canonical) {
            return false;
        }
        self.slides = build_extended(&canonical, self.padding);
        self.canonical = canonical;
        self.generation = self.generation.wrapping_add(1);
        cdebug!(
            canonical_len = self.canonical.len(),
            buffer_len = self.slides.len(),
            generation = self.generation,
            "ExtendedBuffer rebuilt"
        );
        true
    }

    pub fn canonical(&self) -> &Arc<[Slide]> {
        &self.canonical
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, buffer_index: usize) -> Option<&Slide> {
        self.slides.get(buffer_index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of real (canonical) slides, `N`.
    pub fn canonical_len(&self) -> usize {
        self.canonical.len()
    }

    /// Number of padded slides on each side, `K`.
    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Maps a buffer position back to the canonical slide it shows.
    pub fn canonical_index(&self, buffer_index: usize) -> Option<usize> {
        let n = self.canonical.len();
        if n == 0 || buffer_index >= self.slides.len() {
            return None;
        }
        // buffer[padding + i] == canonical[i], extended periodically.
        let shifted = (buffer_index + n - self.padding % n) % n;
        Some(shifted)
    }
}
