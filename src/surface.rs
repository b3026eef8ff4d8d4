//! Hand-off seam between the layout core and a rendering surface.
//!
//! The core never draws. It produces [`GeometryDescriptor`]s and walks them
//! in ascending interval order, threading the previous descriptor through
//! for chained styles. Everything past `draw_or_move` (pooling, animation,
//! actual painting) belongs to the backend.

use crate::core::layout::{GeometryDescriptor, LayoutPass};

/// Contract implemented by any rendering surface.
pub trait DrawSurface {
    /// Receives one interval's geometry.
    ///
    /// `previous` carries the preceding interval's descriptor for chained
    /// styles and is `None` for the first interval and for unchained styles.
    fn draw_or_move(
        &mut self,
        descriptor: &GeometryDescriptor,
        previous: Option<&GeometryDescriptor>,
    );
}

/// Presents a finished pass to a surface, slot by slot in sequence order.
pub fn present_pass<S: DrawSurface + ?Sized>(pass: &LayoutPass, surface: &mut S) {
    let mut previous: Option<&GeometryDescriptor> = None;
    for descriptor in &pass.slots {
        surface.draw_or_move(descriptor, previous);
        if pass.is_chained() {
            previous = Some(descriptor);
        }
    }
}

/// No-op surface used by tests and headless callers.
///
/// It records hand-off counts so tests can assert on presentation order and
/// chaining without a real backend.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub draw_count: usize,
    pub chained_count: usize,
}

impl DrawSurface for NullSurface {
    fn draw_or_move(
        &mut self,
        _descriptor: &GeometryDescriptor,
        previous: Option<&GeometryDescriptor>,
    ) {
        self.draw_count += 1;
        if previous.is_some() {
            self.chained_count += 1;
        }
    }
}
