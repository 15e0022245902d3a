//! Slide bookkeeping for the showcase strip.
//!
//! Pure index tracking plus scroll-request planning. The showcase
//! component owns a [`SlideTracker`] in a signal and turns the
//! requests it returns into scroll-into-view calls; nothing in this
//! module touches the DOM.

/// Snap/inline alignment of a slide within the strip.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Align {
    /// Leading edge of the slide aligns to the strip.
    Start,
    /// Slide centers in the strip.
    #[default]
    Center,
    /// Trailing edge of the slide aligns to the strip.
    End,
}

impl Align {
    /// Returns the CSS class controlling scroll-snap alignment.
    pub fn class(&self) -> &'static str {
        match self {
            Align::Start => "snap-start",
            Align::Center => "snap-center",
            Align::End => "snap-end",
        }
    }

    /// Returns the `scrollIntoView` inline-alignment keyword.
    pub fn as_js(&self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
        }
    }
}

/// DOM id of one slide wrapper, namespaced by the owning showcase
/// instance so two showcases on the same page never collide.
pub fn slide_element_id(instance: &str, index: usize) -> String {
    format!("{instance}-slide{index}")
}

/// A request to bring one slide into view.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScrollRequest {
    /// Index of the slide to scroll to.
    pub slide: usize,
    /// Inline alignment for the scroll.
    pub align: Align,
}

impl ScrollRequest {
    /// Builds the script performing a smooth scroll-into-view of this
    /// request's slide. The element lookup is guarded: a missing slide
    /// is a silent no-op.
    pub fn script(&self, instance: &str) -> String {
        format!(
            r#"const el = document.getElementById("{id}");
if (el) {{
  el.scrollIntoView({{ behavior: "smooth", block: "nearest", inline: "{inline}" }});
}}"#,
            id = slide_element_id(instance, self.slide),
            inline = self.align.as_js(),
        )
    }
}

/// Tracks which slide currently has focus.
///
/// Two transition rules: [`previous`](Self::previous) decrements with a
/// floor at the first slide, [`next`](Self::next) increments and wraps
/// past the last slide back to the first. The index lives for the
/// owning showcase's display lifetime and resets on remount.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SlideTracker {
    current: usize,
    count: usize,
    align: Align,
}

impl SlideTracker {
    /// Creates a tracker over `count` slides, focused on the first.
    pub fn new(count: usize, align: Align) -> Self {
        Self {
            current: 0,
            count,
            align,
        }
    }

    /// Index of the currently focused slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides under tracking.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Updates the slide count when the child list changes between
    /// renders, clamping the focus into the new range.
    pub fn resize(&mut self, count: usize) {
        self.count = count;
        if self.current >= count {
            self.current = count.saturating_sub(1);
        }
    }

    /// Steps back one slide.
    ///
    /// At the first slide this is a no-op: the index is unchanged and
    /// no scroll is requested. The returned request carries the
    /// configured alignment as its inline alignment.
    pub fn previous(&mut self) -> Option<ScrollRequest> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(ScrollRequest {
            slide: self.current,
            align: self.align,
        })
    }

    /// Advances one slide, wrapping past the last back to the first.
    ///
    /// Always requests a scroll, wrap included. The request's inline
    /// alignment is `start` regardless of the configured alignment;
    /// only `previous` follows the configuration.
    pub fn next(&mut self) -> ScrollRequest {
        self.current = if self.current + 1 < self.count {
            self.current + 1
        } else {
            0
        };
        ScrollRequest {
            slide: self.current,
            align: Align::Start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_classes() {
        assert_eq!(Align::Start.class(), "snap-start");
        assert_eq!(Align::Center.class(), "snap-center");
        assert_eq!(Align::End.class(), "snap-end");
        assert_eq!(Align::default(), Align::Center);
    }

    #[test]
    fn element_ids_are_namespaced() {
        assert_eq!(slide_element_id("showcase-0", 2), "showcase-0-slide2");
        assert_ne!(
            slide_element_id("showcase-0", 1),
            slide_element_id("showcase-1", 1)
        );
    }

    #[test]
    fn previous_at_first_slide_is_a_noop() {
        let mut tracker = SlideTracker::new(3, Align::Center);
        assert_eq!(tracker.previous(), None);
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn next_increments_until_last() {
        let mut tracker = SlideTracker::new(3, Align::Center);
        assert_eq!(tracker.next().slide, 1);
        assert_eq!(tracker.next().slide, 2);
        assert_eq!(tracker.current(), 2);
    }

    #[test]
    fn next_wraps_and_still_requests_a_scroll() {
        let mut tracker = SlideTracker::new(2, Align::Center);
        tracker.next();
        let request = tracker.next();
        assert_eq!(request.slide, 0);
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn three_slide_walkthrough() {
        let mut tracker = SlideTracker::new(3, Align::Center);
        assert_eq!(tracker.next().slide, 1);
        assert_eq!(tracker.next().slide, 2);
        assert_eq!(tracker.next().slide, 0);
        assert_eq!(tracker.previous(), None);
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn previous_follows_configured_alignment() {
        let mut tracker = SlideTracker::new(3, Align::End);
        tracker.next();
        tracker.next();
        let request = tracker.previous().unwrap();
        assert_eq!(request.slide, 1);
        assert_eq!(request.align, Align::End);
    }

    #[test]
    fn next_always_aligns_to_start() {
        let mut tracker = SlideTracker::new(3, Align::End);
        tracker.next();
        let request = tracker.next();
        assert_eq!(request.slide, 2);
        assert_eq!(request.align, Align::Start);
    }

    #[test]
    fn single_slide_next_stays_put_but_scrolls() {
        let mut tracker = SlideTracker::new(1, Align::Center);
        let request = tracker.next();
        assert_eq!(request.slide, 0);
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn resize_clamps_focus() {
        let mut tracker = SlideTracker::new(5, Align::Center);
        tracker.next();
        tracker.next();
        tracker.next();
        assert_eq!(tracker.current(), 3);
        tracker.resize(2);
        assert_eq!(tracker.current(), 1);
        tracker.resize(0);
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn scroll_script_targets_slide_and_guards_lookup() {
        let request = ScrollRequest {
            slide: 1,
            align: Align::End,
        };
        let script = request.script("showcase-7");
        assert!(script.contains(r#"getElementById("showcase-7-slide1")"#));
        assert!(script.contains(r#"inline: "end""#));
        assert!(script.contains(r#"behavior: "smooth""#));
        assert!(script.contains("if (el)"));
    }
}
