//! Entrance animation for showcase items.
//!
//! Items start offset below their resting place and transparent, then
//! stagger into position as the strip's trigger region crosses the
//! viewport. The Rust side plans the timeline (cues, scripts) and owns
//! the teardown through [`AnimationHandle`]; the webview executes it.

/// Configuration for the entrance timeline.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EntranceConfig {
    /// Vertical offset items animate up from, in pixels.
    pub offset_px: f64,
    /// Delay between successive items, in seconds. Linear easing.
    pub stagger_secs: f64,
    /// How far above the strip the trigger region starts, in pixels.
    /// The region ends when the strip's top reaches the viewport top.
    pub lead_px: f64,
    /// Tie animation progress directly to scroll position instead of
    /// playing the timeline once on entry.
    pub scrub: bool,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            offset_px: 600.0,
            stagger_secs: 0.2,
            lead_px: 500.0,
            scrub: false,
        }
    }
}

/// One item's place in the staggered timeline.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ItemCue {
    /// Slide index of the item.
    pub index: usize,
    /// Delay before this item starts, in seconds.
    pub delay_secs: f64,
}

/// Computes per-item cues: item `i` starts `i * stagger_secs` after the
/// first.
pub fn stagger_cues(count: usize, config: &EntranceConfig) -> Vec<ItemCue> {
    (0..count)
        .map(|index| ItemCue {
            index,
            delay_secs: index as f64 * config.stagger_secs,
        })
        .collect()
}

/// Builds the script that registers the entrance animation for one
/// showcase instance. Per-item delays come from [`stagger_cues`].
/// Idempotent per instance: re-running it first tears down any binding
/// registered under the same id.
pub fn entrance_script(instance: &str, count: usize, config: &EntranceConfig) -> String {
    let delays = stagger_cues(count, config)
        .iter()
        .map(|cue| cue.delay_secs.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"(function() {{
  window.__vitrine = window.__vitrine || {{}};
  const prior = window.__vitrine["{instance}"];
  if (prior) {{ prior.dispose(); }}

  const strip = document.getElementById("{instance}");
  if (!strip) return;
  const items = [];
  for (let i = 0; i < {count}; i++) {{
    const el = document.getElementById("{instance}-slide" + i);
    if (el) items.push(el);
  }}
  if (items.length === 0) return;

  const offset = {offset};
  const lead = {lead};
  const scrub = {scrub};
  const delays = [{delays}];
  const span = 1 + (delays.length ? delays[delays.length - 1] : 0);
  let played = false;

  items.forEach((el) => {{
    el.style.transition = "none";
    el.style.transform = "translateY(" + offset + "px)";
    el.style.opacity = "0";
  }});

  // Progress through the trigger region: 0 while the strip's top sits
  // lead px below the viewport bottom, 1 once it reaches the viewport
  // top.
  const progress = () => {{
    const top = strip.getBoundingClientRect().top;
    const start = window.innerHeight + lead;
    return Math.min(Math.max((start - top) / start, 0), 1);
  }};

  const apply = (p) => {{
    items.forEach((el, i) => {{
      const local = Math.min(Math.max(p * span - delays[i], 0), 1);
      el.style.transform = "translateY(" + offset * (1 - local) + "px)";
      el.style.opacity = String(local);
    }});
  }};

  const playOnce = () => {{
    played = true;
    items.forEach((el, i) => {{
      el.style.transition =
        "transform 0.6s linear " + delays[i] + "s, opacity 0.6s linear " + delays[i] + "s";
      el.style.transform = "translateY(0)";
      el.style.opacity = "1";
    }});
  }};

  const onScroll = () => {{
    if (scrub) {{
      apply(progress());
    }} else if (!played && progress() > 0) {{
      playOnce();
    }}
  }};

  window.addEventListener("scroll", onScroll, {{ passive: true }});
  window.__vitrine["{instance}"] = {{
    dispose: () => {{
      window.removeEventListener("scroll", onScroll);
      items.forEach((el) => {{
        el.style.transition = "";
        el.style.transform = "";
        el.style.opacity = "";
      }});
      delete window.__vitrine["{instance}"];
    }},
  }};
  onScroll();
}})();"#,
        instance = instance,
        count = count,
        offset = config.offset_px,
        lead = config.lead_px,
        scrub = config.scrub,
        delays = delays,
    )
}

/// Builds the script reverting everything [`entrance_script`]
/// registered for the instance: listener removed, inline styles
/// cleared.
pub fn teardown_script(instance: &str) -> String {
    format!(
        r#"(function() {{
  const bindings = window.__vitrine;
  if (bindings && bindings["{instance}"]) {{
    bindings["{instance}"].dispose();
  }}
}})();"#,
    )
}

/// Live animation bindings for one showcase instance.
///
/// Holds the teardown action for an entrance sequence that has begun.
/// [`dispose`](Self::dispose) runs it exactly once; dropping an
/// undisposed handle disposes it as well, so no binding outlives its
/// owner regardless of exit path.
pub struct AnimationHandle {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl AnimationHandle {
    /// Wraps a teardown action into a handle.
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// Runs the teardown action. Subsequent calls are no-ops.
    pub fn dispose(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            tracing::debug!("disposing entrance animation bindings");
            cleanup();
        }
    }

    /// Whether the teardown action has already run.
    pub fn is_disposed(&self) -> bool {
        self.cleanup.is_none()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn cues_are_staggered_linearly() {
        let cues = stagger_cues(4, &EntranceConfig::default());
        assert_eq!(cues.len(), 4);
        assert_eq!(cues[0].delay_secs, 0.0);
        assert_eq!(cues[1].delay_secs, 0.2);
        assert_eq!(cues[3].delay_secs, 0.6000000000000001);
        assert!(cues.windows(2).all(|w| w[0].delay_secs < w[1].delay_secs));
    }

    #[test]
    fn no_items_no_cues() {
        assert!(stagger_cues(0, &EntranceConfig::default()).is_empty());
    }

    #[test]
    fn entrance_script_carries_config() {
        let config = EntranceConfig {
            scrub: true,
            ..EntranceConfig::default()
        };
        let script = entrance_script("showcase-3", 5, &config);
        assert!(script.contains(r#"getElementById("showcase-3")"#));
        assert!(script.contains("const scrub = true;"));
        assert!(script.contains("const offset = 600;"));
        assert!(script.contains("const lead = 500;"));
        assert!(script.contains("const delays = [0, 0.2, 0.4,"));
        assert!(script.contains(r#""showcase-3-slide" + i"#));
    }

    #[test]
    fn entrance_script_defaults_to_play_once() {
        let script = entrance_script("showcase-0", 2, &EntranceConfig::default());
        assert!(script.contains("const scrub = false;"));
    }

    #[test]
    fn teardown_script_targets_instance() {
        let script = teardown_script("showcase-9");
        assert!(script.contains(r#"bindings["showcase-9"]"#));
        assert!(script.contains("dispose()"));
    }

    #[test]
    fn dispose_runs_cleanup_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut handle = AnimationHandle::new(move || seen.set(seen.get() + 1));
        assert!(!handle.is_disposed());
        handle.dispose();
        handle.dispose();
        assert!(handle.is_disposed());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn drop_disposes_undisposed_handle() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        {
            let _handle = AnimationHandle::new(move || seen.set(seen.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn no_callback_fires_after_dispose() {
        let fired = Rc::new(Cell::new(false));
        let seen = fired.clone();
        let mut handle = AnimationHandle::new(move || seen.set(true));
        handle.dispose();
        fired.set(false);
        drop(handle);
        assert!(!fired.get());
    }
}
