//! Global CSS for the Vitrine components.
//!
//! Inject once near the application root: `style { {GLOBAL_STYLES} }`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --paper: #fbfaf8;
  --paper-raised: #ffffff;
  --border: #d8d4cd;

  /* Ink */
  --ink: #1c1b18;
  --ink-soft: rgba(28, 27, 24, 0.72);
  --ink-muted: rgba(28, 27, 24, 0.5);

  /* Accent */
  --accent: #2f5d50;
  --accent-glow: rgba(47, 93, 80, 0.25);

  /* Semantic */
  --link: #1f4f8f;

  /* Type scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;

  /* Transitions */
  --transition-fast: 100ms ease;
  --transition-normal: 200ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--paper);
  color: var(--ink);
  font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  font-size: var(--text-base);
  line-height: 1.5;
}

/* === Buttons === */
.btn-solid {
  background: var(--accent);
  color: var(--paper-raised);
  border: 1px solid var(--accent);
  border-radius: 0.375rem;
  padding: 0.375rem 0.875rem;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: box-shadow var(--transition-fast);
}

.btn-solid:hover {
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.btn-outline {
  background: transparent;
  color: var(--accent);
  border: 1px solid var(--accent);
  border-radius: 0.375rem;
  padding: 0.375rem 0.875rem;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: box-shadow var(--transition-fast);
}

.btn-outline:hover {
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.btn-ghost {
  background: transparent;
  color: var(--ink-soft);
  border: none;
  padding: 0.375rem 0.875rem;
  font-size: var(--text-sm);
  cursor: pointer;
}

.btn-ghost:hover {
  color: var(--ink);
}

.icon-btn {
  background: transparent;
  color: var(--ink);
  border: 2px solid var(--border);
  border-radius: 9999px;
  width: 1.75rem;
  height: 1.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0.25rem;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.icon-btn:hover {
  border-color: var(--accent);
}

/* === Card Composite === */
.card {
  color: var(--ink);
  width: 100%;
  overflow: hidden;
}

.card__tags {
  display: flex;
  gap: 0.5rem;
  padding: 0.5rem 0;
  flex-wrap: wrap;
}

.card__tags .tag {
  font-size: var(--text-xs);
  color: var(--ink-soft);
  border: 1px solid var(--border);
  border-radius: 9999px;
  padding: 0.125rem 0.5rem;
}

.card__title {
  font-size: var(--text-lg);
  color: var(--accent);
  font-weight: 600;
  line-height: 1;
  letter-spacing: -0.01em;
  margin: 0.5rem 0;
}

.card__description {
  font-size: var(--text-xs);
  color: var(--ink-soft);
}

/* === Card Image === */
.card-image {
  position: relative;
  border-radius: 0.375rem;
  overflow: hidden;
  user-select: none;
  transition: transform var(--transition-normal);
}

.card-image:hover {
  transform: translateY(-0.5rem);
}

.card-image__img {
  display: block;
  width: 100%;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}

.card-image__cta {
  position: absolute;
  bottom: 0.75rem;
  right: 0.25rem;
  text-decoration: none;
  transition: all var(--transition-fast);
}

/* === Showcase === */
.showcase__nav {
  display: flex;
  height: fit-content;
  gap: 0.5rem;
  justify-content: flex-end;
  align-items: center;
  margin-bottom: 0.5rem;
}

.showcase__strip {
  display: flex;
  gap: 0.75rem;
  width: 100%;
  scroll-behavior: smooth;
  -ms-overflow-style: none;
  scrollbar-width: none;
}

.showcase__strip::-webkit-scrollbar {
  display: none;
}

.showcase__strip--horizontal {
  overflow-x: scroll;
  scroll-snap-type: x mandatory;
}

.showcase__strip--vertical {
  flex-direction: column;
  overflow-y: scroll;
  scroll-snap-type: y mandatory;
}

.showcase__item {
  box-sizing: content-box;
  display: flex;
  flex: none;
  scroll-snap-stop: always;
}

.snap-start { scroll-snap-align: start; }
.snap-center { scroll-snap-align: center; }
.snap-end { scroll-snap-align: end; }

/* Responsive slide widths. Base: full width; columns increase with
   the viewport. */
.showcase__item--sm,
.showcase__item--md,
.showcase__item--lg {
  width: 100%;
}

@media (min-width: 640px) {
  .showcase__item--sm { width: 50%; }
}

@media (min-width: 768px) {
  .showcase__item--sm { width: 33.333%; }
  .showcase__item--md { width: 50%; }
}

@media (min-width: 1024px) {
  .showcase__item--sm { width: 25%; }
  .showcase__item--md { width: 33.333%; }
  .showcase__item--lg { width: 50%; }
}

@media (min-width: 1536px) {
  .showcase__item--sm { width: 20%; }
  .showcase__item--md { width: 25%; }
  .showcase__item--lg { width: 33.333%; }
}
"#;
