//! Global CSS styles for ClassStruct.
//!
//! Animated values (opacity, translateY) are applied inline by the screens;
//! nothing here uses CSS transitions or keyframes for them.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --paper: #f5f3ee;

  /* TEXT */
  --ink: #1a1a2e;
  --text-muted: #888888;
  --text-on-accent: #ffffff;

  /* ACCENTS */
  --teal: #5ba8a0;
  --teal-shadow: rgba(91, 168, 160, 0.4);
  --amber: #f0a500;

  /* DECORATION */
  --dot-inactive: #cccccc;
  --hero-tint: rgba(10, 5, 20, 0.15);

  /* Typography */
  --font-serif: Georgia, 'Times New Roman', serif;
  --font-mono: 'SF Mono', 'Consolas', monospace;
  --font-sans: -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Layout */
  --gutter: 24px;
  --hero-size: 75vw;
  --ring-size: 78vw;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  min-height: 100vh;
}

/* === Safe Area === */
.safe-area {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  padding:
    env(safe-area-inset-top, 0px)
    env(safe-area-inset-right, 0px)
    env(safe-area-inset-bottom, 0px)
    env(safe-area-inset-left, 0px);
}

/* === PreLogin === */
.pre-login {
  flex: 1;
  display: flex;
  flex-direction: column;
  padding: 0 var(--gutter);
  background: var(--paper);
}

.pre-login__header {
  padding-top: 12px;
  padding-bottom: 8px;
}

.app-name {
  font-family: var(--font-serif);
  font-size: 18px;
  font-weight: 600;
  letter-spacing: 0.5px;
  color: var(--ink);
}

.pre-login__hero {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  margin-top: 12px;
  min-height: var(--ring-size);
}

.glow-ring {
  position: absolute;
  width: var(--ring-size);
  height: var(--ring-size);
  border-radius: 28px;
  border: 2px solid var(--amber);
  box-shadow: 0 0 20px var(--amber);
  background: transparent;
  z-index: 0;
  pointer-events: none;
}

.hero-image {
  position: relative;
  width: var(--hero-size);
  height: var(--hero-size);
  border-radius: 24px;
  overflow: hidden;
  z-index: 1;
}

.hero-image__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 24px;
  display: block;
}

.hero-image__overlay {
  position: absolute;
  inset: 0;
  background: var(--hero-tint);
  border-radius: 24px;
}

.pre-login__text {
  flex: 1;
  margin-top: 32px;
}

.tagline {
  font-family: var(--font-mono);
  font-size: 13px;
  color: var(--text-muted);
  letter-spacing: 1.5px;
  text-transform: uppercase;
  margin-bottom: 12px;
}

.description {
  font-family: var(--font-serif);
  font-size: 20px;
  font-weight: 700;
  line-height: 30px;
  color: var(--ink);
}

.highlight {
  color: var(--teal);
}

/* === Call-to-action === */
.pre-login__cta {
  display: flex;
  justify-content: flex-end;
  padding-bottom: 12px;
}

.btn-next {
  background: var(--teal);
  color: var(--text-on-accent);
  border: none;
  border-radius: 50px;
  padding: 14px 28px;
  font-size: 16px;
  font-weight: 700;
  letter-spacing: 0.5px;
  cursor: pointer;
  box-shadow: 0 4px 12px var(--teal-shadow);
}

.btn-next:active {
  opacity: 0.85;
}

.btn-next:disabled {
  cursor: default;
}

.btn-ghost {
  background: transparent;
  color: var(--teal);
  border: none;
  padding: 8px 12px;
  font-size: 14px;
  cursor: pointer;
}

/* === Page Indicator === */
.dots {
  display: flex;
  flex-direction: row;
  justify-content: center;
  gap: 6px;
  padding-top: 8px;
  padding-bottom: 20px;
}

.dot {
  width: 7px;
  height: 7px;
  border-radius: 4px;
  background: var(--dot-inactive);
}

.dot-active {
  width: 20px;
  background: var(--teal);
}

/* === Reserved Screens === */
.reserved-screen {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 8px;
  padding: var(--gutter);
}

.reserved-screen__id {
  font-family: var(--font-serif);
  font-size: 24px;
  font-weight: 600;
}

.reserved-screen__note {
  font-family: var(--font-mono);
  font-size: 13px;
  color: var(--text-muted);
}
"#;
