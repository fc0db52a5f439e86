//! Global CSS styles for the portfolio page.
//!
//! Components only toggle the marker classes (`scrolled`, `open`,
//! `visible`); every visual effect of those markers is defined here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0d0f12;
  --bg-raised: #15181d;
  --border: #23272e;

  /* Accent */
  --accent: #7cf3c0;
  --accent-glow: rgba(124, 243, 192, 0.35);

  /* Text */
  --text-primary: #f2f2f2;
  --text-secondary: rgba(242, 242, 242, 0.7);
  --text-muted: rgba(242, 242, 242, 0.45);

  /* Typography */
  --font-display: 'Space Grotesk', 'Helvetica Neue', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-display);
  cursor: none;
}

a, button {
  cursor: none;
  color: inherit;
}

/* === Page scroll container === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

/* === Custom cursor === */
.cursor,
.cursor-ring {
  position: fixed;
  top: 0;
  left: 0;
  pointer-events: none;
  z-index: 1000;
  border-radius: 50%;
}

.cursor {
  width: 10px;
  height: 10px;
  background: var(--accent);
}

.cursor-ring {
  width: 32px;
  height: 32px;
  border: 1px solid var(--accent-glow);
}

/* === Nav === */
.nav {
  position: sticky;
  top: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem 3rem;
  transition: background 0.3s ease, padding 0.3s ease, border-color 0.3s ease;
  border-bottom: 1px solid transparent;
}

.nav.scrolled {
  padding: 1rem 3rem;
  background: rgba(13, 15, 18, 0.8);
  backdrop-filter: blur(12px);
  border-bottom-color: var(--border);
}

.nav-logo {
  font-family: var(--font-mono);
  text-decoration: none;
  color: var(--accent);
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-links a {
  text-decoration: none;
  color: var(--text-secondary);
  transition: color 0.2s ease;
}

.nav-links a:hover {
  color: var(--accent);
}

/* === Hamburger === */
.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
}

.hamburger span {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform 0.3s ease, opacity 0.3s ease;
}

.hamburger.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.hamburger.open span:nth-child(2) { opacity: 0; }
.hamburger.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

/* === Mobile menu === */
.mobile-menu {
  position: fixed;
  top: 64px;
  left: 0;
  right: 0;
  z-index: 90;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding: 2rem 3rem;
  background: var(--bg-raised);
  transform: translateY(-120%);
  transition: transform 0.35s ease;
}

.mobile-menu.open {
  transform: translateY(0);
}

.mobile-menu a {
  text-decoration: none;
  font-size: 1.25rem;
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .hamburger { display: flex; }
}

/* === Hero === */
.hero {
  min-height: 90vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: 0 3rem;
}

.hero-eyebrow {
  font-family: var(--font-mono);
  color: var(--accent);
  margin-bottom: 1rem;
}

.hero-title {
  font-size: clamp(2rem, 5vw, 4rem);
  font-weight: 500;
  line-height: 1.2;
}

.hero-cta {
  display: inline-block;
  margin-top: 2rem;
  padding: 0.75rem 1.5rem;
  border: 1px solid var(--accent);
  text-decoration: none;
  color: var(--accent);
  width: fit-content;
}

/* === Typewriter === */
.typewriter {
  color: var(--accent);
}

.typewriter-caret {
  color: var(--accent);
  animation: blink 1s steps(1) infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Sections === */
.section {
  padding: 6rem 3rem;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 1.5rem;
}

.body-text {
  color: var(--text-secondary);
  line-height: 1.7;
  max-width: 42rem;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
}

.project-card {
  padding: 1.5rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
}

.project-card h3 {
  margin-bottom: 0.75rem;
}

.stack,
.skill-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
  margin-top: 1rem;
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--text-muted);
}

.pill {
  padding: 0.35rem 0.75rem;
  border: 1px solid var(--border);
}

/* === Scroll reveal === */
.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.visible {
  opacity: 1;
  transform: translateY(0);
}
"#;
