pub const NAV_STYLES: &str = r#"
/* Navigation */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  height: 3px;
  background: var(--gradient-brand);
  z-index: 60;
  transition: width 80ms linear;
}

.navbar {
  position: sticky;
  top: 0;
  z-index: 50;
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.navbar.scrolled {
  box-shadow: var(--shadow-lg);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.nav-logo {
  font-weight: 700;
  font-size: 1.25rem;
  background: var(--gradient-brand);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-logo:hover {
  text-decoration: none;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-muted);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
  background-color: rgba(59, 130, 246, 0.1);
}

.theme-toggle,
.menu-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  width: 40px;
  height: 40px;
  cursor: pointer;
  color: var(--text-primary);
  font-size: 1.1rem;
}

.menu-toggle {
  display: none;
}

.mobile-menu {
  display: none;
}

@media (max-width: 768px) {
  .nav-links .nav-link {
    display: none;
  }

  .menu-toggle {
    display: inline-block;
  }

  .mobile-menu.open {
    display: flex;
    flex-direction: column;
    padding: var(--space-2) var(--space-4) var(--space-4);
    border-top: 1px solid var(--border);
  }
}
"#;

pub const HERO_STYLES: &str = r#"
/* Sections */
.section {
  position: relative;
  z-index: 1;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-16) var(--space-4);
  scroll-margin-top: var(--header-height);
}

.section-title {
  text-align: center;
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.section-title span {
  background: var(--gradient-brand);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.section-intro {
  text-align: center;
  max-width: 42rem;
  margin: 0 auto var(--space-10);
  color: var(--text-secondary);
}

/* Hero */
.hero {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-10);
  min-height: calc(100vh - var(--header-height));
}

.hero-text {
  flex: 1;
}

.hero-greeting {
  font-size: 3.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.hero-name {
  font-size: 1.5rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-2);
}

.hero-about {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
  max-width: 36rem;
}

.hero-social {
  display: flex;
  gap: var(--space-4);
}

.social-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-secondary);
  font-weight: 700;
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.social-button:hover {
  transform: scale(1.1);
  text-decoration: none;
}

.social-button:active {
  transform: scale(0.95);
}

.social-github:hover { color: var(--text-primary); }
.social-linkedin:hover { color: #0A66C2; }
.social-instagram:hover { color: #E1306C; }
.social-email:hover { color: var(--error); }

.hero-image {
  width: 320px;
  height: 320px;
  border-radius: var(--radius-full);
  object-fit: cover;
  border: 4px solid var(--border);
  box-shadow: var(--shadow-lg);
}

@media (max-width: 768px) {
  .hero {
    flex-direction: column-reverse;
    text-align: center;
  }

  .hero-social {
    justify-content: center;
  }

  .hero-image {
    width: 240px;
    height: 240px;
  }
}
"#;

pub const EDUCATION_STYLES: &str = r#"
/* Education timeline */
.timeline {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
}

.timeline::before {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  width: 2px;
  background: var(--gradient-brand);
}

.timeline-item {
  width: calc(50% - var(--space-8));
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.timeline-item.left { align-self: flex-start; }
.timeline-item.right { align-self: flex-end; }

.timeline.revealed .timeline-item {
  opacity: 1;
  transform: none;
}

.timeline-card {
  display: flex;
  gap: var(--space-4);
  align-items: center;
  padding: var(--space-5);
}

.timeline-card h3 {
  font-size: 1.15rem;
}

.timeline-card p {
  color: var(--text-secondary);
}

.progress-ring {
  flex-shrink: 0;
}

.progress-ring .track {
  stroke: var(--border);
}

.progress-ring .value {
  stroke: var(--primary);
  stroke-linecap: round;
  transition: stroke-dashoffset 1s var(--easing-standard);
}

.progress-ring text {
  fill: var(--text-primary);
  font-size: 0.55rem;
  font-weight: 600;
}

.certifications {
  margin-top: var(--space-12);
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: var(--space-6);
}

.certification-card {
  padding: var(--space-5);
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.certification-header {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.certification-logo {
  width: 48px;
  height: 48px;
  object-fit: contain;
}

.certification-actions {
  display: flex;
  gap: var(--space-2);
}

@media (max-width: 768px) {
  .timeline::before {
    left: var(--space-2);
  }

  .timeline-item,
  .timeline-item.left,
  .timeline-item.right {
    width: calc(100% - var(--space-6));
    align-self: flex-end;
  }
}
"#;

pub const SKILLS_STYLES: &str = r#"
/* Skills */
.skill-search {
  display: flex;
  justify-content: center;
  margin-bottom: var(--space-4);
}

.skill-search input {
  width: min(100%, 420px);
}

.skill-category {
  margin-bottom: var(--space-10);
}

.skill-category h3 {
  font-size: 1.35rem;
  margin-bottom: var(--space-4);
}

.skill-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
  gap: var(--space-4);
}

.flip-card {
  height: 150px;
  perspective: 800px;
  cursor: pointer;
}

.flip-card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transition: transform 0.6s var(--easing-standard);
  transform-style: preserve-3d;
}

.flip-card.flipped .flip-card-inner,
.flip-card:hover .flip-card-inner {
  transform: rotateY(180deg);
}

.flip-card-face {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  border-radius: var(--radius-lg);
  backface-visibility: hidden;
  color: white;
  padding: var(--space-3);
  text-align: center;
}

.flip-card-back {
  transform: rotateY(180deg);
  background-color: var(--neutral-800);
}

.skill-initial {
  font-size: 2rem;
  font-weight: 700;
}

.learning-journey {
  margin-top: var(--space-8);
  padding: var(--space-8);
  text-align: center;
  background: linear-gradient(135deg, var(--neutral-800), var(--neutral-900));
  color: var(--neutral-200);
  border-radius: var(--radius-xl);
}

.learning-journey h3 {
  font-size: 1.35rem;
  margin-bottom: var(--space-4);
  background: var(--gradient-brand);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.learning-journey .actions {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-6);
}
"#;

pub const PROJECT_STYLES: &str = r#"
/* Projects */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-6);
}

.project-card {
  display: flex;
  flex-direction: column;
}

.project-card.featured {
  border-color: var(--primary);
}

.project-image {
  width: 100%;
  height: 180px;
  object-fit: cover;
}

.project-body {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  padding: var(--space-5);
}

.project-body p {
  color: var(--text-secondary);
  flex: 1;
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.project-actions {
  display: flex;
  gap: var(--space-2);
}

.featured-badge {
  align-self: flex-start;
  background: var(--gradient-brand);
}

.detail-list {
  list-style: none;
  color: var(--text-secondary);
}

.detail-list li {
  margin-bottom: var(--space-1);
}
"#;

pub const CONTACT_STYLES: &str = r#"
/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
}

.contact-panel {
  padding: var(--space-6);
}

.contact-panel h3 {
  font-size: 1.5rem;
  color: var(--primary);
  margin-bottom: var(--space-6);
}

.contact-info {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.contact-info h4 {
  font-size: 1rem;
}

.contact-info p,
.contact-info a {
  color: var(--text-secondary);
}

.contact-social {
  display: flex;
  gap: var(--space-3);
  margin-bottom: var(--space-8);
}

.resume-card {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--surface-muted);
}

.resume-card small {
  color: var(--text-tertiary);
}

@media (max-width: 900px) {
  .contact-grid {
    grid-template-columns: 1fr;
  }
}
"#;

pub const FOOTER_STYLES: &str = r#"
/* Footer */
.footer {
  position: relative;
  z-index: 1;
  overflow: hidden;
  padding: var(--space-12) var(--space-4) var(--space-6);
  background-color: var(--surface);
  border-top: 1px solid var(--border);
  text-align: center;
}

.footer-glow {
  position: absolute;
  top: -120px;
  left: 50%;
  width: 480px;
  height: 240px;
  transform: translateX(-50%);
  background: radial-gradient(ellipse at center, rgba(139, 92, 246, 0.35), transparent 70%);
  opacity: 0;
  pointer-events: none;
}

.footer-glow.active {
  animation: glow 6s ease-in-out infinite alternate;
}

@keyframes glow {
  from { opacity: 0.3; transform: translateX(-50%) scale(0.9); }
  to { opacity: 0.9; transform: translateX(-50%) scale(1.1); }
}

.footer-name {
  font-size: 2.5rem;
  font-weight: 700;
  background: var(--gradient-brand);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.footer-title {
  color: var(--text-secondary);
}

.footer-social {
  display: flex;
  justify-content: center;
  gap: var(--space-3);
  margin: var(--space-6) 0;
}

.footer-bottom {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: var(--space-4);
  max-width: var(--container-width);
  margin: 0 auto;
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.footer-legal {
  display: flex;
  gap: var(--space-4);
}

.scroll-top {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  z-index: 40;
  width: 44px;
  height: 44px;
  border-radius: var(--radius-full);
  border: none;
  background: var(--gradient-brand);
  color: white;
  font-size: 1.25rem;
  cursor: pointer;
  box-shadow: var(--shadow-md);
}
"#;

pub const BACKGROUND_STYLES: &str = r#"
/* Background layers */
.background-layer {
  position: fixed;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
}

.background-gradient {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  animation: gradient-cycle 40s ease-in-out infinite alternate;
}

@keyframes gradient-cycle {
  0%   { background: radial-gradient(circle at 10% 10%, #4F46E5 0%, transparent 50%); }
  25%  { background: radial-gradient(circle at 90% 20%, #8B5CF6 0%, transparent 50%); }
  50%  { background: radial-gradient(circle at 10% 90%, #10B981 0%, transparent 50%); }
  75%  { background: radial-gradient(circle at 90% 80%, #3B82F6 0%, transparent 50%); }
  100% { background: radial-gradient(circle at 50% 50%, #F59E0B 0%, transparent 50%); }
}

.floating-dot {
  position: absolute;
  border-radius: var(--radius-full);
  background-color: #93C5FD;
  animation-name: drift;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
  animation-direction: alternate;
}

:root[data-theme="dark"] .floating-dot {
  background-color: #2563EB;
}

@keyframes drift {
  to { transform: translate(var(--dx), var(--dy)); }
}

.particle-canvas {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}
"#;
