pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:focus-visible {
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.3);
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--neutral-900);
}

.btn-secondary:hover {
  background-color: var(--neutral-300);
  text-decoration: none;
}

.btn-gradient {
  background: var(--gradient-brand);
  color: white;
}

.btn-gradient:hover {
  box-shadow: var(--shadow-md);
  text-decoration: none;
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-close {
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
}

.btn-close:hover {
  color: var(--text-primary);
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.card:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow-md);
}

/* Chips and badges */
.chip {
  display: inline-block;
  padding: 2px var(--space-3);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface-muted);
  color: var(--text-secondary);
  font-size: 0.8rem;
  cursor: pointer;
}

.chip:hover,
.chip.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: white;
}

.badge {
  display: inline-block;
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  font-size: 0.7rem;
  font-weight: 600;
  color: white;
}

.freq-daily { background-color: var(--success); }
.freq-weekly { background-color: var(--info); }
.freq-other { background-color: var(--neutral-500); }

/* Filter bars */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.filter-button {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast) var(--easing-standard);
}

.filter-button:hover {
  color: var(--text-primary);
}

.filter-button.active {
  background: var(--gradient-brand);
  border-color: transparent;
  color: white;
}

/* Form Elements */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  margin-bottom: var(--space-4);
}

.form-label {
  font-weight: 500;
  color: var(--text-primary);
}

.form-input,
.form-textarea {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.form-input:focus,
.form-textarea:focus {
  outline: none;
  border-color: var(--border-focus);
}

.form-input.invalid,
.form-textarea.invalid {
  border-color: var(--error);
}

.form-textarea {
  min-height: 140px;
  resize: vertical;
}

.form-error {
  color: var(--error);
  font-size: 0.875rem;
}

.status-banner {
  margin-top: var(--space-4);
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
}

.status-banner.success {
  background-color: rgba(16, 185, 129, 0.15);
  color: var(--success);
}

.status-banner.error {
  background-color: rgba(239, 68, 68, 0.15);
  color: var(--error);
}

/* Loading */
.loading-container {
  display: flex;
  justify-content: center;
  padding: var(--space-16) 0;
}

.spinner {
  width: 48px;
  height: 48px;
  border: 4px solid var(--border);
  border-top-color: var(--primary);
  border-radius: var(--radius-full);
  animation: spin 1s linear infinite;
}

.spinner-sm {
  width: 16px;
  height: 16px;
  border-width: 2px;
  border-top-color: white;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* Tooltips */
.tooltip-anchor {
  position: relative;
}

.tooltip {
  position: absolute;
  bottom: calc(100% + var(--space-2));
  left: 50%;
  transform: translateX(-50%);
  white-space: nowrap;
  padding: var(--space-1) var(--space-2);
  border-radius: var(--radius-sm);
  background-color: var(--neutral-800);
  color: white;
  font-size: 0.75rem;
  z-index: 20;
  pointer-events: none;
}

.tooltip.error {
  background-color: var(--error);
}

.tooltip-hover {
  opacity: 0;
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.tooltip-anchor:hover .tooltip-hover {
  opacity: 1;
}

/* Modal */
.modal-overlay {
  position: fixed;
  inset: 0;
  background-color: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  z-index: 100;
  animation: fade-in var(--transition-normal) var(--easing-standard);
}

.modal-content {
  width: 100%;
  max-width: 800px;
  max-height: 90vh;
  overflow-y: auto;
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  outline: none;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4) var(--space-6);
  border-bottom: 1px solid var(--border);
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 600;
}

.modal-body {
  padding: var(--space-6);
}

.modal-image {
  width: 100%;
  max-height: 320px;
  object-fit: cover;
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-4);
}

.modal-subtitle {
  font-size: 1.1rem;
  font-weight: 600;
  color: var(--primary);
  margin: var(--space-4) 0 var(--space-2);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* Empty states */
.empty-state {
  text-align: center;
  padding: var(--space-12) 0;
  color: var(--text-secondary);
}

.empty-state .btn {
  margin-top: var(--space-4);
}

.error-panel {
  max-width: 640px;
  margin: var(--space-16) auto;
  padding: var(--space-6);
  border: 1px solid var(--error);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
}

.error-panel pre {
  white-space: pre-wrap;
  color: var(--error);
  margin-top: var(--space-4);
}
"#;
