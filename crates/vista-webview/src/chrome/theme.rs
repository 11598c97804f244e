//! CSS for the chrome panel, one palette per `ChromeTheme`.

use vista_config::ChromeTheme;

/// CSS custom properties of a theme, as `(name, value)` pairs.
pub fn palette(theme: ChromeTheme) -> &'static [(&'static str, &'static str)] {
    match theme {
        ChromeTheme::Plain => &[
            ("--toolbar-bg", "#ffffff"),
            ("--toolbar-fg", "#1f2937"),
            ("--control-bg", "transparent"),
            ("--control-border", "transparent"),
            ("--control-disabled", "#c4c9d1"),
            ("--url-bg", "#f3f4f6"),
            ("--url-border", "transparent"),
            ("--tab-fg", "#4b5563"),
            ("--tab-active-bg", "#e5e7eb"),
            ("--accent", "#2563eb"),
            ("--overlay-bg", "rgba(255, 255, 255, 0.85)"),
            ("--overlay-fg", "#1f2937"),
        ],
        ChromeTheme::Outlined => &[
            ("--toolbar-bg", "#f9fafb"),
            ("--toolbar-fg", "#111827"),
            ("--control-bg", "#ffffff"),
            ("--control-border", "#d1d5db"),
            ("--control-disabled", "#d1d5db"),
            ("--url-bg", "#ffffff"),
            ("--url-border", "#9ca3af"),
            ("--tab-fg", "#374151"),
            ("--tab-active-bg", "#ffffff"),
            ("--accent", "#0f766e"),
            ("--overlay-bg", "rgba(249, 250, 251, 0.9)"),
            ("--overlay-fg", "#111827"),
        ],
        ChromeTheme::Midnight => &[
            ("--toolbar-bg", "rgb(16, 24, 40)"),
            ("--toolbar-fg", "#e5e7eb"),
            ("--control-bg", "rgba(255, 255, 255, 0.06)"),
            ("--control-border", "rgba(255, 255, 255, 0.12)"),
            ("--control-disabled", "rgba(229, 231, 235, 0.3)"),
            ("--url-bg", "rgba(255, 255, 255, 0.08)"),
            ("--url-border", "rgba(255, 255, 255, 0.12)"),
            ("--tab-fg", "#9ca3af"),
            ("--tab-active-bg", "rgba(255, 255, 255, 0.12)"),
            ("--accent", "#38bdf8"),
            ("--overlay-bg", "rgba(16, 24, 40, 0.9)"),
            ("--overlay-fg", "#e5e7eb"),
        ],
    }
}

/// `:root` block with the theme palette and the panel geometry.
pub fn css_root(theme: ChromeTheme, toolbar_height: u32, selector_height: u32) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in palette(theme) {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push_str(&format!("  --toolbar-height: {toolbar_height}px;\n"));
    css.push_str(&format!("  --selector-height: {selector_height}px;\n"));
    css.push('}');
    css
}

/// Layout rules shared by every theme.
pub const BASE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
html, body {
    background: transparent;
    overflow: hidden;
    height: 100%;
    font: 13px -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    user-select: none;
}
#toolbar {
    display: flex;
    align-items: center;
    gap: 6px;
    height: var(--toolbar-height);
    padding: 0 10px;
    background: var(--toolbar-bg);
    color: var(--toolbar-fg);
}
#toolbar button {
    width: 30px;
    height: 30px;
    border-radius: 6px;
    border: 1px solid var(--control-border);
    background: var(--control-bg);
    color: var(--toolbar-fg);
    font-size: 16px;
    cursor: pointer;
}
#toolbar button:disabled { color: var(--control-disabled); cursor: default; }
#url {
    flex: 1;
    display: flex;
    align-items: center;
    gap: 8px;
    height: 30px;
    padding: 0 10px;
    border-radius: 6px;
    border: 1px solid var(--url-border);
    background: var(--url-bg);
    overflow: hidden;
}
#url-text { white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
#selector {
    display: none;
    align-items: center;
    gap: 4px;
    height: var(--selector-height);
    padding: 0 10px;
    background: var(--toolbar-bg);
    overflow-x: auto;
}
#selector.visible { display: flex; }
#selector button {
    padding: 4px 10px;
    border: none;
    border-radius: 4px;
    background: transparent;
    color: var(--tab-fg);
    white-space: nowrap;
    cursor: pointer;
}
#selector button.active { background: var(--tab-active-bg); color: var(--toolbar-fg); }
.spinner {
    width: 14px;
    height: 14px;
    border: 2px solid var(--control-disabled);
    border-top-color: var(--accent);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
#url .spinner { display: none; }
body.loading #url .spinner { display: block; }
#overlay {
    position: absolute;
    display: none;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 12px;
    background: var(--overlay-bg);
    color: var(--overlay-fg);
}
#overlay .spinner { width: 28px; height: 28px; border-width: 3px; }
body.loading #overlay { display: flex; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_defines_the_same_variables() {
        let names = |t| palette(t).iter().map(|(n, _)| *n).collect::<Vec<_>>();
        assert_eq!(names(ChromeTheme::Plain), names(ChromeTheme::Midnight));
        assert_eq!(names(ChromeTheme::Outlined), names(ChromeTheme::Midnight));
    }

    #[test]
    fn midnight_overlay_is_translucent_navy() {
        let css = css_root(ChromeTheme::Midnight, 56, 36);
        assert!(css.contains("--overlay-bg: rgba(16, 24, 40, 0.9);"));
        assert!(css.contains("--toolbar-bg: rgb(16, 24, 40);"));
    }

    #[test]
    fn geometry_is_emitted() {
        let css = css_root(ChromeTheme::Plain, 48, 30);
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--toolbar-height: 48px;"));
        assert!(css.contains("--selector-height: 30px;"));
        assert!(css.ends_with('}'));
    }
}
