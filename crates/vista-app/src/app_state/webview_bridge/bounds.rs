//! Window layout: chrome strip on top, content area below.

use winit::window::Window;

use vista_common::Dimension;
use vista_nav::WidgetConfig;
use vista_webview::ChromePanel;

/// A rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Placement of the chrome panel and the content sandbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    pub window: Rect,
    /// Toolbar strip (selector row included when visible).
    pub chrome: Rect,
    pub content: Rect,
}

impl PreviewLayout {
    /// Lay out a `window_width` x `window_height` window.
    ///
    /// The content width resolves against the window width, the content
    /// height against what is left below the chrome; both are clamped to
    /// the space available.
    pub fn compute(
        window_width: f64,
        window_height: f64,
        chrome_height: f64,
        width: Dimension,
        height: Dimension,
    ) -> Self {
        let window_width = window_width.max(0.0);
        let window_height = window_height.max(0.0);
        let chrome_height = chrome_height.clamp(0.0, window_height);
        let available_height = window_height - chrome_height;

        Self {
            window: Rect {
                x: 0.0,
                y: 0.0,
                width: window_width,
                height: window_height,
            },
            chrome: Rect {
                x: 0.0,
                y: 0.0,
                width: window_width,
                height: chrome_height,
            },
            content: Rect {
                x: 0.0,
                y: chrome_height,
                width: width.resolve(window_width).clamp(0.0, window_width),
                height: height.resolve(available_height).clamp(0.0, available_height),
            },
        }
    }

    /// Layout for the window's current inner size.
    pub fn for_window(window: &Window, panel: &ChromePanel, config: &WidgetConfig) -> Self {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        Self::compute(
            size.width,
            size.height,
            panel.height(config.selector_visible()) as f64,
            config.width,
            config.height,
        )
    }

    /// Bounds of the chrome webview. While a page loads it spans the whole
    /// window so its overlay can cover the content area.
    pub fn chrome_bounds(&self, loading: bool) -> Rect {
        if loading {
            self.window
        } else {
            self.chrome
        }
    }
}

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================
