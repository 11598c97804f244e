//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Vista Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[preview]
# Candidate pages, in selector order. Each must be an absolute http(s) URL.
urls = ["https://portfolio-assets-vercel-v1.vercel.app/"]
# default_url = "https://portfolio-assets-vercel-v1.vercel.app/"
# width = "100%"          # number (px), "<n>px" or "<n>%"
# height = "100%"
# show_url_selector = true   # only shown with two or more URLs

[navigation]
# history_policy = "compat"      # compat, symmetric
# stale_completion_guard = true

[chrome]
# theme = "midnight"      # plain, outlined, midnight
# toolbar_height = 56     # 32-96
# selector_height = 36    # 24-64
# loading_text = "Loading website..."

[sandbox]
# user_agent = "Vista/0.1"
# devtools = false
# autoplay = false
# clipboard = false

[window]
# title = "Vista"
# width = 1280            # 320-7680
# height = 800            # 240-4320
# resizable = true

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
    .to_string()
}
