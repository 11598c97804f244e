/// Chrome panel behaviour: renders `chrome_state` updates and reports
/// user actions as `nav_*` IPC messages. Expects `LOADING_TEXT` to be
/// defined before it runs.
pub const CHROME_SCRIPT: &str = r#"
(function() {
    var ipc = window.vista.ipc;
    var byId = function(id) { return document.getElementById(id); };
    var view = null;

    function resolve(css, available) {
        var n = parseFloat(css);
        if (isNaN(n)) { return available; }
        var px = css.charAt(css.length - 1) === "%" ? available * n / 100 : n;
        return Math.max(0, Math.min(px, available));
    }

    function chromeHeight() {
        var style = getComputedStyle(document.documentElement);
        var h = parseFloat(style.getPropertyValue("--toolbar-height"));
        if (view && view.tabs.length > 0) {
            h += parseFloat(style.getPropertyValue("--selector-height"));
        }
        return h;
    }

    function layoutOverlay() {
        if (!view) { return; }
        var top = chromeHeight();
        var overlay = byId("overlay");
        overlay.style.top = top + "px";
        overlay.style.left = "0px";
        overlay.style.width = resolve(view.width, window.innerWidth) + "px";
        overlay.style.height = resolve(view.height, window.innerHeight - top) + "px";
    }

    function renderTabs(tabs) {
        var selector = byId("selector");
        selector.textContent = "";
        selector.classList.toggle("visible", tabs.length > 0);
        tabs.forEach(function(tab) {
            var button = document.createElement("button");
            button.textContent = tab.label;
            button.title = tab.url;
            if (tab.active) { button.classList.add("active"); }
            button.addEventListener("click", function() {
                ipc.send("nav_select", { url: tab.url });
            });
            selector.appendChild(button);
        });
    }

    function render(next) {
        view = next;
        byId("back").disabled = !view.back_enabled;
        byId("forward").disabled = !view.forward_enabled;
        byId("url-text").textContent = view.url;
        byId("url").title = view.url;
        document.body.classList.toggle("loading", view.loading);
        renderTabs(view.tabs);
        layoutOverlay();
    }

    ipc.on("chrome_state", render);
    window.addEventListener("resize", layoutOverlay);

    byId("back").addEventListener("click", function() { ipc.send("nav_back"); });
    byId("forward").addEventListener("click", function() { ipc.send("nav_forward"); });
    byId("refresh").addEventListener("click", function() { ipc.send("nav_refresh"); });
    byId("external").addEventListener("click", function() { ipc.send("nav_open_external"); });
    byId("loading-text").textContent = LOADING_TEXT;

    ipc.send("chrome_ready");
})();
"#;
