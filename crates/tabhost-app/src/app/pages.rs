//! Built-in pages for the toolbar and the initial tab.

/// Toolbar: reserves room for the native buttons and asks the host to place
/// them inside it. The toolbar is not a tab, so it only uses host-level
/// messages.
pub(super) const TOOLBAR_HTML: &str = r#"<!doctype html>
<html>
<head>
<style>
  body { margin: 0; height: 100vh; display: flex; align-items: center;
         padding-left: 80px; font: 13px system-ui, sans-serif;
         background: #1e1e24; color: #ddd; -webkit-user-select: none; }
</style>
</head>
<body>
  <span>Tabhost</span>
  <script>
    window.addEventListener('DOMContentLoaded', function () {
      window.tabhost.ipc.send('window-button:set-position', { x: 14, y: 14 });
    });
  </script>
</body>
</html>
"#;

/// Initial tab: a page with a sidebar that follows `sidebar:on-toggle`.
pub(super) const TAB_HTML: &str = r#"<!doctype html>
<html>
<head>
<style>
  body { margin: 0; height: 100vh; display: flex; font: 14px system-ui, sans-serif; }
  #sidebar { width: 220px; background: #f0f0f3; border-right: 1px solid #ccc; padding: 12px; }
  #sidebar.hidden { display: none; }
  main { flex: 1; padding: 16px; }
</style>
</head>
<body>
  <aside id="sidebar">Sidebar</aside>
  <main>
    <p>New tab</p>
    <button id="visibility">Toggle window buttons</button>
  </main>
  <script>
    var buttonsVisible = true;
    window.tabhost.ipc.on('sidebar:on-toggle', function () {
      document.getElementById('sidebar').classList.toggle('hidden');
    });
    document.getElementById('visibility').onclick = function () {
      buttonsVisible = !buttonsVisible;
      window.tabhost.ipc.send('window-button:set-visibility', buttonsVisible);
    };
  </script>
</body>
</html>
"#;
