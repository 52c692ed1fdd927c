//! Shared page chrome: navigation, footer, styles and the toggle script.

use std::fmt::Write;

/// Pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Tools,
    Favorites,
    Analytics,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Tools, Page::Favorites, Page::Analytics];

    pub fn path(self) -> &'static str {
        match self {
            Page::Tools => "/",
            Page::Favorites => "/ui/favorites",
            Page::Analytics => "/ui/analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Tools => "All Tools",
            Page::Favorites => "Favorites",
            Page::Analytics => "Analytics",
        }
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #111; }
nav, main, footer { max-width: 1100px; margin: 0 auto; padding: 1rem; }
nav a { margin-right: 1rem; text-decoration: none; color: #555; }
nav a.active { color: #111; font-weight: 600; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
.card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; }
.badge { display: inline-block; background: #eee; border-radius: 4px; padding: 0 .4rem; margin: 0 .2rem .2rem 0; font-size: .8rem; }
.stats { display: grid; grid-template-columns: repeat(4, 1fr); text-align: center; }
.stats strong { display: block; font-size: 1.6rem; }
#toast { position: fixed; bottom: 1rem; right: 1rem; background: #b00020; color: #fff; padding: .6rem 1rem; border-radius: 6px; display: none; }
footer { border-top: 1px solid #ddd; color: #666; font-size: .9rem; }
"#;

/// Calls the favorites API, reloads on success, shows a toast on failure.
const TOGGLE_SCRIPT: &str = r#"
async function toggleFavorite(button) {
  const id = Number(button.dataset.id);
  const remove = button.dataset.favorite === "true";
  button.disabled = true;
  try {
    const response = remove
      ? await fetch(`/favorites/${id}`, { method: "DELETE" })
      : await fetch("/favorites", {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify({ toolId: id }),
        });
    if (!response.ok) {
      const body = await response.json().catch(() => ({}));
      throw new Error(body.message || "Request failed");
    }
    window.location.reload();
  } catch (error) {
    const toast = document.getElementById("toast");
    toast.textContent = error.message;
    toast.style.display = "block";
    setTimeout(() => { toast.style.display = "none"; }, 3000);
    button.disabled = false;
  }
}
"#;

/// Wrap page content in the shared document shell.
pub fn render_page(active: Page, title: &str, content: &str) -> String {
    let mut html = String::with_capacity(content.len() + 4096);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | AI Tools Directory</title>\n<style>{}</style>\n</head>\n<body>\n<nav>",
        escape(title),
        STYLE
    );

    for page in Page::ALL {
        let class = if page == active { " class=\"active\"" } else { "" };
        let _ = write!(
            html,
            "<a href=\"{}\"{}>{}</a>",
            page.path(),
            class,
            page.label()
        );
    }

    let _ = write!(
        html,
        "</nav>\n<main>\n{}\n</main>\n\
         <footer><strong>AI Tools Directory</strong><br>Discover and favorite the best AI tools</footer>\n\
         <div id=\"toast\" role=\"status\"></div>\n<script>{}</script>\n</body>\n</html>\n",
        content, TOGGLE_SCRIPT
    );

    html
}
