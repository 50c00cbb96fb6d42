//! Server-side HTML for the home page.
//!
//! The page is small enough that it is assembled with `format!`; every piece of
//! catalog or config text goes through `escape_html` first.

use crate::models::project::Project;

pub struct IndexPage<'a> {
    pub name: &'a str,
    pub tagline: &'a str,
    pub projects: &'a [Project],
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn render_card(project: &Project) -> String {
    let tags = project
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"      <article class="card" data-id="{id}" data-theme="{theme}">
        <h3>{title}</h3>
        <p>{summary}</p>
        <div class="tags">{tags}</div>
        <button class="view-project" data-id="{id}">View</button>
      </article>
"#,
        id = escape_html(&project.id),
        theme = escape_html(&project.theme),
        title = escape_html(&project.title),
        summary = escape_html(&project.summary),
    )
}

pub fn render_index(page: &IndexPage<'_>) -> String {
    let name = escape_html(page.name);
    let tagline = escape_html(page.tagline);

    let mut cards = String::new();
    for project in page.projects {
        cards.push_str(&render_card(project));
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{name}</title>
  <link rel="stylesheet" href="/static/css/style.css">
</head>
<body data-active-theme="dark">
  <nav><a href="#hero">Home</a> <a href="#projects">Projects</a> <a href="#assistant">Assistant</a></nav>

  <section id="hero" class="section" data-theme="dark">
    <div id="hero-bg"></div>
    <h1>{name}</h1>
    <p class="tagline">{tagline}</p>
  </section>

  <section id="projects" class="section" data-theme="purple">
    <h2>Projects</h2>
    <div class="cards">
{cards}    </div>
    <div class="recommender">
      <input id="reco-q" type="text" placeholder="What are you interested in?">
      <button id="reco-btn">Recommend</button>
      <div id="reco-output"></div>
    </div>
  </section>

  <section id="assistant" class="section" data-theme="green">
    <h2>Ask the assistant</h2>
    <div id="chat-window"></div>
    <input id="chat-in" type="text" placeholder="Ask me anything about my work">
    <button id="chat-send">Send</button>
  </section>

  <script src="/static/js/main.js"></script>
</body>
</html>
"##
    )
}
