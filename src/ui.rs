use crate::models::{ActivitySet, ActivityType, Category};
use crate::selection::SelectionState;

pub fn render_index(
    activities: Option<&ActivitySet>,
    session: &SelectionState,
    support_url: Option<&str>,
) -> String {
    let Some(activities) = activities else {
        return LOADING_HTML.to_string();
    };

    let table_label = if session.show_table { "Hide all activities" } else { "Show all activities" };
    let table = if session.show_table { render_table(activities) } else { String::new() };

    INDEX_HTML
        .replace("{{LEISURE_CLASS}}", type_class(session, ActivityType::Leisure))
        .replace("{{PRODUCTIVE_CLASS}}", type_class(session, ActivityType::Productive))
        .replace("{{MODE}}", &mode_label(session))
        .replace("{{CATEGORIES}}", &render_category_buttons(activities, session))
        .replace("{{TABLE_LABEL}}", table_label)
        .replace("{{TABLE}}", &table)
        .replace("{{FOOTER}}", &render_footer(support_url))
        .replace("{{ACTIVITY}}", &escape_html(&session.current_activity))
}

fn type_class(session: &SelectionState, activity_type: ActivityType) -> &'static str {
    if session.active_type == activity_type && session.selected_category.is_none() {
        "btn-type active"
    } else {
        "btn-type"
    }
}

fn mode_label(session: &SelectionState) -> String {
    match &session.selected_category {
        Some(name) => format!("Category: {}", escape_html(name)),
        None => format!("{} ideas", session.active_type.label()),
    }
}

fn render_category_buttons(activities: &ActivitySet, session: &SelectionState) -> String {
    let mut html = String::new();
    for (activity_type, categories) in [
        (ActivityType::Leisure, &activities.leisure),
        (ActivityType::Productive, &activities.productive),
    ] {
        if categories.is_empty() {
            continue;
        }
        html.push_str(&format!(
            "<div class=\"chips\"><span class=\"chips-label\">{}</span>",
            activity_type.label()
        ));
        for category in categories {
            let selected = session.selected_category.as_deref() == Some(category.name.as_str());
            let name = escape_html(&category.name);
            html.push_str(&format!(
                "<form method=\"post\" action=\"/category\"><input type=\"hidden\" name=\"name\" value=\"{name}\" /><button class=\"chip{}\" type=\"submit\" aria-pressed=\"{selected}\">{name}</button></form>",
                if selected { " selected" } else { "" },
            ));
        }
        html.push_str("</div>");
    }
    html
}

fn render_table(activities: &ActivitySet) -> String {
    let mut rows = String::new();
    for (activity_type, categories) in [
        (ActivityType::Leisure, &activities.leisure),
        (ActivityType::Productive, &activities.productive),
    ] {
        for category in categories {
            rows.push_str(&render_row(activity_type, category));
        }
    }

    format!(
        "<table class=\"catalog\"><thead><tr><th>Type</th><th>Category</th><th>Activities</th></tr></thead><tbody>{rows}</tbody></table>"
    )
}

fn render_row(activity_type: ActivityType, category: &Category) -> String {
    let items = if category.activities.is_empty() {
        "<em>none</em>".to_string()
    } else {
        category
            .activities
            .iter()
            .map(|activity| escape_html(activity))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "<tr><td>{}</td><td>{}</td><td>{items}</td></tr>",
        activity_type.label(),
        escape_html(&category.name),
    )
}

fn render_footer(support_url: Option<&str>) -> String {
    match support_url {
        Some(url) => format!(
            "<a class=\"support\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Support this project</a>",
            escape_html(url)
        ),
        None => String::new(),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            // keeps loaded text from matching a template slot
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const LOADING_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta http-equiv="refresh" content="1" />
  <title>One-Hour Activity Generator</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      font-family: "Trebuchet MS", sans-serif;
      background: #f4f1ea;
      color: #2d2a26;
    }
  </style>
</head>
<body>
  <p>Loading activities...</p>
</body>
</html>
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>One-Hour Activity Generator</title>
  <style>
    :root {
      --paper: #f4f1ea;
      --ink: #2d2a26;
      --muted: #77706a;
      --leisure: #3b82f6;
      --productive: #16a34a;
      --panel: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      padding: 32px 16px;
      background: var(--paper);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
    }

    main {
      width: min(720px, 100%);
      background: var(--panel);
      border-radius: 24px;
      padding: 32px;
      box-shadow: 0 18px 48px rgba(45, 42, 38, 0.12);
      display: grid;
      gap: 24px;
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .mode {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
    }

    .idea {
      margin: 0;
      font-size: 1.35rem;
      min-height: 2em;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 12px;
    }

    form {
      margin: 0;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    .btn-generate {
      background: var(--ink);
    }

    .btn-type {
      background: #9ca3af;
    }

    .btn-type.leisure.active {
      background: var(--leisure);
    }

    .btn-type.productive.active {
      background: var(--productive);
    }

    .chips {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    .chips-label {
      color: var(--muted);
      font-size: 0.85rem;
      margin-right: 4px;
    }

    .chip {
      padding: 6px 14px;
      background: #e7e2d9;
      color: var(--ink);
      font-weight: 500;
    }

    .chip.selected {
      background: var(--ink);
      color: white;
    }

    .btn-table {
      background: transparent;
      color: var(--muted);
      text-decoration: underline;
      font-weight: 500;
    }

    .catalog {
      width: 100%;
      border-collapse: collapse;
      text-align: left;
      font-size: 0.9rem;
    }

    .catalog th,
    .catalog td {
      padding: 8px 10px;
      border-bottom: 1px solid #e7e2d9;
      vertical-align: top;
    }

    .support {
      color: var(--muted);
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main>
    <h1>One-Hour Activity Generator</h1>
    <p class="mode">{{MODE}}</p>
    <p class="idea" id="activity">{{ACTIVITY}}</p>

    <section class="row">
      <form method="post" action="/generate">
        <button class="btn-generate" type="submit">Generate Idea</button>
      </form>
      <form method="post" action="/type/leisure">
        <button class="{{LEISURE_CLASS}} leisure" type="submit">Leisure Activity</button>
      </form>
      <form method="post" action="/type/productive">
        <button class="{{PRODUCTIVE_CLASS}} productive" type="submit">Productive Activity</button>
      </form>
    </section>

    <section>
      {{CATEGORIES}}
    </section>

    <section>
      <form method="post" action="/table/toggle">
        <button class="btn-table" type="submit">{{TABLE_LABEL}}</button>
      </form>
      {{TABLE}}
    </section>

    <footer>{{FOOTER}}</footer>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn activities() -> ActivitySet {
        ActivitySet {
            leisure: vec![Category {
                name: "Outdoors".into(),
                activities: vec!["Walk".into(), "Hike".into()],
            }],
            productive: vec![Category {
                name: "Home & Garden".into(),
                activities: vec![],
            }],
        }
    }

    #[test]
    fn renders_loading_view_before_data() {
        let html = render_index(None, &SelectionState::default(), None);
        assert!(html.contains("Loading activities..."));
        assert!(!html.contains("Generate Idea"));
    }

    #[test]
    fn renders_category_buttons_and_placeholder() {
        let set = activities();
        let html = render_index(Some(&set), &SelectionState::default(), None);
        assert!(html.contains("Click a button for an idea!"));
        assert!(html.contains("value=\"Outdoors\""));
        assert!(html.contains("Home &amp; Garden"));
        assert!(html.contains("Show all activities"));
        assert!(!html.contains("class=\"catalog\""));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn marks_selected_category() {
        let set = activities();
        let mut session = SelectionState::default();
        session.toggle_category("Outdoors");
        let html = render_index(Some(&set), &session, None);
        assert!(html.contains("chip selected"));
        assert!(html.contains("Category: Outdoors"));
    }

    #[test]
    fn table_lists_every_category_when_visible() {
        let set = activities();
        let mut session = SelectionState::default();
        session.toggle_table();
        let html = render_index(Some(&set), &session, None);
        assert!(html.contains("class=\"catalog\""));
        assert!(html.contains("Walk, Hike"));
        assert!(html.contains("<em>none</em>"));
        assert!(html.contains("Hide all activities"));
    }

    #[test]
    fn activity_text_is_escaped() {
        let set = activities();
        let session = SelectionState {
            current_activity: "<script>alert(1)</script>".into(),
            ..SelectionState::default()
        };
        let html = render_index(Some(&set), &session, None);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn support_link_only_when_configured() {
        let set = activities();
        let session = SelectionState::default();
        assert!(!render_index(Some(&set), &session, None).contains("Support this project"));
        let html = render_index(Some(&set), &session, Some("https://example.org/donate"));
        assert!(html.contains("href=\"https://example.org/donate\""));
    }
}
