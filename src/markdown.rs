//! Markdown rendering for the content editor preview.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render a markdown article body to HTML.
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Constrain images so an article with full-size artwork stays readable in
/// the preview pane. Alt-text events inside the image are dropped.
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut image_depth = 0usize;

    for event in parser {
        if image_depth > 0 {
            match event {
                Event::Start(_) => image_depth += 1,
                Event::End(_) => image_depth -= 1,
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::Image { dest_url, .. }) => {
                let html = format!(
                    r#"<img src="{}" style="max-width: 100%; max-height: 400px; display: block; border-radius: 4px;" />"#,
                    dest_url
                );
                events.push(Event::Html(CowStr::from(html)));
                image_depth = 1;
            }
            other => events.push(other),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_paragraph() {
        let html = parse_markdown("# Guide\n\nSome text.");
        assert!(html.contains("<h1>Guide</h1>"));
        assert!(html.contains("<p>Some text.</p>"));
    }

    #[test]
    fn test_tables_enabled() {
        let html = parse_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_image_is_constrained() {
        let html = parse_markdown("![sprite](https://example.com/mon.png)");
        assert!(html.contains(r#"src="https://example.com/mon.png""#));
        assert!(html.contains("max-width: 100%"));
        // Alt text events must not leak into the output.
        assert!(!html.contains("sprite"));
    }
}
