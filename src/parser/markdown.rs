use pulldown_cmark::{html, Options as CmarkOptions, Parser};

// compiles raw Markdown into an HTML fragment for the page view
pub fn render_markdown(markdown_content: &str) -> String {
    let mut options = CmarkOptions::empty();
    options.insert(CmarkOptions::ENABLE_STRIKETHROUGH);
    options.insert(CmarkOptions::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown_content, options);

    let mut html_content = String::new();
    html::push_html(&mut html_content, parser);

    html_content
}
