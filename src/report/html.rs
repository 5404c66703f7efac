// file: src/report/html.rs
// description: markdown to html conversion with pulldown-cmark
// reference: https://docs.rs/pulldown-cmark

use pulldown_cmark::{Options, Parser, html};

pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, parser);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Pi Forensics Report</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        body
    )
}
