use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::Html;

/// Parses a full HTML document with scripting disabled, so `<noscript>`
/// content is built as elements instead of raw text.
pub fn parse_html_document(html_content: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    driver::parse_document(Html::new_document(), opts).one(html_content)
}
