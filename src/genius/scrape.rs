use std::sync::LazyLock;

use scraper::{Html, Node, Selector};

use crate::error::LyricsError;

// Current page layout first, then the legacy single `div.lyrics` layout.
static CONTAINERS: LazyLock<[Selector; 2]> = LazyLock::new(|| {
    [
        Selector::parse(r#"div[data-lyrics-container="true"]"#).expect("static selector"),
        Selector::parse("div.lyrics").expect("static selector"),
    ]
});

/// Extracts the lyric text from a Genius song page.
///
/// Text of all lyric containers is concatenated; `<br>` becomes a newline
/// and each container ends with one. A page without any lyric container is
/// a [`LyricsError::Parse`]; a container without text yields an empty string.
pub fn extract_lyrics(html: &str, url: &str) -> Result<String, LyricsError> {
    let document = Html::parse_document(html);

    for selector in CONTAINERS.iter() {
        let mut containers = document.select(selector).peekable();
        if containers.peek().is_none() {
            continue;
        }

        let mut lyrics = String::new();
        for container in containers {
            for node in container.descendants() {
                match node.value() {
                    Node::Text(text) => lyrics.push_str(text),
                    Node::Element(element) if element.name() == "br" => lyrics.push('\n'),
                    _ => {}
                }
            }
            lyrics.push('\n');
        }

        return Ok(lyrics.trim().to_string());
    }

    Err(LyricsError::Parse {
        url: url.to_string(),
        reason: "no lyrics container on page".to_string(),
    })
}
