//! Markdown event stream to HTML.
//!
//! [`HtmlWriter`] walks pulldown-cmark events and produces plain HTML5. It
//! knows nothing about image directives: every image is handed, with its alt
//! text as written in the source, to an [`ImageHandler`].

use std::fmt::Write;
use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::state::{ImageState, TableState, escape_html};
use crate::util::heading_level_to_num;

/// Renders image nodes for [`HtmlWriter`].
pub trait ImageHandler {
    /// Write HTML for an image.
    ///
    /// `alt` is the image description exactly as written in the source, with
    /// bracket escapes removed and line breaks turned into spaces. `title` is
    /// empty when the source has none.
    fn image(&mut self, src: &str, alt: &str, title: &str, out: &mut String);
}

/// Writes images as ordinary `<img>` tags.
#[derive(Debug, Default)]
pub struct PlainImages;

impl ImageHandler for PlainImages {
    fn image(&mut self, src: &str, alt: &str, title: &str, out: &mut String) {
        write!(out, r#"<img src="{}""#, escape_html(src)).unwrap();
        if !title.is_empty() {
            write!(out, r#" title="{}""#, escape_html(title)).unwrap();
        }
        write!(out, r#" alt="{}">"#, escape_html(alt)).unwrap();
    }
}

/// HTML writer for pulldown-cmark events.
///
/// # Example
///
/// ```
/// use pulldown_cmark::Options;
/// use folio_renderer::{HtmlWriter, PlainImages};
///
/// let mut writer = HtmlWriter::new(PlainImages);
/// let html = writer.write("**Bold** ![*a* | scale=50](x.png)", Options::empty());
/// assert_eq!(
///     html,
///     r#"<p><strong>Bold</strong> <img src="x.png" alt="*a* | scale=50"></p>"#
/// );
/// ```
pub struct HtmlWriter<H: ImageHandler> {
    output: String,
    table: TableState,
    image: ImageState,
    pending_image: Option<(String, String)>,
    handler: H,
}

impl<H: ImageHandler> HtmlWriter<H> {
    /// Create a writer that delegates images to `handler`.
    #[must_use]
    pub fn new(handler: H) -> Self {
        Self {
            output: String::with_capacity(4096),
            table: TableState::default(),
            image: ImageState::default(),
            pending_image: None,
            handler,
        }
    }

    /// Parse `source` with `options` and return the HTML.
    pub fn write(&mut self, source: &str, options: Options) -> String {
        for (event, range) in Parser::new_ext(source, options).into_offset_iter() {
            match event {
                Event::Start(Tag::Image {
                    dest_url, title, ..
                }) => self.start_image(&range, &dest_url, &title),
                Event::End(TagEnd::Image) => self.end_image(source),
                // Description content is read back from the source.
                _ if self.image.is_active() => self.image.extend_to(range.end),
                event => self.process_event(event),
            }
        }
        std::mem::take(&mut self.output)
    }

    /// Borrow the image handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Consume the writer, returning the image handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    fn start_image(&mut self, range: &Range<usize>, src: &str, title: &str) {
        if self.image.start(range) {
            self.pending_image = Some((src.to_owned(), title.to_owned()));
        }
    }

    fn end_image(&mut self, source: &str) {
        if let Some(alt) = self.image.end(source)
            && let Some((src, title)) = self.pending_image.take()
        {
            self.handler.image(&src, &alt, &title, &mut self.output);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.output.push_str(&html),
            Event::SoftBreak => self.output.push('\n'),
            Event::HardBreak => self.output.push_str("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => {
                self.output.push_str(if checked {
                    r#"<input type="checkbox" disabled checked>"#
                } else {
                    r#"<input type="checkbox" disabled>"#
                });
            }
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not enabled in parser options
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => {
                write!(self.output, "<h{}>", heading_level_to_num(level)).unwrap();
            }
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let lang = match &kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next(),
                    CodeBlockKind::Indented => None,
                };
                match lang {
                    Some(lang) => write!(
                        self.output,
                        r#"<pre><code class="language-{}">"#,
                        escape_html(lang)
                    )
                    .unwrap(),
                    None => self.output.push_str("<pre><code>"),
                }
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            // Images are handled in `write`, which has their source range.
            Tag::FootnoteDefinition(_)
            | Tag::HtmlBlock
            | Tag::MetadataBlock(_)
            | Tag::Image { .. } => {}
            Tag::DefinitionList => self.output.push_str("<dl>"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.start_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.current_alignment_style();
                let tag = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.output, "<{tag}{align}>").unwrap();
            }
            Tag::Emphasis => self.output.push_str("<em>"),
            Tag::Strong => self.output.push_str("<strong>"),
            Tag::Strikethrough => self.output.push_str("<del>"),
            Tag::Superscript => self.output.push_str("<sup>"),
            Tag::Subscript => self.output.push_str("<sub>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                let mut link = format!(r#"<a href="{}""#, escape_html(&dest_url));
                if !title.is_empty() {
                    write!(link, r#" title="{}""#, escape_html(&title)).unwrap();
                }
                link.push('>');
                self.output.push_str(&link);
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(level) => {
                write!(self.output, "</h{}>", heading_level_to_num(level)).unwrap();
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => self.output.push_str("</code></pre>"),
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::FootnoteDefinition
            | TagEnd::HtmlBlock
            | TagEnd::MetadataBlock(_)
            | TagEnd::Image => {}
            TagEnd::DefinitionList => self.output.push_str("</dl>"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.output.push_str("</em>"),
            TagEnd::Strong => self.output.push_str("</strong>"),
            TagEnd::Strikethrough => self.output.push_str("</del>"),
            TagEnd::Superscript => self.output.push_str("</sup>"),
            TagEnd::Subscript => self.output.push_str("</sub>"),
            TagEnd::Link => self.output.push_str("</a>"),
        }
    }

    fn text(&mut self, text: &str) {
        self.output.push_str(&escape_html(text));
    }

    fn inline_code(&mut self, code: &str) {
        write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        HtmlWriter::new(PlainImages).write(markdown, options)
    }

    fn alts(markdown: &str) -> Vec<String> {
        let mut writer = HtmlWriter::new(Recorder::default());
        writer.write(markdown, Options::empty());
        writer.into_handler().seen.into_iter().map(|(_, alt, _)| alt).collect()
    }

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(String, String, String)>,
    }

    impl ImageHandler for Recorder {
        fn image(&mut self, src: &str, alt: &str, title: &str, out: &mut String) {
            self.seen
                .push((src.to_owned(), alt.to_owned(), title.to_owned()));
            out.push_str("[img]");
        }
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render("Hello, world!"), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_heading() {
        assert_eq!(render("## Section"), "<h2>Section</h2>");
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(
            render("**bold** *italic* ~~gone~~ `code`"),
            "<p><strong>bold</strong> <em>italic</em> <del>gone</del> <code>code</code></p>"
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render(r#"[docs](http://x.dev "Docs")"#),
            r#"<p><a href="http://x.dev" title="Docs">docs</a></p>"#
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(render("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(render("3. c\n4. d"), r#"<ol start="3"><li>c</li><li>d</li></ol>"#);
    }

    #[test]
    fn test_task_list() {
        assert_eq!(
            render("- [x] done"),
            r#"<ul><li><input type="checkbox" disabled checked>done</li></ul>"#
        );
    }

    #[test]
    fn test_code_block_escaped() {
        assert_eq!(
            render("```html\n<b>\n```"),
            r#"<pre><code class="language-html">&lt;b&gt;
</code></pre>"#
        );
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(render("a\n\n---\n\nb"), "<p>a</p><hr><p>b</p>");
    }

    #[test]
    fn test_table() {
        assert_eq!(
            render("| a | b |\n|---|--:|\n| 1 | 2 |"),
            concat!(
                "<table><thead><tr><th>a</th>",
                r#"<th style="text-align:right">b</th></tr></thead>"#,
                "<tbody><tr><td>1</td>",
                r#"<td style="text-align:right">2</td></tr></tbody></table>"#
            )
        );
    }

    #[test]
    fn test_text_escaped() {
        assert_eq!(render("a < b & c"), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_plain_image_keeps_directive_text() {
        assert_eq!(
            render(r#"![Pic | scale=80 | align=left](p.png "T")"#),
            r#"<p><img src="p.png" title="T" alt="Pic | scale=80 | align=left"></p>"#
        );
    }

    #[test]
    fn test_image_alt_keeps_inline_markup() {
        let mut writer = HtmlWriter::new(Recorder::default());
        let html = writer.write("![*big* `cat` | scale=50](c.png)", Options::empty());
        assert_eq!(html, "<p>[img]</p>");
        assert_eq!(
            writer.handler().seen,
            vec![("c.png".to_owned(), "*big* `cat` | scale=50".to_owned(), String::new())]
        );
    }

    #[test]
    fn test_image_alt_as_written() {
        assert_eq!(alts("![2*3*4](u.png)"), vec!["2*3*4"]);
        assert_eq!(alts("![a_b_ and _c_](u.png)"), vec!["a_b_ and _c_"]);
        assert_eq!(alts("![x &amp; y](u.png)"), vec!["x &amp; y"]);
        assert_eq!(alts("![<b>hi</b>](u.png)"), vec!["<b>hi</b>"]);
        assert_eq!(alts("![`a]b` c](u.png)"), vec!["`a]b` c"]);
        assert_eq!(alts(r"![a\]b](u.png)"), vec!["a]b"]);
        assert_eq!(alts("![](u.png)"), vec![""]);
    }

    #[test]
    fn test_image_alt_across_lines() {
        assert_eq!(alts("![one\ntwo](u.png)"), vec!["one two"]);
    }

    #[test]
    fn test_reference_image_alt() {
        assert_eq!(alts("![*ref* pic][r]\n\n[r]: r.png"), vec!["*ref* pic"]);
    }

    #[test]
    fn test_markup_after_image_kept() {
        assert_eq!(
            render("![*a*](u.png) *b*"),
            r#"<p><img src="u.png" alt="*a*"> <em>b</em></p>"#
        );
    }

    #[test]
    fn test_images_in_document_order() {
        let mut writer = HtmlWriter::new(Recorder::default());
        writer.write("![one](1.png)\n\ntext\n\n![two](2.png)", Options::empty());
        let srcs: Vec<_> = writer
            .into_handler()
            .seen
            .into_iter()
            .map(|(src, _, _)| src)
            .collect();
        assert_eq!(srcs, vec!["1.png", "2.png"]);
    }

    #[test]
    fn test_nested_image_renders_once() {
        let mut writer = HtmlWriter::new(Recorder::default());
        let html = writer.write("![outer ![inner](i.png)](o.png)", Options::empty());
        assert_eq!(html, "<p>[img]</p>");
        let seen = &writer.handler().seen;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "o.png");
        assert_eq!(seen[0].1, "outer ![inner](i.png)");
    }
}
