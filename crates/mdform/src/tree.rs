//! Block tree: the shared document abstraction of both pipelines.
//!
//! The extractor parses markdown into a flat list of top-level [`Block`]s
//! using `pulldown-cmark` events; the serializer builds the same list
//! transiently and renders it back to text. Only headings, paragraphs, and
//! lists are represented — everything else (code blocks, blockquotes,
//! tables, HTML) is dropped during parsing and never emitted during
//! rendering.
//!
//! Inline content is flattened to plain text: formatting marks are removed,
//! soft and hard breaks become newlines inside paragraphs and spaces inside
//! headings and list items.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

/// A top-level block node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading of any depth with its flattened text.
    Heading {
        /// Heading depth, 1–6.
        depth: u8,
        /// Flattened, trimmed heading text.
        text: String,
    },
    /// A paragraph with its flattened text.
    Paragraph {
        /// Flattened paragraph text; soft breaks appear as newlines.
        text: String,
        /// Whether the paragraph's first inline child is an emphasis span.
        /// Form generators mark unanswered fields as `_No response_`.
        emphasis_lead: bool,
    },
    /// A bullet or ordered list with flattened item texts.
    List {
        /// Item texts in document order.
        items: Vec<String>,
    },
}

/// Open-tag bookkeeping during the event walk. Events are well nested, so a
/// plain frame stack is enough to tell top-level blocks from nested content
/// without matching concrete end-tag variants.
#[derive(Debug, Clone, Copy)]
enum Frame {
    Heading(u8),
    Paragraph,
    List,
    Item,
    Emphasis,
    Inline,
    Container,
}

fn frame_for(tag: &Tag<'_>) -> Frame {
    match tag {
        Tag::Heading { level, .. } => Frame::Heading(heading_depth(*level)),
        Tag::Paragraph => Frame::Paragraph,
        Tag::List(_) => Frame::List,
        Tag::Item => Frame::Item,
        Tag::Emphasis => Frame::Emphasis,
        Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. } => Frame::Inline,
        _ => Frame::Container,
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// The top-level block currently being accumulated.
#[derive(Debug)]
enum OpenBlock {
    Heading {
        depth: u8,
        text: String,
    },
    Paragraph {
        text: String,
        emphasis_lead: bool,
        seen_inline: bool,
    },
    List {
        items: Vec<String>,
        item: Option<String>,
    },
}

impl OpenBlock {
    fn finish(self) -> Block {
        match self {
            Self::Heading { depth, text } => Block::Heading {
                depth,
                text: text.trim().to_string(),
            },
            Self::Paragraph {
                text,
                emphasis_lead,
                ..
            } => Block::Paragraph {
                text,
                emphasis_lead,
            },
            Self::List { items, .. } => Block::List { items },
        }
    }
}

/// Parse markdown into its top-level blocks.
///
/// Only direct children of the document root are visited; blocks nested
/// inside containers (blockquotes, footnote definitions) are not. Top-level
/// node types other than heading, paragraph, and list are dropped.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut current: Option<OpenBlock> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(tag) => {
                let frame = frame_for(&tag);
                if stack.is_empty() {
                    current = match frame {
                        Frame::Heading(depth) => Some(OpenBlock::Heading {
                            depth,
                            text: String::new(),
                        }),
                        Frame::Paragraph => Some(OpenBlock::Paragraph {
                            text: String::new(),
                            emphasis_lead: false,
                            seen_inline: false,
                        }),
                        Frame::List => Some(OpenBlock::List {
                            items: Vec::new(),
                            item: None,
                        }),
                        // Other top-level containers are ignored wholesale;
                        // their nested events find no open block.
                        _ => None,
                    };
                } else {
                    match &mut current {
                        Some(OpenBlock::Paragraph {
                            emphasis_lead,
                            seen_inline,
                            ..
                        }) => {
                            if !*seen_inline {
                                *emphasis_lead = matches!(frame, Frame::Emphasis);
                                *seen_inline = true;
                            }
                        }
                        Some(OpenBlock::List { item, .. }) => {
                            if matches!(frame, Frame::Item) && stack.len() == 1 {
                                *item = Some(String::new());
                            } else if let Some(text) = item.as_mut() {
                                // Nested block boundary flattens to a space.
                                if matches!(
                                    frame,
                                    Frame::Paragraph
                                        | Frame::List
                                        | Frame::Item
                                        | Frame::Heading(_)
                                        | Frame::Container
                                ) && !text.is_empty()
                                    && !text.ends_with(' ')
                                {
                                    text.push(' ');
                                }
                            }
                        }
                        _ => {}
                    }
                }
                stack.push(frame);
            }
            Event::End(_) => {
                let frame = stack.pop();
                if stack.is_empty() {
                    if let Some(open) = current.take() {
                        blocks.push(open.finish());
                    }
                } else if let Some(OpenBlock::List { items, item }) = &mut current {
                    match frame {
                        Some(Frame::Item) if stack.len() == 1 => {
                            if let Some(text) = item.take() {
                                items.push(text);
                            }
                        }
                        Some(
                            Frame::Paragraph
                            | Frame::List
                            | Frame::Item
                            | Frame::Heading(_)
                            | Frame::Container,
                        ) => {
                            // Block boundary inside an item flattens to a
                            // space separator.
                            if let Some(text) = item.as_mut() {
                                if !text.is_empty() && !text.ends_with(' ') {
                                    text.push(' ');
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::Text(content) | Event::Code(content) => match &mut current {
                Some(OpenBlock::Heading { text, .. }) => text.push_str(&content),
                Some(OpenBlock::Paragraph {
                    text, seen_inline, ..
                }) => {
                    *seen_inline = true;
                    text.push_str(&content);
                }
                Some(OpenBlock::List {
                    item: Some(text), ..
                }) => text.push_str(&content),
                _ => {}
            },
            Event::SoftBreak | Event::HardBreak => match &mut current {
                Some(OpenBlock::Heading { text, .. }) => {
                    if !text.is_empty() && !text.ends_with(' ') {
                        text.push(' ');
                    }
                }
                Some(OpenBlock::Paragraph {
                    text, seen_inline, ..
                }) => {
                    *seen_inline = true;
                    text.push('\n');
                }
                Some(OpenBlock::List {
                    item: Some(text), ..
                }) => {
                    if !text.is_empty() && !text.ends_with(' ') {
                        text.push(' ');
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    blocks
}

/// Render blocks back to markdown text.
///
/// Deterministic dialect: headings as `#` runs, lists with `-` bullets and
/// tight items (no blank line between items), blocks separated by one blank
/// line, literal text backslash-escaped so re-parsing yields it unchanged.
/// The final output is trimmed.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut rendered: Vec<String> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            Block::Heading { depth, text } => {
                let depth = usize::from((*depth).clamp(1, 6));
                rendered.push(format!("{} {}", "#".repeat(depth), escape_text(text)));
            }
            Block::Paragraph { text, .. } => rendered.push(escape_text(text)),
            Block::List { items } => {
                let lines: Vec<String> = items
                    .iter()
                    .map(|item| format!("- {}", escape_text(item)))
                    .collect();
                rendered.push(lines.join("\n"));
            }
        }
    }

    rendered.join("\n\n").trim().to_string()
}

/// Escape literal text so it survives a render/parse round trip.
fn escape_text(text: &str) -> String {
    text.lines()
        .map(escape_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_line(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len() + 4);
    for c in line.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '~' | '|') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    guard_block_start(escaped)
}

/// Escape a leading character that would otherwise start a new block
/// construct (heading, list, blockquote, ordered-list number).
fn guard_block_start(line: String) -> String {
    match line.as_bytes().first() {
        Some(b'#' | b'-' | b'+' | b'>') => format!("\\{line}"),
        Some(b) if b.is_ascii_digit() => {
            let digits = line
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(line.len());
            match line.as_bytes().get(digits) {
                Some(b'.' | b')') => {
                    format!("{}\\{}", &line[..digits], &line[digits..])
                }
                _ => line,
            }
        }
        _ => line,
    }
}
