// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Turn PO content into a flat [`Catalog`].
//!
//! The PO grammar itself is handled by a [`PoGrammar`]. The default
//! grammar is [`Gettext`], a line based reader which works on
//! in-memory content and does not require a header entry.

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{Error, Result};

/// Separator used when a message has more than one translation form.
pub const FORM_SEPARATOR: &str = " | ";

/// A message as produced by the PO grammar, before flattening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    pub context: String,
    pub id: String,
    /// The translation forms in their original order.
    pub translations: Vec<String>,
}

/// A PO parser which can list the messages of a document.
pub trait PoGrammar {
    fn messages(&self, content: &[u8]) -> Result<Vec<RawMessage>>;
}

/// [`PoGrammar`] for gettext PO files.
///
/// Understands `msgctxt`, `msgid`, `msgid_plural`, `msgstr`,
/// `msgstr[N]` and continuation strings. Comment lines are skipped.
/// A header entry is optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gettext;

/// The field a continuation string is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Id,
    IdPlural,
    Translation(usize),
}

#[derive(Debug, Default)]
struct PendingMessage {
    context: Option<String>,
    id: Option<String>,
    translations: Vec<String>,
}

impl PendingMessage {
    fn is_started(&self) -> bool {
        self.context.is_some() || self.id.is_some()
    }

    fn is_complete(&self) -> bool {
        !self.translations.is_empty()
    }

    fn finish(self, lineno: usize) -> Result<RawMessage> {
        match self.id {
            Some(id) if !self.translations.is_empty() => Ok(RawMessage {
                context: self.context.unwrap_or_default(),
                id,
                translations: self.translations,
            }),
            _ => Err(grammar_error(lineno, "message without msgid and msgstr")),
        }
    }
}

fn grammar_error(lineno: usize, message: &str) -> Error {
    Error::Grammar(format!("line {lineno}: {message}"))
}

/// Decode a quoted PO string such as `"a \"b\"\n"`.
fn unquote(text: &str, lineno: usize) -> Result<String> {
    let inner = text
        .strip_prefix('"')
        .ok_or_else(|| grammar_error(lineno, "expected a quoted string"))?;
    let mut output = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if !chars.as_str().trim().is_empty() {
                    return Err(grammar_error(lineno, "unexpected text after string"));
                }
                return Ok(output);
            }
            '\\' => match chars.next() {
                Some('n') => output.push('\n'),
                Some('r') => output.push('\r'),
                Some('t') => output.push('\t'),
                Some('"') => output.push('"'),
                Some('\\') => output.push('\\'),
                // Unknown escapes are kept as written.
                Some(other) => {
                    output.push('\\');
                    output.push(other);
                }
                None => break,
            },
            _ => output.push(c),
        }
    }
    Err(grammar_error(lineno, "unterminated string"))
}

impl PoGrammar for Gettext {
    fn messages(&self, content: &[u8]) -> Result<Vec<RawMessage>> {
        let content = std::str::from_utf8(content)
            .map_err(|err| Error::Grammar(format!("invalid UTF-8: {err}")))?;

        let mut messages = Vec::new();
        let mut pending = PendingMessage::default();
        let mut field = None;
        let mut lineno = 0;
        for (idx, line) in content.lines().enumerate() {
            lineno = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('"') {
                let text = unquote(line, lineno)?;
                let target = match field {
                    Some(Field::Context) => pending.context.get_or_insert_with(String::new),
                    Some(Field::Id) => pending.id.get_or_insert_with(String::new),
                    // The plural source text is not part of the model.
                    Some(Field::IdPlural) => continue,
                    Some(Field::Translation(n)) => &mut pending.translations[n],
                    None => return Err(grammar_error(lineno, "string without keyword")),
                };
                target.push_str(&text);
                continue;
            }

            let (keyword, value) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| grammar_error(lineno, "expected a keyword and a string"))?;
            let value = unquote(value.trim_start(), lineno)?;
            match keyword {
                "msgctxt" | "msgid" => {
                    if pending.is_complete() {
                        messages.push(std::mem::take(&mut pending).finish(lineno)?);
                    }
                    if keyword == "msgctxt" {
                        if pending.is_started() {
                            return Err(grammar_error(lineno, "msgctxt inside a message"));
                        }
                        pending.context = Some(value);
                        field = Some(Field::Context);
                    } else {
                        if pending.id.is_some() {
                            return Err(grammar_error(lineno, "msgid without msgstr"));
                        }
                        pending.id = Some(value);
                        field = Some(Field::Id);
                    }
                }
                "msgid_plural" => {
                    if pending.id.is_none() || pending.is_complete() {
                        return Err(grammar_error(lineno, "msgid_plural without msgid"));
                    }
                    field = Some(Field::IdPlural);
                }
                "msgstr" => {
                    if pending.id.is_none() || pending.is_complete() {
                        return Err(grammar_error(lineno, "msgstr without msgid"));
                    }
                    pending.translations.push(value);
                    field = Some(Field::Translation(0));
                }
                _ => {
                    let index = keyword
                        .strip_prefix("msgstr[")
                        .and_then(|rest| rest.strip_suffix(']'))
                        .and_then(|index| index.parse::<usize>().ok())
                        .ok_or_else(|| grammar_error(lineno, "unknown keyword"))?;
                    if pending.id.is_none() || index != pending.translations.len() {
                        return Err(grammar_error(lineno, "msgstr[N] out of order"));
                    }
                    pending.translations.push(value);
                    field = Some(Field::Translation(index));
                }
            }
        }

        if pending.is_started() {
            messages.push(pending.finish(lineno)?);
        }
        Ok(messages)
    }
}

/// Flatten grammar messages into a catalog.
///
/// Messages with an empty id are the catalog header and are skipped.
/// When a key is repeated, the last message wins.
fn flatten(messages: Vec<RawMessage>) -> Catalog {
    messages
        .into_iter()
        .filter(|message| !message.id.is_empty())
        .map(|message| CatalogEntry {
            translation: message.translations.join(FORM_SEPARATOR),
            context: message.context,
            id: message.id,
        })
        .collect()
}

/// Parse `content` with `grammar`, reporting decode errors.
pub fn try_parse_po_with(grammar: &dyn PoGrammar, content: &[u8]) -> Result<Catalog> {
    Ok(flatten(grammar.messages(content)?))
}

/// Parse `content` with the default grammar, reporting decode errors.
pub fn try_parse_po(content: &[u8]) -> Result<Catalog> {
    try_parse_po_with(&Gettext, content)
}

/// Parse `content` with `grammar`.
///
/// Malformed input results in an empty catalog. Use
/// [`try_parse_po_with`] to tell this apart from a catalog without
/// messages.
pub fn parse_po_with(grammar: &dyn PoGrammar, content: &[u8]) -> Catalog {
    match try_parse_po_with(grammar, content) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!(%err, "treating malformed PO content as an empty catalog");
            Catalog::new()
        }
    }
}

/// Parse `content` with the default grammar.
///
/// Malformed input results in an empty catalog, see
/// [`parse_po_with`].
pub fn parse_po(content: &[u8]) -> Catalog {
    parse_po_with(&Gettext, content)
}
