//! Parser for JFLAP's XML export format.
//!
//! The parser only recovers the document's structure: the automaton type
//! declaration plus the raw `state` and `transition` elements, in document
//! order. Anything semantic, like resolving state identifiers or
//! substituting sentinel symbols, is left to the model layer. Editor
//! metadata in the export (`x`/`y` coordinates and the like) is skipped.

pub(crate) mod vocabulary;

use anyhow::{Context, bail};
use log::{error, info, trace, warn};
use quick_xml::Reader;
use quick_xml::events::{self, Event};
use std::collections::HashMap;
use std::io::{BufRead, Seek};
use std::path::Path;
use std::str;
use thiserror::Error;

use vocabulary::*;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("unknown or unexpected end tag `{0}`")]
    UnexpectedEndTag(String),
    #[error("missing required attribute `{0}`")]
    MissingAttr(String),
    #[error("open tags have not been closed")]
    UnclosedTags,
    #[error("missing automaton type declaration")]
    MissingType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum JflapTag {
    Structure,
    Type,
    Automaton,
    State,
    Transition,
    StateFlag(&'static str),
    TransitionField(&'static str),
}

impl From<&JflapTag> for &'static str {
    fn from(value: &JflapTag) -> Self {
        match value {
            JflapTag::Structure => TAG_STRUCTURE,
            JflapTag::Type => TAG_TYPE,
            JflapTag::Automaton => TAG_AUTOMATON,
            JflapTag::State => TAG_STATE,
            JflapTag::Transition => TAG_TRANSITION,
            JflapTag::StateFlag(name) | JflapTag::TransitionField(name) => name,
        }
    }
}

/// Text content of a transition's child element.
///
/// The element may be missing from the transition altogether, present but
/// empty (e.g. `<read/>`), or carry text. The model layer treats an empty
/// element as "no symbol" and substitutes the variant's sentinel, while a
/// missing element is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Absent,
    Empty,
    Text(String),
}

impl Field {
    /// The symbol carried by the element, if any.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Field::Text(text) => Some(text.as_str()),
            Field::Absent | Field::Empty => None,
        }
    }
}

/// A `state` element as it appears in the document.
#[derive(Debug, Clone)]
pub struct RawState {
    pub id: String,
    pub name: String,
    pub initial: bool,
    pub r#final: bool,
}

impl RawState {
    fn parse(tag: &events::BytesStart<'_>) -> anyhow::Result<RawState> {
        let attrs = attrs(tag, &[ATTR_ID, ATTR_NAME])?;
        Ok(RawState {
            id: attrs[ATTR_ID].clone(),
            name: attrs[ATTR_NAME].clone(),
            initial: false,
            r#final: false,
        })
    }
}

/// A `transition` element as it appears in the document.
///
/// Which child elements are expected depends on the automaton type; the
/// parser records whichever are present and leaves validation to the model.
#[derive(Debug, Clone, Default)]
pub struct RawTransition {
    pub from: Field,
    pub to: Field,
    pub read: Field,
    pub pop: Field,
    pub push: Field,
    pub write: Field,
    pub r#move: Field,
}

impl RawTransition {
    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        match name {
            TAG_FROM => Some(&mut self.from),
            TAG_TO => Some(&mut self.to),
            TAG_READ => Some(&mut self.read),
            TAG_POP => Some(&mut self.pop),
            TAG_PUSH => Some(&mut self.push),
            TAG_WRITE => Some(&mut self.write),
            TAG_MOVE => Some(&mut self.r#move),
            _ => None,
        }
    }
}

/// Interns a transition child element name, so the tag stack can carry it
/// without allocating.
fn transition_field(name: &str) -> Option<&'static str> {
    [TAG_FROM, TAG_TO, TAG_READ, TAG_POP, TAG_PUSH, TAG_WRITE, TAG_MOVE]
        .into_iter()
        .find(|field| *field == name)
}

/// A parsed JFLAP document: the automaton type declaration plus the raw
/// state and transition elements, in document order.
#[derive(Debug, Default)]
pub struct JflapDocument {
    pub automaton_type: String,
    pub states: Vec<RawState>,
    pub transitions: Vec<RawTransition>,
}

impl JflapDocument {
    /// Parses the JFLAP file at `path`.
    ///
    /// Fails if the file cannot be read or its XML structure is malformed.
    pub fn parse(path: &Path) -> anyhow::Result<Self> {
        info!(target: "parser", "parsing JFLAP file '{}'", path.display());
        let mut reader = Reader::from_file(path)
            .with_context(|| format!("failed to create reader from file '{}'", path.display()))?;
        Self::parse_reader(&mut reader).with_context(|| {
            format!(
                "failed to parse JFLAP document at line {} in '{}'",
                count_lines(reader),
                path.display(),
            )
        })
    }

    /// Parses a JFLAP document from an XML reader.
    pub fn parse_reader<R: BufRead>(reader: &mut Reader<R>) -> anyhow::Result<Self> {
        let mut document = JflapDocument::default();
        let mut buf = Vec::new();
        let mut stack: Vec<JflapTag> = Vec::new();
        loop {
            match reader
                .read_event_into(&mut buf)
                .context("failed reading event")?
            {
                Event::Start(tag) => {
                    let tag_name = tag.name();
                    let tag_name = str::from_utf8(tag_name.as_ref())?;
                    trace!(target: "parser", "'{tag_name}' start tag");
                    match tag_name {
                        TAG_STRUCTURE if stack.is_empty() => {
                            stack.push(JflapTag::Structure);
                        }
                        TAG_TYPE
                            if stack
                                .last()
                                .is_some_and(|tag| *tag == JflapTag::Structure) =>
                        {
                            stack.push(JflapTag::Type);
                        }
                        TAG_AUTOMATON
                            if stack
                                .last()
                                .is_some_and(|tag| *tag == JflapTag::Structure) =>
                        {
                            stack.push(JflapTag::Automaton);
                        }
                        TAG_STATE
                            if stack
                                .last()
                                .is_some_and(|tag| *tag == JflapTag::Automaton) =>
                        {
                            document.states.push(RawState::parse(&tag)?);
                            stack.push(JflapTag::State);
                        }
                        TAG_TRANSITION
                            if stack
                                .last()
                                .is_some_and(|tag| *tag == JflapTag::Automaton) =>
                        {
                            document.transitions.push(RawTransition::default());
                            stack.push(JflapTag::Transition);
                        }
                        TAG_INITIAL
                            if stack.last().is_some_and(|tag| *tag == JflapTag::State) =>
                        {
                            let state = document.states.last_mut().expect("a state is open");
                            state.initial = true;
                            stack.push(JflapTag::StateFlag(TAG_INITIAL));
                        }
                        TAG_FINAL
                            if stack.last().is_some_and(|tag| *tag == JflapTag::State) =>
                        {
                            let state = document.states.last_mut().expect("a state is open");
                            state.r#final = true;
                            stack.push(JflapTag::StateFlag(TAG_FINAL));
                        }
                        _ => {
                            match transition_field(tag_name) {
                                Some(field)
                                    if stack
                                        .last()
                                        .is_some_and(|tag| *tag == JflapTag::Transition) =>
                                {
                                    let transition = document
                                        .transitions
                                        .last_mut()
                                        .expect("a transition is open");
                                    let slot = transition
                                        .field_mut(field)
                                        .expect("known transition field");
                                    if *slot == Field::Absent {
                                        *slot = Field::Empty;
                                    }
                                    stack.push(JflapTag::TransitionField(field));
                                }
                                // Unknown tag: skip till matching end tag
                                _ => {
                                    warn!(target: "parser", "unknown or unexpected tag '{tag_name}', skipping");
                                    reader.read_to_end_into(
                                        tag.to_end().into_owned().name(),
                                        &mut buf,
                                    )?;
                                }
                            }
                        }
                    }
                }
                Event::End(tag) => {
                    let tag_name = tag.name();
                    let tag_name = str::from_utf8(tag_name.as_ref())?;
                    if stack.pop().is_some_and(|tag| <&str>::from(&tag) == tag_name) {
                        trace!(target: "parser", "'{tag_name}' end tag");
                    } else {
                        error!(target: "parser", "unexpected end tag '{tag_name}'");
                        bail!(ParserError::UnexpectedEndTag(tag_name.to_string()));
                    }
                }
                Event::Empty(tag) => {
                    let tag_name = tag.name();
                    let tag_name = str::from_utf8(tag_name.as_ref())?;
                    trace!(target: "parser", "'{tag_name}' empty tag");
                    match tag_name {
                        TAG_STATE
                            if stack
                                .last()
                                .is_some_and(|tag| *tag == JflapTag::Automaton) =>
                        {
                            document.states.push(RawState::parse(&tag)?);
                        }
                        TAG_INITIAL
                            if stack.last().is_some_and(|tag| *tag == JflapTag::State) =>
                        {
                            let state = document.states.last_mut().expect("a state is open");
                            state.initial = true;
                        }
                        TAG_FINAL
                            if stack.last().is_some_and(|tag| *tag == JflapTag::State) =>
                        {
                            let state = document.states.last_mut().expect("a state is open");
                            state.r#final = true;
                        }
                        _ => {
                            match transition_field(tag_name) {
                                Some(field)
                                    if stack
                                        .last()
                                        .is_some_and(|tag| *tag == JflapTag::Transition) =>
                                {
                                    let transition = document
                                        .transitions
                                        .last_mut()
                                        .expect("a transition is open");
                                    let slot = transition
                                        .field_mut(field)
                                        .expect("known transition field");
                                    if *slot == Field::Absent {
                                        *slot = Field::Empty;
                                    }
                                }
                                _ => {
                                    warn!(target: "parser", "unknown or unexpected tag '{tag_name}', skipping");
                                }
                            }
                        }
                    }
                }
                Event::Text(text) => match stack.last() {
                    Some(JflapTag::Type) => {
                        document.automaton_type = text.unescape()?.trim().to_string();
                    }
                    Some(JflapTag::TransitionField(field)) => {
                        let value = text.unescape()?.into_owned();
                        let transition = document
                            .transitions
                            .last_mut()
                            .expect("a transition is open");
                        *transition.field_mut(field).expect("known transition field") =
                            Field::Text(value);
                    }
                    // Whitespace between elements
                    _ => continue,
                },
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => continue,
                Event::CData(_) => continue,
                // exits the loop when reaching end of file
                Event::Eof => {
                    if !stack.is_empty() {
                        bail!(ParserError::UnclosedTags);
                    }
                    break;
                }
            }
            // if we don't keep a borrow elsewhere, we can clear the buffer to keep memory usage low
            buf.clear();
        }
        if document.automaton_type.is_empty() {
            error!(target: "parser", "document has no automaton type declaration");
            bail!(ParserError::MissingType);
        }
        info!(
            target: "parser",
            "parsed `{}` document with {} state(s) and {} transition(s)",
            document.automaton_type,
            document.states.len(),
            document.transitions.len(),
        );
        Ok(document)
    }
}

fn attrs(
    tag: &events::BytesStart<'_>,
    keys: &[&str],
) -> anyhow::Result<HashMap<String, String>> {
    let mut attrs = HashMap::new();
    for attr in tag.attributes() {
        let attr = attr?;
        let key = String::from_utf8(attr.key.into_inner().to_vec())?;
        if keys.contains(&key.as_str()) {
            let val = attr.unescape_value()?.into_owned();
            attrs.insert(key, val);
        } else {
            warn!(target: "parser", "ignoring unknown attribute '{key}'");
        }
    }
    for key in keys {
        if !attrs.contains_key(*key) {
            error!(target: "parser", "missing required attribute '{key}'");
            bail!(ParserError::MissingAttr(key.to_string()));
        }
    }
    Ok(attrs)
}

fn count_lines<R: BufRead + Seek>(mut reader: Reader<R>) -> usize {
    let end_pos = reader.buffer_position();
    reader.get_mut().rewind().unwrap();
    reader.into_inner().take(end_pos).lines().count()
}
