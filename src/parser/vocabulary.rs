//! Element, attribute and type discriminator names of the JFLAP file format.

pub const TAG_STRUCTURE: &str = "structure";
pub const TAG_TYPE: &str = "type";
pub const TAG_AUTOMATON: &str = "automaton";
pub const TAG_STATE: &str = "state";
pub const TAG_TRANSITION: &str = "transition";
pub const TAG_INITIAL: &str = "initial";
pub const TAG_FINAL: &str = "final";
pub const TAG_FROM: &str = "from";
pub const TAG_TO: &str = "to";
pub const TAG_READ: &str = "read";
pub const TAG_POP: &str = "pop";
pub const TAG_PUSH: &str = "push";
pub const TAG_WRITE: &str = "write";
pub const TAG_MOVE: &str = "move";

pub const ATTR_ID: &str = "id";
pub const ATTR_NAME: &str = "name";

pub const TYPE_FA: &str = "fa";
pub const TYPE_PDA: &str = "pda";
pub const TYPE_TURING: &str = "turing";
