use std::fmt;
use std::rc::Rc;

use crate::world::World;

/// Signature of an action run when the play head lands on a paragraph.
pub type ParagraphAction = dyn Fn(&mut World);

/// Where the play head goes after a paragraph or response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Instruction {
    /// The following paragraph.
    #[default]
    Next,
    /// The preceding paragraph, or the first if already there.
    Previous,
    /// The same paragraph again.
    Repeat,
    /// The first paragraph.
    First,
    /// The last paragraph.
    Last,
    /// Jump relative to the current paragraph.
    Offset(isize),
    /// Jump to an absolute index. Out-of-range indices end the conversation.
    GoTo(isize),
    /// Jump to the paragraph with this name. Unknown names end the conversation.
    ToName(String),
    /// End the conversation.
    End,
}

impl Instruction {
    /// Resolve to a paragraph index. A negative or out-of-range result means
    /// the conversation ends.
    pub fn target(&self, current: usize, paragraphs: &[Paragraph]) -> isize {
        let Ok(current) = isize::try_from(current) else {
            return -1;
        };
        match self {
            Instruction::Next => current.checked_add(1).unwrap_or(-1),
            Instruction::Previous => current.saturating_sub(1).max(0),
            Instruction::Repeat => current,
            Instruction::First => 0,
            Instruction::Last => isize::try_from(paragraphs.len()).map_or(-1, |len| len - 1),
            Instruction::Offset(offset) => current.checked_add(*offset).unwrap_or(-1),
            Instruction::GoTo(index) => *index,
            Instruction::ToName(name) => paragraphs
                .iter()
                .position(|p| p.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(name)))
                .and_then(|i| isize::try_from(i).ok())
                .unwrap_or(-1),
            Instruction::End => -1,
        }
    }
}

/// A line the player can say in reply to a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// What the player says.
    pub line: String,
    /// Where to go next. `None` continues with the following paragraph.
    pub instruction: Option<Instruction>,
}

impl Response {
    /// Create a response that continues with the following paragraph.
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            instruction: None,
        }
    }

    /// Set where the response leads.
    pub fn with_instruction(mut self, instruction: Instruction) -> Self {
        self.instruction = Some(instruction);
        self
    }
}

/// One beat of dialogue.
#[derive(Clone)]
pub struct Paragraph {
    /// What the other participant says.
    pub line: String,
    /// Optional name, the target of [`Instruction::ToName`].
    pub name: Option<String>,
    /// Where to go when advanced without a response. `None` means
    /// [`Instruction::Next`].
    pub instruction: Option<Instruction>,
    /// Replies offered to the player.
    pub responses: Vec<Response>,
    action: Option<Rc<ParagraphAction>>,
}

impl Paragraph {
    /// Create a paragraph.
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            name: None,
            instruction: None,
            responses: Vec::new(),
            action: None,
        }
    }

    /// Name the paragraph.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set where the paragraph leads when advanced.
    pub fn with_instruction(mut self, instruction: Instruction) -> Self {
        self.instruction = Some(instruction);
        self
    }

    /// Offer a response.
    pub fn with_response(mut self, response: Response) -> Self {
        self.responses.push(response);
        self
    }

    /// Run an action when the play head lands here.
    pub fn with_action(mut self, action: impl Fn(&mut World) + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    /// The paragraph's action, if any.
    pub fn action(&self) -> Option<Rc<ParagraphAction>> {
        self.action.clone()
    }
}

impl fmt::Debug for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paragraph")
            .field("line", &self.line)
            .field("name", &self.name)
            .field("instruction", &self.instruction)
            .field("responses", &self.responses)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
