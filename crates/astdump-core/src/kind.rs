//! Closed enumeration of syntax node kinds.
//!
//! Front-ends tag nodes with strings; the tag is resolved against this set when
//! a node is rendered. Tags are accepted in snake_case (`for_each_statement`)
//! or PascalCase (`ForEachStatement`). Dumps always show the PascalCase name.

use std::fmt;

macro_rules! node_kinds {
    ($( $(#[$meta:meta])* $variant:ident ),* $(,)?) => {
        /// Kind of a syntax node.
        ///
        /// Adding a front-end node type means adding a variant here; there is no
        /// catch-all, so an unmapped tag cannot silently reach the output.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $( $(#[$meta])* $variant, )*
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$( NodeKind::$variant, )*];

            /// PascalCase name used as the dump label.
            pub fn name(self) -> &'static str {
                match self {
                    $( NodeKind::$variant => stringify!($variant), )*
                }
            }
        }
    };
}

node_kinds! {
    // Declarations
    Import,
    ClassDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    FieldDeclaration,
    ConstructorDeclaration,
    MethodDeclaration,
    FunctionDeclaration,
    Parameter,
    LocalVariableDeclaration,
    Decorator,
    Modifier,
    TypeReference,

    // Statements
    Block,
    ExpressionStatement,
    IfStatement,
    ForStatement,
    ForEachStatement,
    WhileStatement,
    DoStatement,
    SwitchStatement,
    SwitchCase,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    FinallyClause,

    // Expressions
    AssignmentExpression,
    BinaryExpression,
    UnaryExpression,
    ConditionalExpression,
    CallExpression,
    /// Explicit or implicit `this(...)` / `super(...)` invocation.
    ConstructorCall,
    NewExpression,
    LambdaExpression,
    MemberAccess,
    IndexAccess,
    ArrayLiteral,
    Identifier,
    ThisExpression,
    StringLiteral,
    NumberLiteral,
    BooleanLiteral,
    NullLiteral,
    /// Interpolated string (`f"..."`, `$"..."`, template literals).
    FormatString,

    // Trivia
    Comment,
}

impl NodeKind {
    /// Resolve a front-end tag. Returns `None` for tags outside the enumeration.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let name = pascal_name(tag.trim())?;
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// snake_case spelling of the kind, as used in tree documents.
    pub fn tag(self) -> String {
        let name = self.name();
        let mut tag = String::with_capacity(name.len() + 4);
        for (i, c) in name.char_indices() {
            if c.is_ascii_uppercase() && i > 0 {
                tag.push('_');
            }
            tag.push(c.to_ascii_lowercase());
        }
        tag
    }

    /// Declarations are the nodes a root marker can attach to.
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            NodeKind::ClassDeclaration
                | NodeKind::InterfaceDeclaration
                | NodeKind::EnumDeclaration
                | NodeKind::FieldDeclaration
                | NodeKind::ConstructorDeclaration
                | NodeKind::MethodDeclaration
                | NodeKind::FunctionDeclaration
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize a tag to PascalCase.
///
/// PascalCase input passes through; snake_case words are capitalized and joined.
/// Anything else (empty words, non-ASCII) yields `None`.
fn pascal_name(tag: &str) -> Option<String> {
    if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let starts_upper = tag.chars().next()?.is_ascii_uppercase();
    let has_lower = tag.chars().any(|c| c.is_ascii_lowercase());
    if starts_upper && has_lower && !tag.contains('_') {
        return Some(tag.to_owned());
    }

    let mut name = String::with_capacity(tag.len());
    for word in tag.split('_') {
        let mut chars = word.chars();
        let first = chars.next()?;
        name.push(first.to_ascii_uppercase());
        name.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
    Some(name)
}
