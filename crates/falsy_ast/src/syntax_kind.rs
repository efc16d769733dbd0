//! NodeKind and DeclarationKind enums with their display names.
//!
//! Both enumerations are closed. The name mappings are total matches, so a
//! value that exists can always be named; raw discriminants coming from
//! outside are checked by the `TryFrom` conversions, which reject anything
//! outside the set with [`AstError::InvalidEnumValue`].

use crate::error::AstError;
use std::fmt;
use std::str::FromStr;

/// The kind of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum NodeKind {
    Program = 1,
    VariableDeclaration = 2,
    VariableDeclarator = 3,
    Identifier = 4,
    Expression = 5,
    Literal = 6,
}

impl NodeKind {
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Program,
        NodeKind::VariableDeclaration,
        NodeKind::VariableDeclarator,
        NodeKind::Identifier,
        NodeKind::Expression,
        NodeKind::Literal,
    ];

    /// Canonical display name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::Identifier => "Identifier",
            NodeKind::Expression => "Expression",
            NodeKind::Literal => "Literal",
        }
    }
}

/// Free-function form of [`NodeKind::name`].
#[inline]
pub fn kind_name(kind: NodeKind) -> &'static str {
    kind.name()
}

impl TryFrom<u16> for NodeKind {
    type Error = AstError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| *kind as u16 == value)
            .ok_or_else(|| AstError::invalid("NodeKind", value))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The keyword a variable declaration was introduced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DeclarationKind {
    Let = 0,
    Const = 1,
    Var = 2,
}

impl DeclarationKind {
    pub const ALL: [DeclarationKind; 3] = [
        DeclarationKind::Let,
        DeclarationKind::Const,
        DeclarationKind::Var,
    ];

    /// Keyword text of this declaration kind.
    pub fn keyword(self) -> &'static str {
        match self {
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
            DeclarationKind::Var => "var",
        }
    }
}

/// Free-function form of [`DeclarationKind::keyword`].
#[inline]
pub fn declaration_keyword(kind: DeclarationKind) -> &'static str {
    kind.keyword()
}

impl TryFrom<u8> for DeclarationKind {
    type Error = AstError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DeclarationKind::Let),
            1 => Ok(DeclarationKind::Const),
            2 => Ok(DeclarationKind::Var),
            _ => Err(AstError::invalid("DeclarationKind", value)),
        }
    }
}

impl FromStr for DeclarationKind {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "let" => Ok(DeclarationKind::Let),
            "const" => Ok(DeclarationKind::Const),
            "var" => Ok(DeclarationKind::Var),
            _ => Err(AstError::invalid("DeclarationKind", s)),
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_kind_names_are_non_empty_and_stable() {
        for kind in NodeKind::ALL {
            let name = kind_name(kind);
            assert!(!name.is_empty());
            assert_eq!(name, kind_name(kind));
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn test_kind_names_are_distinct() {
        let names: HashSet<_> = NodeKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), NodeKind::ALL.len());
        assert_eq!(NodeKind::VariableDeclarator.name(), "VariableDeclarator");
    }

    #[test]
    fn test_declaration_keywords_one_to_one() {
        let keywords: Vec<_> = DeclarationKind::ALL.iter().map(|k| declaration_keyword(*k)).collect();
        assert_eq!(keywords, vec!["let", "const", "var"]);
        for kind in DeclarationKind::ALL {
            assert_eq!(kind.keyword().parse::<DeclarationKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_node_kind_try_from() {
        assert_eq!(NodeKind::try_from(1u16), Ok(NodeKind::Program));
        assert_eq!(NodeKind::try_from(6u16), Ok(NodeKind::Literal));
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::try_from(kind as u16), Ok(kind));
        }
    }

    #[test]
    fn test_invalid_enum_values_are_rejected() {
        let err = NodeKind::try_from(0u16).unwrap_err();
        assert_eq!(
            err,
            AstError::InvalidEnumValue {
                enum_name: "NodeKind",
                value: "0".to_string(),
            }
        );
        assert!(NodeKind::try_from(7u16).is_err());
        assert!(DeclarationKind::try_from(3u8).is_err());
        assert_eq!(
            "using".parse::<DeclarationKind>().unwrap_err().to_string(),
            "invalid DeclarationKind value: using"
        );
    }
}
