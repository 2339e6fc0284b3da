//! Per-provider line patterns.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::DomainError;

/// Standard React hooks recognised by the hooks tree.
pub const STANDARD_HOOKS: &[&str] = &[
    "useState",
    "useEffect",
    "useContext",
    "useReducer",
    "useCallback",
    "useMemo",
    "useRef",
    "useImperativeHandle",
    "useLayoutEffect",
    "useDebugValue",
    "useDeferredValue",
    "useTransition",
    "useId",
    "useSyncExternalStore",
    "useInsertionEffect",
    "useOptimistic",
    "useActionState",
    "useFormStatus",
];

// A tag opens a line or follows whitespace or an expression delimiter, so
// type arguments such as `useState<User>` are not tags.
static COMPONENT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s({\[,>?:])<([A-Z][A-Za-z0-9]*)").expect("component regex is valid")
});

static HOOK_CALL: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = STANDARD_HOOKS.join("|");
    Regex::new(&format!(r"\b(?:{alternatives})\s*(?:<[^>]*>)?\s*\(")).expect("hook regex is valid")
});

static PROCEDURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z_$][\w$]*\s*:\s*(?:[A-Za-z_$][\w$]*[pP]rocedure|procedure)\b")
        .expect("procedure regex is valid")
});

/// The line pattern a scanning provider applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanPattern {
    /// JSX-like tag openings with a capitalised name: `<Button`.
    Components,
    /// Calls to one of [`STANDARD_HOOKS`]: `useState(0)`.
    Hooks,
    /// tRPC router entries: `getAll: publicProcedure`.
    Routes,
}

impl ScanPattern {
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::Components => &COMPONENT_TAG,
            Self::Hooks => &HOOK_CALL,
            Self::Routes => &PROCEDURE,
        }
    }

    /// Label for `line` if it matches.
    ///
    /// Components are labelled with the captured tag name, everything else
    /// with the trimmed line.
    pub fn match_line(self, line: &str) -> Option<String> {
        match self {
            Self::Components => COMPONENT_TAG
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|tag| tag.as_str().to_string()),
            Self::Hooks | Self::Routes => self
                .regex()
                .is_match(line)
                .then(|| line.trim().to_string()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Hooks => "hooks",
            Self::Routes => "routes",
        }
    }
}

impl fmt::Display for ScanPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four trees a workspace is summarised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Files,
    Components,
    Hooks,
    Routes,
}

impl TreeKind {
    pub const ALL: [TreeKind; 4] = [Self::Files, Self::Components, Self::Hooks, Self::Routes];

    /// Line pattern for scanning trees; `None` for the files tree, which
    /// groups by file name instead.
    pub const fn pattern(self) -> Option<ScanPattern> {
        match self {
            Self::Files => None,
            Self::Components => Some(ScanPattern::Components),
            Self::Hooks => Some(ScanPattern::Hooks),
            Self::Routes => Some(ScanPattern::Routes),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Components => "components",
            Self::Hooks => "hooks",
            Self::Routes => "routes",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "files" | "file" => Ok(Self::Files),
            "components" | "component" => Ok(Self::Components),
            "hooks" | "hook" => Ok(Self::Hooks),
            "routes" | "route" | "procedures" => Ok(Self::Routes),
            _ => Err(DomainError::UnknownTreeKind(s.to_string())),
        }
    }
}
