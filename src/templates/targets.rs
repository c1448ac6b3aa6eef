//! Built-in output targets.
//!
//! Each target is a mustache template rendered against
//! `{ "sprites": [SpriteDescriptor, ...] }`. The repeated block opens on the
//! same line as its first output line and ends with a blank line, so
//! consecutive sprites are separated by exactly one empty line.
//!
//! ```ignore
//! use png2src::templates::TemplateId;
//!
//! let target = TemplateId::from_alias("rs").unwrap_or_default();
//! assert_eq!(target, TemplateId::Rust);
//! println!("{}", target.body());
//! ```

/// A built-in target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TemplateId {
    #[default]
    AssemblyScript,
    C,
    D,
    Go,
    Nim,
    Odin,
    Rust,
    Zig,
}

impl TemplateId {
    /// Every built-in target, in listing order.
    pub const ALL: [TemplateId; 8] = [
        Self::AssemblyScript,
        Self::C,
        Self::D,
        Self::Go,
        Self::Nim,
        Self::Odin,
        Self::Rust,
        Self::Zig,
    ];

    /// Look up a target by name or short alias (`as`, `rs`), ignoring case.
    pub fn from_alias(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "as" | "assemblyscript" => Some(Self::AssemblyScript),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            "go" => Some(Self::Go),
            "nim" => Some(Self::Nim),
            "odin" => Some(Self::Odin),
            "rs" | "rust" => Some(Self::Rust),
            "zig" => Some(Self::Zig),
            _ => None,
        }
    }

    /// Canonical target name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AssemblyScript => "assemblyscript",
            Self::C => "c",
            Self::D => "d",
            Self::Go => "go",
            Self::Nim => "nim",
            Self::Odin => "odin",
            Self::Rust => "rust",
            Self::Zig => "zig",
        }
    }

    /// One-line description for `--list-targets`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::AssemblyScript => "AssemblyScript memory.data<u8> arrays",
            Self::C => "C #defines and uint8_t arrays",
            Self::D => "D enums and immutable ubyte arrays",
            Self::Go => "Go consts and byte arrays",
            Self::Nim => "Nim consts and uint8 arrays",
            Self::Odin => "Odin snake_case constants and u8 arrays",
            Self::Rust => "Rust SCREAMING_SNAKE_CASE consts and u8 arrays",
            Self::Zig => "Zig consts and u8 arrays",
        }
    }

    /// Template text for this target.
    pub fn body(&self) -> &'static str {
        match self {
            Self::AssemblyScript => ASSEMBLYSCRIPT,
            Self::C => C,
            Self::D => D,
            Self::Go => GO,
            Self::Nim => NIM,
            Self::Odin => ODIN,
            Self::Rust => RUST,
            Self::Zig => ZIG,
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const ASSEMBLYSCRIPT: &str = "\
{{#sprites}}// {{name}}
const {{name}}Width = {{width}};
const {{name}}Height = {{height}};
const {{name}}Flags = {{flags}}; // {{flagsHumanReadable}}
const {{name}} = memory.data<u8>([ {{bytes}} ]);

{{/sprites}}";

const C: &str = "\
{{#sprites}}// {{name}}
#define {{name}}Width {{width}}
#define {{name}}Height {{height}}
#define {{name}}Flags {{flagsHumanReadable}}
const uint8_t {{name}}[{{length}}] = { {{bytes}} };

{{/sprites}}";

const D: &str = "\
{{#sprites}}// {{name}}
enum {{name}}Width = {{width}};
enum {{name}}Height = {{height}};
enum {{name}}Flags = {{flags}}; // {{flagsHumanReadable}}
immutable ubyte[] {{name}} = [ {{bytes}} ];

{{/sprites}}";

const GO: &str = "\
{{#sprites}}// {{name}}
const {{name}}Width = {{width}}
const {{name}}Height = {{height}}
const {{name}}Flags = {{flags}} // {{flagsHumanReadable}}
var {{name}} = [{{length}}]byte { {{bytes}} }

{{/sprites}}";

const NIM: &str = "\
{{#sprites}}# {{name}}
const {{name}}Width = {{width}}
const {{name}}Height = {{height}}
const {{name}}Flags = {{flagsHumanReadable}}
var {{name}}: array[{{length}}, uint8] = [{{firstByte}}'u8,{{restBytes}}]

{{/sprites}}";

const ODIN: &str = "\
{{#sprites}}// {{name}}
{{odinName}}_width : u32 : {{width}}
{{odinName}}_height : u32 : {{height}}
{{odinName}}_flags : w4.Blit_Flags : {{odinFlags}} // {{flagsHumanReadable}}
{{odinName}} := [{{length}}]u8{ {{bytes}} }

{{/sprites}}";

const RUST: &str = "\
{{#sprites}}// {{name}}
const {{rustName}}_WIDTH: u32 = {{width}};
const {{rustName}}_HEIGHT: u32 = {{height}};
const {{rustName}}_FLAGS: u32 = {{flags}}; // {{flagsHumanReadable}}
const {{rustName}}: [u8; {{length}}] = [ {{bytes}} ];

{{/sprites}}";

const ZIG: &str = "\
{{#sprites}}// {{name}}
const {{name}}Width = {{width}};
const {{name}}Height = {{height}};
const {{name}}Flags = {{flags}}; // {{flagsHumanReadable}}
const {{name}} = [{{length}}]u8{ {{bytes}} };

{{/sprites}}";
