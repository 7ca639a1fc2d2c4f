//! Argument registry and parser
//!
//! The driver declares its options up front ([`ArgRegistry::option`],
//! [`ArgRegistry::flag`]), then hands the raw process argument vector to
//! [`ArgRegistry::parse`]. Parsed values are read back with the typed
//! accessor [`ArgRegistry::get`], and `required` constraints are checked
//! with [`ArgRegistry::validate_required`].
//!
//! The registry is two-phase: declarations first, then a single `parse`
//! followed by any number of reads. Registering after `parse` is possible
//! but unsupported.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::errors::{NvmcError, Result};

/// Required-ness of a declared option.
///
/// Modeled as a tagged variant rather than an optional boolean so that
/// "not required" and "required but not yet seen" cannot be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Presence is never checked.
    Optional,
    /// Presence is checked by [`ArgRegistry::validate_required`]; the flag
    /// flips to true when the option's token is observed during parsing.
    Required { satisfied: bool },
}

/// One declared option: the match token, its help text, its string-encoded
/// default, and whether it consumes a following value token.
#[derive(Debug, Clone)]
struct OptionSpec {
    name: String,
    description: String,
    default: String,
    requirement: Requirement,
    takes_value: bool,
}

/// Decode a string-encoded option value into a concrete type.
///
/// Supported grammars:
/// - `String` / `PathBuf`: identity
/// - `bool`: `1`, `0`, `true`, `false`
/// - integers and floats: the standard `FromStr` grammar
pub trait FromOptionValue: Sized {
    /// Human-readable type name used in decode errors.
    const KIND: &'static str;

    /// Returns `None` when `raw` does not decode.
    fn decode(raw: &str) -> Option<Self>;
}

impl FromOptionValue for String {
    const KIND: &'static str = "string";

    fn decode(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromOptionValue for PathBuf {
    const KIND: &'static str = "path";

    fn decode(raw: &str) -> Option<Self> {
        Some(PathBuf::from(raw))
    }
}

impl FromOptionValue for bool {
    const KIND: &'static str = "boolean";

    fn decode(raw: &str) -> Option<Self> {
        match raw {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        }
    }
}

macro_rules! impl_from_option_value {
    ($kind:literal => $($ty:ty),+) => {
        $(
            impl FromOptionValue for $ty {
                const KIND: &'static str = $kind;

                fn decode(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )+
    };
}

impl_from_option_value!("integer" => i32, i64, u32, u64, usize);
impl_from_option_value!("float" => f32, f64);

/// The argument registry.
///
/// Owns the declared options and, after [`parse`](Self::parse), the resolved
/// name-to-value mapping. Defaults are seeded at registration time so every
/// declared option always resolves to something.
#[derive(Debug, Default)]
pub struct ArgRegistry {
    specs: Vec<OptionSpec>,
    resolved: HashMap<String, String>,
    program_name: String,
}

impl ArgRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value option: its token consumes exactly one following
    /// token as the value.
    ///
    /// Duplicate names are rejected with [`NvmcError::DuplicateOption`].
    pub fn option(
        &mut self,
        name: &str,
        description: &str,
        default: &str,
        required: bool,
    ) -> Result<()> {
        self.insert(OptionSpec {
            name: name.to_string(),
            description: description.to_string(),
            default: default.to_string(),
            requirement: requirement_for(required),
            takes_value: true,
        })
    }

    /// Register a boolean flag: presence alone sets it, no value token is
    /// consumed. The default is stored as `"1"` or `"0"`.
    pub fn flag(
        &mut self,
        name: &str,
        description: &str,
        default_on: bool,
        required: bool,
    ) -> Result<()> {
        self.insert(OptionSpec {
            name: name.to_string(),
            description: description.to_string(),
            default: if default_on { "1" } else { "0" }.to_string(),
            requirement: requirement_for(required),
            takes_value: false,
        })
    }

    fn insert(&mut self, spec: OptionSpec) -> Result<()> {
        if self.specs.iter().any(|s| s.name == spec.name) {
            return Err(NvmcError::DuplicateOption { option: spec.name });
        }
        self.resolved.insert(spec.name.clone(), spec.default.clone());
        self.specs.push(spec);
        Ok(())
    }

    /// Parse the full process argument vector.
    ///
    /// Element 0 is recorded as the program name; later tokens are matched
    /// against the declarations in registration order. A value option whose
    /// token is the last element fails with [`NvmcError::MissingValue`] and
    /// parsing stops there. Tokens matching no declaration are ignored on
    /// purpose; the registry is permissive about stray input.
    pub fn parse(&mut self, args: &[String]) -> Result<()> {
        if let Some(name) = args.first() {
            self.program_name = name.clone();
        }

        let mut index = 1;
        while index < args.len() {
            let token = &args[index];
            if let Some(spec) = self.specs.iter_mut().find(|s| s.name == *token) {
                if spec.takes_value {
                    let Some(value) = args.get(index + 1) else {
                        return Err(NvmcError::MissingValue {
                            option: spec.name.clone(),
                        });
                    };
                    self.resolved.insert(spec.name.clone(), value.clone());
                    index += 1;
                } else {
                    self.resolved.insert(spec.name.clone(), "1".to_string());
                }
                if let Requirement::Required { satisfied } = &mut spec.requirement {
                    *satisfied = true;
                }
            }
            index += 1;
        }
        Ok(())
    }

    /// Check that every required option was observed during parsing.
    ///
    /// All unsatisfied required options are reported at once, in
    /// registration order.
    pub fn validate_required(&self) -> Result<()> {
        let missing: Vec<String> = self
            .specs
            .iter()
            .filter(|s| s.requirement == Requirement::Required { satisfied: false })
            .map(|s| s.name.clone())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(NvmcError::MissingRequired { options: missing })
        }
    }

    /// Read the resolved value of `name`, decoded as `T`.
    ///
    /// Returns `Ok(None)` when `name` was never registered. A stored value
    /// that does not decode is an explicit [`NvmcError::Decode`] error,
    /// never a silent default.
    pub fn get<T: FromOptionValue>(&self, name: &str) -> Result<Option<T>> {
        let Some(raw) = self.resolved.get(name) else {
            return Ok(None);
        };
        match T::decode(raw) {
            Some(value) => Ok(Some(value)),
            None => Err(NvmcError::Decode {
                option: name.to_string(),
                value: raw.clone(),
                target: T::KIND,
            }),
        }
    }

    /// The invoking program's name, captured from argv[0] during parsing.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Render the help text: a usage header plus one line per declared
    /// option with its required/optional marker.
    pub fn render_help(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Usage: {} [options]", self.program_name);
        let _ = writeln!(out, "Options:");
        for spec in &self.specs {
            let marker = match spec.requirement {
                Requirement::Optional => "<optional>",
                Requirement::Required { .. } => "<required>",
            };
            let _ = writeln!(out, "  {} {} {}", spec.name, spec.description, marker);
        }
        out
    }

    /// Render every resolved name/value pair in registration order.
    /// Debug aid only.
    pub fn dump_resolved(&self) -> String {
        let mut out = String::new();
        for spec in &self.specs {
            if let Some(value) = self.resolved.get(&spec.name) {
                let _ = writeln!(out, "{} = {}", spec.name, value);
            }
        }
        out
    }
}

fn requirement_for(required: bool) -> Requirement {
    if required {
        Requirement::Required { satisfied: false }
    } else {
        Requirement::Optional
    }
}
