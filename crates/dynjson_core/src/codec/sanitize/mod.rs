//! Turning arbitrary object keys into record field names.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::codec::{CodecError, Result};


/// Longest identifier the default sanitizer produces.
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Reserved words that are never valid field names.
pub const KEYWORDS: &[&str] = &[
	"break",
	"case",
	"catch",
	"classdef",
	"continue",
	"do",
	"else",
	"elseif",
	"end",
	"end_try_catch",
	"end_unwind_protect",
	"endclassdef",
	"endenumeration",
	"endevents",
	"endfor",
	"endfunction",
	"endif",
	"endmethods",
	"endparfor",
	"endproperties",
	"endspmd",
	"endswitch",
	"endwhile",
	"enumeration",
	"events",
	"for",
	"function",
	"global",
	"if",
	"methods",
	"otherwise",
	"parfor",
	"persistent",
	"properties",
	"return",
	"spmd",
	"switch",
	"try",
	"until",
	"unwind_protect",
	"unwind_protect_cleanup",
	"while",
];

/// How the default sanitizer treats characters that are not allowed in identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementStyle {
	/// Replace each invalid character with `_`.
	#[default]
	Underscore,
	/// Drop invalid characters.
	Delete,
	/// Replace each invalid character with its `0xHH` code.
	Hex,
}

impl std::str::FromStr for ReplacementStyle {
	type Err = CodecError;

	fn from_str(value: &str) -> Result<Self> {
		match value.to_ascii_lowercase().as_str() {
			"underscore" => Ok(Self::Underscore),
			"delete" => Ok(Self::Delete),
			"hex" => Ok(Self::Hex),
			_ => Err(CodecError::invalid_arguments(format!(
				"ReplacementStyle must be 'underscore', 'delete' or 'hex', got '{value}'"
			))),
		}
	}
}

/// Options forwarded verbatim from decode options to the sanitizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct SanitizeOptions {
	/// Treatment of invalid characters.
	pub replacement_style: ReplacementStyle,
	/// Text prepended to names that do not start with a letter, and to keywords.
	pub prefix: String,
}

impl Default for SanitizeOptions {
	fn default() -> Self {
		Self {
			replacement_style: ReplacementStyle::Underscore,
			prefix: "x".to_owned(),
		}
	}
}

/// Strategy mapping an object key to a record field name.
pub trait IdentifierSanitizer {
	/// Produce the field name for `name`.
	fn sanitize(&self, name: &str, options: &SanitizeOptions) -> String;
}

impl<F> IdentifierSanitizer for F
where
	F: Fn(&str, &SanitizeOptions) -> String,
{
	fn sanitize(&self, name: &str, options: &SanitizeOptions) -> String {
		self(name, options)
	}
}

/// Sanitizer that returns keys unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl IdentifierSanitizer for Identity {
	fn sanitize(&self, name: &str, _options: &SanitizeOptions) -> String {
		name.to_owned()
	}
}

/// Default sanitizer producing valid identifiers.
///
/// Valid names pass through. Otherwise: surrounding whitespace is trimmed, keywords get the prefix and an
/// upper-cased first letter, whitespace before a letter is removed and the letter upper-cased, remaining invalid
/// characters follow the replacement style, names not starting with a letter get the prefix, and the result is
/// cut to [`MAX_IDENTIFIER_LEN`] characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeValidName;

impl IdentifierSanitizer for MakeValidName {
	fn sanitize(&self, name: &str, options: &SanitizeOptions) -> String {
		if is_valid_identifier(name) {
			return name.to_owned();
		}

		let trimmed = name.trim();
		if is_keyword(trimmed) {
			return truncate(capitalized_with_prefix(trimmed, &options.prefix));
		}

		let mut out = String::with_capacity(trimmed.len());
		let mut chars = trimmed.chars().peekable();
		while let Some(ch) = chars.next() {
			if ch.is_whitespace() {
				let mut run = vec![ch];
				while let Some(&next) = chars.peek() {
					if !next.is_whitespace() {
						break;
					}
					run.push(next);
					chars.next();
				}
				match chars.peek().copied() {
					Some(next) if next.is_ascii_alphabetic() => {
						out.push(next.to_ascii_uppercase());
						chars.next();
					}
					_ => run.into_iter().for_each(|ch| replace_invalid(&mut out, ch, options.replacement_style)),
				}
				continue;
			}
			if is_identifier_char(ch) {
				out.push(ch);
			} else {
				replace_invalid(&mut out, ch, options.replacement_style);
			}
		}

		if !out.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
			out.insert_str(0, &options.prefix);
		}
		truncate(out)
	}
}

/// True when `name` can be used as a field name without changes.
pub fn is_valid_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	let Some(first) = chars.next() else {
		return false;
	};
	first.is_ascii_alphabetic() && chars.all(is_identifier_char) && name.len() <= MAX_IDENTIFIER_LEN && !is_keyword(name)
}

/// True for reserved words.
pub fn is_keyword(name: &str) -> bool {
	KEYWORDS.contains(&name)
}

fn is_identifier_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_'
}

fn replace_invalid(out: &mut String, ch: char, style: ReplacementStyle) {
	match style {
		ReplacementStyle::Underscore => out.push('_'),
		ReplacementStyle::Delete => {}
		ReplacementStyle::Hex => {
			let _ = write!(out, "0x{:02X}", u32::from(ch));
		}
	}
}

fn capitalized_with_prefix(word: &str, prefix: &str) -> String {
	let mut out = String::with_capacity(prefix.len() + word.len());
	out.push_str(prefix);
	let mut chars = word.chars();
	if let Some(first) = chars.next() {
		out.push(first.to_ascii_uppercase());
	}
	out.extend(chars);
	out
}

fn truncate(name: String) -> String {
	if name.chars().count() <= MAX_IDENTIFIER_LEN {
		return name;
	}
	name.chars().take(MAX_IDENTIFIER_LEN).collect()
}
